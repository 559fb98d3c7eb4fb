//! Hex grid world accessor.
//!
//! The AI treats the board as an external collaborator: it reads cells through [`GridView`],
//! mutates them through [`GridMut`], and addresses dense per-cell buffers through
//! [`GridIndex`]. [`HexGrid`] is the in-memory reference board used by tests and the
//! headless simulation.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod cell;
pub mod grid;
pub mod hex;
pub mod index;
pub mod ledger;
pub mod unit;

pub use cell::{BuildType, Cell, Occupant, PlayerId, ResourceTier, Terrain};
pub use grid::{neighbors, GridMut, GridView, HexGrid};
pub use hex::HexCoord;
pub use index::GridIndex;
pub use ledger::{Ledger, LedgerError, Resources};
pub use unit::{Unit, UnitId, UnitKind, UnitStats};
