//! Deterministic, engine-agnostic AI kernel primitives.
//!
//! Everything above this crate (planner, executor, pathfinder, strategy) talks to
//! the game through the traits defined here.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod action;
pub mod facts;
pub mod tick;
pub mod world;

pub use action::{Action, ActionKey, ActionSpec, ActionStatus};
pub use facts::{Proposition, WorldState};
pub use tick::TickContext;
pub use world::{AgentId, WorldMut, WorldView};
