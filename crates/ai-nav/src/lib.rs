//! Navigation over the hex grid (threat-aware A*, world traits, and reference actions).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod actions;
pub mod pathfinder;
pub mod patrol;
pub mod world;

pub use actions::{DestinationFn, MoveToAction};
pub use pathfinder::{HexPathfinder, PathfinderConfig};
pub use patrol::FrontierPatrol;
pub use world::{NavWorldMut, NavWorldView};
