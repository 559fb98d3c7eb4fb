//! Hex strategy opponent.
//!
//! Re-exports the `ai-*` building blocks and wires them into a playable opponent:
//! configuration, the [`GameWorld`] collaborator trait, concrete unit actions, goals per
//! tactical order and the per-turn [`Director`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub use ai_core as core;
pub use ai_goap as goap;
pub use ai_grid as grid;
pub use ai_influence as influence;
pub use ai_nav as nav;
pub use ai_strategy as strategy;
pub use ai_tools as tools;

pub mod actions;
pub mod config;
pub mod director;
pub mod facts;
pub mod goals;
pub mod scenario;
pub mod targets;
pub mod world;

pub use config::{ActionRules, AiConfig, ConfigError};
pub use director::{DecisionReport, Director};
pub use scenario::Scenario;
pub use world::{GameWorld, HexWorld};
