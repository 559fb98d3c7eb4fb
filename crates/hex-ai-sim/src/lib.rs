//! Headless skirmish runner: the host-side economy the AI only observes through
//! signals, and the turn loop that drives one [`hex_ai::Director`] per player.

#![forbid(unsafe_code)]

pub mod economy;
pub mod skirmish;

pub use economy::{economy_signals, income, EconomyRules};
pub use skirmish::{PlayerSummary, Skirmish, SkirmishSummary};
