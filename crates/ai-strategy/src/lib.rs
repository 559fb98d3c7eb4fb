//! Strategic layer: picks a macro state (economy or war) and a tactical order.
//!
//! Each macro situation is a [`StrategyState`] object with enter/execute/exit hooks.
//! [`StrategicStateMachine`] drives them, applying at most one transition per update.
//! Escalation and de-escalation use separate thresholds so the machine does not
//! flip-flop around a single threat value.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;
pub mod inputs;
pub mod machine;
pub mod state;
pub mod states;

pub use config::StrategyConfig;
pub use inputs::{military_power, EconomySignals, StrategyInputs};
pub use machine::{StrategicDecision, StrategicStateMachine};
pub use state::{MacroState, StateKind, StrategyState, TacticalOrder, Transition};
pub use states::{EconomyState, MilitarizationState, WarState};
