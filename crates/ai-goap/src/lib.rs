//! Goal-oriented action planning over `ai-core` actions.
//!
//! [`GoapPlanner`] finds the cheapest action sequence that turns a world-state into one
//! satisfying a goal; [`GoapAgent`] owns a unit's capability set and executes plans one
//! step per tick, re-checking each action right before it starts.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod plan;
pub mod planner;

pub use agent::{AgentEvent, AgentPhase, GoapAgent, StateBuilder};
pub use plan::Plan;
pub use planner::{GoapPlanner, PlanError, PlanStats};
