use crate::StrategyInputs;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MacroState {
    Economy,
    War,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TacticalOrder {
    EarlyExpansion,
    Development,
    Militarization,
    Assault,
    ActiveDefense,
}

impl TacticalOrder {
    pub fn name(self) -> &'static str {
        match self {
            TacticalOrder::EarlyExpansion => "early_expansion",
            TacticalOrder::Development => "development",
            TacticalOrder::Militarization => "militarization",
            TacticalOrder::Assault => "assault",
            TacticalOrder::ActiveDefense => "active_defense",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StateKind {
    Economy,
    Militarization,
    War,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    /// Switch to the given state, optionally entering it with a specific order.
    To(StateKind, Option<TacticalOrder>),
}

pub trait StrategyState {
    fn kind(&self) -> StateKind;
    fn macro_state(&self) -> MacroState;
    fn order(&self) -> TacticalOrder;

    fn enter(&mut self, inputs: &StrategyInputs, hint: Option<TacticalOrder>);

    /// Evaluate the state's rows in order. May update the current order in place.
    fn execute(&mut self, inputs: &StrategyInputs) -> Transition;

    fn exit(&mut self) {}
}
