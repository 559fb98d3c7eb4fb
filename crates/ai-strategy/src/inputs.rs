use ai_grid::{PlayerId, UnitStats};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Economic judgements the strategy layer consumes but does not compute.
pub trait EconomySignals {
    fn military_to_economy_ratio(&self, player: PlayerId) -> f32;
    fn is_economy_critical(&self, player: PlayerId) -> bool;
}

/// Snapshot the state machine decides on.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StrategyInputs {
    /// Sum of the acting player's threat field.
    pub threat: f32,
    pub my_power: f32,
    pub military_ratio: f32,
    pub economy_critical: bool,
    /// Settlements including those already upgraded to cities.
    pub settlements: u32,
    pub cities: u32,
    /// Settlers in the field.
    pub expansion_units: u32,
}

impl StrategyInputs {
    /// Every settlement has been upgraded (and there is at least one).
    pub fn all_upgraded(&self) -> bool {
        self.settlements > 0 && self.cities >= self.settlements
    }
}

/// `attack + 0.1 * max_health`, summed.
pub fn military_power<'a>(units: impl IntoIterator<Item = &'a UnitStats>) -> f32 {
    units
        .into_iter()
        .map(|s| s.attack + s.max_health * 0.1)
        .sum()
}
