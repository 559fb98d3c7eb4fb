#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StrategyConfig {
    /// Threat above which the economy escalates.
    pub war_threshold: f32,
    /// Threat below which war winds down.
    pub peace_threshold: f32,
    pub exit_militarization_threshold: f32,
    pub exit_war_threshold: f32,
    /// Military/economy ratio under which escalation goes through militarization first.
    pub min_military_ratio: f32,
    pub militarize_min_settlements: u32,
    pub secure_ratio: f32,
    /// Fraction of `war_threshold` that counts as safe when the ratio is secure.
    pub secure_threat_fraction: f32,
    pub calm_threat: f32,
    pub calm_ratio: f32,
    /// Own power must exceed threat by this factor to stand down.
    pub power_margin: f32,
    pub expansion_unit_target: u32,
    pub expansion_settlement_target: u32,
    /// Cities needed to win; development re-opens expansion until it is reached.
    pub city_target: u32,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            war_threshold: 50.0,
            peace_threshold: 40.0,
            exit_militarization_threshold: 20.0,
            exit_war_threshold: 45.0,
            min_military_ratio: 1.0,
            militarize_min_settlements: 2,
            secure_ratio: 2.0,
            secure_threat_fraction: 0.8,
            calm_threat: 30.0,
            calm_ratio: 1.2,
            power_margin: 1.5,
            expansion_unit_target: 5,
            expansion_settlement_target: 5,
            city_target: 3,
        }
    }
}
