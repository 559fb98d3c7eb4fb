use ai_grid::ResourceTier;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Base resource value per tier.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TierValues {
    pub none: f32,
    pub low: f32,
    pub mid: f32,
    pub high: f32,
}

impl TierValues {
    pub fn value(&self, tier: ResourceTier) -> f32 {
        match tier {
            ResourceTier::None => self.none,
            ResourceTier::Low => self.low,
            ResourceTier::Mid => self.mid,
            ResourceTier::High => self.high,
        }
    }
}

impl Default for TierValues {
    fn default() -> Self {
        Self {
            none: 0.0,
            low: 10.0,
            mid: 15.0,
            high: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InfluenceConfig {
    /// Diffusion rounds applied after the base layers are computed.
    pub diffusion_steps: u32,
    /// Fraction of a source's value added to each neighbor per round.
    pub decay: f32,
    /// Sources at or below this value do not spread.
    pub epsilon: f32,
    /// Raw threat of a hostile settler or soldier.
    pub mobile_threat: f32,
    /// Raw threat of a hostile settlement or city.
    pub structure_threat: f32,
    pub resource_values: TierValues,
    pub expansion_threat_weight: f32,
}

impl Default for InfluenceConfig {
    fn default() -> Self {
        Self {
            diffusion_steps: 2,
            decay: 0.5,
            epsilon: 0.1,
            mobile_threat: 50.0,
            structure_threat: 80.0,
            resource_values: TierValues::default(),
            expansion_threat_weight: 2.0,
        }
    }
}
