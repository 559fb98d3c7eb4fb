use std::path::{Path, PathBuf};

use ai_grid::Resources;
use ai_influence::InfluenceConfig;
use ai_nav::{FrontierPatrol, PathfinderConfig};
use ai_strategy::StrategyConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("yaml parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Planning costs and game prices of the concrete unit actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionRules {
    pub move_cost: f32,
    pub build_settlement_cost: f32,
    pub upgrade_city_cost: f32,
    pub train_settler_cost: f32,
    pub train_soldier_cost: f32,
    pub attack_cost: f32,
    pub raid_cost: f32,

    pub settlement_price: Resources,
    pub city_price: Resources,
    pub settler_price: Resources,
    pub soldier_price: Resources,

    /// Turns of construction before a settlement becomes a city.
    pub upgrade_turns: u32,
    pub raid_loot: Resources,
    pub raid_cooldown: u32,
}

impl Default for ActionRules {
    fn default() -> Self {
        Self {
            move_cost: 4.0,
            build_settlement_cost: 2.0,
            upgrade_city_cost: 3.0,
            train_settler_cost: 2.0,
            train_soldier_cost: 2.0,
            attack_cost: 1.0,
            raid_cost: 1.0,
            settlement_price: Resources::new(0, 10, 0),
            city_price: Resources::new(20, 20, 10),
            settler_price: Resources::new(15, 0, 0),
            soldier_price: Resources::new(10, 5, 5),
            upgrade_turns: 3,
            raid_loot: Resources::new(5, 5, 5),
            raid_cooldown: 5,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub influence: InfluenceConfig,
    pub pathfinder: PathfinderConfig,
    pub patrol: FrontierPatrol,
    pub strategy: StrategyConfig,
    pub actions: ActionRules,
}

impl AiConfig {
    /// Parse YAML. Missing sections and fields keep their defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
