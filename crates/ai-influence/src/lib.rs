//! Influence maps: per-cell scalar overlays summarizing the board for the AI.
//!
//! Three layers are produced for the acting player every decision cycle:
//! threat (hostile presence), resource (worth of settling) and territory
//! (ownership sign). Threat and resource are diffused to neighbors; territory is not.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;
pub mod field;
pub mod map;
pub mod patrol;

pub use config::{InfluenceConfig, TierValues};
pub use field::InfluenceField;
pub use map::InfluenceMap;
pub use patrol::PatrolProvider;
