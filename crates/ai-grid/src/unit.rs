use ai_core::AgentId;

use crate::{HexCoord, PlayerId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnitId(pub u32);

impl AgentId for UnitId {
    fn stable_id(self) -> u64 {
        self.0 as u64
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnitKind {
    Settler,
    Soldier,
    Settlement,
    City,
}

impl UnitKind {
    pub const ALL: [UnitKind; 4] = [
        UnitKind::Settler,
        UnitKind::Soldier,
        UnitKind::Settlement,
        UnitKind::City,
    ];

    /// Settlements and cities never move.
    pub fn is_structure(self) -> bool {
        matches!(self, UnitKind::Settlement | UnitKind::City)
    }

    pub fn is_mobile(self) -> bool {
        !self.is_structure()
    }

    pub fn name(self) -> &'static str {
        match self {
            UnitKind::Settler => "settler",
            UnitKind::Soldier => "soldier",
            UnitKind::Settlement => "settlement",
            UnitKind::City => "city",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnitStats {
    pub attack: f32,
    pub max_health: f32,
}

impl UnitStats {
    pub const fn new(attack: f32, max_health: f32) -> Self {
        Self { attack, max_health }
    }

    /// Built-in stat sheet used when no asset data overrides it.
    pub fn for_kind(kind: UnitKind) -> Self {
        match kind {
            UnitKind::Settler => Self::new(0.0, 10.0),
            UnitKind::Soldier => Self::new(6.0, 20.0),
            UnitKind::Settlement => Self::new(2.0, 30.0),
            UnitKind::City => Self::new(4.0, 50.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unit {
    pub id: UnitId,
    pub owner: PlayerId,
    pub kind: UnitKind,
    pub stats: UnitStats,
    pub health: f32,
    pub position: HexCoord,
}

impl Unit {
    pub fn new(id: UnitId, owner: PlayerId, kind: UnitKind, position: HexCoord) -> Self {
        let stats = UnitStats::for_kind(kind);
        Self {
            id,
            owner,
            kind,
            stats,
            health: stats.max_health,
            position,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }
}
