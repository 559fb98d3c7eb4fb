use crate::{UnitId, UnitKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayerId(pub u8);

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ResourceTier {
    #[default]
    None,
    Low,
    Mid,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Terrain {
    #[default]
    Plains,
    Forest,
    Hills,
    Water,
}

impl Terrain {
    /// Cost of entering a cell of this terrain; `None` means impassable.
    pub fn move_cost(self) -> Option<u32> {
        match self {
            Terrain::Plains => Some(1),
            Terrain::Forest => Some(2),
            Terrain::Hills => Some(3),
            Terrain::Water => None,
        }
    }

    pub fn is_passable(self) -> bool {
        self.move_cost().is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BuildType {
    Farm,
    Mine,
    Workshop,
}

/// Reference to the unit standing on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Occupant {
    pub unit: UnitId,
    pub owner: PlayerId,
    pub kind: UnitKind,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub terrain: Terrain,
    pub owner: Option<PlayerId>,
    pub resource: ResourceTier,
    pub occupant: Option<Occupant>,
    pub build: Option<BuildType>,
    pub raid_cooldown: u32,
}

impl Cell {
    pub fn new(terrain: Terrain) -> Self {
        Self {
            terrain,
            ..Self::default()
        }
    }

    pub fn with_resource(mut self, resource: ResourceTier) -> Self {
        self.resource = resource;
        self
    }

    pub fn with_owner(mut self, owner: PlayerId) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn move_cost(&self) -> Option<u32> {
        self.terrain.move_cost()
    }

    pub fn is_passable(&self) -> bool {
        self.terrain.is_passable()
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// True when a settlement or city stands here.
    pub fn hosts_structure(&self) -> bool {
        self.occupant.is_some_and(|o| o.kind.is_structure())
    }

    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }

    /// Owned by someone other than `player`.
    pub fn is_foreign_to(&self, player: PlayerId) -> bool {
        self.owner.is_some_and(|owner| owner != player)
    }

    /// Occupied by a unit that does not belong to `player`.
    pub fn hostile_occupant(&self, player: PlayerId) -> Option<Occupant> {
        self.occupant.filter(|o| o.owner != player)
    }
}
