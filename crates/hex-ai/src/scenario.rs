//! Deterministic two-player skirmish boards.

use ai_grid::{
    neighbors, Cell, GridView, HexCoord, HexGrid, PlayerId, ResourceTier, Resources, Terrain,
    UnitKind,
};

use crate::{GameWorld, HexWorld};

/// Mirrored skirmish setup: each player starts with a settlement, a settler and a
/// soldier on opposite sides of the board, on claimed land.
///
/// Terrain and resources follow a fixed coordinate hash, so the same radius always
/// yields the same board.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub radius: i32,
    pub players: u8,
    pub starting_funds: Resources,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            radius: 6,
            players: 2,
            starting_funds: Resources::new(60, 60, 30),
        }
    }
}

fn terrain_at(c: HexCoord) -> Terrain {
    match (c.q * 31 + c.r * 17).rem_euclid(13) {
        0 => Terrain::Water,
        1 | 2 => Terrain::Forest,
        3 => Terrain::Hills,
        _ => Terrain::Plains,
    }
}

fn resource_at(c: HexCoord) -> ResourceTier {
    match (c.q * 11 - c.r * 7).rem_euclid(9) {
        0 => ResourceTier::High,
        1 | 2 => ResourceTier::Mid,
        3 | 4 => ResourceTier::Low,
        _ => ResourceTier::None,
    }
}

impl Scenario {
    /// Largest board a skirmish is played on.
    pub const MAX_RADIUS: i32 = 64;

    pub fn new(radius: i32) -> Self {
        Self {
            radius,
            ..Self::default()
        }
    }

    /// Radius actually used: at least room for two start areas, at most
    /// [`Scenario::MAX_RADIUS`].
    pub fn effective_radius(&self) -> i32 {
        self.radius.clamp(3, Self::MAX_RADIUS)
    }

    /// Start cells, one per player: the east and west corners, then the other four
    /// corners of the board, one step in from the rim.
    pub fn start_positions(&self) -> Vec<HexCoord> {
        let r = self.effective_radius() - 1;
        [
            HexCoord::new(-r, 0),
            HexCoord::new(r, 0),
            HexCoord::new(0, -r),
            HexCoord::new(0, r),
            HexCoord::new(r, -r),
            HexCoord::new(-r, r),
        ]
        .into_iter()
        .take(usize::from(self.players.clamp(1, 6)))
        .collect()
    }

    pub fn build(&self) -> HexWorld {
        let starts = self.start_positions();
        let near_start = |c: HexCoord| starts.iter().any(|s| s.distance(c) <= 1);

        let grid = HexGrid::from_fn(self.effective_radius(), |c| {
            let terrain = if near_start(c) { Terrain::Plains } else { terrain_at(c) };
            Cell::new(terrain).with_resource(resource_at(c))
        });
        let mut world = HexWorld::new(grid);

        for (i, start) in starts.iter().enumerate() {
            let player = PlayerId(i as u8);
            world.ledger_mut().set_balance(player, self.starting_funds);

            let area: Vec<HexCoord> = std::iter::once(*start)
                .chain(neighbors(world.hex_grid(), *start))
                .collect();
            for c in &area {
                world.claim_cell(*c, player);
            }

            world.spawn_unit(player, UnitKind::Settlement, *start);
            // Settler and soldier take the first two free cells around the settlement.
            let free: Vec<HexCoord> = area[1..]
                .iter()
                .copied()
                .filter(|c| world.hex_grid().cell(*c).is_some_and(|cell| cell.is_passable()))
                .collect();
            for (c, kind) in free.into_iter().zip([UnitKind::Settler, UnitKind::Soldier]) {
                world.spawn_unit(player, kind, c);
            }
        }
        world
    }
}
