use ai_grid::{GridView, HexCoord, PlayerId};
use ai_influence::{InfluenceMap, PatrolProvider};

use crate::HexPathfinder;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Patrol posts on the edge of a player's territory.
///
/// A candidate is an own, passable cell with at least one in-grid neighbor the player
/// does not own, free (or already held by the asking unit) and with threat at most
/// `max_threat`. Candidates are tried nearest first, then least threatened, then in
/// grid order; the first one with a path wins.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FrontierPatrol {
    pub pathfinder: HexPathfinder,
    pub max_threat: f32,
}

impl Default for FrontierPatrol {
    fn default() -> Self {
        Self {
            pathfinder: HexPathfinder::default(),
            max_threat: 40.0,
        }
    }
}

impl FrontierPatrol {
    pub fn new(pathfinder: HexPathfinder, max_threat: f32) -> Self {
        Self {
            pathfinder,
            max_threat,
        }
    }
}

fn is_frontier(grid: &dyn GridView, c: HexCoord, player: PlayerId) -> bool {
    ai_grid::neighbors(grid, c)
        .any(|n| grid.cell(n).is_some_and(|cell| !cell.is_owned_by(player)))
}

impl PatrolProvider for FrontierPatrol {
    fn patrol_position(
        &self,
        grid: &dyn GridView,
        maps: &InfluenceMap,
        player: PlayerId,
        from: HexCoord,
    ) -> Option<HexCoord> {
        let threat = maps.threat()?;

        let mut candidates: Vec<(i32, f32, usize, HexCoord)> = Vec::new();
        for (order, c) in grid.index().coords().enumerate() {
            let Some(cell) = grid.cell(c) else { continue };
            if !cell.is_owned_by(player) || !cell.is_passable() {
                continue;
            }
            if cell.is_occupied() && c != from {
                continue;
            }
            let t = threat.get(c);
            if t > self.max_threat || !is_frontier(grid, c, player) {
                continue;
            }
            candidates.push((c.distance(from), t, order, c));
        }
        candidates.sort_by(|a, b| {
            a.0.cmp(&b.0)
                .then_with(|| a.1.total_cmp(&b.1))
                .then_with(|| a.2.cmp(&b.2))
        });

        candidates
            .into_iter()
            .map(|(_, _, _, c)| c)
            .find(|c| !self.pathfinder.find_path(grid, from, *c, threat).is_empty())
    }
}
