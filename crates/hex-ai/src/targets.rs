//! Destination selectors for movement and spawning.

use ai_grid::{neighbors, GridView, HexCoord, PlayerId, Unit};
use ai_influence::PatrolProvider;

use crate::GameWorld;

/// A cell `player` may found a settlement on: passable, not foreign-owned, and with no
/// settlement or city on it or next to it.
pub fn is_valid_site(grid: &dyn GridView, c: HexCoord, player: PlayerId) -> bool {
    let Some(cell) = grid.cell(c) else {
        return false;
    };
    cell.is_passable()
        && !cell.is_foreign_to(player)
        && !cell.hosts_structure()
        && !neighbors(grid, c).any(|n| grid.cell(n).is_some_and(|nc| nc.hosts_structure()))
}

/// An enemy cell worth raiding: improved or resource-bearing, off cooldown.
pub fn is_raid_target(grid: &dyn GridView, c: HexCoord, player: PlayerId) -> bool {
    grid.cell(c).is_some_and(|cell| {
        cell.is_foreign_to(player)
            && cell.is_passable()
            && cell.raid_cooldown == 0
            && (cell.build.is_some() || cell.resource != ai_grid::ResourceTier::None)
    })
}

/// Best-scoring valid settlement site on the current influence maps.
pub fn expansion_site<W: GameWorld>(world: &W, unit: &Unit) -> Option<HexCoord> {
    let grid = world.grid();
    world
        .influence()
        .best_expansion_candidate_by(grid, |c| is_valid_site(grid, c, unit.owner))
}

/// Nearest hostile unit (ties by id).
pub fn nearest_enemy<W: GameWorld>(world: &W, unit: &Unit) -> Option<(HexCoord, ai_grid::UnitId)> {
    let grid = world.grid();
    grid.index()
        .coords()
        .filter_map(|c| {
            let o = grid.cell(c)?.hostile_occupant(unit.owner)?;
            Some((c.distance(unit.position), o.unit, c))
        })
        .min_by_key(|(d, id, _)| (*d, *id))
        .map(|(_, id, c)| (c, id))
}

/// Where to stand to fight the nearest enemy: the current cell if already adjacent,
/// otherwise the free passable cell next to it closest to `unit`.
pub fn enemy_approach<W: GameWorld>(world: &W, unit: &Unit) -> Option<HexCoord> {
    let (enemy, _) = nearest_enemy(world, unit)?;
    if unit.position.is_adjacent(enemy) {
        return Some(unit.position);
    }
    let grid = world.grid();
    neighbors(grid, enemy)
        .filter(|n| grid.cell(*n).is_some_and(|c| c.is_passable() && !c.is_occupied()))
        .min_by_key(|n| n.distance(unit.position))
}

pub fn patrol_post<W: GameWorld>(
    world: &W,
    unit: &Unit,
    provider: &dyn PatrolProvider,
) -> Option<HexCoord> {
    world
        .influence()
        .patrol_candidate(provider, world.grid(), unit.owner, unit.position)
}

/// Nearest raidable enemy cell that is free (or already held by `unit`).
pub fn raid_target<W: GameWorld>(world: &W, unit: &Unit) -> Option<HexCoord> {
    let grid = world.grid();
    grid.index()
        .coords()
        .filter(|c| is_raid_target(grid, *c, unit.owner))
        .filter(|c| *c == unit.position || grid.cell(*c).is_some_and(|cell| !cell.is_occupied()))
        .min_by_key(|c| c.distance(unit.position))
}

/// First free passable neighbor of `at`, in direction order.
pub fn spawn_site(grid: &dyn GridView, at: HexCoord) -> Option<HexCoord> {
    neighbors(grid, at).find(|n| grid.cell(*n).is_some_and(|c| c.is_passable() && !c.is_occupied()))
}
