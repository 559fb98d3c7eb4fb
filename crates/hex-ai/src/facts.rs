//! Planning vocabulary for unit agents and the snapshot builder.

use ai_core::{Proposition, WorldState};
use ai_grid::{neighbors, UnitId, UnitKind};

use crate::targets::{expansion_site, is_raid_target, is_valid_site};
use crate::GameWorld;

pub const AT_EXPANSION_SITE: Proposition = Proposition("at_expansion_site");
pub const NEAR_ENEMY: Proposition = Proposition("near_enemy");
pub const AT_PATROL_POST: Proposition = Proposition("at_patrol_post");
pub const AT_RAID_TARGET: Proposition = Proposition("at_raid_target");
pub const SETTLEMENT_BUILT: Proposition = Proposition("settlement_built");
pub const CITY_UPGRADED: Proposition = Proposition("city_upgraded");
pub const SETTLER_TRAINED: Proposition = Proposition("settler_trained");
pub const SOLDIER_TRAINED: Proposition = Proposition("soldier_trained");
pub const ENEMY_ENGAGED: Proposition = Proposition("enemy_engaged");
pub const RAIDED: Proposition = Proposition("raided");

fn flag(value: bool) -> i32 {
    i32::from(value)
}

/// Live snapshot of `unit`'s situation. Outcome facts (built, trained, engaged, raided)
/// always start at 0; only `city_upgraded` reflects a finished upgrade.
///
/// A unit that no longer exists yields an empty state.
pub fn unit_world_state<W: GameWorld>(world: &W, unit: UnitId) -> WorldState {
    let Some(unit) = world.unit(unit) else {
        return WorldState::new();
    };
    let grid = world.grid();
    let pos = unit.position;
    let player = unit.owner;

    // A settler is at its site when no better candidate remains elsewhere.
    let maps = world.influence();
    let at_site = unit.kind == UnitKind::Settler
        && is_valid_site(grid, pos, player)
        && maps.expansion_score(pos) > 0.0
        && expansion_site(world, unit)
            .map_or(true, |best| maps.expansion_score(pos) >= maps.expansion_score(best));
    let near_enemy = neighbors(grid, pos)
        .any(|n| grid.cell(n).is_some_and(|c| c.hostile_occupant(player).is_some()));
    let at_post = grid.cell(pos).is_some_and(|c| c.is_owned_by(player))
        && neighbors(grid, pos).any(|n| grid.cell(n).is_some_and(|c| !c.is_owned_by(player)));

    WorldState::from([
        (AT_EXPANSION_SITE, flag(at_site)),
        (NEAR_ENEMY, flag(near_enemy)),
        (AT_PATROL_POST, flag(at_post)),
        (AT_RAID_TARGET, flag(is_raid_target(grid, pos, player))),
        (SETTLEMENT_BUILT, 0),
        (CITY_UPGRADED, flag(unit.kind == UnitKind::City)),
        (SETTLER_TRAINED, 0),
        (SOLDIER_TRAINED, 0),
        (ENEMY_ENGAGED, 0),
        (RAIDED, 0),
    ])
}
