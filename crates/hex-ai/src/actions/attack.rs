use ai_core::{Action, ActionSpec, ActionStatus, TickContext};
use ai_grid::{neighbors, Unit, UnitId, UnitKind};
use tracing::debug;

use crate::targets::nearest_enemy;
use crate::GameWorld;

/// A soldier strikes the weakest adjacent hostile (lowest health, then lowest id).
///
/// Planning only needs an enemy somewhere on the board; adjacency is checked when the
/// strike happens.
pub struct AttackAction {
    spec: ActionSpec,
}

impl AttackAction {
    pub fn new(spec: ActionSpec) -> Self {
        Self { spec }
    }
}

fn weakest_adjacent_hostile<W: GameWorld>(world: &W, attacker: &Unit) -> Option<UnitId> {
    let grid = world.grid();
    neighbors(grid, attacker.position)
        .filter_map(|n| grid.cell(n)?.hostile_occupant(attacker.owner))
        .filter_map(|o| world.unit(o.unit))
        .min_by(|a, b| a.health.total_cmp(&b.health).then(a.id.cmp(&b.id)))
        .map(|u| u.id)
}

impl<W> Action<W> for AttackAction
where
    W: GameWorld + 'static,
{
    fn spec(&self) -> &ActionSpec {
        &self.spec
    }

    fn check_feasible(&mut self, _ctx: &TickContext, agent: UnitId, world: &W) -> bool {
        world.unit(agent).is_some_and(|u| {
            u.kind == UnitKind::Soldier && nearest_enemy(world, u).is_some()
        })
    }

    fn perform(&mut self, ctx: &TickContext, agent: UnitId, world: &mut W) -> ActionStatus {
        let Some(unit) = world.unit(agent) else {
            return ActionStatus::Failed;
        };
        if unit.kind != UnitKind::Soldier {
            return ActionStatus::Failed;
        }
        let damage = unit.stats.attack;
        let Some(target) = weakest_adjacent_hostile(world, unit) else {
            return ActionStatus::Failed;
        };
        let destroyed = world.damage_unit(target, damage);
        debug!(tick = ctx.tick, unit = %agent, %target, damage, destroyed, "attack");
        ActionStatus::Done
    }
}
