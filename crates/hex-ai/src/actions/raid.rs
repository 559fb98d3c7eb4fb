use ai_core::{Action, ActionSpec, ActionStatus, TickContext};
use ai_grid::{Resources, UnitId, UnitKind};
use tracing::debug;

use crate::targets::is_raid_target;
use crate::GameWorld;

/// A soldier loots the enemy cell it stands on; the cell then cools down.
pub struct RaidAction {
    spec: ActionSpec,
    loot: Resources,
    cooldown: u32,
}

impl RaidAction {
    pub fn new(spec: ActionSpec, loot: Resources, cooldown: u32) -> Self {
        Self {
            spec,
            loot,
            cooldown,
        }
    }
}

impl<W> Action<W> for RaidAction
where
    W: GameWorld + 'static,
{
    fn spec(&self) -> &ActionSpec {
        &self.spec
    }

    fn check_feasible(&mut self, _ctx: &TickContext, agent: UnitId, world: &W) -> bool {
        world.unit(agent).is_some_and(|u| u.kind == UnitKind::Soldier)
    }

    fn perform(&mut self, ctx: &TickContext, agent: UnitId, world: &mut W) -> ActionStatus {
        let Some(unit) = world.unit(agent) else {
            return ActionStatus::Failed;
        };
        let (owner, at) = (unit.owner, unit.position);
        if unit.kind != UnitKind::Soldier || !is_raid_target(world.grid(), at, owner) {
            return ActionStatus::Failed;
        }
        world.credit(owner, &self.loot);
        world.set_raid_cooldown(at, self.cooldown);
        debug!(tick = ctx.tick, unit = %agent, %at, "raid");
        ActionStatus::Done
    }
}
