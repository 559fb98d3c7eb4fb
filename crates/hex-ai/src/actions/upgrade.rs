use ai_core::{Action, ActionSpec, ActionStatus, TickContext};
use ai_grid::{Resources, UnitId, UnitKind};
use tracing::debug;

use crate::GameWorld;

/// Multi-tick construction: after `turns` steps of work the settlement pays and becomes
/// a city. Nothing is charged before the completing step.
pub struct UpgradeToCityAction {
    spec: ActionSpec,
    price: Resources,
    turns: u32,
    progress: Option<u32>,
}

impl UpgradeToCityAction {
    pub fn new(spec: ActionSpec, price: Resources, turns: u32) -> Self {
        Self {
            spec,
            price,
            turns,
            progress: None,
        }
    }

    /// Steps of construction done so far, `None` before the first one.
    pub fn progress(&self) -> Option<u32> {
        self.progress
    }
}

impl<W> Action<W> for UpgradeToCityAction
where
    W: GameWorld + 'static,
{
    fn spec(&self) -> &ActionSpec {
        &self.spec
    }

    fn check_feasible(&mut self, _ctx: &TickContext, agent: UnitId, world: &W) -> bool {
        world.unit(agent).is_some_and(|u| {
            u.kind == UnitKind::Settlement && world.can_afford(u.owner, &self.price)
        })
    }

    fn perform(&mut self, ctx: &TickContext, agent: UnitId, world: &mut W) -> ActionStatus {
        let Some(unit) = world.unit(agent) else {
            return ActionStatus::Failed;
        };
        if unit.kind != UnitKind::Settlement {
            return ActionStatus::Failed;
        }
        let owner = unit.owner;

        let done = self.progress.map_or(0, |done| done + 1);
        self.progress = Some(done);
        if done < self.turns {
            return ActionStatus::Continue;
        }

        if world.spend(owner, &self.price).is_err() {
            return ActionStatus::Failed;
        }
        if !world.convert_unit(agent, UnitKind::City) {
            world.credit(owner, &self.price);
            return ActionStatus::Failed;
        }
        debug!(tick = ctx.tick, unit = %agent, "city upgraded");
        ActionStatus::Done
    }

    fn reset(&mut self) {
        self.progress = None;
    }
}
