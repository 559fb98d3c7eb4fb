use ai_core::{Action, ActionSpec, ActionStatus, TickContext};
use ai_grid::{Resources, UnitId, UnitKind};
use tracing::debug;

use crate::targets::spawn_site;
use crate::GameWorld;

/// A settlement or city produces a unit on its first free neighbor.
pub struct TrainAction {
    spec: ActionSpec,
    kind: UnitKind,
    price: Resources,
}

impl TrainAction {
    pub fn new(spec: ActionSpec, kind: UnitKind, price: Resources) -> Self {
        Self { spec, kind, price }
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }
}

impl<W> Action<W> for TrainAction
where
    W: GameWorld + 'static,
{
    fn spec(&self) -> &ActionSpec {
        &self.spec
    }

    fn check_feasible(&mut self, _ctx: &TickContext, agent: UnitId, world: &W) -> bool {
        world.unit(agent).is_some_and(|u| {
            u.kind.is_structure()
                && world.can_afford(u.owner, &self.price)
                && spawn_site(world.grid(), u.position).is_some()
        })
    }

    fn perform(&mut self, ctx: &TickContext, agent: UnitId, world: &mut W) -> ActionStatus {
        let Some(unit) = world.unit(agent) else {
            return ActionStatus::Failed;
        };
        if !unit.kind.is_structure() {
            return ActionStatus::Failed;
        }
        let owner = unit.owner;
        let Some(site) = spawn_site(world.grid(), unit.position) else {
            return ActionStatus::Failed;
        };
        if world.spend(owner, &self.price).is_err() {
            return ActionStatus::Failed;
        }
        match world.spawn_unit(owner, self.kind, site) {
            Some(id) => {
                debug!(
                    tick = ctx.tick,
                    unit = %agent,
                    spawned = %id,
                    kind = self.kind.name(),
                    "unit trained"
                );
                ActionStatus::Done
            }
            None => {
                world.credit(owner, &self.price);
                ActionStatus::Failed
            }
        }
    }
}
