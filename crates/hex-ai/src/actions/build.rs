use ai_core::{Action, ActionSpec, ActionStatus, TickContext};
use ai_grid::{neighbors, HexCoord, Resources, UnitId, UnitKind};
use tracing::debug;

use crate::targets::is_valid_site;
use crate::GameWorld;

/// Turns a settler into a settlement on its current cell and claims the cell plus
/// every unowned neighbor.
///
/// The site is validated when the action runs, not when it is planned: at planning
/// time the settler is usually still on its way.
pub struct BuildSettlementAction {
    spec: ActionSpec,
    price: Resources,
}

impl BuildSettlementAction {
    pub fn new(spec: ActionSpec, price: Resources) -> Self {
        Self { spec, price }
    }
}

impl<W> Action<W> for BuildSettlementAction
where
    W: GameWorld + 'static,
{
    fn spec(&self) -> &ActionSpec {
        &self.spec
    }

    fn check_feasible(&mut self, _ctx: &TickContext, agent: UnitId, world: &W) -> bool {
        world
            .unit(agent)
            .is_some_and(|u| u.kind == UnitKind::Settler && world.can_afford(u.owner, &self.price))
    }

    fn perform(&mut self, ctx: &TickContext, agent: UnitId, world: &mut W) -> ActionStatus {
        let Some(unit) = world.unit(agent) else {
            return ActionStatus::Failed;
        };
        let (owner, at) = (unit.owner, unit.position);
        if unit.kind != UnitKind::Settler || !is_valid_site(world.grid(), at, owner) {
            return ActionStatus::Failed;
        }
        if world.spend(owner, &self.price).is_err() {
            return ActionStatus::Failed;
        }
        if !world.convert_unit(agent, UnitKind::Settlement) {
            world.credit(owner, &self.price);
            return ActionStatus::Failed;
        }

        let unowned: Vec<HexCoord> = neighbors(world.grid(), at)
            .filter(|n| world.grid().cell(*n).is_some_and(|c| c.owner.is_none()))
            .collect();
        world.claim_cell(at, owner);
        for n in unowned {
            world.claim_cell(n, owner);
        }
        debug!(tick = ctx.tick, unit = %agent, %at, "settlement founded");
        ActionStatus::Done
    }
}
