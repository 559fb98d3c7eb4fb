use ai_core::{Action, ActionSpec, ActionStatus, TickContext, WorldView};
use ai_grid::HexCoord;
use tracing::trace;

use crate::{HexPathfinder, NavWorldMut};

/// Picks where a unit should go given the current world.
pub type DestinationFn<W> = Box<dyn Fn(&W, <W as WorldView>::Agent) -> Option<HexCoord>>;

/// Walks a unit to a selected destination, one cell per tick.
///
/// The destination and path are chosen in [`Action::check_feasible`], so they are
/// refreshed every planning cycle and again right before the move starts.
pub struct MoveToAction<W: WorldView> {
    spec: ActionSpec,
    pathfinder: HexPathfinder,
    destination: DestinationFn<W>,
    target: Option<HexCoord>,
    path: Vec<HexCoord>,
    next_index: usize,
}

impl<W: WorldView> MoveToAction<W> {
    pub fn new(spec: ActionSpec, pathfinder: HexPathfinder, destination: DestinationFn<W>) -> Self {
        Self {
            spec,
            pathfinder,
            destination,
            target: None,
            path: Vec::new(),
            next_index: 1,
        }
    }

    pub fn target(&self) -> Option<HexCoord> {
        self.target
    }

    /// Remaining cached path, including the current cell.
    pub fn path(&self) -> &[HexCoord] {
        &self.path
    }
}

impl<W> MoveToAction<W>
where
    W: NavWorldMut,
{
    fn plan_route(&mut self, agent: W::Agent, world: &W) -> bool {
        self.target = None;
        self.path.clear();
        self.next_index = 1;

        let Some(pos) = world.position(agent) else {
            return false;
        };
        let Some(dest) = (self.destination)(world, agent) else {
            return false;
        };
        let Some(threat) = world.influence().threat() else {
            return false;
        };
        let path = self.pathfinder.find_path(world.grid(), pos, dest, threat);
        if path.is_empty() {
            return false;
        }
        self.target = Some(dest);
        self.path = path;
        true
    }
}

impl<W> Action<W> for MoveToAction<W>
where
    W: NavWorldMut + 'static,
{
    fn spec(&self) -> &ActionSpec {
        &self.spec
    }

    fn check_feasible(&mut self, _ctx: &TickContext, agent: W::Agent, world: &W) -> bool {
        self.plan_route(agent, world)
    }

    fn perform(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> ActionStatus {
        if self.path.is_empty() && !self.plan_route(agent, world) {
            return ActionStatus::Failed;
        }
        let Some(target) = self.target else {
            return ActionStatus::Failed;
        };
        let Some(pos) = world.position(agent) else {
            return ActionStatus::Failed;
        };
        if pos == target {
            return ActionStatus::Done;
        }

        let Some(&next) = self.path.get(self.next_index) else {
            return ActionStatus::Failed;
        };
        if !world.step_unit(agent, next) {
            trace!(tick = ctx.tick, ?agent, ?next, "move blocked");
            return ActionStatus::Failed;
        }
        self.next_index += 1;

        if next == target {
            ActionStatus::Done
        } else {
            ActionStatus::Continue
        }
    }

    fn reset(&mut self) {
        self.target = None;
        self.path.clear();
        self.next_index = 1;
    }
}
