use ai_core::{
    Action, ActionKey, ActionStatus, AgentId, TickContext, WorldMut, WorldState, WorldView,
};
use ai_tools::{emit as trace_emit, TraceEvent, TraceSink};
use tracing::{debug, warn};

use crate::{GoapPlanner, Plan, PlanError, PlanStats};

/// Builds an agent's planning snapshot from live world state.
pub type StateBuilder<W> = Box<dyn Fn(&W, <W as WorldView>::Agent) -> WorldState>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentPhase {
    Idle,
    Running,
    Dequeuing,
    Completed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AgentEvent {
    PlanStarted { steps: usize, cost: f32 },
    PlanFailed,
    /// The next action failed its re-check right before starting.
    PlanInterrupted { action: ActionKey },
    ActionFailed { action: ActionKey },
    PlanFinished,
    PlanAborted,
}

impl AgentEvent {
    fn tag(&self) -> &'static str {
        match self {
            AgentEvent::PlanStarted { .. } => "goap.plan.start",
            AgentEvent::PlanFailed => "goap.plan.none",
            AgentEvent::PlanInterrupted { .. } => "goap.plan.interrupted",
            AgentEvent::ActionFailed { .. } => "goap.action.failed",
            AgentEvent::PlanFinished => "goap.plan.done",
            AgentEvent::PlanAborted => "goap.plan.aborted",
        }
    }
}

/// One controlled unit: its capability set, current plan and running action.
pub struct GoapAgent<W>
where
    W: WorldMut + 'static,
{
    agent: W::Agent,
    actions: Vec<Box<dyn Action<W>>>,
    state_builder: StateBuilder<W>,
    planner: GoapPlanner,
    goal: Option<WorldState>,
    plan: Plan,
    running: Option<usize>,
    phase: AgentPhase,
    events: Vec<AgentEvent>,
    trace: Option<Box<dyn TraceSink>>,
}

impl<W> GoapAgent<W>
where
    W: WorldMut + 'static,
{
    pub fn new(
        agent: W::Agent,
        actions: Vec<Box<dyn Action<W>>>,
        state_builder: impl Fn(&W, W::Agent) -> WorldState + 'static,
    ) -> Self {
        Self {
            agent,
            actions,
            state_builder: Box::new(state_builder),
            planner: GoapPlanner::new(),
            goal: None,
            plan: Plan::default(),
            running: None,
            phase: AgentPhase::Idle,
            events: Vec::new(),
            trace: None,
        }
    }

    pub fn with_trace(mut self, sink: Box<dyn TraceSink>) -> Self {
        self.trace = Some(sink);
        self
    }

    pub fn agent(&self) -> W::Agent {
        self.agent
    }

    pub fn phase(&self) -> AgentPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == AgentPhase::Idle
    }

    /// Goal of the active plan.
    pub fn goal(&self) -> Option<&WorldState> {
        self.goal.as_ref()
    }

    /// Steps not yet started.
    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn running_action(&self) -> Option<ActionKey> {
        self.running.map(|i| self.actions[i].key())
    }

    pub fn action_keys(&self) -> impl Iterator<Item = ActionKey> + '_ {
        self.actions.iter().map(|a| a.key())
    }

    pub fn last_stats(&self) -> PlanStats {
        self.planner.last_stats()
    }

    pub fn world_state(&self, world: &W) -> WorldState {
        (self.state_builder)(world, self.agent)
    }

    pub fn drain_events(&mut self) -> Vec<AgentEvent> {
        std::mem::take(&mut self.events)
    }

    fn signal(&mut self, ctx: &TickContext, event: AgentEvent) {
        let (a, b) = match &event {
            AgentEvent::PlanStarted { steps, cost } => (*steps as u64, (cost * 100.0) as u64),
            _ => (self.plan.len() as u64, 0),
        };
        trace_emit(
            &mut self.trace,
            TraceEvent::new(ctx.tick, event.tag())
                .for_agent(self.agent.stable_id())
                .with_a(a)
                .with_b(b),
        );
        self.events.push(event);
    }

    /// Snapshot the world, plan toward `goal` and queue the result. Any plan in progress
    /// is aborted first. On failure the agent stays idle.
    pub fn set_goal(
        &mut self,
        ctx: &TickContext,
        world: &W,
        goal: WorldState,
    ) -> Result<(), PlanError> {
        self.abort_plan(ctx);

        let start = (self.state_builder)(world, self.agent);
        let result = self
            .planner
            .plan(ctx, self.agent, world, &mut self.actions, &start, &goal);

        match result {
            Ok(plan) => {
                debug!(
                    tick = ctx.tick,
                    agent = ?self.agent,
                    steps = plan.len(),
                    cost = plan.cost(),
                    "plan started"
                );
                let event = AgentEvent::PlanStarted {
                    steps: plan.len(),
                    cost: plan.cost(),
                };
                self.plan = plan;
                self.goal = Some(goal);
                self.phase = AgentPhase::Dequeuing;
                self.signal(ctx, event);
                Ok(())
            }
            Err(err) => {
                debug!(tick = ctx.tick, agent = ?self.agent, %err, "planning failed");
                self.phase = AgentPhase::Idle;
                self.signal(ctx, AgentEvent::PlanFailed);
                Err(err)
            }
        }
    }

    /// Advance one step.
    pub fn tick(&mut self, ctx: &TickContext, world: &mut W) {
        match self.phase {
            AgentPhase::Idle | AgentPhase::Completed => {}
            AgentPhase::Running => self.poll_running(ctx, world),
            AgentPhase::Dequeuing => self.dequeue(ctx, world),
        }

        if self.phase == AgentPhase::Completed {
            debug!(tick = ctx.tick, agent = ?self.agent, "plan finished");
            self.phase = AgentPhase::Idle;
            self.goal = None;
            self.signal(ctx, AgentEvent::PlanFinished);
        }
    }

    fn dequeue(&mut self, ctx: &TickContext, world: &mut W) {
        let Some(idx) = self.plan.next_step() else {
            self.phase = AgentPhase::Completed;
            return;
        };

        if !self.actions[idx].check_feasible(ctx, self.agent, world) {
            let action = self.actions[idx].key();
            debug!(tick = ctx.tick, agent = ?self.agent, action = action.0, "plan interrupted");
            self.actions[idx].reset();
            self.plan.clear();
            self.goal = None;
            self.phase = AgentPhase::Idle;
            self.signal(ctx, AgentEvent::PlanInterrupted { action });
            return;
        }

        self.running = Some(idx);
        self.phase = AgentPhase::Running;
        self.poll_running(ctx, world);
    }

    fn poll_running(&mut self, ctx: &TickContext, world: &mut W) {
        let Some(idx) = self.running else {
            self.phase = AgentPhase::Dequeuing;
            return;
        };

        match self.actions[idx].perform(ctx, self.agent, world) {
            ActionStatus::Continue => {}
            ActionStatus::Done => {
                self.actions[idx].reset();
                self.running = None;
                self.phase = if self.plan.is_empty() {
                    AgentPhase::Completed
                } else {
                    AgentPhase::Dequeuing
                };
            }
            ActionStatus::Failed => {
                let action = self.actions[idx].key();
                warn!(tick = ctx.tick, agent = ?self.agent, action = action.0, "action failed");
                self.actions[idx].reset();
                self.running = None;
                self.plan.clear();
                self.goal = None;
                self.phase = AgentPhase::Idle;
                self.signal(ctx, AgentEvent::ActionFailed { action });
            }
        }
    }

    /// Drop the current plan. Emits `PlanAborted` only when a plan was active.
    pub fn abort_plan(&mut self, ctx: &TickContext) {
        if self.phase == AgentPhase::Idle {
            return;
        }
        if let Some(idx) = self.running.take() {
            self.actions[idx].reset();
        }
        self.plan.clear();
        self.goal = None;
        self.phase = AgentPhase::Idle;
        debug!(tick = ctx.tick, agent = ?self.agent, "plan aborted");
        self.signal(ctx, AgentEvent::PlanAborted);
    }
}
