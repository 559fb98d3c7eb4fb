use crate::{Proposition, TickContext, WorldMut, WorldState};

/// Result of a single perform step.
///
/// Actions are polled once per tick and never block: a multi-tick effect (movement,
/// construction) keeps answering `Continue` until it settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    Continue,
    Done,
    Failed,
}

impl ActionStatus {
    pub fn is_finished(self) -> bool {
        !matches!(self, ActionStatus::Continue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActionKey(pub &'static str);

/// Static planning descriptor of an action: what it needs and what it causes.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionSpec {
    pub key: ActionKey,
    pub cost: f32,
    pub preconditions: WorldState,
    pub effects: WorldState,
}

impl ActionSpec {
    pub fn new(key: ActionKey, cost: f32) -> Self {
        Self {
            key,
            cost,
            preconditions: WorldState::new(),
            effects: WorldState::new(),
        }
    }

    pub fn with_precondition(mut self, prop: Proposition, value: i32) -> Self {
        self.preconditions.set(prop, value);
        self
    }

    pub fn with_effect(mut self, prop: Proposition, value: i32) -> Self {
        self.effects.set(prop, value);
        self
    }

    pub fn is_applicable(&self, state: &WorldState) -> bool {
        state.satisfies(&self.preconditions)
    }

    pub fn apply(&self, state: &WorldState) -> WorldState {
        state.applied(&self.effects)
    }
}

/// Capability interface bound to a single unit.
///
/// The planner only reads [`Action::spec`] and calls [`Action::check_feasible`];
/// the executor drives [`Action::perform`] and [`Action::reset`].
pub trait Action<W>: 'static
where
    W: WorldMut + 'static,
{
    fn spec(&self) -> &ActionSpec;

    fn key(&self) -> ActionKey {
        self.spec().key
    }

    /// Dynamic feasibility against live game state (affordability, target existence,
    /// reachability). May cache a target or path for the following perform steps.
    ///
    /// Runs at planning time and again right before the action starts.
    fn check_feasible(&mut self, _ctx: &TickContext, _agent: W::Agent, _world: &W) -> bool {
        true
    }

    fn perform(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> ActionStatus;

    /// Drop transient state (cached path, target, progress counters).
    fn reset(&mut self) {}
}
