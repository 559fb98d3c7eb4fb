//! Per-player decision loop: influence maps, strategy, and one GOAP agent per unit.

use std::collections::BTreeMap;

use ai_core::TickContext;
use ai_goap::{AgentEvent, GoapAgent};
use ai_grid::{PlayerId, UnitId, UnitKind};
use ai_influence::InfluenceMap;
use ai_strategy::{
    military_power, MacroState, StrategicDecision, StrategicStateMachine, StrategyInputs,
    TacticalOrder,
};
use ai_tools::TracingSink;
use tracing::debug;

use crate::actions::capabilities_for;
use crate::facts::unit_world_state;
use crate::goals::goals_for;
use crate::{AiConfig, GameWorld};

/// Outcome of one [`Director::per_decision_tick`] (plus agent events when produced by
/// [`Director::run_turn`]).
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionReport {
    pub tick: u64,
    pub inputs: StrategyInputs,
    pub decision: StrategicDecision,
    /// Agents created for new units or units that changed kind.
    pub created: usize,
    /// Agents dropped because their unit is gone or changed kind.
    pub retired: usize,
    /// Active plans dropped because the order changed.
    pub aborted: usize,
    /// Idle agents that received a plan this tick.
    pub dispatched: usize,
    /// Idle agents for which no goal could be planned.
    pub unplanned: usize,
    pub events: Vec<(UnitId, AgentEvent)>,
}

struct UnitAgent<W: GameWorld + 'static> {
    kind: UnitKind,
    agent: GoapAgent<W>,
}

pub struct Director<W: GameWorld + 'static> {
    player: PlayerId,
    config: AiConfig,
    machine: StrategicStateMachine,
    agents: BTreeMap<UnitId, UnitAgent<W>>,
    trace: bool,
}

impl<W: GameWorld + 'static> Director<W> {
    pub fn new(player: PlayerId, config: AiConfig) -> Self {
        Self {
            player,
            machine: StrategicStateMachine::new(config.strategy),
            config,
            agents: BTreeMap::new(),
            trace: false,
        }
    }

    /// Forward every agent's trace events to `tracing`.
    pub fn with_tracing(mut self) -> Self {
        self.trace = true;
        self
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    pub fn macro_state(&self) -> MacroState {
        self.machine.macro_state()
    }

    pub fn order(&self) -> TacticalOrder {
        self.machine.order()
    }

    pub fn agent(&self, unit: UnitId) -> Option<&GoapAgent<W>> {
        self.agents.get(&unit).map(|a| &a.agent)
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    fn rebuild_maps(&self, world: &mut W) {
        let mut maps = std::mem::take(world.influence_mut());
        if maps.config() != &self.config.influence {
            maps = InfluenceMap::new(self.config.influence);
        }
        maps.rebuild(world.grid(), self.player);
        *world.influence_mut() = maps;
    }

    fn strategy_inputs(&self, world: &W) -> StrategyInputs {
        let roster: Vec<_> = world
            .roster(self.player)
            .into_iter()
            .filter_map(|id| world.unit(id))
            .collect();
        let count = |kind: UnitKind| roster.iter().filter(|u| u.kind == kind).count() as u32;
        let cities = count(UnitKind::City);

        StrategyInputs {
            threat: world.influence().total_threat(),
            my_power: military_power(roster.iter().map(|u| &u.stats)),
            military_ratio: world.military_to_economy_ratio(self.player),
            economy_critical: world.is_economy_critical(self.player),
            settlements: count(UnitKind::Settlement) + cities,
            cities,
            expansion_units: count(UnitKind::Settler),
        }
    }

    fn new_agent(&self, id: UnitId, kind: UnitKind) -> GoapAgent<W> {
        let agent = GoapAgent::new(
            id,
            capabilities_for::<W>(kind, &self.config),
            |world: &W, id: UnitId| unit_world_state(world, id),
        );
        if self.trace {
            agent.with_trace(Box::new(TracingSink))
        } else {
            agent
        }
    }

    /// Create agents for new units (or units that changed kind) and drop agents whose
    /// unit is gone. Returns `(created, retired)`.
    fn sync_agents(&mut self, world: &W) -> (usize, usize) {
        let live: BTreeMap<UnitId, UnitKind> = world
            .roster(self.player)
            .into_iter()
            .filter_map(|id| world.unit(id).map(|u| (id, u.kind)))
            .collect();

        let before = self.agents.len();
        self.agents
            .retain(|id, a| live.get(id).is_some_and(|kind| *kind == a.kind));
        let retired = before - self.agents.len();

        let mut created = 0;
        for (id, kind) in live {
            if self.agents.contains_key(&id) {
                continue;
            }
            let agent = self.new_agent(id, kind);
            self.agents.insert(id, UnitAgent { kind, agent });
            created += 1;
        }
        (created, retired)
    }

    /// Rebuild the influence maps, run the strategy machine, bring the agent set in line
    /// with the roster and hand goals to idle agents.
    pub fn per_decision_tick(&mut self, ctx: &TickContext, world: &mut W) -> DecisionReport {
        self.rebuild_maps(world);
        let inputs = self.strategy_inputs(world);
        let decision = self.machine.update(&inputs);
        let (created, retired) = self.sync_agents(world);

        let mut aborted = 0;
        if decision.changed {
            for a in self.agents.values_mut() {
                if !a.agent.is_idle() {
                    a.agent.abort_plan(ctx);
                    aborted += 1;
                }
            }
        }

        let mut dispatched = 0;
        let mut unplanned = 0;
        for (id, a) in self.agents.iter_mut() {
            if !a.agent.is_idle() {
                continue;
            }
            let snapshot = unit_world_state(&*world, *id);
            let mut planned = false;
            for goal in goals_for(decision.order, a.kind) {
                if snapshot.satisfies(&goal) {
                    continue;
                }
                if a.agent.set_goal(ctx, &*world, goal).is_ok() {
                    planned = true;
                    break;
                }
            }
            if planned {
                dispatched += 1;
            } else {
                unplanned += 1;
            }
        }

        debug!(
            tick = ctx.tick,
            player = %self.player,
            order = decision.order.name(),
            threat = inputs.threat,
            created,
            retired,
            dispatched,
            unplanned,
            "decision tick"
        );

        DecisionReport {
            tick: ctx.tick,
            inputs,
            decision,
            created,
            retired,
            aborted,
            dispatched,
            unplanned,
            events: Vec::new(),
        }
    }

    /// Advance every agent one step and collect their signals.
    pub fn update_agents(&mut self, ctx: &TickContext, world: &mut W) -> Vec<(UnitId, AgentEvent)> {
        let mut events = Vec::new();
        for (id, a) in self.agents.iter_mut() {
            a.agent.tick(ctx, world);
            events.extend(a.agent.drain_events().into_iter().map(|e| (*id, e)));
        }
        events
    }

    /// One decision tick followed by one agent update.
    pub fn run_turn(&mut self, ctx: &TickContext, world: &mut W) -> DecisionReport {
        let mut report = self.per_decision_tick(ctx, world);
        report.events = self.update_agents(ctx, world);
        report
    }
}
