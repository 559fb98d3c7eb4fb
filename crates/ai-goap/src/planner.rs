use ai_core::{Action, ActionSpec, TickContext, WorldMut, WorldState};
use tracing::debug;

use crate::Plan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("no action sequence reaches the goal")]
    NoPlan,
}

/// Counters from the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanStats {
    /// Nodes created, root included.
    pub nodes: usize,
    /// Nodes whose state satisfied the goal.
    pub leaves: usize,
}

#[derive(Debug)]
struct PlanNode {
    parent: Option<usize>,
    cost: f32,
    state: WorldState,
    action: Option<usize>,
}

struct Search<'a> {
    specs: &'a [&'a ActionSpec],
    goal: &'a WorldState,
    nodes: Vec<PlanNode>,
    leaves: Vec<usize>,
}

impl Search<'_> {
    /// Depth-first: every applicable action in `pool` spawns a child; satisfied children
    /// become leaves, the rest recurse without the action that produced them.
    fn expand(&mut self, parent: usize, pool: &mut Vec<usize>) {
        for i in 0..pool.len() {
            let spec = self.specs[pool[i]];
            let node = &self.nodes[parent];
            if !spec.is_applicable(&node.state) {
                continue;
            }
            let child = PlanNode {
                parent: Some(parent),
                cost: node.cost + spec.cost,
                state: spec.apply(&node.state),
                action: Some(pool[i]),
            };
            let satisfied = child.state.satisfies(self.goal);
            self.nodes.push(child);
            let idx = self.nodes.len() - 1;

            if satisfied {
                self.leaves.push(idx);
                continue;
            }

            let used = pool.remove(i);
            self.expand(idx, pool);
            pool.insert(i, used);
        }
    }

    fn cheapest_leaf(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for &leaf in &self.leaves {
            match best {
                Some(b) if self.nodes[leaf].cost >= self.nodes[b].cost => {}
                _ => best = Some(leaf),
            }
        }
        best
    }

    fn reconstruct(&self, leaf: usize) -> Plan {
        let mut steps = Vec::new();
        let mut current = Some(leaf);
        while let Some(idx) = current {
            let node = &self.nodes[idx];
            if let Some(action) = node.action {
                steps.push(action);
            }
            current = node.parent;
        }
        steps.reverse();
        Plan::new(steps, self.nodes[leaf].cost)
    }
}

/// Exhaustive cost-optimal planner. There is no pruning: every applicable sequence is
/// explored, so capability sets are expected to stay small.
#[derive(Debug, Clone, Default)]
pub struct GoapPlanner {
    last_stats: PlanStats,
}

impl GoapPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_stats(&self) -> PlanStats {
        self.last_stats
    }

    /// Cheapest sequence of `specs` from `start` to `goal`. Step indices refer to `specs`;
    /// on equal cost the sequence found first wins.
    pub fn search(
        &mut self,
        specs: &[&ActionSpec],
        start: &WorldState,
        goal: &WorldState,
    ) -> Result<Plan, PlanError> {
        let mut search = Search {
            specs,
            goal,
            nodes: vec![PlanNode {
                parent: None,
                cost: 0.0,
                state: start.clone(),
                action: None,
            }],
            leaves: Vec::new(),
        };

        if start.satisfies(goal) {
            search.leaves.push(0);
        } else {
            let mut pool: Vec<usize> = (0..specs.len()).collect();
            search.expand(0, &mut pool);
        }

        self.last_stats = PlanStats {
            nodes: search.nodes.len(),
            leaves: search.leaves.len(),
        };

        let leaf = search.cheapest_leaf().ok_or(PlanError::NoPlan)?;
        Ok(search.reconstruct(leaf))
    }

    /// Plan over an agent's capability set. Actions failing their live feasibility check
    /// are left out of this search; step indices refer to `actions`.
    pub fn plan<W>(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &W,
        actions: &mut [Box<dyn Action<W>>],
        start: &WorldState,
        goal: &WorldState,
    ) -> Result<Plan, PlanError>
    where
        W: WorldMut + 'static,
    {
        let feasible: Vec<usize> = actions
            .iter_mut()
            .enumerate()
            .filter_map(|(i, a)| a.check_feasible(ctx, agent, world).then_some(i))
            .collect();
        let specs: Vec<&ActionSpec> = feasible.iter().map(|&i| actions[i].spec()).collect();

        let result = self.search(&specs, start, goal);
        debug!(
            tick = ctx.tick,
            ?agent,
            feasible = feasible.len(),
            nodes = self.last_stats.nodes,
            leaves = self.last_stats.leaves,
            found = result.is_ok(),
            "goap search"
        );
        let plan = result?;
        Ok(Plan::new(plan.steps().map(|i| feasible[i]), plan.cost()))
    }
}
