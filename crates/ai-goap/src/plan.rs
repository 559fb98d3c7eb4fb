use std::collections::VecDeque;

/// Ordered action indices (into the owning agent's capability set) and their total cost.
///
/// Steps are consumed from the front as the plan executes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plan {
    steps: VecDeque<usize>,
    cost: f32,
}

impl Plan {
    pub fn new(steps: impl IntoIterator<Item = usize>, cost: f32) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            cost,
        }
    }

    pub fn cost(&self) -> f32 {
        self.cost
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Remaining steps in execution order.
    pub fn steps(&self) -> impl Iterator<Item = usize> + '_ {
        self.steps.iter().copied()
    }

    pub fn next_step(&mut self) -> Option<usize> {
        self.steps.pop_front()
    }

    pub fn clear(&mut self) {
        self.steps.clear();
        self.cost = 0.0;
    }
}
