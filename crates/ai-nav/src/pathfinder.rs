use ai_grid::{GridView, HexCoord};
use ai_influence::InfluenceField;
use core::cmp::Ordering;
use std::collections::BinaryHeap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PathfinderConfig {
    /// Extra cost per unit of threat on the entered cell.
    pub threat_factor: f32,
}

impl Default for PathfinderConfig {
    fn default() -> Self {
        Self { threat_factor: 2.0 }
    }
}

#[derive(Debug)]
struct OpenNode {
    f: f32,
    g: f32,
    idx: usize,
    tie: u64,
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap; on equal f the
        // earlier push wins.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.tie.cmp(&self.tie))
    }
}

/// A* over hex cells. Entering a cell costs its terrain move cost plus
/// `threat * threat_factor`; the heuristic is hex distance, which never
/// overestimates because every step costs at least 1.
///
/// Stateless between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HexPathfinder {
    config: PathfinderConfig,
}

impl HexPathfinder {
    pub fn new(config: PathfinderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PathfinderConfig {
        &self.config
    }

    /// Cost of stepping onto `to`; `None` if it is off the board or impassable.
    pub fn step_cost<G: GridView + ?Sized>(
        &self,
        grid: &G,
        to: HexCoord,
        threat: &InfluenceField,
    ) -> Option<f32> {
        let terrain = grid.cell(to)?.move_cost()?;
        Some(terrain as f32 + threat.get(to) * self.config.threat_factor)
    }

    /// Sum of step costs along `path` (the first coordinate is free).
    pub fn path_cost<G: GridView + ?Sized>(
        &self,
        grid: &G,
        path: &[HexCoord],
        threat: &InfluenceField,
    ) -> Option<f32> {
        path.iter()
            .skip(1)
            .try_fold(0.0, |acc, c| Some(acc + self.step_cost(grid, *c, threat)?))
    }

    /// Cheapest path from `start` to `goal`, both inclusive. Empty when unreachable.
    pub fn find_path<G: GridView + ?Sized>(
        &self,
        grid: &G,
        start: HexCoord,
        goal: HexCoord,
        threat: &InfluenceField,
    ) -> Vec<HexCoord> {
        let index = grid.index();
        let (Some(start_idx), Some(goal_idx)) = (index.index_of(start), index.index_of(goal))
        else {
            return Vec::new();
        };
        if grid.cell(start).is_none() {
            return Vec::new();
        }
        if !grid.cell(goal).is_some_and(|c| c.is_passable()) {
            return Vec::new();
        }
        if start == goal {
            return vec![start];
        }

        let mut open = BinaryHeap::<OpenNode>::new();
        let mut tie: u64 = 0;

        let mut g_score = vec![f32::INFINITY; index.len()];
        let mut came_from: Vec<Option<usize>> = vec![None; index.len()];

        g_score[start_idx] = 0.0;
        open.push(OpenNode {
            f: start.distance(goal) as f32,
            g: 0.0,
            idx: start_idx,
            tie,
        });
        tie += 1;

        while let Some(node) = open.pop() {
            if node.idx == goal_idx {
                return reconstruct_path(&came_from, goal_idx)
                    .into_iter()
                    .filter_map(|i| index.coord_at(i))
                    .collect();
            }

            if node.g > g_score[node.idx] {
                // Stale heap entry.
                continue;
            }
            let Some(current) = index.coord_at(node.idx) else {
                continue;
            };

            for n in current.neighbors() {
                let Some(n_idx) = index.index_of(n) else { continue };
                let Some(cost) = self.step_cost(grid, n, threat) else {
                    continue;
                };

                let tentative_g = node.g + cost;
                if tentative_g >= g_score[n_idx] {
                    continue;
                }

                came_from[n_idx] = Some(node.idx);
                g_score[n_idx] = tentative_g;
                open.push(OpenNode {
                    f: tentative_g + n.distance(goal) as f32,
                    g: tentative_g,
                    idx: n_idx,
                    tie,
                });
                tie += 1;
            }
        }

        Vec::new()
    }
}

fn reconstruct_path(came_from: &[Option<usize>], mut current: usize) -> Vec<usize> {
    let mut out = vec![current];
    while let Some(prev) = came_from[current] {
        current = prev;
        out.push(current);
    }
    out.reverse();
    out
}
