use ai_grid::{GridIndex, HexCoord};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One scalar per board cell, laid out through [`GridIndex`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InfluenceField {
    index: GridIndex,
    values: Vec<f32>,
}

impl InfluenceField {
    pub fn new(index: GridIndex) -> Self {
        Self {
            index,
            values: vec![0.0; index.len()],
        }
    }

    pub fn index(&self) -> GridIndex {
        self.index
    }

    pub fn radius(&self) -> i32 {
        self.index.radius()
    }

    /// Value at `c`; zero off the board.
    pub fn get(&self, c: HexCoord) -> f32 {
        self.index
            .index_of(c)
            .and_then(|idx| self.values.get(idx))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn set(&mut self, c: HexCoord, value: f32) -> bool {
        match self.index.index_of(c).and_then(|idx| self.values.get_mut(idx)) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn add(&mut self, c: HexCoord, amount: f32) {
        if let Some(slot) = self.index.index_of(c).and_then(|idx| self.values.get_mut(idx)) {
            *slot += amount;
        }
    }

    pub fn clear(&mut self) {
        self.values.iter_mut().for_each(|v| *v = 0.0);
    }

    pub fn sum(&self) -> f32 {
        self.values.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (HexCoord, f32)> + '_ {
        self.index.coords().map(move |c| (c, self.get(c)))
    }

    /// One diffusion round: every source above `epsilon` adds `value * decay` to each
    /// in-grid neighbor of a copy. Sources keep their own value.
    pub fn diffused(&self, decay: f32, epsilon: f32) -> InfluenceField {
        let mut next = self.clone();
        for c in self.index.coords() {
            let value = self.get(c);
            if value <= epsilon {
                continue;
            }
            for n in c.neighbors() {
                next.add(n, value * decay);
            }
        }
        next
    }
}
