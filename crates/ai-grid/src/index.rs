use crate::HexCoord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maps axial coordinates of a hexagonal board into a zero-based dense array.
///
/// The board is the hexagon of `radius` around the origin. Axial components range over
/// `-radius..=radius`, so they are shifted by `radius` and laid out row-major over a
/// `(2 * radius + 1)^2` square; slots outside the hexagon stay unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridIndex {
    radius: i32,
    width: i32,
}

impl GridIndex {
    /// Largest supported radius; `new` clamps anything above it.
    pub const MAX_RADIUS: i32 = 4096;

    pub fn new(radius: i32) -> Self {
        let radius = radius.clamp(0, Self::MAX_RADIUS);
        Self {
            radius,
            width: 2 * radius + 1,
        }
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// Length of backing arrays (including unused corner slots).
    pub fn len(&self) -> usize {
        self.width() * self.width()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of hexes on the board: `3R(R+1) + 1`.
    pub fn cell_count(&self) -> usize {
        let r = self.radius as usize;
        3 * r * (r + 1) + 1
    }

    pub fn contains(&self, c: HexCoord) -> bool {
        c.q.abs() <= self.radius && c.r.abs() <= self.radius && c.s().abs() <= self.radius
    }

    pub fn index_of(&self, c: HexCoord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        let col = c.q + self.radius;
        let row = c.r + self.radius;
        Some((row * self.width + col) as usize)
    }

    pub fn coord_at(&self, idx: usize) -> Option<HexCoord> {
        if idx >= self.len() {
            return None;
        }
        let idx = idx as i32;
        let c = HexCoord::new(idx % self.width - self.radius, idx / self.width - self.radius);
        if self.contains(c) {
            Some(c)
        } else {
            None
        }
    }

    /// All on-board coordinates in index order ("grid order").
    pub fn coords(&self) -> impl Iterator<Item = HexCoord> + '_ {
        (0..self.len()).filter_map(move |idx| self.coord_at(idx))
    }
}
