use crate::{Cell, GridIndex, HexCoord};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Read access to a hexagonal board.
///
/// Object safe so queries can take `&dyn GridView`.
pub trait GridView {
    fn radius(&self) -> i32;

    /// `None` for coordinates off the board.
    fn cell(&self, c: HexCoord) -> Option<&Cell>;

    fn index(&self) -> GridIndex {
        GridIndex::new(self.radius())
    }

    fn contains(&self, c: HexCoord) -> bool {
        self.cell(c).is_some()
    }
}

pub trait GridMut: GridView {
    fn cell_mut(&mut self, c: HexCoord) -> Option<&mut Cell>;
}

/// In-grid hex neighbors of `c`, in direction order.
pub fn neighbors<G: GridView + ?Sized>(
    grid: &G,
    c: HexCoord,
) -> impl Iterator<Item = HexCoord> + '_ {
    c.neighbors().filter(move |n| grid.contains(*n))
}

/// Dense in-memory board addressed through [`GridIndex`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HexGrid {
    index: GridIndex,
    cells: Vec<Option<Cell>>,
}

impl HexGrid {
    /// Board of `radius` filled with plain, unowned cells.
    pub fn new(radius: i32) -> Self {
        Self::from_fn(radius, |_| Cell::default())
    }

    pub fn from_fn(radius: i32, mut f: impl FnMut(HexCoord) -> Cell) -> Self {
        let index = GridIndex::new(radius);
        let cells = (0..index.len())
            .map(|idx| index.coord_at(idx).map(&mut f))
            .collect();
        Self { index, cells }
    }

    /// Replace the cell at `c`. Returns false (and does nothing) off the board.
    pub fn set_cell(&mut self, c: HexCoord, cell: Cell) -> bool {
        match self.cell_mut(c) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (HexCoord, &Cell)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            let cell = cell.as_ref()?;
            Some((self.index.coord_at(idx)?, cell))
        })
    }

    pub fn cell_count(&self) -> usize {
        self.index.cell_count()
    }
}

impl GridView for HexGrid {
    fn radius(&self) -> i32 {
        self.index.radius()
    }

    fn cell(&self, c: HexCoord) -> Option<&Cell> {
        let idx = self.index.index_of(c)?;
        self.cells.get(idx)?.as_ref()
    }

    fn index(&self) -> GridIndex {
        self.index
    }
}

impl GridMut for HexGrid {
    fn cell_mut(&mut self, c: HexCoord) -> Option<&mut Cell> {
        let idx = self.index.index_of(c)?;
        self.cells.get_mut(idx)?.as_mut()
    }
}
