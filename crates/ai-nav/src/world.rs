use ai_core::{WorldMut, WorldView};
use ai_grid::{GridView, HexCoord};
use ai_influence::InfluenceMap;

pub trait NavWorldView: WorldView {
    fn grid(&self) -> &dyn GridView;
    /// Influence maps as of the last rebuild.
    fn influence(&self) -> &InfluenceMap;
    fn position(&self, agent: Self::Agent) -> Option<HexCoord>;
}

pub trait NavWorldMut: WorldMut + NavWorldView {
    /// Move `agent` onto the adjacent cell `to`. Returns false when the step is not
    /// possible (not adjacent, impassable, or occupied).
    fn step_unit(&mut self, agent: Self::Agent, to: HexCoord) -> bool;
}
