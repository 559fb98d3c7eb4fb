use ai_grid::{GridView, HexCoord, PlayerId};

use crate::InfluenceMap;

/// Chooses a defensive post for a unit.
///
/// Implementations should return an unoccupied, reachable coordinate near the
/// boundary of `player`'s territory where threat is low, or `None`.
pub trait PatrolProvider {
    fn patrol_position(
        &self,
        grid: &dyn GridView,
        maps: &InfluenceMap,
        player: PlayerId,
        from: HexCoord,
    ) -> Option<HexCoord>;
}
