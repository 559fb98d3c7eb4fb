#![cfg(feature = "serde")]

use ai_grid::{Cell, HexCoord, HexGrid, ResourceTier, Terrain};

#[test]
fn grid_round_trips_through_json() {
    let grid = HexGrid::from_fn(1, |c| {
        if c == HexCoord::ORIGIN {
            Cell::new(Terrain::Forest).with_resource(ResourceTier::High)
        } else {
            Cell::default()
        }
    });
    let json = serde_json::to_string(&grid).expect("serialize");
    let back: HexGrid = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, grid);
}
