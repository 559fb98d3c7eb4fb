use ai_grid::{
    neighbors, Cell, GridMut, GridView, HexCoord, HexGrid, Occupant, PlayerId, Terrain, Unit,
    UnitId, UnitKind, UnitStats,
};

#[test]
fn new_grid_is_plain_and_unowned() {
    let grid = HexGrid::new(2);
    assert_eq!(grid.iter().count(), 19);
    for (_, cell) in grid.iter() {
        assert_eq!(cell.terrain, Terrain::Plains);
        assert!(cell.owner.is_none());
        assert!(!cell.is_occupied());
    }
    assert!(grid.cell(HexCoord::new(2, 2)).is_none());
}

#[test]
fn neighbors_are_clipped_to_the_board() {
    let grid = HexGrid::new(1);
    assert_eq!(neighbors(&grid, HexCoord::ORIGIN).count(), 6);
    assert_eq!(neighbors(&grid, HexCoord::new(1, 0)).count(), 3);
}

#[test]
fn terrain_costs_and_water() {
    assert_eq!(Terrain::Plains.move_cost(), Some(1));
    assert_eq!(Terrain::Forest.move_cost(), Some(2));
    assert_eq!(Terrain::Hills.move_cost(), Some(3));
    assert_eq!(Terrain::Water.move_cost(), None);
    assert!(!Cell::new(Terrain::Water).is_passable());
}

#[test]
fn set_cell_off_board_is_rejected() {
    let mut grid = HexGrid::new(1);
    assert!(!grid.set_cell(HexCoord::new(5, 0), Cell::new(Terrain::Hills)));
    assert!(grid.set_cell(HexCoord::new(0, 1), Cell::new(Terrain::Hills)));
    assert_eq!(grid.cell(HexCoord::new(0, 1)).map(|c| c.terrain), Some(Terrain::Hills));

    let cell = grid.cell_mut(HexCoord::ORIGIN).expect("origin");
    cell.occupant = Some(Occupant {
        unit: UnitId(1),
        owner: PlayerId(0),
        kind: UnitKind::City,
    });
    let origin = grid.cell(HexCoord::ORIGIN).expect("origin");
    assert!(origin.hosts_structure());
    assert!(origin.hostile_occupant(PlayerId(1)).is_some());
    assert!(origin.hostile_occupant(PlayerId(0)).is_none());
}

#[test]
fn units_start_at_full_health() {
    let unit = Unit::new(UnitId(3), PlayerId(1), UnitKind::Soldier, HexCoord::ORIGIN);
    assert_eq!(unit.stats, UnitStats::new(6.0, 20.0));
    assert_eq!(unit.health, 20.0);
    assert!(unit.is_alive());
    assert!(UnitKind::Settlement.is_structure());
    assert!(UnitKind::Settler.is_mobile());
}
