use hex_ai::grid::{
    Cell, HexCoord, HexGrid, PlayerId, Resources, Terrain, UnitId, UnitKind,
};
use hex_ai::nav::{NavWorldMut, NavWorldView};
use hex_ai::strategy::EconomySignals;
use hex_ai::{GameWorld, HexWorld};

const P0: PlayerId = PlayerId(0);
const P1: PlayerId = PlayerId(1);

fn plains(radius: i32) -> HexWorld {
    HexWorld::new(HexGrid::from_fn(radius, |_| Cell::new(Terrain::Plains)))
}

#[test]
fn spawn_assigns_increasing_ids_and_occupies_cells() {
    let mut world = plains(2);
    let a = world.spawn_unit(P0, UnitKind::Settler, HexCoord::ORIGIN).unwrap();
    let b = world.spawn_unit(P1, UnitKind::Soldier, HexCoord::new(1, 0)).unwrap();

    assert_eq!(a, UnitId(1));
    assert_eq!(b, UnitId(2));
    assert_eq!(world.roster(P0), vec![a]);
    assert_eq!(world.position(b), Some(HexCoord::new(1, 0)));

    let cell = world.grid().cell(HexCoord::new(1, 0)).unwrap();
    let occupant = cell.occupant.unwrap();
    assert_eq!((occupant.unit, occupant.owner, occupant.kind), (b, P1, UnitKind::Soldier));
}

#[test]
fn spawn_rejects_occupied_water_and_off_board() {
    let mut world = plains(2);
    world
        .hex_grid_mut()
        .set_cell(HexCoord::new(0, 1), Cell::new(Terrain::Water));
    world.spawn_unit(P0, UnitKind::Settler, HexCoord::ORIGIN).unwrap();

    assert_eq!(world.spawn_unit(P0, UnitKind::Soldier, HexCoord::ORIGIN), None);
    assert_eq!(world.spawn_unit(P0, UnitKind::Soldier, HexCoord::new(0, 1)), None);
    assert_eq!(world.spawn_unit(P0, UnitKind::Soldier, HexCoord::new(5, 0)), None);
}

#[test]
fn step_unit_moves_one_free_cell() {
    let mut world = plains(2);
    let settler = world.spawn_unit(P0, UnitKind::Settler, HexCoord::ORIGIN).unwrap();
    world.spawn_unit(P1, UnitKind::Soldier, HexCoord::new(0, 1)).unwrap();

    assert!(!world.step_unit(settler, HexCoord::new(2, 0)), "not adjacent");
    assert!(!world.step_unit(settler, HexCoord::new(0, 1)), "occupied");
    assert!(world.step_unit(settler, HexCoord::new(1, 0)));

    assert_eq!(world.position(settler), Some(HexCoord::new(1, 0)));
    assert!(!world.grid().cell(HexCoord::ORIGIN).unwrap().is_occupied());
    assert!(world.grid().cell(HexCoord::new(1, 0)).unwrap().is_occupied());
}

#[test]
fn structures_do_not_move() {
    let mut world = plains(2);
    let town = world.spawn_unit(P0, UnitKind::Settlement, HexCoord::ORIGIN).unwrap();
    assert!(!world.step_unit(town, HexCoord::new(1, 0)));
}

#[test]
fn convert_refreshes_stats_and_occupant() {
    let mut world = plains(2);
    let id = world.spawn_unit(P0, UnitKind::Settler, HexCoord::ORIGIN).unwrap();
    assert!(world.convert_unit(id, UnitKind::Settlement));

    let unit = world.unit(id).unwrap();
    assert_eq!(unit.kind, UnitKind::Settlement);
    assert_eq!(unit.health, unit.stats.max_health);
    assert!(world.grid().cell(HexCoord::ORIGIN).unwrap().hosts_structure());
    assert!(!world.convert_unit(UnitId(99), UnitKind::City));
}

#[test]
fn lethal_damage_removes_the_unit() {
    let mut world = plains(2);
    let id = world.spawn_unit(P0, UnitKind::Settler, HexCoord::ORIGIN).unwrap();

    assert!(!world.damage_unit(id, 4.0));
    assert_eq!(world.unit(id).unwrap().health, 6.0);
    assert!(world.damage_unit(id, 6.0));
    assert!(world.unit(id).is_none());
    assert!(!world.grid().cell(HexCoord::ORIGIN).unwrap().is_occupied());
}

#[test]
fn ledger_operations_go_through_the_world() {
    let mut world = plains(1);
    world.credit(P0, &Resources::new(10, 5, 0));
    assert!(world.can_afford(P0, &Resources::new(10, 0, 0)));
    assert!(world.spend(P0, &Resources::new(0, 6, 0)).is_err());
    world.spend(P0, &Resources::new(10, 5, 0)).unwrap();
    assert!(world.ledger().balance(P0).is_zero());
}

#[test]
fn advance_turn_ticks_raid_cooldowns() {
    let mut world = plains(1);
    world.set_raid_cooldown(HexCoord::ORIGIN, 2);
    world.advance_turn();
    assert_eq!(world.grid().cell(HexCoord::ORIGIN).unwrap().raid_cooldown, 1);
    world.advance_turn();
    world.advance_turn();
    assert_eq!(world.grid().cell(HexCoord::ORIGIN).unwrap().raid_cooldown, 0);
    assert_eq!(world.turn(), 3);
}

#[test]
fn economy_signals_default_until_set() {
    let mut world = plains(1);
    assert_eq!(world.military_to_economy_ratio(P0), 1.0);
    assert!(!world.is_economy_critical(P0));

    world.set_economy_signals(P0, 0.25, true);
    assert_eq!(world.military_to_economy_ratio(P0), 0.25);
    assert!(world.is_economy_critical(P0));
    assert_eq!(world.military_to_economy_ratio(P1), 1.0);
}
