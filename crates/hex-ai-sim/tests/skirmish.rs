use hex_ai::grid::{
    Cell, HexCoord, HexGrid, PlayerId, ResourceTier, Resources, Terrain, UnitKind,
};
use hex_ai::nav::NavWorldView;
use hex_ai::{AiConfig, GameWorld, HexWorld, Scenario};
use hex_ai_sim::{economy_signals, income, EconomyRules, Skirmish};

const P0: PlayerId = PlayerId(0);

#[test]
fn income_counts_structures_and_owned_resources() {
    let mut world = HexWorld::new(HexGrid::from_fn(2, |c| {
        let tier = if c == HexCoord::new(1, 0) { ResourceTier::High } else { ResourceTier::None };
        Cell::new(Terrain::Plains).with_resource(tier)
    }));
    let rules = EconomyRules::default();
    assert!(income(&world, P0, &rules).is_zero());

    world.spawn_unit(P0, UnitKind::Settlement, HexCoord::ORIGIN).unwrap();
    world.claim_cell(HexCoord::new(1, 0), P0);
    assert_eq!(income(&world, P0, &rules), Resources::new(5, 4, 2));
}

#[test]
fn signals_follow_unit_mix_and_stock() {
    let mut world = HexWorld::new(HexGrid::from_fn(2, |_| Cell::new(Terrain::Plains)));
    let rules = EconomyRules::default();
    assert_eq!(economy_signals(&world, P0, &rules), (0.0, true));

    world.spawn_unit(P0, UnitKind::Settler, HexCoord::ORIGIN).unwrap();
    world.spawn_unit(P0, UnitKind::Soldier, HexCoord::new(1, 0)).unwrap();
    world.spawn_unit(P0, UnitKind::Soldier, HexCoord::new(2, 0)).unwrap();
    world.credit(P0, &Resources::new(10, 0, 0));
    assert_eq!(economy_signals(&world, P0, &rules), (2.0, false));
}

#[test]
fn skirmish_advances_turns_and_reports_every_player() {
    let scenario = Scenario::new(5);
    let mut skirmish =
        Skirmish::new(&scenario, &AiConfig::default(), EconomyRules::default(), false);

    let summary = skirmish.run(10);
    assert_eq!(summary.turns, 10);
    assert_eq!(summary.players.len(), 2);
    for p in &summary.players {
        assert!(p.territory >= 7, "player {} lost its start area", p.player);
    }
    assert_eq!(skirmish.world().turn(), 10);
}

#[test]
fn scenario_radius_is_bounded() {
    assert_eq!(Scenario::new(1).effective_radius(), 3);
    assert_eq!(Scenario::new(100_000).effective_radius(), Scenario::MAX_RADIUS);

    let world = Scenario::new(i32::MAX).build();
    assert_eq!(world.grid().radius(), Scenario::MAX_RADIUS);
    assert_eq!(world.players().len(), 2);
}
