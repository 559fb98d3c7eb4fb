use ai_grid::{UnitKind, UnitStats};
use ai_strategy::{
    military_power, EconomyState, MacroState, StateKind, StrategicStateMachine, StrategyConfig,
    StrategyInputs, StrategyState, TacticalOrder, Transition,
};

fn calm() -> StrategyInputs {
    StrategyInputs {
        threat: 0.0,
        my_power: 10.0,
        military_ratio: 1.5,
        ..StrategyInputs::default()
    }
}

fn with_threat(threat: f32) -> StrategyInputs {
    StrategyInputs { threat, ..calm() }
}

#[test]
fn starts_in_early_expansion() {
    let fsm = StrategicStateMachine::default();
    assert_eq!(fsm.state_kind(), StateKind::Economy);
    assert_eq!(fsm.macro_state(), MacroState::Economy);
    assert_eq!(fsm.order(), TacticalOrder::EarlyExpansion);
}

#[test]
fn hysteresis_band_holds_war_until_peace_threshold() {
    let mut fsm = StrategicStateMachine::default();

    let d = fsm.update(&with_threat(60.0));
    assert_eq!(d.macro_state, MacroState::War);
    assert!(d.changed);

    let d = fsm.update(&with_threat(45.0));
    assert_eq!(d.macro_state, MacroState::War);

    let d = fsm.update(&with_threat(35.0));
    assert_eq!(d.macro_state, MacroState::Economy);
    assert!(d.changed);
    assert_eq!(fsm.transitions(), 2);
}

#[test]
fn threat_inside_band_does_not_start_a_war() {
    let mut fsm = StrategicStateMachine::default();
    let d = fsm.update(&with_threat(45.0));
    assert_eq!(d.macro_state, MacroState::Economy);
    assert!(!d.changed);
    // Exactly at the threshold is not above it.
    let d = fsm.update(&with_threat(50.0));
    assert_eq!(d.macro_state, MacroState::Economy);
}

#[test]
fn war_posture_follows_relative_power() {
    let mut fsm = StrategicStateMachine::default();
    let d = fsm.update(&StrategyInputs {
        threat: 60.0,
        my_power: 80.0,
        ..calm()
    });
    assert_eq!(d.order, TacticalOrder::Assault);

    let d = fsm.update(&StrategyInputs {
        threat: 90.0,
        my_power: 80.0,
        ..calm()
    });
    assert_eq!(d.macro_state, MacroState::War);
    assert_eq!(d.order, TacticalOrder::ActiveDefense);
    assert!(d.changed);
}

#[test]
fn economy_collapse_ends_the_war() {
    let mut fsm = StrategicStateMachine::default();
    fsm.update(&with_threat(80.0));
    let d = fsm.update(&StrategyInputs {
        threat: 80.0,
        economy_critical: true,
        ..calm()
    });
    assert_eq!(d.macro_state, MacroState::Economy);
}

#[test]
fn weak_established_economy_militarizes_first() {
    let mut fsm = StrategicStateMachine::default();
    let pressured = StrategyInputs {
        threat: 60.0,
        military_ratio: 0.5,
        settlements: 2,
        ..calm()
    };
    let d = fsm.update(&pressured);
    assert_eq!(fsm.state_kind(), StateKind::Militarization);
    assert_eq!(d.macro_state, MacroState::Economy);
    assert_eq!(d.order, TacticalOrder::Militarization);

    // Staying above the war threshold escalates.
    fsm.update(&pressured);
    assert_eq!(fsm.state_kind(), StateKind::War);
}

#[test]
fn militarization_stands_down_into_development() {
    let pressured = StrategyInputs {
        threat: 60.0,
        military_ratio: 0.5,
        my_power: 0.0,
        settlements: 2,
        ..calm()
    };
    let cases = [
        // Threat below the exit threshold.
        StrategyInputs { threat: 15.0, ..pressured },
        // Secure ratio with moderate threat.
        StrategyInputs { threat: 35.0, military_ratio: 2.0, ..pressured },
        // Calm threat with a decent ratio.
        StrategyInputs { threat: 25.0, military_ratio: 1.2, ..pressured },
        // Clearly stronger than the remaining threat.
        StrategyInputs { threat: 44.0, my_power: 70.0, ..pressured },
    ];
    for inputs in cases {
        let mut fsm = StrategicStateMachine::default();
        fsm.update(&pressured);
        assert_eq!(fsm.state_kind(), StateKind::Militarization);
        let d = fsm.update(&inputs);
        assert_eq!(fsm.state_kind(), StateKind::Economy, "{inputs:?}");
        assert_eq!(d.order, TacticalOrder::Development);
    }

    let mut fsm = StrategicStateMachine::default();
    fsm.update(&pressured);
    fsm.update(&StrategyInputs { threat: 40.0, ..pressured });
    assert_eq!(fsm.state_kind(), StateKind::Militarization);
}

#[test]
fn expansion_gives_way_to_development_and_back() {
    let mut fsm = StrategicStateMachine::default();
    let d = fsm.update(&StrategyInputs {
        settlements: 5,
        ..calm()
    });
    assert_eq!(d.order, TacticalOrder::Development);
    assert!(d.changed);

    let d = fsm.update(&StrategyInputs {
        settlements: 2,
        cities: 2,
        ..calm()
    });
    assert_eq!(d.order, TacticalOrder::EarlyExpansion);

    let d = fsm.update(&StrategyInputs {
        expansion_units: 5,
        ..calm()
    });
    assert_eq!(d.order, TacticalOrder::Development);

    // Enough cities: development holds.
    let d = fsm.update(&StrategyInputs {
        settlements: 3,
        cities: 3,
        ..calm()
    });
    assert_eq!(d.order, TacticalOrder::Development);
    assert!(!d.changed);
}

#[test]
fn economy_entry_picks_order_from_hint_or_inputs() {
    let config = StrategyConfig::default();
    let mut state = EconomyState::new(config);
    state.enter(&calm(), Some(TacticalOrder::Development));
    assert_eq!(state.order(), TacticalOrder::Development);

    state.enter(&calm(), None);
    assert_eq!(state.order(), TacticalOrder::EarlyExpansion);

    state.enter(&StrategyInputs { settlements: 6, ..calm() }, None);
    assert_eq!(state.order(), TacticalOrder::Development);

    assert_eq!(state.execute(&with_threat(51.0)), Transition::To(StateKind::War, None));
}

#[test]
fn military_power_weights_health_lightly() {
    let stats = [
        UnitStats::for_kind(UnitKind::Soldier),
        UnitStats::for_kind(UnitKind::City),
    ];
    // (6 + 2) + (4 + 5)
    assert_eq!(military_power(&stats), 17.0);
    assert_eq!(military_power(std::iter::empty()), 0.0);
}
