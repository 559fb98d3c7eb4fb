use ai_strategy::{MacroState, StateKind, StrategicStateMachine, StrategyInputs, TacticalOrder};
use proptest::prelude::*;

fn arb_inputs() -> impl Strategy<Value = StrategyInputs> {
    (
        0.0f32..200.0,
        0.0f32..200.0,
        0.0f32..4.0,
        any::<bool>(),
        0u32..8,
        0u32..8,
        0u32..8,
    )
        .prop_map(
            |(threat, my_power, military_ratio, critical, settlements, cities, expansion_units)| {
                StrategyInputs {
                    threat,
                    my_power,
                    military_ratio,
                    economy_critical: critical,
                    settlements,
                    cities: cities.min(settlements),
                    expansion_units,
                }
            },
        )
}

proptest! {
    #[test]
    fn every_sequence_yields_a_consistent_state(
        seq in proptest::collection::vec(arb_inputs(), 1..40),
    ) {
        let mut fsm = StrategicStateMachine::default();
        for inputs in &seq {
            let before = fsm.transitions();
            let d = fsm.update(inputs);
            prop_assert!(fsm.transitions() - before <= 1);
            prop_assert_eq!(d.macro_state, fsm.macro_state());
            prop_assert_eq!(d.order, fsm.order());

            match fsm.state_kind() {
                StateKind::Economy => {
                    prop_assert_eq!(d.macro_state, MacroState::Economy);
                    prop_assert!(matches!(
                        d.order,
                        TacticalOrder::EarlyExpansion | TacticalOrder::Development
                    ));
                }
                StateKind::Militarization => {
                    prop_assert_eq!(d.macro_state, MacroState::Economy);
                    prop_assert_eq!(d.order, TacticalOrder::Militarization);
                }
                StateKind::War => {
                    prop_assert_eq!(d.macro_state, MacroState::War);
                    let expected = if inputs.my_power > inputs.threat {
                        TacticalOrder::Assault
                    } else {
                        TacticalOrder::ActiveDefense
                    };
                    prop_assert_eq!(d.order, expected);
                }
            }
        }
    }

    #[test]
    fn war_is_always_reachable_and_left(threat in 51.0f32..500.0, calm in 0.0f32..39.9) {
        let mut fsm = StrategicStateMachine::default();
        let hot = StrategyInputs { threat, military_ratio: 1.5, ..StrategyInputs::default() };
        fsm.update(&hot);
        prop_assert_eq!(fsm.state_kind(), StateKind::War);
        fsm.update(&StrategyInputs { threat: calm, ..hot });
        prop_assert_eq!(fsm.state_kind(), StateKind::Economy);
    }
}
