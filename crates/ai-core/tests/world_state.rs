use ai_core::{ActionKey, ActionSpec, Proposition, WorldState};

const IN_RANGE: Proposition = Proposition("in_range");
const SETTLEMENT_BUILT: Proposition = Proposition("settlement_built");
const HAS_GOLD: Proposition = Proposition("has_gold");

#[test]
fn empty_requirement_is_always_satisfied() {
    assert!(WorldState::new().satisfies(&WorldState::new()));
    assert!(WorldState::from([(IN_RANGE, 0)]).satisfies(&WorldState::new()));
}

#[test]
fn missing_fact_does_not_satisfy_requirement() {
    let state = WorldState::from([(IN_RANGE, 1)]);
    assert!(!state.satisfies(&WorldState::from([(SETTLEMENT_BUILT, 0)])));
    assert!(!state.satisfies(&WorldState::from([(IN_RANGE, 0)])));
    assert!(state.satisfies(&WorldState::from([(IN_RANGE, 1)])));
}

#[test]
fn effects_overwrite_instead_of_merging() {
    let mut state = WorldState::from([(HAS_GOLD, 3), (IN_RANGE, 0)]);
    state.apply(&WorldState::from([(HAS_GOLD, 1), (SETTLEMENT_BUILT, 1)]));

    assert_eq!(state.get(HAS_GOLD), Some(1));
    assert_eq!(state.get(IN_RANGE), Some(0));
    assert_eq!(state.get(SETTLEMENT_BUILT), Some(1));
}

#[test]
fn applied_leaves_source_untouched() {
    let base = WorldState::from([(IN_RANGE, 0)]);
    let next = base.applied(&WorldState::from([(IN_RANGE, 1)]));

    assert_eq!(base.get(IN_RANGE), Some(0));
    assert_eq!(next.get(IN_RANGE), Some(1));
}

#[test]
fn action_spec_checks_preconditions_and_applies_effects() {
    let build = ActionSpec::new(ActionKey("build"), 5.0)
        .with_precondition(IN_RANGE, 1)
        .with_effect(SETTLEMENT_BUILT, 1);

    let far = WorldState::from([(IN_RANGE, 0)]);
    let near = WorldState::from([(IN_RANGE, 1)]);

    assert!(!build.is_applicable(&far));
    assert!(build.is_applicable(&near));

    let after = build.apply(&near);
    assert_eq!(after.get(SETTLEMENT_BUILT), Some(1));
    assert_eq!(after.get(IN_RANGE), Some(1));
}

#[test]
fn iteration_order_is_stable() {
    let state: WorldState = [(SETTLEMENT_BUILT, 1), (HAS_GOLD, 2), (IN_RANGE, 3)]
        .into_iter()
        .collect();
    let names: Vec<&'static str> = state.iter().map(|(p, _)| p.name()).collect();
    assert_eq!(names, vec!["has_gold", "in_range", "settlement_built"]);
}
