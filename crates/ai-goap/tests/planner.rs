use ai_core::{
    Action, ActionKey, ActionSpec, ActionStatus, Proposition, TickContext, WorldMut, WorldState,
    WorldView,
};
use ai_goap::{GoapPlanner, PlanError};

const IN_RANGE: Proposition = Proposition("in_range");
const SETTLEMENT_BUILT: Proposition = Proposition("settlement_built");
const HAS_WOOD: Proposition = Proposition("has_wood");

fn move_spec() -> ActionSpec {
    ActionSpec::new(ActionKey("move"), 10.0).with_effect(IN_RANGE, 1)
}

fn build_spec() -> ActionSpec {
    ActionSpec::new(ActionKey("build"), 5.0)
        .with_precondition(IN_RANGE, 1)
        .with_effect(SETTLEMENT_BUILT, 1)
}

#[test]
fn move_then_build() {
    let specs = [build_spec(), move_spec()];
    let refs: Vec<&ActionSpec> = specs.iter().collect();
    let mut planner = GoapPlanner::new();

    let start = WorldState::from([(IN_RANGE, 0)]);
    let goal = WorldState::from([(SETTLEMENT_BUILT, 1)]);
    let plan = planner.search(&refs, &start, &goal).expect("plan");

    assert_eq!(plan.steps().collect::<Vec<_>>(), vec![1, 0]);
    assert_eq!(plan.cost(), 15.0);
    // root, move, move -> build; build is not applicable at the root.
    assert_eq!(planner.last_stats().nodes, 3);
    assert_eq!(planner.last_stats().leaves, 1);
}

#[test]
fn satisfied_or_empty_goal_is_an_empty_plan() {
    let specs = [move_spec()];
    let refs: Vec<&ActionSpec> = specs.iter().collect();
    let mut planner = GoapPlanner::new();

    let plan = planner
        .search(&refs, &WorldState::new(), &WorldState::new())
        .expect("empty goal");
    assert!(plan.is_empty());
    assert_eq!(plan.cost(), 0.0);

    let start = WorldState::from([(IN_RANGE, 1)]);
    let plan = planner
        .search(&refs, &start, &WorldState::from([(IN_RANGE, 1)]))
        .expect("already satisfied");
    assert!(plan.is_empty());
}

#[test]
fn unreachable_goal_is_no_plan() {
    let mut planner = GoapPlanner::new();
    let goal = WorldState::from([(SETTLEMENT_BUILT, 1)]);
    assert_eq!(
        planner.search(&[], &WorldState::new(), &goal),
        Err(PlanError::NoPlan)
    );

    let specs = [build_spec()];
    let refs: Vec<&ActionSpec> = specs.iter().collect();
    assert_eq!(
        planner.search(&refs, &WorldState::new(), &goal),
        Err(PlanError::NoPlan)
    );
}

#[test]
fn cheapest_sequence_wins_over_shortest() {
    let specs = [
        // Direct but expensive.
        ActionSpec::new(ActionKey("buy_settlement"), 30.0).with_effect(SETTLEMENT_BUILT, 1),
        ActionSpec::new(ActionKey("chop"), 2.0).with_effect(HAS_WOOD, 1),
        ActionSpec::new(ActionKey("build_from_wood"), 3.0)
            .with_precondition(HAS_WOOD, 1)
            .with_effect(SETTLEMENT_BUILT, 1),
    ];
    let refs: Vec<&ActionSpec> = specs.iter().collect();
    let mut planner = GoapPlanner::new();
    let plan = planner
        .search(&refs, &WorldState::new(), &WorldState::from([(SETTLEMENT_BUILT, 1)]))
        .expect("plan");
    assert_eq!(plan.steps().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(plan.cost(), 5.0);
}

#[test]
fn equal_cost_keeps_first_found() {
    let specs = [
        ActionSpec::new(ActionKey("a"), 4.0).with_effect(SETTLEMENT_BUILT, 1),
        ActionSpec::new(ActionKey("b"), 4.0).with_effect(SETTLEMENT_BUILT, 1),
    ];
    let refs: Vec<&ActionSpec> = specs.iter().collect();
    let plan = GoapPlanner::new()
        .search(&refs, &WorldState::new(), &WorldState::from([(SETTLEMENT_BUILT, 1)]))
        .expect("plan");
    assert_eq!(plan.steps().collect::<Vec<_>>(), vec![0]);
}

#[test]
fn effects_overwrite_instead_of_merging() {
    let specs = [
        ActionSpec::new(ActionKey("spend_wood"), 1.0)
            .with_precondition(HAS_WOOD, 1)
            .with_effect(HAS_WOOD, 0)
            .with_effect(IN_RANGE, 1),
    ];
    let refs: Vec<&ActionSpec> = specs.iter().collect();
    let start = WorldState::from([(HAS_WOOD, 1)]);
    let goal = WorldState::from([(HAS_WOOD, 1), (IN_RANGE, 1)]);
    assert_eq!(
        GoapPlanner::new().search(&refs, &start, &goal),
        Err(PlanError::NoPlan)
    );
}

struct NoWorld;

impl WorldView for NoWorld {
    type Agent = u64;
}

impl WorldMut for NoWorld {}

struct Fixed {
    spec: ActionSpec,
    feasible: bool,
}

impl Action<NoWorld> for Fixed {
    fn spec(&self) -> &ActionSpec {
        &self.spec
    }

    fn check_feasible(&mut self, _ctx: &TickContext, _agent: u64, _world: &NoWorld) -> bool {
        self.feasible
    }

    fn perform(&mut self, _ctx: &TickContext, _agent: u64, _world: &mut NoWorld) -> ActionStatus {
        ActionStatus::Done
    }
}

#[test]
fn infeasible_actions_are_left_out() {
    let mut actions: Vec<Box<dyn Action<NoWorld>>> = vec![
        Box::new(Fixed {
            spec: ActionSpec::new(ActionKey("cheap"), 1.0).with_effect(SETTLEMENT_BUILT, 1),
            feasible: false,
        }),
        Box::new(Fixed {
            spec: ActionSpec::new(ActionKey("costly"), 9.0).with_effect(SETTLEMENT_BUILT, 1),
            feasible: true,
        }),
    ];
    let ctx = TickContext::new(0);
    let goal = WorldState::from([(SETTLEMENT_BUILT, 1)]);
    let plan = GoapPlanner::new()
        .plan(&ctx, 1, &NoWorld, &mut actions, &WorldState::new(), &goal)
        .expect("plan");
    assert_eq!(plan.steps().collect::<Vec<_>>(), vec![1]);
    assert_eq!(plan.cost(), 9.0);
}
