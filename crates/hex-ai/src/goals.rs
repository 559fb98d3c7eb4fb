//! Goals each unit kind pursues under each tactical order.

use ai_core::{Proposition, WorldState};
use ai_grid::UnitKind;
use ai_strategy::TacticalOrder;

use crate::facts::*;

fn goal(prop: Proposition) -> WorldState {
    WorldState::new().with(prop, 1)
}

/// Goals in priority order; the director takes the first one that plans.
pub fn goals_for(order: TacticalOrder, kind: UnitKind) -> Vec<WorldState> {
    use TacticalOrder::*;
    use UnitKind::*;

    let props: &[Proposition] = match (order, kind) {
        (_, Settler) => &[SETTLEMENT_BUILT],

        (EarlyExpansion, Settlement) => &[SETTLER_TRAINED, CITY_UPGRADED],
        (EarlyExpansion, City) => &[SETTLER_TRAINED],
        (Development, Settlement) => &[CITY_UPGRADED, SETTLER_TRAINED],
        (Development, City) => &[SETTLER_TRAINED, SOLDIER_TRAINED],
        (Militarization | Assault | ActiveDefense, Settlement | City) => &[SOLDIER_TRAINED],

        (EarlyExpansion | Development | Militarization, Soldier) => &[AT_PATROL_POST],
        (Assault, Soldier) => &[ENEMY_ENGAGED, RAIDED, AT_PATROL_POST],
        (ActiveDefense, Soldier) => &[ENEMY_ENGAGED, AT_PATROL_POST],
    };
    props.iter().copied().map(goal).collect()
}
