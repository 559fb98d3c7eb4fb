//! Concrete unit actions and the per-kind capability sets.

mod attack;
mod build;
mod raid;
mod train;
mod upgrade;

pub use attack::AttackAction;
pub use build::BuildSettlementAction;
pub use raid::RaidAction;
pub use train::TrainAction;
pub use upgrade::UpgradeToCityAction;

use ai_core::{Action, ActionKey, ActionSpec};
use ai_grid::{UnitId, UnitKind};
use ai_nav::{HexPathfinder, MoveToAction};

use crate::facts::*;
use crate::targets;
use crate::{AiConfig, GameWorld};

pub const MOVE_TO_SITE: ActionKey = ActionKey("move_to_site");
pub const MOVE_TO_ENEMY: ActionKey = ActionKey("move_to_enemy");
pub const MOVE_TO_PATROL: ActionKey = ActionKey("move_to_patrol");
pub const MOVE_TO_RAID: ActionKey = ActionKey("move_to_raid");
pub const BUILD_SETTLEMENT: ActionKey = ActionKey("build_settlement");
pub const UPGRADE_CITY: ActionKey = ActionKey("upgrade_city");
pub const TRAIN_SETTLER: ActionKey = ActionKey("train_settler");
pub const TRAIN_SOLDIER: ActionKey = ActionKey("train_soldier");
pub const ATTACK: ActionKey = ActionKey("attack");
pub const RAID: ActionKey = ActionKey("raid");

/// Everything a unit of `kind` can do.
pub fn capabilities_for<W>(kind: UnitKind, config: &AiConfig) -> Vec<Box<dyn Action<W>>>
where
    W: GameWorld + 'static,
{
    let rules = &config.actions;
    let pathfinder = HexPathfinder::new(config.pathfinder);
    let mut actions: Vec<Box<dyn Action<W>>> = Vec::new();

    match kind {
        UnitKind::Settler => {
            actions.push(Box::new(MoveToAction::new(
                ActionSpec::new(MOVE_TO_SITE, rules.move_cost).with_effect(AT_EXPANSION_SITE, 1),
                pathfinder,
                Box::new(|world: &W, id: UnitId| {
                    let unit = world.unit(id)?;
                    targets::expansion_site(world, unit)
                }),
            )));
            actions.push(Box::new(BuildSettlementAction::new(
                ActionSpec::new(BUILD_SETTLEMENT, rules.build_settlement_cost)
                    .with_precondition(AT_EXPANSION_SITE, 1)
                    .with_effect(SETTLEMENT_BUILT, 1),
                rules.settlement_price,
            )));
        }
        UnitKind::Soldier => {
            actions.push(Box::new(MoveToAction::new(
                ActionSpec::new(MOVE_TO_ENEMY, rules.move_cost).with_effect(NEAR_ENEMY, 1),
                pathfinder,
                Box::new(|world: &W, id: UnitId| {
                    let unit = world.unit(id)?;
                    targets::enemy_approach(world, unit)
                }),
            )));
            let patrol = config.patrol;
            actions.push(Box::new(MoveToAction::new(
                ActionSpec::new(MOVE_TO_PATROL, rules.move_cost).with_effect(AT_PATROL_POST, 1),
                pathfinder,
                Box::new(move |world: &W, id: UnitId| {
                    let unit = world.unit(id)?;
                    targets::patrol_post(world, unit, &patrol)
                }),
            )));
            actions.push(Box::new(MoveToAction::new(
                ActionSpec::new(MOVE_TO_RAID, rules.move_cost).with_effect(AT_RAID_TARGET, 1),
                pathfinder,
                Box::new(|world: &W, id: UnitId| {
                    let unit = world.unit(id)?;
                    targets::raid_target(world, unit)
                }),
            )));
            actions.push(Box::new(AttackAction::new(
                ActionSpec::new(ATTACK, rules.attack_cost)
                    .with_precondition(NEAR_ENEMY, 1)
                    .with_effect(ENEMY_ENGAGED, 1),
            )));
            actions.push(Box::new(RaidAction::new(
                ActionSpec::new(RAID, rules.raid_cost)
                    .with_precondition(AT_RAID_TARGET, 1)
                    .with_effect(RAIDED, 1),
                rules.raid_loot,
                rules.raid_cooldown,
            )));
        }
        UnitKind::Settlement | UnitKind::City => {
            if kind == UnitKind::Settlement {
                actions.push(Box::new(UpgradeToCityAction::new(
                    ActionSpec::new(UPGRADE_CITY, rules.upgrade_city_cost)
                        .with_effect(CITY_UPGRADED, 1),
                    rules.city_price,
                    rules.upgrade_turns,
                )));
            }
            actions.push(Box::new(TrainAction::new(
                ActionSpec::new(TRAIN_SETTLER, rules.train_settler_cost)
                    .with_effect(SETTLER_TRAINED, 1),
                UnitKind::Settler,
                rules.settler_price,
            )));
            actions.push(Box::new(TrainAction::new(
                ActionSpec::new(TRAIN_SOLDIER, rules.train_soldier_cost)
                    .with_effect(SOLDIER_TRAINED, 1),
                UnitKind::Soldier,
                rules.soldier_price,
            )));
        }
    }

    actions
}
