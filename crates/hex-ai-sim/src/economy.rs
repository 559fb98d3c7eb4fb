use hex_ai::grid::{PlayerId, ResourceTier, Resources, UnitKind};
use hex_ai::nav::NavWorldView;
use hex_ai::{GameWorld, HexWorld};
use serde::{Deserialize, Serialize};

/// Per-turn income and the thresholds behind the economy signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyRules {
    pub settlement_income: Resources,
    pub city_income: Resources,
    /// Extra yield of an owned cell by resource tier (low, mid, high).
    pub tier_income: [Resources; 3],
    /// Below this combined stock the economy counts as critical.
    pub critical_stock: u32,
}

impl Default for EconomyRules {
    fn default() -> Self {
        Self {
            settlement_income: Resources::new(3, 3, 1),
            city_income: Resources::new(6, 5, 3),
            tier_income: [
                Resources::new(1, 0, 0),
                Resources::new(1, 1, 0),
                Resources::new(2, 1, 1),
            ],
            critical_stock: 10,
        }
    }
}

/// What `player` earns this turn: a flat yield per settlement or city plus the
/// resource yield of every owned cell.
pub fn income(world: &HexWorld, player: PlayerId, rules: &EconomyRules) -> Resources {
    let mut total = Resources::ZERO;
    for id in world.roster(player) {
        let Some(unit) = world.unit(id) else { continue };
        let yield_ = match unit.kind {
            UnitKind::Settlement => rules.settlement_income,
            UnitKind::City => rules.city_income,
            UnitKind::Settler | UnitKind::Soldier => continue,
        };
        total = total.saturating_add(&yield_);
    }

    let grid = world.grid();
    for c in grid.index().coords() {
        let Some(cell) = grid.cell(c) else { continue };
        if !cell.is_owned_by(player) {
            continue;
        }
        let tier = match cell.resource {
            ResourceTier::None => continue,
            ResourceTier::Low => 0,
            ResourceTier::Mid => 1,
            ResourceTier::High => 2,
        };
        total = total.saturating_add(&rules.tier_income[tier]);
    }
    total
}

/// `(military_to_economy_ratio, economy_critical)` for `player`.
///
/// The ratio is soldiers per economic unit (settlers, settlements, cities); with no
/// economic units it is the soldier count. The economy is critical when the stock is
/// below `critical_stock` and nothing produces income.
pub fn economy_signals(world: &HexWorld, player: PlayerId, rules: &EconomyRules) -> (f32, bool) {
    let count = |kind| world.count_units(player, kind) as f32;
    let soldiers = count(UnitKind::Soldier);
    let economic = count(UnitKind::Settler) + count(UnitKind::Settlement) + count(UnitKind::City);
    let ratio = soldiers / economic.max(1.0);

    let stock = world.ledger().balance(player);
    let total = u64::from(stock.food) + u64::from(stock.wood) + u64::from(stock.gold);
    let critical =
        total < u64::from(rules.critical_stock) && income(world, player, rules).is_zero();
    (ratio, critical)
}
