use std::collections::BTreeMap;

use crate::PlayerId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Resources {
    pub food: u32,
    pub wood: u32,
    pub gold: u32,
}

impl Resources {
    pub const ZERO: Resources = Resources {
        food: 0,
        wood: 0,
        gold: 0,
    };

    pub const fn new(food: u32, wood: u32, gold: u32) -> Self {
        Self { food, wood, gold }
    }

    pub fn covers(&self, cost: &Resources) -> bool {
        self.food >= cost.food && self.wood >= cost.wood && self.gold >= cost.gold
    }

    pub fn checked_sub(&self, cost: &Resources) -> Option<Resources> {
        Some(Resources {
            food: self.food.checked_sub(cost.food)?,
            wood: self.wood.checked_sub(cost.wood)?,
            gold: self.gold.checked_sub(cost.gold)?,
        })
    }

    pub fn saturating_add(&self, other: &Resources) -> Resources {
        Resources {
            food: self.food.saturating_add(other.food),
            wood: self.wood.saturating_add(other.wood),
            gold: self.gold.saturating_add(other.gold),
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl std::fmt::Display for Resources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "food {} / wood {} / gold {}", self.food, self.wood, self.gold)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("player {player} cannot afford {cost} (has {available})")]
    InsufficientFunds {
        player: PlayerId,
        cost: Resources,
        available: Resources,
    },
}

/// Per-player resource balances.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ledger {
    balances: BTreeMap<PlayerId, Resources>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unknown players hold nothing.
    pub fn balance(&self, player: PlayerId) -> Resources {
        self.balances.get(&player).copied().unwrap_or_default()
    }

    pub fn set_balance(&mut self, player: PlayerId, balance: Resources) {
        self.balances.insert(player, balance);
    }

    pub fn can_afford(&self, player: PlayerId, cost: &Resources) -> bool {
        self.balance(player).covers(cost)
    }

    /// Debit `cost`; the balance is untouched on failure.
    pub fn spend(&mut self, player: PlayerId, cost: &Resources) -> Result<(), LedgerError> {
        let available = self.balance(player);
        let remaining = available
            .checked_sub(cost)
            .ok_or(LedgerError::InsufficientFunds {
                player,
                cost: *cost,
                available,
            })?;
        self.balances.insert(player, remaining);
        Ok(())
    }

    pub fn credit(&mut self, player: PlayerId, amount: &Resources) {
        let balance = self.balance(player).saturating_add(amount);
        self.balances.insert(player, balance);
    }
}
