#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One discrete decision/update pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TickContext {
    pub tick: u64,
}

impl TickContext {
    pub fn new(tick: u64) -> Self {
        Self { tick }
    }

    pub fn next(self) -> Self {
        Self {
            tick: self.tick.saturating_add(1),
        }
    }
}
