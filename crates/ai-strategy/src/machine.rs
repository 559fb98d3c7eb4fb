use tracing::{debug, info};

use crate::{
    EconomyState, MacroState, MilitarizationState, StateKind, StrategyConfig, StrategyInputs,
    StrategyState, TacticalOrder, Transition, WarState,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StrategicDecision {
    pub macro_state: MacroState,
    pub order: TacticalOrder,
    /// Macro state or order differs from before the update.
    pub changed: bool,
}

/// Cyclic state machine over [`StateKind`]; starts in economy / early expansion.
pub struct StrategicStateMachine {
    config: StrategyConfig,
    current: Box<dyn StrategyState>,
    transitions: u64,
}

impl StrategicStateMachine {
    pub fn new(config: StrategyConfig) -> Self {
        Self {
            config,
            current: Box::new(EconomyState::new(config)),
            transitions: 0,
        }
    }

    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    pub fn state_kind(&self) -> StateKind {
        self.current.kind()
    }

    pub fn macro_state(&self) -> MacroState {
        self.current.macro_state()
    }

    pub fn order(&self) -> TacticalOrder {
        self.current.order()
    }

    /// Number of macro transitions taken so far.
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    fn make_state(&self, kind: StateKind) -> Box<dyn StrategyState> {
        match kind {
            StateKind::Economy => Box::new(EconomyState::new(self.config)),
            StateKind::Militarization => Box::new(MilitarizationState::new(self.config)),
            StateKind::War => Box::new(WarState::new(self.config)),
        }
    }

    pub fn update(&mut self, inputs: &StrategyInputs) -> StrategicDecision {
        let before = (self.current.macro_state(), self.current.order());

        match self.current.execute(inputs) {
            Transition::Stay => {}
            Transition::To(kind, hint) => {
                let from = self.current.kind();
                self.current.exit();
                let mut next = self.make_state(kind);
                next.enter(inputs, hint);
                self.current = next;
                self.transitions += 1;
                info!(
                    ?from,
                    to = ?kind,
                    order = self.current.order().name(),
                    threat = inputs.threat,
                    ratio = inputs.military_ratio,
                    transitions = self.transitions,
                    "strategy transition"
                );
            }
        }

        let after = (self.current.macro_state(), self.current.order());
        let changed = before != after;
        if changed {
            debug!(
                macro_state = ?after.0,
                order = after.1.name(),
                "tactical order changed"
            );
        }

        StrategicDecision {
            macro_state: after.0,
            order: after.1,
            changed,
        }
    }
}

impl Default for StrategicStateMachine {
    fn default() -> Self {
        Self::new(StrategyConfig::default())
    }
}

impl std::fmt::Debug for StrategicStateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategicStateMachine")
            .field("state", &self.current.kind())
            .field("order", &self.current.order())
            .field("transitions", &self.transitions)
            .finish()
    }
}
