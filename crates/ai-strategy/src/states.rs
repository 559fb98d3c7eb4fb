use crate::{
    MacroState, StateKind, StrategyConfig, StrategyInputs, StrategyState, TacticalOrder,
    Transition,
};

/// Peace: expand, then develop.
#[derive(Debug, Clone)]
pub struct EconomyState {
    config: StrategyConfig,
    order: TacticalOrder,
}

impl EconomyState {
    pub fn new(config: StrategyConfig) -> Self {
        Self {
            config,
            order: TacticalOrder::EarlyExpansion,
        }
    }

    fn expansion_done(&self, inputs: &StrategyInputs) -> bool {
        inputs.expansion_units >= self.config.expansion_unit_target
            || inputs.settlements >= self.config.expansion_settlement_target
    }

    fn reopen_expansion(&self, inputs: &StrategyInputs) -> bool {
        inputs.all_upgraded() && inputs.cities < self.config.city_target
    }
}

impl StrategyState for EconomyState {
    fn kind(&self) -> StateKind {
        StateKind::Economy
    }

    fn macro_state(&self) -> MacroState {
        MacroState::Economy
    }

    fn order(&self) -> TacticalOrder {
        self.order
    }

    fn enter(&mut self, inputs: &StrategyInputs, hint: Option<TacticalOrder>) {
        self.order = match hint {
            Some(order @ (TacticalOrder::EarlyExpansion | TacticalOrder::Development)) => order,
            _ if self.expansion_done(inputs) => TacticalOrder::Development,
            _ => TacticalOrder::EarlyExpansion,
        };
    }

    fn execute(&mut self, inputs: &StrategyInputs) -> Transition {
        let c = &self.config;
        if inputs.threat > c.war_threshold
            && inputs.military_ratio < c.min_military_ratio
            && inputs.settlements >= c.militarize_min_settlements
        {
            return Transition::To(StateKind::Militarization, None);
        }
        if inputs.threat > c.war_threshold {
            return Transition::To(StateKind::War, None);
        }

        match self.order {
            TacticalOrder::EarlyExpansion if self.expansion_done(inputs) => {
                self.order = TacticalOrder::Development;
            }
            TacticalOrder::Development if self.reopen_expansion(inputs) => {
                self.order = TacticalOrder::EarlyExpansion;
            }
            _ => {}
        }
        Transition::Stay
    }
}

/// Arming up under pressure while still reporting the economy macro state.
#[derive(Debug, Clone)]
pub struct MilitarizationState {
    config: StrategyConfig,
}

impl MilitarizationState {
    pub fn new(config: StrategyConfig) -> Self {
        Self { config }
    }
}

impl StrategyState for MilitarizationState {
    fn kind(&self) -> StateKind {
        StateKind::Militarization
    }

    fn macro_state(&self) -> MacroState {
        MacroState::Economy
    }

    fn order(&self) -> TacticalOrder {
        TacticalOrder::Militarization
    }

    fn enter(&mut self, _inputs: &StrategyInputs, _hint: Option<TacticalOrder>) {}

    fn execute(&mut self, inputs: &StrategyInputs) -> Transition {
        let c = &self.config;
        let threat = inputs.threat;
        let ratio = inputs.military_ratio;
        let stand_down = Transition::To(StateKind::Economy, Some(TacticalOrder::Development));

        if threat > c.war_threshold {
            return Transition::To(StateKind::War, None);
        }
        if threat < c.exit_militarization_threshold {
            return stand_down;
        }
        if ratio >= c.secure_ratio && threat < c.secure_threat_fraction * c.war_threshold {
            return stand_down;
        }
        if threat < c.calm_threat && ratio >= c.calm_ratio {
            return stand_down;
        }
        if inputs.my_power > c.power_margin * threat && threat < c.exit_war_threshold {
            return stand_down;
        }
        Transition::Stay
    }
}

/// Open conflict: attack when stronger, otherwise hold.
#[derive(Debug, Clone)]
pub struct WarState {
    config: StrategyConfig,
    order: TacticalOrder,
}

impl WarState {
    pub fn new(config: StrategyConfig) -> Self {
        Self {
            config,
            order: TacticalOrder::ActiveDefense,
        }
    }

    fn posture(inputs: &StrategyInputs) -> TacticalOrder {
        if inputs.my_power > inputs.threat {
            TacticalOrder::Assault
        } else {
            TacticalOrder::ActiveDefense
        }
    }
}

impl StrategyState for WarState {
    fn kind(&self) -> StateKind {
        StateKind::War
    }

    fn macro_state(&self) -> MacroState {
        MacroState::War
    }

    fn order(&self) -> TacticalOrder {
        self.order
    }

    fn enter(&mut self, inputs: &StrategyInputs, _hint: Option<TacticalOrder>) {
        self.order = Self::posture(inputs);
    }

    fn execute(&mut self, inputs: &StrategyInputs) -> Transition {
        if inputs.economy_critical || inputs.threat < self.config.peace_threshold {
            return Transition::To(StateKind::Economy, None);
        }
        self.order = Self::posture(inputs);
        Transition::Stay
    }
}
