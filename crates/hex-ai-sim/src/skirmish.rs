use hex_ai::core::TickContext;
use hex_ai::grid::{PlayerId, Resources, UnitKind};
use hex_ai::nav::NavWorldView;
use hex_ai::strategy::MacroState;
use hex_ai::{AiConfig, DecisionReport, Director, GameWorld, HexWorld, Scenario};
use serde::Serialize;
use tracing::info;

use crate::economy::{economy_signals, income, EconomyRules};

/// End-of-run standing of one player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSummary {
    pub player: u8,
    pub macro_state: String,
    pub order: String,
    pub settlers: usize,
    pub soldiers: usize,
    pub settlements: usize,
    pub cities: usize,
    pub territory: usize,
    pub food: u32,
    pub wood: u32,
    pub gold: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkirmishSummary {
    pub turns: u64,
    pub players: Vec<PlayerSummary>,
}

fn macro_name(state: MacroState) -> &'static str {
    match state {
        MacroState::Economy => "economy",
        MacroState::War => "war",
    }
}

/// AI-versus-AI game on a [`Scenario`] board, one director per player.
pub struct Skirmish {
    world: HexWorld,
    directors: Vec<Director<HexWorld>>,
    economy: EconomyRules,
    ctx: TickContext,
}

impl Skirmish {
    pub fn new(scenario: &Scenario, config: &AiConfig, economy: EconomyRules, trace: bool) -> Self {
        let world = scenario.build();
        let directors = world
            .players()
            .into_iter()
            .map(|p| {
                let director = Director::new(p, config.clone());
                if trace {
                    director.with_tracing()
                } else {
                    director
                }
            })
            .collect();
        Self {
            world,
            directors,
            economy,
            ctx: TickContext::new(0),
        }
    }

    pub fn world(&self) -> &HexWorld {
        &self.world
    }

    /// Each player in turn observes its economy signals and runs its director; then
    /// every player collects income and the world advances.
    pub fn play_turn(&mut self) -> Vec<DecisionReport> {
        let mut reports = Vec::with_capacity(self.directors.len());
        for director in self.directors.iter_mut() {
            let player = director.player();
            let (ratio, critical) = economy_signals(&self.world, player, &self.economy);
            self.world.set_economy_signals(player, ratio, critical);

            let report = director.run_turn(&self.ctx, &mut self.world);
            if report.decision.changed {
                info!(
                    turn = self.world.turn(),
                    %player,
                    order = report.decision.order.name(),
                    "posture changed"
                );
            }
            reports.push(report);
        }

        let players: Vec<PlayerId> = self.directors.iter().map(Director::player).collect();
        for player in players {
            let earned = income(&self.world, player, &self.economy);
            self.world.credit(player, &earned);
        }
        self.world.advance_turn();
        self.ctx = self.ctx.next();
        reports
    }

    pub fn run(&mut self, turns: u32) -> SkirmishSummary {
        for _ in 0..turns {
            self.play_turn();
        }
        self.summary()
    }

    pub fn summary(&self) -> SkirmishSummary {
        let grid = self.world.grid();
        let players = self
            .directors
            .iter()
            .map(|director| {
                let player = director.player();
                let count = |kind| self.world.count_units(player, kind);
                let Resources { food, wood, gold } = self.world.ledger().balance(player);
                PlayerSummary {
                    player: player.0,
                    macro_state: macro_name(director.macro_state()).to_string(),
                    order: director.order().name().to_string(),
                    settlers: count(UnitKind::Settler),
                    soldiers: count(UnitKind::Soldier),
                    settlements: count(UnitKind::Settlement),
                    cities: count(UnitKind::City),
                    territory: grid
                        .index()
                        .coords()
                        .filter(|c| grid.cell(*c).is_some_and(|cell| cell.is_owned_by(player)))
                        .count(),
                    food,
                    wood,
                    gold,
                }
            })
            .collect();
        SkirmishSummary {
            turns: self.world.turn(),
            players,
        }
    }
}
