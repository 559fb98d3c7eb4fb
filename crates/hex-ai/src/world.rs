use std::collections::BTreeMap;

use ai_core::{WorldMut, WorldView};
use ai_grid::{
    GridMut, GridView, HexCoord, HexGrid, Ledger, LedgerError, Occupant, PlayerId, Resources, Unit,
    UnitId, UnitKind, UnitStats,
};
use ai_influence::InfluenceMap;
use ai_nav::{NavWorldMut, NavWorldView};
use ai_strategy::EconomySignals;
use tracing::debug;

/// Everything the opponent needs from the game: board, units, ledger and economy signals.
///
/// Mutations happen only inside action perform steps (and the director's influence swap).
pub trait GameWorld: NavWorldMut<Agent = UnitId> + EconomySignals {
    fn influence_mut(&mut self) -> &mut InfluenceMap;

    fn unit(&self, id: UnitId) -> Option<&Unit>;
    /// Ids of `player`'s units in ascending order.
    fn roster(&self, player: PlayerId) -> Vec<UnitId>;

    fn can_afford(&self, player: PlayerId, cost: &Resources) -> bool;
    fn spend(&mut self, player: PlayerId, cost: &Resources) -> Result<(), LedgerError>;
    fn credit(&mut self, player: PlayerId, amount: &Resources);

    /// Place a new unit on a free, passable cell.
    fn spawn_unit(&mut self, owner: PlayerId, kind: UnitKind, at: HexCoord) -> Option<UnitId>;
    fn remove_unit(&mut self, id: UnitId) -> Option<Unit>;
    /// Change a unit's kind in place, keeping its id and position.
    fn convert_unit(&mut self, id: UnitId, kind: UnitKind) -> bool;
    /// Apply damage; returns true when the unit was destroyed.
    fn damage_unit(&mut self, id: UnitId, amount: f32) -> bool;

    fn claim_cell(&mut self, c: HexCoord, player: PlayerId) -> bool;
    fn set_raid_cooldown(&mut self, c: HexCoord, turns: u32) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct EconomyStatus {
    ratio: f32,
    critical: bool,
}

impl Default for EconomyStatus {
    fn default() -> Self {
        Self {
            ratio: 1.0,
            critical: false,
        }
    }
}

/// In-memory reference game state.
#[derive(Debug, Clone)]
pub struct HexWorld {
    grid: HexGrid,
    influence: InfluenceMap,
    units: BTreeMap<UnitId, Unit>,
    ledger: Ledger,
    signals: BTreeMap<PlayerId, EconomyStatus>,
    next_id: u32,
    turn: u64,
}

impl HexWorld {
    pub fn new(grid: HexGrid) -> Self {
        Self {
            grid,
            influence: InfluenceMap::default(),
            units: BTreeMap::new(),
            ledger: Ledger::new(),
            signals: BTreeMap::new(),
            next_id: 1,
            turn: 0,
        }
    }

    pub fn with_influence(mut self, influence: InfluenceMap) -> Self {
        self.influence = influence;
        self
    }

    pub fn hex_grid(&self) -> &HexGrid {
        &self.grid
    }

    pub fn hex_grid_mut(&mut self) -> &mut HexGrid {
        &mut self.grid
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    pub fn units(&self) -> impl Iterator<Item = &Unit> + '_ {
        self.units.values()
    }

    pub fn players(&self) -> Vec<PlayerId> {
        let mut players: Vec<PlayerId> = self.units.values().map(|u| u.owner).collect();
        players.sort();
        players.dedup();
        players
    }

    pub fn count_units(&self, player: PlayerId, kind: UnitKind) -> usize {
        self.units
            .values()
            .filter(|u| u.owner == player && u.kind == kind)
            .count()
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn set_economy_signals(&mut self, player: PlayerId, ratio: f32, critical: bool) {
        self.signals
            .insert(player, EconomyStatus { ratio, critical });
    }

    /// End-of-turn bookkeeping: raid cooldowns tick down.
    pub fn advance_turn(&mut self) {
        self.turn += 1;
        let coords: Vec<HexCoord> = self.grid.index().coords().collect();
        for c in coords {
            if let Some(cell) = self.grid.cell_mut(c) {
                cell.raid_cooldown = cell.raid_cooldown.saturating_sub(1);
            }
        }
    }

    fn occupant_of(unit: &Unit) -> Occupant {
        Occupant {
            unit: unit.id,
            owner: unit.owner,
            kind: unit.kind,
        }
    }
}

impl WorldView for HexWorld {
    type Agent = UnitId;
}

impl WorldMut for HexWorld {}

impl NavWorldView for HexWorld {
    fn grid(&self) -> &dyn GridView {
        &self.grid
    }

    fn influence(&self) -> &InfluenceMap {
        &self.influence
    }

    fn position(&self, agent: UnitId) -> Option<HexCoord> {
        self.units.get(&agent).map(|u| u.position)
    }
}

impl NavWorldMut for HexWorld {
    fn step_unit(&mut self, agent: UnitId, to: HexCoord) -> bool {
        let Some(unit) = self.units.get(&agent) else {
            return false;
        };
        let from = unit.position;
        if unit.kind.is_structure() || !from.is_adjacent(to) {
            return false;
        }
        if !self
            .grid
            .cell(to)
            .is_some_and(|c| c.is_passable() && !c.is_occupied())
        {
            return false;
        }
        let occupant = Self::occupant_of(unit);

        if let Some(cell) = self.grid.cell_mut(from) {
            cell.occupant = None;
        }
        if let Some(cell) = self.grid.cell_mut(to) {
            cell.occupant = Some(occupant);
        }
        if let Some(unit) = self.units.get_mut(&agent) {
            unit.position = to;
        }
        true
    }
}

impl EconomySignals for HexWorld {
    fn military_to_economy_ratio(&self, player: PlayerId) -> f32 {
        self.signals.get(&player).copied().unwrap_or_default().ratio
    }

    fn is_economy_critical(&self, player: PlayerId) -> bool {
        self.signals.get(&player).copied().unwrap_or_default().critical
    }
}

impl GameWorld for HexWorld {
    fn influence_mut(&mut self) -> &mut InfluenceMap {
        &mut self.influence
    }

    fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(&id)
    }

    fn roster(&self, player: PlayerId) -> Vec<UnitId> {
        self.units
            .values()
            .filter(|u| u.owner == player)
            .map(|u| u.id)
            .collect()
    }

    fn can_afford(&self, player: PlayerId, cost: &Resources) -> bool {
        self.ledger.can_afford(player, cost)
    }

    fn spend(&mut self, player: PlayerId, cost: &Resources) -> Result<(), LedgerError> {
        self.ledger.spend(player, cost)
    }

    fn credit(&mut self, player: PlayerId, amount: &Resources) {
        self.ledger.credit(player, amount);
    }

    fn spawn_unit(&mut self, owner: PlayerId, kind: UnitKind, at: HexCoord) -> Option<UnitId> {
        let cell = self.grid.cell_mut(at)?;
        if !cell.is_passable() || cell.is_occupied() {
            return None;
        }
        let id = UnitId(self.next_id);
        self.next_id += 1;
        let unit = Unit::new(id, owner, kind, at);
        cell.occupant = Some(Self::occupant_of(&unit));
        self.units.insert(id, unit);
        debug!(unit = %id, player = owner.0, kind = kind.name(), %at, "unit spawned");
        Some(id)
    }

    fn remove_unit(&mut self, id: UnitId) -> Option<Unit> {
        let unit = self.units.remove(&id)?;
        if let Some(cell) = self.grid.cell_mut(unit.position) {
            if cell.occupant.is_some_and(|o| o.unit == id) {
                cell.occupant = None;
            }
        }
        Some(unit)
    }

    fn convert_unit(&mut self, id: UnitId, kind: UnitKind) -> bool {
        let Some(unit) = self.units.get_mut(&id) else {
            return false;
        };
        unit.kind = kind;
        unit.stats = UnitStats::for_kind(kind);
        unit.health = unit.stats.max_health;
        let occupant = Self::occupant_of(unit);
        if let Some(cell) = self.grid.cell_mut(unit.position) {
            cell.occupant = Some(occupant);
        }
        true
    }

    fn damage_unit(&mut self, id: UnitId, amount: f32) -> bool {
        let Some(unit) = self.units.get_mut(&id) else {
            return false;
        };
        unit.health -= amount;
        if unit.is_alive() {
            return false;
        }
        self.remove_unit(id);
        true
    }

    fn claim_cell(&mut self, c: HexCoord, player: PlayerId) -> bool {
        match self.grid.cell_mut(c) {
            Some(cell) => {
                cell.owner = Some(player);
                true
            }
            None => false,
        }
    }

    fn set_raid_cooldown(&mut self, c: HexCoord, turns: u32) -> bool {
        match self.grid.cell_mut(c) {
            Some(cell) => {
                cell.raid_cooldown = turns;
                true
            }
            None => false,
        }
    }
}
