use ai_grid::{GridIndex, GridView, HexCoord, PlayerId};
use tracing::debug;

use crate::{InfluenceConfig, InfluenceField, PatrolProvider};

#[derive(Debug, Clone, PartialEq)]
struct Layers {
    threat: InfluenceField,
    resource: InfluenceField,
    territory: InfluenceField,
}

impl Layers {
    fn new(index: GridIndex) -> Self {
        Self {
            threat: InfluenceField::new(index),
            resource: InfluenceField::new(index),
            territory: InfluenceField::new(index),
        }
    }
}

/// Threat, resource and territory layers for one acting player.
///
/// Layers are allocated lazily on first use. Every query on a map that was never
/// initialized answers `None` or zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfluenceMap {
    config: InfluenceConfig,
    layers: Option<Layers>,
}

impl InfluenceMap {
    pub fn new(config: InfluenceConfig) -> Self {
        Self {
            config,
            layers: None,
        }
    }

    pub fn config(&self) -> &InfluenceConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.layers.is_some()
    }

    /// Allocate the three layers sized to `grid`. Reallocates only when the radius changes.
    pub fn initialize_maps<G: GridView + ?Sized>(&mut self, grid: &G) {
        let index = grid.index();
        let stale = self
            .layers
            .as_ref()
            .map_or(true, |layers| layers.threat.index() != index);
        if stale {
            self.layers = Some(Layers::new(index));
        }
    }

    /// Clear and repopulate the raw (undiffused) layers in one pass over `grid`.
    pub fn compute_base_layers<G: GridView + ?Sized>(&mut self, grid: &G, acting: PlayerId) {
        self.initialize_maps(grid);
        let config = self.config;
        let Some(layers) = self.layers.as_mut() else {
            return;
        };
        layers.threat.clear();
        layers.resource.clear();
        layers.territory.clear();

        for c in grid.index().coords() {
            let Some(cell) = grid.cell(c) else { continue };

            let territory = match cell.owner {
                Some(owner) if owner == acting => 1.0,
                Some(_) => -1.0,
                None => 0.0,
            };
            layers.territory.set(c, territory);

            let threat = match cell.hostile_occupant(acting) {
                Some(o) if o.kind.is_structure() => config.structure_threat,
                Some(_) => config.mobile_threat,
                None => 0.0,
            };
            layers.threat.set(c, threat);

            let blocked = cell.is_foreign_to(acting)
                || cell.hosts_structure()
                || c.neighbors().any(|n| {
                    grid.cell(n)
                        .is_some_and(|nc| nc.hosts_structure() || nc.is_foreign_to(acting))
                });
            let resource = if blocked {
                0.0
            } else {
                config.resource_values.value(cell.resource)
            };
            layers.resource.set(c, resource);
        }
    }

    /// Diffuse threat and resource with the configured steps and decay.
    pub fn diffuse(&mut self) {
        let InfluenceConfig {
            diffusion_steps,
            decay,
            ..
        } = self.config;
        self.diffuse_with(diffusion_steps, decay);
    }

    /// Each round reads the previous round's output, so spread compounds.
    pub fn diffuse_with(&mut self, steps: u32, decay: f32) {
        let epsilon = self.config.epsilon;
        let Some(layers) = self.layers.as_mut() else {
            return;
        };
        for _ in 0..steps {
            layers.threat = layers.threat.diffused(decay, epsilon);
            layers.resource = layers.resource.diffused(decay, epsilon);
        }
    }

    /// Base layers followed by diffusion.
    pub fn rebuild<G: GridView + ?Sized>(&mut self, grid: &G, acting: PlayerId) {
        self.compute_base_layers(grid, acting);
        self.diffuse();
        debug!(
            player = acting.0,
            radius = grid.radius(),
            total_threat = self.total_threat(),
            "influence maps rebuilt"
        );
    }

    pub fn threat(&self) -> Option<&InfluenceField> {
        self.layers.as_ref().map(|l| &l.threat)
    }

    pub fn resource(&self) -> Option<&InfluenceField> {
        self.layers.as_ref().map(|l| &l.resource)
    }

    pub fn territory(&self) -> Option<&InfluenceField> {
        self.layers.as_ref().map(|l| &l.territory)
    }

    /// Sum of the threat layer.
    pub fn total_threat(&self) -> f32 {
        self.threat().map_or(0.0, InfluenceField::sum)
    }

    pub fn threat_at(&self, c: HexCoord) -> f32 {
        self.threat().map_or(0.0, |f| f.get(c))
    }

    /// `resource - threat * weight` at `c`.
    pub fn expansion_score(&self, c: HexCoord) -> f32 {
        let resource = self.resource().map_or(0.0, |f| f.get(c));
        resource - self.threat_at(c) * self.config.expansion_threat_weight
    }

    pub fn best_expansion_candidate<G: GridView + ?Sized>(&self, grid: &G) -> Option<HexCoord> {
        self.best_expansion_candidate_by(grid, |_| true)
    }

    /// Highest positive expansion score among unoccupied cells accepted by `filter`.
    /// Ties keep the first cell in grid order.
    pub fn best_expansion_candidate_by<G, F>(&self, grid: &G, mut filter: F) -> Option<HexCoord>
    where
        G: GridView + ?Sized,
        F: FnMut(HexCoord) -> bool,
    {
        let layers = self.layers.as_ref()?;
        if layers.resource.index() != grid.index() {
            return None;
        }

        let mut best: Option<(HexCoord, f32)> = None;
        for c in grid.index().coords() {
            let Some(cell) = grid.cell(c) else { continue };
            if cell.is_occupied() {
                continue;
            }
            let score = self.expansion_score(c);
            if score <= 0.0 {
                continue;
            }
            if best.is_some_and(|(_, s)| score <= s) {
                continue;
            }
            if !filter(c) {
                continue;
            }
            best = Some((c, score));
        }
        best.map(|(c, _)| c)
    }

    pub fn patrol_candidate(
        &self,
        provider: &dyn PatrolProvider,
        grid: &dyn GridView,
        player: PlayerId,
        from: HexCoord,
    ) -> Option<HexCoord> {
        if !self.is_initialized() {
            return None;
        }
        provider.patrol_position(grid, self, player, from)
    }
}
