//! Registry — every colony of one simulation, addressed by id.
//!
//! Ids are the colony's index in creation order. Colonies are never removed,
//! so an id stays valid (and unique) for the life of the registry.
//!
//! Time advances in rounds: one round ticks every colony once, in id order,
//! and the next round starts only after the last colony has ticked.

use crate::colony::{Colony, ColonyConfig, ColonySnapshot, ResourceIntake, TickOutcome};
use crate::colony_builder::ColonyBuilder;
use formic_core::error::{Result, SimError};
use formic_core::factory::InsectCategory;
use formic_core::types::{ColonyId, Position, Tick};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Notable things that happened while advancing time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RegistryEvent {
    /// A colony's queen starved during the given tick.
    QueenPerished { tick: Tick, colony: ColonyId },
}

/// Summary of an `execute_ticks` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TickReport {
    /// Rounds executed.
    pub rounds: u64,
    /// Individual colony ticks applied (`rounds * colonies`).
    pub applications: u64,
    /// Events in the order they occurred.
    pub events: Vec<RegistryEvent>,
}

impl TickReport {
    /// Colonies that collapsed during this call, in collapse order.
    pub fn perished(&self) -> impl Iterator<Item = ColonyId> + '_ {
        self.events.iter().map(|event| match event {
            RegistryEvent::QueenPerished { colony, .. } => *colony,
        })
    }
}

/// Owns all colonies of a simulation.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    colonies: Vec<Colony>,
    config: ColonyConfig,
    tick: Tick,
}

impl Registry {
    /// Create an empty registry with default colony configuration.
    pub fn new() -> Self {
        Self::with_config(ColonyConfig::default())
    }

    /// Create an empty registry whose colonies use `config`.
    pub fn with_config(config: ColonyConfig) -> Self {
        Self {
            colonies: Vec::new(),
            config,
            tick: 0,
        }
    }

    pub fn config(&self) -> ColonyConfig {
        self.config
    }

    /// Rounds executed since the registry was created.
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    pub fn len(&self) -> usize {
        self.colonies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colonies.is_empty()
    }

    pub fn colonies(&self) -> &[Colony] {
        &self.colonies
    }

    pub fn get(&self, id: ColonyId) -> Option<&Colony> {
        self.colonies.get(id.index())
    }

    /// Map a raw operator-supplied number onto a colony id.
    pub fn resolve(&self, raw: i64) -> Result<ColonyId> {
        usize::try_from(raw)
            .ok()
            .filter(|&index| index < self.colonies.len())
            .map(ColonyId::new)
            .ok_or(SimError::invalid_raw_colony(raw))
    }

    fn colony_mut(&mut self, id: ColonyId) -> Result<&mut Colony> {
        self.colonies
            .get_mut(id.index())
            .ok_or_else(|| SimError::invalid_colony(id.index()))
    }

    /// Create a colony and return its id.
    pub fn create_colony(&mut self, kind: impl Into<String>, x: i32, y: i32) -> ColonyId {
        let colony = ColonyBuilder::new(kind, Position::new(x, y))
            .with_config(self.config)
            .build();
        self.adopt(colony)
    }

    /// Take ownership of a pre-built colony and return its id.
    pub fn adopt(&mut self, colony: Colony) -> ColonyId {
        let id = ColonyId::new(self.colonies.len());
        info!(colony = %id, kind = colony.kind(), position = %colony.position(), "colony created");
        self.colonies.push(colony);
        id
    }

    /// Deliver resources to a colony.
    pub fn allocate_resources(
        &mut self,
        id: ColonyId,
        kind: &str,
        amount: i64,
    ) -> Result<ResourceIntake> {
        let colony = self.colony_mut(id)?;
        let intake = colony.receive_resources(kind, amount).map_err(|err| {
            warn!(colony = %id, %err, "resource delivery rejected");
            err
        })?;
        if intake == ResourceIntake::Wasted {
            warn!(colony = %id, kind, amount, "delivery to collapsed colony had no effect");
        }
        Ok(intake)
    }

    /// Run `rounds` rounds. Zero rounds is a no-op.
    pub fn execute_ticks(&mut self, rounds: u64) -> TickReport {
        let mut report = TickReport::default();

        for _ in 0..rounds {
            self.tick += 1;
            debug!(tick = self.tick, colonies = self.colonies.len(), "processing tick");

            for (index, colony) in self.colonies.iter_mut().enumerate() {
                report.applications += 1;
                if colony.process_tick() == TickOutcome::QueenPerished {
                    let id = ColonyId::new(index);
                    info!(colony = %id, tick = self.tick, "queen perished due to starvation");
                    report.events.push(RegistryEvent::QueenPerished {
                        tick: self.tick,
                        colony: id,
                    });
                }
            }
            report.rounds += 1;
        }

        report
    }

    /// Snapshot of one colony.
    pub fn display_summary(&self, id: ColonyId) -> Result<ColonySnapshot> {
        self.get(id)
            .map(Colony::display_details)
            .ok_or_else(|| SimError::invalid_colony(id.index()))
    }

    /// Snapshots of every colony, in id order.
    pub fn summaries(&self) -> Vec<(ColonyId, ColonySnapshot)> {
        self.colonies
            .iter()
            .enumerate()
            .map(|(index, colony)| (ColonyId::new(index), colony.display_details()))
            .collect()
    }

    /// Raise an insect in a colony. Returns the colony's new population.
    pub fn spawn_insect(&mut self, id: ColonyId, category: InsectCategory) -> Result<usize> {
        let colony = self.colony_mut(id)?;
        colony.spawn(category);
        debug!(colony = %id, %category, "insect spawned");
        Ok(colony.insects().len())
    }

    /// Add a room to a colony. Returns the colony's new room count.
    pub fn add_room(
        &mut self,
        id: ColonyId,
        name: impl Into<String>,
        capacity: Option<u32>,
    ) -> Result<usize> {
        let colony = self.colony_mut(id)?;
        colony.add_room(name, capacity);
        Ok(colony.rooms().len())
    }
}
