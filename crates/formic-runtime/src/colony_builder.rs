//! Colony builder.
//!
//! Assembles a colony with its rooms and starting population in one
//! expression, instead of a string of `add_*` calls after construction.
//!
//! # Example
//!
//! ```rust
//! use formic_runtime::prelude::*;
//!
//! let colony = ColonyBuilder::new("Harvester", Position::new(10, 20))
//!     .room("granary", 40)
//!     .section("tunnels")
//!     .insects(InsectCategory::Worker, 3)
//!     .insect(Insect::basic().wrap(Attribute::Resourceful))
//!     .build();
//!
//! assert_eq!(colony.rooms().len(), 2);
//! assert_eq!(colony.insects().len(), 4);
//! ```

use crate::colony::{Colony, ColonyConfig};
use formic_core::factory::{generate_insect, InsectCategory};
use formic_core::insect::Insect;
use formic_core::types::{Position, Room};

/// Builder for colonies with pre-populated rooms and insects.
#[derive(Debug, Clone)]
pub struct ColonyBuilder {
    kind: String,
    position: Position,
    config: ColonyConfig,
    rooms: Vec<Room>,
    insects: Vec<Insect>,
}

impl ColonyBuilder {
    pub fn new(kind: impl Into<String>, position: Position) -> Self {
        Self {
            kind: kind.into(),
            position,
            config: ColonyConfig::default(),
            rooms: Vec::new(),
            insects: Vec::new(),
        }
    }

    /// Set the colony configuration (starting food, consumption rate).
    pub fn with_config(mut self, config: ColonyConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a room with a capacity.
    pub fn room(mut self, name: impl Into<String>, capacity: u32) -> Self {
        self.rooms.push(Room::new(name, capacity));
        self
    }

    /// Add a room without a capacity limit.
    pub fn section(mut self, name: impl Into<String>) -> Self {
        self.rooms.push(Room::section(name));
        self
    }

    /// Add an already-built insect.
    pub fn insect(mut self, insect: Insect) -> Self {
        self.insects.push(insect);
        self
    }

    /// Add `count` insects of `category`.
    pub fn insects(mut self, category: InsectCategory, count: usize) -> Self {
        self.insects
            .extend(std::iter::repeat_with(|| generate_insect(category)).take(count));
        self
    }

    pub fn build(self) -> Colony {
        let mut colony = Colony::from_config(self.kind, self.position, self.config);
        for room in self.rooms {
            colony.add_room(room.name, room.capacity);
        }
        for insect in self.insects {
            colony.add_insect(insect);
        }
        colony
    }
}
