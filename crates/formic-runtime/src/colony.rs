//! Colony — rooms, insects, and the food/queen state machine.
//!
//! A colony is either thriving, holding some food, or collapsed:
//!
//! ```text
//! Thriving(f) --tick--> Thriving(f - c)   when f - c > 0
//! Thriving(f) --tick--> Collapsed         when f - c <= 0
//! Collapsed   --tick--> Collapsed
//! ```
//!
//! where `c` is the per-tick consumption. Once collapsed the food stock is
//! frozen: ticks do nothing and deliveries are absorbed without effect.

use formic_core::error::{Result, SimError};
use formic_core::factory::{generate_insect, InsectCategory};
use formic_core::insect::Insect;
use formic_core::types::{Position, ResourceKind, Room};
use serde::{Deserialize, Serialize};

/// Tunable colony parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColonyConfig {
    /// Food a new colony starts with (default: 100).
    #[serde(default = "default_initial_food")]
    pub initial_food: i64,
    /// Food the queen eats each tick (default: 5).
    #[serde(default = "default_food_per_tick")]
    pub food_per_tick: i64,
}

fn default_initial_food() -> i64 { 100 }
fn default_food_per_tick() -> i64 { 5 }

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            initial_food: default_initial_food(),
            food_per_tick: default_food_per_tick(),
        }
    }
}

/// Lifecycle state of a colony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColonyState {
    /// The queen is alive; carries the current food stock.
    Thriving(i64),
    /// The queen starved. Terminal.
    Collapsed,
}

/// What a single tick did to a colony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TickOutcome {
    /// The queen ate and survived.
    Consumed { remaining: i64 },
    /// The queen ate the last of the stock and died this tick.
    QueenPerished,
    /// The colony had already collapsed; nothing happened.
    Dormant,
}

/// What happened to a resource delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResourceIntake {
    /// Added to the stock; carries the new total.
    Stored { total: i64 },
    /// The colony has collapsed, so the delivery had no effect.
    Wasted,
}

/// Read-only view of a colony for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColonySnapshot {
    pub kind: String,
    pub position: Position,
    pub food_stock: i64,
    pub queen_alive: bool,
    pub room_count: usize,
    pub insect_count: usize,
    pub rooms: Vec<String>,
    /// Trait labels of each insect, in the order they were added.
    pub insects: Vec<Vec<String>>,
}

/// A single colony.
#[derive(Debug, Clone)]
pub struct Colony {
    kind: String,
    position: Position,
    food_stock: i64,
    queen_alive: bool,
    rooms: Vec<Room>,
    insects: Vec<Insect>,
    food_per_tick: i64,
}

impl Colony {
    /// Create a colony with default configuration.
    pub fn new(kind: impl Into<String>, position: Position) -> Self {
        Self::from_config(kind, position, ColonyConfig::default())
    }

    /// Create a colony with the specified configuration.
    pub fn from_config(kind: impl Into<String>, position: Position, config: ColonyConfig) -> Self {
        Self {
            kind: kind.into(),
            position,
            food_stock: config.initial_food,
            queen_alive: true,
            rooms: Vec::new(),
            insects: Vec::new(),
            food_per_tick: config.food_per_tick,
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn food_stock(&self) -> i64 {
        self.food_stock
    }

    pub fn queen_alive(&self) -> bool {
        self.queen_alive
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn insects(&self) -> &[Insect] {
        &self.insects
    }

    pub fn state(&self) -> ColonyState {
        if self.queen_alive {
            ColonyState::Thriving(self.food_stock)
        } else {
            ColonyState::Collapsed
        }
    }

    /// Add a room. Names need not be unique.
    pub fn add_room(&mut self, name: impl Into<String>, capacity: Option<u32>) {
        self.rooms.push(Room {
            name: name.into(),
            capacity,
        });
    }

    /// Add a room without a capacity limit.
    pub fn add_section(&mut self, name: impl Into<String>) {
        self.rooms.push(Room::section(name));
    }

    /// Names of all rooms, in the order they were added.
    pub fn list_sections(&self) -> Vec<&str> {
        self.rooms.iter().map(|r| r.name.as_str()).collect()
    }

    /// Take ownership of an insect. Room capacity does not limit population.
    pub fn add_insect(&mut self, insect: Insect) {
        self.insects.push(insect);
    }

    /// Raise a new insect of `category` and add it.
    pub fn spawn(&mut self, category: InsectCategory) {
        self.add_insect(generate_insect(category));
    }

    /// Deliver `amount` of the resource labelled `kind`.
    ///
    /// Only `"food"` is stored. The amount is not clamped, so a negative
    /// delivery lowers the stock; starvation is still only checked on tick.
    /// A delivery that would leave the `i64` range is refused with
    /// [`SimError::StockOverflow`] and the stock is left as it was.
    pub fn receive_resources(&mut self, kind: &str, amount: i64) -> Result<ResourceIntake> {
        match kind.parse::<ResourceKind>()? {
            ResourceKind::Food => {
                if !self.queen_alive {
                    return Ok(ResourceIntake::Wasted);
                }
                self.food_stock = self.food_stock.checked_add(amount).ok_or(
                    SimError::StockOverflow {
                        stock: self.food_stock,
                        amount,
                    },
                )?;
                Ok(ResourceIntake::Stored {
                    total: self.food_stock,
                })
            }
        }
    }

    /// Advance this colony by one tick.
    pub fn process_tick(&mut self) -> TickOutcome {
        if !self.queen_alive {
            return TickOutcome::Dormant;
        }

        // Saturating: a stock already near i64::MIN is <= 0 either way.
        self.food_stock = self.food_stock.saturating_sub(self.food_per_tick);
        if self.food_stock <= 0 {
            self.queen_alive = false;
            TickOutcome::QueenPerished
        } else {
            TickOutcome::Consumed {
                remaining: self.food_stock,
            }
        }
    }

    /// Snapshot of the colony for rendering.
    pub fn display_details(&self) -> ColonySnapshot {
        ColonySnapshot {
            kind: self.kind.clone(),
            position: self.position,
            food_stock: self.food_stock,
            queen_alive: self.queen_alive,
            room_count: self.rooms.len(),
            insect_count: self.insects.len(),
            rooms: self.rooms.iter().map(|r| r.name.clone()).collect(),
            insects: self.insects.iter().map(Insect::describe).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colony() -> Colony {
        Colony::new("Aggressive", Position::new(0, 0))
    }

    #[test]
    fn starts_thriving_with_default_stock() {
        let c = colony();
        assert_eq!(c.state(), ColonyState::Thriving(100));
        assert!(c.queen_alive());
    }

    #[test]
    fn tick_consumes_five() {
        let mut c = colony();
        assert_eq!(c.process_tick(), TickOutcome::Consumed { remaining: 95 });
        assert_eq!(c.state(), ColonyState::Thriving(95));
    }

    #[test]
    fn queen_dies_when_stock_reaches_zero() {
        let mut c = Colony::from_config(
            "Harvester",
            Position::new(10, 20),
            ColonyConfig { initial_food: 10, food_per_tick: 5 },
        );
        assert_eq!(c.process_tick(), TickOutcome::Consumed { remaining: 5 });
        assert_eq!(c.process_tick(), TickOutcome::QueenPerished);
        assert_eq!(c.state(), ColonyState::Collapsed);
        assert_eq!(c.food_stock(), 0);
    }

    #[test]
    fn queen_dies_when_stock_goes_negative() {
        let mut c = Colony::from_config(
            "Harvester",
            Position::new(0, 0),
            ColonyConfig { initial_food: 3, food_per_tick: 5 },
        );
        assert_eq!(c.process_tick(), TickOutcome::QueenPerished);
        assert_eq!(c.food_stock(), -2);
    }

    #[test]
    fn collapsed_colony_is_frozen() {
        let mut c = Colony::from_config(
            "Harvester",
            Position::new(0, 0),
            ColonyConfig { initial_food: 5, food_per_tick: 5 },
        );
        c.process_tick();
        assert_eq!(c.process_tick(), TickOutcome::Dormant);
        assert_eq!(c.receive_resources("food", 500), Ok(ResourceIntake::Wasted));
        assert_eq!(c.food_stock(), 0);
        assert_eq!(c.state(), ColonyState::Collapsed);
    }

    #[test]
    fn food_delivery_adds_exact_amount() {
        let mut c = colony();
        assert_eq!(
            c.receive_resources("food", 50),
            Ok(ResourceIntake::Stored { total: 150 })
        );
        assert_eq!(
            c.receive_resources("food", -20),
            Ok(ResourceIntake::Stored { total: 130 })
        );
    }

    #[test]
    fn unknown_resource_leaves_stock_alone() {
        let mut c = colony();
        assert_eq!(
            c.receive_resources("water", 50),
            Err(SimError::UnknownResourceKind("water".into()))
        );
        assert_eq!(c.food_stock(), 100);
    }

    #[test]
    fn oversized_delivery_is_refused() {
        let mut c = colony();
        assert_eq!(
            c.receive_resources("food", i64::MAX),
            Err(SimError::StockOverflow { stock: 100, amount: i64::MAX })
        );
        assert_eq!(c.food_stock(), 100);
        assert!(c.queen_alive());
    }

    #[test]
    fn overdrawn_stock_still_ticks() {
        let mut c = colony();
        c.receive_resources("food", i64::MIN + 1).unwrap();
        assert_eq!(
            c.receive_resources("food", -200),
            Err(SimError::StockOverflow { stock: i64::MIN + 101, amount: -200 })
        );
        c.receive_resources("food", -101).unwrap();
        assert_eq!(c.food_stock(), i64::MIN);

        assert_eq!(c.process_tick(), TickOutcome::QueenPerished);
        assert_eq!(c.food_stock(), i64::MIN);
    }

    #[test]
    fn rooms_allow_duplicates() {
        let mut c = colony();
        c.add_room("nursery", Some(10));
        c.add_room("nursery", Some(20));
        c.add_section("tunnels");
        assert_eq!(c.list_sections(), vec!["nursery", "nursery", "tunnels"]);
        assert_eq!(c.rooms()[2].capacity, None);
    }

    #[test]
    fn snapshot_reflects_population() {
        let mut c = colony();
        c.add_room("granary", Some(5));
        c.spawn(InsectCategory::Worker);
        c.spawn(InsectCategory::Fighter);

        let snap = c.display_details();
        assert_eq!(snap.kind, "Aggressive");
        assert_eq!(snap.room_count, 1);
        assert_eq!(snap.insect_count, 2);
        assert_eq!(snap.insects[1], vec!["Basic", "Powerful"]);
        assert!(snap.queen_alive);
    }

    #[test]
    fn population_ignores_room_capacity() {
        let mut c = colony();
        c.add_room("cell", Some(1));
        for _ in 0..5 {
            c.spawn(InsectCategory::Worker);
        }
        assert_eq!(c.insects().len(), 5);
    }
}
