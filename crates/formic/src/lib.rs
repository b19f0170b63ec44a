//! # Formic
//!
//! A small insect colony simulation.
//!
//! Colonies hold rooms, insects, and a food stock that feeds their queen.
//! Every tick the queen eats; when the food runs out she dies and the colony
//! collapses. Insects are built by stacking attribute layers around a basic
//! insect.
//!
//! ## Quick Start
//!
//! ```rust
//! use formic::prelude::*;
//!
//! let mut registry = Registry::new();
//! let id = registry.create_colony("Aggressive", 0, 0);
//!
//! registry.allocate_resources(id, "food", 50).unwrap();
//! registry.spawn_insect(id, InsectCategory::Fighter).unwrap();
//!
//! let report = registry.execute_ticks(31);
//! assert_eq!(report.perished().collect::<Vec<_>>(), vec![id]);
//!
//! let summary = registry.display_summary(id).unwrap();
//! assert!(!summary.queen_alive);
//! assert_eq!(summary.insects[0], vec!["Basic", "Powerful"]);
//! ```
//!
//! ## Architecture
//!
//! - [`formic_core`] - Insects, attribute layers, the insect factory, errors
//! - [`formic_runtime`] - Colony state machine, colony builder, registry
//!
//! ## Colony lifecycle
//!
//! | State | On tick | On food |
//! |-------|---------|---------|
//! | Thriving(f) | f - 5, collapse at f <= 0 | f + amount |
//! | Collapsed | nothing | nothing |

pub use formic_core;
pub use formic_runtime;

pub mod prelude {
    //! Everything needed to drive a simulation.
    pub use formic_runtime::prelude::*;
}
