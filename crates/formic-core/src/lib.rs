//! # Formic Core
//!
//! Core types shared by every Formic crate:
//!
//! - **Insect** — a base unit wrapped in any number of attribute layers
//!   (Powerful, Resourceful, ...). `describe()` walks the layers innermost first.
//! - **Factory** — builds insects from a closed set of categories.
//! - **Types** — colony ids, positions, rooms, resource kinds.
//! - **Error** — the engine's error taxonomy.
//!
//! ## Quick Start
//!
//! ```rust
//! use formic_core::prelude::*;
//!
//! let fighter = generate_insect(InsectCategory::Fighter);
//! assert_eq!(fighter.describe(), vec!["Basic", "Powerful"]);
//!
//! let scout = Insect::basic().wrap(Attribute::Resourceful);
//! assert_eq!(scout.to_string(), "Basic + Resourceful");
//! ```

pub mod error;
pub mod factory;
pub mod insect;
pub mod types;
pub mod prelude;
