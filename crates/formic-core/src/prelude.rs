//! Formic Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use formic_core::prelude::*;
//! ```

pub use crate::types::{ColonyId, Position, ResourceKind, Room, Tick};

pub use crate::insect::{Attribute, Insect};

pub use crate::factory::{generate_insect, InsectCategory};

pub use crate::error::{Result, SimError};
