//! Formic Runtime Prelude — convenient imports for common usage.
//!
//! ```rust
//! use formic_runtime::prelude::*;
//! ```

// Re-export colony
pub use crate::colony::{
    Colony, ColonyConfig, ColonySnapshot, ColonyState, ResourceIntake, TickOutcome,
};

// Re-export colony builder
pub use crate::colony_builder::ColonyBuilder;

// Re-export registry
pub use crate::registry::{Registry, RegistryEvent, TickReport};

// Re-export from core
pub use formic_core::prelude::*;
