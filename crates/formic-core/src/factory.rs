//! Insect factory.
//!
//! Categories are a closed set. Adding one means adding a variant here and a
//! match arm in [`generate_insect`]; text lookups go through `FromStr`, which
//! rejects anything it does not know.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::insect::{Attribute, Insect};

/// The kinds of insect a colony can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsectCategory {
    Worker,
    Fighter,
}

impl InsectCategory {
    pub const ALL: [InsectCategory; 2] = [InsectCategory::Worker, InsectCategory::Fighter];

    pub fn name(&self) -> &'static str {
        match self {
            InsectCategory::Worker => "worker",
            InsectCategory::Fighter => "fighter",
        }
    }
}

impl fmt::Display for InsectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InsectCategory {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "worker" => Ok(InsectCategory::Worker),
            "fighter" => Ok(InsectCategory::Fighter),
            _ => Err(SimError::invalid_category(s)),
        }
    }
}

/// Build an insect for `category`.
///
/// Workers are bare; fighters carry one `Powerful` layer.
pub fn generate_insect(category: InsectCategory) -> Insect {
    match category {
        InsectCategory::Worker => Insect::basic(),
        InsectCategory::Fighter => Insect::basic().wrap(Attribute::Powerful),
    }
}
