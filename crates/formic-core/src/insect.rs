//! Insect capability model.
//!
//! An insect is a basic unit wrapped in zero or more attribute layers. Each
//! layer owns the insect it wraps, so a chain like
//! `Basic -> Powerful -> Resourceful` is just nested values:
//!
//! ```text
//! Wrapped { attribute: Resourceful,
//!           inner: Wrapped { attribute: Powerful,
//!                            inner: Basic } }
//! ```
//!
//! `describe()` reports the labels innermost first, so the order always
//! mirrors the order the layers were applied in.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Label contributed by the basic insect at the core of every chain.
pub const BASIC_LABEL: &str = "Basic";

/// A trait that can be layered onto an insect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Powerful,
    Resourceful,
    /// Any other trait, labelled verbatim.
    Custom(String),
}

impl Attribute {
    pub fn label(&self) -> &str {
        match self {
            Attribute::Powerful => "Powerful",
            Attribute::Resourceful => "Resourceful",
            Attribute::Custom(label) => label,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An insect: the basic unit or an attribute wrapped around another insect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Insect {
    Basic,
    Wrapped {
        inner: Box<Insect>,
        attribute: Attribute,
    },
}

impl Insect {
    /// A bare insect with no attributes.
    pub fn basic() -> Self {
        Insect::Basic
    }

    /// Wrap this insect in one more attribute layer.
    pub fn wrap(self, attribute: Attribute) -> Self {
        Insect::Wrapped {
            inner: Box::new(self),
            attribute,
        }
    }

    /// Trait labels, innermost first.
    pub fn describe(&self) -> Vec<String> {
        let mut labels = Vec::with_capacity(self.depth() + 1);
        self.collect_labels(&mut labels);
        labels
    }

    fn collect_labels(&self, out: &mut Vec<String>) {
        match self {
            Insect::Basic => out.push(BASIC_LABEL.to_string()),
            Insect::Wrapped { inner, attribute } => {
                inner.collect_labels(out);
                out.push(attribute.label().to_string());
            }
        }
    }

    /// Number of attribute layers around the basic insect.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let Insect::Wrapped { inner, .. } = current {
            depth += 1;
            current = inner.as_ref();
        }
        depth
    }

    /// Whether any layer carries `attribute`.
    pub fn has(&self, attribute: &Attribute) -> bool {
        match self {
            Insect::Basic => false,
            Insect::Wrapped { inner, attribute: own } => own == attribute || inner.has(attribute),
        }
    }
}

impl Default for Insect {
    fn default() -> Self {
        Insect::Basic
    }
}

impl fmt::Display for Insect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe().join(" + "))
    }
}
