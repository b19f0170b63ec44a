//! Shared types used across the engine and its front ends.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Monotonic tick counter.
pub type Tick = u64;

/// Identifier of a colony within a registry.
///
/// Ids are handed out in creation order starting at zero and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColonyId(pub usize);

impl ColonyId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// The zero-based registry slot.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ColonyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for ColonyId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// A grid position on the colony map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A named subdivision of a colony.
///
/// `capacity` is `None` for plain sections, which have no size limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub capacity: Option<u32>,
}

impl Room {
    pub fn new(name: impl Into<String>, capacity: u32) -> Self {
        Self {
            name: name.into(),
            capacity: Some(capacity),
        }
    }

    /// A room without a capacity limit.
    pub fn section(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capacity: None,
        }
    }
}

/// Resources a colony can stockpile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Food,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Food => "food",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = SimError;

    /// Resource labels are matched exactly: `"food"` is a resource, `"Food"` is not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "food" => Ok(ResourceKind::Food),
            other => Err(SimError::unknown_resource(other)),
        }
    }
}
