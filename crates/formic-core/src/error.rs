//! Error types for engine operations.
//!
//! Every failure here is non-fatal: the caller reports it and carries on.

use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors produced by the colony simulation engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// No colony was created with this id. Wide enough to hold both
    /// registry indices and signed operator input without loss.
    #[error("invalid colony id: {0}")]
    InvalidColonyId(i128),

    /// The resource label is not one the colony stores.
    #[error("unknown resource type: {0}")]
    UnknownResourceKind(String),

    /// The insect category name is not recognized.
    #[error("invalid insect category: {0}")]
    InvalidCategory(String),

    /// Applying the amount would take the stock past the `i64` range.
    #[error("food stock {stock} cannot absorb {amount}: out of range")]
    StockOverflow { stock: i64, amount: i64 },
}

impl SimError {
    /// A registry index that names no colony.
    pub fn invalid_colony(index: usize) -> Self {
        // usize is at most 64 bits on every supported target, so this is lossless.
        SimError::InvalidColonyId(index as i128)
    }

    /// An operator-supplied number that names no colony.
    pub fn invalid_raw_colony(raw: i64) -> Self {
        SimError::InvalidColonyId(raw.into())
    }

    pub fn unknown_resource(kind: impl Into<String>) -> Self {
        SimError::UnknownResourceKind(kind.into())
    }

    pub fn invalid_category(category: impl Into<String>) -> Self {
        SimError::InvalidCategory(category.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_single_line() {
        let errors = [
            SimError::invalid_colony(99),
            SimError::StockOverflow { stock: i64::MAX, amount: 1 },
            SimError::unknown_resource("water"),
            SimError::invalid_category("drone"),
        ];
        for err in errors {
            let msg = err.to_string();
            assert!(!msg.contains('\n'), "multi-line message: {msg:?}");
        }
    }

    #[test]
    fn large_indices_are_reported_exactly() {
        assert_eq!(
            SimError::invalid_colony(usize::MAX).to_string(),
            format!("invalid colony id: {}", usize::MAX)
        );
        assert_eq!(
            SimError::invalid_raw_colony(i64::MIN).to_string(),
            format!("invalid colony id: {}", i64::MIN)
        );
    }

    #[test]
    fn invalid_colony_id_names_the_id() {
        assert_eq!(
            SimError::InvalidColonyId(7).to_string(),
            "invalid colony id: 7"
        );
    }
}
