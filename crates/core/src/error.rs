//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, stock shortfalls). Infrastructure concerns belong elsewhere.
/// Note that price-change denials are not errors at all: the setter refuses
/// the change, logs a warning and returns normally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. zero quantity at construction).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Two products of differing concrete kind were combined.
    #[error("product kinds do not match: {left} vs {right}")]
    KindMismatch { left: String, right: String },

    /// An order asked for more units than the product has in stock.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u64, available: u64 },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn kind_mismatch(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::KindMismatch {
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn insufficient_stock(requested: u64, available: u64) -> Self {
        Self::InsufficientStock {
            requested,
            available,
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
