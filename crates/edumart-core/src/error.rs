//! # Error Types
//!
//! Domain-specific error types for edumart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  edumart-core errors (this file)                                        │
//! │  ├── CoreError        - Catalog, order and comparison conditions        │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  edumart-session errors (separate crate)                                │
//! │  └── SessionError     - What the storefront sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → SessionError → Storefront          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (SKU, ID, counts)
//! 3. Errors are enum variants, never String
//! 4. Every condition here is recoverable: it reflects stale UI state racing
//!    a catalog refresh, never a programming error, so nothing panics

use thiserror::Error;

use crate::types::EntityKind;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent expected storefront conditions (a stale id, an
/// exhausted item, a full comparison set). They are returned as values and
/// translated to user-facing feedback by the session layer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Catalog item cannot be found.
    ///
    /// ## When This Occurs
    /// - Item ID doesn't exist in the current catalog snapshot
    /// - Item was delisted between render and click
    /// - UI state is stale after a catalog refresh
    #[error("Catalog item not found: {0}")]
    ItemNotFound(String),

    /// School or teacher profile cannot be found.
    #[error("Entity not found: {0}")]
    EntityNotFound(String),

    /// Item has no stock at all.
    ///
    /// Distinguished from [`CoreError::ItemNotFound`]: the item exists but
    /// cannot receive a positive quantity. Never silently clamped.
    #[error("Out of stock: {sku}")]
    OutOfStock { sku: String },

    /// Requested quantity exceeds available stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Set quantity (qty: 5)
    ///      │
    ///      ▼
    /// Check stock: available=3
    ///      │
    ///      ▼
    /// InsufficientStock { sku: "NTB-A5", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// UI shows: "Only 3 NTB-A5 in stock"
    /// ```
    #[error("Insufficient stock for {sku}: available {available}, requested {requested}")]
    InsufficientStock {
        sku: String,
        available: i64,
        requested: i64,
    },

    /// The comparison set already holds the maximum number of entries.
    ///
    /// The selection is unchanged; the caller may surface this as UI
    /// feedback ("remove one to compare another").
    #[error("Comparison is full: at most {max} entries")]
    CompareLimitReached { max: usize },

    /// Attempted to mix schools and teachers in one comparison set.
    ///
    /// The selection is unchanged. Clearing the set first is the supported
    /// way to switch kinds.
    #[error("Cannot compare a {attempted} against a selection of {selected}s")]
    KindMismatch {
        selected: EntityKind,
        attempted: EntityKind,
    },

    /// Order has exceeded maximum allowed distinct lines.
    #[error("Order cannot have more than {max} lines")]
    OrderTooLarge { max: usize },

    /// Line quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid UUID, malformed tier table).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            sku: "NTB-A5".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for NTB-A5: available 3, requested 5"
        );

        let err = CoreError::KindMismatch {
            selected: EntityKind::School,
            attempted: EntityKind::Teacher,
        };
        assert_eq!(
            err.to_string(),
            "Cannot compare a teacher against a selection of schools"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "item_id".to_string(),
        };
        assert_eq!(err.to_string(), "item_id is required");

        let err = ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: 999,
        };
        assert_eq!(err.to_string(), "quantity must be between 0 and 999");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "item_id".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
