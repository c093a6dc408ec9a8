//! # Session Error Type
//!
//! Unified error type for the session facade.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in EduMart                                │
//! │                                                                         │
//! │  Storefront                   Rust Backend                              │
//! │  ──────────                   ────────────                              │
//! │                                                                         │
//! │  setQuantity(id, 5)                                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Facade Method                                                   │  │
//! │  │  Result<OrderResponse, SessionError>                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Engine condition? ── CoreError::OutOfStock ──► SessionError ───►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ───────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  try {                                                                  │
//! │    await session.setQuantity(id, 5)                                     │
//! │  } catch (e) {                                                          │
//! │    // e.message = "Out of stock: ART-SET"                               │
//! │    // e.code = "OUT_OF_STOCK"                                           │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every code here is a recoverable storefront condition; the UI picks the
//! feedback, the engine state is already consistent.

use serde::Serialize;
use ts_rs::TS;

use edumart_core::CoreError;

/// Session error returned from facade methods.
///
/// ## Serialization
/// This is what the storefront receives when an operation is refused:
/// ```json
/// {
///   "code": "COMPARE_LIMIT_REACHED",
///   "message": "Comparison is full: at most 4 entries"
/// }
/// ```
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SessionError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for session responses.
///
/// ## Usage in the Storefront
/// ```typescript
/// try {
///   await session.toggleCompare(id);
/// } catch (e) {
///   switch (e.code) {
///     case 'COMPARE_LIMIT_REACHED':
///       showToast('Remove one to compare another');
///       break;
///     case 'KIND_MISMATCH':
///       showToast('Clear the comparison to switch between schools and teachers');
///       break;
///     default:
///       showError('An error occurred');
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Catalog record not found (stale id after a refresh)
    NotFound,

    /// Item has no stock at all
    OutOfStock,

    /// Stock exists but not enough for the requested quantity
    InsufficientStock,

    /// Comparison set already holds the maximum entries
    CompareLimitReached,

    /// Attempted to mix schools and teachers in one comparison
    KindMismatch,

    /// Input validation failed
    ValidationError,

    /// Order cap exceeded (lines or quantity)
    OrderError,
}

impl SessionError {
    /// Creates a new session error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        SessionError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        SessionError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        SessionError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts engine errors to session errors.
impl From<CoreError> for SessionError {
    fn from(err: CoreError) -> Self {
        match &err {
            CoreError::ItemNotFound(id) => SessionError::not_found("Item", id),
            CoreError::EntityNotFound(id) => SessionError::not_found("Profile", id),
            CoreError::OutOfStock { .. } => {
                SessionError::new(ErrorCode::OutOfStock, err.to_string())
            }
            CoreError::InsufficientStock { .. } => {
                SessionError::new(ErrorCode::InsufficientStock, err.to_string())
            }
            CoreError::CompareLimitReached { .. } => {
                SessionError::new(ErrorCode::CompareLimitReached, err.to_string())
            }
            CoreError::KindMismatch { .. } => {
                SessionError::new(ErrorCode::KindMismatch, err.to_string())
            }
            CoreError::OrderTooLarge { .. } | CoreError::QuantityTooLarge { .. } => {
                SessionError::new(ErrorCode::OrderError, err.to_string())
            }
            CoreError::Validation(e) => SessionError::validation(e.to_string()),
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for SessionError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use edumart_core::EntityKind;

    #[test]
    fn test_not_found_mapping() {
        let err: SessionError = CoreError::ItemNotFound("abc".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Item not found: abc");
    }

    #[test]
    fn test_compare_errors_keep_their_codes() {
        let err: SessionError = CoreError::CompareLimitReached { max: 4 }.into();
        assert_eq!(err.code, ErrorCode::CompareLimitReached);

        let err: SessionError = CoreError::KindMismatch {
            selected: EntityKind::School,
            attempted: EntityKind::Teacher,
        }
        .into();
        assert_eq!(err.code, ErrorCode::KindMismatch);
    }

    #[test]
    fn test_serializes_with_screaming_snake_code() {
        let err = SessionError::new(ErrorCode::OutOfStock, "Out of stock: ART-SET");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "OUT_OF_STOCK");
        assert_eq!(json["message"], "Out of stock: ART-SET");
    }
}
