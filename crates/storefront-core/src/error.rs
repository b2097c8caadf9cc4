//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  ValidationError   - malformed input (names, prices, amounts)       │
//! │        │                                                            │
//! │        ▼  #[from]                                                   │
//! │  StoreError        - domain failures (stock, limits, lookup)        │
//! │        │                                                            │
//! │        ▼  wrapped per order line                                    │
//! │  StoreError::Order - which product failed and why                   │
//! │                                                                     │
//! │  Frontends catch StoreError and render the message to the user.     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, quantities)
//! 3. Errors are enum variants, never String
//! 4. Each variant maps to a user-facing message

use thiserror::Error;

use crate::product::ProductId;

// =============================================================================
// Store Error
// =============================================================================

/// Domain errors raised by products and the store.
///
/// These represent business rule violations. They are returned synchronously
/// to the direct caller; the core never retries or suppresses them.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Purchase amount exceeds available stock on a stock-tracked product.
    #[error("insufficient stock for {name}: available {available}, requested {requested}")]
    OutOfStock {
        name: String,
        available: u32,
        requested: u32,
    },

    /// Purchase amount exceeds a limited product's per-order maximum.
    ///
    /// Raised before the stock check, so it fires even when stock would
    /// otherwise allow the purchase.
    #[error("order limit exceeded for {name}: max {max_per_order} per order, requested {requested}")]
    LimitExceeded {
        name: String,
        max_per_order: u32,
        requested: u32,
    },

    /// Product id is not present in the store.
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// A line of a multi-item order failed.
    ///
    /// Wraps the originating product's name and the underlying cause.
    /// The store rolls back earlier lines of the same call before returning
    /// this, so a failed order leaves the store unchanged.
    #[error("error ordering product {product}: {source}")]
    Order {
        product: String,
        #[source]
        source: Box<StoreError>,
    },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when constructor or method arguments don't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
