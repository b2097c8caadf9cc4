//! # storefront-core: Pure Business Logic for Storefront
//!
//! This crate is the **heart** of Storefront. It models a small retail
//! inventory — products with stock levels, optional promotional pricing, and
//! an ordering workflow that validates and fulfills multi-item purchases
//! atomically per call — as pure, synchronous logic with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Storefront Architecture                          │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │           Presentation layer (menu / terminal UI)             │  │
//! │  │   list products ──► show totals ──► collect order lines       │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │              ★ storefront-core (THIS CRATE) ★                 │  │
//! │  │                                                               │  │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │  │
//! │  │   │  product  │  │ promotion │  │   store   │  │   money   │  │  │
//! │  │   │  kinds,   │  │  pricing  │  │  catalog, │  │   exact   │  │  │
//! │  │   │  purchase │  │  rules    │  │  ordering │  │  decimals │  │  │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO PERSISTENCE • NO LOCKING • PURE FUNCTIONS       │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - Products, stock kinds, the purchase operation
//! - [`promotion`] - Shared, immutable pricing strategies
//! - [`store`] - The product collection and atomic multi-item ordering
//! - [`money`] - Exact-decimal monetary values
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure core**: every operation runs to completion or fails
//!    synchronously; a failed operation is a no-op
//! 2. **No I/O**: rendering, persistence, and interaction live in frontends
//! 3. **Exact money**: all monetary values are exact decimals; promotions
//!    never round
//! 4. **Explicit errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Money, OrderLine, Product, Store};
//!
//! let mut store = Store::new(vec![
//!     Product::new("MacBook Air M2", Money::from_major(1450), 100).unwrap(),
//!     Product::new("Google Pixel 7", Money::from_major(500), 250).unwrap(),
//! ]);
//!
//! let macbook = store.products()[0].id();
//! let pixel = store.products()[1].id();
//!
//! let total = store
//!     .order(&[OrderLine::new(macbook, 1), OrderLine::new(pixel, 2)])
//!     .unwrap();
//! assert_eq!(total, Money::from_major(2450));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod product;
pub mod promotion;
pub mod store;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use storefront_core::Store` instead of
// `use storefront_core::store::Store`

pub use error::{StoreError, StoreResult, ValidationError};
pub use money::Money;
pub use product::{Product, ProductId, ProductKind};
pub use promotion::{Promotion, PromotionKind};
pub use store::{OrderLine, Store};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name, in characters.
///
/// Keeps catalog listings and receipts renderable on narrow displays.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;
