//! # Store
//!
//! A mutable, ordered collection of products plus the multi-item order
//! operation.
//!
//! ## Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Store::order                                   │
//! │                                                                     │
//! │  [(id A, 2), (id B, 1), (id A, 3)]                                  │
//! │        │                                                            │
//! │        ▼  per line, in sequence                                     │
//! │  look up product ──► snapshot (quantity, active) ──► purchase       │
//! │        │                                   │                        │
//! │        │ ok: accumulate charge             │ err: roll back every   │
//! │        ▼                                   ▼      earlier snapshot  │
//! │  total of all line charges           StoreError::Order { .. }       │
//! │                                                                     │
//! │  The order is atomic: a failed line restores all earlier lines,     │
//! │  so the store is unchanged on any error.                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A product repeated across lines is handled naturally: the second line's
//! stock check sees the first line's decrement, so an order can never
//! oversell by splitting a product across lines.
//!
//! ## Identity
//! Membership is by [`ProductId`], never by name. Two products with the same
//! name are distinct entries and are never merged.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::money::Money;
use crate::product::{Product, ProductId};

// =============================================================================
// Order Line
// =============================================================================

/// One line of a multi-item order: a product reference and a requested
/// amount.
///
/// This is the order-input DTO the presentation layer submits; it
/// deserializes from the wire shape `{"product_id": "...", "quantity": n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl OrderLine {
    /// Creates an order line.
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        OrderLine {
            product_id,
            quantity,
        }
    }
}

// =============================================================================
// Store
// =============================================================================

/// An ordered collection of products.
///
/// ## Invariants
/// - Insertion order is preserved
/// - Every element is a valid product (guaranteed by `Product` construction)
/// - No internal locking; callers serialize access
#[derive(Debug, Default, Serialize)]
pub struct Store {
    products: Vec<Product>,
}

impl Store {
    /// Creates a store holding the given products.
    ///
    /// Element validity is guaranteed by the type: a `Product` can only be
    /// built through its validated constructors.
    pub fn new(products: Vec<Product>) -> Self {
        Store { products }
    }

    // -------------------------------------------------------------------------
    // Catalog
    // -------------------------------------------------------------------------

    /// Appends a product and returns its id.
    ///
    /// No duplicate check: duplicates by name are permitted and never merged.
    pub fn add_product(&mut self, product: Product) -> ProductId {
        let id = product.id();
        debug!(product = %product.name(), %id, "product added to store");
        self.products.push(product);
        id
    }

    /// Removes and returns the product with the given id.
    ///
    /// Fails with [`StoreError::NotFound`] when absent. Removes exactly one
    /// entry; the removed product must not be used through this store again.
    pub fn remove_product(&mut self, id: ProductId) -> StoreResult<Product> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        let removed = self.products.remove(index);
        debug!(product = %removed.name(), %id, "product removed from store");
        Ok(removed)
    }

    /// Looks up a product by id.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id() == id)
    }

    /// Looks up a product by id for mutation (restock, promotion changes).
    pub fn product_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|product| product.id() == id)
    }

    /// All products, in insertion order, inactive ones included.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Active products, in insertion order.
    pub fn active_products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|product| product.is_active())
    }

    /// Sum of quantities over all held products.
    ///
    /// Unstocked products contribute 0.
    pub fn total_quantity(&self) -> u64 {
        self.products
            .iter()
            .map(|product| u64::from(product.quantity()))
            .sum()
    }

    /// Number of products held (active or not).
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the store holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    // -------------------------------------------------------------------------
    // Ordering
    // -------------------------------------------------------------------------

    /// Fulfills a multi-item order atomically and returns the total charge.
    ///
    /// Lines are processed in sequence, each delegated to that product's
    /// [`Product::purchase`] (which applies its promotion, if any). On the
    /// first failing line, every earlier line's `(quantity, active)` snapshot
    /// is restored and the error is returned as [`StoreError::Order`],
    /// naming the failing product and wrapping the cause — the store is left
    /// exactly as it was before the call.
    pub fn order(&mut self, lines: &[OrderLine]) -> StoreResult<Money> {
        let mut applied: Vec<(usize, u32, bool)> = Vec::with_capacity(lines.len());
        let mut total = Money::zero();

        for line in lines {
            let index = match self.position(line.product_id) {
                Some(index) => index,
                None => {
                    self.rollback(applied);
                    warn!(product_id = %line.product_id, "order aborted: unknown product");
                    return Err(StoreError::Order {
                        product: line.product_id.to_string(),
                        source: Box::new(StoreError::NotFound(line.product_id)),
                    });
                }
            };

            let product = &mut self.products[index];
            let snapshot = (index, product.quantity(), product.is_active());

            match product.purchase(line.quantity) {
                Ok(charge) => {
                    applied.push(snapshot);
                    total += charge;
                }
                Err(source) => {
                    let failed = product.name().to_string();
                    self.rollback(applied);
                    warn!(product = %failed, "order aborted: line failed, earlier lines rolled back");
                    return Err(StoreError::Order {
                        product: failed,
                        source: Box::new(source),
                    });
                }
            }
        }

        debug!(lines = lines.len(), %total, "order fulfilled");
        Ok(total)
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|product| product.id() == id)
    }

    /// Restores snapshots in reverse application order, so a product
    /// mutated by several lines ends at its pre-order state.
    fn rollback(&mut self, applied: Vec<(usize, u32, bool)>) {
        for (index, quantity, active) in applied.into_iter().rev() {
            self.products[index].restore(quantity, active);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
