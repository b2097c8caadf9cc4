//! # Products
//!
//! A product is the unit of mutation in the store: it owns its stock level,
//! its activation flag, and an optional shared promotion, and exposes the
//! purchase operation everything else is built on.
//!
//! ## Stock Semantics by Kind
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Product Kinds                                 │
//! │                                                                     │
//! │  Stocked      finite stock, decremented by purchases,               │
//! │               deactivates when it hits zero                         │
//! │                                                                     │
//! │  Unstocked    digital/no-stock item: quantity pinned at 0,          │
//! │               always purchasable, always active,                    │
//! │               set_quantity is a no-op                               │
//! │                                                                     │
//! │  Limited      as Stocked, plus a per-purchase-call cap              │
//! │               (max_per_order); the cap is checked before stock      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! One level of variation, so the kinds are a tagged enum rather than a
//! trait hierarchy; callers only ever use the capability methods
//! (`validate`, `purchase`, `is_active`, `describe`) and never branch on
//! the concrete kind.
//!
//! ## Identity
//! Products carry a generated [`ProductId`] alongside the display name.
//! Store membership and order lines go by id, so two products with the same
//! name are distinct entries — the dual-key pattern of a stable machine id
//! plus a human-readable, potentially duplicated business name.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{StoreError, ValidationError};
use crate::money::Money;
use crate::promotion::Promotion;
use crate::validation::{
    validate_max_per_order, validate_price, validate_product_name, validate_purchase_amount,
};

// =============================================================================
// Product Id
// =============================================================================

/// Stable identity of a product (UUID v4).
///
/// Generated at construction, never reused, compared by value. This is the
/// handle the store and order lines use; the display name is not an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    fn generate() -> Self {
        ProductId(Uuid::new_v4())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product Kind
// =============================================================================

/// Stock semantics of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    /// Finite stock, decremented by purchases.
    Stocked,
    /// No stock concept; always purchasable and always active.
    Unstocked,
    /// Finite stock with a cap on the quantity of a single purchase call.
    Limited { max_per_order: u32 },
}

impl ProductKind {
    /// Whether purchases decrement a finite quantity.
    fn tracks_stock(&self) -> bool {
        !matches!(self, ProductKind::Unstocked)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A single stock-keeping item.
///
/// ## Invariants
/// - `quantity` is never negative (by type)
/// - stock-tracked kinds deactivate when quantity reaches 0 and reactivate
///   on restock; the unstocked kind keeps quantity pinned at 0 and stays
///   active
/// - a failed purchase is a no-op: all checks run before any mutation
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    quantity: u32,
    active: bool,
    promotion: Option<Arc<Promotion>>,
    kind: ProductKind,
}

impl Product {
    /// Creates a stock-tracked product.
    ///
    /// Fails if the name is empty/whitespace-only or over-long, or if the
    /// price is not positive. On success the product is active and has no
    /// promotion.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::product::Product;
    ///
    /// let product = Product::new("MacBook Air M2", Money::from_major(1450), 100).unwrap();
    /// assert!(product.is_active());
    /// assert_eq!(product.quantity(), 100);
    /// ```
    pub fn new(
        name: impl Into<String>,
        price: Money,
        quantity: u32,
    ) -> Result<Self, ValidationError> {
        Self::with_kind(name.into(), price, quantity, ProductKind::Stocked)
    }

    /// Creates an unstocked (digital/no-stock) product.
    ///
    /// Quantity is pinned at 0 and the product is always active.
    pub fn unstocked(name: impl Into<String>, price: Money) -> Result<Self, ValidationError> {
        Self::with_kind(name.into(), price, 0, ProductKind::Unstocked)
    }

    /// Creates a stock-tracked product with a per-purchase-call cap.
    ///
    /// Fails like [`Product::new`], and additionally if `max_per_order` is 0.
    pub fn limited(
        name: impl Into<String>,
        price: Money,
        quantity: u32,
        max_per_order: u32,
    ) -> Result<Self, ValidationError> {
        validate_max_per_order(max_per_order)?;
        Self::with_kind(
            name.into(),
            price,
            quantity,
            ProductKind::Limited { max_per_order },
        )
    }

    fn with_kind(
        name: String,
        price: Money,
        quantity: u32,
        kind: ProductKind,
    ) -> Result<Self, ValidationError> {
        validate_product_name(&name)?;
        validate_price(price)?;

        Ok(Product {
            id: ProductId::generate(),
            name,
            price,
            quantity,
            active: true,
            promotion: None,
            kind,
        })
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Stable identity of this product.
    #[inline]
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Current stock level. Always 0 for unstocked products.
    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Whether the product is currently active.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The per-purchase-call cap, when this product has one.
    pub fn max_per_order(&self) -> Option<u32> {
        match self.kind {
            ProductKind::Limited { max_per_order } => Some(max_per_order),
            _ => None,
        }
    }

    /// The attached promotion, if any.
    pub fn promotion(&self) -> Option<&Arc<Promotion>> {
        self.promotion.as_ref()
    }

    // -------------------------------------------------------------------------
    // Promotion attachment
    // -------------------------------------------------------------------------

    /// Attaches a promotion, replacing any prior one.
    ///
    /// Promotions are shared immutable values; the same `Arc` may be attached
    /// to any number of products.
    pub fn set_promotion(&mut self, promotion: Arc<Promotion>) {
        self.promotion = Some(promotion);
    }

    /// Detaches the promotion, restoring plain `price × quantity` charging.
    pub fn clear_promotion(&mut self) {
        self.promotion = None;
    }

    // -------------------------------------------------------------------------
    // Stock operations
    // -------------------------------------------------------------------------

    /// Checks whether a purchase of `amount` would succeed, without mutating.
    ///
    /// ## Checks, in order
    /// 1. `amount >= 1` — [`ValidationError`] otherwise
    /// 2. per-order cap for limited products — [`StoreError::LimitExceeded`]
    /// 3. stock for stock-tracked kinds — [`StoreError::OutOfStock`]
    ///
    /// `purchase` runs exactly these checks first, so a failed purchase
    /// provably leaves the product untouched.
    pub fn validate(&self, amount: u32) -> Result<(), StoreError> {
        validate_purchase_amount(amount)?;

        match self.kind {
            ProductKind::Unstocked => Ok(()),
            ProductKind::Limited { max_per_order } if amount > max_per_order => {
                Err(StoreError::LimitExceeded {
                    name: self.name.clone(),
                    max_per_order,
                    requested: amount,
                })
            }
            ProductKind::Stocked | ProductKind::Limited { .. } => {
                if amount > self.quantity {
                    Err(StoreError::OutOfStock {
                        name: self.name.clone(),
                        available: self.quantity,
                        requested: amount,
                    })
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Purchases `amount` units and returns the charge.
    ///
    /// On success, stock-tracked kinds decrement their quantity and
    /// deactivate at 0; the charge is the promotion's result when one is
    /// attached, else `price × amount`. Unstocked products never mutate.
    ///
    /// On failure (see [`Product::validate`]) nothing is mutated.
    pub fn purchase(&mut self, amount: u32) -> Result<Money, StoreError> {
        self.validate(amount)?;

        if self.kind.tracks_stock() {
            self.quantity -= amount;
            if self.quantity == 0 {
                self.active = false;
            }
        }

        let charge = self.charge(amount);
        debug!(product = %self.name, amount, %charge, "purchase applied");
        Ok(charge)
    }

    fn charge(&self, amount: u32) -> Money {
        match &self.promotion {
            Some(promotion) => promotion.apply(self.price, amount),
            None => self.price * amount,
        }
    }

    /// Sets the stock level directly.
    ///
    /// Stock level drives activation both ways: 0 deactivates, a nonzero
    /// restock reactivates. For unstocked products this is a no-op — they
    /// have no stock to set.
    pub fn set_quantity(&mut self, quantity: u32) {
        if !self.kind.tracks_stock() {
            return;
        }

        self.quantity = quantity;
        self.active = quantity > 0;
        debug!(product = %self.name, quantity, active = self.active, "quantity set");
    }

    /// Marks the product active.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Marks the product inactive.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Restores a `(quantity, active)` snapshot taken before a purchase.
    /// Used by the store's order rollback.
    pub(crate) fn restore(&mut self, quantity: u32, active: bool) {
        self.quantity = quantity;
        self.active = active;
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Renders name, price, quantity, per-order cap (limited products),
    /// active flag, and promotion name if present. Pure formatting.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, Price: {}, Quantity: {}",
            self.name, self.price, self.quantity
        )?;
        if let ProductKind::Limited { max_per_order } = self.kind {
            write!(f, ", Max per order: {}", max_per_order)?;
        }
        write!(f, " (Active: {})", self.active)?;
        if let Some(promotion) = &self.promotion {
            write!(f, " [Promotion: {}]", promotion.name())?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn stocked(name: &str, price: i64, quantity: u32) -> Product {
        Product::new(name, Money::from_major(price), quantity).unwrap()
    }

    #[test]
    fn test_creating_product() {
        let product = stocked("MacBook", 1450, 100);
        assert_eq!(product.name(), "MacBook");
        assert_eq!(product.price(), Money::from_major(1450));
        assert_eq!(product.quantity(), 100);
        assert!(product.is_active());
        assert!(product.promotion().is_none());
    }

    #[test]
    fn test_creating_product_invalid_data() {
        assert!(Product::new("", Money::from_major(1450), 100).is_err());
        assert!(Product::new("   ", Money::from_major(1450), 100).is_err());
        assert!(Product::new("MacBook Air", Money::from_major(-100), 50).is_err());
        assert!(Product::new("MacBook Air", Money::zero(), 50).is_err());
        assert!(Product::new("A".repeat(300), Money::from_major(10), 1).is_err());
    }

    #[test]
    fn test_products_with_same_name_are_distinct() {
        let a = stocked("Charger", 30, 5);
        let b = stocked("Charger", 30, 5);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_purchase_reduces_quantity_and_returns_total_price() {
        let mut product = stocked("test_product", 100, 10);
        let total = product.purchase(3).unwrap();

        assert_eq!(total, Money::from_major(300));
        assert_eq!(product.quantity(), 7);
        assert!(product.is_active());
    }

    #[test]
    fn test_product_becomes_inactive_when_out_of_stock() {
        let mut product = stocked("test_product", 25, 1);
        product.purchase(1).unwrap();

        assert_eq!(product.quantity(), 0);
        assert!(!product.is_active());
    }

    #[test]
    fn test_purchasing_more_than_available_fails_without_mutation() {
        let mut product = stocked("test_product", 50, 5);
        let err = product.purchase(10).unwrap_err();

        assert!(matches!(
            err,
            StoreError::OutOfStock {
                available: 5,
                requested: 10,
                ..
            }
        ));
        assert_eq!(product.quantity(), 5);
        assert!(product.is_active());
    }

    #[test]
    fn test_purchase_of_zero_is_rejected() {
        let mut product = stocked("test_product", 50, 5);
        assert!(matches!(
            product.purchase(0),
            Err(StoreError::Validation(_))
        ));
        assert_eq!(product.quantity(), 5);
    }

    #[test]
    fn test_set_quantity_zero_deactivates() {
        let mut product = stocked("test_product", 50, 5);
        product.set_quantity(0);

        assert_eq!(product.quantity(), 0);
        assert!(!product.is_active());
    }

    #[test]
    fn test_set_quantity_restock_reactivates() {
        let mut product = stocked("test_product", 50, 1);
        product.purchase(1).unwrap();
        assert!(!product.is_active());

        product.set_quantity(20);
        assert_eq!(product.quantity(), 20);
        assert!(product.is_active());
    }

    #[test]
    fn test_activate_deactivate_are_unconditional() {
        let mut product = stocked("test_product", 50, 5);
        product.deactivate();
        assert!(!product.is_active());
        product.activate();
        assert!(product.is_active());
    }

    #[test]
    fn test_unstocked_product() {
        let product = Product::unstocked("Windows License", Money::from_major(200)).unwrap();
        assert_eq!(product.quantity(), 0);
        assert!(product.is_active());
    }

    #[test]
    fn test_unstocked_product_ignores_set_quantity() {
        let mut product = Product::unstocked("Windows License", Money::from_major(200)).unwrap();
        product.set_quantity(10);

        assert_eq!(product.quantity(), 0);
        assert!(product.is_active());
    }

    #[test]
    fn test_unstocked_product_can_always_be_purchased() {
        let mut product = Product::unstocked("Windows License", Money::from_major(200)).unwrap();
        let total = product.purchase(5).unwrap();

        assert_eq!(total, Money::from_major(1000));
        assert_eq!(product.quantity(), 0);
        assert!(product.is_active());
    }

    #[test]
    fn test_creating_limited_product() {
        let product =
            Product::limited("Shipping", Money::from_major(10), 5, 1).unwrap();
        assert_eq!(product.max_per_order(), Some(1));
        assert!(product.is_active());
    }

    #[test]
    fn test_limited_product_rejects_zero_maximum() {
        assert!(Product::limited("Shipping", Money::from_major(10), 5, 0).is_err());
    }

    #[test]
    fn test_limited_product_respects_maximum() {
        let mut product = Product::limited("Shipping", Money::from_major(10), 5, 1).unwrap();

        let total = product.purchase(1).unwrap();
        assert_eq!(total, Money::from_major(10));
        assert_eq!(product.quantity(), 4);

        // Over the cap fails even though stock would allow it
        let err = product.purchase(2).unwrap_err();
        assert!(matches!(
            err,
            StoreError::LimitExceeded {
                max_per_order: 1,
                requested: 2,
                ..
            }
        ));
        assert_eq!(product.quantity(), 4);
    }

    #[test]
    fn test_limited_product_becomes_inactive_when_out_of_stock() {
        let mut product = Product::limited("Shipping", Money::from_major(10), 1, 1).unwrap();
        product.purchase(1).unwrap();

        assert_eq!(product.quantity(), 0);
        assert!(!product.is_active());
    }

    #[test]
    fn test_purchase_applies_attached_promotion() {
        let mut product = stocked("MacBook Air M2", 1000, 10);
        product.set_promotion(Arc::new(Promotion::second_half_price("Second Half price!")));

        let total = product.purchase(2).unwrap();
        assert_eq!(total, Money::from_major(1500));
        assert_eq!(product.quantity(), 8);
    }

    #[test]
    fn test_promotion_is_shared_between_products() {
        let promo = Arc::new(
            Promotion::percent_discount("30% off!", Decimal::from(30)).unwrap(),
        );
        let mut license =
            Product::unstocked("Windows License", Money::from_major(200)).unwrap();
        let mut earbuds = stocked("Bose Earbuds", 300, 10);

        license.set_promotion(Arc::clone(&promo));
        earbuds.set_promotion(Arc::clone(&promo));

        assert_eq!(license.purchase(1).unwrap(), Money::from_major(140));
        assert_eq!(earbuds.purchase(1).unwrap(), Money::from_major(210));
    }

    #[test]
    fn test_clear_promotion_restores_linear_pricing() {
        let mut product = stocked("Bose Earbuds", 300, 10);
        product.set_promotion(Arc::new(Promotion::third_one_free("Third One Free!")));
        assert_eq!(product.purchase(3).unwrap(), Money::from_major(600));

        product.clear_promotion();
        assert_eq!(product.purchase(3).unwrap(), Money::from_major(900));
    }

    #[test]
    fn test_product_serializes_with_promotion_name() {
        let mut product = stocked("Bose QuietComfort Earbuds", 250, 500);
        product.set_promotion(Arc::new(Promotion::third_one_free("Third One Free!")));

        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("Third One Free!"));
        assert!(json.contains("\"quantity\":500"));
    }

    #[test]
    fn test_describe_contents() {
        let mut product = Product::limited("Shipping", Money::from_major(10), 5, 1).unwrap();
        product.set_promotion(Arc::new(Promotion::second_half_price("Second Half price!")));
        let shown = product.describe();

        assert!(shown.contains("Shipping"));
        assert!(shown.contains("Price: 10"));
        assert!(shown.contains("Quantity: 5"));
        assert!(shown.contains("Max per order: 1"));
        assert!(shown.contains("Active: true"));
        assert!(shown.contains("Second Half price!"));
    }
}
