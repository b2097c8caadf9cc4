//! # Promotions
//!
//! Pricing strategies that override the default `price × quantity` charge.
//!
//! ## Pricing Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Promotion Pricing                              │
//! │                                                                     │
//! │  PercentDiscount(p)   charge = quantity × price × (1 - p/100)       │
//! │                                                                     │
//! │  SecondHalfPrice      pairs charge 1.5 × price; a lone trailing     │
//! │                       item charges full price                       │
//! │                       charge = ceil(q/2) × price                    │
//! │                               + floor(q/2) × price/2                │
//! │                                                                     │
//! │  ThirdOneFree         every third unit is free                      │
//! │                       charge = (q - floor(q/3)) × price             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A promotion is a stateless value: a display name plus a pure function of
//! `(unit price, quantity)`. Results are exact — no rounding is applied here;
//! if a frontend wants whole-unit display it rounds at the edge.
//!
//! ## Sharing
//! One promotion may be attached to any number of products. Products hold
//! `Arc<Promotion>`, so attaching is cheap and the value stays immutable.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::validation::{validate_percent, ValidationResult};

// =============================================================================
// Promotion Kind
// =============================================================================

/// The pricing rule a promotion applies.
///
/// A tagged variant rather than a trait hierarchy: there are exactly three
/// rules, each a pure function, and callers never need to dispatch on the
/// concrete kind themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionKind {
    /// Percentage off the whole line. Fractional percentages permitted.
    PercentDiscount { percent: Decimal },
    /// Every second item at half price.
    SecondHalfPrice,
    /// Every third item free (3-for-2).
    ThirdOneFree,
}

// =============================================================================
// Promotion
// =============================================================================

/// A named, immutable pricing strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    name: String,
    kind: PromotionKind,
}

impl Promotion {
    /// Creates a percent-discount promotion.
    ///
    /// Fails if `percent` is not in `(0, 100]`.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use storefront_core::promotion::Promotion;
    ///
    /// let promo = Promotion::percent_discount("30% off!", Decimal::from(30)).unwrap();
    /// assert_eq!(promo.name(), "30% off!");
    /// ```
    pub fn percent_discount(name: impl Into<String>, percent: Decimal) -> ValidationResult<Self> {
        validate_percent(percent)?;
        Ok(Promotion {
            name: name.into(),
            kind: PromotionKind::PercentDiscount { percent },
        })
    }

    /// Creates a second-at-half-price promotion.
    pub fn second_half_price(name: impl Into<String>) -> Self {
        Promotion {
            name: name.into(),
            kind: PromotionKind::SecondHalfPrice,
        }
    }

    /// Creates a third-one-free promotion.
    pub fn third_one_free(name: impl Into<String>) -> Self {
        Promotion {
            name: name.into(),
            kind: PromotionKind::ThirdOneFree,
        }
    }

    /// The promotion's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pricing rule this promotion applies.
    pub fn kind(&self) -> &PromotionKind {
        &self.kind
    }

    /// Computes the charge for `quantity` units at `unit_price`.
    ///
    /// Pure: no mutation, no side effects, exact decimal result.
    pub fn apply(&self, unit_price: Money, quantity: u32) -> Money {
        match &self.kind {
            PromotionKind::PercentDiscount { percent } => {
                let keep = Decimal::ONE - *percent / Decimal::ONE_HUNDRED;
                Money::new(unit_price.amount() * Decimal::from(quantity) * keep)
            }
            PromotionKind::SecondHalfPrice => {
                // Odd quantity: the unpaired item charges full price
                let full = quantity / 2 + quantity % 2;
                let half = quantity / 2;
                unit_price * full + unit_price.half() * half
            }
            PromotionKind::ThirdOneFree => {
                let charged = quantity - quantity / 3;
                unit_price * charged
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_discount() {
        let promo = Promotion::percent_discount("30% off!", Decimal::from(30)).unwrap();
        let total = promo.apply(Money::from_major(200), 1);
        assert_eq!(total, Money::from_major(140));
    }

    #[test]
    fn test_percent_discount_fractional_unrounded() {
        // 12.5% off 100 × 1 = 87.5, carried exactly
        let promo = Promotion::percent_discount("Season sale", Decimal::new(125, 1)).unwrap();
        let total = promo.apply(Money::from_major(100), 1);
        assert_eq!(total.to_string(), "87.5");
    }

    #[test]
    fn test_percent_discount_rejects_out_of_range() {
        assert!(Promotion::percent_discount("zero", Decimal::ZERO).is_err());
        assert!(Promotion::percent_discount("negative", Decimal::from(-10)).is_err());
        assert!(Promotion::percent_discount("over", Decimal::from(101)).is_err());
    }

    #[test]
    fn test_second_half_price_pairs() {
        let promo = Promotion::second_half_price("Second Half price!");
        let total = promo.apply(Money::from_major(1000), 2);
        assert_eq!(total, Money::from_major(1500));
    }

    #[test]
    fn test_second_half_price_odd_quantity() {
        // 2 full + 1 half = 2500
        let promo = Promotion::second_half_price("Second Half price!");
        let total = promo.apply(Money::from_major(1000), 3);
        assert_eq!(total, Money::from_major(2500));
    }

    #[test]
    fn test_third_one_free() {
        let promo = Promotion::third_one_free("Third One Free!");
        let total = promo.apply(Money::from_major(300), 3);
        assert_eq!(total, Money::from_major(600));
    }

    #[test]
    fn test_third_one_free_partial_group() {
        // 7 units: 2 free, 5 charged
        let promo = Promotion::third_one_free("Third One Free!");
        let total = promo.apply(Money::from_major(300), 7);
        assert_eq!(total, Money::from_major(1500));
    }

    #[test]
    fn test_apply_is_pure() {
        let promo = Promotion::second_half_price("Second Half price!");
        let first = promo.apply(Money::from_major(1000), 2);
        let second = promo.apply(Money::from_major(1000), 2);
        assert_eq!(first, second);
    }
}
