//! # Validation Module
//!
//! Input validation utilities for storefront-core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Type system                                               │
//! │  ├── Quantities are u32 — negative stock is unrepresentable         │
//! │  └── Order lines are typed — malformed pairs cannot be built        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE — value validation                            │
//! │  ├── Names non-empty and bounded                                    │
//! │  ├── Prices strictly positive                                       │
//! │  └── Purchase amounts and per-order caps at least 1                 │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Domain rules (product.rs / store.rs)                      │
//! │  └── Stock checks, per-order limits, order rollback                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_PRODUCT_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace-only
/// - Must be at most `MAX_PRODUCT_NAME_LEN` characters
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_product_name;
///
/// assert!(validate_product_name("MacBook Air M2").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a product price.
///
/// ## Rules
/// - Must be strictly positive; zero-priced items are not sellable stock
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a purchase amount.
///
/// ## Rules
/// - Must be at least 1; buying zero of something is a caller mistake
pub fn validate_purchase_amount(amount: u32) -> ValidationResult<()> {
    if amount == 0 {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
        });
    }

    Ok(())
}

/// Validates a limited product's per-order maximum.
///
/// ## Rules
/// - Must be at least 1 (a cap of 0 would make the product unpurchasable)
pub fn validate_max_per_order(max_per_order: u32) -> ValidationResult<()> {
    if max_per_order == 0 {
        return Err(ValidationError::MustBePositive {
            field: "max_per_order".to_string(),
        });
    }

    Ok(())
}

/// Validates a percent-discount rate.
///
/// ## Rules
/// - Must be greater than 0 and at most 100
/// - Fractional percentages are permitted (e.g. 12.5)
pub fn validate_percent(percent: Decimal) -> ValidationResult<()> {
    if percent <= Decimal::ZERO {
        return Err(ValidationError::MustBePositive {
            field: "percent".to_string(),
        });
    }

    if percent > Decimal::ONE_HUNDRED {
        return Err(ValidationError::OutOfRange {
            field: "percent".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Bose QuietComfort Earbuds").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_major(1450)).is_ok());
        assert!(validate_price(Money::zero()).is_err());
        assert!(validate_price(Money::from_major(-100)).is_err());
    }

    #[test]
    fn test_validate_purchase_amount() {
        assert!(validate_purchase_amount(1).is_ok());
        assert!(validate_purchase_amount(999).is_ok());
        assert!(validate_purchase_amount(0).is_err());
    }

    #[test]
    fn test_validate_max_per_order() {
        assert!(validate_max_per_order(1).is_ok());
        assert!(validate_max_per_order(0).is_err());
    }

    #[test]
    fn test_validate_percent() {
        assert!(validate_percent(Decimal::from(30)).is_ok());
        assert!(validate_percent(Decimal::new(125, 1)).is_ok()); // 12.5
        assert!(validate_percent(Decimal::ONE_HUNDRED).is_ok());
        assert!(validate_percent(Decimal::ZERO).is_err());
        assert!(validate_percent(Decimal::from(101)).is_err());
    }
}
