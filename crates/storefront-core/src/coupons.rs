//! # Coupon Catalog
//!
//! The read-only list of coupons shown to shoppers. The catalog is built on
//! first access and never changes afterwards.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Upper bound (exclusive) on a coupon's percentage discount.
pub const MAX_COUPON_DISCOUNT: f64 = 20.0;

/// A coupon code and its percentage discount.
///
/// ## Invariants
/// - `code` is non-empty
/// - `0 <= discount < 20`
///
/// Deserialization goes through [`Coupon::new`], so the invariants hold for
/// coupons read from JSON or TOML too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoupon")]
pub struct Coupon {
    code: String,
    discount: f64,
}

/// Unchecked wire form of a [`Coupon`].
#[derive(Deserialize)]
struct RawCoupon {
    code: String,
    discount: f64,
}

impl TryFrom<RawCoupon> for Coupon {
    type Error = ValidationError;

    fn try_from(raw: RawCoupon) -> Result<Self, Self::Error> {
        Coupon::new(raw.code, raw.discount)
    }
}

impl Coupon {
    /// Creates a coupon, enforcing the invariants above.
    pub fn new(code: impl Into<String>, discount: f64) -> Result<Self, ValidationError> {
        let code = code.into();

        if code.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "code".to_string(),
            });
        }

        if !(0.0..MAX_COUPON_DISCOUNT).contains(&discount) {
            return Err(ValidationError::OutOfRange {
                field: "discount".to_string(),
                min: 0.0,
                max: MAX_COUPON_DISCOUNT,
            });
        }

        Ok(Coupon { code, discount })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Percentage off, e.g. `15.0` for 15%.
    pub fn discount(&self) -> f64 {
        self.discount
    }
}

/// Checks that no two coupons share a code.
pub fn ensure_unique_codes(coupons: &[Coupon]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for coupon in coupons {
        if !seen.insert(coupon.code()) {
            return Err(ValidationError::Duplicate {
                field: "code".to_string(),
                value: coupon.code().to_string(),
            });
        }
    }
    Ok(())
}

const CATALOG: &[(&str, f64)] = &[("WELCOME5", 5.0), ("SAVE10NOW", 10.0), ("SPRING15", 15.0)];

/// Builds a catalog from `(code, discount)` entries.
///
/// ## Errors
/// The first entry that breaks a coupon invariant, or the first duplicate
/// code. Nothing is dropped silently.
pub fn build_catalog(entries: &[(&str, f64)]) -> Result<Vec<Coupon>, ValidationError> {
    let coupons = entries
        .iter()
        .map(|(code, discount)| Coupon::new(*code, *discount))
        .collect::<Result<Vec<_>, _>>()?;

    ensure_unique_codes(&coupons)?;
    Ok(coupons)
}

fn catalog() -> &'static Result<Vec<Coupon>, ValidationError> {
    static COUPONS: OnceLock<Result<Vec<Coupon>, ValidationError>> = OnceLock::new();
    COUPONS.get_or_init(|| build_catalog(CATALOG))
}

/// Returns the validated coupon catalog.
///
/// An invalid built-in catalog yields an empty list, never a partial one.
pub fn get_coupons() -> &'static [Coupon] {
    catalog().as_deref().unwrap_or_default()
}

/// Finds a coupon by exact code.
pub fn find_coupon(code: &str) -> Option<&'static Coupon> {
    get_coupons().iter().find(|coupon| coupon.code() == code)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let coupons = build_catalog(CATALOG).unwrap();
        assert_eq!(coupons.len(), CATALOG.len());
    }

    #[test]
    fn test_build_catalog_rejects_duplicate_codes() {
        let err = build_catalog(&[("A", 1.0), ("B", 2.0), ("A", 3.0)]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Duplicate {
                field: "code".to_string(),
                value: "A".to_string(),
            }
        );
    }

    #[test]
    fn test_build_catalog_fails_on_bad_entry() {
        assert!(matches!(
            build_catalog(&[("OK", 5.0), ("HUGE", 95.0)]),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            build_catalog(&[("", 5.0)]),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_deserialize_enforces_invariants() {
        assert!(serde_json::from_str::<Coupon>(r#"{"code":"","discount":95.0}"#).is_err());
        assert!(serde_json::from_value::<Coupon>(json!({"code": "X", "discount": 20.0})).is_err());
        assert!(serde_json::from_value::<Coupon>(json!({"code": "X", "discount": -1.0})).is_err());

        let coupon: Coupon =
            serde_json::from_value(json!({"code": "SPRING15", "discount": 15.0})).unwrap();
        assert_eq!(coupon, Coupon::new("SPRING15", 15.0).unwrap());
    }

    #[test]
    fn test_serialize_round_trips_through_checks() {
        let coupon = Coupon::new("WELCOME5", 5.0).unwrap();
        let value = serde_json::to_value(&coupon).unwrap();
        assert_eq!(value, json!({"code": "WELCOME5", "discount": 5.0}));
        assert_eq!(serde_json::from_value::<Coupon>(value).unwrap(), coupon);
    }

    #[test]
    fn test_catalog_is_not_empty() {
        assert!(!get_coupons().is_empty());
    }

    #[test]
    fn test_catalog_codes_are_valid() {
        for coupon in get_coupons() {
            assert!(!coupon.code().is_empty());
        }
        assert!(ensure_unique_codes(get_coupons()).is_ok());
    }

    #[test]
    fn test_catalog_discounts_are_below_limit() {
        for coupon in get_coupons() {
            assert!(coupon.discount() >= 0.0);
            assert!(coupon.discount() < MAX_COUPON_DISCOUNT);
        }
    }

    #[test]
    fn test_catalog_is_built_once() {
        assert!(std::ptr::eq(get_coupons(), get_coupons()));
        assert_eq!(get_coupons().len(), CATALOG.len());
    }

    #[test]
    fn test_coupon_new_rejects_bad_input() {
        assert!(matches!(
            Coupon::new("", 5.0),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            Coupon::new("BIG", 20.0),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(Coupon::new("NEG", -1.0).is_err());
        assert!(Coupon::new("OK", 19.99).is_ok());
    }

    #[test]
    fn test_duplicate_codes_are_detected() {
        let coupons = vec![
            Coupon::new("A", 1.0).unwrap(),
            Coupon::new("A", 2.0).unwrap(),
        ];
        assert!(matches!(
            ensure_unique_codes(&coupons),
            Err(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_find_coupon() {
        assert_eq!(find_coupon("SPRING15").map(Coupon::discount), Some(15.0));
        assert!(find_coupon("spring15").is_none());
    }
}
