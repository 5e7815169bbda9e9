//! # Validation Module
//!
//! Primitive predicates used by the business rules.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: THIS MODULE - primitive predicates                           │
//! │  ├── is_valid_username   (length window)                               │
//! │  ├── is_price_in_range   (inclusive bounds)                            │
//! │  └── can_drive           (per-country minimum age)                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: rules - user-facing outcomes                                 │
//! │  ├── calculate_discount                                                │
//! │  └── validate_user_input                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{can_drive, is_valid_username, DrivingEligibility};
//!
//! assert!(is_valid_username("alice"));
//! assert_eq!(can_drive(16, "US"), DrivingEligibility::Eligible(true));
//! assert_eq!(can_drive(17, "FR"), DrivingEligibility::UnknownCountry);
//! ```

use std::fmt;

use serde::Serialize;
use serde_json::Value;

// =============================================================================
// Username
// =============================================================================

/// Default maximum username length for [`is_valid_username`].
pub const DEFAULT_USERNAME_MAX_LENGTH: usize = 15;

/// Default minimum username length for [`is_valid_username`].
pub const DEFAULT_USERNAME_MIN_LENGTH: usize = 5;

/// Validates a username against the default 5..=15 character window.
pub fn is_valid_username(name: &str) -> bool {
    is_valid_username_within(
        name,
        DEFAULT_USERNAME_MAX_LENGTH,
        DEFAULT_USERNAME_MIN_LENGTH,
    )
}

/// Validates a username against a custom window.
///
/// ## Rules
/// - `min_length <= length <= max_length`, both bounds inclusive
/// - Length counts characters, not bytes
/// - The empty string is never valid
///
/// ## Example
/// ```rust
/// use storefront_core::validation::is_valid_username_within;
///
/// assert!(is_valid_username_within("abc", 255, 3));
/// assert!(!is_valid_username_within("ab", 255, 3));
/// ```
pub fn is_valid_username_within(name: &str, max_length: usize, min_length: usize) -> bool {
    if name.is_empty() {
        return false;
    }

    let length = name.chars().count();
    length >= min_length && length <= max_length
}

/// Validates a username that arrived as raw JSON.
///
/// Anything that is not a JSON string (null, numbers, objects) is rejected.
pub fn is_valid_username_json(name: &Value, max_length: usize, min_length: usize) -> bool {
    match name.as_str() {
        Some(name) => is_valid_username_within(name, max_length, min_length),
        None => false,
    }
}

// =============================================================================
// Price
// =============================================================================

/// Returns true when `min <= price <= max`.
///
/// ## Example
/// ```rust
/// use storefront_core::validation::is_price_in_range;
///
/// assert!(is_price_in_range(0.0, 0.0, 100.0));
/// assert!(is_price_in_range(100.0, 0.0, 100.0));
/// assert!(!is_price_in_range(101.0, 0.0, 100.0));
/// ```
pub fn is_price_in_range(price: f64, min: f64, max: f64) -> bool {
    price >= min && price <= max
}

// =============================================================================
// Driving Age
// =============================================================================

/// Minimum driving age per supported country code.
const MINIMUM_DRIVING_AGE: &[(&str, u32)] = &[("US", 16), ("UK", 17)];

/// Outcome of [`can_drive`].
///
/// "Not old enough" and "we don't know this country" are different answers,
/// so they are different variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DrivingEligibility {
    /// The country is known; `true` when the age meets its minimum.
    Eligible(bool),
    /// The country code is empty or not in the table.
    UnknownCountry,
}

impl DrivingEligibility {
    /// Returns the yes/no answer, or `None` for an unknown country.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DrivingEligibility::Eligible(allowed) => Some(*allowed),
            DrivingEligibility::UnknownCountry => None,
        }
    }
}

impl fmt::Display for DrivingEligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrivingEligibility::Eligible(allowed) => write!(f, "{}", allowed),
            DrivingEligibility::UnknownCountry => write!(f, "Invalid country code"),
        }
    }
}

/// Looks up the minimum driving age for a country code.
pub fn minimum_driving_age(country_code: &str) -> Option<u32> {
    MINIMUM_DRIVING_AGE
        .iter()
        .find(|(code, _)| *code == country_code)
        .map(|(_, age)| *age)
}

/// Decides whether someone of `age` may drive in `country_code`.
///
/// ## Decision Table
/// ```text
/// ┌──────────┬─────────┬──────────────────────────────────┐
/// │ country  │ min age │ result                           │
/// ├──────────┼─────────┼──────────────────────────────────┤
/// │ US       │ 16      │ Eligible(age >= 16)              │
/// │ UK       │ 17      │ Eligible(age >= 17)              │
/// │ "" / ??  │ -       │ UnknownCountry                   │
/// └──────────┴─────────┴──────────────────────────────────┘
/// ```
pub fn can_drive(age: u32, country_code: &str) -> DrivingEligibility {
    match minimum_driving_age(country_code) {
        Some(minimum) => DrivingEligibility::Eligible(age >= minimum),
        None => DrivingEligibility::UnknownCountry,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
