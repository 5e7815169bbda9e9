//! # Business Rules
//!
//! Evaluators that turn raw input into a user-facing outcome.
//!
//! ## Outcome Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  calculate_discount(price, code)                                        │
//! │       │                                                                 │
//! │       ├── price <= 0 / not a number ─► Err(DiscountError::InvalidPrice) │
//! │       ├── code unknown / not text   ─► Err(InvalidDiscountCode)         │
//! │       └── OK ──────────────────────► Ok(price × (1 - pct / 100))        │
//! │                                                                         │
//! │  validate_user_input(username, age)                                     │
//! │       │                                                                 │
//! │       ├── username check ─┐  (both always run)                          │
//! │       ├── age check ──────┤                                             │
//! │       ▼                   ▼                                             │
//! │  InputVerdict { Success | Invalid(reasons...) }                         │
//! │       "Validation successful"  /  "Invalid: reason, reason"             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rejections are ordinary return values. Callers inspect the outcome
//! (or its message) instead of handling a failure path.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::{DiscountError, InputViolation};
use crate::validation::is_valid_username_within;

// =============================================================================
// Discount Codes
// =============================================================================

/// Discount codes accepted at checkout, as whole percentages.
const DISCOUNT_CODES: &[(&str, u32)] = &[("SAVE10", 10), ("SAVE20", 20)];

/// Looks up the percentage for a discount code. Codes are case-sensitive.
pub fn discount_percentage(code: &str) -> Option<u32> {
    DISCOUNT_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, percentage)| *percentage)
}

/// Applies a discount code to a price.
///
/// ## Rules
/// - Price must be a finite number greater than zero
/// - Code must be one of the known discount codes
/// - Price is checked first
///
/// ## Example
/// ```rust
/// use storefront_core::rules::calculate_discount;
///
/// assert_eq!(calculate_discount(10.0, "SAVE10"), Ok(9.0));
/// assert_eq!(calculate_discount(10.0, "SAVE20"), Ok(8.0));
/// assert!(calculate_discount(-10.0, "SAVE10").is_err());
/// ```
pub fn calculate_discount(price: f64, code: &str) -> Result<f64, DiscountError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(DiscountError::InvalidPrice);
    }

    let percentage = discount_percentage(code).ok_or(DiscountError::InvalidDiscountCode)?;

    Ok(price - price * f64::from(percentage) / 100.0)
}

/// [`calculate_discount`] for values taken straight from a JSON payload.
///
/// A price sent as a string (`"10"`) is an invalid price; a code sent as a
/// number is an invalid code.
pub fn calculate_discount_json(price: &Value, code: &Value) -> Result<f64, DiscountError> {
    let price = price.as_f64().ok_or(DiscountError::InvalidPrice)?;

    // "" is never a known code
    calculate_discount(price, code.as_str().unwrap_or_default())
}

// =============================================================================
// User Input
// =============================================================================

/// Username window used by [`validate_user_input`].
///
/// Wider than the 5..=15 default of `is_valid_username`.
pub const USER_INPUT_USERNAME_MIN_LENGTH: usize = 3;
pub const USER_INPUT_USERNAME_MAX_LENGTH: usize = 255;

/// Minimum age accepted by [`validate_user_input`].
pub const MINIMUM_USER_AGE: u32 = 18;

/// Discriminant of an [`InputVerdict`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictStatus {
    Success,
    Invalid,
}

/// Result of [`validate_user_input`].
///
/// ## Invariants
/// - `status == Success` iff `reasons` is empty
/// - The message contains "success" for Success and "Invalid" otherwise
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputVerdict {
    reasons: Vec<InputViolation>,
}

impl InputVerdict {
    fn from_reasons(reasons: Vec<InputViolation>) -> Self {
        InputVerdict { reasons }
    }

    pub fn status(&self) -> VerdictStatus {
        if self.reasons.is_empty() {
            VerdictStatus::Success
        } else {
            VerdictStatus::Invalid
        }
    }

    pub fn is_success(&self) -> bool {
        self.status() == VerdictStatus::Success
    }

    /// Every check that failed, in evaluation order (username, then age).
    pub fn reasons(&self) -> &[InputViolation] {
        &self.reasons
    }

    /// Human-readable message, e.g. `Invalid: age must be at least 18`.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InputVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reasons.is_empty() {
            return write!(f, "Validation successful");
        }

        let reasons: Vec<String> = self.reasons.iter().map(ToString::to_string).collect();
        write!(f, "Invalid: {}", reasons.join(", "))
    }
}

fn username_violation(username: &str) -> Option<InputViolation> {
    if is_valid_username_within(
        username,
        USER_INPUT_USERNAME_MAX_LENGTH,
        USER_INPUT_USERNAME_MIN_LENGTH,
    ) {
        None
    } else {
        Some(InputViolation::UsernameLength {
            min: USER_INPUT_USERNAME_MIN_LENGTH,
            max: USER_INPUT_USERNAME_MAX_LENGTH,
        })
    }
}

fn age_violation(age: f64) -> Option<InputViolation> {
    if age >= f64::from(MINIMUM_USER_AGE) {
        None
    } else {
        Some(InputViolation::Underage {
            min: MINIMUM_USER_AGE,
        })
    }
}

/// Checks a sign-up form: username of 3..=255 characters and age of 18+.
///
/// Both checks always run so every problem is reported at once.
///
/// ## Example
/// ```rust
/// use storefront_core::rules::validate_user_input;
///
/// assert!(validate_user_input("Sai", 22).is_success());
/// assert!(validate_user_input("Sai", 16).message().starts_with("Invalid"));
/// ```
pub fn validate_user_input(username: &str, age: u32) -> InputVerdict {
    let reasons = [username_violation(username), age_violation(f64::from(age))]
        .into_iter()
        .flatten()
        .collect();

    InputVerdict::from_reasons(reasons)
}

/// [`validate_user_input`] for values taken straight from a JSON payload.
pub fn validate_user_input_json(username: &Value, age: &Value) -> InputVerdict {
    let username = match username.as_str() {
        Some(username) => username_violation(username),
        None => Some(InputViolation::UsernameNotText),
    };

    let age = match age.as_f64() {
        Some(age) => age_violation(age),
        None => Some(InputViolation::AgeNotNumber),
    };

    InputVerdict::from_reasons([username, age].into_iter().flatten().collect())
}

// =============================================================================
// Unit Tests
// =============================================================================
