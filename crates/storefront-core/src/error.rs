//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── StackError       - pop/peek on an empty stack                     │
//! │  ├── DiscountError    - calculate_discount rejections                  │
//! │  ├── InputViolation   - validate_user_input reasons                    │
//! │  └── ValidationError  - Invalid catalog / record construction          │
//! │                                                                         │
//! │  storefront-services errors (separate crate)                           │
//! │  └── ServiceError     - Collaborator and configuration failures        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Message Contract
//! Callers look for "empty" and "invalid" in these messages, so the
//! `#[error]` strings are part of the public behavior.

use thiserror::Error;

// =============================================================================
// Stack Error
// =============================================================================

/// Failures of [`crate::stack::Stack`].
///
/// A stack of arbitrary `T` has no sensible "missing" value, so reading from
/// an empty stack is an error rather than a sentinel.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum StackError {
    #[error("Stack is empty")]
    Empty,
}

// =============================================================================
// Discount Error
// =============================================================================

/// Reasons [`crate::rules::calculate_discount`] refuses to price an item.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DiscountError {
    /// Price was zero, negative, not finite, or not a number at all.
    #[error("Invalid price")]
    InvalidPrice,

    /// Code is missing from the discount table (or was not a string).
    #[error("Invalid discount code")]
    InvalidDiscountCode,
}

// =============================================================================
// Input Violation
// =============================================================================

/// One failed check inside [`crate::rules::validate_user_input`].
///
/// Several violations can be reported for a single call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputViolation {
    #[error("username must be a string")]
    UsernameNotText,

    #[error("username must be between {min} and {max} characters")]
    UsernameLength { min: usize, max: usize },

    #[error("age must be a number")]
    AgeNotNumber,

    #[error("age must be at least {min}")]
    Underage { min: u32 },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Construction-time validation errors for records and catalogs.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is outside `[min, max)`.
    #[error("{field} must be at least {min} and below {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Duplicate value (e.g., duplicate coupon code).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Unit Tests
// =============================================================================
