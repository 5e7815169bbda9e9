//! # storefront-core: Pure Business Rules for the Storefront
//!
//! This crate holds the storefront's validation and pricing rules as pure
//! functions, plus a small LIFO [`Stack`] container.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storefront Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               storefront-services (orchestration)               │   │
//! │  │  pricing · checkout · account · pages  ◄── injected traits     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ storefront-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │  ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌───────┐ │   │
//! │  │  │validation│ │  rules   │ │ schedule │ │ coupons  │ │ stack │ │   │
//! │  │  │ username │ │ discount │ │  Clock   │ │ catalog  │ │ LIFO  │ │   │
//! │  │  │ can_drive│ │user input│ │ promo    │ │          │ │       │ │   │
//! │  │  └──────────┘ └──────────┘ └──────────┘ └──────────┘ └───────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`stack`] - Generic LIFO container
//! - [`validation`] - Username, price range and driving age predicates
//! - [`rules`] - Discount codes and sign-up form evaluation
//! - [`schedule`] - Clock-driven rules (trading hours, New Year promo)
//! - [`coupons`] - Read-only coupon catalog
//! - [`types`] - Value records shared with the services crate
//! - [`arith`] - Numeric helpers
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::rules::{calculate_discount, validate_user_input};
//! use storefront_core::Stack;
//!
//! assert_eq!(calculate_discount(10.0, "SAVE10"), Ok(9.0));
//! assert!(validate_user_input("Sai", 22).is_success());
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! assert_eq!(stack.pop(), Ok(1));
//! assert!(stack.pop().is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod arith;
pub mod coupons;
pub mod error;
pub mod rules;
pub mod schedule;
pub mod stack;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use coupons::{get_coupons, Coupon};
pub use error::{DiscountError, InputViolation, StackError, ValidationError};
pub use rules::{InputVerdict, VerdictStatus};
pub use schedule::{Clock, FixedClock, SystemClock, TradingHours};
pub use stack::Stack;
pub use types::*;
pub use validation::DrivingEligibility;
