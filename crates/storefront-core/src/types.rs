//! # Domain Types
//!
//! Plain value records exchanged with the collaborators of the order and
//! pricing flows. None of them are persisted.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ ShippingQuote   │   │     Order       │   │  CreditCard     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  cost           │   │  total_amount   │   │  number         │       │
//! │  │  estimated_days │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ChargeResult   │──►│  OrderOutcome   │   │  SecurityCode   │       │
//! │  │  status         │   │  success        │   │  Numeric / Text │       │
//! │  │  Success/Failed │   │  error?         │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field names serialize in camelCase to match the JSON the storefront
//! frontend already speaks (`totalAmount`, `estimatedDays`, ...).

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Shipping
// =============================================================================

/// How long delivery takes, as quoted by the shipping provider.
///
/// Providers send either a bare number of days or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeliveryEstimate {
    Days(u32),
    Text(String),
}

impl fmt::Display for DeliveryEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryEstimate::Days(days) => write!(f, "{} days", days),
            DeliveryEstimate::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<u32> for DeliveryEstimate {
    fn from(days: u32) -> Self {
        DeliveryEstimate::Days(days)
    }
}

impl From<&str> for DeliveryEstimate {
    fn from(text: &str) -> Self {
        DeliveryEstimate::Text(text.to_string())
    }
}

/// A shipping quote for one destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingQuote {
    pub cost: f64,
    pub estimated_days: DeliveryEstimate,
}

impl ShippingQuote {
    pub fn new(cost: f64, estimated_days: impl Into<DeliveryEstimate>) -> Self {
        ShippingQuote {
            cost,
            estimated_days: estimated_days.into(),
        }
    }
}

// =============================================================================
// Orders & Payment
// =============================================================================

/// An order ready to be paid for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub total_amount: f64,
}

/// Card details handed to the payment gateway.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard {
    pub credit_card_number: String,
}

impl CreditCard {
    pub fn new(number: impl Into<String>) -> Self {
        CreditCard {
            credit_card_number: number.into(),
        }
    }

    /// Card number with everything but the last four characters hidden.
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.credit_card_number.chars().collect();
        let visible = chars.len().saturating_sub(4);
        chars
            .iter()
            .enumerate()
            .map(|(i, c)| if i < visible { '*' } else { *c })
            .collect()
    }
}

// Never print the full number.
impl fmt::Debug for CreditCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditCard")
            .field("credit_card_number", &self.masked())
            .finish()
    }
}

/// Status reported by the payment gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeStatus {
    Success,
    Failed,
}

/// Raw answer of a charge attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeResult {
    pub status: ChargeStatus,
}

impl ChargeResult {
    pub fn success() -> Self {
        ChargeResult {
            status: ChargeStatus::Success,
        }
    }

    pub fn failed() -> Self {
        ChargeResult {
            status: ChargeStatus::Failed,
        }
    }
}

/// Why an order did not go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderError {
    PaymentError,
}

/// Result of submitting an order.
///
/// Serializes as `{"success":true}` or
/// `{"success":false,"error":"payment_error"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<OrderError>,
}

impl OrderOutcome {
    pub fn accepted() -> Self {
        OrderOutcome {
            success: true,
            error: None,
        }
    }

    pub fn payment_failed() -> Self {
        OrderOutcome {
            success: false,
            error: Some(OrderError::PaymentError),
        }
    }
}

impl From<ChargeResult> for OrderOutcome {
    fn from(result: ChargeResult) -> Self {
        match result.status {
            ChargeStatus::Success => OrderOutcome::accepted(),
            ChargeStatus::Failed => OrderOutcome::payment_failed(),
        }
    }
}

// =============================================================================
// Security Code
// =============================================================================

/// One-time code used for passwordless login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SecurityCode {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for SecurityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecurityCode::Numeric(code) => write!(f, "{}", code),
            SecurityCode::Text(code) => write!(f, "{}", code),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
