//! # Checkout
//!
//! Paying for an order.
//!
//! ## Flow
//! ```text
//! submit_order(order, card)
//!      │
//!      ▼
//! gateway.charge(card, order.total_amount)   ◄── single attempt, no retry
//!      │
//!      ├── Err(e)            ─► Err(e)            (gateway unreachable)
//!      ├── status: Success   ─► { success: true }
//!      └── status: Failed    ─► { success: false, error: payment_error }
//! ```

use storefront_core::{ChargeStatus, CreditCard, Order, OrderOutcome};
use tracing::{info, warn};

use crate::error::ServiceResult;
use crate::ports::PaymentGateway;

/// Charges the order total to the card and reports the outcome.
pub async fn submit_order(
    gateway: &dyn PaymentGateway,
    order: &Order,
    card: &CreditCard,
) -> ServiceResult<OrderOutcome> {
    info!(amount = order.total_amount, card = %card.masked(), "Charging order");

    let result = gateway.charge(card, order.total_amount).await?;

    match result.status {
        ChargeStatus::Success => info!("Payment accepted"),
        ChargeStatus::Failed => warn!(card = %card.masked(), "Payment declined"),
    }

    Ok(OrderOutcome::from(result))
}
