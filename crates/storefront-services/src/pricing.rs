//! # Pricing
//!
//! Currency conversion and shipping text, both built on lookups supplied by
//! the caller.
//!
//! ```text
//!   get_price_in_currency(10, "AUD")          get_shipping_info("London")
//!        │                                         │
//!        ▼                                         ▼
//!   rates.exchange_rate("AUD") = 1.5          quotes.shipping_quote("London")
//!        │                                         │
//!        ▼                                    None ├──► "Shipping unavailable"
//!   10 × 1.5 = 15                                  │
//!                                   Some(quote) ───┴──► "Shipping cost: $10 (2 days)"
//! ```

use tracing::debug;

use crate::ports::{ExchangeRates, ShippingQuotes};

/// Message returned when no quote exists for a destination.
pub const SHIPPING_UNAVAILABLE: &str = "Shipping unavailable";

/// Converts a price into `currency` using the injected rate lookup.
pub fn get_price_in_currency(rates: &dyn ExchangeRates, price: f64, currency: &str) -> f64 {
    let rate = rates.exchange_rate(currency);
    debug!(currency = %currency, rate, "Converted price");
    price * rate
}

/// Describes shipping to `destination`.
///
/// A missing quote is a normal outcome, not an error.
pub fn get_shipping_info(quotes: &dyn ShippingQuotes, destination: &str) -> String {
    match quotes.shipping_quote(destination) {
        Some(quote) => format!("Shipping cost: ${} ({})", quote.cost, quote.estimated_days),
        None => {
            debug!(destination = %destination, "No shipping quote");
            SHIPPING_UNAVAILABLE.to_string()
        }
    }
}
