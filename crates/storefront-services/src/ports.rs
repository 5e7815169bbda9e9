//! # Collaborator Traits
//!
//! Every side effect of the storefront goes through one of these traits.
//! Production code plugs in real providers; tests plug in recorders.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Trait            Call                               Kind              │
//! │  ───────────────  ─────────────────────────────────  ───────────────── │
//! │  ExchangeRates    exchange_rate(currency) → f64      sync lookup       │
//! │  ShippingQuotes   shipping_quote(dest) → Option<..>  sync lookup       │
//! │  PaymentGateway   charge(card, amount) → result      async             │
//! │  Mailer           send_email(to, message)            fire-and-forget   │
//! │  SecurityCodes    generate_code() → SecurityCode     sync              │
//! │  Analytics        track_page_view(path)              fire-and-forget   │
//! │  Clock            now() → NaiveDateTime              (storefront-core) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use async_trait::async_trait;
use rand::Rng;
use storefront_core::{ChargeResult, CreditCard, SecurityCode, ShippingQuote};
use tracing::{debug, info, warn};

use crate::error::ServiceResult;

// =============================================================================
// Trait Definitions
// =============================================================================

/// Currency conversion rates relative to the store currency.
pub trait ExchangeRates: Send + Sync {
    fn exchange_rate(&self, currency: &str) -> f64;
}

/// Shipping quotes per destination. `None` means shipping is unavailable.
pub trait ShippingQuotes: Send + Sync {
    fn shipping_quote(&self, destination: &str) -> Option<ShippingQuote>;
}

/// Card payment provider.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charges `amount` to `card`.
    ///
    /// A declined card is `Ok` with a failed status; `Err` means the gateway
    /// itself could not be reached or answered garbage.
    async fn charge(&self, card: &CreditCard, amount: f64) -> ServiceResult<ChargeResult>;
}

/// Outgoing e-mail.
pub trait Mailer: Send + Sync {
    fn send_email(&self, to: &str, message: &str);
}

/// One-time code generator for passwordless login.
pub trait SecurityCodes: Send + Sync {
    fn generate_code(&self) -> SecurityCode;
}

/// Page-view tracking.
pub trait Analytics: Send + Sync {
    fn track_page_view(&self, path: &str);
}

// =============================================================================
// Default Implementations
// =============================================================================

/// Exchange rates read from the `[currency]` config table.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredRates {
    rates: BTreeMap<String, f64>,
}

impl ConfiguredRates {
    pub fn new(rates: BTreeMap<String, f64>) -> Self {
        ConfiguredRates { rates }
    }
}

impl ExchangeRates for ConfiguredRates {
    /// Unknown currencies convert 1:1.
    fn exchange_rate(&self, currency: &str) -> f64 {
        match self.rates.get(currency) {
            Some(rate) => *rate,
            None => {
                warn!(currency = %currency, "No exchange rate configured, using 1.0");
                1.0
            }
        }
    }
}

/// Writes e-mails to the log instead of sending them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMailer;

impl Mailer for LogMailer {
    fn send_email(&self, to: &str, message: &str) {
        info!(to = %to, len = message.len(), "E-mail queued (log only)");
    }
}

/// Random six-digit numeric codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSecurityCodes;

impl SecurityCodes for RandomSecurityCodes {
    fn generate_code(&self) -> SecurityCode {
        SecurityCode::Numeric(rand::thread_rng().gen_range(100_000..1_000_000))
    }
}

/// Discards page views.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpAnalytics;

impl Analytics for NoOpAnalytics {
    fn track_page_view(&self, path: &str) {
        debug!(path = %path, "Page view dropped (no analytics configured)");
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
