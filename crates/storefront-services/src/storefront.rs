//! # Storefront Facade
//!
//! Bundles the configuration with one instance of every collaborator so
//! callers do not have to thread seven trait objects through each call.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Storefront                                                             │
//! │  ├── config: StorefrontConfig                                          │
//! │  └── collaborators: Collaborators                                      │
//! │        clock · rates · shipping · payments · mailer · codes · analytics │
//! │                                                                         │
//! │  storefront.submit_order(..) ──► checkout::submit_order(payments, ..)  │
//! │  storefront.is_online()      ──► schedule::is_online_during(clock, ..) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use storefront_core::schedule::{get_discount_with_rate, is_online_during};
use storefront_core::{Clock, CreditCard, Order, OrderOutcome, ShippingQuote, SystemClock};

use crate::account;
use crate::checkout;
use crate::config::StorefrontConfig;
use crate::error::ServiceResult;
use crate::pages;
use crate::ports::{
    Analytics, ConfiguredRates, ExchangeRates, LogMailer, Mailer, NoOpAnalytics, PaymentGateway,
    RandomSecurityCodes, SecurityCodes, ShippingQuotes,
};
use crate::pricing;

/// The set of injected collaborators.
#[derive(Clone)]
pub struct Collaborators {
    pub clock: Arc<dyn Clock>,
    pub rates: Arc<dyn ExchangeRates>,
    pub shipping: Arc<dyn ShippingQuotes>,
    pub payments: Arc<dyn PaymentGateway>,
    pub mailer: Arc<dyn Mailer>,
    pub codes: Arc<dyn SecurityCodes>,
    pub analytics: Arc<dyn Analytics>,
}

impl Collaborators {
    /// Uses the built-in defaults for everything except the two providers
    /// that have no sensible default: shipping quotes and payments.
    ///
    /// ## Defaults
    /// - clock: [`SystemClock`]
    /// - rates: [`ConfiguredRates`] from `config.currency.rates`
    /// - mailer: [`LogMailer`]
    /// - codes: [`RandomSecurityCodes`]
    /// - analytics: [`NoOpAnalytics`]
    pub fn with_defaults(
        config: &StorefrontConfig,
        shipping: Arc<dyn ShippingQuotes>,
        payments: Arc<dyn PaymentGateway>,
    ) -> Self {
        Collaborators {
            clock: Arc::new(SystemClock),
            rates: Arc::new(ConfiguredRates::new(config.currency.rates.clone())),
            shipping,
            payments,
            mailer: Arc::new(LogMailer),
            codes: Arc::new(RandomSecurityCodes),
            analytics: Arc::new(NoOpAnalytics),
        }
    }
}

/// Entry point for all storefront flows.
#[derive(Clone)]
pub struct Storefront {
    config: Arc<StorefrontConfig>,
    collaborators: Collaborators,
}

impl Storefront {
    /// Creates a storefront, validating the configuration first.
    pub fn new(config: StorefrontConfig, collaborators: Collaborators) -> ServiceResult<Self> {
        config.validate()?;
        Ok(Storefront {
            config: Arc::new(config),
            collaborators,
        })
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    // =========================================================================
    // Schedule
    // =========================================================================

    /// True during the configured trading hours.
    pub fn is_online(&self) -> bool {
        is_online_during(self.collaborators.clock.as_ref(), self.config.hours)
    }

    /// Storewide discount rate for today.
    pub fn get_discount(&self) -> f64 {
        get_discount_with_rate(
            self.collaborators.clock.as_ref(),
            self.config.promo.new_year_rate,
        )
    }

    // =========================================================================
    // Pricing
    // =========================================================================

    pub fn get_price_in_currency(&self, price: f64, currency: &str) -> f64 {
        pricing::get_price_in_currency(self.collaborators.rates.as_ref(), price, currency)
    }

    pub fn get_shipping_info(&self, destination: &str) -> String {
        pricing::get_shipping_info(self.collaborators.shipping.as_ref(), destination)
    }

    /// Raw quote, for callers that need the numbers rather than the text.
    pub fn shipping_quote(&self, destination: &str) -> Option<ShippingQuote> {
        self.collaborators.shipping.shipping_quote(destination)
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    pub async fn submit_order(
        &self,
        order: &Order,
        card: &CreditCard,
    ) -> ServiceResult<OrderOutcome> {
        checkout::submit_order(self.collaborators.payments.as_ref(), order, card).await
    }

    // =========================================================================
    // Accounts & Pages
    // =========================================================================

    pub fn sign_up(&self, email: &str) -> bool {
        account::sign_up_with_message(
            self.collaborators.mailer.as_ref(),
            email,
            &self.config.mail.welcome_message,
        )
    }

    pub fn login(&self, email: &str) {
        account::login(
            self.collaborators.codes.as_ref(),
            self.collaborators.mailer.as_ref(),
            email,
        )
    }

    pub fn render_page(&self) -> String {
        pages::render_page(self.collaborators.analytics.as_ref())
    }
}
