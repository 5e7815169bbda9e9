//! Recording test doubles for the collaborator traits.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use storefront_core::{
    ChargeResult, CreditCard, FixedClock, SecurityCode, ShippingQuote,
};
use storefront_services::{
    Analytics, Collaborators, ExchangeRates, Mailer, PaymentGateway, SecurityCodes,
    ServiceError, ServiceResult, ShippingQuotes,
};

#[derive(Default)]
pub struct StubRates {
    pub rates: BTreeMap<String, f64>,
    pub asked: Mutex<Vec<String>>,
}

impl ExchangeRates for StubRates {
    fn exchange_rate(&self, currency: &str) -> f64 {
        self.asked.lock().unwrap().push(currency.to_string());
        self.rates.get(currency).copied().unwrap_or(1.0)
    }
}

#[derive(Default)]
pub struct StubShipping {
    pub quote: Mutex<Option<ShippingQuote>>,
}

impl StubShipping {
    pub fn set(&self, quote: Option<ShippingQuote>) {
        *self.quote.lock().unwrap() = quote;
    }
}

impl ShippingQuotes for StubShipping {
    fn shipping_quote(&self, _destination: &str) -> Option<ShippingQuote> {
        self.quote.lock().unwrap().clone()
    }
}

pub struct StubGateway {
    pub reply: Mutex<GatewayReply>,
    pub charges: Mutex<Vec<(CreditCard, f64)>>,
}

#[derive(Clone, Copy)]
pub enum GatewayReply {
    Answer(ChargeResult),
    Unreachable,
}

impl StubGateway {
    pub fn answering(result: ChargeResult) -> Self {
        StubGateway {
            reply: Mutex::new(GatewayReply::Answer(result)),
            charges: Mutex::new(Vec::new()),
        }
    }

    pub fn set(&self, reply: GatewayReply) {
        *self.reply.lock().unwrap() = reply;
    }
}

#[async_trait]
impl PaymentGateway for StubGateway {
    async fn charge(&self, card: &CreditCard, amount: f64) -> ServiceResult<ChargeResult> {
        self.charges.lock().unwrap().push((card.clone(), amount));
        match *self.reply.lock().unwrap() {
            GatewayReply::Answer(result) => Ok(result),
            GatewayReply::Unreachable => Err(ServiceError::Gateway("unreachable".into())),
        }
    }
}

#[derive(Default)]
pub struct Outbox {
    pub sent: Mutex<Vec<(String, String)>>,
}

impl Mailer for Outbox {
    fn send_email(&self, to: &str, message: &str) {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), message.to_string()));
    }
}

pub struct StubCodes {
    pub code: SecurityCode,
    pub generated: Mutex<usize>,
}

impl SecurityCodes for StubCodes {
    fn generate_code(&self) -> SecurityCode {
        *self.generated.lock().unwrap() += 1;
        self.code.clone()
    }
}

#[derive(Default)]
pub struct PageViews {
    pub paths: Mutex<Vec<String>>,
}

impl Analytics for PageViews {
    fn track_page_view(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }
}

pub fn clock_at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap(),
    )
}

/// All doubles, kept alongside the `Collaborators` built from them so tests
/// can inspect what was recorded.
pub struct Doubles {
    pub rates: Arc<StubRates>,
    pub shipping: Arc<StubShipping>,
    pub gateway: Arc<StubGateway>,
    pub outbox: Arc<Outbox>,
    pub codes: Arc<StubCodes>,
    pub views: Arc<PageViews>,
}

impl Doubles {
    pub fn new() -> Self {
        Doubles {
            rates: Arc::new(StubRates {
                rates: BTreeMap::from([("AUD".to_string(), 1.5)]),
                asked: Mutex::new(Vec::new()),
            }),
            shipping: Arc::new(StubShipping::default()),
            gateway: Arc::new(StubGateway::answering(ChargeResult::success())),
            outbox: Arc::new(Outbox::default()),
            codes: Arc::new(StubCodes {
                code: SecurityCode::Numeric(123456),
                generated: Mutex::new(0),
            }),
            views: Arc::new(PageViews::default()),
        }
    }

    pub fn collaborators(&self, clock: FixedClock) -> Collaborators {
        Collaborators {
            clock: Arc::new(clock),
            rates: self.rates.clone(),
            shipping: self.shipping.clone(),
            payments: self.gateway.clone(),
            mailer: self.outbox.clone(),
            codes: self.codes.clone(),
            analytics: self.views.clone(),
        }
    }
}
