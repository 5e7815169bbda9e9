//! Scenario tests for the storefront facade, with every collaborator
//! replaced by a recording double.

mod common;

use std::sync::Arc;

use common::{clock_at, Doubles, GatewayReply};
use storefront_core::{ChargeResult, CreditCard, Order, OrderError, ShippingQuote};
use storefront_services::config::StorefrontConfig;
use storefront_services::feed::fetch_data;
use storefront_services::ports::NoOpAnalytics;
use storefront_services::{Collaborators, ServiceError, Storefront};

fn storefront(doubles: &Doubles, clock: storefront_core::FixedClock) -> Storefront {
    Storefront::new(StorefrontConfig::default(), doubles.collaborators(clock)).unwrap()
}

fn midday() -> storefront_core::FixedClock {
    clock_at(2025, 3, 14, 12, 0)
}

#[test]
fn price_in_currency_uses_rate_lookup() {
    let doubles = Doubles::new();
    let store = storefront(&doubles, midday());

    assert_eq!(store.get_price_in_currency(10.0, "AUD"), 15.0);
    assert_eq!(*doubles.rates.asked.lock().unwrap(), vec!["AUD".to_string()]);
}

#[test]
fn shipping_info_reflects_quote_availability() {
    let doubles = Doubles::new();
    let store = storefront(&doubles, midday());

    doubles.shipping.set(None);
    assert_eq!(store.get_shipping_info("London"), "Shipping unavailable");
    assert!(store.shipping_quote("London").is_none());

    doubles.shipping.set(Some(ShippingQuote::new(10.0, 2u32)));
    let info = store.get_shipping_info("London");
    assert!(info.to_lowercase().contains("shipping cost: $10 (2 days)"));
}

#[test]
fn render_page_tracks_home() {
    let doubles = Doubles::new();
    let store = storefront(&doubles, midday());

    assert!(store.render_page().contains("content"));
    assert_eq!(*doubles.views.paths.lock().unwrap(), vec!["/home".to_string()]);
}

#[tokio::test]
async fn submit_order_maps_gateway_status() {
    let doubles = Doubles::new();
    let store = storefront(&doubles, midday());
    let order = Order { total_amount: 10.0 };
    let card = CreditCard::new("1234");

    let outcome = store.submit_order(&order, &card).await.unwrap();
    assert!(outcome.success);
    assert_eq!(outcome.error, None);

    doubles.gateway.set(GatewayReply::Answer(ChargeResult::failed()));
    let outcome = store.submit_order(&order, &card).await.unwrap();
    assert!(!outcome.success);
    assert_eq!(outcome.error, Some(OrderError::PaymentError));

    let charges = doubles.gateway.charges.lock().unwrap();
    assert_eq!(charges.len(), 2);
    assert_eq!(charges[0], (card.clone(), 10.0));
}

#[tokio::test]
async fn submit_order_surfaces_gateway_outage() {
    let doubles = Doubles::new();
    doubles.gateway.set(GatewayReply::Unreachable);
    let store = storefront(&doubles, midday());

    let err = store
        .submit_order(&Order { total_amount: 5.0 }, &CreditCard::new("9999"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Gateway(_)));
}

#[test]
fn sign_up_sends_exactly_one_welcome() {
    let doubles = Doubles::new();
    let store = storefront(&doubles, midday());

    assert!(!store.sign_up("not-an-email"));
    assert!(doubles.outbox.sent.lock().unwrap().is_empty());

    assert!(store.sign_up("name@domain.com"));
    let sent = doubles.outbox.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "name@domain.com");
    assert!(sent[0].1.to_lowercase().contains("welcome"));
}

#[test]
fn login_sends_generated_code() {
    let doubles = Doubles::new();
    let store = storefront(&doubles, midday());

    store.login("name@domain.com");

    assert_eq!(*doubles.codes.generated.lock().unwrap(), 1);
    assert_eq!(
        *doubles.outbox.sent.lock().unwrap(),
        vec![("name@domain.com".to_string(), "123456".to_string())]
    );
}

#[test]
fn online_window_follows_config() {
    let doubles = Doubles::new();

    assert!(storefront(&doubles, clock_at(2025, 3, 14, 8, 0)).is_online());
    assert!(storefront(&doubles, clock_at(2025, 3, 14, 19, 59)).is_online());
    assert!(!storefront(&doubles, clock_at(2025, 3, 14, 20, 0)).is_online());
    assert!(!storefront(&doubles, clock_at(2025, 3, 14, 7, 59)).is_online());
}

#[test]
fn new_year_discount() {
    let doubles = Doubles::new();

    assert_eq!(storefront(&doubles, clock_at(2025, 1, 1, 0, 0)).get_discount(), 0.2);
    assert_eq!(storefront(&doubles, clock_at(2025, 1, 1, 23, 59)).get_discount(), 0.2);
    assert_eq!(storefront(&doubles, clock_at(2025, 1, 2, 0, 0)).get_discount(), 0.0);
}

#[test]
fn invalid_config_is_rejected() {
    let doubles = Doubles::new();
    let mut config = StorefrontConfig::default();
    config.mail.welcome_message = "Hello".into();

    let result = Storefront::new(config, doubles.collaborators(midday()));
    assert!(matches!(result, Err(ServiceError::InvalidConfig(_))));
}

#[test]
fn defaults_fill_in_optional_collaborators() {
    let doubles = Doubles::new();
    let mut config = StorefrontConfig::default();
    config.currency.rates.insert("EUR".into(), 0.5);

    let mut collaborators: Collaborators =
        Collaborators::with_defaults(&config, doubles.shipping.clone(), doubles.gateway.clone());
    collaborators.analytics = Arc::new(NoOpAnalytics);

    let store = Storefront::new(config, collaborators).unwrap();
    assert_eq!(store.get_price_in_currency(10.0, "EUR"), 5.0);
    assert!(store.sign_up("name@domain.com"));
}

#[tokio::test]
async fn fetch_data_resolves_or_rejects() {
    assert!(!fetch_data(false).await.unwrap().is_empty());

    let err = fetch_data(true).await.unwrap_err();
    assert!(err.to_string().to_lowercase().contains("fail"));
}
