//! # storefront-services
//!
//! Pricing, checkout, account and page flows built from storefront-core
//! rules and injected collaborators.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     storefront-services                                 │
//! │                                                                         │
//! │   Storefront (facade) ──► pricing / checkout / account / pages / feed   │
//! │          │                          │                                   │
//! │          │                          ▼                                   │
//! │          │                   ports (collaborator traits)                │
//! │          │                          │                                   │
//! │          ▼                          ▼                                   │
//! │   StorefrontConfig         real providers or test doubles               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Calls are a single logical chain: the only suspension point is awaiting
//! the payment gateway (and the sample data feed). Nothing is retried.

pub mod account;
pub mod checkout;
pub mod config;
pub mod error;
pub mod feed;
pub mod pages;
pub mod ports;
pub mod pricing;
pub mod storefront;
pub mod telemetry;

pub use config::StorefrontConfig;
pub use error::{ServiceError, ServiceResult};
pub use ports::{Analytics, ExchangeRates, Mailer, PaymentGateway, SecurityCodes, ShippingQuotes};
pub use storefront::{Collaborators, Storefront};
