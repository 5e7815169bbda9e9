//! # Storefront Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOREFRONT_OPEN_HOUR=9                                             │
//! │     STOREFRONT_NEW_YEAR_RATE=0.25                                      │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/storefront/storefront.toml (Linux)                       │
//! │     ~/Library/Application Support/com.storefront.rules/... (macOS)     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     08:00-20:00, 20% on January 1                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [hours]
//! open_hour = 8    # inclusive
//! close_hour = 20  # exclusive
//!
//! [promo]
//! new_year_rate = 0.2
//!
//! [mail]
//! welcome_message = "Welcome aboard!"
//!
//! [currency.rates]
//! AUD = 1.5
//! EUR = 0.92
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use storefront_core::schedule::NEW_YEAR_DISCOUNT_RATE;
use storefront_core::TradingHours;
use tracing::{debug, info, warn};

use crate::account::DEFAULT_WELCOME_MESSAGE;
use crate::error::{ServiceError, ServiceResult};

// =============================================================================
// Sections
// =============================================================================

/// Calendar promotion settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoSettings {
    /// Rate returned by `get_discount` on January 1.
    #[serde(default = "default_new_year_rate")]
    pub new_year_rate: f64,
}

fn default_new_year_rate() -> f64 {
    NEW_YEAR_DISCOUNT_RATE
}

impl Default for PromoSettings {
    fn default() -> Self {
        PromoSettings {
            new_year_rate: default_new_year_rate(),
        }
    }
}

/// Outgoing mail settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MailSettings {
    /// Body of the e-mail sent after sign up. Must mention "welcome".
    #[serde(default = "default_welcome_message")]
    pub welcome_message: String,
}

fn default_welcome_message() -> String {
    DEFAULT_WELCOME_MESSAGE.to_string()
}

impl Default for MailSettings {
    fn default() -> Self {
        MailSettings {
            welcome_message: default_welcome_message(),
        }
    }
}

/// Exchange rates for the built-in rate table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrencySettings {
    #[serde(default)]
    pub rates: BTreeMap<String, f64>,
}

// =============================================================================
// Storefront Config
// =============================================================================

/// Complete storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub hours: TradingHours,

    #[serde(default)]
    pub promo: PromoSettings,

    #[serde(default)]
    pub mail: MailSettings,

    #[serde(default)]
    pub currency: CurrencySettings,
}

impl StorefrontConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ServiceResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML file without applying environment overrides.
    pub fn from_file(path: &Path) -> ServiceResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ServiceResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ServiceError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Storefront config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ServiceResult<()> {
        self.hours.validate()?;

        if !(0.0..=1.0).contains(&self.promo.new_year_rate) {
            return Err(ServiceError::InvalidConfig(format!(
                "new_year_rate must be between 0 and 1, got {}",
                self.promo.new_year_rate
            )));
        }

        if !self.mail.welcome_message.to_lowercase().contains("welcome") {
            return Err(ServiceError::InvalidConfig(
                "welcome_message must contain the word \"welcome\"".into(),
            ));
        }

        if let Some((currency, rate)) = self
            .currency
            .rates
            .iter()
            .find(|(_, rate)| !rate.is_finite() || **rate <= 0.0)
        {
            return Err(ServiceError::InvalidConfig(format!(
                "exchange rate for {} must be positive, got {}",
                currency, rate
            )));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `STOREFRONT_*` overrides from `lookup`. Unparseable values
    /// are logged and skipped.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(hour) = lookup("STOREFRONT_OPEN_HOUR") {
            match hour.parse::<u32>() {
                Ok(h) => self.hours.open_hour = h,
                Err(_) => warn!(value = %hour, "Ignoring non-numeric STOREFRONT_OPEN_HOUR"),
            }
        }

        if let Some(hour) = lookup("STOREFRONT_CLOSE_HOUR") {
            match hour.parse::<u32>() {
                Ok(h) => self.hours.close_hour = h,
                Err(_) => warn!(value = %hour, "Ignoring non-numeric STOREFRONT_CLOSE_HOUR"),
            }
        }

        if let Some(rate) = lookup("STOREFRONT_NEW_YEAR_RATE") {
            match rate.parse::<f64>() {
                Ok(r) => {
                    debug!(rate = r, "Overriding New Year rate from environment");
                    self.promo.new_year_rate = r;
                }
                Err(_) => warn!(value = %rate, "Ignoring non-numeric STOREFRONT_NEW_YEAR_RATE"),
            }
        }

        if let Some(message) = lookup("STOREFRONT_WELCOME_MESSAGE") {
            self.mail.welcome_message = message;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storefront", "rules")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }
}
