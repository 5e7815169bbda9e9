//! # Schedule Rules
//!
//! Rules that depend on the current time. The time always comes from an
//! injected [`Clock`], so tests can pin it.
//!
//! ```text
//!   hour:  0 ──────── 8 ════════════════════ 20 ──────── 24
//!                     ▲ online (inclusive)   ▲ offline (exclusive)
//!
//!   date:  Jan 1 (any time) ─► new-year rate     other days ─► 0
//! ```

use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// =============================================================================
// Clock
// =============================================================================

/// Source of the current local date and time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the machine's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

// =============================================================================
// Trading Hours
// =============================================================================

/// Daily window during which the store is online.
///
/// `open_hour` is inclusive, `close_hour` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingHours {
    pub open_hour: u32,
    pub close_hour: u32,
}

impl TradingHours {
    /// Creates a window, checking `open_hour < close_hour <= 24`.
    pub fn new(open_hour: u32, close_hour: u32) -> Result<Self, ValidationError> {
        let hours = TradingHours {
            open_hour,
            close_hour,
        };
        hours.validate()?;
        Ok(hours)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.close_hour > 24 {
            return Err(ValidationError::OutOfRange {
                field: "close_hour".to_string(),
                min: 1.0,
                max: 25.0,
            });
        }

        if self.open_hour >= self.close_hour {
            return Err(ValidationError::OutOfRange {
                field: "open_hour".to_string(),
                min: 0.0,
                max: f64::from(self.close_hour),
            });
        }

        Ok(())
    }

    /// Returns true when `hour` falls in `[open_hour, close_hour)`.
    pub fn contains_hour(&self, hour: u32) -> bool {
        hour >= self.open_hour && hour < self.close_hour
    }
}

impl Default for TradingHours {
    /// 08:00 to 20:00.
    fn default() -> Self {
        TradingHours {
            open_hour: 8,
            close_hour: 20,
        }
    }
}

/// Returns true when the clock's hour is within the default trading hours.
pub fn is_online(clock: &dyn Clock) -> bool {
    is_online_during(clock, TradingHours::default())
}

/// Returns true when the clock's hour is within `hours`.
pub fn is_online_during(clock: &dyn Clock, hours: TradingHours) -> bool {
    hours.contains_hour(clock.now().hour())
}

// =============================================================================
// New Year Promotion
// =============================================================================

/// Discount rate applied storewide on January 1.
pub const NEW_YEAR_DISCOUNT_RATE: f64 = 0.2;

/// Returns 0.2 on January 1 (any time of day), 0 otherwise.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use storefront_core::schedule::{get_discount, FixedClock};
///
/// let new_year = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(23, 59, 0).unwrap();
/// assert_eq!(get_discount(&FixedClock(new_year)), 0.2);
/// ```
pub fn get_discount(clock: &dyn Clock) -> f64 {
    get_discount_with_rate(clock, NEW_YEAR_DISCOUNT_RATE)
}

/// [`get_discount`] with a configurable New Year rate.
pub fn get_discount_with_rate(clock: &dyn Clock, new_year_rate: f64) -> f64 {
    let today = clock.now().date();
    if today.month() == 1 && today.day() == 1 {
        new_year_rate
    } else {
        0.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
