//! # Account Flows
//!
//! Sign up and passwordless login.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  sign_up("ana@shop.io")                                                 │
//! │       │                                                                 │
//! │       ├── bad format? ─► false  (no e-mail sent)                        │
//! │       └── OK ──────────► mailer.send_email(email, "Welcome ...") ─► true│
//! │                                                                         │
//! │  login("ana@shop.io")                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  codes.generate_code() = 482913                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  mailer.send_email("ana@shop.io", "482913")                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info};

use crate::ports::{Mailer, SecurityCodes};

/// Message sent to new accounts unless configured otherwise.
pub const DEFAULT_WELCOME_MESSAGE: &str = "Welcome aboard!";

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

/// Basic `local@domain.tld` shape check.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_some_and(|regex| regex.is_match(email))
}

/// Registers `email` and sends the default welcome e-mail.
///
/// Returns false, without sending anything, when the address is malformed.
pub fn sign_up(mailer: &dyn Mailer, email: &str) -> bool {
    sign_up_with_message(mailer, email, DEFAULT_WELCOME_MESSAGE)
}

/// [`sign_up`] with a custom welcome message.
pub fn sign_up_with_message(mailer: &dyn Mailer, email: &str, welcome_message: &str) -> bool {
    if !is_valid_email(email) {
        debug!(email = %email, "Rejected sign up: malformed e-mail");
        return false;
    }

    mailer.send_email(email, welcome_message);
    info!(email = %email, "Welcome e-mail sent");
    true
}

/// Sends a freshly generated one-time code to `email`.
pub fn login(codes: &dyn SecurityCodes, mailer: &dyn Mailer, email: &str) {
    let code = codes.generate_code();
    mailer.send_email(email, &code.to_string());
    info!(email = %email, "Login code sent");
}
