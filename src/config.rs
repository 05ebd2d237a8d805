use crate::booking::BookingSink;
use crate::i18n::Language;

/// localStorage key holding the selected language code.
pub const LANGUAGE_STORAGE_KEY: &str = "language";

/// Language used when a key is missing in the active one.
pub const FALLBACK_LANGUAGE: Language = Language::En;

/// How long the simulated booking service takes to answer.
#[cfg_attr(not(debug_assertions), allow(dead_code))]
pub const SIMULATED_SUBMIT_DELAY_MS: u32 = 1_500;

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

#[cfg(debug_assertions)]
pub fn booking_sink() -> BookingSink {
    BookingSink::Simulated { delay_ms: SIMULATED_SUBMIT_DELAY_MS }
}

#[cfg(not(debug_assertions))]
pub fn booking_sink() -> BookingSink {
    BookingSink::Http { endpoint: format!("{}/api/bookings", get_backend_url()) }
}

pub fn notify_endpoint() -> String {
    format!("{}/api/notify", get_backend_url())
}
