//! Browser-backed time and entropy for the page session.

use chrono::NaiveTime;
use missguided_core::Clock;

/// Local time of day from the browser's `Date`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    #[cfg(target_arch = "wasm32")]
    fn now(&self) -> NaiveTime {
        let date = js_sys::Date::new_0();
        NaiveTime::from_hms_opt(date.get_hours(), date.get_minutes(), date.get_seconds())
            .unwrap_or(NaiveTime::MIN)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn now(&self) -> NaiveTime {
        missguided_core::SystemClock.now()
    }
}

/// Seed for the session RNG. Not reproducible; the page has no seeding contract.
#[cfg(target_arch = "wasm32")]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn entropy_seed() -> u64 {
    let high = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    let low = js_sys::Date::now() as u64;
    (high << 32) ^ low
}

/// Seed for the session RNG. Not reproducible; the page has no seeding contract.
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn entropy_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
