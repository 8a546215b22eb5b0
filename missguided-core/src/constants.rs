//! Fixed tuning values shared by the core and its presentation layers.

/// Number of history records a session retains, most recent first.
pub const HISTORY_LIMIT: usize = 5;

/// Number of catalog keys offered as one-click shortcuts.
pub const POPULAR_LIMIT: usize = 15;

/// Simulated "searching" latency before a result is revealed.
pub const SEARCH_DELAY_MS: u32 = 2_000;

/// Pause between a shortcut pre-filling the input and the search firing.
pub const SHORTCUT_DELAY_MS: u32 = 100;

/// Decimal places shown for latitude and longitude.
pub const COORDINATE_PRECISION: usize = 4;

/// The page never points anyone at the right place.
pub const ACCURACY_RATE_PERCENT: u8 = 0;

/// `strftime` pattern for history timestamps (12-hour clock with seconds).
pub const TIMESTAMP_FORMAT: &str = "%-I:%M:%S %p";
