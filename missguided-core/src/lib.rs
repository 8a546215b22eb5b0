//! Miss Guided Map Core
//!
//! Platform-agnostic logic for the Miss Guided Map novelty page: a fixed
//! catalog of deliberately wrong destinations, the resolver that maps typed
//! place names onto it, and the per-session bookkeeping (current result,
//! bounded history, running counter) the page displays.
//! This crate has no UI or platform-specific dependencies.

pub mod catalog;
pub mod clock;
pub mod constants;
pub mod history;
pub mod query;
pub mod resolver;
pub mod session;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogEntry, CatalogError, Coordinates, MisdirectionEntry};
pub use clock::{Clock, FixedClock, SystemClock, format_timestamp};
pub use constants::{
    ACCURACY_RATE_PERCENT, COORDINATE_PRECISION, HISTORY_LIMIT, POPULAR_LIMIT, SEARCH_DELAY_MS,
    SHORTCUT_DELAY_MS,
};
pub use history::{History, HistoryRecord};
pub use query::{SearchQuery, is_blank, normalize_query};
pub use resolver::{MisdirectionResult, Resolution, resolve};
pub use session::{PendingSearch, SearchError, Session};
