//! Built-in table of deliberately wrong destinations.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

use crate::constants::{COORDINATE_PRECISION, POPULAR_LIMIT};
use crate::query::normalize_query;

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Build a validated pair; `None` when either value is non-finite or out of range.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let coords = Self {
            latitude,
            longitude,
        };
        coords.is_valid().then_some(coords)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Render as `"lat, lon"` with four decimals, e.g. `"48.8566, 2.3522"`.
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{lat:.prec$}, {lon:.prec$}",
            lat = self.latitude,
            lon = self.longitude,
            prec = COORDINATE_PRECISION
        )
    }
}

/// Where the page claims a search landed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MisdirectionEntry {
    pub actual_label: &'static str,
    pub coordinates: Coordinates,
    pub country_emoji: &'static str,
    pub distance_label: &'static str,
}

/// A normalized search key and the entry it misdirects to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub key: &'static str,
    pub entry: MisdirectionEntry,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog has no entries")]
    Empty,
    #[error("duplicate catalog key: {0}")]
    DuplicateKey(&'static str),
    #[error("catalog key is not trimmed lower-case: {0:?}")]
    KeyNotNormalized(&'static str),
    #[error("catalog entry {key:?} is missing its {field}")]
    MissingField {
        key: &'static str,
        field: &'static str,
    },
    #[error("catalog entry {0:?} has coordinates out of range")]
    CoordinatesOutOfRange(&'static str),
    #[error("catalog entry {0:?} points back at the searched place")]
    SelfMapping(&'static str),
}

/// Immutable, ordered lookup table. Non-empty by construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: &'static [CatalogEntry],
    index: HashMap<&'static str, usize>,
}

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog::indexed(BUILTIN_ENTRIES));

impl Catalog {
    /// Validate and index a static table.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found in `entries`.
    pub fn new(entries: &'static [CatalogEntry]) -> Result<Self, CatalogError> {
        validate_entries(entries)?;
        Ok(Self::indexed(entries))
    }

    /// The table compiled into the program.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    fn indexed(entries: &'static [CatalogEntry]) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.key, i))
            .collect();
        Self { entries, index }
    }

    /// Re-run the table invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        validate_entries(self.entries)
    }

    /// Exact lookup on an already-normalized key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'static MisdirectionEntry> {
        let entries = self.entries;
        self.index.get(key).map(|&i| &entries[i].entry)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Entries in authored order.
    #[must_use]
    pub const fn entries(&self) -> &'static [CatalogEntry] {
        self.entries
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.key)
    }

    /// Keys offered as shortcut buttons: the first [`POPULAR_LIMIT`] in authored order.
    pub fn popular_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.keys().take(POPULAR_LIMIT)
    }

    /// Entry at `index`, wrapping so any value lands inside the table.
    #[must_use]
    pub fn entry_at(&self, index: usize) -> &'static MisdirectionEntry {
        let entries = self.entries;
        &entries[index % entries.len()].entry
    }
}

fn validate_entries(entries: &'static [CatalogEntry]) -> Result<(), CatalogError> {
    if entries.is_empty() {
        return Err(CatalogError::Empty);
    }
    let mut seen = HashSet::with_capacity(entries.len());
    for CatalogEntry { key, entry } in entries {
        let key = *key;
        if key.is_empty() || normalize_query(key) != key {
            return Err(CatalogError::KeyNotNormalized(key));
        }
        if !seen.insert(key) {
            return Err(CatalogError::DuplicateKey(key));
        }
        for (field, value) in [
            ("actual label", entry.actual_label),
            ("country emoji", entry.country_emoji),
            ("distance label", entry.distance_label),
        ] {
            if value.trim().is_empty() {
                return Err(CatalogError::MissingField { key, field });
            }
        }
        if !entry.coordinates.is_valid() {
            return Err(CatalogError::CoordinatesOutOfRange(key));
        }
        if normalize_query(entry.actual_label).starts_with(key) {
            return Err(CatalogError::SelfMapping(key));
        }
    }
    Ok(())
}

const fn misdirect(
    key: &'static str,
    actual_label: &'static str,
    latitude: f64,
    longitude: f64,
    country_emoji: &'static str,
    distance_label: &'static str,
) -> CatalogEntry {
    CatalogEntry {
        key,
        entry: MisdirectionEntry {
            actual_label,
            coordinates: Coordinates {
                latitude,
                longitude,
            },
            country_emoji,
            distance_label,
        },
    }
}

pub const BUILTIN_ENTRIES: &[CatalogEntry] = &[
    misdirect("new york", "Tokyo, Japan", 35.6762, 139.6503, "🇯🇵", "6,740 miles off"),
    misdirect("tokyo", "Paris, France", 48.8566, 2.3522, "🇫🇷", "6,034 miles off"),
    misdirect("paris", "Sydney, Australia", -33.8688, 151.2093, "🇦🇺", "10,544 miles off"),
    misdirect("london", "Rio de Janeiro, Brazil", -22.9068, -43.1729, "🇧🇷", "5,745 miles off"),
    misdirect("sydney", "Moscow, Russia", 55.7558, 37.6176, "🇷🇺", "8,834 miles off"),
    misdirect("moscow", "Cairo, Egypt", 30.0444, 31.2357, "🇪🇬", "1,803 miles off"),
    misdirect("cairo", "New York, USA", 40.7128, -74.0060, "🇺🇸", "5,602 miles off"),
    misdirect("los angeles", "Mumbai, India", 19.0760, 72.8777, "🇮🇳", "8,670 miles off"),
    misdirect("mumbai", "Berlin, Germany", 52.5200, 13.4050, "🇩🇪", "4,043 miles off"),
    misdirect("berlin", "Bangkok, Thailand", 13.7563, 100.5018, "🇹🇭", "5,352 miles off"),
    misdirect("bangkok", "Mexico City, Mexico", 19.4326, -99.1332, "🇲🇽", "10,555 miles off"),
    misdirect("mexico city", "Seoul, South Korea", 37.5665, 126.9780, "🇰🇷", "6,847 miles off"),
    misdirect("seoul", "Istanbul, Turkey", 41.0082, 28.9784, "🇹🇷", "4,349 miles off"),
    misdirect("istanbul", "Buenos Aires, Argentina", -34.6118, -58.3960, "🇦🇷", "7,808 miles off"),
    misdirect("buenos aires", "Lagos, Nigeria", 6.5244, 3.3792, "🇳🇬", "3,935 miles off"),
    misdirect("lagos", "Vancouver, Canada", 49.2827, -123.1207, "🇨🇦", "7,801 miles off"),
    misdirect("vancouver", "Dubai, UAE", 25.2048, 55.2708, "🇦🇪", "7,422 miles off"),
    misdirect("dubai", "Stockholm, Sweden", 59.3293, 18.0686, "🇸🇪", "3,004 miles off"),
    misdirect("stockholm", "Singapore", 1.3521, 103.8198, "🇸🇬", "6,760 miles off"),
    misdirect("singapore", "London, UK", 51.5074, -0.1278, "🇬🇧", "6,756 miles off"),
];
