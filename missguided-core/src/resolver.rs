//! Maps free text to a confidently wrong destination.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Coordinates, MisdirectionEntry};
use crate::query::normalize_query;

/// How the shown location was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// The normalized query is a catalog key.
    Mapped,
    /// Unknown query; a catalog entry was drawn uniformly at random.
    Random,
}

/// One completed search, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MisdirectionResult {
    pub searched_text: String,
    pub actual_label: String,
    pub coordinates: Coordinates,
    pub country_emoji: String,
    pub distance_label: String,
    pub resolution: Resolution,
}

impl MisdirectionResult {
    fn from_entry(searched_text: &str, entry: &MisdirectionEntry, resolution: Resolution) -> Self {
        Self {
            searched_text: searched_text.to_string(),
            actual_label: entry.actual_label.to_string(),
            coordinates: entry.coordinates,
            country_emoji: entry.country_emoji.to_string(),
            distance_label: entry.distance_label.to_string(),
            resolution,
        }
    }

    /// True when the four displayed fields come from `entry`.
    #[must_use]
    pub fn shows(&self, entry: &MisdirectionEntry) -> bool {
        self.actual_label == entry.actual_label
            && self.coordinates == entry.coordinates
            && self.country_emoji == entry.country_emoji
            && self.distance_label == entry.distance_label
    }
}

/// Resolve `query` against `catalog`.
///
/// A query whose trimmed, lower-cased form is a catalog key always yields that
/// key's entry. Anything else yields a uniformly random entry drawn from `rng`.
/// `searched_text` keeps `query` exactly as given. Blank input is the caller's
/// responsibility to reject; here it simply takes the random branch.
pub fn resolve<R: Rng + ?Sized>(
    catalog: &Catalog,
    query: &str,
    rng: &mut R,
) -> MisdirectionResult {
    let key = normalize_query(query);
    if let Some(entry) = catalog.get(&key) {
        log::debug!("resolved {key:?} to mapped entry {:?}", entry.actual_label);
        return MisdirectionResult::from_entry(query, entry, Resolution::Mapped);
    }
    let entry = catalog.entry_at(rng.gen_range(0..catalog.len()));
    log::debug!(
        "no mapping for {key:?}; fell back to random entry {:?}",
        entry.actual_label
    );
    MisdirectionResult::from_entry(query, entry, Resolution::Random)
}
