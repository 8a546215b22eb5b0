use serde::{Deserialize, Serialize};
use std::fmt;

/// Trim surrounding whitespace and lower-case, yielding the catalog lookup key.
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether `raw` carries anything worth searching for.
#[must_use]
pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

/// User input that is known to be non-blank. Keeps the raw text for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    raw: String,
}

impl SearchQuery {
    /// Accept `raw` unless it is empty or whitespace-only.
    #[must_use]
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        (!is_blank(&raw)).then_some(Self { raw })
    }

    /// The text exactly as typed.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn key(&self) -> String {
        normalize_query(&self.raw)
    }

    #[must_use]
    pub fn into_raw(self) -> String {
        self.raw
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_trims_and_lowercases() {
        assert_eq!(normalize_query("  New York \t"), "new york");
        assert_eq!(normalize_query("MEXICO CITY"), "mexico city");
        // inner whitespace is significant
        assert_eq!(normalize_query("new  york"), "new  york");
    }

    #[test]
    fn parse_rejects_blank_and_keeps_raw_text() {
        assert!(SearchQuery::parse("").is_none());
        assert!(SearchQuery::parse(" \n\t ").is_none());

        let query = SearchQuery::parse(" Paris ").unwrap();
        assert_eq!(query.raw(), " Paris ");
        assert_eq!(query.key(), "paris");
        assert_eq!(query.to_string(), " Paris ");
    }
}
