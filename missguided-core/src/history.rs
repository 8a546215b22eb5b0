use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::clock::{format_timestamp, truncate_to_second};
use crate::constants::HISTORY_LIMIT;
use crate::resolver::MisdirectionResult;

/// Summary of a past search, as shown in the "recent misdirections" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub searched_text: String,
    pub actual_label: String,
    pub distance_label: String,
    pub timestamp: NaiveTime,
}

impl HistoryRecord {
    #[must_use]
    pub fn from_result(result: &MisdirectionResult, at: NaiveTime) -> Self {
        Self {
            searched_text: result.searched_text.clone(),
            actual_label: result.actual_label.clone(),
            distance_label: result.distance_label.clone(),
            timestamp: truncate_to_second(at),
        }
    }

    #[must_use]
    pub fn timestamp_label(&self) -> String {
        format_timestamp(self.timestamp)
    }
}

/// Most-recent-first list capped at [`HISTORY_LIMIT`] records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    records: SmallVec<[HistoryRecord; HISTORY_LIMIT]>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `record` at the front, discarding the oldest beyond the cap.
    pub fn push_front(&mut self, record: HistoryRecord) {
        self.records.truncate(HISTORY_LIMIT - 1);
        self.records.insert(0, record);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&HistoryRecord> {
        self.records.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[HistoryRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryRecord;
    type IntoIter = std::slice::Iter<'a, HistoryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
