//! Per-visitor bookkeeping around the resolver: the current result, a short
//! history, the running search counter, and the one-search-at-a-time guard.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::clock::{Clock, SystemClock};
use crate::constants::ACCURACY_RATE_PERCENT;
use crate::history::{History, HistoryRecord};
use crate::query::SearchQuery;
use crate::resolver::{MisdirectionResult, resolve};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("search text is blank")]
    BlankQuery,
    #[error("a search is already in progress")]
    AlreadySearching,
    #[error("no matching search is in progress")]
    NoSearchPending,
}

/// Ticket for a search that has begun but not yet resolved.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingSearch {
    ticket: u64,
    query: SearchQuery,
}

impl PendingSearch {
    #[must_use]
    pub const fn query(&self) -> &SearchQuery {
        &self.query
    }
}

/// State owned by one interactive session. Nothing here is shared.
#[derive(Debug, Clone)]
pub struct Session<C: Clock> {
    catalog: &'static Catalog,
    rng: ChaCha8Rng,
    clock: C,
    current: Option<MisdirectionResult>,
    history: History,
    total_searches: u64,
    pending: Option<u64>,
    next_ticket: u64,
}

impl Session<SystemClock> {
    /// Fresh session over the built-in catalog, stamped with local system time.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_clock(seed, SystemClock)
    }
}

impl<C: Clock> Session<C> {
    #[must_use]
    pub fn with_clock(seed: u64, clock: C) -> Self {
        Self::with_catalog(Catalog::builtin(), seed, clock)
    }

    #[must_use]
    pub fn with_catalog(catalog: &'static Catalog, seed: u64, clock: C) -> Self {
        Self {
            catalog,
            rng: ChaCha8Rng::seed_from_u64(seed),
            clock,
            current: None,
            history: History::new(),
            total_searches: 0,
            pending: None,
            next_ticket: 0,
        }
    }

    /// Resolve `query` and record it in one step.
    ///
    /// # Errors
    ///
    /// [`SearchError::BlankQuery`] for empty or whitespace-only input and
    /// [`SearchError::AlreadySearching`] while a two-phase search is pending.
    /// Neither changes any state.
    pub fn record_search(&mut self, query: &str) -> Result<&MisdirectionResult, SearchError> {
        let pending = self.begin_search(query)?;
        self.complete_search(pending)
    }

    /// Start a search whose result will be revealed later.
    ///
    /// # Errors
    ///
    /// [`SearchError::BlankQuery`] for blank input, [`SearchError::AlreadySearching`]
    /// when another search has not completed yet.
    pub fn begin_search(&mut self, query: &str) -> Result<PendingSearch, SearchError> {
        if self.pending.is_some() {
            log::warn!("rejected search {query:?}: another search is in flight");
            return Err(SearchError::AlreadySearching);
        }
        let query = SearchQuery::parse(query).ok_or(SearchError::BlankQuery)?;
        let ticket = self.next_ticket;
        self.next_ticket = self.next_ticket.wrapping_add(1);
        self.pending = Some(ticket);
        Ok(PendingSearch { ticket, query })
    }

    /// Resolve a pending search and update the current result, history and counter.
    ///
    /// # Errors
    ///
    /// [`SearchError::NoSearchPending`] when `pending` is not the ticket this
    /// session is waiting on; state is left untouched.
    pub fn complete_search(
        &mut self,
        pending: PendingSearch,
    ) -> Result<&MisdirectionResult, SearchError> {
        if self.pending != Some(pending.ticket) {
            log::warn!(
                "ignored stale completion for {:?}",
                pending.query.raw()
            );
            return Err(SearchError::NoSearchPending);
        }
        self.pending = None;

        let result = resolve(self.catalog, pending.query.raw(), &mut self.rng);
        self.history
            .push_front(HistoryRecord::from_result(&result, self.clock.now()));
        self.total_searches += 1;
        log::info!(
            "search #{} {:?} -> {} ({:?})",
            self.total_searches,
            result.searched_text,
            result.actual_label,
            result.resolution
        );
        Ok(self.current.insert(result))
    }

    #[must_use]
    pub const fn is_searching(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub const fn current(&self) -> Option<&MisdirectionResult> {
        self.current.as_ref()
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub const fn total_searches(&self) -> u64 {
        self.total_searches
    }

    #[must_use]
    pub const fn accuracy_rate_percent(&self) -> u8 {
        ACCURACY_RATE_PERCENT
    }

    #[must_use]
    pub const fn catalog(&self) -> &'static Catalog {
        self.catalog
    }
}

impl<C: Clock + PartialEq> PartialEq for Session<C> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.catalog, other.catalog)
            && self.rng == other.rng
            && self.clock == other.clock
            && self.current == other.current
            && self.history == other.history
            && self.total_searches == other.total_searches
            && self.pending == other.pending
            && self.next_ticket == other.next_ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::resolver::Resolution;
    use chrono::NaiveTime;

    fn session() -> Session<FixedClock> {
        let noon = NaiveTime::from_hms_opt(12, 34, 56).unwrap();
        Session::with_clock(42, FixedClock(noon))
    }

    #[test]
    fn paris_search_matches_scenario() {
        let mut s = session();
        let result = s.record_search("Paris").unwrap().clone();
        assert_eq!(result.searched_text, "Paris");
        assert_eq!(result.actual_label, "Sydney, Australia");
        assert_eq!(result.coordinates.latitude, -33.8688);
        assert_eq!(result.coordinates.longitude, 151.2093);
        assert_eq!(result.country_emoji, "🇦🇺");
        assert_eq!(result.distance_label, "10,544 miles off");
        assert_eq!(result.resolution, Resolution::Mapped);

        assert_eq!(s.total_searches(), 1);
        assert_eq!(s.history().len(), 1);
        let record = s.history().latest().unwrap();
        assert_eq!(record.searched_text, "Paris");
        assert_eq!(record.actual_label, "Sydney, Australia");
        assert_eq!(record.distance_label, "10,544 miles off");
        assert_eq!(record.timestamp_label(), "12:34:56 PM");
    }

    #[test]
    fn blank_queries_change_nothing() {
        let mut s = session();
        s.record_search("tokyo").unwrap();
        let before = s.clone();
        for blank in ["", "   ", "\t\n"] {
            assert_eq!(s.record_search(blank), Err(SearchError::BlankQuery));
        }
        assert!(s == before);
    }

    #[test]
    fn second_search_is_rejected_while_pending() {
        let mut s = session();
        let pending = s.begin_search("London").unwrap();
        assert!(s.is_searching());
        assert_eq!(
            s.begin_search("Berlin").unwrap_err(),
            SearchError::AlreadySearching
        );
        assert_eq!(
            s.record_search("Berlin").unwrap_err(),
            SearchError::AlreadySearching
        );
        assert_eq!(s.total_searches(), 0);
        assert!(s.current().is_none());

        let shown = s.complete_search(pending).unwrap();
        assert_eq!(shown.actual_label, "Rio de Janeiro, Brazil");
        assert!(!s.is_searching());
        assert_eq!(s.total_searches(), 1);
    }

    #[test]
    fn stale_ticket_is_rejected() {
        let mut s = session();
        let mut other = session();
        let foreign = other.begin_search("Seoul").unwrap();
        // same ticket number, but this session has nothing pending
        assert_eq!(
            s.complete_search(foreign).unwrap_err(),
            SearchError::NoSearchPending
        );

        let first = s.begin_search("Seoul").unwrap();
        s.complete_search(first).unwrap();
        let replay = PendingSearch {
            ticket: 0,
            query: SearchQuery::parse("Seoul").unwrap(),
        };
        let _second = s.begin_search("Dubai").unwrap();
        assert_eq!(
            s.complete_search(replay).unwrap_err(),
            SearchError::NoSearchPending
        );
        assert_eq!(s.total_searches(), 1);
        assert!(s.is_searching());
    }

    #[test]
    fn accuracy_rate_is_always_zero() {
        let mut s = session();
        s.record_search("anywhere").unwrap();
        assert_eq!(s.accuracy_rate_percent(), 0);
    }
}
