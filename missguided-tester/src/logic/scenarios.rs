//! Property checks run against fresh sessions for each seed and iteration.

use chrono::NaiveTime;
use missguided_core::{
    Catalog, FixedClock, HISTORY_LIMIT, Resolution, SearchError, Session, normalize_query,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;
use std::sync::OnceLock;

pub type ScenarioCheck = fn(u64) -> Result<(), String>;

pub struct TestScenario {
    pub name: &'static str,
    pub description: &'static str,
    pub check: ScenarioCheck,
}

const SCENARIOS: &[TestScenario] = &[
    TestScenario {
        name: "smoke",
        description: "Searching \"Paris\" lands in Sydney and is counted once",
        check: smoke,
    },
    TestScenario {
        name: "catalog-integrity",
        description: "Built-in catalog is valid and distance labels are well formed",
        check: catalog_integrity,
    },
    TestScenario {
        name: "mapped-lookup",
        description: "Every catalog key resolves to its entry under any case or padding",
        check: mapped_lookup,
    },
    TestScenario {
        name: "normalization",
        description: "\" New York \", \"new york\" and \"NEW YORK\" all show Tokyo",
        check: normalization,
    },
    TestScenario {
        name: "random-fallback",
        description: "Unknown places land on some catalog entry and keep the typed text",
        check: random_fallback,
    },
    TestScenario {
        name: "history-bound",
        description: "History keeps only the five most recent searches, newest first",
        check: history_bound,
    },
    TestScenario {
        name: "counter-monotonic",
        description: "Counter grows by exactly one per completed search",
        check: counter_monotonic,
    },
    TestScenario {
        name: "blank-rejection",
        description: "Blank input leaves the session untouched",
        check: blank_rejection,
    },
    TestScenario {
        name: "in-flight-guard",
        description: "Only one search may be pending; stale completions are ignored",
        check: in_flight_guard,
    },
];

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.iter().map(|s| (s.name, s.description)).collect()
}

#[must_use]
pub fn get_scenario(name: &str) -> Option<&'static TestScenario> {
    SCENARIOS.iter().find(|s| s.name == name)
}

#[must_use]
pub fn all_scenario_names() -> Vec<String> {
    SCENARIOS.iter().map(|s| s.name.to_string()).collect()
}

fn session(seed: u64) -> Session<FixedClock> {
    let second = u32::try_from(seed % 60).unwrap_or(0);
    let time = NaiveTime::from_hms_opt(10, 0, second).unwrap_or(NaiveTime::MIN);
    Session::with_clock(seed, FixedClock(time))
}

fn ensure(condition: bool, message: impl FnOnce() -> String) -> Result<(), String> {
    if condition { Ok(()) } else { Err(message()) }
}

fn search(session: &mut Session<FixedClock>, query: &str) -> Result<(), String> {
    session
        .record_search(query)
        .map(|_| ())
        .map_err(|e| format!("search {query:?} failed: {e}"))
}

/// Scramble letter case and pad with whitespace.
fn disguise(key: &str, rng: &mut StdRng) -> String {
    let body: String = key
        .chars()
        .map(|c| {
            if rng.gen_bool(0.5) {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect();
    let lead = padding(rng);
    let trail = padding(rng);
    format!("{lead}{body}{trail}")
}

fn padding(rng: &mut StdRng) -> String {
    " \t".repeat(rng.gen_range(0..3))
}

/// A query guaranteed not to be a catalog key.
fn unknown_place(rng: &mut StdRng) -> String {
    const PREFIXES: [&str; 6] = ["Lost", "Hidden", "Nowhere", "Faraway", "Upside", "Mystery"];
    const SUFFIXES: [&str; 5] = ["ville", " Springs", " Harbor", "stan", " Heights"];
    let prefix = PREFIXES[rng.gen_range(0..PREFIXES.len())];
    let suffix = SUFFIXES[rng.gen_range(0..SUFFIXES.len())];
    format!("{prefix}{suffix} {}", rng.gen_range(0..1_000))
}

fn distance_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\d{1,3}(,\d{3})* miles off$").expect("distance pattern compiles")
    })
}

fn smoke(seed: u64) -> Result<(), String> {
    let mut s = session(seed);
    let result = s
        .record_search("Paris")
        .map_err(|e| format!("search failed: {e}"))?
        .clone();
    ensure(result.searched_text == "Paris", || {
        format!("searched text was {:?}", result.searched_text)
    })?;
    ensure(result.actual_label == "Sydney, Australia", || {
        format!("Paris showed {:?}", result.actual_label)
    })?;
    ensure(result.coordinates.display() == "-33.8688, 151.2093", || {
        format!("unexpected coordinates {}", result.coordinates.display())
    })?;
    ensure(result.country_emoji == "🇦🇺", || "wrong flag".to_string())?;
    ensure(result.distance_label == "10,544 miles off", || {
        format!("distance was {:?}", result.distance_label)
    })?;
    ensure(s.total_searches() == 1, || {
        format!("counter is {}", s.total_searches())
    })?;
    ensure(s.history().len() == 1, || {
        format!("history has {} entries", s.history().len())
    })
}

fn catalog_integrity(_seed: u64) -> Result<(), String> {
    let catalog = Catalog::builtin();
    catalog.validate().map_err(|e| e.to_string())?;
    for item in catalog.entries() {
        ensure(distance_pattern().is_match(item.entry.distance_label), || {
            format!(
                "{} has malformed distance {:?}",
                item.key, item.entry.distance_label
            )
        })?;
    }
    Ok(())
}

fn mapped_lookup(seed: u64) -> Result<(), String> {
    let catalog = Catalog::builtin();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut s = session(seed);
    for item in catalog.entries() {
        let query = disguise(item.key, &mut rng);
        let result = s
            .record_search(&query)
            .map_err(|e| format!("search {query:?} failed: {e}"))?;
        ensure(result.resolution == Resolution::Mapped, || {
            format!("{query:?} did not match {}", item.key)
        })?;
        ensure(result.shows(&item.entry), || {
            format!("{query:?} showed {}", result.actual_label)
        })?;
        ensure(result.searched_text == query, || {
            format!("{query:?} was stored as {:?}", result.searched_text)
        })?;
    }
    Ok(())
}

fn normalization(seed: u64) -> Result<(), String> {
    let mut s = session(seed);
    for query in [" New York ", "new york", "NEW YORK"] {
        let result = s
            .record_search(query)
            .map_err(|e| format!("search {query:?} failed: {e}"))?;
        ensure(result.actual_label == "Tokyo, Japan", || {
            format!("{query:?} showed {}", result.actual_label)
        })?;
    }
    Ok(())
}

fn random_fallback(seed: u64) -> Result<(), String> {
    let catalog = Catalog::builtin();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut s = session(seed);
    for _ in 0..10 {
        let query = unknown_place(&mut rng);
        ensure(!catalog.contains(&normalize_query(&query)), || {
            format!("generated query {query:?} is a catalog key")
        })?;
        let result = s
            .record_search(&query)
            .map_err(|e| format!("search {query:?} failed: {e}"))?;
        ensure(result.resolution == Resolution::Random, || {
            format!("{query:?} was treated as mapped")
        })?;
        ensure(result.searched_text == query, || {
            format!("{query:?} was stored as {:?}", result.searched_text)
        })?;
        ensure(catalog.entries().iter().any(|e| result.shows(&e.entry)), || {
            format!("{query:?} showed {} which is not in the catalog", result.actual_label)
        })?;
    }
    Ok(())
}

fn history_bound(seed: u64) -> Result<(), String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut s = session(seed);
    let total = rng.gen_range(HISTORY_LIMIT + 1..=HISTORY_LIMIT * 4);
    let queries: Vec<String> = (0..total).map(|i| format!("stop {i}")).collect();
    for query in &queries {
        search(&mut s, query)?;
    }
    ensure(s.history().len() == HISTORY_LIMIT, || {
        format!("history has {} entries after {total} searches", s.history().len())
    })?;
    let expected = queries.iter().rev().take(HISTORY_LIMIT);
    for (record, query) in s.history().iter().zip(expected) {
        ensure(&record.searched_text == query, || {
            format!("history out of order: {:?} where {query:?} expected", record.searched_text)
        })?;
    }
    Ok(())
}

fn counter_monotonic(seed: u64) -> Result<(), String> {
    let catalog = Catalog::builtin();
    let keys: Vec<_> = catalog.keys().collect();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut s = session(seed);
    let total = rng.gen_range(1..=30_u64);
    for n in 1..=total {
        let query = if rng.gen_bool(0.5) {
            keys[rng.gen_range(0..keys.len())].to_string()
        } else {
            unknown_place(&mut rng)
        };
        search(&mut s, &query)?;
        ensure(s.total_searches() == n, || {
            format!("counter is {} after {n} searches", s.total_searches())
        })?;
    }
    Ok(())
}

fn blank_rejection(seed: u64) -> Result<(), String> {
    let mut s = session(seed);
    search(&mut s, "Bangkok")?;
    let before = s.clone();
    for blank in ["", " ", "\t", "\n  \r"] {
        ensure(s.record_search(blank) == Err(SearchError::BlankQuery), || {
            format!("blank {blank:?} was not rejected")
        })?;
    }
    ensure(s == before, || "blank input changed the session".to_string())
}

fn in_flight_guard(seed: u64) -> Result<(), String> {
    let mut s = session(seed);
    let pending = s
        .begin_search("Istanbul")
        .map_err(|e| format!("begin failed: {e}"))?;
    ensure(s.is_searching(), || "session not marked searching".to_string())?;
    ensure(
        s.begin_search("Lagos").err() == Some(SearchError::AlreadySearching),
        || "overlapping search was accepted".to_string(),
    )?;
    let shown = s
        .complete_search(pending)
        .map_err(|e| format!("complete failed: {e}"))?
        .actual_label
        .clone();
    ensure(shown == "Buenos Aires, Argentina", || {
        format!("Istanbul showed {shown}")
    })?;

    let mut other = session(seed);
    let foreign = other
        .begin_search("Lagos")
        .map_err(|e| format!("begin failed: {e}"))?;
    ensure(
        s.complete_search(foreign).err() == Some(SearchError::NoSearchPending),
        || "stale completion was accepted".to_string(),
    )?;
    ensure(s.total_searches() == 1, || {
        format!("counter is {}", s.total_searches())
    })
}
