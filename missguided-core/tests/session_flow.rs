use chrono::NaiveTime;
use missguided_core::{
    Catalog, FixedClock, HISTORY_LIMIT, Resolution, SearchError, Session, normalize_query,
};

fn fixed_session(seed: u64) -> Session<FixedClock> {
    Session::with_clock(seed, FixedClock(NaiveTime::from_hms_opt(8, 15, 0).unwrap()))
}

#[test]
fn history_holds_the_five_most_recent_searches() {
    let mut session = fixed_session(11);
    let queries = [
        "Tokyo", "Paris", "London", "Atlantis", "Sydney", "Moscow", "El Dorado", "Cairo",
    ];
    for query in queries {
        session.record_search(query).unwrap();
    }

    let recent: Vec<_> = session
        .history()
        .iter()
        .map(|r| r.searched_text.as_str())
        .collect();
    assert_eq!(recent.len(), HISTORY_LIMIT);
    assert_eq!(recent, ["Cairo", "El Dorado", "Moscow", "Sydney", "Atlantis"]);
}

#[test]
fn counter_grows_by_one_per_search_regardless_of_match() {
    let mut session = fixed_session(3);
    session.record_search("berlin").unwrap();
    let before = session.total_searches();

    let queries = ["Gotham", "seoul", "  LAGOS ", "Springfield", "mumbai", "Shangri-La"];
    let mut random = 0;
    for query in queries {
        if session.record_search(query).unwrap().resolution == Resolution::Random {
            random += 1;
        }
    }
    assert_eq!(random, 3);
    assert_eq!(session.total_searches(), before + queries.len() as u64);
}

#[test]
fn current_result_tracks_latest_search_only() {
    let mut session = fixed_session(8);
    session.record_search("dubai").unwrap();
    session.record_search("Stockholm").unwrap();
    let current = session.current().unwrap();
    assert_eq!(current.searched_text, "Stockholm");
    assert_eq!(current.actual_label, "Singapore");
    assert_eq!(current.coordinates.display(), "1.3521, 103.8198");
}

#[test]
fn every_popular_shortcut_resolves_to_its_own_entry() {
    let catalog = Catalog::builtin();
    let mut session = fixed_session(1);
    for key in catalog.popular_keys() {
        let result = session.record_search(key).unwrap();
        assert_eq!(result.resolution, Resolution::Mapped);
        assert!(result.shows(catalog.get(&normalize_query(key)).unwrap()));
    }
}

#[test]
fn two_phase_search_guards_against_overlap() {
    let mut session = fixed_session(21);
    let pending = session.begin_search("Vancouver").unwrap();
    assert_eq!(pending.query().raw(), "Vancouver");
    assert!(session.is_searching());
    assert_eq!(
        session.begin_search("Dubai").unwrap_err(),
        SearchError::AlreadySearching
    );

    let result = session.complete_search(pending).unwrap();
    assert_eq!(result.actual_label, "Dubai, UAE");
    assert_eq!(session.history().len(), 1);
    assert!(!session.is_searching());

    assert_eq!(
        session.begin_search("   ").unwrap_err(),
        SearchError::BlankQuery
    );
    assert!(!session.is_searching());
}

#[test]
fn same_seed_replays_the_same_random_misdirections() {
    let mut first = fixed_session(77);
    let mut second = fixed_session(77);
    for query in ["nowhere", "somewhere", "anywhere", "elsewhere"] {
        let a = first.record_search(query).unwrap().actual_label.clone();
        let b = second.record_search(query).unwrap().actual_label.clone();
        assert_eq!(a, b);
    }
}

#[test]
fn results_serialize_with_snake_case_fields() {
    let mut session = fixed_session(5);
    let result = session.record_search("Los Angeles").unwrap();
    let json = serde_json::to_value(result).unwrap();
    assert_eq!(json["searched_text"], "Los Angeles");
    assert_eq!(json["actual_label"], "Mumbai, India");
    assert_eq!(json["resolution"], "mapped");
    assert_eq!(json["coordinates"]["latitude"], 19.076);

    let history = serde_json::to_value(session.history()).unwrap();
    assert_eq!(history["records"][0]["timestamp"], "08:15:00");
}
