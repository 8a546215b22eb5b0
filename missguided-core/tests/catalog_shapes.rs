use missguided_core::{Catalog, normalize_query};
use std::collections::HashSet;

#[test]
fn builtin_keys_are_unique_and_normalized() {
    let catalog = Catalog::builtin();
    let keys: Vec<_> = catalog.keys().collect();
    let unique: HashSet<_> = keys.iter().copied().collect();
    assert_eq!(keys.len(), unique.len());
    for key in keys {
        assert_eq!(normalize_query(key), key);
    }
}

#[test]
fn builtin_entries_are_complete_and_on_the_globe() {
    for item in Catalog::builtin().entries() {
        let entry = &item.entry;
        assert!(!entry.actual_label.is_empty(), "{}", item.key);
        assert!(!entry.country_emoji.is_empty(), "{}", item.key);
        assert!(entry.distance_label.ends_with("miles off"), "{}", item.key);
        assert!(entry.coordinates.is_valid(), "{}", item.key);
    }
}

#[test]
fn no_key_points_home() {
    for item in Catalog::builtin().entries() {
        assert!(
            !normalize_query(item.entry.actual_label).starts_with(item.key),
            "{} maps to itself",
            item.key
        );
    }
}
