//! Tests for the collection helpers.

#![cfg(feature = "collections")]

use railway::collections::{ChooseExt, LookupExt, SequenceExt};
use railway::control::{Maybe, Outcome};
use rstest::rstest;
use std::collections::{BTreeMap, HashMap};

// =============================================================================
// Lookup
// =============================================================================

#[rstest]
fn try_find_on_hash_map() {
    let users = HashMap::from([(1_u32, "ada"), (2, "grace")]);
    assert_eq!(users.try_find(&1), Maybe::just(&"ada"));
    assert_eq!(users.try_find(&3), Maybe::nothing());
}

#[rstest]
fn try_find_on_btree_map_with_borrowed_key() {
    let mut limits = BTreeMap::new();
    limits.insert("cpu".to_string(), 4);
    limits.insert("memory".to_string(), 16);
    assert_eq!(limits.try_find("memory"), Maybe::just(&16));
    assert_eq!(limits.try_find("disk"), Maybe::nothing());
}

#[rstest]
fn try_find_chains_into_outcome() {
    let ports = HashMap::from([("http", 80_u16)]);
    let resolved = ports
        .try_find("https")
        .to_outcome("unknown scheme")
        .map(|port| *port + 1);
    assert_eq!(resolved, Outcome::failure("unknown scheme"));
}

// =============================================================================
// Sequence
// =============================================================================

#[rstest]
#[case(vec![], Maybe::nothing(), Maybe::nothing())]
#[case(vec![7], Maybe::just(7), Maybe::just(7))]
#[case(vec![1, 2, 3], Maybe::just(1), Maybe::just(3))]
fn try_first_and_last(#[case] items: Vec<i32>, #[case] first: Maybe<i32>, #[case] last: Maybe<i32>) {
    assert_eq!(items.clone().try_first(), first);
    assert_eq!(items.try_last(), last);
}

#[rstest]
fn try_first_by_and_last_by() {
    let words = ["apple", "banana", "avocado", "cherry"];
    assert_eq!(words.iter().try_first_by(|w| w.starts_with('a')), Maybe::just(&"apple"));
    assert_eq!(words.iter().try_last_by(|w| w.starts_with('a')), Maybe::just(&"avocado"));
    assert_eq!(words.iter().try_first_by(|w| w.starts_with('z')), Maybe::nothing());
}

// =============================================================================
// Choose
// =============================================================================

#[rstest]
fn choose_keeps_only_present_values_in_order() {
    let maybes = vec![Maybe::nothing(), Maybe::just("a"), Maybe::nothing(), Maybe::just("b")];
    let chosen: Vec<&str> = maybes.into_iter().choose().collect();
    assert_eq!(chosen, vec!["a", "b"]);
}

#[rstest]
fn choose_on_all_nothing_is_empty() {
    let maybes: Vec<Maybe<i32>> = vec![Maybe::nothing(); 3];
    assert_eq!(maybes.into_iter().choose().count(), 0);
}

#[rstest]
fn choose_map_applies_selector_to_present_values_only() {
    let mut calls = 0;
    let maybes = vec![Maybe::just(2), Maybe::nothing(), Maybe::just(5)];
    let lengths: Vec<String> = maybes
        .into_iter()
        .choose_map(|n| {
            calls += 1;
            "x".repeat(n)
        })
        .collect();
    assert_eq!(lengths, vec!["xx".to_string(), "xxxxx".to_string()]);
    assert_eq!(calls, 2);
}
