//! The implicit surface: declaration-site records collected at startup.

#![cfg(all(feature = "builtin", feature = "inventory"))]

mod common;

use common::Reverse;
use filtra::{FilterDef, FilterRegistry};

// Submitted like any other record, but abstract: collection must never bind
// it, so the shipped set below stays exactly three names.
filtra::inventory::submit! {
    FilterDef::base::<Reverse>()
}

#[test]
fn collection_yields_the_shipped_set_in_sorted_order() {
    let registry = FilterRegistry::with_submitted().unwrap();
    assert_eq!(registry.discover(), vec!["crop", "emoji", "resize"]);
}

#[test]
fn abstract_records_are_never_bound() {
    let registry = FilterRegistry::with_submitted().unwrap();
    assert!(!registry.contains("Reverse"));
}

#[test]
fn collection_is_idempotent() {
    let mut registry = FilterRegistry::with_submitted().unwrap();
    let added = registry.register_submitted().unwrap();
    assert_eq!(added, 0);
    assert_eq!(registry.len(), 3);
}

#[test]
fn collected_filters_are_usable() {
    let registry = FilterRegistry::with_submitted().unwrap();
    let out = registry
        .instantiate("emoji")
        .unwrap()
        .apply(&serde_json::json!("img.jpg"), &filtra::Opts::new())
        .unwrap();
    assert_eq!(out, serde_json::json!("✨img.jpg✨"));
}
