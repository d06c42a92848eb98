//! Integration tests for the `#[filter]` declaration attribute.

#![cfg(feature = "macros")]

use filtra::{Filter, FilterError, FilterRegistry, Opts, Registrable, RegistryError, Value};
use serde_json::json;
use serial_test::serial;

fn string_subject(subject: &Value) -> Result<&str, FilterError> {
    subject
        .as_str()
        .ok_or_else(|| FilterError::subject("expected a string subject"))
}

// Registered under an explicit name.
#[filtra::filter(name = "stamp")]
#[derive(Debug, Default, Clone, Copy)]
struct Stamp;

impl Filter for Stamp {
    fn apply(&self, subject: &Value, _opts: &Opts) -> Result<Value, FilterError> {
        let s = string_subject(subject)?;
        Ok(Value::String(format!("{s}*")))
    }
}

// Carries both an explicit name and an alias; the explicit name must win.
#[filtra::filter(name = "twice", alias = "double")]
#[derive(Debug, Default, Clone, Copy)]
struct Twice;

impl Filter for Twice {
    fn apply(&self, subject: &Value, _opts: &Opts) -> Result<Value, FilterError> {
        let s = string_subject(subject)?;
        Ok(Value::String(format!("{s}{s}")))
    }
}

// No arguments: registered under the bare type identifier.
#[filtra::filter]
#[derive(Debug, Default, Clone, Copy)]
struct Plain;

impl Filter for Plain {
    fn apply(&self, subject: &Value, _opts: &Opts) -> Result<Value, FilterError> {
        Ok(subject.clone())
    }
}

// Alias only: registered under "whisper".
#[filtra::filter(alias = "whisper")]
#[derive(Debug, Default, Clone, Copy)]
struct Quiet;

impl Filter for Quiet {
    fn apply(&self, subject: &Value, _opts: &Opts) -> Result<Value, FilterError> {
        let s = string_subject(subject)?;
        Ok(Value::String(s.to_lowercase()))
    }
}

// An abstract base: submitted but never bound by collection.
#[filtra::filter(base)]
#[derive(Debug, Default, Clone, Copy)]
struct Template;

impl Filter for Template {
    fn apply(&self, subject: &Value, _opts: &Opts) -> Result<Value, FilterError> {
        Ok(subject.clone())
    }
}

#[test]
fn declared_filters_are_collected() {
    let registry = FilterRegistry::with_submitted().unwrap();
    assert!(registry.contains("stamp"));
    assert!(registry.contains("Plain"));
    assert!(registry.contains("whisper"));
}

#[test]
fn explicit_name_wins_over_alias() {
    let registry = FilterRegistry::with_submitted().unwrap();
    assert!(registry.contains("twice"));
    assert!(!registry.contains("double"));
}

#[test]
fn generated_registrable_carries_the_alias() {
    assert_eq!(<Twice as Registrable>::ALIAS, Some("double"));
    assert_eq!(<Stamp as Registrable>::ALIAS, None);
}

#[test]
fn base_declarations_are_never_bound() {
    let registry = FilterRegistry::with_submitted().unwrap();
    assert!(!registry.contains("Template"));
}

#[test]
fn collected_filters_apply() {
    let registry = FilterRegistry::with_submitted().unwrap();
    let out = registry
        .instantiate("twice")
        .unwrap()
        .apply(&json!("ab"), &Opts::new())
        .unwrap();
    assert_eq!(out, json!("abab"));
}

// Explicitly registered, never submitted: only present once a test binds it.
#[derive(Debug, Default, Clone, Copy)]
struct Extra;

impl Filter for Extra {
    fn apply(&self, subject: &Value, _opts: &Opts) -> Result<Value, FilterError> {
        Ok(subject.clone())
    }
}

impl Registrable for Extra {}

#[test]
#[serial]
fn global_registry_is_seeded_from_declarations() {
    assert!(filtra::registry::contains("stamp"));

    let out = filtra::registry::instantiate("stamp")
        .unwrap()
        .apply(&json!("img"), &Opts::new())
        .unwrap();
    assert_eq!(out, json!("img*"));
}

#[test]
#[serial]
fn global_registry_accepts_explicit_registrations() {
    filtra::registry::register_as::<Extra>("extra").unwrap();
    assert!(filtra::registry::discover().contains(&"extra".to_string()));
}

#[test]
#[serial]
fn collisions_are_detected_across_surfaces() {
    // "stamp" arrived via declaration-site collection; an explicit binding
    // of a different type under the same name must fail.
    let err = filtra::registry::register_as::<Extra>("stamp").unwrap_err();
    assert_eq!(err, RegistryError::DuplicateName("stamp".to_string()));

    // And the first binding still applies.
    let out = filtra::registry::instantiate("stamp")
        .unwrap()
        .apply(&json!("x"), &Opts::new())
        .unwrap();
    assert_eq!(out, json!("x*"));
}
