//! Shared fixtures for integration tests.

#![allow(dead_code)]

use filtra::{Filter, FilterError, Opts, Registrable, Value};

/// Reverses string subjects. No declared alias, so it registers under its
/// bare type identifier by default.
#[derive(Debug, Default, Clone, Copy)]
pub struct Reverse;

impl Filter for Reverse {
    fn apply(&self, subject: &Value, _opts: &Opts) -> Result<Value, FilterError> {
        let s = string_subject(subject)?;
        Ok(Value::String(s.chars().rev().collect()))
    }
}

impl Registrable for Reverse {}

/// Uppercases string subjects. Declares the alias "shout".
#[derive(Debug, Default, Clone, Copy)]
pub struct Shout;

impl Filter for Shout {
    fn apply(&self, subject: &Value, _opts: &Opts) -> Result<Value, FilterError> {
        let s = string_subject(subject)?;
        Ok(Value::String(s.to_uppercase()))
    }
}

impl Registrable for Shout {
    const ALIAS: Option<&'static str> = Some("shout");
}

pub fn string_subject(subject: &Value) -> Result<&str, FilterError> {
    subject
        .as_str()
        .ok_or_else(|| FilterError::subject("expected a string subject"))
}

pub fn subject(s: &str) -> Value {
    Value::String(s.to_string())
}
