//! Testing utilities for Filtra.
//!
//! This module provides utilities to make testing registries and filters
//! easier.
//!
//! # Features
//!
//! - [`RecordingFilter`]: a filter that records every subject it receives
//! - [`FailingFilter`]: a filter that always fails
//! - [`opts`]: build an option map from a JSON literal

use filtra_core::{Filter, FilterError, Opts, Value};
use std::sync::{Arc, Mutex};

// ============================================================================
// Recording Filter
// ============================================================================

/// A filter that records every subject it is applied to and passes the
/// subject through unchanged.
///
/// Clones share the same recording, so a clone kept by the test observes
/// applications made through the registry-held instance.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingFilter::new();
/// let probe = recorder.clone();
///
/// recorder.apply(&json!("a"), &Opts::new()).unwrap();
///
/// assert_eq!(probe.count(), 1);
/// assert_eq!(probe.seen(), vec![json!("a")]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct RecordingFilter {
    seen: Arc<Mutex<Vec<Value>>>,
}

impl RecordingFilter {
    /// Create a new recording filter with an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subjects recorded so far, in application order.
    pub fn seen(&self) -> Vec<Value> {
        self.seen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of applications recorded so far.
    pub fn count(&self) -> usize {
        self.seen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

impl Filter for RecordingFilter {
    fn apply(&self, subject: &Value, _opts: &Opts) -> Result<Value, FilterError> {
        self.seen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(subject.clone());
        Ok(subject.clone())
    }
}

// ============================================================================
// Failing Filter
// ============================================================================

/// A filter that fails every application with a fixed reason.
///
/// Useful for verifying error propagation through code that drives filters.
#[derive(Debug, Clone, Copy)]
pub struct FailingFilter {
    reason: &'static str,
}

impl FailingFilter {
    /// Create a failing filter with the given reason.
    pub fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

impl Default for FailingFilter {
    fn default() -> Self {
        Self::new("forced failure")
    }
}

impl Filter for FailingFilter {
    fn apply(&self, _subject: &Value, _opts: &Opts) -> Result<Value, FilterError> {
        Err(FilterError::custom(self.reason))
    }
}

// ============================================================================
// Option map helpers
// ============================================================================

/// Build an option map from a JSON value, typically a `json!({...})`
/// literal. Non-object values yield an empty map.
pub fn opts(value: Value) -> Opts {
    value.as_object().cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn recording_filter_shares_its_recording() {
        let recorder = RecordingFilter::new();
        let probe = recorder.clone();

        recorder.apply(&json!("a"), &Opts::new()).unwrap();
        recorder.apply(&json!("b"), &Opts::new()).unwrap();

        assert_eq!(probe.count(), 2);
        assert_eq!(probe.seen(), vec![json!("a"), json!("b")]);
    }

    #[test]
    fn failing_filter_always_fails() {
        let err = FailingFilter::default()
            .apply(&json!("a"), &Opts::new())
            .unwrap_err();
        assert!(matches!(err, FilterError::Custom(_)));
    }

    #[test]
    fn opts_builds_from_json_literals() {
        let map = opts(json!({"width": 3}));
        assert_eq!(map.get("width"), Some(&json!(3)));
        assert!(opts(json!(null)).is_empty());
    }
}
