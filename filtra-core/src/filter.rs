//! # Behavioral Kernel (Filter)
//!
//! The single operation every pluggable type must provide.
//!
//! Filters receive an opaque subject and a string-keyed option map, and
//! return a transformed value. The framework never interprets the subject;
//! what a `Value` means is a contract between the filter and its caller.

use crate::error::FilterError;
use serde_json::{Map, Value};

/// Options passed to a filter application: a string-keyed JSON map.
pub type Opts = Map<String, Value>;

/// A boxed, type-erased filter as stored and instantiated by registries.
pub type BoxFilter = Box<dyn Filter>;

/// The behavioral contract for pluggable types.
///
/// A filter is stateless from the framework's perspective: construction is
/// separate (see [`Registrable`]), and `apply` may be called any number of
/// times. Implementations must be `Send + Sync` so instances can be shared
/// across threads by callers that choose to do so.
///
/// # Example
///
/// ```rust,ignore
/// struct Shout;
///
/// impl Filter for Shout {
///     fn apply(&self, subject: &Value, _opts: &Opts) -> Result<Value, FilterError> {
///         let s = subject.as_str().ok_or_else(|| FilterError::subject("expected string"))?;
///         Ok(Value::String(s.to_uppercase()))
///     }
/// }
/// ```
///
/// [`Registrable`]: crate::Registrable
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Filter`",
    label = "missing `Filter` implementation",
    note = "Filters must provide `apply(&self, subject, opts)`."
)]
pub trait Filter: Send + Sync {
    /// Apply this filter to a subject under the given options.
    fn apply(&self, subject: &Value, opts: &Opts) -> Result<Value, FilterError>;
}

// Allow Box<dyn Filter> to be used where Filter is expected.
impl Filter for Box<dyn Filter> {
    fn apply(&self, subject: &Value, opts: &Opts) -> Result<Value, FilterError> {
        (**self).apply(subject, opts)
    }
}
