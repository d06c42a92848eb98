//! # Option Extraction
//!
//! Provides the extractor pattern for declarative option access, so filter
//! implementations can pull typed, validated values out of an option map
//! without manual boilerplate.
//!
//! # Extractors
//!
//! - [`FromOpt`] - Typed conversion from a raw option value
//! - [`Param`] - A declared option field: name, optional default, optional
//!   coercion hook, optional validation hook
//!
//! Extraction runs convert → coerce → validate, and every failure carries
//! the option name:
//!
//! ```rust,ignore
//! let width = Param::new("width").validate(validate::positive).get(&opts)?;
//! let label = Param::new("label")
//!     .coerce(validate::trim_lower)
//!     .validate(validate::non_empty)
//!     .get(&opts)?;
//! ```

use crate::filter::Opts;
use serde_json::Value;
use thiserror::Error;

/// Error type for option extraction failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The option is absent and the parameter declares no default.
    #[error("missing option: {0}")]
    Missing(&'static str),

    /// The option is present but not of the expected shape.
    #[error("option {name}: expected {expected}")]
    Type {
        /// Name of the offending option.
        name: &'static str,
        /// Human-readable description of the expected shape.
        expected: &'static str,
    },

    /// The option converted cleanly but failed validation.
    #[error("option {name}: {reason}")]
    Invalid {
        /// Name of the offending option.
        name: &'static str,
        /// Why validation rejected the value.
        reason: String,
    },
}

/// Raised by [`FromOpt`] conversions, which do not yet know the option name.
///
/// [`Param::get`] attaches the name and converts this into
/// [`ExtractError::Type`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMismatch {
    /// Human-readable description of the expected shape.
    pub expected: &'static str,
}

/// A trait for converting a raw option value into a typed one.
pub trait FromOpt: Sized {
    /// Attempt to convert the raw value into `Self`.
    fn from_opt(value: &Value) -> Result<Self, TypeMismatch>;
}

impl FromOpt for i64 {
    fn from_opt(value: &Value) -> Result<Self, TypeMismatch> {
        value.as_i64().ok_or(TypeMismatch {
            expected: "integer",
        })
    }
}

impl FromOpt for u64 {
    fn from_opt(value: &Value) -> Result<Self, TypeMismatch> {
        value.as_u64().ok_or(TypeMismatch {
            expected: "non-negative integer",
        })
    }
}

impl FromOpt for f64 {
    fn from_opt(value: &Value) -> Result<Self, TypeMismatch> {
        value.as_f64().ok_or(TypeMismatch { expected: "number" })
    }
}

impl FromOpt for bool {
    fn from_opt(value: &Value) -> Result<Self, TypeMismatch> {
        value.as_bool().ok_or(TypeMismatch {
            expected: "boolean",
        })
    }
}

impl FromOpt for String {
    fn from_opt(value: &Value) -> Result<Self, TypeMismatch> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or(TypeMismatch { expected: "string" })
    }
}

impl FromOpt for Value {
    fn from_opt(value: &Value) -> Result<Self, TypeMismatch> {
        Ok(value.clone())
    }
}

/// A declared, reusable option field.
///
/// A `Param` bundles an option name with the hooks that govern its
/// extraction. The same `Param` value can be applied to any number of option
/// maps; it holds no per-extraction state.
///
/// Declared defaults are returned as-is when the option is absent; the
/// coercion and validation hooks only run on caller-supplied values.
#[derive(Debug, Clone)]
pub struct Param<T> {
    name: &'static str,
    default: Option<T>,
    coerce: Option<fn(T) -> T>,
    validate: Option<fn(&T) -> Result<(), String>>,
}

impl<T: FromOpt + Clone> Param<T> {
    /// Declare an option field with the given name.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            default: None,
            coerce: None,
            validate: None,
        }
    }

    /// Value returned when the option is absent.
    pub fn with_default(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }

    /// Normalization hook applied after conversion, before validation.
    pub fn coerce(mut self, f: fn(T) -> T) -> Self {
        self.coerce = Some(f);
        self
    }

    /// Validation hook applied last; a returned `Err` rejects the value.
    pub fn validate(mut self, f: fn(&T) -> Result<(), String>) -> Self {
        self.validate = Some(f);
        self
    }

    /// The declared option name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Extract the option from the given map.
    ///
    /// An absent option yields the declared default, or
    /// [`ExtractError::Missing`] if there is none.
    pub fn get(&self, opts: &Opts) -> Result<T, ExtractError> {
        match opts.get(self.name) {
            Some(raw) => self.run(raw),
            None => match &self.default {
                Some(value) => Ok(value.clone()),
                None => Err(ExtractError::Missing(self.name)),
            },
        }
    }

    /// Extract the option if present.
    ///
    /// An absent option yields the declared default (or `None`); a present
    /// option runs the full pipeline and can still fail.
    pub fn get_opt(&self, opts: &Opts) -> Result<Option<T>, ExtractError> {
        match opts.get(self.name) {
            Some(raw) => self.run(raw).map(Some),
            None => Ok(self.default.clone()),
        }
    }

    fn run(&self, raw: &Value) -> Result<T, ExtractError> {
        let value = T::from_opt(raw).map_err(|mismatch| ExtractError::Type {
            name: self.name,
            expected: mismatch.expected,
        })?;
        let value = match self.coerce {
            Some(f) => f(value),
            None => value,
        };
        if let Some(check) = self.validate {
            check(&value).map_err(|reason| ExtractError::Invalid {
                name: self.name,
                reason,
            })?;
        }
        Ok(value)
    }
}
