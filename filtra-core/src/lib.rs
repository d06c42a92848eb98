//! # filtra-core
//!
//! Core traits for the Filtra plugin framework.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! filter implementations that don't need the full `filtra-std` registry.
//!
//! # Concepts
//!
//! ## Behavioral contract ([`Filter`])
//!
//! A filter is the unit of pluggable behavior: it receives an opaque JSON
//! subject plus a string-keyed option map and produces a transformed value.
//! Everything the registry stores ultimately constructs to a boxed `Filter`.
//!
//! ## Registration contract ([`Registrable`])
//!
//! A registrable type is a filter with a zero-argument constructor and an
//! optional declared alias. The alias participates in name resolution:
//! an explicit name given at the registration site wins, then the declared
//! alias, then the bare type identifier (see [`resolve_key`]).
//!
//! ## Option extraction ([`Param`])
//!
//! Declarative, reusable option fields: each [`Param`] names an option and
//! optionally carries a default, a coercion hook, and a validation hook.
//! Extraction runs convert → coerce → validate and reports failures with the
//! option name attached.
//!
//! # Error Types
//!
//! - [`FiltraError`] - Top-level error type
//! - [`RegistryError`] - Name resolution and binding errors
//! - [`FilterError`] - Filter application errors
//! - [`ExtractError`] - Option extraction errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod extract;
mod filter;
mod key;
mod registrable;
pub mod validate;

// Re-exports
pub use error::{BoxError, FilterError, FiltraError, RegistryError};
pub use extract::{ExtractError, FromOpt, Param, TypeMismatch};
pub use filter::{BoxFilter, Filter, Opts};
pub use key::{resolve_key, short_type_name};
pub use registrable::Registrable;
pub use serde_json::Value;
