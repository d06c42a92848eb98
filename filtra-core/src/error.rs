//! Error types for Filtra.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`FiltraError`] - Top-level error type for all Filtra operations
//! - [`RegistryError`] - Name resolution and binding errors
//! - [`FilterError`] - Errors from applying an individual filter
//!
//! Registration errors are terminal: a failed binding leaves the registry
//! exactly as it was.

use crate::extract::ExtractError;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Filtra operations.
#[derive(Error, Debug)]
pub enum FiltraError {
    /// An error occurred while binding a filter into a registry.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// An error occurred while applying a filter.
    #[error("filter error: {0}")]
    Filter(#[from] FilterError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors that can occur while resolving or binding a registration key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The resolved key was empty after trimming whitespace.
    #[error("invalid filter name {0:?}: empty after trimming")]
    InvalidName(String),

    /// The resolved key is already bound to a different filter type.
    #[error("duplicate filter name: {0:?}")]
    DuplicateName(String),
}

/// Errors that can occur while applying a filter.
#[derive(Error, Debug)]
pub enum FilterError {
    /// An option could not be extracted.
    #[error("option error: {0}")]
    Opt(#[from] ExtractError),

    /// The subject is of a shape this filter cannot handle.
    #[error("unsupported subject: {0}")]
    Subject(String),

    /// A custom filter error.
    #[error(transparent)]
    Custom(BoxError),
}

impl FilterError {
    /// Create a [`FilterError::Subject`] from any message.
    pub fn subject(message: impl Into<String>) -> Self {
        FilterError::Subject(message.into())
    }

    /// Create a [`FilterError::Custom`] from any error.
    pub fn custom(err: impl Into<BoxError>) -> Self {
        FilterError::Custom(err.into())
    }
}

// Convenience conversions
impl From<BoxError> for FiltraError {
    fn from(err: BoxError) -> Self {
        FiltraError::Custom(err)
    }
}
