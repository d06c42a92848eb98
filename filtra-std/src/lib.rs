//! # filtra-std
//!
//! Standard implementations for the Filtra plugin framework.
//!
//! This crate provides:
//! - **The registry**: [`FilterRegistry`], name-keyed storage with duplicate
//!   detection and idempotent re-registration
//! - **Declaration-site collection**: [`FilterDef`] records gathered at
//!   startup (feature: `inventory`)
//! - **The process-wide instance**: [`registry::global`] and friends
//! - **Built-in filters**: resize, crop, emoji (feature: `builtin`)
//! - **Testing utilities**: recording and failing filters
//!
//! [`FilterRegistry`]: registry::FilterRegistry
//! [`FilterDef`]: registry::FilterDef

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use filtra_core;

// Modules
pub mod registry;
pub mod testing;

#[cfg(feature = "builtin")]
pub mod builtin;

#[cfg(feature = "inventory")]
pub use inventory;
