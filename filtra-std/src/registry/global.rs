//! The process-wide registry instance.
//!
//! One registry exists for the lifetime of the process, created empty on
//! first access and seeded from the declaration-site collection when the
//! `inventory` feature is enabled. Check-then-insert runs under the write
//! lock, so duplicate detection stays atomic when callers register from
//! several threads.
//!
//! A duplicate or invalid compiled-in submission is a programming error:
//! seeding panics with the underlying diagnostic. Use
//! [`FilterRegistry::with_submitted`] for the fallible equivalent.

use super::FilterRegistry;
use filtra_core::{BoxFilter, Registrable, RegistryError};
use std::sync::{LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

static GLOBAL: LazyLock<RwLock<FilterRegistry>> = LazyLock::new(|| {
    #[cfg(feature = "inventory")]
    let registry = match FilterRegistry::with_submitted() {
        Ok(registry) => registry,
        Err(err) => panic!("compiled-in filter registration failed: {err}"),
    };
    #[cfg(not(feature = "inventory"))]
    let registry = FilterRegistry::new();
    RwLock::new(registry)
});

/// The process-wide registry.
pub fn global() -> &'static RwLock<FilterRegistry> {
    &GLOBAL
}

fn read() -> RwLockReadGuard<'static, FilterRegistry> {
    GLOBAL.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write() -> RwLockWriteGuard<'static, FilterRegistry> {
    GLOBAL
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// All keys bound in the process-wide registry, in lexicographic order.
pub fn discover() -> Vec<String> {
    read().discover()
}

/// Register `F` in the process-wide registry under its declared alias or
/// bare type identifier.
pub fn register<F: Registrable>() -> Result<String, RegistryError> {
    write().register::<F>()
}

/// Register `F` in the process-wide registry under an explicit name.
pub fn register_as<F: Registrable>(name: &str) -> Result<String, RegistryError> {
    write().register_as::<F>(name)
}

/// Construct a fresh instance of the filter bound under `name` in the
/// process-wide registry.
pub fn instantiate(name: &str) -> Option<BoxFilter> {
    read().instantiate(name)
}

/// Check if a key is bound in the process-wide registry.
pub fn contains(name: &str) -> bool {
    read().contains(name)
}
