//! Name-keyed filter registry.
//!
//! The registry maps a unique string key to a registered filter type.
//! All registration surfaces (explicit calls, registration records, startup
//! collection) funnel through one resolution and insert path, so a name
//! collision is detected identically no matter how the binding was produced.
//!
//! Binding rules:
//! - the resolved key must be non-empty after trimming ([`RegistryError::InvalidName`]),
//! - a key bound to a *different* type is rejected ([`RegistryError::DuplicateName`]),
//! - re-binding the *same* type under its own key is an idempotent no-op.
//!
//! A failed binding leaves the registry unchanged.

mod def;
mod global;

pub use def::FilterDef;
pub use global::{contains, discover, global, instantiate, register, register_as};

use filtra_core::{BoxFilter, Registrable, RegistryError, resolve_key, short_type_name};
use std::any::TypeId;
use std::collections::HashMap;

/// A bound registry entry: the type's identity plus its constructor.
#[derive(Debug, Clone)]
pub struct FilterEntry {
    type_id: TypeId,
    type_name: &'static str,
    ctor: fn() -> BoxFilter,
}

impl FilterEntry {
    fn of<F: Registrable>() -> Self {
        fn construct<F: Registrable>() -> BoxFilter {
            Box::new(F::default())
        }
        Self {
            type_id: TypeId::of::<F>(),
            type_name: short_type_name(std::any::type_name::<F>()),
            ctor: construct::<F>,
        }
    }

    /// Bare identifier of the bound type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Construct a fresh instance of the bound type.
    pub fn instantiate(&self) -> BoxFilter {
        (self.ctor)()
    }
}

/// A registry of named filter types.
pub struct FilterRegistry {
    entries: HashMap<String, FilterEntry>,
}

impl FilterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register `F` under its declared alias, or its bare type identifier if
    /// it has none. Returns the resolved key.
    pub fn register<F: Registrable>(&mut self) -> Result<String, RegistryError> {
        let key = resolve_key(None, F::ALIAS, short_type_name(std::any::type_name::<F>()))?;
        self.bind(key, FilterEntry::of::<F>())
    }

    /// Register `F` under an explicit name. The explicit name wins over the
    /// declared alias. Returns the resolved key.
    pub fn register_as<F: Registrable>(&mut self, name: &str) -> Result<String, RegistryError> {
        let key = resolve_key(
            Some(name),
            F::ALIAS,
            short_type_name(std::any::type_name::<F>()),
        )?;
        self.bind(key, FilterEntry::of::<F>())
    }

    /// Register a filter from a declaration-site record.
    pub fn register_def(&mut self, def: &FilterDef) -> Result<String, RegistryError> {
        let key = def.key()?;
        self.bind(
            key,
            FilterEntry {
                type_id: def.type_id(),
                type_name: def.type_name(),
                ctor: def.ctor(),
            },
        )
    }

    // The single insert path shared by every registration surface.
    fn bind(&mut self, key: String, entry: FilterEntry) -> Result<String, RegistryError> {
        match self.entries.get(&key) {
            // Re-binding the same type is a no-op.
            Some(existing) if existing.type_id == entry.type_id => {}
            Some(_) => return Err(RegistryError::DuplicateName(key)),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(filter = %key, type_name = entry.type_name, "filter registered");
                self.entries.insert(key.clone(), entry);
            }
        }
        Ok(key)
    }

    /// Get an entry by key. A missing key is the mapping's own miss.
    pub fn get(&self, name: &str) -> Option<&FilterEntry> {
        self.entries.get(name)
    }

    /// Construct a fresh instance of the filter bound under `name`.
    pub fn instantiate(&self, name: &str) -> Option<BoxFilter> {
        self.get(name).map(|entry| entry.instantiate())
    }

    /// Check if a key is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All bound keys in lexicographic order. Deterministic; no side effects.
    pub fn discover(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Number of bound filters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register every concrete record submitted to the process-wide
    /// collection, skipping abstract ones. Returns the number of newly
    /// bound filters; records whose type is already bound are no-ops.
    #[cfg(feature = "inventory")]
    pub fn register_submitted(&mut self) -> Result<usize, RegistryError> {
        let before = self.len();
        for def in inventory::iter::<FilterDef> {
            if def.is_abstract() {
                #[cfg(feature = "tracing")]
                tracing::trace!(type_name = def.type_name(), "skipping abstract registration");
                continue;
            }
            self.register_def(def)?;
        }
        Ok(self.len() - before)
    }

    /// Create a registry seeded with every submitted concrete record.
    #[cfg(feature = "inventory")]
    pub fn with_submitted() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.register_submitted()?;
        Ok(registry)
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
