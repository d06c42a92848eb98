//! Declaration-site registration records.
//!
//! A [`FilterDef`] captures everything the registry needs to bind a filter
//! type: the name candidates, the type's identity, and a constructor. Records
//! are built at the declaration site, by hand or by the `#[filter]`
//! attribute, and either passed to a registry directly or submitted to the
//! process-wide collection (feature: `inventory`) for pickup at startup.

use filtra_core::{BoxFilter, Registrable, RegistryError, resolve_key, short_type_name};
use std::any::TypeId;

fn construct<F: Registrable>() -> BoxFilter {
    Box::new(F::default())
}

// Resolved lazily through a fn pointer: `std::any::type_name` is not yet a
// stable `const fn`, so the bare identifier cannot be computed while building
// the record in `static` context (where `inventory::submit!` places it).
fn type_name_of<F: Registrable>() -> &'static str {
    short_type_name(std::any::type_name::<F>())
}

/// A registration record for a single filter type.
pub struct FilterDef {
    name: Option<&'static str>,
    alias: Option<&'static str>,
    type_name: fn() -> &'static str,
    type_id: TypeId,
    ctor: fn() -> BoxFilter,
    is_abstract: bool,
}

impl FilterDef {
    /// A record registering `F` under its declared alias, or its bare type
    /// identifier if it has none.
    pub const fn of<F: Registrable>() -> Self {
        Self {
            name: None,
            alias: F::ALIAS,
            type_name: type_name_of::<F>,
            type_id: TypeId::of::<F>(),
            ctor: construct::<F>,
            is_abstract: false,
        }
    }

    /// A record registering `F` under an explicit name. The explicit name
    /// wins over the declared alias.
    pub const fn named<F: Registrable>(name: &'static str) -> Self {
        let mut def = Self::of::<F>();
        def.name = Some(name);
        def
    }

    /// A record for an abstract base: submitted like any other, but skipped
    /// by collection so the type itself is never bound.
    pub const fn base<F: Registrable>() -> Self {
        let mut def = Self::of::<F>();
        def.is_abstract = true;
        def
    }

    /// Resolve this record's registration key.
    pub fn key(&self) -> Result<String, RegistryError> {
        resolve_key(self.name, self.alias, (self.type_name)())
    }

    /// Identity of the recorded type.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Bare identifier of the recorded type.
    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Whether collection must skip this record.
    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// Construct a fresh instance of the recorded type.
    pub fn instantiate(&self) -> BoxFilter {
        (self.ctor)()
    }

    pub(crate) fn ctor(&self) -> fn() -> BoxFilter {
        self.ctor
    }
}

impl std::fmt::Debug for FilterDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterDef")
            .field("name", &self.name)
            .field("alias", &self.alias)
            .field("type_name", &(self.type_name)())
            .field("is_abstract", &self.is_abstract)
            .finish()
    }
}

#[cfg(feature = "inventory")]
inventory::collect!(FilterDef);
