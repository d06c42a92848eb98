//! # filtra - Named, Discoverable, Compiled-In Plugin Filters
//!
//! `filtra` maintains a process-wide mapping from a unique string key to a
//! registered filter type. Filters transform an opaque JSON subject under a
//! string-keyed option map; consumers look implementations up by name,
//! enumerate all names, and construct instances on demand.
//!
//! ## Two registration surfaces, one contract
//!
//! Registrations reach the registry either through explicit calls:
//!
//! ```rust,ignore
//! let mut registry = FilterRegistry::new();
//! registry.register_as::<Resize>("resize")?;
//! registry.register::<Emoji>()?;               // uses the declared alias
//! ```
//!
//! or implicitly, by declaring the type with the `#[filter]` attribute and
//! letting startup collection pick the record up:
//!
//! ```rust,ignore
//! #[filtra::filter(name = "resize")]
//! #[derive(Default)]
//! struct Resize;
//!
//! let registry = FilterRegistry::with_submitted()?;
//! ```
//!
//! Both surfaces resolve names identically (explicit name > declared alias >
//! bare type identifier) and share one storage, so a collision is detected
//! no matter which surface produced it. Binding a key to a *different* type
//! fails; re-binding the *same* type is an idempotent no-op.
//!
//! ## Lookup
//!
//! ```rust,ignore
//! for name in registry.discover() {
//!     println!("{name}");
//! }
//! let out = registry
//!     .instantiate("resize")
//!     .expect("registered")
//!     .apply(&subject, &opts)?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use filtra_core::{
    // Error types
    BoxError,
    // Filter
    BoxFilter,
    // Option extraction
    ExtractError,
    Filter,
    FilterError,
    FiltraError,
    FromOpt,
    Opts,
    Param,
    // Registration contract
    Registrable,
    RegistryError,
    TypeMismatch,
    Value,
    // Key resolution
    resolve_key,
    short_type_name,
};

// Validation and coercion hooks for Param fields.
pub use filtra_core::validate;

// Registry types
pub use filtra_std::registry::{FilterDef, FilterEntry, FilterRegistry};

/// Process-wide registry operations.
pub mod registry {
    pub use filtra_std::registry::{
        contains, discover, global, instantiate, register, register_as,
    };
}

/// Built-in filters.
#[cfg(feature = "builtin")]
pub mod builtin {
    pub use filtra_std::builtin::{Crop, Emoji, Resize, register_all};
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use filtra_std::testing::*;
}

#[cfg(feature = "macros")]
pub use filtra_macros::filter;

#[cfg(feature = "inventory")]
pub use inventory;

/// Prelude module - common imports for Filtra.
///
/// # Usage
///
/// ```rust,ignore
/// use filtra::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Filter, FilterError, FilterRegistry, Opts, Param, Registrable, RegistryError, Value,
    };

    #[cfg(feature = "macros")]
    pub use crate::filter;
}
