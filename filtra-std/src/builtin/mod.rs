//! Built-in filters.
//!
//! Three small filters over string subjects ship with the framework, each
//! bound through a different surface so the shipped set exercises the whole
//! registration contract:
//!
//! - [`Resize`] and [`Crop`] register under explicit names,
//! - [`Emoji`] carries a declared alias and registers implicitly.
//!
//! With the `inventory` feature their declaration-site records are collected
//! automatically; [`register_all`] is the explicit bootstrap for registries
//! built by hand.

mod crop;
mod emoji;
mod resize;

pub use crop::Crop;
pub use emoji::Emoji;
pub use resize::Resize;

use crate::registry::FilterRegistry;
use filtra_core::{FilterError, RegistryError, Value};

/// Register every built-in filter into the given registry.
///
/// Safe to call more than once against the same registry: re-binding the
/// same types is a no-op.
pub fn register_all(registry: &mut FilterRegistry) -> Result<(), RegistryError> {
    registry.register_as::<Resize>(Resize::NAME)?;
    registry.register_as::<Crop>(Crop::NAME)?;
    registry.register::<Emoji>()?;
    Ok(())
}

pub(crate) fn subject_str(subject: &Value) -> Result<&str, FilterError> {
    subject
        .as_str()
        .ok_or_else(|| FilterError::subject("built-in filters operate on string subjects"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_all_binds_the_shipped_set() {
        let mut registry = FilterRegistry::new();
        register_all(&mut registry).unwrap();
        assert_eq!(registry.discover(), vec!["crop", "emoji", "resize"]);
    }

    #[test]
    fn register_all_is_idempotent() {
        let mut registry = FilterRegistry::new();
        register_all(&mut registry).unwrap();
        register_all(&mut registry).unwrap();
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn non_string_subject_is_rejected() {
        let err = subject_str(&Value::Null).unwrap_err();
        assert!(matches!(err, FilterError::Subject(_)));
    }
}
