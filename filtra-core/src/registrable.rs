//! Registration contract for filter types.

use crate::filter::Filter;

/// A filter type that can be bound into a registry.
///
/// Registries store a constructor per name and build instances on demand, so
/// registrable types need `Default` (zero-argument construction) and must be
/// `'static` (their identity is tracked via `TypeId`).
///
/// `ALIAS` is the type's declared name. It participates in key resolution
/// with the middle precedence: an explicit name given at the registration
/// site wins over the alias, and the alias wins over the bare type
/// identifier.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct Emoji;
///
/// impl Registrable for Emoji {
///     const ALIAS: Option<&'static str> = Some("emoji");
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not registrable",
    label = "missing `Registrable` implementation",
    note = "Registrable types must implement `Filter` and `Default`, and be `'static`."
)]
pub trait Registrable: Filter + Default + 'static {
    /// The declared alias, if any. Defaults to none, in which case the bare
    /// type identifier is used as the registration key.
    const ALIAS: Option<&'static str> = None;
}
