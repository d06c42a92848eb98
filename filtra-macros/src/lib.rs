//! Procedural macros for the Filtra plugin framework.

use proc_macro::TokenStream;

mod filter;

/// Declare a struct as a registrable filter.
///
/// The attribute generates the `Registrable` implementation and submits a
/// registration record for pickup by startup collection. The struct must
/// implement `Filter` and `Default` itself.
///
/// # Usage
///
/// ```rust,ignore
/// // Registered under its bare type identifier: "Sepia"
/// #[filtra::filter]
/// #[derive(Default)]
/// struct Sepia;
///
/// // Registered under an explicit name
/// #[filtra::filter(name = "resize")]
/// #[derive(Default)]
/// struct Resize;
///
/// // Registered under a declared alias (an explicit name would win over it)
/// #[filtra::filter(alias = "emoji")]
/// #[derive(Default)]
/// struct Emoji;
///
/// // An abstract base: submitted, but never bound by collection
/// #[filtra::filter(base)]
/// #[derive(Default)]
/// struct Template;
/// ```
#[proc_macro_attribute]
pub fn filter(attr: TokenStream, item: TokenStream) -> TokenStream {
    filter::filter_impl(attr, item)
}
