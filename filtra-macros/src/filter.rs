//! The `#[filter]` declaration attribute.

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Ident, ItemStruct, LitStr, Token,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// Arguments for the `#[filter]` macro.
pub(crate) struct FilterArgs {
    /// Explicit registration name; wins over the alias.
    pub name: Option<LitStr>,
    /// Declared alias, generated into the `Registrable` impl.
    pub alias: Option<LitStr>,
    /// Mark the record abstract so collection skips it.
    pub base: bool,
}

impl Parse for FilterArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name = None;
        let mut alias = None;
        let mut base = false;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            match ident.to_string().as_str() {
                "name" => {
                    input.parse::<Token![=]>()?;
                    name = Some(input.parse::<LitStr>()?);
                }
                "alias" => {
                    input.parse::<Token![=]>()?;
                    alias = Some(input.parse::<LitStr>()?);
                }
                "base" => base = true,
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(FilterArgs { name, alias, base })
    }
}

pub(crate) fn filter_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as FilterArgs);
    let item = parse_macro_input!(item as ItemStruct);
    let ident = &item.ident;

    if !item.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &item.generics,
            "registrable filters must be concrete types",
        )
        .to_compile_error()
        .into();
    }

    if args.base {
        if let Some(name) = &args.name {
            return syn::Error::new(
                name.span(),
                "a base filter cannot take an explicit registration name",
            )
            .to_compile_error()
            .into();
        }
    }

    let alias = match &args.alias {
        Some(lit) => quote! { ::core::option::Option::Some(#lit) },
        None => quote! { ::core::option::Option::None },
    };

    let def = if args.base {
        quote! { ::filtra::FilterDef::base::<#ident>() }
    } else if let Some(name) = &args.name {
        quote! { ::filtra::FilterDef::named::<#ident>(#name) }
    } else {
        quote! { ::filtra::FilterDef::of::<#ident>() }
    };

    let expanded = quote! {
        #item

        impl ::filtra::Registrable for #ident {
            const ALIAS: ::core::option::Option<&'static str> = #alias;
        }

        ::filtra::inventory::submit! {
            #def
        }
    };

    TokenStream::from(expanded)
}
