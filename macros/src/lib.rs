//! Derive macros for the Tickbox state layer
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Implements `tickbox_core::action::Action` for action enums
//!
//! # Example
//!
//! ```ignore
//! use tickbox_macros::Action;
//! use tickbox_core::action::Action as _;
//!
//! #[derive(Action, Clone, Debug)]
//! enum TodoAction {
//!     Add { text: String },
//!     #[action(name = "wipe")]
//!     Clear,
//! }
//!
//! assert_eq!(TodoAction::Add { text: "x".into() }.name(), "add");
//! assert_eq!(TodoAction::Clear.name(), "wipe");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, LitStr};

/// Derive macro for Action enums
///
/// Implements `tickbox_core::action::Action`, whose `name()` returns the
/// variant name in `snake_case` (`ToggleTodo` becomes `toggle_todo`).
///
/// # Attributes
///
/// - `#[action(name = "...")]` - Override the generated name of a variant
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - An `#[action(...)]` attribute has an unknown key or a non-string value
/// - Two variants end up with the same name
#[proc_macro_derive(Action, attributes(action))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(
            input,
            "#[derive(Action)] can only be used on enums"
        )
        .to_compile_error()
        .into();
    };

    let mut seen = std::collections::HashSet::new();
    let mut arms = Vec::with_capacity(data_enum.variants.len());

    for variant in &data_enum.variants {
        let variant_name = &variant.ident;

        let action_name = match name_override(&variant.attrs) {
            Ok(Some(custom)) => custom,
            Ok(None) => to_snake_case(&variant_name.to_string()),
            Err(error) => return error.to_compile_error().into(),
        };

        if !seen.insert(action_name.clone()) {
            return syn::Error::new_spanned(
                variant,
                format!("duplicate action name `{action_name}`")
            )
            .to_compile_error()
            .into();
        }

        let arm = match &variant.fields {
            Fields::Named(_) => quote! { Self::#variant_name { .. } => #action_name, },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) => #action_name, },
            Fields::Unit => quote! { Self::#variant_name => #action_name, },
        };
        arms.push(arm);
    }

    // An empty enum has no values, so `match *self {}` is exhaustive.
    let body = if arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(#arms)*
            }
        }
    };

    let expanded = quote! {
        impl #impl_generics ::tickbox_core::action::Action for #name #ty_generics #where_clause {
            fn name(&self) -> &'static str {
                #body
            }
        }
    };

    TokenStream::from(expanded)
}

/// Read `#[action(name = "...")]` from a variant's attributes
fn name_override(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut result = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("action")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                result = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unsupported action attribute, expected `name = \"...\"`"))
            }
        })?;
    }

    Ok(result)
}

/// `ToggleTodo` -> `toggle_todo`
fn to_snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    let mut prev_lower = false;

    for ch in ident.chars() {
        if ch.is_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
            prev_lower = false;
        } else {
            out.push(ch);
            prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        }
    }

    out
}
