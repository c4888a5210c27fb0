//! Derive macro for `desensitize`.
//!
//! This crate generates the schema descriptor behind `#[derive(Desensitize)]`.
//! It:
//! - reads `#[sensitive(...)]` field attributes
//! - emits a `Reflective` implementation whose `TypeSchema` enumerates the
//!   type's fields with cloning getters, downcasting setters, and annotated
//!   shapes
//!
//! It does **not** define classifications, policies, or resolvers. Those live
//! in the main `desensitize` crate and are applied at runtime.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Result};

mod container;
mod derive_struct;
mod strategy;
mod types;

use container::{parse_container_options, ContainerOptions};
use derive_struct::derive_struct;

/// Derives `desensitize::Reflective` for a struct with named fields.
///
/// # Container Attributes
///
/// - `#[sensitive(no_default)]` - The schema declares no default constructor.
///   Cascading into the type then requires an instance creator registered via
///   `desensitize::instance::register`. Without this attribute the generated
///   constructor calls `Default::default()`, so the type must implement
///   `Default`.
///
/// # Field Attributes
///
/// - **No annotation**: The field's value travels through the resolver chain
///   with a plain shape and comes back unchanged. External types work
///   automatically.
///
/// - `#[sensitive(Classification)]`: Attaches the classification's policy to
///   the field's shape; the masking resolver applies it to `String`,
///   `Option<String>`, and `Vec<String>` fields.
///
/// - `#[sensitive(cascade)]`: Opts this field into recursive field-by-field
///   resolution. The field type (or the `T` of an `Option<T>` field) must
///   itself derive `Desensitize`.
///
/// - `#[sensitive(frozen)]`: The cascade neither reads nor writes the field;
///   the masked copy keeps its constructed default.
///
/// `Option<T>` fields are unwrapped: an empty field is skipped, a present one
/// is resolved as its inner value. Every non-frozen field type must implement
/// `Clone`, because getters read the original by cloning.
///
/// Enums, unions, tuple structs, and generic types are rejected at compile
/// time.
#[proc_macro_derive(Desensitize, attributes(sensitive))]
pub fn derive_desensitize(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the desensitize crate root.
///
/// Handles crate renaming (e.g., `my_mask = { package = "desensitize", ... }`)
/// and internal usage (when the derive is used inside the desensitize crate
/// itself).
fn crate_root() -> TokenStream {
    match crate_name("desensitize") {
        Ok(FoundCrate::Itself) => quote! { crate },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::desensitize },
    }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    if let Some(param) = generics.params.first() {
        return Err(syn::Error::new(
            param.span(),
            "`Desensitize` cannot be derived for generic types: \
each schema describes a single concrete runtime type",
        ));
    }

    let ContainerOptions { no_default } = parse_container_options(&attrs)?;
    let root = crate_root();

    match &data {
        Data::Struct(data) => derive_struct(&ident, data, &root, no_default),
        Data::Enum(data) => Err(syn::Error::new(
            data.enum_token.span(),
            "`Desensitize` cannot be derived for enums: \
cascading resolution operates on named struct fields",
        )),
        Data::Union(data) => Err(syn::Error::new(
            data.union_token.span(),
            "`Desensitize` cannot be derived for unions",
        )),
    }
}
