//! Type-shape-driven masking of sensitive values in nested object graphs.
//!
//! This crate separates:
//! - **Shapes**: what a declaration site looks like and which annotations it
//!   carries ([`Shape`], the cascade marker, classifications).
//! - **Resolvers**: strategies that transform a value according to its shape,
//!   dispatched through an ordered chain ([`TypeResolvers`]).
//!
//! Key rules:
//! - Use `#[sensitive(Classification)]` for string-like leaf values.
//! - Use `#[sensitive(cascade)]` to walk into a nested struct that also
//!   derives [`Desensitize`].
//! - Use `#[sensitive(frozen)]` for fields the cascade must leave at their
//!   constructed default.
//! - Unannotated fields pass through unchanged; unannotated positions are
//!   simply not sensitive.
//!
//! Resolution never mutates the input: [`desensitize`] reads the source graph
//! through cloning field getters and returns a freshly built copy, so the
//! original stays byte-for-byte intact even on failure.
//!
//! What this crate does:
//! - defines the shape model and the resolver chain
//! - defines classification markers and text masking policies
//! - provides integrations behind feature flags (e.g. `slog`)
//!
//! What it does not do:
//! - perform I/O or logging
//! - serialize, persist, or transport anything
//!
//! The `Desensitize` derive lives in `desensitize-derive` and is re-exported
//! here.
//!
//! # Example
//!
//! ```ignore
//! use desensitize::{Desensitize, IdNumber};
//!
//! #[derive(Clone, Default, Desensitize)]
//! struct Person {
//!     name: String,
//!     #[sensitive(IdNumber)]
//!     ssn: String,
//! }
//!
//! let person = Person {
//!     name: "Ann".to_owned(),
//!     ssn: "123-45-6789".to_owned(),
//! };
//! let masked = desensitize::desensitize(&person).unwrap();
//! assert_eq!(masked.name, "Ann");
//! assert_eq!(masked.ssn, "*******6789");
//! assert_eq!(person.ssn, "123-45-6789");
//! ```

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
    clippy::result_large_err,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use desensitize_derive::Desensitize;

// Module declarations
mod classification;
mod error;
pub mod instance;
mod policy;
mod resolver;
mod schema;
mod shape;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports
pub use classification::{
    BankCard, Classification, Email, IdNumber, Password, PersonName, Phone, PostalAddress, Secret,
};
pub use error::Error;
pub use policy::{Classified, MaskPolicy, TextMaskPolicy, MASKED_PLACEHOLDER};
pub use resolver::{
    BoxedValue, CascadeTypeResolver, MaskingTypeResolver, TypeResolver, TypeResolvers,
    TypeVariableResolver, WildcardTypeResolver, HIGHEST_PRIORITY, LOWEST_PRIORITY,
};
pub use schema::{Cascade, FieldDescriptor, FieldGetter, FieldSetter, Reflective, TypeSchema};
pub use shape::Shape;

/// Masks `value` by cascading over its fields, returning a fresh copy.
///
/// Equivalent to resolving against a cascade-marked shape for `T` through the
/// global resolver chain. The input is never mutated.
///
/// # Errors
///
/// Fails when a blank instance cannot be created for some type in the graph
/// or a field cannot be read or written; the error names the field path that
/// triggered it.
pub fn desensitize<T>(value: &T) -> Result<T, Error>
where
    T: Reflective + Clone,
{
    resolve_with_shape(value, &Shape::cascade::<T>())
}

/// Resolves `value` against an explicit shape through the global chain.
///
/// This is the entry point for hand-built shapes (wildcards, variables,
/// ad-hoc annotations); [`desensitize`] is the common cascade-rooted case.
///
/// # Errors
///
/// Propagates resolution failures, and fails with [`Error::TypeMismatch`]
/// when a misbehaving resolver returned a value that is no longer a `T`.
pub fn resolve_with_shape<T>(value: &T, shape: &Shape) -> Result<T, Error>
where
    T: std::any::Any + Send + Sync + Clone,
{
    let resolved = TypeResolvers::global().resolve(Box::new(value.clone()), shape)?;
    resolved
        .downcast::<T>()
        .map(|boxed| *boxed)
        .map_err(|_| Error::TypeMismatch {
            expected: std::any::type_name::<T>(),
        })
}

/// Convenience method form of [`desensitize`].
pub trait Desensitizable: Reflective + Clone {
    /// Returns a masked copy of `self`.
    ///
    /// # Errors
    ///
    /// See [`desensitize`].
    fn desensitize(&self) -> Result<Self, Error> {
        crate::desensitize(self)
    }
}

impl<T> Desensitizable for T where T: Reflective + Clone {}
