//! Schema generation for structs with named fields.
//!
//! For every field this module emits a `FieldDescriptor` literal: the field's
//! name, whether it is frozen, the annotated shape of its declaration site,
//! and a getter/setter pair over type-erased values. The descriptors land in
//! a lazily initialized `TypeSchema` static returned by the generated
//! `Reflective` implementation.

use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::{spanned::Spanned, DataStruct, Fields, Ident, Result};

use crate::strategy::{parse_field_strategy, Strategy};
use crate::types::option_inner;

pub(crate) fn derive_struct(
    ident: &Ident,
    data: &DataStruct,
    root: &TokenStream,
    no_default: bool,
) -> Result<TokenStream> {
    let descriptors = match &data.fields {
        Fields::Named(fields) => fields
            .named
            .iter()
            .map(|field| field_descriptor(ident, field, root))
            .collect::<Result<Vec<_>>>()?,
        Fields::Unit => Vec::new(),
        Fields::Unnamed(fields) => {
            return Err(syn::Error::new(
                fields.span(),
                "`Desensitize` requires named fields; tuple structs are not supported",
            ));
        }
    };

    let type_name = ident.to_string();
    let construct = if no_default {
        quote! { ::core::option::Option::None }
    } else {
        quote! {
            ::core::option::Option::Some(
                || ::std::boxed::Box::new(<#ident as ::core::default::Default>::default())
                    as #root::BoxedValue,
            )
        }
    };

    Ok(quote! {
        impl #root::Reflective for #ident {
            fn schema() -> &'static #root::TypeSchema {
                static SCHEMA: ::std::sync::OnceLock<#root::TypeSchema> =
                    ::std::sync::OnceLock::new();
                SCHEMA.get_or_init(|| #root::TypeSchema {
                    type_name: #type_name,
                    type_id: ::core::any::TypeId::of::<#ident>(),
                    construct: #construct,
                    fields: ::std::vec![ #(#descriptors),* ],
                })
            }
        }
    })
}

fn field_descriptor(parent: &Ident, field: &syn::Field, root: &TokenStream) -> Result<TokenStream> {
    let strategy = parse_field_strategy(&field.attrs)?;
    let ident = field
        .ident
        .clone()
        .expect("named field should have an identifier");
    let span = field.span();
    let name = ident.to_string();
    let parent_name = parent.to_string();
    let ty = &field.ty;

    // Option fields are unwrapped at the accessor boundary: an empty field
    // reads as absent, a resolved value is re-wrapped on write.
    let (inner_ty, is_option) = match option_inner(ty) {
        Some(inner) => (inner, true),
        None => (ty, false),
    };

    let frozen = matches!(strategy, Strategy::Frozen);
    let shape = match &strategy {
        Strategy::PassThrough | Strategy::Frozen => quote! { #root::Shape::concrete() },
        Strategy::Cascade => quote_spanned! { span =>
            #root::Shape::cascade::<#inner_ty>()
        },
        Strategy::Classify(classification) => quote_spanned! { span =>
            #root::Shape::concrete()
                .with_annotation(#root::Classified::of::<#classification>())
        },
    };

    let read_error = quote! {
        #root::Error::FieldRead { type_name: #parent_name, field: #name }
    };
    let write_error = quote! {
        #root::Error::FieldWrite { type_name: #parent_name, field: #name }
    };

    let get = if is_option {
        quote_spanned! { span =>
            |object| {
                let object = object.downcast_ref::<#parent>().ok_or(#read_error)?;
                ::core::result::Result::Ok(object.#ident.as_ref().map(|inner| {
                    ::std::boxed::Box::new(::core::clone::Clone::clone(inner))
                        as #root::BoxedValue
                }))
            }
        }
    } else {
        quote_spanned! { span =>
            |object| {
                let object = object.downcast_ref::<#parent>().ok_or(#read_error)?;
                ::core::result::Result::Ok(::core::option::Option::Some(
                    ::std::boxed::Box::new(::core::clone::Clone::clone(&object.#ident))
                        as #root::BoxedValue,
                ))
            }
        }
    };

    let store = if is_option {
        quote! { object.#ident = ::core::option::Option::Some(*value); }
    } else {
        quote! { object.#ident = *value; }
    };
    let set = quote_spanned! { span =>
        |object, value| {
            let object = object.downcast_mut::<#parent>().ok_or(#write_error)?;
            let value = value.downcast::<#inner_ty>().map_err(|_| #write_error)?;
            #store
            ::core::result::Result::Ok(())
        }
    };

    Ok(quote! {
        #root::FieldDescriptor {
            name: #name,
            frozen: #frozen,
            shape: #shape,
            get: #get,
            set: #set,
        }
    })
}
