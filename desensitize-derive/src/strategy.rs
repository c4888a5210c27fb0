//! Parsing of `#[sensitive(...)]` field attributes.
//!
//! This module maps attribute syntax to resolution strategies and produces
//! structured errors for invalid forms.

use proc_macro2::Span;
use syn::{spanned::Spanned, Attribute, Meta, Result};

/// Field strategy selected by `#[sensitive(...)]` attributes.
///
/// | Attribute | Strategy | Behavior |
/// |-----------|----------|----------|
/// | None | `PassThrough` | Plain shape, value comes back unchanged |
/// | `#[sensitive(cascade)]` | `Cascade` | Recurse into the nested struct |
/// | `#[sensitive(frozen)]` | `Frozen` | Field skipped, copy keeps its default |
/// | `#[sensitive(Class)]` | `Classify(Class)` | Apply the classification policy |
#[derive(Clone, Debug)]
pub(crate) enum Strategy {
    /// No annotation: the declaration site is not sensitive.
    PassThrough,
    /// `#[sensitive(cascade)]`: recursive field-by-field resolution.
    Cascade,
    /// `#[sensitive(frozen)]`: immutable-by-design, never read or written.
    Frozen,
    /// `#[sensitive(Classification)]`: apply the classification's policy.
    Classify(syn::Path),
}

fn set_strategy(target: &mut Option<Strategy>, next: Strategy, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            "multiple #[sensitive] attributes specified on the same field",
        ));
    }
    *target = Some(next);
    Ok(())
}

pub(crate) fn parse_field_strategy(attrs: &[Attribute]) -> Result<Strategy> {
    let mut strategy: Option<Strategy> = None;
    for attr in attrs {
        if !attr.path().is_ident("sensitive") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "bare #[sensitive] has no meaning; \
specify a classification, `cascade`, or `frozen`",
                ));
            }
            Meta::List(list) => match syn::parse2::<syn::Path>(list.tokens.clone()) {
                Ok(path) if path.is_ident("cascade") => {
                    set_strategy(&mut strategy, Strategy::Cascade, attr.span())?;
                }
                Ok(path) if path.is_ident("frozen") => {
                    set_strategy(&mut strategy, Strategy::Frozen, attr.span())?;
                }
                Ok(path) => {
                    set_strategy(&mut strategy, Strategy::Classify(path), attr.span())?;
                }
                Err(_) => {
                    return Err(syn::Error::new(
                        attr.span(),
                        "expected a classification type (e.g., #[sensitive(Secret)]), \
`cascade`, or `frozen`",
                    ));
                }
            },
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "name-value syntax is not supported for #[sensitive]",
                ));
            }
        }
    }

    Ok(strategy.unwrap_or(Strategy::PassThrough))
}
