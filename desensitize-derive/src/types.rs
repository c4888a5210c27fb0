//! Type utilities for the derive macro.

/// Returns the `T` of an `Option<T>` type, or `None` for anything else.
///
/// Detection is intentionally conservative: only the bare `Option<...>`
/// syntax is recognized, not qualified paths (`std::option::Option<...>`) or
/// type aliases. A field whose `Option` is not recognized is treated as a
/// plain value, which is always safe - the engine then resolves the `Option`
/// itself instead of its content.
pub(crate) fn option_inner(ty: &syn::Type) -> Option<&syn::Type> {
    let syn::Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() || path.path.leading_colon.is_some() || path.path.segments.len() != 1 {
        return None;
    }
    let segment = path.path.segments.first()?;
    if segment.ident != "Option" {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }
    match args.args.first()? {
        syn::GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
