//! Resolver for wildcard type positions.

use std::any::Any;

use crate::error::Error;
use crate::shape::Shape;

use super::{BoxedValue, TypeResolver, TypeResolvers, HIGHEST_PRIORITY};

/// Unwraps a bounded wildcard by resolving the value against each of its
/// bound shapes in turn.
///
/// Upper bounds are applied first, then lower bounds; each step feeds the
/// accumulated value into the next, so a wildcard with bounds `[B1, B2]`
/// resolves to `resolve(resolve(value, B1), B2)`. A wildcard with no bounds
/// leaves the value untouched.
///
/// Runs one step below the highest priority: a wildcard must be unwrapped to
/// its bound before any marker check could be applied to the wrong shape.
pub struct WildcardTypeResolver;

impl TypeResolver for WildcardTypeResolver {
    fn resolve(
        &self,
        value: BoxedValue,
        shape: &Shape,
        chain: &TypeResolvers,
    ) -> Result<BoxedValue, Error> {
        let Some((upper, lower)) = shape.wildcard_bounds() else {
            return Err(Error::ShapeMismatch {
                resolver: "WildcardTypeResolver",
            });
        };
        upper
            .iter()
            .chain(lower.iter())
            .try_fold(value, |accumulated, bound| chain.resolve(accumulated, bound))
    }

    fn support(&self, _value: &(dyn Any + Send + Sync), shape: &Shape) -> bool {
        shape.is_wildcard()
    }

    fn order(&self) -> i32 {
        HIGHEST_PRIORITY + 1
    }
}
