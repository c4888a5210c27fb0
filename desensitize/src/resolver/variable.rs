//! Resolver for bounded type-variable positions.

use std::any::Any;

use crate::error::Error;
use crate::shape::Shape;

use super::{BoxedValue, TypeResolver, TypeResolvers, HIGHEST_PRIORITY};

/// Unwraps a bounded type variable by folding the value through its bound
/// shapes, the same way [`super::WildcardTypeResolver`] folds wildcard
/// bounds. A variable with no bounds leaves the value untouched.
pub struct TypeVariableResolver;

impl TypeResolver for TypeVariableResolver {
    fn resolve(
        &self,
        value: BoxedValue,
        shape: &Shape,
        chain: &TypeResolvers,
    ) -> Result<BoxedValue, Error> {
        let Some(bounds) = shape.variable_bounds() else {
            return Err(Error::ShapeMismatch {
                resolver: "TypeVariableResolver",
            });
        };
        bounds
            .iter()
            .try_fold(value, |accumulated, bound| chain.resolve(accumulated, bound))
    }

    fn support(&self, _value: &(dyn Any + Send + Sync), shape: &Shape) -> bool {
        shape.is_variable()
    }

    fn order(&self) -> i32 {
        HIGHEST_PRIORITY + 2
    }
}
