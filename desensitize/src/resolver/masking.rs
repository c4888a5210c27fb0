//! Terminal resolver applying classification policies to string values.

use std::any::Any;

use crate::error::Error;
use crate::policy::Classified;
use crate::shape::Shape;

use super::{BoxedValue, TypeResolver, TypeResolvers, LOWEST_PRIORITY};

/// Masks `String` and `Vec<String>` values whose declaration site carries a
/// [`Classified`] annotation, using the policy captured by that annotation.
///
/// This resolver is terminal: it never recurses. It sits one step above the
/// cascade catch-all so that a site carrying both a classification and the
/// cascade marker is masked rather than expanded.
pub struct MaskingTypeResolver;

impl TypeResolver for MaskingTypeResolver {
    fn resolve(
        &self,
        value: BoxedValue,
        shape: &Shape,
        _chain: &TypeResolvers,
    ) -> Result<BoxedValue, Error> {
        let Some(classified) = shape.declared::<Classified>() else {
            return Err(Error::ShapeMismatch {
                resolver: "MaskingTypeResolver",
            });
        };
        let policy = classified.policy();
        let value = match value.downcast::<String>() {
            Ok(text) => return Ok(Box::new(policy.apply_to(&text))),
            Err(other) => other,
        };
        match value.downcast::<Vec<String>>() {
            Ok(texts) => Ok(Box::new(
                texts.iter().map(|text| policy.apply_to(text)).collect::<Vec<String>>(),
            )),
            Err(_) => Err(Error::TypeMismatch { expected: "String" }),
        }
    }

    fn support(&self, value: &(dyn Any + Send + Sync), shape: &Shape) -> bool {
        shape.declared::<Classified>().is_some()
            && (value.is::<String>() || value.is::<Vec<String>>())
    }

    fn order(&self) -> i32 {
        LOWEST_PRIORITY - 1
    }
}

#[cfg(test)]
mod tests {
    use crate::classification::Secret;
    use crate::policy::Classified;
    use crate::resolver::TypeResolvers;
    use crate::shape::Shape;

    fn classified_shape() -> Shape {
        Shape::concrete().with_annotation(Classified::of::<Secret>())
    }

    #[test]
    fn classified_string_is_masked() {
        let chain = TypeResolvers::builtin();
        let resolved = chain
            .resolve(Box::new("hunter2".to_owned()), &classified_shape())
            .expect("masking never fails on strings");
        assert_eq!(
            *resolved.downcast::<String>().expect("string in, string out"),
            "[MASKED]"
        );
    }

    #[test]
    fn classified_string_vec_is_masked_element_wise() {
        let chain = TypeResolvers::builtin();
        let values = vec!["a".to_owned(), "b".to_owned()];
        let resolved = chain
            .resolve(Box::new(values), &classified_shape())
            .expect("masking never fails on string vecs");
        let resolved = resolved.downcast::<Vec<String>>().expect("vec in, vec out");
        assert_eq!(*resolved, vec!["[MASKED]".to_owned(), "[MASKED]".to_owned()]);
    }

    #[test]
    fn classified_non_string_passes_through() {
        let chain = TypeResolvers::builtin();
        let resolved = chain
            .resolve(Box::new(99_u64), &classified_shape())
            .expect("unsupported values fall through to identity");
        assert_eq!(*resolved.downcast::<u64>().expect("u64 in, u64 out"), 99);
    }
}
