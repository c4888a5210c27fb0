//! Resolver for cascade-marked composite values.

use std::any::Any;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::trace;

use crate::error::Error;
use crate::instance;
use crate::schema::{Cascade, FieldDescriptor, TypeSchema};
use crate::shape::Shape;

use super::{BoxedValue, TypeResolver, TypeResolvers, LOWEST_PRIORITY};

/// Deep-copies a composite value, re-resolving every eligible field.
///
/// Only declaration sites that *directly* carry the [`Cascade`] marker are
/// cascaded; a composite value behind an unmarked site passes through
/// untouched no matter what its type looks like. The input is never mutated:
/// a blank instance of the value's exact runtime type is obtained from the
/// instance-creation service, every non-frozen field holding a value is read
/// from the original, re-dispatched against its own declared shape, and
/// written into the copy. Frozen fields and empty `Option` fields keep the
/// copy's constructed default.
///
/// Field resolution fans out across the rayon pool (under the `parallel`
/// feature) and fully joins before any write touches the copy; the copy never
/// escapes until every field is in place.
///
/// This is the catch-all of the chain and must never preempt a more specific
/// resolver, so it runs at the lowest priority.
pub struct CascadeTypeResolver;

impl TypeResolver for CascadeTypeResolver {
    fn resolve(
        &self,
        value: BoxedValue,
        shape: &Shape,
        chain: &TypeResolvers,
    ) -> Result<BoxedValue, Error> {
        let Some(marker) = shape.declared::<Cascade>() else {
            return Err(Error::ShapeMismatch {
                resolver: "CascadeTypeResolver",
            });
        };
        let schema = marker.schema();
        if value.as_ref().type_id() != schema.type_id {
            return Err(Error::TypeMismatch {
                expected: schema.type_name,
            });
        }
        trace!(
            type_name = schema.type_name,
            fields = schema.fields.len(),
            "cascading into composite value"
        );

        let mut copy = instance::create(schema)?;
        let original = value.as_ref();

        // Fan out, join, then write: the copy is populated only after every
        // field has resolved, and returned only after every write landed.
        #[cfg(feature = "parallel")]
        let resolved_fields: Vec<Option<(&FieldDescriptor, BoxedValue)>> = schema
            .fields
            .par_iter()
            .map(|field| resolve_field(original, field, schema, chain))
            .collect::<Result<_, Error>>()?;
        #[cfg(not(feature = "parallel"))]
        let resolved_fields: Vec<Option<(&FieldDescriptor, BoxedValue)>> = schema
            .fields
            .iter()
            .map(|field| resolve_field(original, field, schema, chain))
            .collect::<Result<_, Error>>()?;

        for (field, resolved) in resolved_fields.into_iter().flatten() {
            (field.set)(copy.as_mut(), resolved)?;
        }
        Ok(copy)
    }

    fn support(&self, _value: &(dyn Any + Send + Sync), shape: &Shape) -> bool {
        shape.declared::<Cascade>().is_some()
    }

    fn order(&self) -> i32 {
        LOWEST_PRIORITY
    }
}

/// Resolves one field of the original against the field's declared shape.
///
/// Returns `Ok(None)` for fields the cascade skips: frozen fields and fields
/// whose current value is absent.
fn resolve_field<'schema>(
    original: &(dyn Any + Send + Sync),
    field: &'schema FieldDescriptor,
    schema: &'schema TypeSchema,
    chain: &TypeResolvers,
) -> Result<Option<(&'schema FieldDescriptor, BoxedValue)>, Error> {
    if field.frozen {
        return Ok(None);
    }
    let Some(current) = (field.get)(original)? else {
        return Ok(None);
    };
    let resolved = chain
        .resolve(current, &field.shape)
        .map_err(|source| Error::Field {
            type_name: schema.type_name,
            field: field.name,
            source: Box::new(source),
        })?;
    Ok(Some((field, resolved)))
}
