//! The instance-creation service.
//!
//! Cascading resolution needs a blank instance of the value's exact runtime
//! type to populate. By default that instance comes from the constructor baked
//! into the type's schema (`Default::default()` under the derive). Types
//! without a usable default (external handles, invariant-carrying structs)
//! register a creation strategy here instead, keyed by runtime type.
//!
//! A registered creator always wins over the schema constructor. When neither
//! exists, resolution of that subtree fails with [`Error::Instantiation`] and
//! the whole top-level call aborts; no placeholder object is substituted.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::error::Error;
use crate::resolver::BoxedValue;
use crate::schema::TypeSchema;

type Creator = Arc<dyn Fn() -> BoxedValue + Send + Sync>;

static CREATORS: OnceLock<RwLock<HashMap<TypeId, Creator>>> = OnceLock::new();

fn creators() -> &'static RwLock<HashMap<TypeId, Creator>> {
    CREATORS.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Registers a creation strategy for `T`, overriding the schema constructor.
///
/// Meant to run once at startup, before the first resolve call touches `T`.
/// Registering again replaces the previous strategy.
pub fn register<T, F>(create: F)
where
    T: Any + Send + Sync,
    F: Fn() -> T + Send + Sync + 'static,
{
    creators()
        .write()
        .insert(TypeId::of::<T>(), Arc::new(move || Box::new(create())));
}

/// Builds a blank instance of the type described by `schema`.
pub(crate) fn create(schema: &TypeSchema) -> Result<BoxedValue, Error> {
    let registered = creators().read().get(&schema.type_id).cloned();
    if let Some(creator) = registered {
        return Ok(creator());
    }
    schema
        .construct
        .map(|construct| construct())
        .ok_or(Error::Instantiation {
            type_name: schema.type_name,
        })
}
