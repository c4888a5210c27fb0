//! Per-type schema descriptors: the field-introspection service.
//!
//! The engine never inspects a struct through runtime reflection. Instead,
//! every type that participates in cascading resolution carries a
//! [`TypeSchema`], an explicit descriptor enumerating its fields with typed
//! accessors and an optional blank-instance constructor. Schemas are normally
//! generated by `#[derive(Desensitize)]`, but nothing stops a hand-written
//! [`Reflective`] implementation from producing one.
//!
//! Accessors are plain function pointers over type-erased values:
//!
//! - a getter *clones* the field out of the source object (the source graph
//!   is read-only for the whole resolution), returning `Ok(None)` when an
//!   `Option` field holds no value;
//! - a setter downcasts the resolved value and writes it into the same-named
//!   field of the blank copy.
//!
//! Because the descriptor is generated inside the type's own crate it reaches
//! private fields naturally; visibility never restricts the engine.

use std::any::TypeId;

use crate::error::Error;
use crate::resolver::BoxedValue;

/// Reads a field's current value out of a type-erased source object.
///
/// Returns `Ok(None)` when the field is an `Option` holding `None`; the
/// cascade then leaves the copy's default in place.
pub type FieldGetter =
    fn(&(dyn std::any::Any + Send + Sync)) -> Result<Option<BoxedValue>, Error>;

/// Writes a resolved value into the same field of a type-erased copy.
pub type FieldSetter =
    fn(&mut (dyn std::any::Any + Send + Sync), BoxedValue) -> Result<(), Error>;

/// One named, typed slot of a composite type.
pub struct FieldDescriptor {
    /// Field name as written in the source.
    pub name: &'static str,
    /// Frozen fields are treated as immutable-by-design: the cascade neither
    /// reads nor writes them, so the copy keeps its constructed default.
    pub frozen: bool,
    /// The field's annotated declaration-site shape.
    pub shape: crate::shape::Shape,
    /// Reads the field from the original.
    pub get: FieldGetter,
    /// Writes the resolved value into the copy.
    pub set: FieldSetter,
}

/// The complete descriptor of a composite type, including inherited fields
/// when the implementor chooses to flatten them in.
pub struct TypeSchema {
    /// Short type name, used in error paths.
    pub type_name: &'static str,
    /// Exact runtime type this schema describes.
    pub type_id: TypeId,
    /// Builds a blank instance. `None` when the type opted out of default
    /// construction; an instance creator must then be registered at startup
    /// (see [`crate::instance`]).
    pub construct: Option<fn() -> BoxedValue>,
    /// All fields, in declaration order. Order carries no semantic weight:
    /// fields are resolved independently, possibly in parallel.
    pub fields: Vec<FieldDescriptor>,
}

/// A type that exposes its own [`TypeSchema`].
///
/// Implemented by `#[derive(Desensitize)]`; the returned reference must point
/// at a single schema instance for the whole process lifetime.
pub trait Reflective: std::any::Any + Send + Sync {
    /// The schema describing `Self`.
    fn schema() -> &'static TypeSchema;
}

/// The cascade marker annotation.
///
/// Declaring this on a shape opts that declaration site into recursive,
/// field-by-field resolution of its composite value. Cascading is strictly
/// opt-in and per-site: a type that cascades behind one field is still passed
/// through untouched behind another field that lacks the marker.
///
/// The marker carries the target type's schema accessor, resolved at compile
/// time by the derive; the cascade resolver still checks the value's exact
/// runtime type against the schema before touching any field.
#[derive(Clone, Copy)]
pub struct Cascade {
    target: fn() -> &'static TypeSchema,
}

impl Cascade {
    /// A cascade marker for declaration sites of type `T`.
    #[must_use]
    pub fn of<T: Reflective>() -> Self {
        Self { target: T::schema }
    }

    /// The schema of the type this marker cascades into.
    #[must_use]
    pub fn schema(&self) -> &'static TypeSchema {
        (self.target)()
    }
}
