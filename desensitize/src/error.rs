//! Failure states of the resolution engine.
//!
//! Every variant is terminal: a failure anywhere in the graph aborts the whole
//! top-level resolve call, and no partially masked object is ever returned.
//! Nested failures are wrapped in [`Error::Field`] as they propagate, so the
//! top-level error names the chain of fields that led to the defect.

use thiserror::Error;

/// Errors raised while resolving a value against its annotated shape.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The instance-creation service had no way to build a blank instance of
    /// the target type: its schema declares no default constructor and no
    /// creator was registered for it.
    #[error("no constructor available for `{type_name}`; register one with `instance::register`")]
    Instantiation {
        /// Short name of the type that could not be instantiated.
        type_name: &'static str,
    },

    /// A field getter could not read the field from the source object.
    #[error("cannot read field `{type_name}.{field}`")]
    FieldRead {
        /// Type that declares the field.
        type_name: &'static str,
        /// Field name.
        field: &'static str,
    },

    /// A field setter could not write the resolved value into the copy,
    /// usually because the value's runtime type no longer matches the field.
    #[error("cannot write field `{type_name}.{field}`")]
    FieldWrite {
        /// Type that declares the field.
        type_name: &'static str,
        /// Field name.
        field: &'static str,
    },

    /// Resolving the value held by a field failed; the source error carries
    /// the rest of the path down to the defect.
    #[error("resolving field `{type_name}.{field}` failed")]
    Field {
        /// Type that declares the field.
        type_name: &'static str,
        /// Field name.
        field: &'static str,
        /// The nested failure.
        #[source]
        source: Box<Error>,
    },

    /// A value's exact runtime type did not match the type the caller or the
    /// shape promised.
    #[error("value does not have the expected runtime type `{expected}`")]
    TypeMismatch {
        /// The promised type.
        expected: &'static str,
    },

    /// A resolver's `resolve` was invoked with a shape kind its `support`
    /// would have rejected. The dispatcher never does this; it can only occur
    /// when a resolver is driven by hand.
    #[error("`{resolver}` was invoked with a shape kind it does not support")]
    ShapeMismatch {
        /// The resolver that rejected the shape.
        resolver: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn field_errors_chain_the_full_path() {
        let inner = Error::Instantiation { type_name: "Inner" };
        let outer = Error::Field {
            type_name: "Outer",
            field: "inner",
            source: Box::new(inner),
        };
        assert_eq!(outer.to_string(), "resolving field `Outer.inner` failed");

        let source = std::error::Error::source(&outer).expect("source should be present");
        assert!(source.to_string().contains("`Inner`"));
    }
}
