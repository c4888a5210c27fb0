//! Static descriptions of annotated type positions.
//!
//! A [`Shape`] stands for a *declaration site*, not a runtime value: the type
//! written on a field, on a wildcard bound, or at the top-level entry point,
//! together with the annotation values declared there. Resolvers dispatch on
//! the pair (runtime value, shape), so the same runtime type can be treated
//! differently at two declaration sites that carry different annotations.
//!
//! Three kinds of shape exist:
//!
//! - **concrete**: an ordinary type position;
//! - **wildcard**: an unknown type constrained by upper and/or lower bound
//!   sub-shapes;
//! - **variable**: a bounded type parameter, constrained by bound sub-shapes.
//!
//! Shapes are immutable once built and cheap to clone: annotation values are
//! shared behind `Arc`.

use std::any::Any;
use std::sync::Arc;

use crate::schema::{Cascade, Reflective};

/// An annotated type position.
#[derive(Clone, Default)]
pub struct Shape {
    kind: ShapeKind,
    annotations: Vec<Arc<dyn Any + Send + Sync>>,
}

#[derive(Clone, Default)]
enum ShapeKind {
    #[default]
    Concrete,
    Wildcard { upper: Vec<Shape>, lower: Vec<Shape> },
    Variable { bounds: Vec<Shape> },
}

impl Shape {
    /// A plain concrete type position with no annotations.
    #[must_use]
    pub fn concrete() -> Self {
        Self::default()
    }

    /// A wildcard type position with the given upper and lower bound shapes.
    #[must_use]
    pub fn wildcard(upper: Vec<Shape>, lower: Vec<Shape>) -> Self {
        Self {
            kind: ShapeKind::Wildcard { upper, lower },
            annotations: Vec::new(),
        }
    }

    /// A bounded type-variable position with the given bound shapes.
    #[must_use]
    pub fn variable(bounds: Vec<Shape>) -> Self {
        Self {
            kind: ShapeKind::Variable { bounds },
            annotations: Vec::new(),
        }
    }

    /// A concrete shape carrying the cascade marker for `T`.
    ///
    /// This is the shape the derive macro attaches to `#[sensitive(cascade)]`
    /// fields and the one [`crate::desensitize`] uses for the root value.
    #[must_use]
    pub fn cascade<T: Reflective>() -> Self {
        Self::concrete().with_annotation(Cascade::of::<T>())
    }

    /// Attaches an annotation value to this declaration site.
    #[must_use]
    pub fn with_annotation<A: Any + Send + Sync>(mut self, annotation: A) -> Self {
        self.annotations.push(Arc::new(annotation));
        self
    }

    /// Looks up an annotation of type `A` declared *directly* on this shape.
    ///
    /// Annotations on bound sub-shapes are not visible here; each declaration
    /// site owns exactly its own annotations. When the same annotation type
    /// was attached twice, the first one wins.
    #[must_use]
    pub fn declared<A: Any>(&self) -> Option<&A> {
        self.annotations
            .iter()
            .find_map(|annotation| annotation.as_ref().downcast_ref::<A>())
    }

    /// True when this shape is a wildcard position.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        matches!(self.kind, ShapeKind::Wildcard { .. })
    }

    /// The wildcard's upper and lower bound shapes, if this is a wildcard.
    #[must_use]
    pub fn wildcard_bounds(&self) -> Option<(&[Shape], &[Shape])> {
        match &self.kind {
            ShapeKind::Wildcard { upper, lower } => Some((upper, lower)),
            _ => None,
        }
    }

    /// True when this shape is a bounded type-variable position.
    #[must_use]
    pub fn is_variable(&self) -> bool {
        matches!(self.kind, ShapeKind::Variable { .. })
    }

    /// The variable's bound shapes, if this is a type variable.
    #[must_use]
    pub fn variable_bounds(&self) -> Option<&[Shape]> {
        match &self.kind {
            ShapeKind::Variable { bounds } => Some(bounds),
            _ => None,
        }
    }
}

impl std::fmt::Debug for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("Shape");
        match &self.kind {
            ShapeKind::Concrete => debug.field("kind", &"concrete"),
            ShapeKind::Wildcard { upper, lower } => debug
                .field("kind", &"wildcard")
                .field("upper", &upper.len())
                .field("lower", &lower.len()),
            ShapeKind::Variable { bounds } => debug
                .field("kind", &"variable")
                .field("bounds", &bounds.len()),
        };
        debug.field("annotations", &self.annotations.len()).finish()
    }
}
