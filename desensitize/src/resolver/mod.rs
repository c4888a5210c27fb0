//! The resolver contract and the chain that dispatches over it.
//!
//! A resolver pairs an applicability predicate (`support`) with a transform
//! (`resolve`) and a priority (`order`). The chain evaluates resolvers in
//! ascending order and hands the value to the first one that claims it;
//! structural resolvers (wildcard, variable, cascade) recurse back into the
//! chain for their sub-parts, terminal resolvers (masking) return a
//! transformed scalar.
//!
//! Resolvers are stateless, read-only singletons; resolution is a pure
//! function of the value and its shape.

mod cascade;
mod masking;
mod registry;
mod variable;
mod wildcard;

use std::any::Any;

pub use cascade::CascadeTypeResolver;
pub use masking::MaskingTypeResolver;
pub use registry::TypeResolvers;
pub use variable::TypeVariableResolver;
pub use wildcard::WildcardTypeResolver;

use crate::error::Error;
use crate::shape::Shape;

/// A type-erased runtime value travelling through the chain.
///
/// Values are owned while they move: a resolver consumes the current value
/// and returns the transformed one. `Send + Sync` lets the cascade fan field
/// values out across worker threads.
pub type BoxedValue = Box<dyn Any + Send + Sync>;

/// Order of the most specific resolvers. Lower order wins.
pub const HIGHEST_PRIORITY: i32 = i32::MIN;

/// Order of catch-all resolvers.
pub const LOWEST_PRIORITY: i32 = i32::MAX;

/// A strategy for resolving a value against its annotated shape.
///
/// Implementations must be stateless: `resolve` may be re-entered from worker
/// threads while an outer resolution of the same resolver is still running.
pub trait TypeResolver: Send + Sync {
    /// Transforms `value` according to `shape`.
    ///
    /// Recursive resolution of sub-parts goes back through `chain`, so
    /// project-specific resolvers in the same chain see nested values too.
    ///
    /// # Errors
    ///
    /// Any error aborts the whole top-level resolution; no partial result is
    /// ever returned.
    fn resolve(&self, value: BoxedValue, shape: &Shape, chain: &TypeResolvers)
        -> Result<BoxedValue, Error>;

    /// True when this resolver applies to the (value, shape) pair.
    fn support(&self, value: &(dyn Any + Send + Sync), shape: &Shape) -> bool;

    /// Priority of this resolver; lower values are consulted first. Ties are
    /// broken by registration order.
    fn order(&self) -> i32;
}
