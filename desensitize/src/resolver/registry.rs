//! The ordered resolver chain.

use std::sync::{Arc, OnceLock};

use tracing::trace;

use crate::error::Error;
use crate::shape::Shape;

use super::{
    BoxedValue, CascadeTypeResolver, MaskingTypeResolver, TypeResolver, TypeVariableResolver,
    WildcardTypeResolver,
};

/// An immutable, ordered set of resolvers with a single entry point.
///
/// The chain is sorted once at construction: ascending [`order`], with ties
/// broken by registration sequence. Every `resolve` call walks the chain and
/// hands the value to the first resolver whose `support` returns true; when
/// none matches, the value passes through unchanged: an unannotated position
/// is simply not sensitive.
///
/// [`order`]: TypeResolver::order
pub struct TypeResolvers {
    chain: Vec<Arc<dyn TypeResolver>>,
}

impl TypeResolvers {
    /// A chain holding exactly the given resolvers.
    ///
    /// The slice order is the registration sequence used to break priority
    /// ties.
    #[must_use]
    pub fn new(resolvers: Vec<Arc<dyn TypeResolver>>) -> Self {
        let mut chain = resolvers;
        // sort_by_key is stable, so equal orders keep registration sequence.
        chain.sort_by_key(|resolver| resolver.order());
        Self { chain }
    }

    /// The built-in chain: wildcard, type variable, masking, cascade.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            Arc::new(WildcardTypeResolver),
            Arc::new(TypeVariableResolver),
            Arc::new(MaskingTypeResolver),
            Arc::new(CascadeTypeResolver),
        ])
    }

    /// The built-in chain extended with project-specific resolvers.
    #[must_use]
    pub fn with_additional(extra: Vec<Arc<dyn TypeResolver>>) -> Self {
        let mut resolvers = Self::builtin().chain;
        resolvers.extend(extra);
        Self::new(resolvers)
    }

    /// The process-wide chain used by [`crate::desensitize`].
    ///
    /// Built on first use and immutable for the process lifetime.
    #[must_use]
    pub fn global() -> &'static TypeResolvers {
        static GLOBAL: OnceLock<TypeResolvers> = OnceLock::new();
        GLOBAL.get_or_init(TypeResolvers::builtin)
    }

    /// Resolves `value` against `shape` through this chain.
    ///
    /// Safe to call re-entrantly from inside a resolver's own `resolve`,
    /// including from worker threads.
    ///
    /// # Errors
    ///
    /// Propagates the first failure raised anywhere in the traversal.
    pub fn resolve(&self, value: BoxedValue, shape: &Shape) -> Result<BoxedValue, Error> {
        match self
            .chain
            .iter()
            .find(|resolver| resolver.support(value.as_ref(), shape))
        {
            Some(resolver) => {
                trace!(order = resolver.order(), "dispatching value to resolver");
                resolver.resolve(value, shape, self)
            }
            None => {
                trace!("no resolver matched; passing value through");
                Ok(value)
            }
        }
    }
}

impl Default for TypeResolvers {
    fn default() -> Self {
        Self::builtin()
    }
}
