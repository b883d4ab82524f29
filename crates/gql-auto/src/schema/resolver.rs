//! Field value extraction.

use std::fmt;
use std::sync::Arc;

use async_graphql::dynamic::{FieldFuture, ResolverContext};
use async_graphql::{Name, Value};

use crate::reflect::CustomResolveFn;

type ResolveFn = dyn for<'a> Fn(ResolverContext<'a>) -> FieldFuture<'a> + Send + Sync;

/// Resolver attached to a field.
#[derive(Clone)]
pub struct Resolver(Arc<ResolveFn>);

impl Resolver {
    /// Wraps a resolver function.
    pub fn new<F>(f: F) -> Self
    where
        F: for<'a> Fn(ResolverContext<'a>) -> FieldFuture<'a> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Default resolver: reads the parent object by the first key present.
    ///
    /// Keys are tried in the order given; duplicates are dropped. A parent
    /// that is not an object, or has none of the keys, resolves to null.
    pub fn field(keys: impl IntoIterator<Item = String>) -> Self {
        let mut names: Vec<Name> = Vec::new();
        for key in keys {
            if !names.iter().any(|name| name.as_str() == key) {
                names.push(Name::new(key));
            }
        }

        Self::new(move |ctx| {
            let value = match ctx.parent_value.as_value() {
                Some(Value::Object(object)) => {
                    names.iter().find_map(|name| object.get(name).cloned())
                }
                _ => None,
            };
            FieldFuture::new(async move { Ok(value) })
        })
    }

    /// Resolver backed by a type's own [`GraphqlResolver`] capability.
    ///
    /// [`GraphqlResolver`]: crate::reflect::GraphqlResolver
    pub fn custom(resolve: CustomResolveFn) -> Self {
        Self::new(move |ctx| {
            let result = resolve(&ctx);
            FieldFuture::new(async move { result })
        })
    }

    /// Invokes the resolver.
    pub fn call<'a>(&self, ctx: ResolverContext<'a>) -> FieldFuture<'a> {
        (self.0)(ctx)
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Resolver(..)")
    }
}
