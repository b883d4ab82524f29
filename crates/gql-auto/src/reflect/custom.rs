//! Custom schema mappings.
//!
//! A type that should not be expanded field by field implements
//! [`GraphqlTyped`] and records the capability in its [`TypeInfo`] with
//! [`CustomMapping::typed`]. If it also implements [`GraphqlResolver`],
//! [`CustomMapping::resolved`] makes its resolver replace the default
//! name-based field read wherever the type appears as a field.
//!
//! ```ignore
//! struct Money { cents: i64 }
//!
//! impl GraphqlTyped for Money {
//!     fn graphql_type() -> SchemaType {
//!         SchemaType::FLOAT
//!     }
//! }
//!
//! impl Reflect for Money {
//!     fn type_info() -> TypeInfo {
//!         TypeInfo::opaque("Money").with_custom(CustomMapping::typed::<Self>())
//!     }
//! }
//! ```
//!
//! [`TypeInfo`]: super::TypeInfo

use std::fmt;

use async_graphql::Value;
use async_graphql::dynamic::ResolverContext;

use crate::schema::SchemaType;

/// Types that provide their own schema type.
pub trait GraphqlTyped {
    /// Returns the schema type that represents `Self`.
    fn graphql_type() -> SchemaType;
}

/// Types that provide their own field value extraction.
pub trait GraphqlResolver {
    /// Extracts the value of a field of this type from the resolver context.
    fn graphql_resolve(ctx: &ResolverContext<'_>) -> async_graphql::Result<Option<Value>>;
}

/// Resolver function supplied by a [`GraphqlResolver`] type.
pub type CustomResolveFn = fn(&ResolverContext<'_>) -> async_graphql::Result<Option<Value>>;

/// A type's custom schema mapping, captured once in its description.
#[derive(Clone, Copy)]
pub struct CustomMapping {
    schema_type: fn() -> SchemaType,
    resolver: Option<CustomResolveFn>,
}

impl CustomMapping {
    /// Mapping from an explicit schema type constructor.
    pub fn new(schema_type: fn() -> SchemaType) -> Self {
        Self {
            schema_type,
            resolver: None,
        }
    }

    /// Mapping for a type implementing [`GraphqlTyped`].
    pub fn typed<T: GraphqlTyped>() -> Self {
        Self::new(T::graphql_type)
    }

    /// Mapping for a type implementing both capabilities.
    pub fn resolved<T: GraphqlTyped + GraphqlResolver>() -> Self {
        Self::typed::<T>().with_resolver(T::graphql_resolve)
    }

    /// Sets the field resolver.
    #[must_use]
    pub fn with_resolver(mut self, resolver: CustomResolveFn) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// The schema type the mapped type is represented as.
    pub fn schema_type(&self) -> SchemaType {
        (self.schema_type)()
    }

    pub fn resolver(&self) -> Option<CustomResolveFn> {
        self.resolver
    }
}

impl fmt::Debug for CustomMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomMapping")
            .field("schema_type", &self.schema_type())
            .field("has_resolver", &self.resolver.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::{Reflect, TypeInfo};

    struct Money;

    impl GraphqlTyped for Money {
        fn graphql_type() -> SchemaType {
            SchemaType::FLOAT
        }
    }

    impl GraphqlResolver for Money {
        fn graphql_resolve(_ctx: &ResolverContext<'_>) -> async_graphql::Result<Option<Value>> {
            Ok(Some(Value::from(150)))
        }
    }

    impl Reflect for Money {
        fn type_info() -> TypeInfo {
            TypeInfo::opaque("Money").with_custom(CustomMapping::resolved::<Self>())
        }
    }

    #[test]
    fn test_typed_mapping() {
        let mapping = CustomMapping::typed::<Money>();
        assert_eq!(mapping.schema_type(), SchemaType::FLOAT);
        assert!(mapping.resolver().is_none());
    }

    #[test]
    fn test_resolved_mapping_through_pointer() {
        let info = <Option<Money>>::type_info();
        assert!(info.custom().is_none());
        let mapping = info.custom_through_pointer().unwrap();
        assert!(mapping.resolver().is_some());
    }
}
