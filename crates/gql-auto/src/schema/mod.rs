//! Schema node model.
//!
//! The engine builds these nodes and exports them to async-graphql's dynamic
//! schema. Object and input-object nodes are shared handles: every clone
//! refers to the same node, and equality between them is identity.
//!
//! ## Components
//!
//! - [`SchemaType`] - Any schema type: scalar, object, input object, list or non-null
//! - [`ObjectType`] - Output object with an ordered, lock-guarded field set
//! - [`InputObjectType`] - Immutable input object
//! - [`Resolver`] - Field value extraction
//! - [`TypeExporter`] - Registers nodes with a `dynamic::SchemaBuilder`

mod export;
mod input;
mod object;
mod resolver;

use std::borrow::Cow;
use std::fmt;

use async_graphql::dynamic::TypeRef;

pub use export::TypeExporter;
pub use input::{Argument, InputField, InputObjectType};
pub use object::{Field, ObjectConfig, ObjectType};
pub use resolver::Resolver;

/// A scalar type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Boolean,
    String,
    Int,
    Float,
    DateTime,
    /// An application-defined scalar, registered on export.
    Custom(Cow<'static, str>),
}

impl ScalarType {
    /// GraphQL name of the scalar.
    pub fn name(&self) -> &str {
        match self {
            Self::Boolean => TypeRef::BOOLEAN,
            Self::String => TypeRef::STRING,
            Self::Int => TypeRef::INT,
            Self::Float => TypeRef::FLOAT,
            Self::DateTime => "DateTime",
            Self::Custom(name) => name,
        }
    }

    /// Whether the scalar is built into every GraphQL schema.
    pub fn is_builtin(&self) -> bool {
        matches!(
            self,
            Self::Boolean | Self::String | Self::Int | Self::Float
        )
    }
}

/// A schema type.
#[derive(Debug, Clone)]
pub enum SchemaType {
    Scalar(ScalarType),
    Object(ObjectType),
    InputObject(InputObjectType),
    List(Box<SchemaType>),
    NonNull(Box<SchemaType>),
}

impl SchemaType {
    pub const BOOLEAN: SchemaType = SchemaType::Scalar(ScalarType::Boolean);
    pub const STRING: SchemaType = SchemaType::Scalar(ScalarType::String);
    pub const INT: SchemaType = SchemaType::Scalar(ScalarType::Int);
    pub const FLOAT: SchemaType = SchemaType::Scalar(ScalarType::Float);
    pub const DATE_TIME: SchemaType = SchemaType::Scalar(ScalarType::DateTime);

    /// A list of `element`.
    pub fn list(element: SchemaType) -> Self {
        Self::List(Box::new(element))
    }

    /// A non-null `inner`.
    pub fn non_null(inner: SchemaType) -> Self {
        Self::NonNull(Box::new(inner))
    }

    /// An application-defined scalar.
    pub fn custom_scalar(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Scalar(ScalarType::Custom(name.into()))
    }

    /// Kind of node, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Object(_) => "object",
            Self::InputObject(_) => "input object",
            Self::List(_) => "list",
            Self::NonNull(_) => "non-null",
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// The named type under any list and non-null wrappers.
    pub fn named_type(&self) -> &SchemaType {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.named_type(),
            named => named,
        }
    }

    /// Converts to an async-graphql type reference.
    pub fn to_type_ref(&self) -> TypeRef {
        match self {
            Self::Scalar(scalar) => TypeRef::named(scalar.name().to_string()),
            Self::Object(object) => TypeRef::named(object.name().to_string()),
            Self::InputObject(input) => TypeRef::named(input.name().to_string()),
            Self::List(inner) => TypeRef::List(Box::new(inner.to_type_ref())),
            Self::NonNull(inner) => TypeRef::NonNull(Box::new(inner.to_type_ref())),
        }
    }
}

impl PartialEq for SchemaType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Scalar(a), Self::Scalar(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a.ptr_eq(b),
            (Self::InputObject(a), Self::InputObject(b)) => a.ptr_eq(b),
            (Self::List(a), Self::List(b)) | (Self::NonNull(a), Self::NonNull(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => f.write_str(scalar.name()),
            Self::Object(object) => f.write_str(object.name()),
            Self::InputObject(input) => f.write_str(input.name()),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

impl From<ScalarType> for SchemaType {
    fn from(scalar: ScalarType) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<ObjectType> for SchemaType {
    fn from(object: ObjectType) -> Self {
        Self::Object(object)
    }
}

impl From<InputObjectType> for SchemaType {
    fn from(input: InputObjectType) -> Self {
        Self::InputObject(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(SchemaType::STRING.to_string(), "String");
        assert_eq!(SchemaType::list(SchemaType::INT).to_string(), "[Int]");
        assert_eq!(
            SchemaType::non_null(SchemaType::list(SchemaType::non_null(SchemaType::BOOLEAN)))
                .to_string(),
            "[Boolean!]!"
        );
        assert_eq!(SchemaType::DATE_TIME.to_string(), "DateTime");
    }

    #[test]
    fn test_structural_equality_for_wrappers() {
        assert_eq!(
            SchemaType::non_null(SchemaType::STRING),
            SchemaType::non_null(SchemaType::STRING)
        );
        assert_ne!(SchemaType::non_null(SchemaType::STRING), SchemaType::STRING);
        assert_ne!(SchemaType::list(SchemaType::INT), SchemaType::INT);
    }

    #[test]
    fn test_objects_compare_by_identity() {
        let a = ObjectType::new(ObjectConfig::new("Person"));
        let b = ObjectType::new(ObjectConfig::new("Person"));
        assert_eq!(SchemaType::from(a.clone()), SchemaType::from(a.clone()));
        assert_ne!(SchemaType::from(a), SchemaType::from(b));
    }

    #[test]
    fn test_type_ref() {
        let ty = SchemaType::non_null(SchemaType::list(SchemaType::STRING));
        assert!(matches!(ty.to_type_ref(), TypeRef::NonNull(inner) if matches!(*inner, TypeRef::List(_))));
        assert_eq!(ty.named_type(), &SchemaType::STRING);
    }

    #[test]
    fn test_builtin_scalars() {
        assert!(ScalarType::Int.is_builtin());
        assert!(!ScalarType::DateTime.is_builtin());
        assert!(!ScalarType::Custom("JSON".into()).is_builtin());
    }
}
