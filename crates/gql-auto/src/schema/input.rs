//! Arguments and input objects.

use std::fmt;
use std::sync::Arc;

use async_graphql::Value;
use async_graphql::dynamic::{self, InputValue};
use indexmap::IndexMap;

use super::SchemaType;

/// An argument of a field.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub ty: SchemaType,
    pub description: Option<String>,
    pub default_value: Option<Value>,
}

/// A field of an input object. Same shape as an argument.
pub type InputField = Argument;

impl Argument {
    pub fn new(ty: SchemaType) -> Self {
        Self {
            ty,
            description: None,
            default_value: None,
        }
    }

    /// Converts to an async-graphql input value named `name`.
    pub fn to_input_value(&self, name: &str) -> InputValue {
        let mut input = InputValue::new(name, self.ty.to_type_ref());
        if let Some(description) = &self.description {
            input = input.description(description);
        }
        if let Some(default_value) = &self.default_value {
            input = input.default_value(default_value.clone());
        }
        input
    }
}

struct InputObjectInner {
    name: String,
    description: Option<String>,
    fields: IndexMap<String, InputField>,
}

/// A shared, immutable input object.
#[derive(Clone)]
pub struct InputObjectType {
    inner: Arc<InputObjectInner>,
}

impl InputObjectType {
    pub fn new(name: impl Into<String>, fields: IndexMap<String, InputField>) -> Self {
        Self {
            inner: Arc::new(InputObjectInner {
                name: name.into(),
                description: None,
                fields,
            }),
        }
    }

    /// Creates an input object with a description.
    pub fn with_description(
        name: impl Into<String>,
        description: impl Into<String>,
        fields: IndexMap<String, InputField>,
    ) -> Self {
        Self {
            inner: Arc::new(InputObjectInner {
                name: name.into(),
                description: Some(description.into()),
                fields,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn description(&self) -> Option<&str> {
        self.inner.description.as_deref()
    }

    pub fn fields(&self) -> &IndexMap<String, InputField> {
        &self.inner.fields
    }

    /// Whether both handles refer to the same input object.
    pub fn ptr_eq(&self, other: &InputObjectType) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Converts to an async-graphql dynamic input object.
    pub fn to_dynamic(&self) -> dynamic::InputObject {
        let mut input = dynamic::InputObject::new(self.name());
        if let Some(description) = self.description() {
            input = input.description(description);
        }
        for (name, field) in self.fields() {
            input = input.field(field.to_input_value(name));
        }
        input
    }
}

impl fmt::Debug for InputObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputObjectType")
            .field("name", &self.inner.name)
            .field("description", &self.inner.description)
            .field("fields", &self.inner.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}
