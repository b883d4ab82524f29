//! Output objects and their fields.

use std::fmt;
use std::sync::Arc;

use async_graphql::Value;
use async_graphql::dynamic::{self, FieldFuture, TypeRef};
use indexmap::IndexMap;
use parking_lot::RwLock;

use super::{Argument, Resolver, SchemaType};

/// Descriptor of an object before it is constructed.
///
/// Object options are applied to this descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectConfig {
    pub name: String,
    pub description: Option<String>,
}

impl ObjectConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}

/// A field of an output object.
#[derive(Clone)]
pub struct Field {
    /// External field name.
    pub name: String,
    pub ty: SchemaType,
    pub description: Option<String>,
    pub deprecation_reason: Option<String>,
    pub args: IndexMap<String, Argument>,
    /// Value extraction. `None` reads the parent object by `name`.
    pub resolver: Option<Resolver>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: SchemaType) -> Self {
        Self {
            name: name.into(),
            ty,
            description: None,
            deprecation_reason: None,
            args: IndexMap::new(),
            resolver: None,
        }
    }

    /// Sets the resolver.
    #[must_use]
    pub fn with_resolver(mut self, resolver: Resolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Converts to an async-graphql dynamic field.
    pub fn to_dynamic(&self) -> dynamic::Field {
        let resolver = self
            .resolver
            .clone()
            .unwrap_or_else(|| Resolver::field([self.name.clone()]));

        let mut field =
            dynamic::Field::new(&self.name, self.ty.to_type_ref(), move |ctx| resolver.call(ctx));
        if let Some(description) = &self.description {
            field = field.description(description);
        }
        if let Some(reason) = &self.deprecation_reason {
            field = field.deprecation(Some(reason.as_str()));
        }
        for (name, argument) in &self.args {
            field = field.argument(argument.to_input_value(name));
        }
        field
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("ty", &self.ty.to_string())
            .field("description", &self.description)
            .field("deprecation_reason", &self.deprecation_reason)
            .field("args", &self.args)
            .field("resolver", &self.resolver)
            .finish()
    }
}

struct ObjectInner {
    name: String,
    description: Option<String>,
    fields: RwLock<IndexMap<String, Field>>,
}

/// A shared output object.
///
/// Clones refer to the same object. Fields may be added after construction,
/// which is how self-referential types are completed after the object has
/// been cached.
#[derive(Clone)]
pub struct ObjectType {
    inner: Arc<ObjectInner>,
}

impl ObjectType {
    /// Creates an empty object from its descriptor.
    pub fn new(config: ObjectConfig) -> Self {
        Self {
            inner: Arc::new(ObjectInner {
                name: config.name,
                description: config.description,
                fields: RwLock::new(IndexMap::new()),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn description(&self) -> Option<&str> {
        self.inner.description.as_deref()
    }

    /// Snapshot of the field set, in insertion order.
    pub fn fields(&self) -> IndexMap<String, Field> {
        self.inner.fields.read().clone()
    }

    /// Looks up a field by external name.
    pub fn field(&self, name: &str) -> Option<Field> {
        self.inner.fields.read().get(name).cloned()
    }

    pub fn field_count(&self) -> usize {
        self.inner.fields.read().len()
    }

    /// Whether both handles refer to the same object.
    pub fn ptr_eq(&self, other: &ObjectType) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Inserts a field under its name, returning the field it replaced.
    ///
    /// The write guard is released on every exit path, including unwinding.
    pub(crate) fn insert_field(&self, field: Field) -> Option<Field> {
        let mut fields = self.inner.fields.write();
        fields.insert(field.name.clone(), field)
    }

    /// Converts to an async-graphql dynamic object.
    ///
    /// GraphQL requires at least one field per object; an object without
    /// fields gets a nullable `_placeholder` field.
    pub fn to_dynamic(&self) -> dynamic::Object {
        let mut object = dynamic::Object::new(self.name());
        if let Some(description) = self.description() {
            object = object.description(description);
        }

        let fields = self.inner.fields.read();
        for field in fields.values() {
            object = object.field(field.to_dynamic());
        }

        if fields.is_empty() {
            let placeholder =
                dynamic::Field::new("_placeholder", TypeRef::named(TypeRef::STRING), |_ctx| {
                    FieldFuture::new(async { Ok(None::<Value>) })
                })
                .description("Placeholder field - type has no defined fields");
            object = object.field(placeholder);
        }
        object
    }
}

impl fmt::Debug for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field types may refer back to this object; print names only.
        let fields = self.inner.fields.read();
        f.debug_struct("ObjectType")
            .field("name", &self.inner.name)
            .field("description", &self.inner.description)
            .field("fields", &fields.keys().collect::<Vec<_>>())
            .finish()
    }
}
