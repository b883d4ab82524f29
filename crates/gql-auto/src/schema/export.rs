//! Export of schema nodes to async-graphql's dynamic schema.

use std::collections::HashSet;

use async_graphql::dynamic::{Scalar, SchemaBuilder};
use tracing::trace;

use super::SchemaType;

/// Registers schema nodes with a [`SchemaBuilder`].
///
/// Every named object, input object and non-builtin scalar reachable from
/// the registered types is registered exactly once, by name. Self-referential
/// objects terminate because a name is marked before its fields are walked.
#[derive(Debug, Default)]
pub struct TypeExporter {
    visited: HashSet<String>,
}

impl TypeExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a type with this name has been registered.
    pub fn is_registered(&self, name: &str) -> bool {
        self.visited.contains(name)
    }

    /// Registers `ty` and every type reachable from it.
    pub fn register(&mut self, builder: SchemaBuilder, ty: &SchemaType) -> SchemaBuilder {
        match ty.named_type() {
            SchemaType::Scalar(scalar) => {
                if scalar.is_builtin() || !self.visited.insert(scalar.name().to_string()) {
                    return builder;
                }
                trace!(scalar = %scalar.name(), "Registering scalar");
                builder.register(Scalar::new(scalar.name()))
            }
            SchemaType::Object(object) => {
                if !self.visited.insert(object.name().to_string()) {
                    return builder;
                }
                trace!(object = %object.name(), "Registering object");
                let mut builder = builder.register(object.to_dynamic());
                for field in object.fields().values() {
                    builder = self.register(builder, &field.ty);
                    for argument in field.args.values() {
                        builder = self.register(builder, &argument.ty);
                    }
                }
                builder
            }
            SchemaType::InputObject(input) => {
                if !self.visited.insert(input.name().to_string()) {
                    return builder;
                }
                trace!(input = %input.name(), "Registering input object");
                let mut builder = builder.register(input.to_dynamic());
                for field in input.fields().values() {
                    builder = self.register(builder, &field.ty);
                }
                builder
            }
            SchemaType::List(_) | SchemaType::NonNull(_) => builder,
        }
    }
}
