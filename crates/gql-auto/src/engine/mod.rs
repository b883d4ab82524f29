//! The type-mapping engine.
//!
//! An [`Engine`] turns structural type descriptions into schema nodes. It
//! owns one [`TypeCache`]; clones of an engine share that cache, separate
//! engines never do.
//!
//! ## Entry points
//!
//! Each operation comes in a generic form taking a [`Reflect`] type and a
//! `*_of` form taking a [`TypeInfo`](crate::reflect::TypeInfo):
//!
//! - [`Engine::object`] - Output object for a record
//! - [`Engine::field`] - Field whose type is a record's object
//! - [`Engine::args`] / [`Engine::input_fields`] - Flat name to type maps
//! - [`Engine::input_object`] - Named input object
//! - [`Engine::array`] - List of an element type
//! - [`Engine::type_of`] - Schema type of any description
//!
//! The `must_*` forms panic with the error message instead of returning it,
//! for schemas assembled once at startup.
//!
//! ## Builds
//!
//! Builds on one engine (and its clones) are serialized by a re-entrant
//! lock, so another thread never sees an object whose fields are still being
//! added. When a build fails, every object it put in the cache is taken out
//! again and the next request starts from scratch.

mod args;
mod array;
mod cache;
mod object;
mod resolve;

use std::cell::RefCell;
use std::sync::Arc;

use async_graphql::dynamic::{Schema, SchemaBuilder};
use indexmap::IndexMap;
use parking_lot::ReentrantMutex;
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::options::SchemaOption;
use crate::reflect::Reflect;
use crate::schema::{Argument, Field, InputField, InputObjectType, ObjectType, SchemaType, TypeExporter};

pub use cache::TypeCache;

/// Type-mapping engine.
///
/// Build entry points may be called from several threads; calls on one
/// engine run one at a time and each returns only complete objects.
#[derive(Debug, Clone)]
pub struct Engine {
    cache: Arc<TypeCache>,
    config: Arc<EngineConfig>,
    builds: Arc<ReentrantMutex<RefCell<BuildScope>>>,
}

/// Objects registered by the outermost build in progress.
#[derive(Debug, Default)]
struct BuildScope {
    depth: usize,
    registered: Vec<(String, ObjectType)>,
}

/// Leaves one build level, also when the build unwinds.
struct DepthGuard<'a>(&'a RefCell<BuildScope>);

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        let mut scope = self.0.borrow_mut();
        scope.depth = scope.depth.saturating_sub(1);
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine with the default configuration and an empty cache.
    pub fn new() -> Self {
        Self {
            cache: Arc::new(TypeCache::new()),
            config: Arc::new(EngineConfig::default()),
            builds: Arc::default(),
        }
    }

    /// Creates an engine with the given configuration and an empty cache.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the configuration fails validation.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate().map_err(Error::InvalidConfig)?;
        Ok(Self {
            cache: Arc::new(TypeCache::new()),
            config: Arc::new(config),
            builds: Arc::default(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn cache(&self) -> &TypeCache {
        &self.cache
    }

    /// Runs a build step under the engine's build lock.
    ///
    /// Nested steps on the same thread re-enter the lock. If the outermost
    /// step fails, the objects registered during it are removed from the
    /// cache.
    pub(crate) fn scoped<T>(&self, build: impl FnOnce() -> Result<T>) -> Result<T> {
        let guard = self.builds.lock();
        let outermost = {
            let mut scope = guard.borrow_mut();
            if scope.depth == 0 {
                // Left over from a build that unwound.
                scope.registered.clear();
            }
            scope.depth += 1;
            scope.depth == 1
        };

        let depth = DepthGuard(&guard);
        let result = build();
        drop(depth);

        if outermost {
            let registered = std::mem::take(&mut guard.borrow_mut().registered);
            if result.is_err() && !registered.is_empty() {
                debug!(count = registered.len(), "Discarding objects of a failed build");
                for (key, object) in &registered {
                    self.cache.unregister(key, object);
                }
            }
        }
        result
    }

    /// Records an object registered by the current build.
    pub(crate) fn track(&self, key: &str, object: &ObjectType) {
        let guard = self.builds.lock();
        guard
            .borrow_mut()
            .registered
            .push((key.to_string(), object.clone()));
    }

    /// Builds the output object of `T`.
    pub fn object<T: Reflect + ?Sized>(&self, options: &[&dyn SchemaOption]) -> Result<ObjectType> {
        self.object_of(&T::type_info(), options)
    }

    /// Builds a field typed as the output object of `T`.
    pub fn field<T: Reflect + ?Sized>(&self, options: &[&dyn SchemaOption]) -> Result<Field> {
        self.field_of(&T::type_info(), options)
    }

    /// Builds the argument map of `T`.
    pub fn args<T: Reflect + ?Sized>(&self) -> Result<IndexMap<String, Argument>> {
        self.args_of(&T::type_info())
    }

    /// Builds the input-field map of `T`.
    pub fn input_fields<T: Reflect + ?Sized>(&self) -> Result<IndexMap<String, InputField>> {
        self.input_fields_of(&T::type_info())
    }

    /// Builds an input object named `name` from the fields of `T`.
    pub fn input_object<T: Reflect + ?Sized>(&self, name: &str) -> Result<InputObjectType> {
        self.input_object_of(name, &T::type_info())
    }

    /// Builds a list of `T`.
    pub fn array<T: Reflect + ?Sized>(&self, options: &[&dyn SchemaOption]) -> Result<SchemaType> {
        self.array_of(&T::type_info(), options)
    }

    /// Like [`Engine::object`], panicking on failure.
    ///
    /// # Panics
    ///
    /// Panics with the error message if the object cannot be built.
    pub fn must_object<T: Reflect + ?Sized>(&self, options: &[&dyn SchemaOption]) -> ObjectType {
        self.object::<T>(options).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Like [`Engine::field`], panicking on failure.
    ///
    /// # Panics
    ///
    /// Panics with the error message if the field cannot be built.
    pub fn must_field<T: Reflect + ?Sized>(&self, options: &[&dyn SchemaOption]) -> Field {
        self.field::<T>(options).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Like [`Engine::args`], panicking on failure.
    ///
    /// # Panics
    ///
    /// Panics with the error message if the arguments cannot be built.
    pub fn must_args<T: Reflect + ?Sized>(&self) -> IndexMap<String, Argument> {
        self.args::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    /// Like [`Engine::input_object`], panicking on failure.
    ///
    /// # Panics
    ///
    /// Panics with the error message if the input object cannot be built.
    pub fn must_input_object<T: Reflect + ?Sized>(&self, name: &str) -> InputObjectType {
        self.input_object::<T>(name).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Registers every cached type, and every type reachable from them, with
    /// a schema builder.
    pub fn register_types(&self, builder: SchemaBuilder) -> SchemaBuilder {
        self.export_cached(&mut TypeExporter::new(), builder)
    }

    /// Starts a dynamic schema rooted at `query` (and `mutation`) with every
    /// cached type registered.
    pub fn schema_builder(
        &self,
        query: &ObjectType,
        mutation: Option<&ObjectType>,
    ) -> SchemaBuilder {
        let mut exporter = TypeExporter::new();
        let builder = Schema::build(query.name(), mutation.map(ObjectType::name), None);
        let mut builder = exporter.register(builder, &SchemaType::Object(query.clone()));
        if let Some(mutation) = mutation {
            builder = exporter.register(builder, &SchemaType::Object(mutation.clone()));
        }
        self.export_cached(&mut exporter, builder)
    }

    fn export_cached(&self, exporter: &mut TypeExporter, mut builder: SchemaBuilder) -> SchemaBuilder {
        let _guard = self.builds.lock();
        let types = self.cache.types();
        debug!(count = types.len(), "Registering cached types");
        for (_, ty) in &types {
            builder = exporter.register(builder, ty);
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DuplicateFieldPolicy;

    #[test]
    fn test_clones_share_cache() {
        let engine = Engine::new();
        let clone = engine.clone();
        clone.cache().register(&String::type_info(), SchemaType::STRING);
        assert_eq!(engine.cache().len(), 1);
        assert!(Engine::new().cache().is_empty());
    }

    #[test]
    fn test_with_config_validates() {
        let config = EngineConfig {
            tag: "gql".into(),
            duplicate_fields: DuplicateFieldPolicy::Reject,
            ..EngineConfig::default()
        };
        let engine = Engine::with_config(config).unwrap();
        assert_eq!(engine.config().tag, "gql");

        let invalid = EngineConfig {
            tag: String::new(),
            ..EngineConfig::default()
        };
        assert!(matches!(
            Engine::with_config(invalid),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_must_args_panics_with_message() {
        let result = std::panic::catch_unwind(|| Engine::new().must_args::<String>());
        let payload = result.unwrap_err();
        let message = payload
            .downcast_ref::<String>()
            .cloned()
            .unwrap_or_default();
        assert!(message.contains("non struct type"));
    }
}
