//! Resolved-type cache.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::trace;

use crate::reflect::TypeInfo;
use crate::schema::{ObjectType, SchemaType};

/// Maps type names to resolved schema types.
///
/// An entry, once set, is never replaced: every later request for the same
/// name gets the same node. Objects are registered before their fields are
/// built, which is what lets self-referential types terminate.
#[derive(Debug, Default)]
pub struct TypeCache {
    types: RwLock<HashMap<String, SchemaType>>,
}

impl TypeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a type by cache key.
    pub fn get(&self, name: &str) -> Option<SchemaType> {
        self.types.read().get(name).cloned()
    }

    /// Looks up the cached type for a description.
    pub fn lookup(&self, info: &TypeInfo) -> Option<SchemaType> {
        let key = info.cache_key()?;
        let cached = self.get(key);
        if cached.is_some() {
            trace!(type_name = %key, "Type cache hit");
        }
        cached
    }

    /// Registers `ty` for a description and returns the canonical type.
    ///
    /// If the key is already taken the existing entry wins and is returned.
    /// Descriptions without a cache key are passed through unregistered.
    pub fn register(&self, info: &TypeInfo, ty: SchemaType) -> SchemaType {
        match info.cache_key() {
            Some(key) => self
                .types
                .write()
                .entry(key.to_string())
                .or_insert(ty)
                .clone(),
            None => ty,
        }
    }

    /// Removes the entry for `key` if it is still `object`.
    ///
    /// Returns whether an entry was removed.
    pub(crate) fn unregister(&self, key: &str, object: &ObjectType) -> bool {
        let mut types = self.types.write();
        let same = matches!(types.get(key), Some(SchemaType::Object(cached)) if cached.ptr_eq(object));
        if same {
            trace!(type_name = %key, "Removing cached object");
            types.remove(key);
        }
        same
    }

    pub fn len(&self) -> usize {
        self.types.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.read().is_empty()
    }

    /// Snapshot of all cached types, sorted by name.
    pub fn types(&self) -> Vec<(String, SchemaType)> {
        let mut types: Vec<_> = self
            .types
            .read()
            .iter()
            .map(|(name, ty)| (name.clone(), ty.clone()))
            .collect();
        types.sort_by(|a, b| a.0.cmp(&b.0));
        types
    }
}
