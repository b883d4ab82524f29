//! Output object building.

use std::collections::HashSet;

use tracing::{debug, trace, warn};

use super::Engine;
use super::resolve::non_null;
use crate::config::DuplicateFieldPolicy;
use crate::error::{Error, Result};
use crate::naming::normalize;
use crate::options::{SchemaOption, apply_all};
use crate::reflect::{FieldInfo, TypeInfo};
use crate::registrar::add_field;
use crate::schema::{Field, ObjectConfig, ObjectType, Resolver, SchemaType};
use crate::tags;

impl Engine {
    /// Builds the output object of a record.
    ///
    /// The object is cached before its fields are built, so a field that
    /// refers back to the record resolves to this same object. A cached
    /// object is returned as is and `options` are not applied to it.
    ///
    /// # Errors
    ///
    /// - [`Error::CachedTypeShapeMismatch`] if the name is cached as another kind
    /// - [`Error::NotAStruct`] if the dereferenced type is not a record
    /// - the first error of an option or of a field type
    ///
    /// A failed build leaves nothing it registered in the cache.
    pub fn object_of(&self, info: &TypeInfo, options: &[&dyn SchemaOption]) -> Result<ObjectType> {
        self.scoped(|| self.build_object(info, options))
    }

    fn build_object(&self, info: &TypeInfo, options: &[&dyn SchemaOption]) -> Result<ObjectType> {
        if let Some(cached) = self.cache.lookup(info) {
            return expect_object(info, cached);
        }

        let record = info.dereferenced();
        let Some(fields) = record.fields() else {
            return Err(Error::not_a_struct(record.name()));
        };

        let mut config = ObjectConfig::new(record.name());
        apply_all(options, &mut config)?;

        let object = ObjectType::new(config);
        let canonical = self.cache.register(info, SchemaType::Object(object.clone()));
        if !matches!(&canonical, SchemaType::Object(cached) if cached.ptr_eq(&object)) {
            // Another builder registered the name first.
            return expect_object(info, canonical);
        }
        if let Some(key) = info.cache_key() {
            self.track(key, &object);
        }

        debug!(
            object = %object.name(),
            fields = fields.len(),
            "Building object type"
        );

        let mut seen = HashSet::new();
        for field in fields {
            let Some(built) = self.build_field(record.name(), field)? else {
                continue;
            };
            if !seen.insert(built.name.clone()) {
                self.duplicate_field(object.name(), &built.name)?;
            }
            add_field(&object, built);
        }

        Ok(object)
    }

    /// Builds a field typed as a record's output object.
    ///
    /// The field is named after the object unless an option renames it.
    pub fn field_of(&self, info: &TypeInfo, options: &[&dyn SchemaOption]) -> Result<Field> {
        self.scoped(|| {
            let object = self.object_of(info, &[])?;
            let mut field = Field::new(normalize(object.name()), SchemaType::Object(object));
            apply_all(options, &mut field)?;
            Ok(field)
        })
    }

    /// Builds the field node of a record field, `None` if it is excluded.
    fn build_field(&self, record: &str, field: &FieldInfo) -> Result<Option<Field>> {
        let tag = tags::resolve(field, &self.config);
        if tag.excluded {
            trace!(record = %record, field = %field.ident(), "Skipping excluded field");
            return Ok(None);
        }

        let (info, mut ty) = self.field_type(record, field)?;
        if tag.non_null {
            ty = non_null(ty);
        }

        let name = tag.name.unwrap_or_else(|| normalize(field.ident()));
        let resolver = match info.custom_through_pointer().and_then(|c| c.resolver()) {
            Some(resolve) => Resolver::custom(resolve),
            None => {
                let mut keys = vec![field.ident().to_string()];
                keys.extend(tags::serialized_name(field, &self.config).map(str::to_string));
                keys.push(name.clone());
                Resolver::field(keys)
            }
        };

        trace!(record = %record, field = %name, ty = %ty, "Built field");
        Ok(Some(Field::new(name, ty).with_resolver(resolver)))
    }

    /// Applies the duplicate-name policy to a collision inside one record.
    pub(crate) fn duplicate_field(&self, record: &str, field: &str) -> Result<()> {
        match self.config.duplicate_fields {
            DuplicateFieldPolicy::Overwrite => {
                warn!(record = %record, field = %field, "Duplicate field name, overwriting");
                Ok(())
            }
            DuplicateFieldPolicy::Reject => Err(Error::DuplicateField {
                record: record.to_string(),
                field: field.to_string(),
            }),
        }
    }
}

fn expect_object(info: &TypeInfo, cached: SchemaType) -> Result<ObjectType> {
    match cached {
        SchemaType::Object(object) => Ok(object),
        other => Err(Error::CachedTypeShapeMismatch {
            name: info.cache_key().unwrap_or(info.name()).to_string(),
            cached: other.kind_name(),
            requested: "object",
        }),
    }
}
