//! Type resolution.

use tracing::trace;

use super::Engine;
use crate::error::{Error, Result};
use crate::reflect::{FieldInfo, Primitive, TypeInfo, TypeKind};
use crate::schema::SchemaType;

impl Engine {
    /// Resolves the schema type of a description.
    ///
    /// Rules are tried in order and the first match wins:
    ///
    /// 1. a cached type under the description's cache key
    /// 2. the custom mapping of the type, or of the type it points to
    /// 3. after stripping one pointer level: timestamps as `DateTime`
    /// 4. unique identifiers as `String`
    /// 5. records as output objects
    /// 6. lists as lists of their resolved element
    /// 7. primitives as `Boolean`, `String`, `Int` or `Float`
    ///
    /// Anything else fails with [`Error::TypeNotRecognized`].
    pub fn type_of(&self, info: &TypeInfo) -> Result<SchemaType> {
        self.scoped(|| self.resolve(info))
    }

    fn resolve(&self, info: &TypeInfo) -> Result<SchemaType> {
        if let Some(cached) = self.cache.lookup(info) {
            return Ok(cached);
        }

        if let Some(custom) = info.custom_through_pointer() {
            trace!(type_name = %info, "Using custom mapping");
            return Ok(custom.schema_type());
        }

        let target = info.dereferenced();
        match target.kind() {
            TypeKind::Timestamp => Ok(SchemaType::DATE_TIME),
            TypeKind::Uuid => Ok(SchemaType::STRING),
            TypeKind::Record(_) => self.object_of(target, &[]).map(SchemaType::Object),
            TypeKind::List(element) => self.array_of(element, &[]),
            TypeKind::Primitive(primitive) => Ok(primitive_type(*primitive)),
            TypeKind::Pointer(_) | TypeKind::Opaque => Err(Error::type_not_recognized(target.name())),
        }
    }

    /// Resolves and caches the type of a record field.
    ///
    /// Failures are wrapped with the record and field name.
    pub(crate) fn field_type(&self, record: &str, field: &FieldInfo) -> Result<(TypeInfo, SchemaType)> {
        let info = field.type_info();
        let ty = self
            .type_of(&info)
            .map_err(|err| Error::in_field(record, field.ident(), err))?;
        let ty = self.cache.register(&info, ty);
        Ok((info, ty))
    }
}

fn primitive_type(primitive: Primitive) -> SchemaType {
    match primitive {
        Primitive::Bool => SchemaType::BOOLEAN,
        Primitive::Char | Primitive::Str => SchemaType::STRING,
        Primitive::I8
        | Primitive::I16
        | Primitive::I32
        | Primitive::I64
        | Primitive::I128
        | Primitive::Isize
        | Primitive::U8
        | Primitive::U16
        | Primitive::U32
        | Primitive::U64
        | Primitive::U128
        | Primitive::Usize => SchemaType::INT,
        Primitive::F32 | Primitive::F64 => SchemaType::FLOAT,
    }
}

/// Wraps `ty` as non-null unless it already is.
pub(crate) fn non_null(ty: SchemaType) -> SchemaType {
    match ty {
        SchemaType::NonNull(_) => ty,
        other => SchemaType::non_null(other),
    }
}
