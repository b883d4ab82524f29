//! Argument and input-field building.

use indexmap::IndexMap;
use tracing::{debug, trace};

use super::Engine;
use super::resolve::non_null;
use crate::error::{Error, Result};
use crate::naming::normalize;
use crate::reflect::TypeInfo;
use crate::schema::{Argument, InputField, InputObjectType};
use crate::tags;

impl Engine {
    /// Builds the argument map of a record.
    ///
    /// Fields follow the same visibility, tag and naming rules as output
    /// objects. The record itself is not cached; nested field types are.
    ///
    /// # Errors
    ///
    /// [`Error::NotAStruct`] if the dereferenced type is not a record, or the
    /// first field type error.
    pub fn args_of(&self, info: &TypeInfo) -> Result<IndexMap<String, Argument>> {
        self.input_values_of(info, "arguments")
    }

    /// Builds the input-field map of a record.
    ///
    /// # Errors
    ///
    /// Same as [`Engine::args_of`].
    pub fn input_fields_of(&self, info: &TypeInfo) -> Result<IndexMap<String, InputField>> {
        self.input_values_of(info, "input fields")
    }

    /// Builds an input object named `name` from a record's input fields.
    pub fn input_object_of(&self, name: &str, info: &TypeInfo) -> Result<InputObjectType> {
        let fields = self.input_fields_of(info)?;
        Ok(InputObjectType::new(name, fields))
    }

    fn input_values_of(&self, info: &TypeInfo, what: &str) -> Result<IndexMap<String, Argument>> {
        self.scoped(|| self.build_input_values(info, what))
    }

    fn build_input_values(
        &self,
        info: &TypeInfo,
        what: &str,
    ) -> Result<IndexMap<String, Argument>> {
        let record = info.dereferenced();
        let Some(fields) = record.fields() else {
            return Err(Error::not_a_struct(record.name()));
        };

        debug!(record = %record.name(), fields = fields.len(), "Building {what}");

        let mut values = IndexMap::new();
        for field in fields {
            let tag = tags::resolve(field, &self.config);
            if tag.excluded {
                continue;
            }

            let (_, mut ty) = self.field_type(record.name(), field)?;
            if tag.non_null {
                ty = non_null(ty);
            }

            let name = tag.name.unwrap_or_else(|| normalize(field.ident()));
            trace!(record = %record.name(), name = %name, ty = %ty, "Built input value");
            if values.insert(name.clone(), Argument::new(ty)).is_some() {
                self.duplicate_field(record.name(), &name)?;
            }
        }

        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::{FieldInfo, Reflect};
    use crate::schema::SchemaType;

    fn filter() -> TypeInfo {
        TypeInfo::record(
            "PersonFilter",
            vec![
                FieldInfo::new("ID", <String as Reflect>::type_info).tag("graphql", "!"),
                FieldInfo::new("name_prefix", <Option<String> as Reflect>::type_info),
                FieldInfo::new("Limit", <u32 as Reflect>::type_info).tag("json", "max,omitempty"),
                FieldInfo::new("Internal", <String as Reflect>::type_info).tag("graphql", "-"),
            ],
        )
    }

    #[test]
    fn test_args() {
        let engine = Engine::new();
        let args = engine.args_of(&filter()).unwrap();

        assert_eq!(args.keys().collect::<Vec<_>>(), vec!["id", "namePrefix", "max"]);
        assert_eq!(args["id"].ty.to_string(), "String!");
        assert_eq!(args["namePrefix"].ty, SchemaType::STRING);
        assert_eq!(args["max"].ty, SchemaType::INT);
    }

    #[test]
    fn test_args_do_not_cache_container() {
        let engine = Engine::new();
        engine.args_of(&filter()).unwrap();
        assert!(engine.cache().get("PersonFilter").is_none());
        assert!(engine.cache().get("String").is_some());
    }

    #[test]
    fn test_args_from_pointer() {
        let engine = Engine::new();
        let args = engine.args_of(&TypeInfo::pointer(filter())).unwrap();
        assert_eq!(args.len(), 3);
    }

    #[test]
    fn test_args_from_non_record() {
        let engine = Engine::new();
        assert!(matches!(
            engine.args_of(&String::type_info()),
            Err(Error::NotAStruct(_))
        ));
        assert!(matches!(
            engine.args_of(&<Vec<i32>>::type_info()),
            Err(Error::NotAStruct(_))
        ));
    }

    #[test]
    fn test_input_object() {
        let engine = Engine::new();
        let input = engine.input_object_of("PersonFilterInput", &filter()).unwrap();
        assert_eq!(input.name(), "PersonFilterInput");
        assert_eq!(input.fields().len(), 3);
        assert!(engine.input_fields_of(&String::type_info()).is_err());
    }
}
