//! Field tag resolution.
//!
//! A field's external name, nullability and exclusion come from its primary
//! tag (`graphql` by default). When the primary tag is absent the fallback
//! tag (`json` by default) is read instead, with any `,omitempty` qualifier
//! removed.
//!
//! Grammar: an optional leading `!` (non-null), then either the external
//! name, `-` (exclude) or nothing (derive the name from the identifier).

use crate::config::EngineConfig;
use crate::reflect::FieldInfo;

const EXCLUDE: &str = "-";
const NON_NULL: char = '!';
const OMIT_EMPTY: &str = ",omitempty";

/// Metadata derived from a field's tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTag {
    /// External name set by the tag.
    pub name: Option<String>,
    /// Whether the field type is wrapped as non-null.
    pub non_null: bool,
    /// Whether the field is left out of the schema.
    pub excluded: bool,
}

impl FieldTag {
    fn excluded() -> Self {
        Self {
            excluded: true,
            ..Self::default()
        }
    }
}

/// Resolves the tag metadata of a field.
///
/// Non-public fields are always excluded.
pub fn resolve(field: &FieldInfo, config: &EngineConfig) -> FieldTag {
    if !field.is_public() {
        return FieldTag::excluded();
    }

    let tag = match field.lookup_tag(&config.tag) {
        Some(tag) => tag.to_string(),
        None => match fallback_tag(field, config) {
            Some(tag) => tag.replace(OMIT_EMPTY, ""),
            None => return FieldTag::default(),
        },
    };

    if tag == EXCLUDE {
        return FieldTag::excluded();
    }

    let (non_null, name) = match tag.strip_prefix(NON_NULL) {
        Some(rest) => (true, rest),
        None => (false, tag.as_str()),
    };

    FieldTag {
        name: (!name.is_empty()).then(|| name.to_string()),
        non_null,
        excluded: false,
    }
}

/// Name the field serializes under, read from the fallback tag.
///
/// Used as a lookup key by the default resolver, since parent values are
/// usually produced by serializing the record.
pub fn serialized_name<'a>(field: &'a FieldInfo, config: &EngineConfig) -> Option<&'a str> {
    let tag = fallback_tag(field, config)?;
    let name = tag.split(',').next().unwrap_or_default();
    (!name.is_empty() && name != EXCLUDE).then_some(name)
}

fn fallback_tag<'a>(field: &'a FieldInfo, config: &EngineConfig) -> Option<&'a str> {
    config
        .fallback_tag
        .as_deref()
        .and_then(|key| field.lookup_tag(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::Reflect;

    fn field() -> FieldInfo {
        FieldInfo::new("FirstName", <String as Reflect>::type_info)
    }

    #[test]
    fn test_untagged_field() {
        let tag = resolve(&field(), &EngineConfig::default());
        assert_eq!(tag, FieldTag::default());
    }

    #[test]
    fn test_name_override() {
        let tag = resolve(&field().tag("graphql", "lastName"), &EngineConfig::default());
        assert_eq!(tag.name.as_deref(), Some("lastName"));
        assert!(!tag.non_null);
    }

    #[test]
    fn test_non_null_marker() {
        let config = EngineConfig::default();

        let tag = resolve(&field().tag("graphql", "!"), &config);
        assert!(tag.non_null);
        assert_eq!(tag.name, None);

        let tag = resolve(&field().tag("graphql", "!name"), &config);
        assert!(tag.non_null);
        assert_eq!(tag.name.as_deref(), Some("name"));
    }

    #[test]
    fn test_exclusion_marker() {
        let config = EngineConfig::default();
        assert!(resolve(&field().tag("graphql", "-"), &config).excluded);
        assert!(resolve(&field().tag("json", "-"), &config).excluded);
    }

    #[test]
    fn test_non_public_fields_are_excluded() {
        let tag = resolve(
            &field().public(false).tag("graphql", "name"),
            &EngineConfig::default(),
        );
        assert!(tag.excluded);
    }

    #[test]
    fn test_fallback_strips_omitempty() {
        let config = EngineConfig::default();

        let tag = resolve(&field().tag("json", "first_name,omitempty"), &config);
        assert_eq!(tag.name.as_deref(), Some("first_name"));

        let tag = resolve(&field().tag("json", ",omitempty"), &config);
        assert_eq!(tag.name, None);
    }

    #[test]
    fn test_primary_tag_wins_over_fallback() {
        let tag = resolve(
            &field().tag("json", "-").tag("graphql", "name"),
            &EngineConfig::default(),
        );
        assert!(!tag.excluded);
        assert_eq!(tag.name.as_deref(), Some("name"));
    }

    #[test]
    fn test_fallback_disabled() {
        let config = EngineConfig {
            fallback_tag: None,
            ..EngineConfig::default()
        };
        let tag = resolve(&field().tag("json", "-"), &config);
        assert!(!tag.excluded);
    }

    #[test]
    fn test_serialized_name() {
        let config = EngineConfig::default();
        assert_eq!(
            serialized_name(&field().tag("json", "first,omitempty"), &config),
            Some("first")
        );
        assert_eq!(serialized_name(&field().tag("json", ",omitempty"), &config), None);
        assert_eq!(serialized_name(&field().tag("json", "-"), &config), None);
        assert_eq!(serialized_name(&field(), &config), None);
    }
}
