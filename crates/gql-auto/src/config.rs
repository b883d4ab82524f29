//! Engine configuration.
//!
//! Configuration can be embedded in an application's TOML file and
//! deserialized directly.
//!
//! # Example Configuration
//!
//! ```toml
//! tag = "graphql"
//! fallback_tag = "json"
//! duplicate_fields = "reject"
//! ```

use serde::{Deserialize, Serialize};

/// What to do when two fields of one record map to the same external name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateFieldPolicy {
    /// The later field replaces the earlier one.
    #[default]
    Overwrite,
    /// Building the record fails with `Error::DuplicateField`.
    Reject,
}

/// Type-mapping engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Primary metadata tag key.
    /// Default: "graphql"
    #[serde(default = "default_tag")]
    pub tag: String,

    /// Secondary tag key consulted when the primary tag is absent.
    /// A trailing `,omitempty` qualifier is stripped from its value.
    /// Default: "json"
    #[serde(default = "default_fallback_tag")]
    pub fallback_tag: Option<String>,

    /// Policy for external-name collisions inside one record.
    /// Default: overwrite
    #[serde(default)]
    pub duplicate_fields: DuplicateFieldPolicy,
}

fn default_tag() -> String {
    "graphql".to_string()
}

fn default_fallback_tag() -> Option<String> {
    Some("json".to_string())
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tag: default_tag(),
            fallback_tag: default_fallback_tag(),
            duplicate_fields: DuplicateFieldPolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.tag.is_empty() {
            return Err("tag must not be empty".into());
        }
        match self.fallback_tag.as_deref() {
            Some("") => Err("fallback_tag must not be empty".into()),
            Some(fallback) if fallback == self.tag => {
                Err("fallback_tag must differ from tag".into())
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.tag, "graphql");
        assert_eq!(config.fallback_tag.as_deref(), Some("json"));
        assert_eq!(config.duplicate_fields, DuplicateFieldPolicy::Overwrite);
    }

    #[test]
    fn test_valid_config() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_tag() {
        let config = EngineConfig {
            tag: String::new(),
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_fallback_tag() {
        let config = EngineConfig {
            fallback_tag: Some("graphql".into()),
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());

        let config = EngineConfig {
            fallback_tag: Some(String::new()),
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_from_toml() {
        let toml = r#"
            tag = "gql"
            duplicate_fields = "reject"
        "#;

        let config: EngineConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.tag, "gql");
        assert_eq!(config.fallback_tag.as_deref(), Some("json"));
        assert_eq!(config.duplicate_fields, DuplicateFieldPolicy::Reject);
        assert!(config.validate().is_ok());
    }
}
