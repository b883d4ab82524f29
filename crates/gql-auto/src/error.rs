//! Error types for schema construction.
//!
//! Every builder returns either a finished node or a single error. Failures
//! in nested fields are wrapped with the owning record and field name so the
//! offending declaration can be located from the message alone.

use thiserror::Error;

/// Result type for schema construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while mapping Rust types to schema types.
#[derive(Debug, Error)]
pub enum Error {
    /// A type matched none of the mapping rules.
    #[error("type `{0}` not recognized")]
    TypeNotRecognized(String),

    /// A nested field failed to resolve.
    #[error("field `{field}` of `{record}`: {source}")]
    InField {
        /// Record type that declares the field.
        record: String,
        /// Declared identifier of the field.
        field: String,
        /// The underlying failure.
        #[source]
        source: Box<Error>,
    },

    /// Arguments, input fields or objects requested from a non-record type.
    #[error("cannot build arguments from a non struct type `{0}`")]
    NotAStruct(String),

    /// An option was applied to a target kind it does not support.
    #[error("`{0}` is not supported")]
    OptionNotSupported(&'static str),

    /// A type name is already cached as a different kind of schema node.
    #[error("`{name}` is already registered as {cached}, not as {requested}")]
    CachedTypeShapeMismatch {
        /// Cache key of the type.
        name: String,
        /// Kind of the cached node.
        cached: &'static str,
        /// Kind the caller asked for.
        requested: &'static str,
    },

    /// Two fields of one record map to the same external name.
    #[error("duplicate field `{field}` in `{record}`")]
    DuplicateField {
        /// Record type being built.
        record: String,
        /// External field name that collided.
        field: String,
    },

    /// The engine configuration failed validation.
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),

    /// Error raised by a user-defined option.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Create a new TypeNotRecognized error
    pub fn type_not_recognized(type_name: impl Into<String>) -> Self {
        Self::TypeNotRecognized(type_name.into())
    }

    /// Create a new NotAStruct error
    pub fn not_a_struct(type_name: impl Into<String>) -> Self {
        Self::NotAStruct(type_name.into())
    }

    /// Create a new Custom error
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// Wraps an error with the record and field it occurred in.
    pub fn in_field(record: impl Into<String>, field: impl Into<String>, source: Error) -> Self {
        Self::InField {
            record: record.into(),
            field: field.into(),
            source: Box::new(source),
        }
    }

    /// Returns the innermost error, stripping field context.
    pub fn root_cause(&self) -> &Error {
        match self {
            Self::InField { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
