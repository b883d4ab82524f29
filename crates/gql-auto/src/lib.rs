//! # gql-auto
//!
//! Builds GraphQL schema types from Rust struct declarations.
//!
//! Structs derive [`Reflect`] to describe their fields. An [`Engine`] walks
//! those descriptions and produces output objects, argument maps, input
//! objects and lists, resolving every field type along the way:
//!
//! - `bool`, strings, integers and floats map to the built-in scalars
//! - `Option<T>` is nullable indirection and maps as `T`
//! - `Vec<T>` and other sequences map to lists
//! - timestamps map to `DateTime`, UUIDs to `String`
//! - nested structs become objects, cached by name so that recursive and
//!   repeated types share one object
//! - types implementing [`GraphqlTyped`] supply their own schema type
//!
//! The resulting nodes export to `async_graphql::dynamic`, which executes
//! queries against them.
//!
//! ## Example
//!
//! ```ignore
//! use gql_auto::{Engine, Reflect};
//!
//! #[derive(Reflect, serde::Serialize)]
//! struct Person {
//!     #[graphql("!")]
//!     pub name: String,
//!     pub age: Option<u32>,
//!     #[graphql("-")]
//!     pub password_hash: String,
//! }
//!
//! let engine = Engine::new();
//! let person = engine.object::<Person>(&[])?;
//! ```
//!
//! ## Field tags
//!
//! The `graphql` tag (`#[graphql("...")]` with the derive) holds an optional
//! leading `!` for non-null, then the external name, `-` to skip the field,
//! or nothing to derive the name from the identifier. Without a `graphql` tag
//! the `json` tag is used, which the derive fills from `#[serde(rename)]`
//! and `#[serde(skip)]`.
//!
//! ## Configuration
//!
//! ```toml
//! tag = "graphql"
//! fallback_tag = "json"
//! duplicate_fields = "overwrite"
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - The type-mapping engine and its cache
//! - [`reflect`] - Structural type descriptions
//! - [`schema`] - Schema nodes and their export to async-graphql
//! - [`options`] - Field, argument and object options
//! - [`tags`] - Field tag resolution
//! - [`naming`] - External name derivation
//! - [`config`] - Engine configuration
//! - [`error`] - Error types

pub mod config;
pub mod engine;
pub mod error;
pub mod naming;
pub mod options;
pub mod reflect;
pub mod registrar;
pub mod schema;
pub mod tags;

// Re-export main types
pub use config::{DuplicateFieldPolicy, EngineConfig};
pub use engine::{Engine, TypeCache};
pub use error::{Error, Result};
pub use options::{
    SchemaOption, Target, with_args, with_args_in, with_default_value, with_deprecation_reason,
    with_description, with_name, with_resolver, with_type,
};
pub use reflect::{
    CustomMapping, FieldInfo, GraphqlResolver, GraphqlTyped, Primitive, Reflect, TypeInfo,
    TypeKind,
};
pub use registrar::add_field;
pub use schema::{
    Argument, Field, InputField, InputObjectType, ObjectConfig, ObjectType, Resolver, ScalarType,
    SchemaType,
};

#[cfg(feature = "derive")]
pub use gql_auto_derive::Reflect;
