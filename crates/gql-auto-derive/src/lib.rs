//! # gql-auto-derive
//!
//! `#[derive(Reflect)]` for gql-auto.
//!
//! Generates the structural description of a struct with named fields: its
//! name, and for each field the identifier, type, visibility and tags.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gql_auto::Reflect;
//!
//! #[derive(Reflect, serde::Serialize)]
//! struct Person {
//!     #[graphql("!")]
//!     pub id: uuid::Uuid,
//!     #[serde(rename = "fullName")]
//!     pub name: String,
//!     #[graphql("-")]
//!     pub password_hash: String,
//! }
//! ```
//!
//! ## Attributes
//!
//! ### Container Attributes
//!
//! - `#[graphql(name = "Name")]` - Declared type name (defaults to the struct name)
//! - `#[graphql(custom)]` - The type implements `GraphqlTyped`
//! - `#[graphql(custom, resolver)]` - The type also implements `GraphqlResolver`
//!
//! ### Field Attributes
//!
//! - `#[graphql("...")]` - The `graphql` tag: `!` for non-null, a name, or `-` to skip
//! - `#[tag(key = "value")]` - Any other tag
//! - `#[serde(rename = "x")]` - Sets the `json` tag to `x`
//! - `#[serde(skip)]` / `#[serde(skip_serializing)]` - Sets the `json` tag to `-`
//! - `#[serde(skip_serializing_if = "...")]` - Appends `,omitempty` to the `json` tag
//!
//! Only `pub` fields are visible to the engine.

use proc_macro::TokenStream;
use syn::DeriveInput;

mod attrs;
mod expand;

/// Derives `gql_auto::Reflect` for a struct.
#[proc_macro_derive(Reflect, attributes(graphql, tag, serde))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);

    match expand::derive_reflect(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
