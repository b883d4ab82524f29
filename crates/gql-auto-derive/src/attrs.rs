//! Attribute parsing.
//!
//! Container attributes come from `#[graphql(...)]` on the struct. Field tags
//! come from `#[graphql("...")]`, `#[tag(key = "value")]` and the subset of
//! `#[serde(...)]` that decides a field's serialized name.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitStr, Token};

const PRIMARY_TAG: &str = "graphql";
const SERDE_TAG: &str = "json";

/// Container attributes from `#[graphql(...)]` on the struct.
#[derive(Debug, Clone, Default)]
pub struct ContainerAttrs {
    /// Declared type name override.
    pub name: Option<String>,
    /// The type implements `GraphqlTyped`.
    pub custom: bool,
    /// The type also implements `GraphqlResolver`.
    pub resolver: bool,
}

impl ContainerAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(PRIMARY_TAG) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    result.name = Some(parse_string_value(&meta)?);
                } else if meta.path.is_ident("custom") {
                    result.custom = true;
                } else if meta.path.is_ident("resolver") {
                    result.resolver = true;
                } else {
                    return Err(meta.error("expected `name`, `custom` or `resolver`"));
                }
                Ok(())
            })?;
        }

        if result.resolver && !result.custom {
            return Err(syn::Error::new(
                proc_macro2::Span::call_site(),
                "`resolver` requires `custom`",
            ));
        }

        Ok(result)
    }
}

/// Tags of one field, in lookup order.
#[derive(Debug, Clone, Default)]
pub struct FieldTags {
    pub tags: Vec<(String, String)>,
}

impl FieldTags {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();
        let mut serde = SerdeFieldAttrs::default();

        for attr in attrs {
            if attr.path().is_ident(PRIMARY_TAG) {
                let value: LitStr = attr.parse_args()?;
                result.push(PRIMARY_TAG, value.value());
            } else if attr.path().is_ident("tag") {
                attr.parse_nested_meta(|meta| {
                    let Some(key) = meta.path.get_ident() else {
                        return Err(meta.error("expected a tag key"));
                    };
                    let value = parse_string_value(&meta)?;
                    result.push(key.to_string(), value);
                    Ok(())
                })?;
            } else if attr.path().is_ident("serde") {
                serde.parse(attr)?;
            }
        }

        if let Some(json) = serde.json_tag() {
            result.push(SERDE_TAG, json);
        }

        Ok(result)
    }

    fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.tags.push((key.into(), value.into()));
    }
}

/// Serde field attributes that affect the serialized name.
#[derive(Debug, Clone, Default)]
struct SerdeFieldAttrs {
    rename: Option<String>,
    skip: bool,
    omit_empty: bool,
}

impl SerdeFieldAttrs {
    fn parse(&mut self, attr: &Attribute) -> syn::Result<()> {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") && meta.input.peek(Token![=]) {
                self.rename = Some(parse_string_value(&meta)?);
            } else if meta.path.is_ident("skip") || meta.path.is_ident("skip_serializing") {
                self.skip = true;
            } else if meta.path.is_ident("skip_serializing_if") {
                self.omit_empty = true;
                skip_value(&meta)?;
            } else {
                skip_value(&meta)?;
            }
            Ok(())
        })
    }

    /// The equivalent `json` tag, if any serde attribute applies.
    fn json_tag(&self) -> Option<String> {
        if self.skip {
            return Some("-".to_string());
        }
        if self.rename.is_none() && !self.omit_empty {
            return None;
        }

        let mut tag = self.rename.clone().unwrap_or_default();
        if self.omit_empty {
            tag.push_str(",omitempty");
        }
        Some(tag)
    }
}

/// Parse a string value from a meta item like `rename = "value"`.
fn parse_string_value(meta: &ParseNestedMeta) -> syn::Result<String> {
    let value: LitStr = meta.value()?.parse()?;
    Ok(value.value())
}

/// Consumes the value of a meta item this crate does not interpret.
fn skip_value(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<syn::Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let _content;
        syn::parenthesized!(_content in meta.input);
    }
    Ok(())
}
