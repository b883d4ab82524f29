//! Structural type descriptions.
//!
//! A [`TypeInfo`] is the engine's view of a Rust type: its declared name, a
//! closed [`TypeKind`] describing its shape, and an optional
//! [`CustomMapping`] when the type supplies its own schema type.
//!
//! Descriptions come from the [`Reflect`] trait, which is derived for structs
//! (`#[derive(Reflect)]`) and implemented here for standard and well-known
//! types.
//!
//! ## Pointer semantics
//!
//! `Option<T>` is the only nullable indirection and describes as a
//! [`TypeKind::Pointer`]. `Box`, `Rc`, `Arc`, references and `Cow` are
//! ownership wrappers and describe exactly as the type they wrap, so
//! `Option<Box<Node>>` is a single pointer to `Node`.

mod custom;
mod impls;

use std::borrow::Cow;
use std::fmt;

pub use custom::{CustomMapping, CustomResolveFn, GraphqlResolver, GraphqlTyped};

/// Types that can describe their own structure.
pub trait Reflect {
    /// Returns the structural description of `Self`.
    fn type_info() -> TypeInfo;
}

/// Primitive kinds, dispatched to scalars by width class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Bool,
    Char,
    Str,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
}

/// The shape of a described type.
#[derive(Debug, Clone)]
pub enum TypeKind {
    /// A primitive value.
    Primitive(Primitive),
    /// A well-known timestamp type.
    Timestamp,
    /// A well-known unique-identifier type.
    Uuid,
    /// A struct with named fields, in declaration order.
    Record(Vec<FieldInfo>),
    /// One level of nullable indirection.
    Pointer(Box<TypeInfo>),
    /// A sequence of elements.
    List(Box<TypeInfo>),
    /// A type with no usable structure (trait objects, maps, untyped JSON).
    Opaque,
}

/// Structural description of a type.
#[derive(Debug, Clone)]
pub struct TypeInfo {
    name: Cow<'static, str>,
    kind: TypeKind,
    custom: Option<CustomMapping>,
}

impl TypeInfo {
    fn new(name: impl Into<Cow<'static, str>>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            custom: None,
        }
    }

    /// Describes a primitive type.
    pub fn primitive(name: impl Into<Cow<'static, str>>, primitive: Primitive) -> Self {
        Self::new(name, TypeKind::Primitive(primitive))
    }

    /// Describes a timestamp type.
    pub fn timestamp(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, TypeKind::Timestamp)
    }

    /// Describes a unique-identifier type.
    pub fn uuid(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, TypeKind::Uuid)
    }

    /// Describes a struct with the given fields.
    pub fn record(name: impl Into<Cow<'static, str>>, fields: Vec<FieldInfo>) -> Self {
        Self::new(name, TypeKind::Record(fields))
    }

    /// Describes a nullable indirection to `target`.
    pub fn pointer(target: TypeInfo) -> Self {
        let name = format!("Option<{}>", target.name);
        Self::new(name, TypeKind::Pointer(Box::new(target)))
    }

    /// Describes a sequence of `element`.
    pub fn list(element: TypeInfo) -> Self {
        let name = format!("[{}]", element.name);
        Self::new(name, TypeKind::List(Box::new(element)))
    }

    /// Describes a type without usable structure.
    pub fn opaque(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, TypeKind::Opaque)
    }

    /// Attaches a custom schema mapping.
    #[must_use]
    pub fn with_custom(mut self, custom: CustomMapping) -> Self {
        self.custom = Some(custom);
        self
    }

    /// Describes the type of a representative value.
    pub fn of_val<T: Reflect + ?Sized>(_value: &T) -> Self {
        T::type_info()
    }

    /// Declared name of the type.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    /// The custom mapping declared on this exact type.
    pub fn custom(&self) -> Option<&CustomMapping> {
        self.custom.as_ref()
    }

    pub fn is_record(&self) -> bool {
        matches!(self.kind, TypeKind::Record(_))
    }

    /// Fields of a record, `None` for any other kind.
    pub fn fields(&self) -> Option<&[FieldInfo]> {
        match &self.kind {
            TypeKind::Record(fields) => Some(fields),
            _ => None,
        }
    }

    /// Strips one level of pointer indirection, if present.
    pub fn dereferenced(&self) -> &TypeInfo {
        match &self.kind {
            TypeKind::Pointer(target) => target,
            _ => self,
        }
    }

    /// The custom mapping of this type or, for a pointer, of its target.
    pub fn custom_through_pointer(&self) -> Option<&CustomMapping> {
        self.custom().or_else(|| match &self.kind {
            TypeKind::Pointer(target) => target.custom(),
            _ => None,
        })
    }

    /// Key under which the resolved schema type is cached.
    ///
    /// A pointer shares the key of its target. Lists, nested pointers and
    /// unnamed types are never cached.
    pub fn cache_key(&self) -> Option<&str> {
        let target = self.dereferenced();
        match target.kind {
            TypeKind::Pointer(_) | TypeKind::List(_) => None,
            _ if target.name.is_empty() => None,
            _ => Some(target.name.as_ref()),
        }
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A declared field of a record type.
#[derive(Clone)]
pub struct FieldInfo {
    ident: Cow<'static, str>,
    ty: fn() -> TypeInfo,
    public: bool,
    tags: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl FieldInfo {
    /// Creates a public field with no tags.
    ///
    /// The field type is supplied as a function so that a record may refer
    /// to itself without its description becoming infinite.
    pub fn new(ident: impl Into<Cow<'static, str>>, ty: fn() -> TypeInfo) -> Self {
        Self {
            ident: ident.into(),
            ty,
            public: true,
            tags: Vec::new(),
        }
    }

    /// Sets whether the field is publicly visible.
    #[must_use]
    pub fn public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }

    /// Adds a metadata tag.
    #[must_use]
    pub fn tag(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.tags.push((key.into(), value.into()));
        self
    }

    /// Declared identifier.
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// Description of the declared field type.
    pub fn type_info(&self) -> TypeInfo {
        (self.ty)()
    }

    pub fn is_public(&self) -> bool {
        self.public
    }

    /// Looks up a tag value by key. The first tag with the key wins.
    pub fn lookup_tag(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Debug for FieldInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldInfo")
            .field("ident", &self.ident)
            .field("public", &self.public)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}
