//! Options that decorate fields, arguments and objects.
//!
//! An option sets one attribute on one kind of target and fails with
//! [`Error::OptionNotSupported`] on any other kind.
//!
//! | option | field | argument | object |
//! |---|---|---|---|
//! | [`with_name`] | yes | | yes |
//! | [`with_description`] | yes | yes | yes |
//! | [`with_default_value`] | | yes | |
//! | [`with_deprecation_reason`] | yes | | |
//! | [`with_resolver`] | yes | | |
//! | [`with_args`] / [`with_args_in`] | yes | | |
//! | [`with_type`] | yes | | |

use async_graphql::Value;

use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::reflect::{Reflect, TypeInfo};
use crate::schema::{Argument, Field, ObjectConfig, Resolver, SchemaType};

/// A descriptor an option can be applied to.
#[derive(Debug)]
pub enum Target<'a> {
    Field(&'a mut Field),
    Argument(&'a mut Argument),
    Object(&'a mut ObjectConfig),
}

impl Target<'_> {
    /// Name of the target kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Field(_) => "Field",
            Self::Argument(_) => "Argument",
            Self::Object(_) => "ObjectConfig",
        }
    }

    fn not_supported(&self) -> Error {
        Error::OptionNotSupported(self.kind())
    }
}

impl<'a> From<&'a mut Field> for Target<'a> {
    fn from(field: &'a mut Field) -> Self {
        Self::Field(field)
    }
}

impl<'a> From<&'a mut Argument> for Target<'a> {
    fn from(argument: &'a mut Argument) -> Self {
        Self::Argument(argument)
    }
}

impl<'a> From<&'a mut ObjectConfig> for Target<'a> {
    fn from(config: &'a mut ObjectConfig) -> Self {
        Self::Object(config)
    }
}

/// An option applied to a field, argument or object descriptor.
pub trait SchemaOption: Send + Sync {
    /// Applies the option.
    ///
    /// # Errors
    ///
    /// [`Error::OptionNotSupported`] if the target kind is not supported.
    fn apply(&self, target: Target<'_>) -> Result<()>;
}

/// Applies `options` in order to one target, stopping at the first failure.
pub fn apply_all<'a>(options: &[&dyn SchemaOption], target: impl Into<Target<'a>>) -> Result<()> {
    let mut target = target.into();
    for option in options {
        let reborrowed = match &mut target {
            Target::Field(field) => Target::Field(&mut **field),
            Target::Argument(argument) => Target::Argument(&mut **argument),
            Target::Object(config) => Target::Object(&mut **config),
        };
        option.apply(reborrowed)?;
    }
    Ok(())
}

/// Sets the name of a field or object.
#[derive(Debug, Clone)]
pub struct WithName(pub String);

pub fn with_name(name: impl Into<String>) -> WithName {
    WithName(name.into())
}

impl SchemaOption for WithName {
    fn apply(&self, target: Target<'_>) -> Result<()> {
        match target {
            Target::Field(field) => field.name = self.0.clone(),
            Target::Object(config) => config.name = self.0.clone(),
            other => return Err(other.not_supported()),
        }
        Ok(())
    }
}

/// Sets the description of a field, argument or object.
#[derive(Debug, Clone)]
pub struct WithDescription(pub String);

pub fn with_description(description: impl Into<String>) -> WithDescription {
    WithDescription(description.into())
}

impl SchemaOption for WithDescription {
    fn apply(&self, target: Target<'_>) -> Result<()> {
        let description = Some(self.0.clone());
        match target {
            Target::Field(field) => field.description = description,
            Target::Argument(argument) => argument.description = description,
            Target::Object(config) => config.description = description,
        }
        Ok(())
    }
}

/// Sets the default value of an argument.
#[derive(Debug, Clone)]
pub struct WithDefaultValue(pub Value);

pub fn with_default_value(value: impl Into<Value>) -> WithDefaultValue {
    WithDefaultValue(value.into())
}

impl SchemaOption for WithDefaultValue {
    fn apply(&self, target: Target<'_>) -> Result<()> {
        match target {
            Target::Argument(argument) => {
                argument.default_value = Some(self.0.clone());
                Ok(())
            }
            other => Err(other.not_supported()),
        }
    }
}

/// Marks a field as deprecated.
#[derive(Debug, Clone)]
pub struct WithDeprecationReason(pub String);

pub fn with_deprecation_reason(reason: impl Into<String>) -> WithDeprecationReason {
    WithDeprecationReason(reason.into())
}

impl SchemaOption for WithDeprecationReason {
    fn apply(&self, target: Target<'_>) -> Result<()> {
        match target {
            Target::Field(field) => {
                field.deprecation_reason = Some(self.0.clone());
                Ok(())
            }
            other => Err(other.not_supported()),
        }
    }
}

/// Sets the resolver of a field.
#[derive(Debug, Clone)]
pub struct WithResolver(pub Resolver);

pub fn with_resolver(resolver: Resolver) -> WithResolver {
    WithResolver(resolver)
}

impl SchemaOption for WithResolver {
    fn apply(&self, target: Target<'_>) -> Result<()> {
        match target {
            Target::Field(field) => {
                field.resolver = Some(self.0.clone());
                Ok(())
            }
            other => Err(other.not_supported()),
        }
    }
}

/// Sets the type of a field.
#[derive(Debug, Clone)]
pub struct WithType(pub SchemaType);

pub fn with_type(ty: SchemaType) -> WithType {
    WithType(ty)
}

impl SchemaOption for WithType {
    fn apply(&self, target: Target<'_>) -> Result<()> {
        match target {
            Target::Field(field) => {
                field.ty = self.0.clone();
                Ok(())
            }
            other => Err(other.not_supported()),
        }
    }
}

/// Sets the arguments of a field from a record type.
///
/// The arguments are built when the option is applied.
#[derive(Debug, Clone)]
pub struct WithArgs {
    engine: Option<Engine>,
    args: TypeInfo,
}

/// Arguments built from the type of `value` with a fresh engine.
pub fn with_args<T: Reflect + ?Sized>(value: &T) -> WithArgs {
    WithArgs {
        engine: None,
        args: TypeInfo::of_val(value),
    }
}

/// Arguments built from the type of `value` with `engine`.
pub fn with_args_in<T: Reflect + ?Sized>(engine: &Engine, value: &T) -> WithArgs {
    WithArgs {
        engine: Some(engine.clone()),
        args: TypeInfo::of_val(value),
    }
}

impl SchemaOption for WithArgs {
    fn apply(&self, target: Target<'_>) -> Result<()> {
        match target {
            Target::Field(field) => {
                let args = match &self.engine {
                    Some(engine) => engine.args_of(&self.args)?,
                    None => Engine::new().args_of(&self.args)?,
                };
                field.args = args;
                Ok(())
            }
            other => Err(other.not_supported()),
        }
    }
}

/// Builds a [`WithArgs`] option.
///
/// Takes either a representative value, or an engine and a representative
/// value. Any other form is rejected at compile time.
///
/// ```ignore
/// let option = with_args!(PersonFilter::default());
/// let option = with_args!(engine, PersonFilter::default());
/// ```
#[macro_export]
macro_rules! with_args {
    ($value:expr $(,)?) => {
        $crate::options::with_args(&$value)
    };
    ($engine:expr, $value:expr $(,)?) => {
        $crate::options::with_args_in(&$engine, &$value)
    };
    ($($other:tt)*) => {
        compile_error!("with_args! takes `(value)` or `(engine, value)`")
    };
}
