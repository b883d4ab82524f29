//! `Reflect` implementations for standard and well-known types.

use std::any::Any;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;
use std::time::SystemTime;

use super::{Primitive, Reflect, TypeInfo};

macro_rules! reflect_primitive {
    ($($ty:ty => $primitive:ident),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn type_info() -> TypeInfo {
                    TypeInfo::primitive(stringify!($ty), Primitive::$primitive)
                }
            }
        )*
    };
}

reflect_primitive! {
    bool => Bool,
    char => Char,
    str => Str,
    String => Str,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
}

impl<T: Reflect> Reflect for Option<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::pointer(T::type_info())
    }
}

// Ownership wrappers describe as the type they wrap.
macro_rules! reflect_transparent {
    ($($wrapper:ident),* $(,)?) => {
        $(
            impl<T: Reflect + ?Sized> Reflect for $wrapper<T> {
                fn type_info() -> TypeInfo {
                    T::type_info()
                }
            }
        )*
    };
}

reflect_transparent!(Box, Rc, Arc);

impl<T: Reflect + ?Sized> Reflect for &T {
    fn type_info() -> TypeInfo {
        T::type_info()
    }
}

impl<T: Reflect + ?Sized> Reflect for &mut T {
    fn type_info() -> TypeInfo {
        T::type_info()
    }
}

impl<T: Reflect + ToOwned + ?Sized> Reflect for Cow<'_, T> {
    fn type_info() -> TypeInfo {
        T::type_info()
    }
}

macro_rules! reflect_list {
    ($($collection:ident),* $(,)?) => {
        $(
            impl<T: Reflect> Reflect for $collection<T> {
                fn type_info() -> TypeInfo {
                    TypeInfo::list(T::type_info())
                }
            }
        )*
    };
}

reflect_list!(Vec, VecDeque, HashSet, BTreeSet);

impl<T: Reflect> Reflect for [T] {
    fn type_info() -> TypeInfo {
        TypeInfo::list(T::type_info())
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn type_info() -> TypeInfo {
        TypeInfo::list(T::type_info())
    }
}

impl<K: Reflect, V: Reflect> Reflect for HashMap<K, V> {
    fn type_info() -> TypeInfo {
        TypeInfo::opaque(format!("HashMap<{}, {}>", K::type_info(), V::type_info()))
    }
}

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
    fn type_info() -> TypeInfo {
        TypeInfo::opaque(format!("BTreeMap<{}, {}>", K::type_info(), V::type_info()))
    }
}

impl Reflect for serde_json::Value {
    fn type_info() -> TypeInfo {
        TypeInfo::opaque("serde_json::Value")
    }
}

impl Reflect for dyn Any {
    fn type_info() -> TypeInfo {
        TypeInfo::opaque("dyn Any")
    }
}

impl Reflect for dyn Any + Send + Sync {
    fn type_info() -> TypeInfo {
        TypeInfo::opaque("dyn Any + Send + Sync")
    }
}

impl Reflect for time::OffsetDateTime {
    fn type_info() -> TypeInfo {
        TypeInfo::timestamp("OffsetDateTime")
    }
}

impl Reflect for time::PrimitiveDateTime {
    fn type_info() -> TypeInfo {
        TypeInfo::timestamp("PrimitiveDateTime")
    }
}

impl Reflect for SystemTime {
    fn type_info() -> TypeInfo {
        TypeInfo::timestamp("SystemTime")
    }
}

impl Reflect for uuid::Uuid {
    fn type_info() -> TypeInfo {
        TypeInfo::uuid("Uuid")
    }
}
