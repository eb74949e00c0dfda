//! Typed values produced by transform conversion functions.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// The typed result of converting a captured substring.
///
/// # Examples
/// ```
/// use cukexpr::Value;
///
/// assert_eq!(Value::Int(42).as_int(), Some(42));
/// assert_eq!(Value::from("cukes").as_str(), Some("cukes"));
///
/// #[derive(Debug, PartialEq)]
/// struct Money(u32);
/// let value = Value::custom(Money(5));
/// assert_eq!(value.downcast_ref::<Money>(), Some(&Money(5)));
/// ```
#[derive(Clone)]
pub enum Value {
    /// A signed integer, produced by the built-in `int` transform.
    Int(i64),
    /// A floating point number, produced by the built-in `float` transform.
    Float(f64),
    /// A string, produced by the identity transform.
    Str(String),
    /// Any user-defined type produced by a custom transform.
    Custom(Arc<dyn Any + Send + Sync>),
}

impl Value {
    /// Wrap a user-defined value.
    #[must_use]
    pub fn custom<T: Any + Send + Sync>(value: T) -> Self {
        Self::Custom(Arc::new(value))
    }

    /// Return the integer payload, if any.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Return the float payload, if any.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Return the string payload, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    /// Borrow a custom payload as `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Custom(value) => value.downcast_ref::<T>(),
            _ => None,
        }
    }
}

// Custom payloads compare by identity; there is no general equality for `dyn Any`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => f.debug_tuple("Int").field(value).finish(),
            Self::Float(value) => f.debug_tuple("Float").field(value).finish(),
            Self::Str(value) => f.debug_tuple("Str").field(value).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}
