//! Call Key Module
//!
//! Canonical cache keys for memoized calls whose argument lists are
//! heterogeneous or only known at runtime.
//!
//! Calls with a fixed shape do not need this: any `Hash + Eq` type, tuples
//! included, already works as a [`Memoized`](crate::memo::Memoized) argument
//! bundle. `CallKey` covers the rest: mixed value types, floats (which are
//! not `Hash`), named parameters, and variable arity.

use std::hash::{Hash, Hasher};
use std::mem::discriminant;

// == Argument Value ==
/// A single argument in canonical form.
///
/// Two values are equal only when both the variant and the payload match, so
/// `Int(1)`, `UInt(1)` and `Float(1.0)` are three distinct keys; callers who
/// want them unified must normalize before keying. Floats compare and hash
/// by bit pattern: `0.0` and `-0.0` are distinct, and a NaN equals a NaN
/// with the same bits.
#[derive(Debug, Clone)]
pub enum ArgValue {
    /// Boolean argument
    Bool(bool),
    /// Signed integer argument
    Int(i64),
    /// Unsigned integer argument
    UInt(u64),
    /// Floating point argument, compared by bit pattern
    Float(f64),
    /// String argument
    Str(String),
    /// Raw byte argument
    Bytes(Vec<u8>),
    /// Nested sequence of arguments
    List(Vec<ArgValue>),
}

impl ArgValue {
    /// Returns the boolean payload if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the integer payload if this is an `Int`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the unsigned payload if this is a `UInt`.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::UInt(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the float payload if this is a `Float`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the string payload if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }
}

impl PartialEq for ArgValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::UInt(a), Self::UInt(b)) => a == b,
            // Bit equality keeps Eq reflexive for NaN payloads
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for ArgValue {}

impl Hash for ArgValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        discriminant(self).hash(state);
        match self {
            Self::Bool(value) => value.hash(state),
            Self::Int(value) => value.hash(state),
            Self::UInt(value) => value.hash(state),
            Self::Float(value) => value.to_bits().hash(state),
            Self::Str(value) => value.hash(state),
            Self::Bytes(value) => value.hash(state),
            Self::List(values) => values.hash(state),
        }
    }
}

// == Conversions ==
impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for ArgValue {
    fn from(value: u32) -> Self {
        Self::UInt(u64::from(value))
    }
}

impl From<u64> for ArgValue {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<f32> for ArgValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<u8>> for ArgValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<Vec<ArgValue>> for ArgValue {
    fn from(value: Vec<ArgValue>) -> Self {
        Self::List(value)
    }
}

// == Call Argument ==
/// One component of a [`CallKey`]: positional, or named with the caller's
/// spelling of the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CallArg {
    /// Argument identified by position
    Positional(ArgValue),
    /// Argument identified by name
    Named(String, ArgValue),
}

// == Call Key ==
/// The ordered concatenation of a call's positional and named arguments.
///
/// Keys compare element-wise in the order the arguments were appended. Two
/// calls supplying the same named arguments in a different order therefore
/// build two distinct keys and miss independently; callers needing a single
/// canonical form must append names in a fixed order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CallKey {
    parts: Vec<CallArg>,
}

impl CallKey {
    /// Creates an empty key, the key of a zero-argument call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument.
    pub fn arg(mut self, value: impl Into<ArgValue>) -> Self {
        self.parts.push(CallArg::Positional(value.into()));
        self
    }

    /// Appends a named argument.
    pub fn named(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.parts.push(CallArg::Named(name.into(), value.into()));
        self
    }

    /// Returns the number of arguments in the key.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns true if the key has no arguments.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Returns all components in append order.
    pub fn args(&self) -> &[CallArg] {
        &self.parts
    }

    /// Returns the `index`-th positional argument, counting positionals
    /// only.
    pub fn positional(&self, index: usize) -> Option<&ArgValue> {
        self.parts
            .iter()
            .filter_map(|part| match part {
                CallArg::Positional(value) => Some(value),
                CallArg::Named(..) => None,
            })
            .nth(index)
    }

    /// Returns the value of the named argument `name`, if present.
    pub fn named_arg(&self, name: &str) -> Option<&ArgValue> {
        self.parts.iter().find_map(|part| match part {
            CallArg::Named(part_name, value) if part_name == name => Some(value),
            _ => None,
        })
    }
}
