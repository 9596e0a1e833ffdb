//! Runtime values for the jsr interpreter.
//!
//! # Heap Enforcement
//!
//! Strings and callables live behind `Heap<T>`, whose constructor is private
//! to this module. External code builds values through the factory methods:
//!
//! ```text
//! let s = Value::string("hello");                 // OK
//! let f = Value::native("noop", Noop);            // OK
//! let s = Value::Str(Heap::new(...));             // ERROR: Heap::new is pub(super)
//! ```
//!
//! Every payload is immutable after construction. Cloning a value shares its
//! payload, which is what lets the evaluator keep values alive after the
//! realm that produced them is gone.

mod heap;
mod native;

use std::fmt;

use crate::errors::{not_callable, CallResult};
use crate::Realm;

pub use heap::Heap;
pub use native::{NativeCallable, NativeFunction};

/// Runtime value in the jsr interpreter.
#[derive(Clone)]
pub enum Value {
    /// Boolean value.
    Bool(bool),
    /// String value.
    Str(Heap<String>),
    /// Host-implemented function.
    Native(NativeFunction),
}

/// The kind of a value, without its payload.
///
/// Used by natives to say which kind of argument they expected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Boolean,
    String,
    Callable,
}

impl ValueKind {
    /// Script-facing name of the kind (matches `typeof`).
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Boolean => "boolean",
            ValueKind::String => "string",
            ValueKind::Callable => "function",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Factory Methods

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a native function value.
    ///
    /// # Example
    ///
    /// ```text
    /// let noop = Value::native("noop", |_: &mut Realm, _: &[Value]| -> CallResult { Ok(()) });
    /// ```
    pub fn native(name: impl Into<String>, func: impl NativeCallable + 'static) -> Self {
        Value::Native(NativeFunction::new(name, func))
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Boolean,
            Value::Str(_) => ValueKind::String,
            Value::Native(_) => ValueKind::Callable,
        }
    }

    /// Get the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Try to convert to a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to convert to a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to view as a native function.
    pub fn as_native(&self) -> Option<&NativeFunction> {
        match self {
            Value::Native(f) => Some(f),
            _ => None,
        }
    }

    /// Display value for user output.
    ///
    /// Strings are emitted raw, without quotes or escapes; this is what
    /// `print` writes.
    pub fn display_value(&self) -> String {
        self.to_string()
    }

    /// Invoke this value as a function.
    ///
    /// Non-callable values yield a `NotCallable` error rather than panicking.
    pub fn call(&self, realm: &mut Realm, args: &[Value]) -> CallResult {
        match self {
            Value::Native(f) => f.invoke(realm, args),
            other => Err(not_callable(other.kind())),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Str(s) => f.write_str(s),
            Value::Native(func) => write!(f, "{func}"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Str(s) => write!(f, "Str({:?})", s.as_str()),
            Value::Native(func) => write!(f, "Native({})", func.name()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            // Functions are equal by instance identity
            (Value::Native(a), Value::Native(b)) => a.same_instance(b),
            _ => false,
        }
    }
}

impl Eq for Value {}
