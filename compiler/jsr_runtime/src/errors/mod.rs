//! Error types for the runtime.
//!
//! Failures raised by realm lookups and native calls are values, never
//! process exits. The evaluator decides how to surface them: abort the
//! current script, turn them into catchable script exceptions, and so on.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` carries the typed category. Factory functions (e.g.
//! `type_mismatch()`) are the public construction API and fill in both
//! `kind` and `message`.

use std::fmt;

use crate::ValueKind;

/// Result of invoking a native callable. Natives return no value.
pub type CallResult = Result<(), EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// A free identifier has no binding in the realm.
    UnresolvedBinding { name: String },

    /// An argument to a native had the wrong kind. `found` is `None` when
    /// the call passed fewer arguments than `index + 1`.
    TypeMismatch {
        index: usize,
        expected: ValueKind,
        found: Option<ValueKind>,
    },
    /// A value that is not a function was invoked.
    NotCallable { found: ValueKind },

    /// Script code called `assert` with a false condition.
    AssertionFailed { message: Option<String> },

    /// Host-defined failure with no structured category.
    Custom { message: String },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedBinding { name } => write!(f, "{name} is not defined"),
            Self::TypeMismatch {
                index,
                expected,
                found: Some(found),
            } => write!(f, "argument {index}: expected {expected}, got {found}"),
            Self::TypeMismatch {
                index,
                expected,
                found: None,
            } => write!(f, "argument {index}: expected {expected}, got nothing"),
            Self::NotCallable { found } => write!(f, "{found} is not a function"),
            Self::AssertionFailed { message: None } => write!(f, "assertion failed"),
            Self::AssertionFailed {
                message: Some(message),
            } => write!(f, "assertion failed: {message}"),
            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message, equal to `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    /// Create an error with just a message.
    ///
    /// Uses `Custom` kind. Prefer the factory functions when a structured
    /// kind fits.
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_kind(EvalErrorKind::Custom {
            message: message.into(),
        })
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        Self::from_kind(kind)
    }
}

/// Name lookup found no binding.
#[cold]
pub fn unresolved_binding(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnresolvedBinding {
        name: name.to_string(),
    })
}

/// Argument `index` had kind `found` (or was absent) where `expected` was required.
#[cold]
pub fn type_mismatch(index: usize, expected: ValueKind, found: Option<ValueKind>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        index,
        expected,
        found,
    })
}

/// Invoked a value of kind `found`, which is not callable.
#[cold]
pub fn not_callable(found: ValueKind) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable { found })
}

/// `assert` saw a false condition.
#[cold]
pub fn assertion_failed(message: Option<&str>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::AssertionFailed {
        message: message.map(str::to_string),
    })
}
