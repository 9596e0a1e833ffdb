#![deny(clippy::arithmetic_side_effects)]
//! jsr runtime - values, global realm, and native builtins for the jsr
//! tree-walking interpreter.
//!
//! This crate is the data and calling contract the evaluator works against;
//! it does not parse or evaluate source itself.
//!
//! # Architecture
//!
//! - `Value`: booleans, strings, and host-implemented callables
//! - `NativeCallable`: the invocation contract for natives
//! - `Realm`: the global binding table, bootstrapped with `print` and `assert`
//! - `PrintHandler`: where `print` output goes (stdout, buffer, or nowhere)
//! - `SharedRealm`: a realm behind one lock, for multi-threaded hosts
//!
//! # Evaluator flow
//!
//! ```text
//! let mut realm = Realm::new();
//! realm.initialize();
//! let callee = realm.resolve("print")?;               // UnresolvedBinding if absent
//! callee.call(&mut realm, &[Value::string("hi")])?;   // typed failures, never exits
//! realm.set("x", Value::Bool(true));
//! ```

pub mod errors;
mod print_handler;
mod realm;
mod shared;
pub mod stdlib;
mod tracing_setup;
mod value;

pub use errors::{
    assertion_failed, not_callable, type_mismatch, unresolved_binding, CallResult, EvalError,
    EvalErrorKind,
};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandler, SharedPrintHandler,
};
pub use realm::{Realm, RealmBuilder};
pub use shared::SharedRealm;
pub use tracing_setup::{init_tracing, LOG_ENV_VAR};
pub use value::{Heap, NativeCallable, NativeFunction, Value, ValueKind};
