//! The global binding table of one execution context.
//!
//! A realm maps identifier text to values. The evaluator resolves free
//! identifiers against it, installs declarations into it, and passes it to
//! every native call so builtins can read and write globals.
//!
//! There is no hidden global realm: whoever owns the `Realm` passes it by
//! reference to whatever needs scope.

mod builder;

use std::fmt;

use rustc_hash::FxHashMap;

use crate::errors::{unresolved_binding, CallResult, EvalError};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::stdlib;
use crate::Value;

pub use builder::RealmBuilder;

/// Global scope for one execution context.
pub struct Realm {
    /// Name → value bindings. Keys are case-sensitive; not iterated, so
    /// ordering is irrelevant.
    bindings: FxHashMap<String, Value>,
    /// Destination for `print`.
    print_handler: SharedPrintHandler,
}

impl Realm {
    /// Create an empty realm that prints to stdout.
    ///
    /// Nothing is bound yet; call [`Realm::initialize`] to install the
    /// standard natives.
    pub fn new() -> Self {
        Self::with_print_handler(stdout_handler())
    }

    /// Create an empty realm that prints through `print_handler`.
    pub fn with_print_handler(print_handler: SharedPrintHandler) -> Self {
        Realm {
            bindings: FxHashMap::default(),
            print_handler,
        }
    }

    pub fn builder() -> RealmBuilder {
        RealmBuilder::new()
    }

    /// Install the standard natives (`print`, `assert`).
    ///
    /// Calling this again rebinds the same names to fresh instances; values
    /// fetched before the second call stay valid but are no longer the bound ones.
    pub fn initialize(&mut self) {
        let installed = stdlib::install(self);
        tracing::debug!(installed, "realm initialized with standard natives");
    }

    /// Look up `name`. `None` means unbound.
    #[inline]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).cloned()
    }

    /// Bind `name` to `value`, replacing any previous binding.
    #[inline]
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        tracing::trace!(%name, kind = %value.kind(), "bind");
        self.bindings.insert(name, value);
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Look up `name`, treating absence as an `UnresolvedBinding` error.
    pub fn resolve(&self, name: &str) -> Result<Value, EvalError> {
        self.get(name).ok_or_else(|| unresolved_binding(name))
    }

    /// Resolve `name` and invoke it with `args`.
    #[tracing::instrument(level = "debug", skip(self, args), fields(argc = args.len()))]
    pub fn call(&mut self, name: &str, args: &[Value]) -> CallResult {
        let callee = self.resolve(name)?;
        let result = callee.call(self, args);
        if let Err(err) = &result {
            tracing::debug!(%err, "native call failed");
        }
        result
    }

    /// Where `print` writes.
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for Realm {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Realm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Realm").field("bindings", &names).finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
