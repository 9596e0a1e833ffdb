//! Host-implemented callables.
//!
//! A native function is the only kind of callable value the runtime knows
//! about. The evaluator hands it the current realm and the already-evaluated
//! arguments in source order; argument count and kinds are checked by the
//! callee, never by the caller.

use std::fmt;

use super::{Heap, Value};
use crate::errors::CallResult;
use crate::Realm;

/// The invocation contract for a host-implemented function.
///
/// `Send + Sync` so a realm holding natives can sit behind a `SharedRealm`.
pub trait NativeCallable: Send + Sync {
    /// Run the native against `realm` with positional `args`.
    fn invoke(&self, realm: &mut Realm, args: &[Value]) -> CallResult;
}

impl<F> NativeCallable for F
where
    F: Fn(&mut Realm, &[Value]) -> CallResult + Send + Sync,
{
    #[inline]
    fn invoke(&self, realm: &mut Realm, args: &[Value]) -> CallResult {
        self(realm, args)
    }
}

/// A named native function value.
///
/// The display name is fixed at construction. Clones share both the name and
/// the callable, so identity survives being copied in and out of a realm.
#[derive(Clone)]
pub struct NativeFunction {
    name: Heap<String>,
    func: Heap<dyn NativeCallable>,
}

impl NativeFunction {
    pub fn new(name: impl Into<String>, func: impl NativeCallable + 'static) -> Self {
        NativeFunction {
            name: Heap::new(name.into()),
            func: Heap::callable(func),
        }
    }

    /// The display name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn invoke(&self, realm: &mut Realm, args: &[Value]) -> CallResult {
        self.func.invoke(realm, args)
    }

    /// Whether `self` and `other` are the same function instance.
    pub fn same_instance(&self, other: &NativeFunction) -> bool {
        Heap::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Display for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "function {}() {{ [native code] }}", self.name)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NativeFunction").field(&*self.name).finish()
    }
}
