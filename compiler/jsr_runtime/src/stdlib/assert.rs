//! `assert(condition, message?)`.

use crate::errors::{assertion_failed, type_mismatch, CallResult};
use crate::{NativeCallable, Realm, Value, ValueKind};

/// Fails with `AssertionFailed` when `condition` is `false`.
///
/// `condition` must be a boolean; a missing one is a type mismatch on
/// argument 0 like any other non-boolean. The optional second argument is
/// used as the failure message only when it is a string; anything else is
/// ignored, as are arguments past the second. Success has no observable effect.
#[derive(Clone, Copy, Debug)]
pub struct Assert;

impl NativeCallable for Assert {
    fn invoke(&self, _realm: &mut Realm, args: &[Value]) -> CallResult {
        match args.first() {
            Some(Value::Bool(true)) => Ok(()),
            Some(Value::Bool(false)) => {
                Err(assertion_failed(args.get(1).and_then(Value::as_str)))
            }
            other => Err(type_mismatch(0, ValueKind::Boolean, other.map(Value::kind))),
        }
    }
}
