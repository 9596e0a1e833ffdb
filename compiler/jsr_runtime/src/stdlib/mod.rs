//! Standard native functions installed by `Realm::initialize`.
//!
//! Each builtin is a unit struct implementing `NativeCallable`, bound under
//! its canonical name. The display name always matches the binding name.

mod assert;
mod print;

use crate::{Realm, Value};

pub use assert::Assert;
pub use print::Print;

/// Canonical binding name of [`Print`].
pub const PRINT: &str = "print";
/// Canonical binding name of [`Assert`].
pub const ASSERT: &str = "assert";

/// Bind every standard native into `realm`, returning how many were bound.
pub(crate) fn install(realm: &mut Realm) -> usize {
    let natives = [
        (PRINT, Value::native(PRINT, Print)),
        (ASSERT, Value::native(ASSERT, Assert)),
    ];
    let count = natives.len();
    for (name, native) in natives {
        realm.set(name, native);
    }
    count
}
