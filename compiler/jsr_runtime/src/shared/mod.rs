//! Thread-safe realm sharing.
//!
//! The runtime itself is single-threaded. A host that needs several threads
//! to touch one realm wraps it in `SharedRealm`, which serializes every
//! `get`, `set`, `initialize` and native call behind one whole-table lock.

// Arc is the implementation - all usage goes through the newtype
#![expect(
    clippy::disallowed_types,
    reason = "Arc is the implementation of SharedRealm"
)]

use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::Realm;

/// A realm behind `Arc<Mutex<_>>`.
pub struct SharedRealm(Arc<Mutex<Realm>>);

impl SharedRealm {
    pub fn new(realm: Realm) -> Self {
        SharedRealm(Arc::new(Mutex::new(realm)))
    }

    /// Lock the realm for the lifetime of the returned guard.
    pub fn lock(&self) -> MutexGuard<'_, Realm> {
        self.0.lock()
    }

    /// Run `f` with exclusive access to the realm.
    pub fn with<R>(&self, f: impl FnOnce(&mut Realm) -> R) -> R {
        f(&mut *self.0.lock())
    }
}

impl Clone for SharedRealm {
    fn clone(&self) -> Self {
        SharedRealm(Arc::clone(&self.0))
    }
}

impl From<Realm> for SharedRealm {
    fn from(realm: Realm) -> Self {
        Self::new(realm)
    }
}

impl fmt::Debug for SharedRealm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedRealm({:?})", &*self.0.lock())
    }
}
