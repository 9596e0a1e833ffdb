//! Shared, immutable payload storage for heap-backed values.
//!
//! `Heap<T>` wraps `Arc<T>`. Its constructors are `pub(super)`, so the only
//! way to put a payload on the heap is through the factory methods on
//! `Value` and `NativeFunction`.

// Arc is the intentional implementation detail of Heap<T>
#![expect(clippy::disallowed_types, reason = "Arc is the whole point of Heap<T>")]

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use super::NativeCallable;

/// A reference-counted, immutable payload.
///
/// Cloning a `Heap` shares the allocation; the payload itself can never be
/// mutated once constructed.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Arc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }
}

impl Heap<dyn NativeCallable> {
    /// Erase a concrete callable behind the shared trait object.
    #[inline]
    pub(super) fn callable(func: impl NativeCallable + 'static) -> Self {
        let func: Arc<dyn NativeCallable> = Arc::new(func);
        Heap(func)
    }
}

impl<T: ?Sized> Heap<T> {
    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: ?Sized + Eq> Eq for Heap<T> {}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl<T: ?Sized> AsRef<T> for Heap<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deref_reaches_payload() {
        let h = Heap::new(String::from("payload"));
        assert_eq!(h.as_str(), "payload");
    }

    #[test]
    fn clone_shares_allocation() {
        let h1 = Heap::new(String::from("shared"));
        let h2 = h1.clone();
        assert!(Heap::ptr_eq(&h1, &h2));
    }

    #[test]
    fn eq_compares_payload_not_identity() {
        let h1 = Heap::new(String::from("hello"));
        let h2 = Heap::new(String::from("hello"));
        let h3 = Heap::new(String::from("world"));
        assert_eq!(h1, h2);
        assert!(!Heap::ptr_eq(&h1, &h2));
        assert_ne!(h1, h3);
    }
}
