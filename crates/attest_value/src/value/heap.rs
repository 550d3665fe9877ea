//! Shared storage for collection values.

use std::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared, identity-carrying storage behind every collection [`Value`].
///
/// The constructor is crate-private: collection values are only created
/// through `Value` factory methods. Two `Heap`s are "the same instance" iff
/// they share the allocation (`ptr_eq`), regardless of contents. The inner
/// lock is what lets callers grow a collection after it has been placed
/// inside another value, which is how self-referential graphs are built.
///
/// [`Value`]: crate::Value
pub struct Heap<T>(Arc<RwLock<T>>);

impl<T> Heap<T> {
    pub(crate) fn new(contents: T) -> Self {
        Heap(Arc::new(RwLock::new(contents)))
    }

    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.0.read()
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.0.write()
    }

    /// Clone of the current contents. Renderers recurse over a snapshot so
    /// no lock is held across the recursion.
    pub fn snapshot(&self) -> T
    where
        T: Clone,
    {
        self.0.read().clone()
    }

    /// Instance identity, independent of contents.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Stable address of the allocation, used as a cycle-detection key.
    pub fn addr(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }
}

impl<T> Clone for Heap<T> {
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.read().fmt(f)
    }
}
