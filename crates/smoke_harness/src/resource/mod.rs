//! Ownership wrappers for native resources
//!
//! A raw backend handle is only ever stored together with the operation that
//! releases it. [`Owned`] is the scoped form used for scratch resources that
//! must not escape the function creating them; [`Shared`] is the
//! reference-counted form handed to callers.
//!
//! Both carry the lifetime of whatever the release operation borrows (in
//! practice the [`LibraryContext`](crate::LibraryContext)), so a handle cannot
//! outlive the library it came from.

use std::fmt;
use std::rc::Rc;

type Release<'a, T> = Box<dyn FnOnce(T) + 'a>;

/// Sole owner of a raw resource; runs its release operation once on drop
pub struct Owned<'a, T: Copy> {
    raw: T,
    release: Option<Release<'a, T>>,
}

impl<'a, T: Copy> Owned<'a, T> {
    /// Bind `raw` to the operation that releases it
    pub fn new(raw: T, release: impl FnOnce(T) + 'a) -> Self {
        Self {
            raw,
            release: Some(Box::new(release)),
        }
    }

    /// The wrapped raw handle, valid for as long as `self` is alive
    pub const fn raw(&self) -> T {
        self.raw
    }
}

impl<T: Copy> Drop for Owned<'_, T> {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release(self.raw);
        }
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Owned<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Owned").field("raw", &self.raw).finish()
    }
}

/// Reference-counted raw resource; released when the last clone drops
///
/// Cloning only bumps the count. The release operation bound at construction
/// runs exactly once no matter which holder goes last.
pub struct Shared<'a, T: Copy> {
    inner: Rc<Owned<'a, T>>,
}

impl<'a, T: Copy> Shared<'a, T> {
    /// Bind `raw` to the operation that releases it
    pub fn new(raw: T, release: impl FnOnce(T) + 'a) -> Self {
        Self {
            inner: Rc::new(Owned::new(raw, release)),
        }
    }

    /// The wrapped raw handle, valid for as long as any clone is alive
    pub fn raw(&self) -> T {
        self.inner.raw()
    }

    /// Number of live holders of this resource
    pub fn holders(&self) -> usize {
        Rc::strong_count(&self.inner)
    }
}

impl<T: Copy> Clone for Shared<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Shared<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shared")
            .field("raw", &self.raw())
            .field("holders", &self.holders())
            .finish()
    }
}
