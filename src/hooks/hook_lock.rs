#[cfg(feature = "std")]
use std::sync as impl_;

#[cfg(not(feature = "std"))]
use spin as impl_;

/// A lazily filled, process-wide slot for one hook.
#[repr(transparent)]
pub(crate) struct HookLock<T: 'static + Copy + Send + Sync>(impl_::RwLock<Option<T>>);

impl<T: 'static + Copy + Send + Sync> HookLock<T> {
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self(impl_::RwLock::new(None))
    }

    /// Returns the installed hook, if any.
    #[inline]
    pub(crate) fn load(&'static self) -> Option<T> {
        #[cfg(not(feature = "std"))]
        let guard = self.0.read();

        // Hooks never run while the lock is held, so a poisoned lock still
        // holds a consistent value.
        #[cfg(feature = "std")]
        let guard = self.0.read().unwrap_or_else(std::sync::PoisonError::into_inner);

        *guard
    }

    /// Installs `hook` (or removes the hook for `None`) and returns the
    /// previous one.
    #[inline]
    pub(crate) fn replace(&'static self, hook: Option<T>) -> Option<T> {
        #[cfg(not(feature = "std"))]
        let mut guard = self.0.write();

        #[cfg(feature = "std")]
        let mut guard = self.0.write().unwrap_or_else(std::sync::PoisonError::into_inner);

        core::mem::replace(&mut *guard, hook)
    }
}
