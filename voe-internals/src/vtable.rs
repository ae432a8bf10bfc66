//! Per-variant function pointers.
//!
//! Each vtable in this module is built by a `const fn new::<T>()` that pairs
//! its function pointers with one concrete variant type `T`. The fields are
//! private to this module, which guarantees the safety invariant: **a vtable
//! obtained for `T` only ever points at the functions below instantiated
//! with `T`**. Callers must still ensure that the pointers they pass in point
//! at a live `T`; the `# Safety` sections spell out what that means for each
//! operation.
//!
//! Operations are split by capability so that a variant list only needs
//! `Clone` for cloning, `Debug` for formatting and `PartialEq` for
//! comparison.

use core::{fmt, ptr::NonNull};

/// Operations every variant supports: naming, dropping and moving.
///
/// # Safety Invariant
///
/// The fields `drop`, `move_into` and `move_assign` point to the functions
/// defined below instantiated with the variant type `T` used to create this
/// [`VariantVtable`].
#[derive(Clone, Copy)]
pub struct VariantVtable {
    /// Gets the name of the variant type.
    type_name: fn() -> &'static str,
    /// Drops the `T` pointed to in place.
    drop: unsafe fn(NonNull<u8>),
    /// Moves a `T` out of the first pointer into uninitialized memory at the
    /// second pointer.
    move_into: unsafe fn(NonNull<u8>, NonNull<u8>),
    /// Moves a `T` out of the first pointer and assigns it over the live `T`
    /// at the second pointer.
    move_assign: unsafe fn(NonNull<u8>, NonNull<u8>),
}

impl VariantVtable {
    /// Creates a new [`VariantVtable`] for the variant type `T`.
    pub const fn new<T>() -> Self {
        Self {
            type_name: core::any::type_name::<T>,
            drop: drop::<T>,
            move_into: move_into::<T>,
            move_assign: move_assign::<T>,
        }
    }

    /// Gets the name of the variant type used to create this
    /// [`VariantVtable`].
    #[inline]
    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Drops the variant pointed to by `ptr` in place.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. `ptr` points to a live, properly aligned value of the variant type
    ///    of this [`VariantVtable`].
    /// 2. The value is not used again after this call, and nothing else
    ///    drops it.
    #[inline]
    pub unsafe fn drop(&self, ptr: NonNull<u8>) {
        // SAFETY: `self.drop` points to `drop::<T>` for the variant type `T` of
        // this vtable. Its safety requirements are upheld:
        // 1. Guaranteed by the caller
        // 2. Guaranteed by the caller
        unsafe {
            (self.drop)(ptr);
        }
    }

    /// Moves the variant out of `src` and writes it to `dst`, which must not
    /// hold a live value.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. `src` points to a live, properly aligned value of the variant type
    ///    of this [`VariantVtable`].
    /// 2. `dst` is valid for writes of that type and properly aligned.
    /// 3. The value at `src` is treated as moved-out after this call: it is
    ///    neither used nor dropped again.
    #[inline]
    pub unsafe fn move_into(&self, src: NonNull<u8>, dst: NonNull<u8>) {
        // SAFETY: `self.move_into` points to `move_into::<T>` for the variant
        // type `T` of this vtable. Its safety requirements are upheld:
        // 1. Guaranteed by the caller
        // 2. Guaranteed by the caller
        // 3. Guaranteed by the caller
        unsafe {
            (self.move_into)(src, dst);
        }
    }

    /// Moves the variant out of `src` and assigns it over the live variant
    /// at `dst`. The previous value at `dst` is dropped.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. `src` and `dst` both point to live, properly aligned values of the
    ///    variant type of this [`VariantVtable`], and do not overlap.
    /// 2. The value at `src` is treated as moved-out after this call: it is
    ///    neither used nor dropped again.
    #[inline]
    pub unsafe fn move_assign(&self, src: NonNull<u8>, dst: NonNull<u8>) {
        // SAFETY: `self.move_assign` points to `move_assign::<T>` for the
        // variant type `T` of this vtable. Its safety requirements are upheld:
        // 1. Guaranteed by the caller
        // 2. Guaranteed by the caller
        unsafe {
            (self.move_assign)(src, dst);
        }
    }
}

/// Clone operations for a variant type that implements [`Clone`].
///
/// # Safety Invariant
///
/// The fields point to the functions defined below instantiated with the
/// variant type `T` used to create this [`CloneVtable`].
#[derive(Clone, Copy)]
pub struct CloneVtable {
    /// Clones the `T` at the first pointer into uninitialized memory at the
    /// second pointer.
    clone_into: unsafe fn(NonNull<u8>, NonNull<u8>),
    /// Runs [`Clone::clone_from`] on the live `T` at the second pointer with
    /// the `T` at the first pointer as source.
    clone_from: unsafe fn(NonNull<u8>, NonNull<u8>),
}

impl CloneVtable {
    /// Creates a new [`CloneVtable`] for the variant type `T`.
    pub const fn new<T: Clone>() -> Self {
        Self {
            clone_into: clone_into::<T>,
            clone_from: clone_from::<T>,
        }
    }

    /// Clones the variant at `src` into `dst`, which must not hold a live
    /// value.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. `src` points to a live, properly aligned value of the variant type
    ///    of this [`CloneVtable`].
    /// 2. `dst` is valid for writes of that type, properly aligned, and does
    ///    not overlap `src`.
    #[inline]
    pub unsafe fn clone_into(&self, src: NonNull<u8>, dst: NonNull<u8>) {
        // SAFETY: `self.clone_into` points to `clone_into::<T>` for the variant
        // type `T` of this vtable. Its safety requirements are upheld:
        // 1. Guaranteed by the caller
        // 2. Guaranteed by the caller
        unsafe {
            (self.clone_into)(src, dst);
        }
    }

    /// Clone-assigns the variant at `src` onto the live variant at `dst`.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. `src` and `dst` both point to live, properly aligned values of the
    ///    variant type of this [`CloneVtable`], and do not overlap.
    #[inline]
    pub unsafe fn clone_from(&self, src: NonNull<u8>, dst: NonNull<u8>) {
        // SAFETY: `self.clone_from` points to `clone_from::<T>` for the variant
        // type `T` of this vtable. Its safety requirements are upheld:
        // 1. Guaranteed by the caller
        unsafe {
            (self.clone_from)(src, dst);
        }
    }
}

/// Debug formatting for a variant type that implements [`fmt::Debug`].
///
/// # Safety Invariant
///
/// `debug` points to the function defined below instantiated with the
/// variant type `T` used to create this [`DebugVtable`].
#[derive(Clone, Copy)]
pub struct DebugVtable {
    /// Formats the `T` pointed to as a tuple struct named by the `&str`.
    debug: unsafe fn(NonNull<u8>, &str, &mut fmt::Formatter<'_>) -> fmt::Result,
}

impl DebugVtable {
    /// Creates a new [`DebugVtable`] for the variant type `T`.
    pub const fn new<T: fmt::Debug>() -> Self {
        Self { debug: debug::<T> }
    }

    /// Formats the variant at `ptr` as `name(variant)`.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. `ptr` points to a live, properly aligned value of the variant type
    ///    of this [`DebugVtable`], which stays alive for the duration of the
    ///    call.
    #[inline]
    pub unsafe fn debug(
        &self,
        ptr: NonNull<u8>,
        name: &str,
        formatter: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        // SAFETY: `self.debug` points to `debug::<T>` for the variant type `T`
        // of this vtable. Its safety requirements are upheld:
        // 1. Guaranteed by the caller
        unsafe { (self.debug)(ptr, name, formatter) }
    }
}

/// Equality for a variant type that implements [`PartialEq`].
///
/// # Safety Invariant
///
/// `eq` points to the function defined below instantiated with the variant
/// type `T` used to create this [`EqVtable`].
#[derive(Clone, Copy)]
pub struct EqVtable {
    /// Compares the two `T` values pointed to.
    eq: unsafe fn(NonNull<u8>, NonNull<u8>) -> bool,
}

impl EqVtable {
    /// Creates a new [`EqVtable`] for the variant type `T`.
    pub const fn new<T: PartialEq>() -> Self {
        Self { eq: eq::<T> }
    }

    /// Compares the variants at `lhs` and `rhs`.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. `lhs` and `rhs` both point to live, properly aligned values of the
    ///    variant type of this [`EqVtable`], which stay alive for the duration
    ///    of the call.
    #[inline]
    pub unsafe fn eq(&self, lhs: NonNull<u8>, rhs: NonNull<u8>) -> bool {
        // SAFETY: `self.eq` points to `eq::<T>` for the variant type `T` of
        // this vtable. Its safety requirements are upheld:
        // 1. Guaranteed by the caller
        unsafe { (self.eq)(lhs, rhs) }
    }
}

/// Drops the `T` pointed to by `ptr` in place.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. `ptr` points to a live, properly aligned `T`.
/// 2. The `T` is not used again after this call.
unsafe fn drop<T>(ptr: NonNull<u8>) {
    // SAFETY:
    // 1. Guaranteed by the caller
    // 2. Guaranteed by the caller
    unsafe {
        ptr.cast::<T>().drop_in_place();
    }
}

/// Moves the `T` at `src` into uninitialized memory at `dst`.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. `src` points to a live, properly aligned `T`.
/// 2. `dst` is valid for writes of `T` and properly aligned.
/// 3. The `T` at `src` is not used or dropped after this call.
unsafe fn move_into<T>(src: NonNull<u8>, dst: NonNull<u8>) {
    // SAFETY:
    // 1. Guaranteed by the caller
    // 3. Guaranteed by the caller, so reading creates the only owner
    let value = unsafe { src.cast::<T>().read() };
    // SAFETY:
    // 2. Guaranteed by the caller
    unsafe {
        dst.cast::<T>().write(value);
    }
}

/// Moves the `T` at `src` and assigns it over the live `T` at `dst`.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. `src` and `dst` point to live, properly aligned `T` values that do
///    not overlap.
/// 2. The `T` at `src` is not used or dropped after this call.
unsafe fn move_assign<T>(src: NonNull<u8>, dst: NonNull<u8>) {
    // SAFETY:
    // 1. Guaranteed by the caller
    // 2. Guaranteed by the caller, so reading creates the only owner
    let value = unsafe { src.cast::<T>().read() };
    // SAFETY:
    // 1. Guaranteed by the caller, so `dst` is a live `T` that we may borrow
    //    mutably for the assignment
    let slot = unsafe { dst.cast::<T>().as_mut() };
    *slot = value;
}

/// Clones the `T` at `src` into uninitialized memory at `dst`.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. `src` points to a live, properly aligned `T`.
/// 2. `dst` is valid for writes of `T`, properly aligned, and does not
///    overlap `src`.
unsafe fn clone_into<T: Clone>(src: NonNull<u8>, dst: NonNull<u8>) {
    // SAFETY:
    // 1. Guaranteed by the caller
    let source = unsafe { src.cast::<T>().as_ref() };
    let value = source.clone();
    // SAFETY:
    // 2. Guaranteed by the caller
    unsafe {
        dst.cast::<T>().write(value);
    }
}

/// Runs [`Clone::clone_from`] on the `T` at `dst` with the `T` at `src`.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. `src` and `dst` point to live, properly aligned `T` values that do not
///    overlap.
unsafe fn clone_from<T: Clone>(src: NonNull<u8>, dst: NonNull<u8>) {
    // SAFETY:
    // 1. Guaranteed by the caller
    let source = unsafe { src.cast::<T>().as_ref() };
    // SAFETY:
    // 1. Guaranteed by the caller, and `dst` does not overlap `src`
    let target = unsafe { dst.cast::<T>().as_mut() };
    target.clone_from(source);
}

/// Formats the `T` at `ptr` as `name(value)`.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. `ptr` points to a live, properly aligned `T`.
unsafe fn debug<T: fmt::Debug>(
    ptr: NonNull<u8>,
    name: &str,
    formatter: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    // SAFETY:
    // 1. Guaranteed by the caller
    let value = unsafe { ptr.cast::<T>().as_ref() };
    formatter.debug_tuple(name).field(value).finish()
}

/// Compares the `T` values at `lhs` and `rhs`.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. `lhs` and `rhs` point to live, properly aligned `T` values.
unsafe fn eq<T: PartialEq>(lhs: NonNull<u8>, rhs: NonNull<u8>) -> bool {
    // SAFETY:
    // 1. Guaranteed by the caller
    let lhs = unsafe { lhs.cast::<T>().as_ref() };
    // SAFETY:
    // 1. Guaranteed by the caller
    let rhs = unsafe { rhs.cast::<T>().as_ref() };
    lhs == rhs
}
