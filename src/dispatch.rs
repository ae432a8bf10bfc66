//! Visiting the live variant.
//!
//! A [`Visitor`] is implemented once per variant type it accepts. The list
//! traits [`VisitRef`], [`VisitMut`] and [`VisitOwned`] hold when a visitor
//! accepts every variant of a list in the matching form; their methods pick
//! the variant by slot with a recursive match, so a visit compiles down to a
//! jump on the tag.
//!
//! ```
//! use voe::prelude::*;
//!
//! struct Describe;
//!
//! impl Visitor<&u32> for Describe {
//!     type Output = String;
//!     fn visit(self, value: &u32) -> String {
//!         format!("value {value}")
//!     }
//! }
//!
//! impl Visitor<&char> for Describe {
//!     type Output = String;
//!     fn visit(self, error: &char) -> String {
//!         format!("error {error:?}")
//!     }
//! }
//!
//! let result = ValueOrError::<u32, Errors![char]>::from(3);
//! assert_eq!(result.visit(Describe), "value 3");
//! let result = ValueOrError::<u32, Errors![char]>::from_error('x');
//! assert_eq!(result.visit(Describe), "error 'x'");
//! ```

use core::ptr::NonNull;

use voe_internals::VariantList;

/// Something that can be called with a `T`.
///
/// Closures taking one argument are visitors of that argument type.
pub trait Visitor<T> {
    /// The result of the visit.
    type Output;

    /// Visits `value`.
    fn visit(self, value: T) -> Self::Output;
}

impl<T, O, F> Visitor<T> for F
where
    F: FnOnce(T) -> O,
{
    type Output = O;

    #[inline]
    fn visit(self, value: T) -> O {
        self(value)
    }
}

/// A variant list whose every type `H` is accepted as `&'a H` by `F`.
pub trait VisitRef<'a, F, O>: VariantList {
    /// Calls `visitor` with a reference to the variant in `slot`.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. `ptr` points to a live value of the type in `slot`, which stays
    ///    alive and unmodified for `'a`.
    unsafe fn visit_ref(slot: usize, ptr: NonNull<u8>, visitor: F) -> O;
}

/// A variant list whose every type `H` is accepted as `&'a mut H` by `F`.
pub trait VisitMut<'a, F, O>: VariantList {
    /// Calls `visitor` with a mutable reference to the variant in `slot`.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. `ptr` points to a live value of the type in `slot`, which stays
    ///    alive and is not otherwise accessed for `'a`.
    unsafe fn visit_mut(slot: usize, ptr: NonNull<u8>, visitor: F) -> O;
}

/// A variant list whose every type `H` is accepted by value by `F`.
pub trait VisitOwned<F, O>: VariantList {
    /// Moves the variant in `slot` out of `ptr` and calls `visitor` with it.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. `ptr` points to a live value of the type in `slot`.
    /// 2. Ownership of that value passes to this call; the caller must not
    ///    use or drop it afterwards.
    unsafe fn visit_owned(slot: usize, ptr: NonNull<u8>, visitor: F) -> O;
}

impl<F, O> VisitRef<'_, F, O> for () {
    unsafe fn visit_ref(slot: usize, _ptr: NonNull<u8>, _visitor: F) -> O {
        unreachable!("variant slot {slot} is out of range")
    }
}

impl<'a, H: 'a, T, F, O> VisitRef<'a, F, O> for (H, T)
where
    F: Visitor<&'a H, Output = O>,
    T: VisitRef<'a, F, O>,
{
    #[inline]
    unsafe fn visit_ref(slot: usize, ptr: NonNull<u8>, visitor: F) -> O {
        match slot {
            // SAFETY: Slot 0 holds an `H` that lives for `'a` (requirement 1).
            0 => visitor.visit(unsafe { ptr.cast::<H>().as_ref() }),
            // SAFETY: Requirement 1 carries over to the tail.
            _ => unsafe { T::visit_ref(slot - 1, ptr, visitor) },
        }
    }
}

impl<F, O> VisitMut<'_, F, O> for () {
    unsafe fn visit_mut(slot: usize, _ptr: NonNull<u8>, _visitor: F) -> O {
        unreachable!("variant slot {slot} is out of range")
    }
}

impl<'a, H: 'a, T, F, O> VisitMut<'a, F, O> for (H, T)
where
    F: Visitor<&'a mut H, Output = O>,
    T: VisitMut<'a, F, O>,
{
    #[inline]
    unsafe fn visit_mut(slot: usize, ptr: NonNull<u8>, visitor: F) -> O {
        match slot {
            // SAFETY: Slot 0 holds an `H` that is exclusively ours for `'a`
            // (requirement 1).
            0 => visitor.visit(unsafe { ptr.cast::<H>().as_mut() }),
            // SAFETY: Requirement 1 carries over to the tail.
            _ => unsafe { T::visit_mut(slot - 1, ptr, visitor) },
        }
    }
}

impl<F, O> VisitOwned<F, O> for () {
    unsafe fn visit_owned(slot: usize, _ptr: NonNull<u8>, _visitor: F) -> O {
        unreachable!("variant slot {slot} is out of range")
    }
}

impl<H, T, F, O> VisitOwned<F, O> for (H, T)
where
    F: Visitor<H, Output = O>,
    T: VisitOwned<F, O>,
{
    #[inline]
    unsafe fn visit_owned(slot: usize, ptr: NonNull<u8>, visitor: F) -> O {
        match slot {
            // SAFETY: Slot 0 holds a live `H` whose ownership we were given
            // (requirements 1 and 2).
            0 => visitor.visit(unsafe { ptr.cast::<H>().read() }),
            // SAFETY: Requirements 1 and 2 carry over to the tail.
            _ => unsafe { T::visit_owned(slot - 1, ptr, visitor) },
        }
    }
}
