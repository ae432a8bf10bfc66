//! Shared in-place storage for a list of variants.
//!
//! A variant list `(A, (B, (C, ())))` is laid out as
//! `Cons<A, Cons<B, Cons<C, Nil>>>`. Because [`Cons`] is a `#[repr(C)]`
//! union, every field starts at offset zero, so a pointer to the storage is
//! also a valid pointer to whichever variant currently lives there. The size
//! of the union is the largest variant size and its alignment is the largest
//! variant alignment.

use core::mem::ManuallyDrop;

/// One link of the storage union: either the head variant or the rest.
///
/// Neither field is ever read through the union. All accesses go through
/// pointers cast to the concrete variant type by [`RawTagged`].
///
/// [`RawTagged`]: crate::raw::RawTagged
#[repr(C)]
#[allow(dead_code)]
pub union Cons<H, T> {
    /// Storage for the first variant of the list.
    head: ManuallyDrop<H>,
    /// Storage for the remaining variants.
    tail: ManuallyDrop<T>,
}

/// Terminator of the storage union. It has no values and takes no space.
#[derive(Clone, Copy)]
pub enum Nil {}
