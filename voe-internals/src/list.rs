//! Variant lists and slot lookup.
//!
//! A variant list is a right-nested tuple list: `()` is the empty list and
//! `(H, T)` is `H` followed by the list `T`. The position of a type in the
//! list is its *slot*. [`VariantList::vtable`] and its siblings turn a slot
//! number into the vtable for the type stored in that slot; the lookup is a
//! recursive match that the compiler flattens once the list is known.

use crate::{
    storage::{Cons, Nil},
    vtable::{CloneVtable, DebugVtable, EqVtable, VariantVtable},
};

/// A list of variant types that can share one [`RawTagged`] buffer.
///
/// [`RawTagged`]: crate::raw::RawTagged
pub trait VariantList {
    /// The storage union for this list.
    type Repr;

    /// Number of variants in the list.
    const LEN: usize;

    /// `true` if any variant of the list needs drop glue.
    const NEEDS_DROP: bool;

    /// Returns the vtable of the variant in `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= Self::LEN`.
    fn vtable(slot: usize) -> VariantVtable;
}

impl VariantList for () {
    type Repr = Nil;

    const LEN: usize = 0;
    const NEEDS_DROP: bool = false;

    fn vtable(slot: usize) -> VariantVtable {
        unreachable!("variant slot {slot} is out of range")
    }
}

impl<H, T: VariantList> VariantList for (H, T) {
    type Repr = Cons<H, T::Repr>;

    const LEN: usize = 1 + T::LEN;
    const NEEDS_DROP: bool = core::mem::needs_drop::<H>() || T::NEEDS_DROP;

    #[inline]
    fn vtable(slot: usize) -> VariantVtable {
        match slot {
            0 => VariantVtable::new::<H>(),
            _ => T::vtable(slot - 1),
        }
    }
}

/// A [`VariantList`] whose variants all implement [`Clone`].
pub trait CloneList: VariantList {
    /// Returns the clone vtable of the variant in `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= Self::LEN`.
    fn clone_vtable(slot: usize) -> CloneVtable;
}

impl CloneList for () {
    fn clone_vtable(slot: usize) -> CloneVtable {
        unreachable!("variant slot {slot} is out of range")
    }
}

impl<H: Clone, T: CloneList> CloneList for (H, T) {
    #[inline]
    fn clone_vtable(slot: usize) -> CloneVtable {
        match slot {
            0 => CloneVtable::new::<H>(),
            _ => T::clone_vtable(slot - 1),
        }
    }
}

/// A [`VariantList`] whose variants all implement [`Debug`].
///
/// [`Debug`]: core::fmt::Debug
pub trait DebugList: VariantList {
    /// Returns the debug vtable of the variant in `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= Self::LEN`.
    fn debug_vtable(slot: usize) -> DebugVtable;
}

impl DebugList for () {
    fn debug_vtable(slot: usize) -> DebugVtable {
        unreachable!("variant slot {slot} is out of range")
    }
}

impl<H: core::fmt::Debug, T: DebugList> DebugList for (H, T) {
    #[inline]
    fn debug_vtable(slot: usize) -> DebugVtable {
        match slot {
            0 => DebugVtable::new::<H>(),
            _ => T::debug_vtable(slot - 1),
        }
    }
}

/// A [`VariantList`] whose variants all implement [`PartialEq`].
pub trait EqList: VariantList {
    /// Returns the equality vtable of the variant in `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= Self::LEN`.
    fn eq_vtable(slot: usize) -> EqVtable;
}

impl EqList for () {
    fn eq_vtable(slot: usize) -> EqVtable {
        unreachable!("variant slot {slot} is out of range")
    }
}

impl<H: PartialEq, T: EqList> EqList for (H, T) {
    #[inline]
    fn eq_vtable(slot: usize) -> EqVtable {
        match slot {
            0 => EqVtable::new::<H>(),
            _ => T::eq_vtable(slot - 1),
        }
    }
}

/// An [`EqList`] whose variants all implement [`Eq`].
pub trait TotalEqList: EqList {}

impl TotalEqList for () {}

impl<H: Eq, T: TotalEqList> TotalEqList for (H, T) {}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::string::String;

    use super::*;

    type Three = (u8, (String, (char, ())));

    #[test]
    fn test_list_constants() {
        assert_eq!(<() as VariantList>::LEN, 0);
        assert_eq!(<Three as VariantList>::LEN, 3);
        assert!(!<() as VariantList>::NEEDS_DROP);
        assert!(<Three as VariantList>::NEEDS_DROP);
        assert!(!<(u8, (char, ())) as VariantList>::NEEDS_DROP);
    }

    #[test]
    fn test_slot_lookup() {
        assert_eq!(Three::vtable(0).type_name(), "u8");
        assert_eq!(Three::vtable(1).type_name(), core::any::type_name::<String>());
        assert_eq!(Three::vtable(2).type_name(), "char");
    }

    #[test]
    #[should_panic(expected = "variant slot 0 is out of range")]
    fn test_slot_out_of_range() {
        <(u8, ())>::vtable(1);
    }
}
