//! The tagged buffer.
//!
//! [`RawTagged<L>`] is a buffer shaped like the storage union of the
//! [`VariantList`] `L`, plus a one-byte tag. Tag `0` means the buffer holds
//! no live value; tag `n > 0` means the variant in slot `n - 1` is alive.
//!
//! # Safety Invariant
//!
//! The fields of [`RawTagged`] are private to this module. Every method
//! maintains: **if `tag > 0`, the buffer holds a live value of the type in
//! slot `tag - 1` of `L`, and otherwise it holds no live value.** Methods that
//! cannot check the variant type themselves are `unsafe` and ask the caller
//! to name the correct slot.
//!
//! Methods that destroy or move the live value always reset the tag *before*
//! running any user code (drops, clones, assignments), so a panic in user
//! code can leak a value but never leaves a tag pointing at a dead one.

use core::{fmt, mem::MaybeUninit, ptr::NonNull};

use crate::list::{CloneList, DebugList, EqList, VariantList};

/// In-place storage for one variant of `L`, or nothing.
pub struct RawTagged<L: VariantList> {
    /// Storage large enough and aligned for every variant of `L`.
    data: MaybeUninit<L::Repr>,
    /// `0` when empty, otherwise the live slot plus one.
    tag: u8,
}

impl<L: VariantList> RawTagged<L> {
    /// Creates an empty buffer.
    ///
    /// The tag is a single byte, so lists of more than 255 variants are
    /// rejected when the buffer type is instantiated:
    ///
    /// ```compile_fail
    /// #![recursion_limit = "1024"]
    /// use voe_internals::RawTagged;
    ///
    /// type Sixteen<T> = (u8, (u8, (u8, (u8, (u8, (u8, (u8, (u8,
    ///     (u8, (u8, (u8, (u8, (u8, (u8, (u8, (u8, T))))))))))))))));
    /// type TwoFiftySix = Sixteen<Sixteen<Sixteen<Sixteen<Sixteen<Sixteen<
    ///     Sixteen<Sixteen<Sixteen<Sixteen<Sixteen<Sixteen<Sixteen<Sixteen<
    ///     Sixteen<Sixteen<()>>>>>>>>>>>>>>>>;
    ///
    /// const _: () = core::mem::forget(RawTagged::<TwoFiftySix>::empty());
    /// ```
    #[inline]
    pub const fn empty() -> Self {
        const {
            assert!(
                L::LEN <= u8::MAX as usize,
                "a tagged buffer supports at most 255 variants"
            );
        }
        Self {
            data: MaybeUninit::uninit(),
            tag: 0,
        }
    }

    /// Returns the raw tag: `0` when empty, otherwise the live slot plus one.
    #[inline]
    pub fn tag(&self) -> u8 {
        self.tag
    }

    /// Returns `true` if no variant is alive.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tag == 0
    }

    /// Returns the slot of the live variant, if any.
    #[inline]
    pub fn slot(&self) -> Option<usize> {
        self.tag.checked_sub(1).map(usize::from)
    }

    /// Returns a pointer to the start of the buffer, valid for reads.
    #[inline]
    pub fn as_ptr(&self) -> NonNull<u8> {
        NonNull::from(&self.data).cast::<u8>()
    }

    /// Returns a pointer to the start of the buffer, valid for reads and
    /// writes.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> NonNull<u8> {
        NonNull::from(&mut self.data).cast::<u8>()
    }

    /// Debug check that `T` is the type stored in `slot`.
    #[inline]
    fn debug_check_type<T>(slot: usize) {
        debug_assert_eq!(
            L::vtable(slot).type_name(),
            core::any::type_name::<T>(),
            "slot {slot} accessed with the wrong type",
        );
    }

    /// Drops the live variant, if any, and leaves the buffer empty.
    pub fn clear(&mut self) {
        if let Some(slot) = self.slot() {
            self.tag = 0;
            let ptr = self.as_mut_ptr();
            // SAFETY:
            // 1. The tag said slot `slot` was alive, so `ptr` points to a live
            //    value of the type in that slot, and `L::vtable(slot)` is the
            //    vtable for that type.
            // 2. The tag is already reset, so nothing will use or drop the
            //    value again.
            unsafe {
                L::vtable(slot).drop(ptr);
            }
        }
    }

    /// Marks the buffer empty without dropping the live variant, and returns
    /// the slot it was in.
    ///
    /// The variant is leaked unless the caller moves it out through a
    /// pointer obtained before this call.
    #[inline]
    pub fn disarm(&mut self) -> Option<usize> {
        let slot = self.slot();
        self.tag = 0;
        slot
    }

    /// Drops the current content and stores `value` in `slot`.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. `slot < L::LEN` and `T` is the type of the variant in `slot`.
    pub unsafe fn write<T>(&mut self, slot: usize, value: T) {
        Self::debug_check_type::<T>(slot);
        self.clear();
        let ptr = self.as_mut_ptr();
        // SAFETY: The buffer is empty and is sized and aligned for every
        // variant of `L`, which includes `T` by requirement 1.
        unsafe {
            ptr.cast::<T>().write(value);
        }
        self.tag = slot as u8 + 1;
    }

    /// Stores the value produced by `make` in `slot`.
    ///
    /// The buffer is cleared before `make` runs, so it is left empty if
    /// `make` panics.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. `slot < L::LEN` and `T` is the type of the variant in `slot`.
    pub unsafe fn emplace<T>(&mut self, slot: usize, make: impl FnOnce() -> T) {
        Self::debug_check_type::<T>(slot);
        self.clear();
        let value = make();
        let ptr = self.as_mut_ptr();
        // SAFETY: The buffer is empty and is sized and aligned for every
        // variant of `L`, which includes `T` by requirement 1.
        unsafe {
            ptr.cast::<T>().write(value);
        }
        self.tag = slot as u8 + 1;
    }

    /// Returns a reference to the live variant.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. The buffer is not empty and `T` is the type of the live variant.
    #[inline]
    pub unsafe fn get<T>(&self) -> &T {
        debug_assert!(!self.is_empty(), "accessed an empty tagged buffer");
        if let Some(slot) = self.slot() {
            Self::debug_check_type::<T>(slot);
        }
        let ptr = self.as_ptr();
        // SAFETY: By requirement 1 the buffer holds a live `T` at offset zero,
        // and it stays alive for as long as `self` is borrowed.
        unsafe { ptr.cast::<T>().as_ref() }
    }

    /// Returns a mutable reference to the live variant.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. The buffer is not empty and `T` is the type of the live variant.
    #[inline]
    pub unsafe fn get_mut<T>(&mut self) -> &mut T {
        debug_assert!(!self.is_empty(), "accessed an empty tagged buffer");
        if let Some(slot) = self.slot() {
            Self::debug_check_type::<T>(slot);
        }
        let ptr = self.as_mut_ptr();
        // SAFETY: By requirement 1 the buffer holds a live `T` at offset zero,
        // and `self` is borrowed mutably for the lifetime of the result.
        unsafe { ptr.cast::<T>().as_mut() }
    }

    /// Moves the live variant out and leaves the buffer empty.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. The buffer is not empty and `T` is the type of the live variant.
    #[inline]
    pub unsafe fn take<T>(&mut self) -> T {
        debug_assert!(!self.is_empty(), "took from an empty tagged buffer");
        if let Some(slot) = self.slot() {
            Self::debug_check_type::<T>(slot);
        }
        self.tag = 0;
        let ptr = self.as_ptr();
        // SAFETY: By requirement 1 the buffer held a live `T`. The tag is
        // reset, so this read creates the only owner.
        unsafe { ptr.cast::<T>().read() }
    }

    /// Moves the live variant of `self` into `slot` of `target`, leaving
    /// `self` empty. Does nothing to `target` if `self` is empty.
    ///
    /// If `target` already holds a value in `slot`, the moved value is
    /// assigned over it. Otherwise `target` is cleared first and the value is
    /// moved into the fresh buffer.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. If `self` is not empty, `slot < M::LEN` and the type in `slot` of
    ///    `M` is the type of the live variant of `self`.
    pub unsafe fn move_to<M: VariantList>(&mut self, target: &mut RawTagged<M>, slot: usize) {
        let Some(source_slot) = self.disarm() else {
            return;
        };
        let vtable = L::vtable(source_slot);
        debug_assert_eq!(
            vtable.type_name(),
            M::vtable(slot).type_name(),
            "moved slot {source_slot} into a slot of another type",
        );
        let src = self.as_mut_ptr();

        if target.slot() == Some(slot) {
            let dst = target.as_mut_ptr();
            // SAFETY:
            // 1. `src` held the live variant of `self` and `dst` holds a live
            //    value in `slot` of `target`, which is the same type by
            //    requirement 1. The two buffers are distinct objects.
            // 2. `self` was disarmed, so the source is never used again.
            unsafe {
                vtable.move_assign(src, dst);
            }
        } else {
            target.clear();
            let dst = target.as_mut_ptr();
            // SAFETY:
            // 1. `src` held the live variant of `self`.
            // 2. `target` is empty and its buffer fits every variant of `M`,
            //    including the type in `slot`, which is the same type by
            //    requirement 1.
            // 3. `self` was disarmed, so the source is never used again.
            unsafe {
                vtable.move_into(src, dst);
            }
            target.tag = slot as u8 + 1;
        }
    }

    /// Clones the live variant of `self` into `slot` of `target`, or clears
    /// `target` if `self` is empty.
    ///
    /// If `target` already holds a value in `slot`, it is updated with
    /// [`Clone::clone_from`]. Otherwise `target` is cleared first and a fresh
    /// clone is written.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. If `self` is not empty, `slot < M::LEN` and the type in `slot` of
    ///    `M` is the type of the live variant of `self`.
    pub unsafe fn clone_to<M: VariantList>(&self, target: &mut RawTagged<M>, slot: usize)
    where
        L: CloneList,
    {
        let Some(source_slot) = self.slot() else {
            target.clear();
            return;
        };
        let vtable = L::clone_vtable(source_slot);
        debug_assert_eq!(
            L::vtable(source_slot).type_name(),
            M::vtable(slot).type_name(),
            "cloned slot {source_slot} into a slot of another type",
        );
        let src = self.as_ptr();

        if target.slot() == Some(slot) {
            let dst = target.as_mut_ptr();
            // SAFETY:
            // 1. Both buffers hold live values of the same type by requirement
            //    1, and they are distinct objects.
            unsafe {
                vtable.clone_from(src, dst);
            }
        } else {
            target.clear();
            let dst = target.as_mut_ptr();
            // SAFETY:
            // 1. `src` holds the live variant of `self`.
            // 2. `target` is empty, its buffer fits the type in `slot`, and it
            //    does not overlap `self`.
            unsafe {
                vtable.clone_into(src, dst);
            }
            target.tag = slot as u8 + 1;
        }
    }
}

impl<L: VariantList> Drop for RawTagged<L> {
    #[inline]
    fn drop(&mut self) {
        if L::NEEDS_DROP {
            self.clear();
        }
    }
}

impl<L: CloneList> Clone for RawTagged<L> {
    fn clone(&self) -> Self {
        let mut target = Self::empty();
        if let Some(slot) = self.slot() {
            // SAFETY: `slot` is the live slot of `self`, and `target` has the
            // same variant list.
            unsafe { self.clone_to(&mut target, slot) };
        }
        target
    }

    fn clone_from(&mut self, source: &Self) {
        match source.slot() {
            // SAFETY: `slot` is the live slot of `source`, and `self` has the
            // same variant list.
            Some(slot) => unsafe { source.clone_to(self, slot) },
            None => self.clear(),
        }
    }
}

impl<L: EqList> PartialEq for RawTagged<L> {
    fn eq(&self, other: &Self) -> bool {
        if self.tag != other.tag {
            return false;
        }
        match self.slot() {
            None => true,
            // SAFETY: Both buffers hold a live value in `slot`, and
            // `L::eq_vtable(slot)` is the vtable for its type.
            Some(slot) => unsafe { L::eq_vtable(slot).eq(self.as_ptr(), other.as_ptr()) },
        }
    }
}

impl<L: VariantList> RawTagged<L> {
    /// Formats the live variant as `name(variant)`, or writes `empty` when
    /// nothing is stored.
    pub fn debug_variant(
        &self,
        name: &str,
        empty: &str,
        formatter: &mut fmt::Formatter<'_>,
    ) -> fmt::Result
    where
        L: DebugList,
    {
        match self.slot() {
            None => formatter.write_str(empty),
            // SAFETY: The buffer holds a live value in `slot`, and
            // `L::debug_vtable(slot)` is the vtable for its type.
            Some(slot) => unsafe { L::debug_vtable(slot).debug(self.as_ptr(), name, formatter) },
        }
    }
}

impl<L: VariantList> fmt::Debug for RawTagged<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawTagged")
            .field("tag", &self.tag)
            .field("size", &core::mem::size_of::<L::Repr>())
            .finish()
    }
}
