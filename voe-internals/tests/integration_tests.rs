//! Integration tests for the voe-internals crate.
//!
//! ## Drop accounting
//! - `test_drop_runs_once_per_value`: every written value is dropped exactly
//!   once, whether it is cleared, overwritten or dropped with the buffer
//! - `test_move_to_same_slot_assigns`: moving into an occupied slot of the
//!   same type assigns over it
//! - `test_move_to_other_slot_reconstructs`: moving into a different slot
//!   drops the old value first
//! - `test_clone_to_same_slot_uses_clone_from`: cloning onto an occupied
//!   slot calls `Clone::clone_from`
//!
//! ## Panic safety
//! - `test_panicking_drop_leaves_empty`: a destructor that panics while being
//!   overwritten leaves the buffer empty and is not run again
//! - `test_panicking_constructor_leaves_empty`: `emplace` drops the old value
//!   before `make` runs
//!
//! ## Static properties
//! - auto traits follow the variant types

use core::cell::{Cell, RefCell};
use std::{
    panic::{AssertUnwindSafe, catch_unwind},
    rc::Rc,
    string::String,
    vec::Vec,
};

use static_assertions::{assert_impl_all, assert_not_impl_any};
use voe_internals::{RawTagged, VariantList};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Clone(u32),
    CloneFrom(u32),
    Drop(u32),
}

type Log = Rc<RefCell<Vec<Event>>>;

#[derive(Debug)]
struct Witness {
    id: u32,
    log: Log,
}

impl Witness {
    fn new(id: u32, log: &Log) -> Self {
        Self {
            id,
            log: Rc::clone(log),
        }
    }
}

impl Clone for Witness {
    fn clone(&self) -> Self {
        self.log.borrow_mut().push(Event::Clone(self.id));
        Self {
            id: self.id,
            log: Rc::clone(&self.log),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.log.borrow_mut().push(Event::CloneFrom(source.id));
        self.id = source.id;
    }
}

impl Drop for Witness {
    fn drop(&mut self) {
        self.log.borrow_mut().push(Event::Drop(self.id));
    }
}

type Variants = (Witness, (u16, (String, ())));

#[test]
fn test_drop_runs_once_per_value() {
    let log = Log::default();
    {
        let mut raw = RawTagged::<Variants>::empty();
        // SAFETY: slot 0 holds a `Witness`.
        unsafe { raw.write(0, Witness::new(1, &log)) };
        raw.clear();
        assert!(raw.is_empty());

        // SAFETY: slot 0 holds a `Witness`.
        unsafe { raw.write(0, Witness::new(2, &log)) };
        // SAFETY: slot 1 holds a `u16`.
        unsafe { raw.write(1, 7_u16) };

        // SAFETY: slot 0 holds a `Witness`.
        unsafe { raw.write(0, Witness::new(3, &log)) };
    }
    assert_eq!(
        *log.borrow(),
        [Event::Drop(1), Event::Drop(2), Event::Drop(3)]
    );
}

#[test]
fn test_move_to_same_slot_assigns() {
    let log = Log::default();
    let mut source = RawTagged::<Variants>::empty();
    let mut target = RawTagged::<(u8, (Witness, ()))>::empty();
    // SAFETY: slot 0 holds a `Witness`.
    unsafe { source.write(0, Witness::new(1, &log)) };
    // SAFETY: slot 1 holds a `Witness`.
    unsafe { target.write(1, Witness::new(2, &log)) };

    // SAFETY: slot 0 of `Variants` and slot 1 of the target list are both
    // `Witness`.
    unsafe { source.move_to(&mut target, 1) };
    assert!(source.is_empty());
    assert_eq!(target.slot(), Some(1));
    // SAFETY: the target holds a `Witness`.
    assert_eq!(unsafe { target.get::<Witness>() }.id, 1);
    assert_eq!(*log.borrow(), [Event::Drop(2)]);
}

#[test]
fn test_move_to_other_slot_reconstructs() {
    let log = Log::default();
    let mut source = RawTagged::<Variants>::empty();
    let mut target = RawTagged::<(u16, (Witness, ()))>::empty();
    // SAFETY: slot 1 holds a `u16`.
    unsafe { source.write(1, 40_u16) };
    // SAFETY: slot 1 holds a `Witness`.
    unsafe { target.write(1, Witness::new(5, &log)) };

    // SAFETY: slot 1 of `Variants` and slot 0 of the target list are both
    // `u16`.
    unsafe { source.move_to(&mut target, 0) };
    assert_eq!(target.slot(), Some(0));
    // SAFETY: the target holds a `u16`.
    assert_eq!(unsafe { *target.get::<u16>() }, 40);
    assert_eq!(*log.borrow(), [Event::Drop(5)]);
}

#[test]
fn test_move_from_empty_leaves_target() {
    let mut source = RawTagged::<Variants>::empty();
    let mut target = RawTagged::<(u16, ())>::empty();
    // SAFETY: slot 0 holds a `u16`.
    unsafe { target.write(0, 3_u16) };
    // SAFETY: `source` is empty, so the slot is never used.
    unsafe { source.move_to(&mut target, 0) };
    assert_eq!(target.slot(), Some(0));
}

#[test]
fn test_clone_to_same_slot_uses_clone_from() {
    let log = Log::default();
    let mut source = RawTagged::<Variants>::empty();
    let mut target = RawTagged::<Variants>::empty();
    // SAFETY: slot 0 holds a `Witness`.
    unsafe { source.write(0, Witness::new(1, &log)) };

    target.clone_from(&source);
    target.clone_from(&source);
    drop(target);

    assert_eq!(
        *log.borrow(),
        [Event::Clone(1), Event::CloneFrom(1), Event::Drop(1)]
    );
}

#[test]
fn test_clone_to_other_slot_reconstructs() {
    let log = Log::default();
    let mut source = RawTagged::<Variants>::empty();
    let mut target = RawTagged::<Variants>::empty();
    // SAFETY: slot 0 holds a `Witness`.
    unsafe { source.write(0, Witness::new(1, &log)) };
    // SAFETY: slot 2 holds a `String`.
    unsafe { target.write(2, String::from("gone")) };

    target.clone_from(&source);
    assert_eq!(target.slot(), Some(0));
    assert_eq!(*log.borrow(), [Event::Clone(1)]);
}

/// Counts its drops and panics on every one of them.
struct Fragile<'a>(&'a Cell<usize>);

impl Drop for Fragile<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
        panic!("fragile value dropped");
    }
}

#[test]
fn test_panicking_drop_leaves_empty() {
    let drops = Cell::new(0);
    let mut raw = RawTagged::<(Fragile<'_>, (u16, ()))>::empty();
    // SAFETY: slot 0 holds a `Fragile`.
    unsafe { raw.write(0, Fragile(&drops)) };

    let result = catch_unwind(AssertUnwindSafe(|| {
        // SAFETY: slot 1 holds a `u16`.
        unsafe { raw.write(1, 9_u16) };
    }));
    assert!(result.is_err());
    assert!(raw.is_empty());
    assert_eq!(drops.get(), 1);

    drop(raw);
    assert_eq!(drops.get(), 1);
}

#[test]
fn test_panicking_constructor_leaves_empty() {
    let log = Log::default();
    let mut raw = RawTagged::<Variants>::empty();
    // SAFETY: slot 0 holds a `Witness`.
    unsafe { raw.write(0, Witness::new(1, &log)) };

    let result = catch_unwind(AssertUnwindSafe(|| {
        // SAFETY: slot 2 holds a `String`.
        unsafe { raw.emplace(2, || -> String { panic!("no string today") }) };
    }));
    assert!(result.is_err());
    assert!(raw.is_empty());
    assert_eq!(*log.borrow(), [Event::Drop(1)]);
}

#[test]
fn test_needs_drop_constant() {
    assert!(<Variants as VariantList>::NEEDS_DROP);
    assert!(!<(u16, (char, ())) as VariantList>::NEEDS_DROP);
}

assert_impl_all!(RawTagged<(u32, (String, ()))>: Send, Sync);
assert_not_impl_any!(RawTagged<(u32, (Rc<u8>, ()))>: Send, Sync);
assert_not_impl_any!(RawTagged<(core::cell::Cell<u8>, ())>: Sync);
