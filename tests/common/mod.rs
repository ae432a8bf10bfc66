//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::{cell::RefCell, mem, vec::Vec};

/// A special operation performed on a [`Tracked`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `Tracked::<kind>::new(id)`
    Create { kind: u8, id: u32 },
    /// `Clone::clone` of the value with `id`
    Clone { kind: u8, id: u32 },
    /// `Clone::clone_from` onto a value, copying `id`
    CloneFrom { kind: u8, id: u32 },
    /// The value with `id` was dropped
    Drop { kind: u8, id: u32 },
}

thread_local! {
    static LOG: RefCell<Vec<Op>> = const { RefCell::new(Vec::new()) };
}

fn record(op: Op) {
    LOG.with_borrow_mut(|log| log.push(op));
}

/// Returns and clears the operations recorded on this thread.
pub fn take_log() -> Vec<Op> {
    LOG.with_borrow_mut(mem::take)
}

/// An instrumented value. Each `KIND` is a distinct type, so several of them
/// can live in one error list.
#[derive(Debug, PartialEq, Eq)]
pub struct Tracked<const KIND: u8> {
    pub id: u32,
}

impl<const KIND: u8> Tracked<KIND> {
    pub fn new(id: u32) -> Self {
        record(Op::Create { kind: KIND, id });
        Self { id }
    }
}

impl<const KIND: u8> Clone for Tracked<KIND> {
    fn clone(&self) -> Self {
        record(Op::Clone {
            kind: KIND,
            id: self.id,
        });
        Self { id: self.id }
    }

    fn clone_from(&mut self, source: &Self) {
        record(Op::CloneFrom {
            kind: KIND,
            id: source.id,
        });
        self.id = source.id;
    }
}

impl<const KIND: u8> Drop for Tracked<KIND> {
    fn drop(&mut self) {
        record(Op::Drop {
            kind: KIND,
            id: self.id,
        });
    }
}

pub const fn create(kind: u8, id: u32) -> Op {
    Op::Create { kind, id }
}

pub const fn clone(kind: u8, id: u32) -> Op {
    Op::Clone { kind, id }
}

pub const fn clone_from(kind: u8, id: u32) -> Op {
    Op::CloneFrom { kind, id }
}

pub const fn drop(kind: u8, id: u32) -> Op {
    Op::Drop { kind, id }
}
