#![no_std]
#![forbid(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::missing_docs_in_private_items,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
#![allow(rustdoc::private_intra_doc_links)]
//! Internal implementation crate for [`voe`].
//!
//! # Overview
//!
//! This crate contains the in-place tagged storage and the unsafe operations
//! behind the [`voe`] value-or-error container. It never allocates: a
//! container is a buffer sized and aligned for its largest variant plus a
//! one-byte tag.
//!
//! **This crate is an implementation detail.** No semantic versioning guarantees
//! are provided. Users should depend on the [`voe`] crate, not this one.
//!
//! # Architecture
//!
//! - **[`storage`]**: the recursive `#[repr(C)]` union ([`Cons`] / [`Nil`])
//!   that gives every variant offset zero inside a shared buffer
//! - **[`vtable`]**: per-variant function pointers ([`VariantVtable`],
//!   [`CloneVtable`], [`DebugVtable`], [`EqVtable`])
//! - **[`list`]**: [`VariantList`] and its capability extensions, mapping a
//!   slot index to the vtable of the variant stored in that slot
//! - **[`raw`]**: [`RawTagged`], the buffer plus tag, and the transfer
//!   primitives used for construction, assignment and conversion
//!
//! # Safety Strategy
//!
//! The tag is the only record of which variant is alive. All code that reads
//! or writes the buffer lives in [`raw`], where the fields of [`RawTagged`]
//! are private, so the invariant "the tag names the live variant" can be
//! checked within a single file. Vtables are only obtained through
//! [`VariantList::vtable`] and friends, which pair each slot with the exact
//! type occupying it.
//!
//! [`voe`]: https://docs.rs/voe/latest/voe/
//! [`Cons`]: storage::Cons
//! [`Nil`]: storage::Nil
//! [`VariantVtable`]: vtable::VariantVtable
//! [`CloneVtable`]: vtable::CloneVtable
//! [`DebugVtable`]: vtable::DebugVtable
//! [`EqVtable`]: vtable::EqVtable
//! [`VariantList`]: list::VariantList
//! [`VariantList::vtable`]: list::VariantList::vtable
//! [`RawTagged`]: raw::RawTagged

pub mod list;
pub mod raw;
pub mod storage;
pub mod vtable;

pub use self::{
    list::{CloneList, DebugList, EqList, TotalEqList, VariantList},
    raw::RawTagged,
};
