//! Compile-time algebra over error lists.
//!
//! An error list is a right-nested tuple list written with the
//! [`Errors!`](crate::Errors) macro. Everything in this module is resolved by
//! the trait solver while type checking, so at run time only the resulting
//! slot numbers remain.
//!
//! | Question | Trait |
//! |---|---|
//! | position of a type in a list | [`Contains`] ([`index_of`]) |
//! | type at a position | [`At`] |
//! | is every type of `A` in `B`, and where | [`Subset`] ([`index_mapping`]) |
//! | list without some types | [`Discard`] |
//! | may one container become another | [`Convertible`] |
//! | smallest tag type for `n` variants | [`minimal_tag_width`] |
//! | merged error list of several sources | [`MergeSources`], [`Dedup`], [`Union`] |
//!
//! Positions are type-level witnesses ([`Here`] and [`There`]) that are
//! inferred from the types involved, so call sites write `_` for them.

mod convert;
mod identity;
mod list;
mod subset;
mod union;
mod width;

pub use self::{
    convert::Convertible,
    identity::{
        B0, B1, Bit, D0, D1, D2, D3, D4, D5, D6, D7, D8, D9, Identified, SameAs, Succ, Zero,
    },
    list::{At, Contains, ErrorList, Here, I0, I1, I2, I3, I4, I5, I6, I7, I8, I9, Position, There, index_of},
    subset::{Discard, Discarded, Remove, Subset, index_mapping},
    union::{Concat, Dedup, ErrorSource, MergeSources, Merged, Union, VoidUnion, Without},
    width::{TagWidth, minimal_tag_width},
};
