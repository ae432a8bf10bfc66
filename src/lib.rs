#![cfg_attr(not(doc), no_std)]
#![deny(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    clippy::as_ptr_cast_mut,
    clippy::ptr_as_ptr,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Extra checks on nightly
#![cfg_attr(nightly_extra_checks, feature(rustdoc_missing_doc_code_examples))]
#![cfg_attr(nightly_extra_checks, forbid(rustdoc::missing_doc_code_examples))]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! An allocation-free container holding nothing, a value, or one error out
//! of a closed set of error types.
//!
//! ## Overview
//!
//! [`ValueOrError<V, E>`] is a return type for fallible functions that keeps
//! the exact error shape: `E` is a type-level list of error types, and the
//! container remembers which one (if any) it holds. Everything lives inline
//! in a buffer sized for the largest variant plus a one-byte tag, so creating,
//! moving and dropping a container never touches the heap.
//!
//! ```
//! use voe::prelude::*;
//!
//! #[derive(Debug, PartialEq)]
//! struct NotFound;
//!
//! fn lookup(key: u32) -> ValueOrError<&'static str, Errors![NotFound, char]> {
//!     match key {
//!         0 => "zero".into(),
//!         1 => make_error('?').convert(),
//!         _ => make_error(NotFound).convert(),
//!     }
//! }
//!
//! assert_eq!(lookup(0).value(), &"zero");
//! assert!(lookup(1).has_error::<char, _>());
//! assert_eq!(lookup(7).into_error::<NotFound, _>(), NotFound);
//! ```
//!
//! ## Core Concepts
//!
//! A container is a [`Voe<S, E>`]:
//! - `S` describes the value slot: [`Value<V>`] for a container that can hold
//!   a `V`, or [`NoValue`] for a container that only ever holds errors. The
//!   aliases [`ValueOrError`] and [`VoidOrError`] pick one for you.
//! - `E` is an error list built with the [`Errors!`] macro:
//!   `Errors![A, B]` is the list `(A, (B, ()))`.
//!
//! Error lists are sets: a type may appear only once. Lookups by type such
//! as [`Voe::has_error`] infer the position of the type in the list, so the
//! second generic argument is always written `_`.
//!
//! ## Moving errors between containers
//!
//! A container converts into another one when every error type of the source
//! appears in the target, and the value types agree or one side has none.
//! This is the [`Convertible`] relation, checked at compile time:
//!
//! ```
//! use voe::prelude::*;
//!
//! let narrow: ValueOrError<i32, Errors![char]> = make_error('a').convert();
//! let wide: ValueOrError<i32, Errors![i16, char]> = narrow.convert();
//! assert_eq!(wide.error_index(), Some(1));
//! ```
//!
//! ```compile_fail
//! use voe::prelude::*;
//!
//! // `u8` is not an error of the target.
//! let narrow: ValueOrError<i32, Errors![u8]> = make_error(1_u8).convert();
//! let wide: ValueOrError<i32, Errors![i16, char]> = narrow.convert();
//! ```
//!
//! Converting a container that currently holds its value into one without a
//! value slot cannot be ruled out by the types, so it is checked when it
//! happens: it is a [`ContractViolation`] and panics instead of silently
//! dropping the value.
//!
//! ## Propagating errors
//!
//! [`return_if_error!`] and [`assign_or_return!`] forward the error of a
//! callee to the caller's return type, and [`Union!`] computes that return
//! type from the callees:
//!
//! ```
//! use voe::prelude::*;
//!
//! type Parsed = ValueOrError<char, Errors![i32, i16]>;
//! type Checked = VoidOrError<Errors![i64, i32]>;
//!
//! fn parse(input: u8) -> Parsed {
//!     if input == 0 { make_error(0_i16).convert() } else { char::from(input).into() }
//! }
//!
//! fn check(input: u8) -> Checked {
//!     if input > 100 { make_error(i64::from(input)).convert() } else { VoidOrError::new() }
//! }
//!
//! fn run(input: u8) -> Union![f32; Parsed, Checked] {
//!     return_if_error!(check(input));
//!     assign_or_return!(let letter = parse(input));
//!     (letter as u32 as f32).into()
//! }
//!
//! assert_eq!(run(65).into_value(), 65.0);
//! assert_eq!(run(0).into_error::<i16, _>(), 0);
//! assert_eq!(run(200).into_error::<i64, _>(), 200);
//! ```
//!
//! ## Contract violations
//!
//! Asking for a value or an error that is not there, visiting an empty
//! container, or dropping a held value in a conversion are programmer errors.
//! Checked accessors report them through [`ContractViolation`]: the installed
//! [hook](crate::hooks) runs, an event is logged when the `tracing` feature is
//! enabled, and the call panics. The `unsafe` `*_unchecked` accessors only
//! check in debug builds.
//!
//! ## Feature flags
//!
//! - `std`: use the standard library's `RwLock` for the hook storage instead
//!   of a spin lock.
//! - `tracing`: log contract violations with [`tracing`](https://docs.rs/tracing).
//!
//! For implementation details, see the [`voe-internals`] crate.
//!
//! [`voe-internals`]: voe_internals
//! [`Convertible`]: crate::algebra::Convertible
//! [`ContractViolation`]: crate::contract::ContractViolation

#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
extern crate alloc;

#[macro_use]
mod macros;

pub mod algebra;
pub mod contract;
pub mod dispatch;
pub mod hooks;
pub mod markers;
pub mod prelude;

mod container;

pub use self::{
    algebra::{Union, VoidUnion},
    container::{State, ValueOrError, Voe, VoidOrError, make_error, make_error_with},
    dispatch::Visitor,
    markers::{NoValue, Value},
};

// Not public API. Referenced by macro-generated code.
#[doc(hidden)]
pub mod __private {
    use crate::{
        Voe, VoidOrError,
        algebra::{Convertible, ErrorList},
        markers::ValueSlot,
    };

    /// Forwards the error held by `container` to the return type of the
    /// enclosing function.
    #[doc(hidden)]
    #[inline]
    #[track_caller]
    pub fn propagate<S, E, S2, E2, M>(container: Voe<S, E>) -> Voe<S2, E2>
    where
        S: ValueSlot,
        E: ErrorList,
        S2: ValueSlot,
        E2: ErrorList,
        VoidOrError<E>: Convertible<Voe<S2, E2>, M>,
    {
        container.discard_value().convert()
    }
}
