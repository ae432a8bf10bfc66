//! The value-or-error container.
//!
//! - `owned`: the [`Voe`] type, construction, queries and the standard
//!   trait implementations
//! - `access`: value and error accessors
//! - `convert`: converting construction and assignment
//! - `discard`: narrowing the error list and dropping the value slot
//! - `visit`: visiting the live variant

mod access;
mod convert;
mod discard;
mod owned;
mod visit;

pub use self::owned::{ValueOrError, Voe, VoidOrError, make_error, make_error_with};

/// What a container currently holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum State {
    /// Nothing.
    Empty,
    /// The value.
    Value,
    /// The error at this position of the error list.
    Error(usize),
}
