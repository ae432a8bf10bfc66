//! Contract violations.
//!
//! A [`ContractViolation`] is a programmer error: asking a container for
//! something it does not hold, or converting it in a way that would lose its
//! value. These are never returned as errors. Every violation goes through a
//! single cold path that runs the installed [contract
//! hook](crate::hooks::register_contract_hook), logs the violation when the
//! `tracing` feature is enabled, and then panics at the caller's location.
//!
//! ```should_panic
//! use voe::prelude::*;
//!
//! let empty = ValueOrError::<u8, Errors![char]>::new();
//! // panics: requested the value of type `u8` from a container that is empty
//! empty.value();
//! ```

use core::{fmt, panic::Location};

use crate::container::State;

/// A broken usage contract of a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ContractViolation {
    /// The value was requested but not held.
    MissingValue {
        /// Name of the value type.
        value_type: &'static str,
        /// What the container held instead.
        state: State,
    },
    /// An error was requested but not held.
    MissingError {
        /// Name of the requested error type.
        error_type: &'static str,
        /// What the container held instead.
        state: State,
    },
    /// A conversion into a container without a value slot found a held
    /// value.
    DroppedValue {
        /// Name of the value type.
        value_type: &'static str,
    },
    /// A container with a value slot was visited while empty.
    EmptyVisit {
        /// Name of the value type.
        value_type: &'static str,
    },
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Empty => f.write_str("empty"),
            State::Value => f.write_str("holding its value"),
            State::Error(index) => write!(f, "holding the error at index {index}"),
        }
    }
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue { value_type, state } => write!(
                f,
                "requested the value of type `{value_type}` from a container that is {state}"
            ),
            Self::MissingError { error_type, state } => write!(
                f,
                "requested the error of type `{error_type}` from a container that is {state}"
            ),
            Self::DroppedValue { value_type } => write!(
                f,
                "converting into a container without a value would drop the held value of type `{value_type}`"
            ),
            Self::EmptyVisit { value_type } => write!(
                f,
                "visited an empty container with value type `{value_type}`"
            ),
        }
    }
}

impl core::error::Error for ContractViolation {}

/// Reports `violation` and panics.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn violated(violation: ContractViolation) -> ! {
    let location = Location::caller();
    crate::hooks::run_contract_hook(&violation, location);

    #[cfg(feature = "tracing")]
    tracing::error!(
        violation = %violation,
        location = %location,
        "value-or-error contract violated"
    );

    panic!("{violation}")
}
