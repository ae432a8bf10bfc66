//! Commonly used items for convenient importing.
//!
//! ```rust
//! use voe::prelude::*;
//!
//! fn halve(value: u32) -> ValueOrError<u32, Errors![&'static str]> {
//!     if value % 2 == 1 {
//!         return make_error("odd").convert();
//!     }
//!     (value / 2).into()
//! }
//!
//! assert_eq!(halve(10).into_value(), 5);
//! assert!(halve(3).has_error::<&str, _>());
//! ```
//!
//! # What's Included
//!
//! - **[`Voe`]**, **[`ValueOrError`]** and **[`VoidOrError`]**: the container
//! - **[`State`]**: what a container holds
//! - **[`make_error`]** and **[`make_error_with`]**: value-less error
//!   containers
//! - **[`Visitor`]** and **[`NoValue`]**: visiting
//! - **[`Errors!`]**, **[`Union!`]** and **[`identify!`]**: naming types
//! - **[`return_if_error!`]** and **[`assign_or_return!`]**: propagation

pub use crate::{
    Errors, NoValue, State, Union, Value, ValueOrError, Visitor, Voe, VoidOrError,
    assign_or_return, identify, make_error, make_error_with, return_if_error,
};
