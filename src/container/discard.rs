//! Narrowing the error list and dropping the value slot.

use core::any::type_name;

use super::Voe;
use crate::{
    algebra::{Discard, Discarded, ErrorList},
    contract::{ContractViolation, violated},
    markers::{NoValue, ValueSlot},
};

impl<S: ValueSlot, E: ErrorList> Voe<S, E> {
    /// Moves the content into a container whose error list lacks the types
    /// of `Xs`, leaving `self` empty.
    ///
    /// A held value or retained error moves to its slot in the result. A held
    /// discarded error is dropped and the result is empty.
    ///
    /// ```
    /// use voe::prelude::*;
    ///
    /// let mut result = ValueOrError::<u8, Errors![char, bool, i32]>::from_error(5_i32);
    /// let narrowed: ValueOrError<u8, Errors![char, i32]> = result.discard_errors::<Errors![bool], _>();
    /// assert!(result.is_empty());
    /// assert_eq!(narrowed.into_error::<i32, _>(), 5);
    ///
    /// let mut result = ValueOrError::<u8, Errors![char, bool]>::from_error(true);
    /// assert!(result.discard_errors::<Errors![bool], _>().is_empty());
    /// ```
    pub fn discard_errors<Xs, Is>(&mut self) -> Voe<S, Discarded<E, Xs, Is>>
    where
        E: Discard<Xs, Is>,
    {
        let mut target = Voe::new();
        let Some(slot) = self.raw.slot() else {
            return target;
        };
        let mapped = match slot.checked_sub(S::FIRST_ERROR) {
            None => Some(0),
            Some(index) => {
                <E as Discard<Xs, Is>>::remap(index).map(|index| index + S::FIRST_ERROR)
            }
        };
        match mapped {
            // SAFETY: The value keeps slot 0, and a retained error moves to
            // the slot `remap` assigns to its type in the narrowed list.
            Some(mapped) => unsafe { self.raw.move_to(&mut target.raw, mapped) },
            None => self.clear(),
        }
        target
    }

    /// Converts into the value-less container with the same error list.
    ///
    /// This is the identity on a [`VoidOrError`](crate::VoidOrError).
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::DroppedValue`] if a value is held.
    #[track_caller]
    pub fn discard_value(mut self) -> Voe<NoValue, E> {
        let mut target = Voe::new();
        let Some(slot) = self.raw.slot() else {
            return target;
        };
        let Some(index) = slot.checked_sub(S::FIRST_ERROR) else {
            violated(ContractViolation::DroppedValue {
                value_type: type_name::<S::Type>(),
            })
        };
        // SAFETY: Error `index` is stored in slot `index` of a value-less
        // container with the same error list.
        unsafe { self.raw.move_to(&mut target.raw, index) };
        target
    }
}
