//! Converting construction and assignment.
//!
//! A container converts into another when the [`Convertible`] gate allows it.
//! The held variant keeps its type and moves to the slot of that type in the
//! target. When the target already holds a variant of the same type, the new
//! one is assigned over it instead of dropping and rebuilding.

use core::any::type_name;

use voe_internals::CloneList;

use super::Voe;
use crate::{
    algebra::{Convertible, ErrorList},
    contract::{ContractViolation, violated},
    markers::{Stored, ValueSlot},
};

impl<S: ValueSlot, E: ErrorList> Voe<S, E> {
    /// Maps the live `slot` of `self` to its slot in `Target`.
    ///
    /// A held value that the target cannot store is a contract violation.
    #[inline]
    #[track_caller]
    fn target_slot<Target, M>(slot: usize) -> usize
    where
        Self: Convertible<Target, M>,
    {
        match <Self as Convertible<Target, M>>::map_slot(slot) {
            Some(slot) => slot,
            None => violated(ContractViolation::DroppedValue {
                value_type: type_name::<S::Type>(),
            }),
        }
    }

    /// Converts into a container with a compatible value slot and a superset
    /// of the error list.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::DroppedValue`] if `self` holds a
    /// value and the target has no value slot.
    ///
    /// ```
    /// use voe::prelude::*;
    ///
    /// let narrow = ValueOrError::<i32, Errors![char]>::from_error('x');
    /// let wide: ValueOrError<i32, Errors![u8, char]> = narrow.convert();
    /// assert_eq!(wide.state(), State::Error(1));
    ///
    /// let void = VoidOrError::<Errors![char]>::new();
    /// let with_value: ValueOrError<String, Errors![char]> = void.convert();
    /// assert!(with_value.is_empty());
    /// ```
    #[inline]
    #[track_caller]
    pub fn convert<S2, E2, M>(self) -> Voe<S2, E2>
    where
        S2: ValueSlot,
        E2: ErrorList,
        Self: Convertible<Voe<S2, E2>, M>,
    {
        let mut target = Voe::new();
        target.assign(self);
        target
    }

    /// Replaces the content of `self` with the content of a convertible
    /// container.
    ///
    /// An empty `source` clears `self`. If `self` already holds a variant of
    /// the same type as the one in `source`, it is assigned over; otherwise
    /// the old content is dropped before the new one is moved in.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::DroppedValue`] if `source` holds a
    /// value and `self` has no value slot. `self` is left unchanged.
    #[track_caller]
    pub fn assign<S1, E1, M>(&mut self, mut source: Voe<S1, E1>)
    where
        S1: ValueSlot,
        E1: ErrorList,
        Voe<S1, E1>: Convertible<Self, M>,
    {
        let Some(slot) = source.raw.slot() else {
            self.clear();
            return;
        };
        let slot = Voe::<S1, E1>::target_slot::<Self, M>(slot);
        // SAFETY: `map_slot` returns the slot of the variant type in the
        // target, which is the type of the live variant of `source`.
        unsafe { source.raw.move_to(&mut self.raw, slot) };
    }

    /// Converts a copy of `self` without consuming it.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::DroppedValue`] if `self` holds a
    /// value and the target has no value slot.
    #[inline]
    #[track_caller]
    pub fn convert_cloned<S2, E2, M>(&self) -> Voe<S2, E2>
    where
        S2: ValueSlot,
        E2: ErrorList,
        Stored<S, E>: CloneList,
        Self: Convertible<Voe<S2, E2>, M>,
    {
        let mut target = Voe::new();
        target.assign_cloned(self);
        target
    }

    /// Replaces the content of `self` with a copy of the content of a
    /// convertible container.
    ///
    /// If `self` already holds a variant of the same type, it is updated with
    /// [`Clone::clone_from`].
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::DroppedValue`] if `source` holds a
    /// value and `self` has no value slot. `self` is left unchanged.
    #[track_caller]
    pub fn assign_cloned<S1, E1, M>(&mut self, source: &Voe<S1, E1>)
    where
        S1: ValueSlot,
        E1: ErrorList,
        Stored<S1, E1>: CloneList,
        Voe<S1, E1>: Convertible<Self, M>,
    {
        let Some(slot) = source.raw.slot() else {
            self.clear();
            return;
        };
        let slot = Voe::<S1, E1>::target_slot::<Self, M>(slot);
        // SAFETY: `map_slot` returns the slot of the variant type in the
        // target, which is the type of the live variant of `source`.
        unsafe { source.raw.clone_to(&mut self.raw, slot) };
    }
}
