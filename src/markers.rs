//! Marker types describing the value slot of a container.
//!
//! Every [`Voe<S, E>`](crate::Voe) has a value slot marker `S`:
//!
//! - [`Value<V>`]: the container can hold a value of type `V`. The value
//!   occupies slot 0 and errors follow it.
//! - [`NoValue`]: the container only ever holds errors, or nothing. Errors
//!   start at slot 0.
//!
//! The markers are never instantiated as part of a container. [`NoValue`] is
//! also passed to visitors of an empty value-less container, see
//! [`Voe::visit`](crate::Voe::visit).
//!
//! # Conversions
//!
//! [`SlotInto`] decides whether a value slot may flow into another: a value
//! slot flows into the same value slot, or into [`NoValue`] (checked at run
//! time, since it only works while no value is held), and [`NoValue`] flows
//! into anything.
//!
//! ```
//! use voe::markers::{NoValue, SlotInto, Value};
//!
//! fn flows<A: SlotInto<B>, B: voe::markers::ValueSlot>() {}
//!
//! flows::<Value<u8>, Value<u8>>();
//! flows::<Value<u8>, NoValue>();
//! flows::<NoValue, Value<String>>();
//! ```
//!
//! ```compile_fail
//! use voe::markers::{SlotInto, Value};
//!
//! fn flows<A: SlotInto<B>, B: voe::markers::ValueSlot>() {}
//!
//! flows::<Value<u8>, Value<u16>>();
//! ```

use core::marker::PhantomData;

use voe_internals::VariantList;

use crate::algebra::ErrorList;

/// Value slot marker for containers that can hold a value of type `V`.
pub struct Value<V>(PhantomData<V>);

/// Value slot marker for containers that never hold a value.
///
/// Visitors of a [`VoidOrError`](crate::VoidOrError) receive a [`NoValue`]
/// when the container is empty.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct NoValue;

mod sealed {
    pub trait Sealed {}

    impl<V> Sealed for super::Value<V> {}
    impl Sealed for super::NoValue {}
}

/// The value slot of a container: either [`Value<V>`] or [`NoValue`].
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait ValueSlot: sealed::Sealed {
    /// The value type, or [`NoValue`] when there is none.
    type Type;

    /// The full list of stored variants: the value type (if any) followed by
    /// the error list `E`.
    type Stored<E: ErrorList>: VariantList;

    /// `true` for [`Value<V>`].
    const HAS_VALUE: bool;

    /// Slot of the first error variant.
    const FIRST_ERROR: usize;
}

impl<V> ValueSlot for Value<V> {
    type Type = V;
    type Stored<E: ErrorList> = (V, E);

    const HAS_VALUE: bool = true;
    const FIRST_ERROR: usize = 1;
}

impl ValueSlot for NoValue {
    type Type = NoValue;
    type Stored<E: ErrorList> = E;

    const HAS_VALUE: bool = false;
    const FIRST_ERROR: usize = 0;
}

/// Stored variant list of a container with value slot `S` and errors `E`.
pub type Stored<S, E> = <S as ValueSlot>::Stored<E>;

/// Marks value slots that may be converted into the value slot `Target`.
///
/// Implemented for:
/// - `Value<V>` into `Value<V>`
/// - `Value<V>` into [`NoValue`], which is only valid while no value is held
/// - [`NoValue`] into any value slot
pub trait SlotInto<Target: ValueSlot>: ValueSlot {}

impl<V> SlotInto<Value<V>> for Value<V> {}
impl<V> SlotInto<NoValue> for Value<V> {}
impl<S: ValueSlot> SlotInto<S> for NoValue {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_constants() {
        assert!(<Value<u8> as ValueSlot>::HAS_VALUE);
        assert_eq!(<Value<u8> as ValueSlot>::FIRST_ERROR, 1);
        assert!(!<NoValue as ValueSlot>::HAS_VALUE);
        assert_eq!(<NoValue as ValueSlot>::FIRST_ERROR, 0);
    }

    #[test]
    fn test_stored_lists() {
        static_assertions::assert_type_eq_all!(Stored<Value<u8>, (char, ())>, (u8, (char, ())));
        static_assertions::assert_type_eq_all!(Stored<NoValue, (char, ())>, (char, ()));
        assert_eq!(<Stored<Value<u8>, (char, ())> as VariantList>::LEN, 2);
    }
}
