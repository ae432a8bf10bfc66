//! The conversion gate between containers.

use super::{list::ErrorList, subset::Subset};
use crate::{
    Voe,
    markers::{SlotInto, ValueSlot},
};

/// A container that may be converted into `Target`.
///
/// `Voe<S1, E1>` converts into `Voe<S2, E2>` when:
/// - the value slots agree, or at least one side has [`NoValue`], and
/// - every error type of `E1` appears in `E2`.
///
/// `M` is the inferred position list of the [`Subset`] relation. A held value
/// whose target has no value slot is rejected at run time.
///
/// [`NoValue`]: crate::NoValue
///
/// ```
/// use voe::{Errors, ValueOrError, VoidOrError, algebra::Convertible};
///
/// fn convertible<A: Convertible<B, M>, B, M>() {}
///
/// convertible::<ValueOrError<i32, Errors![char]>, ValueOrError<i32, Errors![i16, char]>, _>();
/// convertible::<VoidOrError<Errors![char]>, ValueOrError<u8, Errors![char]>, _>();
/// convertible::<ValueOrError<u8, Errors![char]>, VoidOrError<Errors![char, bool]>, _>();
/// ```
///
/// ```compile_fail
/// use voe::{Errors, ValueOrError, algebra::Convertible};
///
/// fn convertible<A: Convertible<B, M>, B, M>() {}
///
/// convertible::<ValueOrError<i32, Errors![char]>, ValueOrError<u32, Errors![char]>, _>();
/// ```
pub trait Convertible<Target, M> {
    /// Maps a slot of this container to the slot of the same variant in
    /// `Target`, or `None` for a value that `Target` cannot hold.
    fn map_slot(slot: usize) -> Option<usize>;
}

impl<S1, E1, S2, E2, M> Convertible<Voe<S2, E2>, M> for Voe<S1, E1>
where
    S1: SlotInto<S2>,
    S2: ValueSlot,
    E1: Subset<E2, M>,
    E2: ErrorList,
{
    #[inline]
    fn map_slot(slot: usize) -> Option<usize> {
        if S1::HAS_VALUE && slot == 0 {
            return S2::HAS_VALUE.then_some(0);
        }
        <E1 as Subset<E2, M>>::map_index(slot - S1::FIRST_ERROR).map(|index| index + S2::FIRST_ERROR)
    }
}
