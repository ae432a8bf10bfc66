//! Merging the error lists of several sources.

use super::{
    identity::{Bit, Identified, SameAs},
    list::ErrorList,
};
use crate::{
    Voe,
    markers::{NoValue, Value, ValueSlot},
};

/// Something that contributes error types to a [`Union`].
///
/// Containers contribute their error list. Types registered with
/// [`identify!`](crate::identify) contribute themselves.
pub trait ErrorSource {
    /// The contributed error types.
    type Errors;
}

impl<S: ValueSlot, E: ErrorList> ErrorSource for Voe<S, E> {
    type Errors = E;
}

/// Appends the list `Rhs`.
pub trait Concat<Rhs> {
    /// The concatenated list.
    type Output;
}

impl<Rhs> Concat<Rhs> for () {
    type Output = Rhs;
}

impl<H, T, Rhs> Concat<Rhs> for (H, T)
where
    T: Concat<Rhs>,
{
    type Output = (H, <T as Concat<Rhs>>::Output);
}

/// Removes every element with the same identity as `X`.
pub trait Without<X> {
    /// The remaining list.
    type Output;
}

impl<X> Without<X> for () {
    type Output = ();
}

impl<H, T, X> Without<X> for (H, T)
where
    H: Identified,
    X: Identified,
    <H as Identified>::Key: SameAs<<X as Identified>::Key>,
    T: Without<X>,
{
    type Output = <<<H as Identified>::Key as SameAs<<X as Identified>::Key>>::Output as Bit>::Select<
        <T as Without<X>>::Output,
        (H, <T as Without<X>>::Output),
    >;
}

/// Removes repeated elements, keeping the first occurrence of each.
pub trait Dedup {
    /// The list without repetitions.
    type Output;
}

impl Dedup for () {
    type Output = ();
}

impl<H, T> Dedup for (H, T)
where
    T: Without<H>,
    <T as Without<H>>::Output: Dedup,
{
    type Output = (H, <<T as Without<H>>::Output as Dedup>::Output);
}

/// Concatenates the error lists of a list of [`ErrorSource`]s.
pub trait MergeSources {
    /// All contributed error types, in order, with repetitions.
    type Output;
}

impl MergeSources for () {
    type Output = ();
}

impl<A, Rest> MergeSources for (A, Rest)
where
    A: ErrorSource,
    Rest: MergeSources,
    <A as ErrorSource>::Errors: Concat<<Rest as MergeSources>::Output>,
{
    type Output = <<A as ErrorSource>::Errors as Concat<<Rest as MergeSources>::Output>>::Output;
}

/// The deduplicated error types of the source list `Sources`, in first-seen
/// order.
pub type Merged<Sources> = <<Sources as MergeSources>::Output as Dedup>::Output;

/// A container with value type `V` and every error type of the source list
/// `Sources`.
///
/// Usually written with the [`Union!`](crate::Union) macro, which builds the
/// source list:
///
/// ```
/// use voe::prelude::*;
///
/// type A = ValueOrError<char, Errors![i32, i16]>;
/// type B = VoidOrError<Errors![i64, i32]>;
///
/// static_assertions::assert_type_eq_all!(
///     Union![f32; A, B],
///     ValueOrError<f32, Errors![i32, i16, i64]>,
/// );
/// ```
pub type Union<V, Sources> = Voe<Value<V>, Merged<Sources>>;

/// A container without a value slot and every error type of the source list
/// `Sources`.
pub type VoidUnion<Sources> = Voe<NoValue, Merged<Sources>>;

#[cfg(test)]
mod tests {
    use static_assertions::assert_type_eq_all;

    use super::*;
    use crate::{ValueOrError, VoidOrError};

    #[test]
    fn test_concat() {
        assert_type_eq_all!(<() as Concat<()>>::Output, ());
        assert_type_eq_all!(<Errors![u8] as Concat<()>>::Output, Errors![u8]);
        assert_type_eq_all!(
            <Errors![u8, i8] as Concat<Errors![i8, char]>>::Output,
            Errors![u8, i8, i8, char]
        );
    }

    #[test]
    fn test_without() {
        assert_type_eq_all!(<Errors![u8, i8, u8] as Without<u8>>::Output, Errors![i8]);
        assert_type_eq_all!(<Errors![u8, i8] as Without<bool>>::Output, Errors![u8, i8]);
    }

    #[test]
    fn test_dedup() {
        assert_type_eq_all!(<() as Dedup>::Output, ());
        assert_type_eq_all!(<Errors![u8, i8, char] as Dedup>::Output, Errors![u8, i8, char]);
        assert_type_eq_all!(<Errors![u8, u8] as Dedup>::Output, Errors![u8]);
        assert_type_eq_all!(
            <Errors![f32, u8, f32, i8, u8, f32] as Dedup>::Output,
            Errors![f32, u8, i8]
        );
    }

    #[test]
    fn test_merge_sources() {
        type A = ValueOrError<char, Errors![i32, i16]>;
        type B = VoidOrError<Errors![i64, i32]>;
        assert_type_eq_all!(Merged<Errors![A, B]>, Errors![i32, i16, i64]);
        assert_type_eq_all!(Merged<Errors![u8, A, u8]>, Errors![u8, i32, i16]);
        assert_type_eq_all!(Merged<Errors![]>, ());
        assert_type_eq_all!(VoidUnion<Errors![B, bool]>, VoidOrError<Errors![i64, i32, bool]>);
    }
}
