//! Type-level identities.
//!
//! Merging error lists needs to know when two types are *different*, which
//! the trait system cannot answer for arbitrary types. Types taking part in a
//! [`Union`](crate::Union) therefore carry an [`Identified::Key`]: a list of
//! decimal digits, compared digit by digit with [`SameAs`]. Keys are
//! registered with [`identify!`](crate::identify).
//!
//! The crate registers the primitive types, `()` and `&'static str` with
//! keys starting with the digit `0`. Keys of other types must not start with
//! `0`.

use core::marker::PhantomData;

use super::union::ErrorSource;

/// A type-level boolean.
pub trait Bit {
    /// The boolean value.
    const VALUE: bool;

    /// Logical and.
    type And<B: Bit>: Bit;

    /// `Then` when this bit is set, otherwise `Else`.
    type Select<Then, Else>;
}

/// Type-level `false`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct B0;

/// Type-level `true`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct B1;

impl Bit for B0 {
    const VALUE: bool = false;

    type And<B: Bit> = B0;
    type Select<Then, Else> = Else;
}

impl Bit for B1 {
    const VALUE: bool = true;

    type And<B: Bit> = B;
    type Select<Then, Else> = Then;
}

/// Type-level zero.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct Zero;

/// Type-level successor of `N`.
pub struct Succ<N>(PhantomData<N>);

/// Digit 0.
pub type D0 = Zero;
/// Digit 1.
pub type D1 = Succ<D0>;
/// Digit 2.
pub type D2 = Succ<D1>;
/// Digit 3.
pub type D3 = Succ<D2>;
/// Digit 4.
pub type D4 = Succ<D3>;
/// Digit 5.
pub type D5 = Succ<D4>;
/// Digit 6.
pub type D6 = Succ<D5>;
/// Digit 7.
pub type D7 = Succ<D6>;
/// Digit 8.
pub type D8 = Succ<D7>;
/// Digit 9.
pub type D9 = Succ<D8>;

/// Type-level equality of digits and digit lists.
pub trait SameAs<Other> {
    /// [`B1`] if equal, [`B0`] otherwise.
    type Output: Bit;
}

impl SameAs<Zero> for Zero {
    type Output = B1;
}

impl<N> SameAs<Succ<N>> for Zero {
    type Output = B0;
}

impl<N> SameAs<Zero> for Succ<N> {
    type Output = B0;
}

impl<N, M> SameAs<Succ<M>> for Succ<N>
where
    N: SameAs<M>,
{
    type Output = <N as SameAs<M>>::Output;
}

impl SameAs<()> for () {
    type Output = B1;
}

impl<H, T> SameAs<(H, T)> for () {
    type Output = B0;
}

impl<H, T> SameAs<()> for (H, T) {
    type Output = B0;
}

impl<H1, T1, H2, T2> SameAs<(H2, T2)> for (H1, T1)
where
    H1: SameAs<H2>,
    T1: SameAs<T2>,
{
    type Output = <<H1 as SameAs<H2>>::Output as Bit>::And<<T1 as SameAs<T2>>::Output>;
}

/// A type with a registered identity key.
///
/// Implement it with [`identify!`](crate::identify).
pub trait Identified {
    /// The digit list identifying this type.
    type Key;
}

macro_rules! identify_builtin {
    ($($ty:ty => [$($digit:tt)+]),* $(,)?) => {
        $(
            impl Identified for $ty {
                type Key = crate::__voe_key![$($digit)+];
            }

            impl ErrorSource for $ty {
                type Errors = ($ty, ());
            }
        )*
    };
}

identify_builtin! {
    bool => [0 0 1],
    char => [0 0 2],
    () => [0 0 3],
    &'static str => [0 0 4],
    i8 => [0 1 0],
    i16 => [0 1 1],
    i32 => [0 1 2],
    i64 => [0 1 3],
    i128 => [0 1 4],
    isize => [0 1 5],
    u8 => [0 2 0],
    u16 => [0 2 1],
    u32 => [0 2 2],
    u64 => [0 2 3],
    u128 => [0 2 4],
    usize => [0 2 5],
    f32 => [0 3 0],
    f64 => [0 3 1],
}
