//! Error lists, positions and lookups.

use core::marker::PhantomData;

use voe_internals::VariantList;

mod sealed {
    pub trait Sealed {}

    impl Sealed for () {}
    impl<H, T: Sealed> Sealed for (H, T) {}
}

/// A list of error types: `()` or `(H, T)` where `T` is an error list.
///
/// Build lists with [`Errors!`](crate::Errors). This trait is sealed.
pub trait ErrorList: VariantList + sealed::Sealed {}

impl ErrorList for () {}

impl<H, T: ErrorList> ErrorList for (H, T) {}

/// Position witness for the head of a list.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct Here;

/// Position witness for position `I` of the tail of a list.
pub struct There<I>(PhantomData<I>);

/// A position witness with a numeric value.
pub trait Position {
    /// Zero-based position.
    const VALUE: usize;
}

impl Position for Here {
    const VALUE: usize = 0;
}

impl<I: Position> Position for There<I> {
    const VALUE: usize = 1 + I::VALUE;
}

/// Position 0.
pub type I0 = Here;
/// Position 1.
pub type I1 = There<I0>;
/// Position 2.
pub type I2 = There<I1>;
/// Position 3.
pub type I3 = There<I2>;
/// Position 4.
pub type I4 = There<I3>;
/// Position 5.
pub type I5 = There<I4>;
/// Position 6.
pub type I6 = There<I5>;
/// Position 7.
pub type I7 = There<I6>;
/// Position 8.
pub type I8 = There<I7>;
/// Position 9.
pub type I9 = There<I8>;

/// The list contains `T` at the position witnessed by `I`.
///
/// `I` is inferred. When `T` occurs more than once the witness is ambiguous
/// and the lookup is rejected, which keeps error lists free of duplicates in
/// practice.
///
/// ```
/// use voe::{Errors, algebra::index_of};
///
/// assert_eq!(index_of::<Errors![i32, f32, char], f32, _>(), 1);
/// ```
///
/// ```compile_fail
/// use voe::{Errors, algebra::index_of};
///
/// index_of::<Errors![i32, char, i32], i32, _>();
/// ```
pub trait Contains<T, I>: ErrorList {
    /// Position of `T` in the list.
    const INDEX: usize;
}

impl<T, Tail: ErrorList> Contains<T, Here> for (T, Tail) {
    const INDEX: usize = 0;
}

impl<H, Tail, T, I> Contains<T, There<I>> for (H, Tail)
where
    Tail: Contains<T, I>,
{
    const INDEX: usize = 1 + <Tail as Contains<T, I>>::INDEX;
}

/// The list has an element at position `I`.
pub trait At<I>: ErrorList {
    /// The element at position `I`.
    type Output;
}

impl<H, T: ErrorList> At<Here> for (H, T) {
    type Output = H;
}

impl<H, T, I> At<There<I>> for (H, T)
where
    T: At<I>,
{
    type Output = <T as At<I>>::Output;
}

/// Returns the position of `T` in the list `L`.
#[inline]
pub const fn index_of<L, T, I>() -> usize
where
    L: Contains<T, I>,
{
    L::INDEX
}
