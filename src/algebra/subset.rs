//! Subsets, index mappings and removal.

use super::list::{Contains, ErrorList, Here, There};

/// Every element of this list appears in `Super`.
///
/// `M` is the inferred list of positions in `Super`, one per element.
/// [`Subset::map_index`] is the index mapping from this list into `Super`.
///
/// ```
/// use voe::{Errors, algebra::index_mapping};
///
/// type Narrow = Errors![char, i16];
/// type Wide = Errors![i16, bool, char];
///
/// assert_eq!(index_mapping::<Narrow, Wide, _>(0), Some(2));
/// assert_eq!(index_mapping::<Narrow, Wide, _>(1), Some(0));
/// assert_eq!(index_mapping::<Narrow, Wide, _>(2), None);
/// ```
pub trait Subset<Super, M>: ErrorList {
    /// Position in `Super` of the element at `index` of this list, or `None`
    /// when `index` is out of range.
    fn map_index(index: usize) -> Option<usize>;
}

impl<Super: ErrorList> Subset<Super, ()> for () {
    #[inline]
    fn map_index(_index: usize) -> Option<usize> {
        None
    }
}

impl<H, T, Super, I, M> Subset<Super, (I, M)> for (H, T)
where
    Super: Contains<H, I>,
    T: Subset<Super, M>,
{
    #[inline]
    fn map_index(index: usize) -> Option<usize> {
        match index {
            0 => Some(<Super as Contains<H, I>>::INDEX),
            _ => <T as Subset<Super, M>>::map_index(index - 1),
        }
    }
}

/// Returns where the element at `index` of `Source` sits in `Target`.
#[inline]
pub fn index_mapping<Source, Target, M>(index: usize) -> Option<usize>
where
    Source: Subset<Target, M>,
{
    Source::map_index(index)
}

/// The list with `X` (at position `I`) removed.
pub trait Remove<X, I>: ErrorList {
    /// The remaining list.
    type Output: ErrorList;

    /// New position of the element at `index`, or `None` for the removed
    /// element.
    fn remap(index: usize) -> Option<usize>;
}

impl<H, T: ErrorList> Remove<H, Here> for (H, T) {
    type Output = T;

    #[inline]
    fn remap(index: usize) -> Option<usize> {
        index.checked_sub(1).filter(|&index| index < T::LEN)
    }
}

impl<H, T, X, I> Remove<X, There<I>> for (H, T)
where
    T: Remove<X, I>,
{
    type Output = (H, <T as Remove<X, I>>::Output);

    #[inline]
    fn remap(index: usize) -> Option<usize> {
        match index {
            0 => Some(0),
            _ => <T as Remove<X, I>>::remap(index - 1).map(|index| index + 1),
        }
    }
}

/// The list with every type of the list `Xs` removed.
///
/// `Is` is the inferred list of positions. Removing a type that is not in
/// the list does not compile.
///
/// ```
/// use voe::{Errors, algebra::Discarded};
///
/// static_assertions::assert_type_eq_all!(
///     Discarded<Errors![bool, i32, char, u8], Errors![u8, i32], (voe::algebra::I3, (voe::algebra::I1, ()))>,
///     Errors![bool, char],
/// );
/// ```
pub trait Discard<Xs, Is>: ErrorList {
    /// The remaining list.
    type Output: ErrorList;

    /// New position of the element at `index`, or `None` for a removed
    /// element.
    fn remap(index: usize) -> Option<usize>;
}

impl<L: ErrorList> Discard<(), ()> for L {
    type Output = L;

    #[inline]
    fn remap(index: usize) -> Option<usize> {
        (index < L::LEN).then_some(index)
    }
}

impl<L, X, Xs, I, Is> Discard<(X, Xs), (I, Is)> for L
where
    L: Remove<X, I>,
    <L as Remove<X, I>>::Output: Discard<Xs, Is>,
{
    type Output = <<L as Remove<X, I>>::Output as Discard<Xs, Is>>::Output;

    #[inline]
    fn remap(index: usize) -> Option<usize> {
        <L as Remove<X, I>>::remap(index)
            .and_then(<<L as Remove<X, I>>::Output as Discard<Xs, Is>>::remap)
    }
}

/// `L` with the types of `Xs` removed.
pub type Discarded<L, Xs, Is> = <L as Discard<Xs, Is>>::Output;
