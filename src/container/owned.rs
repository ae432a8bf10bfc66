use core::{fmt, marker::PhantomData};

use voe_internals::{CloneList, DebugList, EqList, RawTagged, TotalEqList, VariantList};

use super::State;
use crate::{
    algebra::{At, Contains, ErrorList, Position, TagWidth, minimal_tag_width},
    markers::{NoValue, Stored, Value, ValueSlot},
};

/// A container holding nothing, a value, or one error out of the error list
/// `E`.
///
/// `S` is the value slot: [`Value<V>`] or [`NoValue`]. Most code uses the
/// aliases [`ValueOrError`] and [`VoidOrError`].
///
/// The variants share one inline buffer sized and aligned for the largest of
/// them, next to a one-byte tag. Dropping a container drops the live variant;
/// [`Voe::NEEDS_DROP`] tells whether that can run any code at all.
///
/// A container is [`Send`] and [`Sync`] when all of its variants are. Like
/// any value it must not be mutated from one thread while another reads it,
/// which the borrow checker enforces.
///
/// # Examples
///
/// ```
/// use voe::prelude::*;
///
/// let mut result = ValueOrError::<u32, Errors![char, bool]>::from(10);
/// assert!(result.has_value());
/// assert_eq!(*result.value(), 10);
///
/// result.set_error('a');
/// assert!(result.has_any_error());
/// assert_eq!(result.state(), State::Error(0));
///
/// result.clear();
/// assert!(result.is_empty());
/// ```
#[must_use]
pub struct Voe<S: ValueSlot, E: ErrorList> {
    pub(super) raw: RawTagged<Stored<S, E>>,
    _marker: PhantomData<fn() -> (S, E)>,
}

/// A container that holds nothing, a `V`, or an error of the list `E`.
pub type ValueOrError<V, E = ()> = Voe<Value<V>, E>;

/// A container that holds nothing or an error of the list `E`.
pub type VoidOrError<E = ()> = Voe<NoValue, E>;

impl<S: ValueSlot, E: ErrorList> Voe<S, E> {
    /// `false` iff none of the variants needs drop glue, in which case
    /// dropping the container never runs any code.
    ///
    /// ```
    /// use voe::prelude::*;
    ///
    /// const _: () = assert!(!ValueOrError::<u32, Errors![char, &'static str]>::NEEDS_DROP);
    /// const _: () = assert!(ValueOrError::<String, Errors![char]>::NEEDS_DROP);
    /// const _: () = assert!(VoidOrError::<Errors![Vec<u8>]>::NEEDS_DROP);
    /// ```
    pub const NEEDS_DROP: bool = <Stored<S, E> as VariantList>::NEEDS_DROP;

    /// The smallest tag width able to represent every state of this
    /// container. The stored tag is always a `u8`; containers that would need
    /// more fail to compile.
    pub const TAG_WIDTH: TagWidth = minimal_tag_width(<Stored<S, E> as VariantList>::LEN as u64);

    /// Creates an empty container.
    #[inline]
    pub const fn new() -> Self {
        Self {
            raw: RawTagged::empty(),
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the container holds neither a value nor an error.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns `true` if the container holds its value. Always `false` for a
    /// [`VoidOrError`].
    #[inline]
    pub fn has_value(&self) -> bool {
        S::HAS_VALUE && self.raw.slot() == Some(0)
    }

    /// Returns `true` if the container holds any error.
    #[inline]
    pub fn has_any_error(&self) -> bool {
        matches!(self.raw.slot(), Some(slot) if slot >= S::FIRST_ERROR)
    }

    /// Returns `true` if the container holds an error of type `T`.
    ///
    /// ```
    /// use voe::prelude::*;
    ///
    /// let result: ValueOrError<u8, Errors![char, bool]> = make_error(true).convert();
    /// assert!(result.has_error::<bool, _>());
    /// assert!(!result.has_error::<char, _>());
    /// ```
    #[inline]
    pub fn has_error<T, I>(&self) -> bool
    where
        E: Contains<T, I>,
    {
        self.raw.slot() == Some(S::FIRST_ERROR + <E as Contains<T, I>>::INDEX)
    }

    /// Returns `true` if the container holds the error at position `I`.
    #[inline]
    pub fn has_error_at<I: Position>(&self) -> bool
    where
        E: At<I>,
    {
        self.raw.slot() == Some(S::FIRST_ERROR + I::VALUE)
    }

    /// Returns the position of the held error in the error list, or `None`
    /// when no error is held.
    #[inline]
    pub fn error_index(&self) -> Option<usize> {
        self.raw.slot()?.checked_sub(S::FIRST_ERROR)
    }

    /// Returns what the container currently holds.
    #[inline]
    pub fn state(&self) -> State {
        match self.raw.slot() {
            None => State::Empty,
            Some(slot) => match slot.checked_sub(S::FIRST_ERROR) {
                Some(index) => State::Error(index),
                None => State::Value,
            },
        }
    }

    /// Drops the held value or error, leaving the container empty.
    #[inline]
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Moves the content out into a new container, leaving this one empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        core::mem::replace(self, Self::new())
    }

    /// Creates a container holding `error`.
    #[inline]
    pub fn from_error<T, I>(error: T) -> Self
    where
        E: Contains<T, I>,
    {
        let mut container = Self::new();
        container.set_error(error);
        container
    }

    /// Replaces the content with `error`.
    #[inline]
    pub fn set_error<T, I>(&mut self, error: T)
    where
        E: Contains<T, I>,
    {
        let slot = S::FIRST_ERROR + <E as Contains<T, I>>::INDEX;
        // SAFETY: `E` has `T` at position `INDEX`, which is stored in slot
        // `FIRST_ERROR + INDEX`.
        unsafe { self.raw.write(slot, error) };
    }

    /// Replaces the content with the error returned by `make`.
    ///
    /// The current content is dropped before `make` runs, so the container is
    /// left empty if `make` panics.
    #[inline]
    pub fn emplace_error_with<T, I>(&mut self, make: impl FnOnce() -> T)
    where
        E: Contains<T, I>,
    {
        let slot = S::FIRST_ERROR + <E as Contains<T, I>>::INDEX;
        // SAFETY: `E` has `T` at position `INDEX`, which is stored in slot
        // `FIRST_ERROR + INDEX`.
        unsafe { self.raw.emplace(slot, make) };
    }
}

impl<V, E: ErrorList> Voe<Value<V>, E> {
    /// Creates a container holding `value`.
    #[inline]
    pub fn from_value(value: V) -> Self {
        let mut container = Self::new();
        container.set_value(value);
        container
    }

    /// Replaces the content with `value`.
    #[inline]
    pub fn set_value(&mut self, value: V) {
        // SAFETY: The value is stored in slot 0.
        unsafe { self.raw.write(0, value) };
    }
}

/// Creates a value-less container holding `error`.
///
/// This is the usual way to produce an error result; convert it into the
/// return type with [`Voe::convert`].
///
/// ```
/// use voe::prelude::*;
///
/// fn parse(input: &str) -> ValueOrError<u32, Errors![&'static str]> {
///     match input.parse::<u32>() {
///         Ok(value) => value.into(),
///         Err(_) => make_error("not a number").convert(),
///     }
/// }
///
/// assert_eq!(parse("12").into_value(), 12);
/// assert_eq!(parse("x").into_error::<&str, _>(), "not a number");
/// ```
#[inline]
pub fn make_error<T>(error: T) -> VoidOrError<(T, ())> {
    let mut container = Voe::new();
    // SAFETY: Slot 0 of `(T, ())` holds a `T`.
    unsafe { container.raw.write(0, error) };
    container
}

/// Creates a value-less container holding the error returned by `make`.
#[inline]
pub fn make_error_with<T>(make: impl FnOnce() -> T) -> VoidOrError<(T, ())> {
    let mut container = Voe::new();
    // SAFETY: Slot 0 of `(T, ())` holds a `T`.
    unsafe { container.raw.emplace(0, make) };
    container
}

impl<S: ValueSlot, E: ErrorList> Default for Voe<S, E> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E: ErrorList> From<V> for Voe<Value<V>, E> {
    #[inline]
    fn from(value: V) -> Self {
        Self::from_value(value)
    }
}

impl<S: ValueSlot, E: ErrorList> Clone for Voe<S, E>
where
    Stored<S, E>: CloneList,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            _marker: PhantomData,
        }
    }

    /// Copies `source` into `self`. When both hold the same variant it is
    /// updated in place with [`Clone::clone_from`]; otherwise the old content
    /// is dropped first.
    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.raw.clone_from(&source.raw);
    }
}

impl<S: ValueSlot, E: ErrorList> fmt::Debug for Voe<S, E>
where
    Stored<S, E>: DebugList,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.has_value() { "Value" } else { "Error" };
        self.raw.debug_variant(name, "Empty", f)
    }
}

impl<S: ValueSlot, E: ErrorList> PartialEq for Voe<S, E>
where
    Stored<S, E>: EqList,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<S: ValueSlot, E: ErrorList> Eq for Voe<S, E> where Stored<S, E>: TotalEqList {}
