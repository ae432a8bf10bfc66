//! Value and error accessors.
//!
//! Every accessor comes in up to three flavors:
//!
//! - checked (`value`, `error`, ...): reports a
//!   [`ContractViolation`] and panics when the requested variant is not held
//! - optional (`get_value`, `get_error`, ...): returns `None` instead
//! - `unsafe` unchecked (`value_unchecked`, ...): the caller guarantees the
//!   variant is held; only debug builds check

use core::any::type_name;

use super::{State, Voe};
use crate::{
    algebra::{At, Contains, ErrorList, Position},
    contract::{ContractViolation, violated},
    markers::{Value, ValueSlot},
};

impl<V, E: ErrorList> Voe<Value<V>, E> {
    /// Reports a missing value.
    #[cold]
    #[track_caller]
    fn missing_value(state: State) -> ! {
        violated(ContractViolation::MissingValue {
            value_type: type_name::<V>(),
            state,
        })
    }

    /// Returns a reference to the held value.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::MissingValue`] if no value is held.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &V {
        match self.get_value() {
            Some(value) => value,
            None => Self::missing_value(self.state()),
        }
    }

    /// Returns a mutable reference to the held value.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::MissingValue`] if no value is held.
    #[inline]
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut V {
        if !self.has_value() {
            Self::missing_value(self.state());
        }
        // SAFETY: The value is held.
        unsafe { self.raw.get_mut::<V>() }
    }

    /// Consumes the container and returns the held value.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::MissingValue`] if no value is held.
    ///
    /// ```
    /// use voe::prelude::*;
    ///
    /// let result = ValueOrError::<String, Errors![char]>::from(String::from("done"));
    /// assert_eq!(result.into_value(), "done");
    /// ```
    #[inline]
    #[track_caller]
    pub fn into_value(mut self) -> V {
        self.take_value()
    }

    /// Moves the held value out, leaving the container empty.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::MissingValue`] if no value is held.
    #[inline]
    #[track_caller]
    pub fn take_value(&mut self) -> V {
        if !self.has_value() {
            Self::missing_value(self.state());
        }
        // SAFETY: The value is held.
        unsafe { self.raw.take::<V>() }
    }

    /// Returns a reference to the held value, or `None`.
    #[inline]
    pub fn get_value(&self) -> Option<&V> {
        if self.has_value() {
            // SAFETY: The value is held.
            Some(unsafe { self.raw.get::<V>() })
        } else {
            None
        }
    }

    /// Returns a mutable reference to the held value, or `None`.
    #[inline]
    pub fn get_value_mut(&mut self) -> Option<&mut V> {
        if self.has_value() {
            // SAFETY: The value is held.
            Some(unsafe { self.raw.get_mut::<V>() })
        } else {
            None
        }
    }

    /// Returns a reference to the held value without checking.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. The container holds its value.
    #[inline]
    pub unsafe fn value_unchecked(&self) -> &V {
        debug_assert!(self.has_value(), "value_unchecked on a container without a value");
        // SAFETY: Guaranteed by the caller.
        unsafe { self.raw.get::<V>() }
    }

    /// Returns a mutable reference to the held value without checking.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. The container holds its value.
    #[inline]
    pub unsafe fn value_unchecked_mut(&mut self) -> &mut V {
        debug_assert!(self.has_value(), "value_unchecked_mut on a container without a value");
        // SAFETY: Guaranteed by the caller.
        unsafe { self.raw.get_mut::<V>() }
    }
}

impl<S: ValueSlot, E: ErrorList> Voe<S, E> {
    /// Reports a missing error of type `T`.
    #[cold]
    #[track_caller]
    fn missing_error<T>(state: State) -> ! {
        violated(ContractViolation::MissingError {
            error_type: type_name::<T>(),
            state,
        })
    }

    /// Returns a reference to the held error of type `T`.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::MissingError`] if no error of type
    /// `T` is held.
    ///
    /// ```
    /// use voe::prelude::*;
    ///
    /// let result = ValueOrError::<u8, Errors![char, bool]>::from_error(false);
    /// assert!(!*result.error::<bool, _>());
    /// ```
    #[inline]
    #[track_caller]
    pub fn error<T, I>(&self) -> &T
    where
        E: Contains<T, I>,
    {
        match self.get_error::<T, I>() {
            Some(error) => error,
            None => Self::missing_error::<T>(self.state()),
        }
    }

    /// Returns a mutable reference to the held error of type `T`.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::MissingError`] if no error of type
    /// `T` is held.
    #[inline]
    #[track_caller]
    pub fn error_mut<T, I>(&mut self) -> &mut T
    where
        E: Contains<T, I>,
    {
        if !self.has_error::<T, I>() {
            Self::missing_error::<T>(self.state());
        }
        // SAFETY: An error of type `T` is held.
        unsafe { self.raw.get_mut::<T>() }
    }

    /// Consumes the container and returns the held error of type `T`.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::MissingError`] if no error of type
    /// `T` is held.
    #[inline]
    #[track_caller]
    pub fn into_error<T, I>(mut self) -> T
    where
        E: Contains<T, I>,
    {
        self.take_error::<T, I>()
    }

    /// Moves the held error of type `T` out, leaving the container empty.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::MissingError`] if no error of type
    /// `T` is held.
    #[inline]
    #[track_caller]
    pub fn take_error<T, I>(&mut self) -> T
    where
        E: Contains<T, I>,
    {
        if !self.has_error::<T, I>() {
            Self::missing_error::<T>(self.state());
        }
        // SAFETY: An error of type `T` is held.
        unsafe { self.raw.take::<T>() }
    }

    /// Returns a reference to the held error of type `T`, or `None`.
    #[inline]
    pub fn get_error<T, I>(&self) -> Option<&T>
    where
        E: Contains<T, I>,
    {
        if self.has_error::<T, I>() {
            // SAFETY: An error of type `T` is held.
            Some(unsafe { self.raw.get::<T>() })
        } else {
            None
        }
    }

    /// Returns a mutable reference to the held error of type `T`, or `None`.
    #[inline]
    pub fn get_error_mut<T, I>(&mut self) -> Option<&mut T>
    where
        E: Contains<T, I>,
    {
        if self.has_error::<T, I>() {
            // SAFETY: An error of type `T` is held.
            Some(unsafe { self.raw.get_mut::<T>() })
        } else {
            None
        }
    }

    /// Returns a reference to the held error of type `T` without checking.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. The container holds an error of type `T`.
    #[inline]
    pub unsafe fn error_unchecked<T, I>(&self) -> &T
    where
        E: Contains<T, I>,
    {
        debug_assert!(self.has_error::<T, I>(), "error_unchecked on a container without that error");
        // SAFETY: Guaranteed by the caller.
        unsafe { self.raw.get::<T>() }
    }

    /// Returns a mutable reference to the held error of type `T` without
    /// checking.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. The container holds an error of type `T`.
    #[inline]
    pub unsafe fn error_unchecked_mut<T, I>(&mut self) -> &mut T
    where
        E: Contains<T, I>,
    {
        debug_assert!(self.has_error::<T, I>(), "error_unchecked_mut on a container without that error");
        // SAFETY: Guaranteed by the caller.
        unsafe { self.raw.get_mut::<T>() }
    }

    /// Returns a reference to the held error at position `I` of the error
    /// list.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::MissingError`] if that error is not
    /// held.
    ///
    /// ```
    /// use voe::{algebra::I1, prelude::*};
    ///
    /// let result = VoidOrError::<Errors![char, u16]>::from_error(7_u16);
    /// assert_eq!(*result.error_at::<I1>(), 7);
    /// ```
    #[inline]
    #[track_caller]
    pub fn error_at<I: Position>(&self) -> &<E as At<I>>::Output
    where
        E: At<I>,
    {
        if !self.has_error_at::<I>() {
            Self::missing_error::<<E as At<I>>::Output>(self.state());
        }
        // SAFETY: The error at position `I` is held, and its type is
        // `<E as At<I>>::Output`.
        unsafe { self.raw.get::<<E as At<I>>::Output>() }
    }

    /// Returns a mutable reference to the held error at position `I` of the
    /// error list.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::MissingError`] if that error is not
    /// held.
    #[inline]
    #[track_caller]
    pub fn error_at_mut<I: Position>(&mut self) -> &mut <E as At<I>>::Output
    where
        E: At<I>,
    {
        if !self.has_error_at::<I>() {
            Self::missing_error::<<E as At<I>>::Output>(self.state());
        }
        // SAFETY: The error at position `I` is held, and its type is
        // `<E as At<I>>::Output`.
        unsafe { self.raw.get_mut::<<E as At<I>>::Output>() }
    }

    /// Consumes the container and returns the held error at position `I`.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::MissingError`] if that error is not
    /// held.
    #[inline]
    #[track_caller]
    pub fn into_error_at<I: Position>(mut self) -> <E as At<I>>::Output
    where
        E: At<I>,
    {
        if !self.has_error_at::<I>() {
            Self::missing_error::<<E as At<I>>::Output>(self.state());
        }
        // SAFETY: The error at position `I` is held, and its type is
        // `<E as At<I>>::Output`.
        unsafe { self.raw.take::<<E as At<I>>::Output>() }
    }
}
