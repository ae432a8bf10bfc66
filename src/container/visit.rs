//! Visiting the live variant of a container.

use core::any::type_name;

use super::Voe;
use crate::{
    algebra::ErrorList,
    contract::{ContractViolation, violated},
    dispatch::{VisitMut, VisitOwned, VisitRef, Visitor},
    markers::{NoValue, Value},
};

impl<V, E: ErrorList> Voe<Value<V>, E> {
    /// Reports a visit of an empty container.
    #[cold]
    #[track_caller]
    fn empty_visit() -> ! {
        violated(ContractViolation::EmptyVisit {
            value_type: type_name::<V>(),
        })
    }

    /// Calls `visitor` with a reference to the value or the held error.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::EmptyVisit`] if the container is
    /// empty.
    #[inline]
    #[track_caller]
    pub fn visit<'a, F, O>(&'a self, visitor: F) -> O
    where
        (V, E): VisitRef<'a, F, O>,
    {
        let Some(slot) = self.raw.slot() else {
            Self::empty_visit()
        };
        // SAFETY: `slot` is live and the buffer is borrowed for `'a`.
        unsafe { <(V, E) as VisitRef<'a, F, O>>::visit_ref(slot, self.raw.as_ptr(), visitor) }
    }

    /// Calls `visitor` with a mutable reference to the value or the held
    /// error.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::EmptyVisit`] if the container is
    /// empty.
    #[inline]
    #[track_caller]
    pub fn visit_mut<'a, F, O>(&'a mut self, visitor: F) -> O
    where
        (V, E): VisitMut<'a, F, O>,
    {
        let Some(slot) = self.raw.slot() else {
            Self::empty_visit()
        };
        // SAFETY: `slot` is live and the buffer is borrowed mutably for `'a`.
        unsafe { <(V, E) as VisitMut<'a, F, O>>::visit_mut(slot, self.raw.as_mut_ptr(), visitor) }
    }

    /// Consumes the container and calls `visitor` with the value or the held
    /// error.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::EmptyVisit`] if the container is
    /// empty.
    ///
    /// ```
    /// use voe::prelude::*;
    ///
    /// let result = ValueOrError::<String, Errors![String]>::from_error(String::from("bad"));
    /// assert_eq!(result.into_visit(|text: String| text.len()), 3);
    /// ```
    #[inline]
    #[track_caller]
    pub fn into_visit<F, O>(mut self, visitor: F) -> O
    where
        (V, E): VisitOwned<F, O>,
    {
        let Some(slot) = self.raw.disarm() else {
            Self::empty_visit()
        };
        // SAFETY: `slot` was live. The buffer is disarmed, so ownership of
        // the variant passes to the visit.
        unsafe { <(V, E) as VisitOwned<F, O>>::visit_owned(slot, self.raw.as_ptr(), visitor) }
    }
}

impl<E: ErrorList> Voe<NoValue, E> {
    /// Calls `visitor` with a reference to the held error, or with
    /// [`NoValue`] when the container is empty.
    ///
    /// ```
    /// use voe::prelude::*;
    ///
    /// struct Status;
    ///
    /// impl Visitor<NoValue> for Status {
    ///     type Output = &'static str;
    ///     fn visit(self, _: NoValue) -> &'static str {
    ///         "ok"
    ///     }
    /// }
    ///
    /// impl Visitor<&u16> for Status {
    ///     type Output = &'static str;
    ///     fn visit(self, _: &u16) -> &'static str {
    ///         "failed"
    ///     }
    /// }
    ///
    /// assert_eq!(VoidOrError::<Errors![u16]>::new().visit(Status), "ok");
    /// assert_eq!(VoidOrError::<Errors![u16]>::from_error(5_u16).visit(Status), "failed");
    /// ```
    #[inline]
    pub fn visit<'a, F, O>(&'a self, visitor: F) -> O
    where
        E: VisitRef<'a, F, O>,
        F: Visitor<NoValue, Output = O>,
    {
        match self.raw.slot() {
            None => visitor.visit(NoValue),
            // SAFETY: `slot` is live and the buffer is borrowed for `'a`.
            Some(slot) => unsafe {
                <E as VisitRef<'a, F, O>>::visit_ref(slot, self.raw.as_ptr(), visitor)
            },
        }
    }

    /// Calls `visitor` with a mutable reference to the held error, or with
    /// [`NoValue`] when the container is empty.
    #[inline]
    pub fn visit_mut<'a, F, O>(&'a mut self, visitor: F) -> O
    where
        E: VisitMut<'a, F, O>,
        F: Visitor<NoValue, Output = O>,
    {
        match self.raw.slot() {
            None => visitor.visit(NoValue),
            // SAFETY: `slot` is live and the buffer is borrowed mutably for
            // `'a`.
            Some(slot) => unsafe {
                <E as VisitMut<'a, F, O>>::visit_mut(slot, self.raw.as_mut_ptr(), visitor)
            },
        }
    }

    /// Consumes the container and calls `visitor` with the held error, or
    /// with [`NoValue`] when the container is empty.
    #[inline]
    pub fn into_visit<F, O>(mut self, visitor: F) -> O
    where
        E: VisitOwned<F, O>,
        F: Visitor<NoValue, Output = O>,
    {
        match self.raw.disarm() {
            None => visitor.visit(NoValue),
            // SAFETY: `slot` was live. The buffer is disarmed, so ownership
            // of the variant passes to the visit.
            Some(slot) => unsafe {
                <E as VisitOwned<F, O>>::visit_owned(slot, self.raw.as_ptr(), visitor)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec::Vec};

    use crate::{NoValue, ValueOrError, Visitor, VoidOrError};

    struct Grow;

    impl Visitor<&mut String> for Grow {
        type Output = usize;
        fn visit(self, value: &mut String) -> usize {
            value.push('+');
            value.len()
        }
    }

    impl Visitor<&mut Vec<u8>> for Grow {
        type Output = usize;
        fn visit(self, error: &mut Vec<u8>) -> usize {
            error.push(0);
            error.len()
        }
    }

    impl Visitor<NoValue> for Grow {
        type Output = usize;
        fn visit(self, _: NoValue) -> usize {
            0
        }
    }

    #[test]
    fn test_visit_mut_updates_in_place() {
        let mut result = ValueOrError::<String, Errors![Vec<u8>]>::from(String::from("a"));
        assert_eq!(result.visit_mut(Grow), 2);
        assert_eq!(result.value(), "a+");

        let mut void = VoidOrError::<Errors![Vec<u8>]>::new();
        assert_eq!(void.visit_mut(Grow), 0);
        void.set_error(Vec::new());
        assert_eq!(void.visit_mut(Grow), 1);
        assert_eq!(void.error::<Vec<u8>, _>().len(), 1);
    }

    #[test]
    fn test_into_visit_moves_out() {
        let result = ValueOrError::<String, Errors![String]>::from(String::from("moved"));
        let text = result.into_visit(|text: String| text);
        assert_eq!(text, "moved");
    }

    #[test]
    #[should_panic(expected = "visited an empty container with value type `u8`")]
    fn test_empty_visit_panics() {
        ValueOrError::<u8, Errors![u8]>::new().visit(|_: &u8| ());
    }
}
