/// Builds an error list type.
///
/// `Errors![A, B, C]` is the right-nested tuple list `(A, (B, (C, ())))`, and
/// `Errors![]` is the empty list `()`. Every type may appear at most once;
/// lookups into a list with repeated types do not compile.
///
/// # Examples
///
/// ```
/// use voe::prelude::*;
///
/// static_assertions::assert_type_eq_all!(Errors![u8, char], (u8, (char, ())));
/// static_assertions::assert_type_eq_all!(Errors![], ());
/// ```
///
/// ```compile_fail
/// use voe::prelude::*;
///
/// // `char` appears twice, so its position is ambiguous.
/// let result = ValueOrError::<u8, Errors![char, bool, char]>::from_error('x');
/// ```
#[macro_export]
macro_rules! Errors {
    () => { () };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        ($head, $crate::Errors![$($tail),*])
    };
}

/// Names the container type with value `V` and the merged errors of several
/// sources.
///
/// `Union![V; A, B, ...]` is [`Union<V, Errors![A, B, ...]>`]: each source is
/// either a container, contributing its error list, or a type registered
/// with [`identify!`], contributing itself. Repeated error types are kept
/// once, at their first position.
///
/// Types are told apart by their identity keys alone. Two distinct types
/// registered with the same key count as one type, so the later one is
/// dropped from the merged list without a diagnostic. The mistake only
/// surfaces where an error of the dropped type is stored, as an unsatisfied
/// [`Contains`] bound.
///
/// [`Union<V, Errors![A, B, ...]>`]: crate::algebra::Union
/// [`Contains`]: crate::algebra::Contains
///
/// # Examples
///
/// ```
/// use voe::prelude::*;
///
/// type Read = ValueOrError<u8, Errors![u16, char]>;
///
/// static_assertions::assert_type_eq_all!(
///     Union![u32; Read, bool, char],
///     ValueOrError<u32, Errors![u16, char, bool]>,
/// );
/// ```
#[macro_export]
macro_rules! Union {
    ($value:ty; $($source:ty),* $(,)?) => {
        $crate::algebra::Union<$value, $crate::Errors![$($source),*]>
    };
}

/// Registers identity keys for types used in a [`Union!`].
///
/// Each key is a list of decimal digits that must be unique among all
/// registered types. Keys starting with `0` are reserved for the scalar types
/// the crate registers itself (`bool`, `char`, `()`, `&'static str`, the
/// integer and the float types).
///
/// Uniqueness is not checked. A [`Union!`] treats two types sharing a key as
/// the same type and keeps only the first of them.
///
/// # Examples
///
/// ```
/// use voe::prelude::*;
///
/// #[derive(Debug)]
/// struct Timeout;
/// #[derive(Debug)]
/// struct Refused;
///
/// identify! {
///     Timeout => [1 0],
///     Refused => [1 1],
/// }
///
/// type Connect = VoidOrError<Errors![Timeout, Refused]>;
/// type Write = ValueOrError<usize, Errors![Timeout]>;
///
/// static_assertions::assert_type_eq_all!(
///     Union![usize; Connect, Write, u8],
///     ValueOrError<usize, Errors![Timeout, Refused, u8]>,
/// );
/// ```
///
/// ```compile_fail
/// struct Mine;
///
/// voe::identify! {
///     Mine => [0 7],
/// }
/// ```
#[macro_export]
macro_rules! identify {
    () => {};
    ($ty:ty => [0 $($digit:tt)*] $(, $($rest:tt)*)?) => {
        ::core::compile_error!("identity keys starting with 0 are reserved");
    };
    ($ty:ty => [$($digit:tt)+] $(, $($rest:tt)*)?) => {
        impl $crate::algebra::Identified for $ty {
            type Key = $crate::__voe_key![$($digit)+];
        }

        impl $crate::algebra::ErrorSource for $ty {
            type Errors = ($ty, ());
        }

        $($crate::identify! { $($rest)* })?
    };
}

// Not public API. A digit list as a right-nested list of type-level digits.
#[doc(hidden)]
#[macro_export]
macro_rules! __voe_key {
    () => { () };
    ($digit:tt $($rest:tt)*) => {
        ($crate::__voe_digit!($digit), $crate::__voe_key![$($rest)*])
    };
}

// Not public API.
#[doc(hidden)]
#[macro_export]
macro_rules! __voe_digit {
    (0) => { $crate::algebra::D0 };
    (1) => { $crate::algebra::D1 };
    (2) => { $crate::algebra::D2 };
    (3) => { $crate::algebra::D3 };
    (4) => { $crate::algebra::D4 };
    (5) => { $crate::algebra::D5 };
    (6) => { $crate::algebra::D6 };
    (7) => { $crate::algebra::D7 };
    (8) => { $crate::algebra::D8 };
    (9) => { $crate::algebra::D9 };
}

/// Returns early with the error held by a container.
///
/// Evaluates the container expression. If it holds an error, the error is
/// converted into the return type of the enclosing function and returned. A
/// held value is dropped.
///
/// The return type must be a container whose error list includes every
/// error type of the expression.
///
/// # Examples
///
/// ```
/// use voe::prelude::*;
///
/// fn check(limit: u32) -> VoidOrError<Errors![&'static str]> {
///     if limit == 0 { make_error("limit is zero").convert() } else { VoidOrError::new() }
/// }
///
/// fn run(limit: u32) -> ValueOrError<u32, Errors![char, &'static str]> {
///     return_if_error!(check(limit));
///     (limit * 2).into()
/// }
///
/// assert_eq!(run(4).into_value(), 8);
/// assert_eq!(run(0).into_error::<&str, _>(), "limit is zero");
/// ```
#[macro_export]
macro_rules! return_if_error {
    ($container:expr $(,)?) => {{
        let container = $container;
        if container.has_any_error() {
            return $crate::__private::propagate(container);
        }
    }};
}

/// Takes the value out of a container, or returns early with its error.
///
/// Two forms are accepted:
///
/// - `assign_or_return!(let pattern = expression)` binds the value
/// - `assign_or_return!(place, expression)` assigns it to an existing place
///
/// When the container holds an error it is converted into the return type of
/// the enclosing function and returned, as with [`return_if_error!`].
///
/// # Panics
///
/// Panics with a [`ContractViolation::MissingValue`] if the container is
/// empty.
///
/// [`ContractViolation::MissingValue`]: crate::contract::ContractViolation::MissingValue
///
/// # Examples
///
/// ```
/// use voe::prelude::*;
///
/// fn digit(input: char) -> ValueOrError<u32, Errors![char]> {
///     match input.to_digit(10) {
///         Some(digit) => digit.into(),
///         None => make_error(input).convert(),
///     }
/// }
///
/// fn sum(input: &str) -> ValueOrError<u32, Errors![char, u8]> {
///     let mut total = 0;
///     for character in input.chars() {
///         let next: u32;
///         assign_or_return!(next, digit(character));
///         total += next;
///     }
///     assign_or_return!(let check = digit('0'));
///     (total + check).into()
/// }
///
/// assert_eq!(sum("123").into_value(), 6);
/// assert_eq!(sum("1x3").into_error::<char, _>(), 'x');
/// ```
#[macro_export]
macro_rules! assign_or_return {
    (let $pattern:pat = $container:expr $(,)?) => {
        let $pattern = {
            let container = $container;
            if container.has_any_error() {
                return $crate::__private::propagate(container);
            }
            container.into_value()
        };
    };
    ($place:expr, $container:expr $(,)?) => {
        $place = {
            let container = $container;
            if container.has_any_error() {
                return $crate::__private::propagate(container);
            }
            container.into_value()
        };
    };
}
