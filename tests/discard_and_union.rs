//! Narrowing error lists and merging them.
//!
//! ## Discard
//! - `test_discard_errors_cases`: discarded error, retained error, value and
//!   empty; the source is left empty every time
//! - `test_discard_value`
//!
//! ## Union
//! - `test_union_of_two_containers`: `{i32, i16}` and `{i64, i32}` merge into
//!   `{i32, i16, i64}`
//! - `test_union_with_registered_types`
//! - `test_union_merges_types_sharing_a_key`: only the first of two types
//!   registered under one key survives

mod common;

use common::{Tracked, create, drop, take_log};
use static_assertions::assert_type_eq_all;
use voe::{algebra::Merged, prelude::*};

type Value0 = Tracked<0>;
type Error1 = Tracked<1>;
type Error2 = Tracked<2>;
type Full = ValueOrError<Value0, Errors![Error1, Error2]>;
type WithoutFirst = ValueOrError<Value0, Errors![Error2]>;

#[test]
fn test_discard_errors_cases() {
    // Holding a discarded error: the result is empty and the error dropped.
    let mut source = Full::from_error(Error1::new(1));
    let result: WithoutFirst = source.discard_errors::<Errors![Error1], _>();
    assert!(result.is_empty());
    assert!(source.is_empty());
    assert_eq!(take_log(), [create(1, 1), drop(1, 1)]);

    // Holding a retained error: moved to its new slot.
    let mut source = Full::from_error(Error2::new(2));
    let result: WithoutFirst = source.discard_errors::<Errors![Error1], _>();
    assert!(result.has_error::<Error2, _>());
    assert_eq!(result.error::<Error2, _>().id, 2);
    assert_eq!(result.error_index(), Some(0));
    assert!(source.is_empty());

    // Holding the value: moved.
    let mut source = Full::from(Value0::new(3));
    let result: ValueOrError<Value0, Errors![]> =
        source.discard_errors::<Errors![Error2, Error1], _>();
    assert!(result.has_value());
    assert_eq!(result.value().id, 3);
    assert!(source.is_empty());

    // Empty.
    let mut source = Full::new();
    assert!(source.discard_errors::<Errors![Error2], _>().is_empty());
}

#[test]
fn test_discard_value() {
    let void: VoidOrError<Errors![char, bool]> =
        ValueOrError::<String, Errors![char, bool]>::from_error(false).discard_value();
    assert_eq!(void.state(), State::Error(1));

    let empty = ValueOrError::<String, Errors![char]>::new().discard_value();
    assert!(empty.is_empty());
}

#[test]
fn test_union_of_two_containers() {
    type First = ValueOrError<char, Errors![i32, i16]>;
    type Second = VoidOrError<Errors![i64, i32]>;

    assert_type_eq_all!(Union![f32; First, Second], ValueOrError<f32, Errors![i32, i16, i64]>);
    assert_type_eq_all!(Union![f32; Second, First], ValueOrError<f32, Errors![i64, i32, i16]>);
    assert_type_eq_all!(Merged<Errors![First, First]>, Errors![i32, i16]);
    assert_type_eq_all!(Union![u8;], ValueOrError<u8, ()>);

    let merged = <Union![f32; First, Second]>::from_error(3_i64);
    assert_eq!(merged.state(), State::Error(2));
}

#[derive(Debug, PartialEq)]
struct Overflow;

#[derive(Debug, PartialEq)]
struct Underflow(i64);

identify! {
    Overflow => [4 0 0],
    Underflow => [4 0 1],
}

#[test]
fn test_union_with_registered_types() {
    type Add = ValueOrError<i64, Errors![Overflow]>;
    type Sub = ValueOrError<i64, Errors![Underflow, Overflow]>;

    assert_type_eq_all!(
        Union![i64; Add, Sub, &'static str],
        ValueOrError<i64, Errors![Overflow, Underflow, &'static str]>
    );
    assert_type_eq_all!(
        voe::VoidUnion<Errors![Underflow, Sub, bool]>,
        VoidOrError<Errors![Underflow, Overflow, bool]>
    );

    let mut result = <Union![i64; Add, Sub]>::new();
    result.assign(Sub::from_error(Underflow(-1)));
    assert_eq!(result.error::<Underflow, _>(), &Underflow(-1));
}

#[derive(Debug)]
struct Closed;

#[derive(Debug)]
struct Reset;

identify! {
    Closed => [4 1 7],
    Reset => [4 1 7],
}

#[test]
fn test_union_merges_types_sharing_a_key() {
    assert_type_eq_all!(Union![u8; Closed, Reset], ValueOrError<u8, Errors![Closed]>);
    assert_type_eq_all!(Union![u8; Reset, Closed], ValueOrError<u8, Errors![Reset]>);
}
