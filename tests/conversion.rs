//! Converting construction and assignment between containers.
//!
//! ## Construction
//! - `test_int_char_scenario`: a value survives widening, then an error is
//!   assigned over it
//! - `test_convert_keeps_error_payload`: held errors keep type and payload
//! - `test_void_into_value_container`
//!
//! ## Assignment matrix
//! - `test_assign_matrix_moves`: empty source clears, otherwise the content
//!   is moved into its slot
//! - `test_assign_matrix_clones`: same type uses `clone_from`, other types
//!   drop and clone

mod common;

use common::{Tracked, clone, clone_from, create, drop, take_log};
use voe::prelude::*;

type Value0 = Tracked<0>;
type Error1 = Tracked<1>;
type Error2 = Tracked<2>;
type Narrow = ValueOrError<Value0, Errors![Error1]>;
type Wide = ValueOrError<Value0, Errors![Error2, Error1]>;

#[test]
fn test_int_char_scenario() {
    let small = ValueOrError::<i32, Errors![char]>::from(10);
    assert!(small.has_value());
    assert_eq!(*small.value(), 10);

    let mut wide: ValueOrError<i32, Errors![i16, char]> = small.convert();
    assert!(wide.has_value());
    assert_eq!(*wide.value(), 10);

    wide.assign(ValueOrError::<i32, Errors![char]>::from_error('a'));
    assert!(wide.has_any_error());
    assert!(wide.has_error::<char, _>());
    assert_eq!(*wide.error::<char, _>(), 'a');
    assert!(!wide.has_value());
}

#[test]
fn test_convert_keeps_error_payload() {
    let source = ValueOrError::<String, Errors![u8, &'static str]>::from_error("lost");
    let expected = *source.error::<&str, _>();
    let target: ValueOrError<String, Errors![char, &'static str, u8]> = source.convert();
    assert!(target.has_error::<&str, _>());
    assert_eq!(*target.error::<&str, _>(), expected);
    assert_eq!(target.error_index(), Some(1));

    let source = VoidOrError::<Errors![u8]>::from_error(4);
    let target: VoidOrError<Errors![bool, u8]> = source.convert();
    assert_eq!(target.into_error::<u8, _>(), 4);

    let narrow = Narrow::from_error(Error1::new(9));
    let wide: Wide = narrow.convert();
    assert_eq!(wide.state(), State::Error(1));
    core::mem::drop(wide);
    assert_eq!(take_log(), [create(1, 9), drop(1, 9)]);
}

#[test]
fn test_void_into_value_container() {
    let empty: ValueOrError<String, Errors![char]> = VoidOrError::<Errors![]>::new().convert();
    assert!(empty.is_empty());

    let error: ValueOrError<String, Errors![char]> = make_error('e').convert();
    assert_eq!(error.state(), State::Error(0));

    let built: ValueOrError<u8, Errors![String]> =
        make_error_with(|| String::from("lazy")).convert();
    assert_eq!(built.error::<String, _>(), "lazy");
}

#[test]
fn test_assign_matrix_moves() {
    let mut target = Wide::from(Value0::new(1));
    take_log();

    // Empty source: drop only.
    target.assign(Narrow::new());
    assert_eq!(take_log(), [drop(0, 1)]);
    assert!(target.is_empty());

    // Into an empty target: no drop.
    target.assign(Narrow::from(Value0::new(2)));
    assert_eq!(take_log(), [create(0, 2)]);

    // Same type: assigned over, the old value is dropped by the assignment.
    target.assign(Narrow::from(Value0::new(3)));
    assert_eq!(take_log(), [create(0, 3), drop(0, 2)]);
    assert_eq!(target.value().id, 3);

    // Other type: old content dropped, new one moved in.
    target.assign(Narrow::from_error(Error1::new(4)));
    assert_eq!(take_log(), [create(1, 4), drop(0, 3)]);
    assert_eq!(target.state(), State::Error(1));
    assert_eq!(target.error::<Error1, _>().id, 4);
}

#[test]
fn test_assign_matrix_clones() {
    let value = Narrow::from(Value0::new(1));
    let error = Narrow::from_error(Error1::new(2));
    let mut target = Wide::from_error(Error2::new(3));
    take_log();

    target.assign_cloned(&value);
    assert_eq!(take_log(), [drop(2, 3), clone(0, 1)]);

    let other = Narrow::from(Value0::new(4));
    take_log();
    target.assign_cloned(&other);
    assert_eq!(take_log(), [clone_from(0, 4)]);
    assert_eq!(target.value().id, 4);

    target.assign_cloned(&error);
    assert_eq!(take_log(), [drop(0, 4), clone(1, 2)]);

    target.assign_cloned(&Narrow::new());
    assert_eq!(take_log(), [drop(1, 2)]);

    let copy: Wide = error.convert_cloned();
    assert_eq!(copy.error::<Error1, _>().id, 2);
    assert_eq!(take_log(), [clone(1, 2)]);
    assert!(error.has_error::<Error1, _>());
}

#[test]
#[should_panic(expected = "would drop the held value of type `i32`")]
fn test_value_into_void_panics() {
    let _: VoidOrError<Errors![char]> = ValueOrError::<i32, Errors![char]>::from(1).convert();
}

#[test]
fn test_error_into_void_is_allowed() {
    let void: VoidOrError<Errors![char, bool]> =
        ValueOrError::<i32, Errors![bool]>::from_error(true).convert();
    assert!(void.has_error::<bool, _>());
}
