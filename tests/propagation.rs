//! Propagating errors out of functions with the control-flow macros.
//!
//! - `test_assign_or_return_binds_value`: the value flows on when no error
//!   is held
//! - `test_errors_propagate_into_union`: each stage's errors reach the
//!   merged return type
//! - `test_return_if_error_drops_value`
//! - `test_assign_to_place`

use core::error::Error;

use voe::prelude::*;

#[derive(Debug, PartialEq, thiserror::Error)]
#[error("file `{path}` not found")]
struct NotFound {
    path: &'static str,
}

#[derive(Debug, PartialEq, derive_more::Display, derive_more::Error)]
#[display("permission denied for uid {uid}")]
struct Denied {
    uid: u32,
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("unexpected byte {0:#04x}")]
    BadByte(u8),
}

identify! {
    NotFound => [5 0],
    Denied => [5 1],
    ParseError => [5 2],
}

type Opened = ValueOrError<Vec<u8>, Errors![NotFound, Denied]>;
type Parsed = ValueOrError<u32, Errors![ParseError]>;
type Checked = VoidOrError<Errors![Denied]>;

fn check(uid: u32) -> Checked {
    if uid == 0 {
        Checked::new()
    } else {
        make_error(Denied { uid }).convert()
    }
}

fn open(path: &'static str) -> Opened {
    match path {
        "answer" => b"42".to_vec().into(),
        "blank" => Vec::new().into(),
        "binary" => vec![0xff].into(),
        _ => make_error(NotFound { path }).convert(),
    }
}

fn parse(bytes: &[u8]) -> Parsed {
    if bytes.is_empty() {
        return make_error(ParseError::Empty).convert();
    }
    let mut number = 0;
    for &byte in bytes {
        if !byte.is_ascii_digit() {
            return make_error(ParseError::BadByte(byte)).convert();
        }
        number = number * 10 + u32::from(byte - b'0');
    }
    number.into()
}

fn load(uid: u32, path: &'static str) -> Union![u32; Checked, Opened, Parsed] {
    return_if_error!(check(uid));
    assign_or_return!(let bytes = open(path));
    assign_or_return!(let number = parse(&bytes));
    number.into()
}

struct Message;

impl<T: Error> Visitor<&T> for Message {
    type Output = String;
    fn visit(self, error: &T) -> String {
        error.to_string()
    }
}

impl Visitor<NoValue> for Message {
    type Output = String;
    fn visit(self, _: NoValue) -> String {
        String::from("no error")
    }
}

#[test]
fn test_assign_or_return_binds_value() {
    let loaded = load(0, "answer");
    assert!(loaded.has_value());
    assert_eq!(*loaded.value(), 42);
}

#[test]
fn test_errors_propagate_into_union() {
    let loaded = load(7, "answer");
    assert_eq!(loaded.error::<Denied, _>(), &Denied { uid: 7 });

    let loaded = load(0, "missing");
    assert_eq!(loaded.error::<NotFound, _>().path, "missing");

    let loaded = load(0, "blank");
    assert_eq!(loaded.error::<ParseError, _>(), &ParseError::Empty);

    let message = load(0, "binary").discard_value().visit(Message);
    assert_eq!(message, "unexpected byte 0xff");

    let message = load(3, "binary").discard_value().visit(Message);
    assert_eq!(message, "permission denied for uid 3");
}

#[test]
fn test_return_if_error_drops_value() {
    fn first(values: &[u32]) -> VoidOrError<Errors![ParseError]> {
        for value in values {
            return_if_error!(parse(value.to_string().as_bytes()));
        }
        VoidOrError::new()
    }

    assert!(first(&[1, 2, 3]).is_empty());
    assert_eq!(first(&[]).visit(Message), "no error");
}

#[test]
fn test_assign_to_place() {
    fn total(paths: &[&'static str]) -> Union![u32; Opened, Parsed] {
        let mut sum = 0;
        for &path in paths {
            let bytes;
            assign_or_return!(bytes, open(path));
            let number: u32;
            assign_or_return!(number, parse(&bytes));
            sum += number;
        }
        sum.into()
    }

    assert_eq!(total(&["answer", "answer"]).into_value(), 84);
    assert!(total(&["answer", "nope"]).has_error::<NotFound, _>());
}
