//! Unit tests for error handling.
//!
//! This module contains tests for error types and error classification.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter {
            character: "@".to_string(),
        },
        Position(10, Rc::new("test.rhl".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.rhl".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "identifier".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_lexical_error_kind() {
    let error = Error::new(
        ErrorImpl::UnterminatedString,
        Position(0, Rc::new("test.rhl".to_string())),
    );

    assert_eq!(error.get_kind(), ErrorKind::Lexical);
    assert_eq!(error.get_error_name(), "UnterminatedString");
}

#[test]
fn test_syntax_error_kind() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: ";".to_string(),
            received: "}".to_string(),
        },
        Position(0, Rc::new("test.rhl".to_string())),
    );

    assert_eq!(error.get_kind(), ErrorKind::Syntax);
    assert_eq!(error.get_error_name(), "ExpectedToken");
}

#[test]
fn test_invalid_assignment_target_error() {
    let error = Error::new(
        ErrorImpl::InvalidAssignmentTarget {
            token: "=".to_string(),
        },
        Position(0, Rc::new("test.rhl".to_string())),
    );

    assert_eq!(error.get_error_name(), "InvalidAssignmentTarget");
    assert_eq!(error.get_kind(), ErrorKind::Syntax);
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        Position(0, Rc::new("test.rhl".to_string())),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter {
            character: "@".to_string(),
        },
        Position(0, Rc::new("test.rhl".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        Position(0, Rc::new("test.rhl".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
