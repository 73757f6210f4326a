//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::InvalidCharacter { character: '@' },
        Position(10, Rc::new("test.txt".to_string())),
    );

    assert_eq!(error.get_error_name(), "InvalidCharacter");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.txt".to_string()));
    let error = Error::new(ErrorImpl::ExpectedPipe, pos.clone());

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.txt");
}

#[test]
fn test_error_names() {
    let cases = [
        (
            ErrorImpl::MalformedChar {
                lexeme: "'ab".to_string(),
            },
            "MalformedChar",
        ),
        (
            ErrorImpl::MalformedFloat {
                lexeme: "1.".to_string(),
            },
            "MalformedFloat",
        ),
        (ErrorImpl::ExpectedAmpersand, "ExpectedAmpersand"),
        (ErrorImpl::ExpectedPipe, "ExpectedPipe"),
    ];

    for (error_impl, name) in cases {
        let error = Error::new(error_impl, Position::null());
        assert_eq!(error.get_error_name(), name);
    }
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::InvalidCharacter { character: '#' },
        Position(0, Rc::new("test.txt".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::MalformedFloat {
            lexeme: "3.".to_string(),
        },
        Position(0, Rc::new("test.txt".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`3.`")),
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

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::InvalidCharacter { character: '$' },
        Position(7, Rc::new("prog.txt".to_string())),
    );

    assert_eq!(error.to_string(), "invalid character: '$' at prog.txt:7");
}

#[test]
fn test_error_impl_display() {
    assert_eq!(
        ErrorImpl::MalformedChar {
            lexeme: "'ab".to_string()
        }
        .to_string(),
        "malformed character literal: \"'ab\""
    );
    assert_eq!(ErrorImpl::ExpectedAmpersand.to_string(), "expected '&' after '&'");
}
