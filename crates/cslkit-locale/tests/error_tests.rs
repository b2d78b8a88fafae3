//! Tests for locale error types.
//!
//! These tests verify that all error variants have correct Display
//! implementations.

use cslkit_locale::Error;

#[test]
fn test_invalid_locale_format_display() {
    let err = Error::InvalidLocaleFormat {
        tag: "Not a tag".to_string(),
    };
    let display = err.to_string();
    assert!(
        display.contains("not a valid locale tag: 'Not a tag'"),
        "Got: {}",
        display
    );
}

#[test]
fn test_not_implemented_display() {
    let err = Error::NotImplemented {
        operation: "ordinalize",
    };
    let display = err.to_string();
    assert!(
        display.contains("'ordinalize' is not implemented"),
        "Got: {}",
        display
    );
}
