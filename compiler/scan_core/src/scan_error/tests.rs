use super::{ScanError, ScanErrorCode};
use pretty_assertions::assert_eq;

#[test]
fn out_of_bounds_message_cites_target_and_length() {
    let err = ScanError::OutOfBounds { target: 7, len: 7 };
    assert_eq!(
        err.to_string(),
        "(E001) scanner peek at position 7 is out of bounds for input of length 7"
    );
}

#[test]
fn negative_target_renders_with_sign() {
    let err = ScanError::OutOfBounds { target: -1, len: 3 };
    assert!(err.to_string().contains("position -1"));
}

#[test]
fn message_is_prefixed_with_code() {
    let err = ScanError::OutOfBounds { target: 0, len: 0 };
    let prefix = format!("({})", err.code());
    assert!(err.to_string().starts_with(&prefix));
}

#[test]
fn code_display_matches_as_str() {
    assert_eq!(ScanErrorCode::E001.as_str(), "E001");
    assert_eq!(ScanErrorCode::E001.to_string(), "E001");
}

#[test]
fn usable_as_std_error() {
    fn source_of(err: &dyn std::error::Error) -> bool {
        err.source().is_some()
    }
    let err = ScanError::OutOfBounds { target: 9, len: 2 };
    assert!(!source_of(&err));
}
