//! Unit tests for domain error types

use sift_domain::Error;

#[test]
fn test_upstream_error() {
    let error = Error::upstream("connection refused");
    match &error {
        Error::Upstream { message, source } => {
            assert_eq!(message, "connection refused");
            assert!(source.is_none());
        }
        _ => panic!("Expected Upstream error"),
    }
    assert!(error.is_upstream());
}

#[test]
fn test_timeout_is_upstream() {
    let error = Error::timeout(1500);
    assert!(error.is_upstream());
    assert_eq!(error.to_string(), "Search engine timed out after 1500ms");
}

#[test]
fn test_invalid_argument_is_not_upstream() {
    let error = Error::invalid_argument("bad page");
    assert!(!error.is_upstream());
    match error {
        Error::InvalidArgument { message } => assert_eq!(message, "bad page"),
        _ => panic!("Expected InvalidArgument error"),
    }
}

#[test]
fn test_config_error_display() {
    let error = Error::config("port cannot be 0");
    assert_eq!(error.to_string(), "Configuration error: port cannot be 0");
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error: Error = json_err.into();
    assert!(matches!(error, Error::Json { .. }));
}
