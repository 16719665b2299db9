//! Error context tests

use sift_domain::error::Error;
use sift_infrastructure::error_ext::ErrorContext;

fn io_failure() -> std::result::Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))
}

#[test]
fn test_context_wraps_as_infrastructure() {
    let err = io_failure().context("Reading index").expect_err("error");
    assert!(matches!(err, Error::Infrastructure { .. }));
    assert!(err.to_string().contains("Reading index: missing"));
}

#[test]
fn test_config_context() {
    let err = io_failure().config_context("Loading").expect_err("error");
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("Loading: missing"));
}
