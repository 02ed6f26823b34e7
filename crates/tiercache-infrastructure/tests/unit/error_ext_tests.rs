//! Error context tests

use tiercache_domain::error::Error;
use tiercache_infrastructure::ErrorContext;

fn failing_parse() -> Result<u32, std::num::ParseIntError> {
    "nope".parse::<u32>()
}

#[test]
fn test_config_context() {
    let err = failing_parse().config_context("Bad port").unwrap_err();

    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains("Bad port"));
}

#[test]
fn test_context_is_backend_error() {
    let err = failing_parse().context("Remote reply").unwrap_err();
    assert!(matches!(err, Error::Backend { .. }));
}

#[test]
fn test_with_context_is_lazy() {
    let ok: Result<u32, std::num::ParseIntError> = Ok(7);
    let value = ok
        .with_context(|| -> String { panic!("context built for a success") })
        .unwrap();
    assert_eq!(value, 7);
}

#[test]
fn test_io_context() {
    let err = std::fs::read("/definitely/not/here")
        .io_context("Reading fixture")
        .unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("Reading fixture"));
}
