//! Error context extension tests

use wiring_domain::error::Error;
use wiring_infrastructure::error_ext::ErrorContext;

fn io_failure() -> std::result::Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))
}

#[test]
fn test_context_maps_to_infrastructure_error() {
    let err = io_failure().context("Loading bindings").unwrap_err();

    match err {
        Error::Infrastructure { message, source } => {
            assert_eq!(message, "Loading bindings: missing");
            assert!(source.is_some());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_with_context_is_lazy() {
    let mut evaluated = false;
    let ok: std::result::Result<u8, std::io::Error> = Ok(1);

    let value = ok
        .with_context(|| {
            evaluated = true;
            "never"
        })
        .expect("ok passes through");

    assert_eq!(value, 1);
    assert!(!evaluated);
}

#[test]
fn test_io_context() {
    let err = io_failure().io_context("Reading file").unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("Reading file"));
}

#[test]
fn test_config_context() {
    let err = io_failure().config_context("Parsing config").unwrap_err();

    assert!(matches!(err, Error::Configuration { .. }));
    assert!(!err.is_resolution_error());
}
