//! Integration tests for database connection failures
//!
//! These run without a server: they target a local port nothing listens on.

use rust_modelgen::catalog::MySqlCatalog;
use rust_modelgen::{
    generate_from_database, ConnectionTarget, FailurePolicy, GenerateOptions, ModelGenError,
};

use crate::common::TestContext;

/// Port 1 (tcpmux) is reserved and not served on test machines
const REFUSED_DSN: &str = "app:secret@tcp(127.0.0.1:1)/shop";

#[test]
fn test_connect_refused_is_connectivity_error() {
    let target = ConnectionTarget::parse(REFUSED_DSN).unwrap();

    match MySqlCatalog::connect(&target) {
        Err(ModelGenError::Connectivity { target, .. }) => {
            assert_eq!(target, "app@127.0.0.1:1/shop");
        }
        Err(other) => panic!("expected Connectivity error, got {:?}", other),
        Ok(_) => panic!("expected connection to 127.0.0.1:1 to fail"),
    }
}

#[test]
fn test_generate_from_unreachable_database_emits_nothing() {
    let ctx = TestContext::new();
    let options = ctx.options(FailurePolicy::ContinueOnError);

    let err = generate_from_database(REFUSED_DSN, &options).unwrap_err();

    assert!(matches!(err, ModelGenError::Connectivity { .. }), "{:?}", err);
    assert!(!err.to_string().contains("secret"), "{}", err);
    assert!(ctx.written_files().is_empty());
}

#[test]
fn test_generate_with_invalid_connection_string() {
    let err = generate_from_database("not a dsn", &GenerateOptions::default()).unwrap_err();
    assert!(
        matches!(err, ModelGenError::InvalidConnectionString { .. }),
        "{:?}",
        err
    );
}
