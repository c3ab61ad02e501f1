//! Tests for core error types

use yumlzoo::core::ZooError;

#[test]
fn test_model_not_found() {
    let error = ZooError::model_not_found("RelationalDBSchema");
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("Model not found"));
    assert!(error_msg.contains("RelationalDBSchema"));
}

#[test]
fn test_empty_collection() {
    let error_msg = format!("{}", ZooError::EmptyCollection);
    assert!(error_msg.contains("empty collection"));
}

#[test]
fn test_invalid_config() {
    let error = ZooError::invalid_config("bad value");
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("Invalid configuration"));
    assert!(error_msg.contains("bad value"));
}

#[test]
fn test_io_error() {
    use std::io;
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
    let error: ZooError = io_err.into();
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("IO error"));
    assert!(error_msg.contains("Access denied"));
}
