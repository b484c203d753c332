//! Tests to verify that all public types are Send + Sync as required.
//!
//! Route descriptors are shared read-only across generation tasks.

use sdkgen_core::*;

const fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_route_types_are_send_sync() {
    assert_send_sync::<Route>();
    assert_send_sync::<Parameter>();
    assert_send_sync::<Output>();
    assert_send_sync::<Tag>();
    assert_send_sync::<DisplayPart>();
    assert_send_sync::<ModulePath>();
}

#[test]
fn test_config_types_are_send_sync() {
    assert_send_sync::<GeneratorConfig>();
}

#[test]
fn test_error_is_send_sync() {
    assert_send_sync::<Error>();
}
