//! Thread-safety guarantees of the generators.

use sdkgen_codegen::{FunctionGenerator, GeneratedCode, SdkGenerator, TemplateEngine};

const fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_generators_are_send_sync() {
    assert_send_sync::<FunctionGenerator>();
    assert_send_sync::<SdkGenerator<'static>>();
    assert_send_sync::<TemplateEngine<'static>>();
    assert_send_sync::<GeneratedCode>();
}
