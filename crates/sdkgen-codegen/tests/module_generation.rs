//! Module file assembly for a realistic route set.

use sdkgen_codegen::{GeneratedFile, SdkGenerator};
use sdkgen_core::{Error, GeneratorConfig, HttpMethod, Route, parse_routes};

const FIXTURE: &str = include_str!("fixtures/comments.json");

fn generate_fixture() -> sdkgen_codegen::GeneratedCode {
    let routes = parse_routes(FIXTURE).expect("fixture parses");
    SdkGenerator::new()
        .expect("generator")
        .generate(&routes)
        .expect("generation succeeds")
}

#[test]
fn test_module_tree_layout() {
    let code = generate_fixture();
    let paths: Vec<_> = code.files().map(GeneratedFile::path).collect();

    assert_eq!(
        paths,
        vec![
            "functional/index.ts",
            "functional/sellers/index.ts",
            "functional/sellers/sales/comments/index.ts",
            "functional/sellers/sales/index.ts",
        ]
    );
}

#[test]
fn test_leaf_module_header_and_footer() {
    let code = generate_fixture();
    let file = code
        .find("functional/sellers/sales/comments/index.ts")
        .expect("comments module");
    let content = file.content();

    assert!(content.starts_with(concat!(
        "/**\n",
        " * @packageDocumentation\n",
        " * @module api.functional.sellers.sales.comments\n",
        " */\n",
        "//================================================================\n",
        "import { AesPkcs5 } from \"./../../../../__internal/AesPkcs5\";\n",
        "import { Fetcher } from \"./../../../../__internal/Fetcher\";\n",
        "import { Primitive } from \"./../../../../Primitive\";\n",
        "import type { IConnection } from \"./../../../../IConnection\";\n",
        "\n",
        "/**\n",
    )));
    assert!(content.ends_with(concat!(
        "}\n",
        "\n",
        "//---------------------------------------------------------\n",
        "// TO PREVENT THE UNUSED VARIABLE ERROR\n",
        "//---------------------------------------------------------\n",
        "AesPkcs5;\n",
        "Fetcher;\n",
        "Primitive;\n",
    )));
}

#[test]
fn test_leaf_module_keeps_route_order() {
    let code = generate_fixture();
    let content = code
        .find("functional/sellers/sales/comments/index.ts")
        .expect("comments module")
        .content();

    let index = content.find("export function index").expect("index");
    let store = content.find("export function store").expect("store");
    let remove = content.find("export function remove").expect("remove");
    assert!(index < store && store < remove);
    assert!(content.contains("\n}\n\n/**\n * @sdkgen Generated by sdkgen\n * @controller SellerSaleCommentsController.store()"));
}

#[test]
fn test_intermediate_modules_reexport_children() {
    let code = generate_fixture();

    let root = code.find("functional/index.ts").expect("root").content();
    assert!(root.contains(" * @module api.functional\n"));
    assert!(root.contains("\n\nexport * as sellers from \"./sellers\";\n\n"));
    assert!(!root.contains("export function"));

    let sales = code.find("functional/sellers/sales/index.ts").expect("sales").content();
    assert!(sales.contains("export * as comments from \"./comments\";"));
    assert!(sales.contains("from \"./../../../__internal/Fetcher\""));
}

#[test]
fn test_module_generation_is_deterministic() {
    assert_eq!(generate_fixture(), generate_fixture());
}

#[test]
fn test_reexports_precede_routes() {
    let routes = vec![
        Route::builder("index", HttpMethod::Get, "/sellers").build(),
        Route::builder("index", HttpMethod::Get, "/sellers/sales").build(),
    ];
    let code = SdkGenerator::new().unwrap().generate(&routes).unwrap();
    let sellers = code.find("functional/sellers/index.ts").unwrap().content();

    let export = sellers.find("export * as sales").unwrap();
    let function = sellers.find("export function index").unwrap();
    assert!(export < function);
}

#[test]
fn test_custom_configuration_flows_into_files() {
    let config = GeneratorConfig {
        module_prefix: "sdk".to_string(),
        functional_dir: "api".to_string(),
        encryptor: "Cipher".to_string(),
        ..GeneratorConfig::default()
    };
    let routes = vec![Route::builder("at", HttpMethod::Get, "/sales/:id").build()];
    let code = SdkGenerator::with_config(config).unwrap().generate(&routes).unwrap();

    let sales = code.find("api/sales/index.ts").expect("custom directory").content();
    assert!(sales.contains(" * @module sdk.sales\n"));
    assert!(sales.contains("import { Cipher } from \"./../../__internal/Cipher\";"));
    assert!(sales.contains("\nCipher;\n"));
}

#[test]
fn test_duplicate_route_in_module() {
    let routes = vec![
        Route::builder("at", HttpMethod::Get, "/sales/:id").build(),
        Route::builder("at", HttpMethod::Delete, "/sales/:id").build(),
    ];
    let err = SdkGenerator::new().unwrap().generate(&routes).unwrap_err();
    assert!(matches!(err, Error::DuplicateRoute { .. }));
}

#[test]
fn test_empty_route_set() {
    let code = SdkGenerator::new().unwrap().generate(&[]).unwrap();
    assert_eq!(code.file_count(), 0);
}

#[test]
fn test_parent_directory_segment_rejected() {
    let routes = vec![
        Route::builder("index", HttpMethod::Get, "/sales").build(),
        Route::builder("steal", HttpMethod::Get, "/../../../tmp/pwned").build(),
    ];
    let err = SdkGenerator::new().unwrap().generate(&routes).unwrap_err();

    assert!(matches!(err, Error::InvalidRoute { ref route, .. } if route == "steal"));
    assert!(err.to_string().contains("/../../../tmp/pwned"));
}

#[test]
fn test_quoted_segment_rejected() {
    for path in ["/a\"b", "/sales/it's", "/a\\b/:id"] {
        let routes = vec![Route::builder("index", HttpMethod::Get, path).build()];
        let err = SdkGenerator::new().unwrap().generate(&routes).unwrap_err();
        assert!(err.is_contract_violation(), "{path:?} accepted");
    }
}

#[test]
fn test_dotted_segment_reexport_is_string_literal() {
    let routes = vec![Route::builder("index", HttpMethod::Get, "/v1.0/files").build()];
    let code = SdkGenerator::new().unwrap().generate(&routes).unwrap();

    let root = code.find("functional/index.ts").expect("root").content();
    assert!(root.contains("export * as v10 from \"./v1.0\";"), "{root}");
    assert!(code.find("functional/v1.0/files/index.ts").is_some());
}
