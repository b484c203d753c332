//! Integration tests for the generate workflow on a real directory tree.

use sdkgen_cli::GenerateOptions;
use sdkgen_cli::commands::generate::generate;
use sdkgen_core::Error;
use sdkgen_core::cli::ExitCode;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SALES: &str = r#"{"routes": [
    {
        "name": "index",
        "method": "GET",
        "path": "/sellers/:section/sales",
        "symbol": "SellerSalesController.index()",
        "parameters": [
            {"name": "section", "category": "path-segment", "field": "section", "type": "string"},
            {"name": "input", "category": "query", "type": "IPage.IRequest"}
        ],
        "output": "IPage<ISale>"
    },
    {
        "name": "store",
        "method": "POST",
        "path": "/sellers/:section/sales",
        "symbol": "SellerSalesController.store()",
        "parameters": [
            {"name": "section", "category": "path-segment", "field": "section", "type": "string"},
            {"name": "input", "category": "payload", "type": "ISale.IStore", "encrypted": true}
        ],
        "output": "ISale",
        "encrypted": true
    }
]}"#;

const INTERNAL: &str = r#"[
    {"name": "health", "method": "GET", "path": "/internal/health", "symbol": "HealthController.get()"}
]"#;

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let routes = dir.path().join("routes");
    fs::create_dir(&routes).unwrap();
    fs::write(routes.join("sales.json"), SALES).unwrap();
    fs::write(routes.join("internal.json"), INTERNAL).unwrap();
    dir
}

fn options(out: &str) -> GenerateOptions {
    GenerateOptions {
        inputs: vec![PathBuf::from("routes")],
        out: Some(PathBuf::from(out)),
        ..GenerateOptions::default()
    }
}

#[tokio::test]
async fn test_generate_writes_module_tree() {
    let dir = project();
    let result = generate(&options("api"), dir.path()).await.unwrap();

    assert_eq!(result.routes, 3);
    assert_eq!(result.excluded, 0);
    assert!(!result.dry_run);
    assert_eq!(
        result.files,
        vec![
            "functional/index.ts",
            "functional/internal/health/index.ts",
            "functional/internal/index.ts",
            "functional/sellers/index.ts",
            "functional/sellers/sales/index.ts",
        ]
    );

    let sales = fs::read_to_string(dir.path().join("api/functional/sellers/sales/index.ts")).unwrap();
    assert!(sales.contains(" * @module api.functional.sellers.sales\n"));
    assert!(sales.contains("export function index"));
    assert!(sales.contains("export function store"));
    assert!(sales.contains(
        "return `/sellers/${section}/sales?${new URLSearchParams(input as any).toString()}`;"
    ));

    let root = fs::read_to_string(dir.path().join("api/functional/index.ts")).unwrap();
    assert!(root.contains("export * as internal from \"./internal\";\nexport * as sellers from \"./sellers\";"));
}

#[tokio::test]
async fn test_generate_excludes_prefixes() {
    let dir = project();
    let mut opts = options("api");
    opts.exclude = vec!["/internal".to_string()];

    let result = generate(&opts, dir.path()).await.unwrap();
    assert_eq!(result.routes, 2);
    assert_eq!(result.excluded, 1);
    assert!(result.files.iter().all(|file| !file.contains("internal")));
    assert!(!dir.path().join("api/functional/internal").exists());
}

#[tokio::test]
async fn test_dry_run_writes_nothing() {
    let dir = project();
    let mut opts = options("api");
    opts.dry_run = true;

    let result = generate(&opts, dir.path()).await.unwrap();
    assert!(result.dry_run);
    assert_eq!(result.files.len(), 5);
    assert!(result.bytes > 0);
    assert!(!dir.path().join("api").exists());
}

#[tokio::test]
async fn test_generate_from_config_file() {
    let dir = project();
    fs::write(
        dir.path().join("sdkgen.toml"),
        "input = [\"routes/sales.json\"]\noutput = \"sdk\"\n\n[generator]\nfetcher = \"HttpFetcher\"\n",
    )
    .unwrap();

    let result = generate(&GenerateOptions::default(), dir.path()).await.unwrap();
    assert_eq!(result.routes, 2);

    let sales = fs::read_to_string(dir.path().join("sdk/functional/sellers/sales/index.ts")).unwrap();
    assert!(sales.contains("    return HttpFetcher.fetch\n"));
    assert!(sales.contains("import { HttpFetcher } from \"./../../../__internal/HttpFetcher\";"));
}

#[tokio::test]
async fn test_regeneration_is_byte_identical() {
    let dir = project();
    generate(&options("first"), dir.path()).await.unwrap();
    let result = generate(&options("second"), dir.path()).await.unwrap();

    for file in &result.files {
        let first = fs::read(dir.path().join("first").join(file)).unwrap();
        let second = fs::read(dir.path().join("second").join(file)).unwrap();
        assert_eq!(first, second, "{file} differs between runs");
    }
}

#[tokio::test]
async fn test_missing_output_maps_to_invalid_input() {
    let dir = project();
    let opts = GenerateOptions {
        inputs: vec![PathBuf::from("routes")],
        ..GenerateOptions::default()
    };

    let err = generate(&opts, dir.path()).await.unwrap_err();
    let library_error = err.downcast_ref::<Error>().expect("library error");
    assert_eq!(ExitCode::for_error(library_error), ExitCode::INVALID_INPUT);
}

#[tokio::test]
async fn test_malformed_route_maps_to_invalid_route() {
    let dir = project();
    fs::write(
        dir.path().join("routes").join("broken.json"),
        r#"[{"name": "at", "method": "GET", "path": "/sales/:id",
            "parameters": [{"name": "saleId", "category": "path-segment", "field": "saleId", "type": "number"}]}]"#,
    )
    .unwrap();

    let err = generate(&options("api"), dir.path()).await.unwrap_err();
    let library_error = err.downcast_ref::<Error>().expect("library error");
    assert!(matches!(library_error, Error::MissingPlaceholder { .. }));
    assert_eq!(ExitCode::for_error(library_error), ExitCode::INVALID_ROUTE);
    assert!(!dir.path().join("api").exists());
}

#[tokio::test]
async fn test_parent_segment_never_escapes_output() {
    let dir = project();
    fs::write(
        dir.path().join("routes").join("escape.json"),
        r#"[{"name": "steal", "method": "GET", "path": "/../../escaped"}]"#,
    )
    .unwrap();

    let err = generate(&options("api"), dir.path()).await.unwrap_err();
    let library_error = err.downcast_ref::<Error>().expect("library error");
    assert_eq!(ExitCode::for_error(library_error), ExitCode::INVALID_ROUTE);
    assert!(!dir.path().join("api").exists());
    assert!(!dir.path().join("escaped").exists());
}
