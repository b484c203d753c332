//! Generate command implementation.
//!
//! This command:
//! 1. Resolves settings from arguments and `sdkgen.toml`
//! 2. Loads route descriptors from JSON files and directories
//! 3. Drops routes under excluded path prefixes
//! 4. Renders one module file per path group, one blocking task per module
//! 5. Writes the files below the output directory (unless `--dry-run`)

use crate::config::{GenerateOptions, ResolvedConfig};
use crate::formatters::format_output;
use anyhow::{Context, Result};
use sdkgen_codegen::{GeneratedCode, SdkGenerator};
use sdkgen_core::cli::{ExitCode, OutputFormat};
use sdkgen_core::{Error, Route, parse_routes};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Result of a generation run.
#[derive(Debug, Serialize)]
pub struct GenerationResult {
    /// Directory the files were written to
    pub output_dir: String,
    /// Routes that were generated
    pub routes: usize,
    /// Routes skipped by an exclude prefix
    pub excluded: usize,
    /// Files produced, relative to the output directory
    pub files: Vec<String>,
    /// Combined size of the files in bytes
    pub bytes: usize,
    /// Whether writing was skipped
    pub dry_run: bool,
}

/// Runs the generate command and prints its summary.
///
/// # Errors
///
/// Returns an error if settings are incomplete, a descriptor cannot be read
/// or parsed, a route is malformed, or an output file cannot be written.
pub async fn run(options: GenerateOptions, output_format: OutputFormat) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("failed to determine working directory")?;
    let result = generate(&options, &cwd).await?;

    println!("{}", format_output(&result, output_format)?);
    Ok(ExitCode::SUCCESS)
}

/// Performs a generation run relative to `cwd`.
///
/// # Errors
///
/// See [`run`].
pub async fn generate(options: &GenerateOptions, cwd: &Path) -> Result<GenerationResult> {
    let config = ResolvedConfig::resolve(options, cwd)?;
    info!(
        "Generating SDK from {} input(s) into {}",
        config.inputs.len(),
        config.output.display()
    );

    let inputs = config.inputs.clone();
    let routes = tokio::task::spawn_blocking(move || load_routes(&inputs))
        .await
        .context("route loading task failed")??;

    let total = routes.len();
    let routes: Vec<Route> = routes
        .into_iter()
        .filter(|route| {
            let excluded = config.is_excluded(&route.path);
            if excluded {
                debug!("Excluding route {} ({})", route.name, route.path);
            }
            !excluded
        })
        .collect();
    let excluded = total - routes.len();

    if routes.is_empty() {
        warn!("No routes to generate");
    }

    let code = render_modules(&routes, config.generator.clone()).await?;

    if options.dry_run {
        info!("Dry run: {} files not written", code.file_count());
    } else {
        write_files(&code, &config.output).await?;
    }

    Ok(GenerationResult {
        output_dir: config.output.display().to_string(),
        routes: routes.len(),
        excluded,
        files: code.files().map(|file| file.path().to_string()).collect(),
        bytes: code.total_bytes(),
        dry_run: options.dry_run,
    })
}

/// Reads every route descriptor under `inputs`.
///
/// Directories are walked for `*.json` files in file-name order, following
/// symlinks, so the route order is stable across runs.
///
/// # Errors
///
/// Returns an error if an input is missing, a directory entry cannot be
/// read, a file is unreadable ([`Error::IoError`]), or a file is not a route
/// document.
pub fn load_routes(inputs: &[PathBuf]) -> Result<Vec<Route>> {
    let mut routes = Vec::new();

    for input in inputs {
        if !input.exists() {
            anyhow::bail!("input not found: {}", input.display());
        }

        let files = if input.is_dir() {
            json_files(input)?
        } else {
            vec![input.clone()]
        };

        for file in files {
            let text = std::fs::read_to_string(&file).map_err(|source| Error::IoError {
                path: file.clone(),
                source,
            })?;
            let parsed =
                parse_routes(&text).with_context(|| format!("failed to parse {}", file.display()))?;
            debug!("Loaded {} routes from {}", parsed.len(), file.display());
            routes.extend(parsed);
        }
    }

    Ok(routes)
}

/// Lists `*.json` files below `dir` in file-name order.
fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        let entry = entry.with_context(|| format!("failed to walk {}", dir.display()))?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Renders module files concurrently, one blocking task per module.
async fn render_modules(
    routes: &[Route],
    config: sdkgen_core::GeneratorConfig,
) -> Result<GeneratedCode> {
    let generator = Arc::new(SdkGenerator::with_config(config)?);
    let units = SdkGenerator::plan_modules(routes)?;

    let handles: Vec<_> = units
        .into_iter()
        .map(|unit| {
            let generator = Arc::clone(&generator);
            tokio::task::spawn_blocking(move || generator.render_module(&unit))
        })
        .collect();

    let mut code = GeneratedCode::new();
    for handle in handles {
        let file = handle.await.context("module generation task failed")??;
        code.add_file(file);
    }
    code.sort();

    info!(
        "Generated {} files ({} bytes) for {} routes",
        code.file_count(),
        code.total_bytes(),
        routes.len()
    );
    Ok(code)
}

/// Writes generated files below `output`, creating directories as needed.
async fn write_files(code: &GeneratedCode, output: &Path) -> Result<()> {
    for file in code.files() {
        let path = output.join(file.path());
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| Error::IoError {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
        tokio::fs::write(&path, file.content())
            .await
            .map_err(|source| Error::IoError {
                path: path.clone(),
                source,
            })?;
        debug!("Wrote {}", path.display());
    }

    info!("Wrote {} files to {}", code.file_count(), output.display());
    Ok(())
}
