//! Project configuration.
//!
//! Settings come from an `sdkgen.toml` file when one exists, otherwise from
//! command-line arguments alone. Arguments always take precedence.
//!
//! # Examples
//!
//! ```toml
//! input = ["routes"]
//! exclude = ["/internal"]
//! output = "src/api"
//!
//! [generator]
//! attribution = "@sdkgen Generated by sdkgen"
//! fetcher = "Fetcher"
//! ```

use anyhow::{Context, Result};
use sdkgen_core::{Error, GeneratorConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "sdkgen.toml";

/// Contents of an `sdkgen.toml` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SdkConfig {
    /// Route descriptor files or directories
    pub input: Vec<PathBuf>,
    /// Route-path prefixes to skip
    pub exclude: Vec<String>,
    /// Output directory
    pub output: Option<PathBuf>,
    /// Generated text settings
    pub generator: GeneratorConfig,
}

impl SdkConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the text is not valid configuration.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| Error::ConfigError {
            message: format!("failed to parse configuration: {e}"),
        })?;
        config.generator.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`.
    ///
    /// Relative `input` and `output` paths are resolved against the
    /// directory holding the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let mut config = Self::from_toml(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        for input in &mut config.input {
            *input = base.join(&*input);
        }
        if let Some(output) = &mut config.output {
            *output = base.join(&*output);
        }

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Options of the `generate` command as given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Route descriptor files or directories
    pub inputs: Vec<PathBuf>,
    /// Output directory
    pub out: Option<PathBuf>,
    /// Route-path prefixes to skip
    pub exclude: Vec<String>,
    /// Explicit configuration file
    pub config: Option<PathBuf>,
    /// Skip writing files
    pub dry_run: bool,
}

/// Settings a generation run actually uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Route descriptor files or directories
    pub inputs: Vec<PathBuf>,
    /// Output directory
    pub output: PathBuf,
    /// Route-path prefixes to skip
    pub exclude: Vec<String>,
    /// Generated text settings
    pub generator: GeneratorConfig,
}

impl ResolvedConfig {
    /// Merges command-line options with the configuration file, if any.
    ///
    /// An explicit `--config` must exist; otherwise `sdkgen.toml` in `cwd`
    /// is used when present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if no output directory or no input is
    /// given, and an error if the configuration file cannot be loaded.
    pub fn resolve(options: &GenerateOptions, cwd: &Path) -> Result<Self> {
        let file = match &options.config {
            Some(path) => Some(cwd.join(path)),
            None => Some(cwd.join(DEFAULT_CONFIG_FILE)).filter(|path| path.is_file()),
        };

        let inputs: Vec<PathBuf> = options.inputs.iter().map(|p| cwd.join(p)).collect();
        let out = options.out.as_ref().map(|p| cwd.join(p));

        let resolved = if let Some(file) = file {
            let config = SdkConfig::load(&file)?;
            let output = out.or(config.output).ok_or_else(|| Error::ConfigError {
                message: "output path is not specified".to_string(),
            })?;

            let mut exclude = config.exclude;
            exclude.extend(options.exclude.iter().cloned());

            Self {
                inputs: if inputs.is_empty() { config.input } else { inputs },
                output,
                exclude,
                generator: config.generator,
            }
        } else {
            let output = out.ok_or_else(|| Error::ConfigError {
                message:
                    "output directory is not specified. Add the --out <output_directory> option."
                        .to_string(),
            })?;

            Self {
                inputs,
                output,
                exclude: options.exclude.clone(),
                generator: GeneratorConfig::default(),
            }
        };

        if resolved.inputs.is_empty() {
            return Err(Error::ConfigError {
                message: "input is not specified. Pass route descriptor files or directories."
                    .to_string(),
            }
            .into());
        }

        Ok(resolved)
    }

    /// Returns `true` if `route_path` falls under an excluded prefix.
    ///
    /// Prefixes match whole segments: `/sales` excludes `/sales` and
    /// `/sales/:id` but not `/salesmen`.
    #[must_use]
    pub fn is_excluded(&self, route_path: &str) -> bool {
        self.exclude.iter().any(|prefix| {
            route_path
                .strip_prefix(prefix.trim_end_matches('/'))
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        })
    }
}
