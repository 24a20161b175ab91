//! CLI execution context.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use vitrine_commerce::catalog::Catalog;
use vitrine_commerce::config::StoreConfig;

use crate::config;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Store configuration.
    pub config: StoreConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Product catalog.
    pub catalog: Catalog,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load config and catalog for a command run.
    ///
    /// Without an explicit config path, the first of
    /// [`config::CONFIG_FILE_NAMES`] present in the working directory is
    /// used, else the defaults.
    pub fn load(config_path: Option<&str>, catalog_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_path = match config_path {
            Some(path) => Some(resolve(&cwd, path)),
            None => config::find_config_file(&cwd),
        };
        let config = match &config_path {
            Some(path) => {
                output.debug(&format!("Using config: {}", path.display()));
                config::load(path)?
            }
            None => StoreConfig::default(),
        };

        let catalog = match catalog_path {
            Some(path) => {
                let path = resolve(&cwd, path);
                output.debug(&format!("Using catalog: {}", path.display()));
                load_catalog(&path)?
            }
            None => Catalog::builtin(),
        };

        Ok(Self {
            config,
            config_path,
            catalog,
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }
}

/// Read and validate a JSON catalog file.
pub fn load_catalog(path: &std::path::Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    Catalog::from_json(&content)
        .with_context(|| format!("Failed to load catalog: {}", path.display()))
}

fn resolve(cwd: &std::path::Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
