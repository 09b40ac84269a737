//! CLI command implementations for hdbmatch.
//!
//! Available commands:
//! - **recommend**: filter, score and shortlist a catalog
//! - **options**: list the categorical filter choices in a catalog
//! - **summary**: grouped counts and mean prices
//! - **affordability**: price-to-income ratios
//! - **init**: write a default `.hdbmatch.toml`

pub mod affordability;
pub mod init;
pub mod options;
pub mod recommend;
pub mod summary;

pub use affordability::{handle_affordability, AffordabilityConfig};
pub use init::{init_config, init_config_in};
pub use options::{handle_options, OptionsConfig};
pub use recommend::{handle_recommend, RecommendConfig};
pub use summary::{handle_summary, SummaryConfig};

use crate::catalog::{load_catalog, LoadedCatalog};
use crate::config::HdbmatchConfig;
use crate::errors::Error;
use crate::io::{self, OutputFormat, OutputWriter};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// `--catalog` wins over `[catalog] path`; having neither is a configuration error.
pub fn resolve_catalog_path(
    cli_path: Option<PathBuf>,
    config: &HdbmatchConfig,
) -> crate::errors::Result<PathBuf> {
    cli_path
        .or_else(|| config.catalog.path.clone())
        .ok_or_else(|| {
            Error::config("No catalog given. Pass --catalog or set [catalog] path in .hdbmatch.toml")
        })
}

pub(crate) fn load_catalog_reporting(path: &Path) -> Result<LoadedCatalog> {
    let loaded = load_catalog(path)
        .with_context(|| format!("Failed to load catalog {}", path.display()))?;
    if loaded.report.rows_skipped() > 0 {
        eprintln!(
            "Warning: skipped {} malformed row(s) in {}",
            loaded.report.rows_skipped(),
            path.display()
        );
    }
    Ok(loaded)
}

/// Writer for the chosen format and destination. Colors are disabled for files.
pub(crate) fn open_writer(
    format: OutputFormat,
    output: Option<&Path>,
    show_breakdown: bool,
) -> Result<Box<dyn OutputWriter>> {
    if output.is_some() {
        colored::control::set_override(false);
    }
    let destination = io::open_destination(output)?;
    Ok(io::create_writer(format, destination, show_breakdown))
}
