use super::{load_catalog_reporting, open_writer, resolve_catalog_path};
use crate::analytics::FilterOptions;
use crate::config::load_config;
use crate::io::OutputFormat;
use anyhow::Result;
use std::path::PathBuf;

pub struct OptionsConfig {
    pub catalog: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

pub fn handle_options(config: OptionsConfig) -> Result<()> {
    let loaded = load_config(config.config.as_deref())?;
    let catalog_path = resolve_catalog_path(config.catalog, &loaded.config)?;
    let catalog = load_catalog_reporting(&catalog_path)?;

    let options = FilterOptions::from_catalog(&catalog.records);
    let format = config
        .format
        .unwrap_or(loaded.config.output.default_format);
    let mut writer = open_writer(format, config.output.as_deref(), false)?;
    writer.write_options(&options)?;
    writer.flush()?;
    Ok(())
}
