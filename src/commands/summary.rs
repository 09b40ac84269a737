use super::{load_catalog_reporting, open_writer, resolve_catalog_path};
use crate::analytics::{summarize_catalog, GroupBy};
use crate::config::load_config;
use crate::io::{OutputFormat, SummaryOutput};
use anyhow::Result;
use std::path::PathBuf;

pub struct SummaryConfig {
    pub catalog: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub group_by: GroupBy,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

pub fn handle_summary(config: SummaryConfig) -> Result<()> {
    let loaded = load_config(config.config.as_deref())?;
    let catalog_path = resolve_catalog_path(config.catalog, &loaded.config)?;
    let catalog = load_catalog_reporting(&catalog_path)?;

    let groups = summarize_catalog(&catalog.records, config.group_by);
    tracing::debug!(groups = groups.len(), by = %config.group_by, "Summarized catalog");

    let format = config
        .format
        .unwrap_or(loaded.config.output.default_format);
    let mut writer = open_writer(format, config.output.as_deref(), false)?;
    writer.write_summary(&SummaryOutput {
        group_by: config.group_by,
        groups: &groups,
    })?;
    writer.flush()?;
    Ok(())
}
