use super::{load_catalog_reporting, open_writer, resolve_catalog_path};
use crate::config::{
    load_config, FilterOverrides, HdbmatchConfig, PreferenceOverrides, ShortlistOverrides,
};
use crate::io::{OutputFormat, RecommendationOutput};
use crate::recommend::recommend_with_report;
use anyhow::Result;
use std::path::PathBuf;

pub struct RecommendConfig {
    pub catalog: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub filter: FilterOverrides,
    pub preferences: PreferenceOverrides,
    pub shortlist: ShortlistOverrides,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub verbosity: u8,
}

/// Layer command-line values over the file configuration and validate the result.
pub fn resolve_settings(
    base: &HdbmatchConfig,
    config: &RecommendConfig,
) -> crate::errors::Result<HdbmatchConfig> {
    let mut merged = base.clone();
    merged.filter = config.filter.apply(&base.filter);
    merged.preferences = config.preferences.apply(&base.preferences);
    merged.shortlist = config.shortlist.apply(&base.shortlist);
    merged.validate()?;
    Ok(merged)
}

pub fn handle_recommend(config: RecommendConfig) -> Result<()> {
    let loaded = load_config(config.config.as_deref())?;
    if let Some(source) = &loaded.source {
        tracing::info!("Using configuration from {}", source.display());
    }

    let settings = resolve_settings(&loaded.config, &config)?;
    let catalog_path = resolve_catalog_path(config.catalog.clone(), &settings)?;
    let catalog = load_catalog_reporting(&catalog_path)?;

    let options = settings.shortlist.to_options();
    tracing::debug!(
        filter = ?settings.filter,
        preferences = %settings.preferences,
        "Running recommendation"
    );
    let report = recommend_with_report(
        &catalog.records,
        &settings.filter,
        &settings.preferences,
        &options,
    );
    if report.is_empty() {
        tracing::info!(
            rejected = report.filter_statistics.total_rejected(),
            "No records passed the filter"
        );
    }

    let output = RecommendationOutput::new(
        &report,
        &settings.filter,
        &settings.preferences,
        options.calibration.version,
    );
    let format = config.format.unwrap_or(settings.output.default_format);
    let mut writer = open_writer(format, config.output.as_deref(), config.verbosity > 0)?;
    writer.write_recommendations(&output)?;
    writer.flush()?;
    Ok(())
}
