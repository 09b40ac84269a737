use super::open_writer;
use crate::analytics::{
    load_income_observations, load_price_observations, mean_price_by_year_and_type,
    price_to_income_ratios,
};
use crate::config::load_config;
use crate::io::OutputFormat;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct AffordabilityConfig {
    pub prices: PathBuf,
    pub income: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

pub fn handle_affordability(config: AffordabilityConfig) -> Result<()> {
    let prices = load_price_observations(&config.prices)
        .with_context(|| format!("Failed to load prices from {}", config.prices.display()))?;
    let incomes = load_income_observations(&config.income)
        .with_context(|| format!("Failed to load incomes from {}", config.income.display()))?;

    let means = mean_price_by_year_and_type(&prices);
    let ratios = price_to_income_ratios(&means, &incomes);
    if ratios.len() < means.len() {
        tracing::info!(
            dropped = means.len() - ratios.len(),
            "Groups without a usable income were left out"
        );
    }

    let format = match config.format {
        Some(format) => format,
        None => load_config(None)?.config.output.default_format,
    };
    let mut writer = open_writer(format, config.output.as_deref(), false)?;
    writer.write_affordability(&ratios)?;
    writer.flush()?;
    Ok(())
}
