use crate::analytics::{FilterOptions, GroupBy, GroupSummary, RatioEntry};
use crate::core::{Dimension, ScoredRecord};
use crate::recommend::{Filter, Preferences, RecommendationReport};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub tool_version: String,
    pub generated_at: DateTime<Utc>,
    pub calibration_version: String,
}

impl ReportMetadata {
    pub fn new(calibration_version: &str) -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            calibration_version: calibration_version.to_string(),
        }
    }
}

/// Everything a writer needs to render one recommendation run.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationOutput<'a> {
    pub metadata: ReportMetadata,
    pub filter: &'a Filter,
    pub preferences: &'a Preferences,
    pub candidates_considered: usize,
    pub narrowed_by_score: bool,
    pub shortlist: &'a [ScoredRecord],
}

impl<'a> RecommendationOutput<'a> {
    pub fn new(
        report: &'a RecommendationReport,
        filter: &'a Filter,
        preferences: &'a Preferences,
        calibration_version: &str,
    ) -> Self {
        Self {
            metadata: ReportMetadata::new(calibration_version),
            filter,
            preferences,
            candidates_considered: report.candidates_considered,
            narrowed_by_score: report.narrowed_by_score,
            shortlist: &report.shortlist,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryOutput<'a> {
    pub group_by: GroupBy,
    pub groups: &'a [GroupSummary],
}

pub trait OutputWriter {
    fn write_recommendations(&mut self, output: &RecommendationOutput) -> anyhow::Result<()>;
    fn write_options(&mut self, options: &FilterOptions) -> anyhow::Result<()>;
    fn write_summary(&mut self, summary: &SummaryOutput) -> anyhow::Result<()>;
    fn write_affordability(&mut self, ratios: &[RatioEntry]) -> anyhow::Result<()>;
    fn flush(&mut self) -> anyhow::Result<()>;
}

/// `1234567.8` as `1,234,568`; non-finite values as `n/a`.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Dollar amount, or `n/a` when not finite.
pub fn format_money(value: f64) -> String {
    if value.is_finite() {
        format!("${}", format_amount(value))
    } else {
        "n/a".to_string()
    }
}

pub fn describe_filter(filter: &Filter) -> String {
    let max = if filter.max_price.is_finite() {
        format_money(filter.max_price)
    } else {
        "no limit".to_string()
    };
    format!(
        "region {}, flat type {}, price {} to {}, lease >= {} years",
        filter.region,
        filter.flat_type,
        format_money(filter.min_price),
        max,
        filter.min_remaining_lease
    )
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_value<T: Serialize + ?Sized>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_recommendations(&mut self, output: &RecommendationOutput) -> anyhow::Result<()> {
        self.write_value(output)
    }

    fn write_options(&mut self, options: &FilterOptions) -> anyhow::Result<()> {
        self.write_value(options)
    }

    fn write_summary(&mut self, summary: &SummaryOutput) -> anyhow::Result<()> {
        self.write_value(summary)
    }

    fn write_affordability(&mut self, ratios: &[RatioEntry]) -> anyhow::Result<()> {
        self.write_value(ratios)
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_list(&mut self, title: &str, values: &[String]) -> anyhow::Result<()> {
        writeln!(self.writer, "## {title}")?;
        writeln!(self.writer)?;
        for value in values {
            writeln!(self.writer, "- {value}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_recommendations(&mut self, output: &RecommendationOutput) -> anyhow::Result<()> {
        writeln!(self.writer, "# HDB Recommendations")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            output.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(
            self.writer,
            "Version: {} (calibration {})",
            output.metadata.tool_version, output.metadata.calibration_version
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "- Filter: {}", describe_filter(output.filter))?;
        writeln!(self.writer, "- Preferences: {}", output.preferences)?;
        writeln!(
            self.writer,
            "- Candidates considered: {}",
            output.candidates_considered
        )?;
        writeln!(self.writer)?;

        if output.shortlist.is_empty() {
            writeln!(self.writer, "No houses found matching the filter.")?;
            return Ok(());
        }

        writeln!(
            self.writer,
            "| # | Address | Town | Region | Flat type | Area (sqm) | Lease (yrs) | Price | Price/sqm | Score |"
        )?;
        writeln!(
            self.writer,
            "|---|---------|------|--------|-----------|------------|-------------|-------|-----------|-------|"
        )?;
        for (i, item) in output.shortlist.iter().enumerate() {
            let r = &item.record;
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {:.0} | {} | {} | {} | {:.3} |",
                i + 1,
                r.address,
                r.town,
                r.region,
                r.flat_type,
                r.floor_area_sqm,
                r.remaining_lease,
                format_money(r.resale_price),
                format_money(item.price_per_sqm),
                item.score
            )?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "## Amenity Profile")?;
        writeln!(self.writer)?;
        let header: Vec<&str> = Dimension::ALL.iter().map(|d| d.label()).collect();
        writeln!(self.writer, "| Address | {} |", header.join(" | "))?;
        writeln!(self.writer, "|---------|{}", "---|".repeat(header.len()))?;
        for item in output.shortlist {
            let cells: Vec<String> = item
                .breakdown
                .iter()
                .map(|(_, value)| format!("{value:.2}"))
                .collect();
            writeln!(
                self.writer,
                "| {} | {} |",
                item.record.address,
                cells.join(" | ")
            )?;
        }
        Ok(())
    }

    fn write_options(&mut self, options: &FilterOptions) -> anyhow::Result<()> {
        writeln!(self.writer, "# Filter Options")?;
        writeln!(self.writer)?;
        self.write_list("Regions", &options.regions)?;
        self.write_list("Flat Types", &options.flat_types)?;
        self.write_list("Towns", &options.towns)?;
        Ok(())
    }

    fn write_summary(&mut self, summary: &SummaryOutput) -> anyhow::Result<()> {
        writeln!(self.writer, "# Catalog Summary by {}", summary.group_by)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Group | Listings | Mean Price | Mean Price/sqm |"
        )?;
        writeln!(self.writer, "|-------|----------|------------|----------------|")?;
        for group in summary.groups {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                group.group,
                group.count,
                format_money(group.mean_resale_price),
                group
                    .mean_price_per_sqm
                    .map(format_money)
                    .unwrap_or_else(|| "n/a".to_string())
            )?;
        }
        Ok(())
    }

    fn write_affordability(&mut self, ratios: &[RatioEntry]) -> anyhow::Result<()> {
        writeln!(self.writer, "# Price-to-Income Ratios")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Year | Flat type | Ratio |")?;
        writeln!(self.writer, "|------|-----------|-------|")?;
        for entry in ratios {
            writeln!(
                self.writer,
                "| {} | {} | {:.2} |",
                entry.year, entry.flat_type, entry.ratio
            )?;
        }
        Ok(())
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
