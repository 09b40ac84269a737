use super::output::{describe_filter, format_money, OutputWriter, RecommendationOutput, SummaryOutput};
use crate::analytics::{FilterOptions, RatioEntry};
use crate::core::ScoredRecord;
use colored::*;
use std::io::Write;

/// Human-oriented, colored output.
pub struct TerminalWriter<W: Write> {
    writer: W,
    show_breakdown: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            show_breakdown: false,
        }
    }

    /// Also print each record's per-amenity sub-scores.
    pub fn with_breakdown(mut self, show_breakdown: bool) -> Self {
        self.show_breakdown = show_breakdown;
        self
    }

    fn write_record(&mut self, rank: usize, item: &ScoredRecord) -> anyhow::Result<()> {
        let r = &item.record;
        writeln!(
            self.writer,
            "{}. {} ({}, {})",
            rank,
            r.address.bold(),
            r.town,
            r.region
        )?;
        writeln!(
            self.writer,
            "   {} | {:.0} sqm | {} years left",
            r.flat_type, r.floor_area_sqm, r.remaining_lease
        )?;
        writeln!(
            self.writer,
            "   {} | {}/sqm | score {}",
            format_money(r.resale_price).as_str().green(),
            format_money(item.price_per_sqm),
            format!("{:.3}", item.score).as_str().cyan()
        )?;
        if self.show_breakdown {
            let parts: Vec<String> = item
                .breakdown
                .iter()
                .map(|(dimension, value)| format!("{} {:.2}", dimension.key(), value))
                .collect();
            writeln!(self.writer, "   {}", parts.join(", ").as_str().dimmed())?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_recommendations(&mut self, output: &RecommendationOutput) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "HDB Recommendations".bold().blue())?;
        writeln!(self.writer, "{}", "=".repeat(40))?;
        writeln!(self.writer, "Filter: {}", describe_filter(output.filter))?;
        writeln!(self.writer, "Preferences: {}", output.preferences)?;
        writeln!(
            self.writer,
            "Candidates considered: {}",
            output.candidates_considered
        )?;
        writeln!(self.writer)?;

        if output.shortlist.is_empty() {
            writeln!(
                self.writer,
                "{}",
                "No houses found matching the filter.".yellow()
            )?;
            return Ok(());
        }

        for (i, item) in output.shortlist.iter().enumerate() {
            self.write_record(i + 1, item)?;
        }
        Ok(())
    }

    fn write_options(&mut self, options: &FilterOptions) -> anyhow::Result<()> {
        for (title, values) in [
            ("Regions", &options.regions),
            ("Flat types", &options.flat_types),
            ("Towns", &options.towns),
        ] {
            writeln!(self.writer, "{}", title.bold())?;
            for value in values {
                writeln!(self.writer, "  {value}")?;
            }
        }
        Ok(())
    }

    fn write_summary(&mut self, summary: &SummaryOutput) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}",
            format!("Catalog summary by {}", summary.group_by)
                .as_str()
                .bold()
                .blue()
        )?;
        for group in summary.groups {
            let per_sqm = group
                .mean_price_per_sqm
                .map(format_money)
                .unwrap_or_else(|| "n/a".to_string());
            writeln!(
                self.writer,
                "  {:<20} {:>6} listings  mean {:>12}  {:>8}/sqm",
                group.group,
                group.count,
                format_money(group.mean_resale_price),
                per_sqm
            )?;
        }
        Ok(())
    }

    fn write_affordability(&mut self, ratios: &[RatioEntry]) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Price-to-income ratios".bold().blue())?;
        if ratios.is_empty() {
            writeln!(self.writer, "{}", "No matching income data.".yellow())?;
        }
        for entry in ratios {
            writeln!(
                self.writer,
                "  {}  {:<18} {:>8.2}",
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
