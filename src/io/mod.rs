pub mod output;
pub mod terminal;

pub use output::{
    describe_filter, format_amount, format_money, JsonWriter, MarkdownWriter, OutputFormat,
    OutputWriter, RecommendationOutput, ReportMetadata, SummaryOutput,
};
pub use terminal::TerminalWriter;

use crate::errors::{Error, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Stdout, or a freshly created file when `path` is given.
pub fn open_destination(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| Error::io(path, e))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

pub fn create_writer<'a>(
    format: OutputFormat,
    destination: Box<dyn Write + 'a>,
    show_breakdown: bool,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(destination)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(destination)),
        OutputFormat::Terminal => {
            Box::new(TerminalWriter::new(destination).with_breakdown(show_breakdown))
        }
    }
}
