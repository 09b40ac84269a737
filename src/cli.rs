use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{FilterOverrides, PreferenceOverrides, ShortlistOverrides};

#[derive(Parser, Debug)]
#[command(name = "hdbmatch")]
#[command(about = "HDB resale flat recommender", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    /// -v: Show score breakdowns and info logs
    /// -vv: Show debug logs
    /// -vvv: Show trace logs
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recommend flats matching filters, ranked by amenity preferences
    Recommend {
        /// Catalog file (.csv or .json); falls back to [catalog] path
        #[arg(long, env = "HDBMATCH_CATALOG")]
        catalog: Option<PathBuf>,

        /// Configuration file (skips .hdbmatch.toml discovery)
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        filter: FilterArgs,

        #[command(flatten)]
        preferences: PreferenceArgs,

        /// When to skip narrowing by score
        #[arg(long = "zero-score-policy", value_enum)]
        zero_score_policy: Option<ZeroScorePolicy>,

        /// Number of recommendations to return
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Score sequentially even for large catalogs
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the regions, flat types and towns present in a catalog
    Options {
        #[arg(long, env = "HDBMATCH_CATALOG")]
        catalog: Option<PathBuf>,

        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Summarize listing counts and mean prices per group
    Summary {
        #[arg(long, env = "HDBMATCH_CATALOG")]
        catalog: Option<PathBuf>,

        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Grouping key
        #[arg(long = "by", value_enum, default_value = "region")]
        by: GroupBy,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Price-to-income ratios per year and flat type
    Affordability {
        /// Resale transactions CSV (year, flat_type, resale_price)
        #[arg(long)]
        prices: PathBuf,

        /// Household income CSV (year, flat_type, average_household_income)
        #[arg(long)]
        income: PathBuf,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Hard filter flags; unset flags keep the configured value.
#[derive(Args, Debug, Default, Clone, PartialEq)]
pub struct FilterArgs {
    #[arg(long = "min-price")]
    pub min_price: Option<f64>,

    #[arg(long = "max-price")]
    pub max_price: Option<f64>,

    /// Minimum remaining lease in years
    #[arg(long = "min-lease")]
    pub min_lease: Option<u32>,

    /// Region name, or "All"
    #[arg(long)]
    pub region: Option<String>,

    /// Flat type such as "4 ROOM", or "All"
    #[arg(long = "flat-type")]
    pub flat_type: Option<String>,
}

impl From<FilterArgs> for FilterOverrides {
    fn from(args: FilterArgs) -> Self {
        Self {
            min_price: args.min_price,
            max_price: args.max_price,
            min_remaining_lease: args.min_lease,
            region: args.region,
            flat_type: args.flat_type,
        }
    }
}

/// Importance weights, 0 (not important) to 4 (extremely important).
#[derive(Args, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceArgs {
    /// Bus stops within 0.5 km
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=4))]
    pub bus: Option<u8>,

    /// Schools within 2 km
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=4))]
    pub school: Option<u8>,

    /// Malls within 2 km
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=4))]
    pub mall: Option<u8>,

    /// Supermarkets within 0.5 km
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=4))]
    pub supermarket: Option<u8>,

    /// Closeness to the CBD
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=4))]
    pub cbd: Option<u8>,

    /// Closeness to a hawker centre
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=4))]
    pub hawker: Option<u8>,

    /// Closeness to a park
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=4))]
    pub park: Option<u8>,

    /// Closeness to an MRT/LRT station
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=4))]
    pub mrt: Option<u8>,
}

impl From<PreferenceArgs> for PreferenceOverrides {
    fn from(args: PreferenceArgs) -> Self {
        Self {
            bus: args.bus,
            school: args.school,
            mall: args.mall,
            supermarket: args.supermarket,
            cbd: args.cbd,
            hawker: args.hawker,
            park: args.park,
            mrt: args.mrt,
        }
    }
}

/// Shortlist flags of the recommend command.
pub fn shortlist_overrides(
    top: Option<usize>,
    zero_score_policy: Option<ZeroScorePolicy>,
    no_parallel: bool,
) -> ShortlistOverrides {
    ShortlistOverrides {
        size: top,
        zero_score_policy: zero_score_policy.map(Into::into),
        parallel: no_parallel.then_some(false),
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum GroupBy {
    Region,
    Town,
    FlatType,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ZeroScorePolicy {
    AllTied,
    TopIsZero,
    Never,
}

impl From<OutputFormat> for crate::io::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::OutputFormat::Terminal,
        }
    }
}

impl From<GroupBy> for crate::analytics::GroupBy {
    fn from(g: GroupBy) -> Self {
        match g {
            GroupBy::Region => crate::analytics::GroupBy::Region,
            GroupBy::Town => crate::analytics::GroupBy::Town,
            GroupBy::FlatType => crate::analytics::GroupBy::FlatType,
        }
    }
}

impl From<ZeroScorePolicy> for crate::recommend::ZeroScorePolicy {
    fn from(p: ZeroScorePolicy) -> Self {
        match p {
            ZeroScorePolicy::AllTied => crate::recommend::ZeroScorePolicy::AllTied,
            ZeroScorePolicy::TopIsZero => crate::recommend::ZeroScorePolicy::TopIsZero,
            ZeroScorePolicy::Never => crate::recommend::ZeroScorePolicy::Never,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            crate::io::OutputFormat::from(OutputFormat::Json),
            crate::io::OutputFormat::Json
        );
        assert_eq!(
            crate::io::OutputFormat::from(OutputFormat::Markdown),
            crate::io::OutputFormat::Markdown
        );
        assert_eq!(
            crate::io::OutputFormat::from(OutputFormat::Terminal),
            crate::io::OutputFormat::Terminal
        );
    }

    #[test]
    fn test_cli_parsing_recommend_command() {
        let args = vec![
            "hdbmatch",
            "recommend",
            "--catalog",
            "flats.csv",
            "--region",
            "West",
            "--flat-type",
            "3 ROOM",
            "--max-price",
            "500000",
            "--bus",
            "4",
            "--mrt",
            "2",
            "--format",
            "json",
            "-vv",
        ];

        let cli = Cli::parse_from(args);
        assert_eq!(cli.verbosity, 2);

        match cli.command {
            Commands::Recommend {
                catalog,
                filter,
                preferences,
                format,
                top,
                ..
            } => {
                assert_eq!(catalog, Some(PathBuf::from("flats.csv")));
                assert_eq!(filter.region.as_deref(), Some("West"));
                assert_eq!(filter.flat_type.as_deref(), Some("3 ROOM"));
                assert_eq!(filter.max_price, Some(500_000.0));
                assert_eq!(filter.min_price, None);
                assert_eq!(preferences.bus, Some(4));
                assert_eq!(preferences.mrt, Some(2));
                assert_eq!(preferences.park, None);
                assert_eq!(format, Some(OutputFormat::Json));
                assert_eq!(top, None);
            }
            _ => panic!("Expected Recommend command"),
        }
    }

    #[test]
    fn test_preference_above_four_is_rejected() {
        let result = Cli::try_parse_from(["hdbmatch", "recommend", "--bus", "5"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parsing_summary_command() {
        let cli = Cli::parse_from(["hdbmatch", "summary", "--catalog", "a.json", "--by", "flat-type"]);
        match cli.command {
            Commands::Summary { by, .. } => assert_eq!(by, GroupBy::FlatType),
            _ => panic!("Expected Summary command"),
        }
    }

    #[test]
    fn test_cli_parsing_init_command() {
        let cli = Cli::parse_from(["hdbmatch", "init", "--force"]);
        match cli.command {
            Commands::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_shortlist_overrides_from_flags() {
        let overrides = shortlist_overrides(Some(5), Some(ZeroScorePolicy::Never), true);
        assert_eq!(overrides.size, Some(5));
        assert_eq!(
            overrides.zero_score_policy,
            Some(crate::recommend::ZeroScorePolicy::Never)
        );
        assert_eq!(overrides.parallel, Some(false));

        let untouched = shortlist_overrides(None, None, false);
        assert_eq!(untouched, ShortlistOverrides::default());
    }

    #[test]
    fn test_filter_args_convert_to_overrides() {
        let overrides = FilterOverrides::from(FilterArgs {
            min_lease: Some(60),
            ..FilterArgs::default()
        });
        assert_eq!(overrides.min_remaining_lease, Some(60));
        assert_eq!(overrides.region, None);
    }
}
