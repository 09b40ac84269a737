use anyhow::Result;
use clap::Parser;
use hdbmatch::cli::{shortlist_overrides, Cli, Commands};
use hdbmatch::commands::{
    self, AffordabilityConfig, OptionsConfig, RecommendConfig, SummaryConfig,
};
use hdbmatch::observability::{init_logging, install_panic_hook};

fn main() -> Result<()> {
    install_panic_hook();
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Recommend {
            catalog,
            config,
            filter,
            preferences,
            zero_score_policy,
            top,
            no_parallel,
            format,
            output,
        } => commands::handle_recommend(RecommendConfig {
            catalog,
            config,
            filter: filter.into(),
            preferences: preferences.into(),
            shortlist: shortlist_overrides(top, zero_score_policy, no_parallel),
            format: format.map(Into::into),
            output,
            verbosity: cli.verbosity,
        }),
        Commands::Options {
            catalog,
            config,
            format,
            output,
        } => commands::handle_options(OptionsConfig {
            catalog,
            config,
            format: format.map(Into::into),
            output,
        }),
        Commands::Summary {
            catalog,
            config,
            by,
            format,
            output,
        } => commands::handle_summary(SummaryConfig {
            catalog,
            config,
            group_by: by.into(),
            format: format.map(Into::into),
            output,
        }),
        Commands::Affordability {
            prices,
            income,
            format,
            output,
        } => commands::handle_affordability(AffordabilityConfig {
            prices,
            income,
            format: format.map(Into::into),
            output,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}
