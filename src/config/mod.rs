//! Configuration loading for hdbmatch.
//!
//! Values resolve in order: command-line flag, then `.hdbmatch.toml`
//! (nearest ancestor of the working directory, or the user config dir),
//! then built-in defaults.

mod core;
mod loader;
mod overrides;

pub use self::core::{CatalogConfig, HdbmatchConfig, OutputConfig, ShortlistConfig};
pub use loader::{
    directory_ancestors, discover_config_from, load_config, load_config_from_path,
    parse_config, user_config_path, LoadedConfig, CONFIG_FILE_NAME,
};
pub use overrides::{FilterOverrides, PreferenceOverrides, ShortlistOverrides};

/// Contents written by `hdbmatch init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# hdbmatch configuration

[catalog]
# path = "datasets/hdb/hdb_available_cleaned.csv"

[filter]
min_price = 0.0
max_price = 1500000.0
min_remaining_lease = 0
region = "All"
flat_type = "All"

# Importance per amenity, 0 (not important) to 4 (extremely important)
[preferences]
bus = 0
school = 0
mall = 0
supermarket = 0
cbd = 0
hawker = 0
park = 0
mrt = 0

[shortlist]
size = 3
# all-tied | top-is-zero | never
zero_score_policy = "all-tied"
parallel = true
parallel_threshold = 2048

[output]
# terminal | json | markdown
default_format = "terminal"
"#;
