//! Configuration loaded from `.assessmap.toml`.

mod core;
mod loader;

pub use self::core::{
    default_chart_width, default_decimals, default_flat_weight, default_max_options,
    AssessConfig, FlatConfig, LimitsConfig, OutputConfig, ScoringConfig,
};

pub use self::loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, user_config_path, CONFIG_FILE_NAME,
};

/// Commented starting point written by `assessmap init`
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# assessmap configuration

# Framework definition used when --framework is not given.
# Without it the built-in Decision Assessment Framework is used.
# framework = "framework.toml"

[scoring]
# "zero" scores blank ratings as 0, "reject" treats them as errors
on_missing = "zero"
# "strict" rejects frameworks whose weights do not sum to 1.0
weight_check = "strict"

[output]
# default_format = "terminal"
decimals = 2
chart_width = 40

[limits]
max_options = 20

[flat]
# weight of criteria read from a --criteria list without a --weight
default_weight = 5
"#;
