use crate::commands::FrameworkSelection;
use crate::framework::parse_weight_override;
use crate::io::OutputFormat;
use crate::rating::{MissingPolicy, RatingScale};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScaleArg {
    /// Very Low=1 through Very High=6
    SixLevel,
    /// Plain numbers 1-5
    Numeric5,
    /// Plain numbers 1-6
    Numeric6,
}

impl From<ScaleArg> for RatingScale {
    fn from(arg: ScaleArg) -> Self {
        match arg {
            ScaleArg::SixLevel => RatingScale::six_level(),
            ScaleArg::Numeric5 => RatingScale::numeric(1, 5),
            ScaleArg::Numeric6 => RatingScale::numeric(1, 6),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "assessmap")]
#[command(about = "Weighted multi-criteria scoring and ranking of options", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to searching for .assessmap.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Framework choice shared by every command that needs one
#[derive(Args, Debug, Clone, Default)]
pub struct FrameworkArgs {
    /// Framework definition file (TOML)
    #[arg(long, conflicts_with = "criteria")]
    pub framework: Option<PathBuf>,

    /// Built-in framework by name
    #[arg(long, conflicts_with_all = ["framework", "criteria"])]
    pub builtin: Option<String>,

    /// Flat framework from a file with one criterion per line
    #[arg(long)]
    pub criteria: Option<PathBuf>,

    /// Weight for a --criteria entry, e.g. --weight Price=8 (repeatable)
    #[arg(
        long = "weight",
        value_name = "NAME=WEIGHT",
        value_parser = parse_weight_override,
        requires = "criteria"
    )]
    pub weights: Vec<(String, f64)>,

    /// Rating scale for --criteria frameworks
    #[arg(long, value_enum, requires = "criteria")]
    pub scale: Option<ScaleArg>,

    /// Warn about weights that do not sum to 1.0 instead of failing
    #[arg(long = "lenient-weights")]
    pub lenient_weights: bool,
}

impl From<FrameworkArgs> for FrameworkSelection {
    fn from(args: FrameworkArgs) -> Self {
        Self {
            framework: args.framework,
            builtin: args.builtin,
            criteria: args.criteria,
            weights: args.weights,
            scale: args.scale.map(RatingScale::from),
            lenient_weights: args.lenient_weights,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score and rank the options in a filled-in CSV table
    Score {
        /// Scoring table: Opportunity column followed by one column per criterion
        table: PathBuf,

        #[command(flatten)]
        framework: FrameworkArgs,

        /// Output format (defaults to the config's default_format, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// How blank ratings are treated
        #[arg(long = "on-missing", value_enum)]
        on_missing: Option<MissingPolicy>,

        /// Show only the top N options
        #[arg(long)]
        top: Option<usize>,

        /// Plain output without colors or unicode
        #[arg(long)]
        plain: bool,
    },

    /// Write a blank CSV scoring sheet for a framework
    Template {
        #[command(flatten)]
        framework: FrameworkArgs,

        /// File with one option name per line
        #[arg(long)]
        options: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fill every cell with the scale's middle rating
        #[arg(long)]
        prefill: bool,
    },

    /// Show a framework's weights and scale and check its weights
    Framework {
        #[command(flatten)]
        framework: FrameworkArgs,

        /// Write the framework as a TOML definition file
        #[arg(long)]
        export: Option<PathBuf>,

        /// Plain output without colors
        #[arg(long)]
        plain: bool,
    },

    /// Initialize an assessmap configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_score_with_criteria() {
        let cli = Cli::try_parse_from([
            "assessmap",
            "score",
            "table.csv",
            "--criteria",
            "criteria.txt",
            "--weight",
            "Price=8",
            "--weight",
            "Battery life=3",
            "-f",
            "csv",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Commands::Score {
                table,
                framework,
                format,
                ..
            } => {
                assert_eq!(table, PathBuf::from("table.csv"));
                assert_eq!(format, Some(OutputFormat::Csv));
                assert_eq!(
                    framework.weights,
                    vec![("Price".to_string(), 8.0), ("Battery life".to_string(), 3.0)]
                );
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_weight_requires_criteria() {
        let result = Cli::try_parse_from(["assessmap", "score", "t.csv", "--weight", "Price=8"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_framework_and_criteria_conflict() {
        let result = Cli::try_parse_from([
            "assessmap",
            "template",
            "--framework",
            "f.toml",
            "--criteria",
            "c.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_on_missing_values() {
        let cli =
            Cli::try_parse_from(["assessmap", "score", "t.csv", "--on-missing", "reject"]).unwrap();
        match cli.command {
            Commands::Score { on_missing, .. } => {
                assert_eq!(on_missing, Some(MissingPolicy::Reject))
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
