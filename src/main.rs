use anyhow::Result;
use assessmap::cli::{Cli, Commands};
use assessmap::commands::{self, FrameworkCommandConfig, ScoreConfig, TemplateConfig};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            exit_code(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Score {
            table,
            framework,
            format,
            output,
            on_missing,
            top,
            plain,
        } => commands::score_options(ScoreConfig {
            table,
            selection: framework.into(),
            config: cli.config,
            format,
            output,
            on_missing,
            top,
            plain,
        }),
        Commands::Template {
            framework,
            options,
            output,
            prefill,
        } => commands::write_scoring_template(TemplateConfig {
            selection: framework.into(),
            config: cli.config,
            options,
            output,
            prefill,
        }),
        Commands::Framework {
            framework,
            export,
            plain,
        } => commands::show_framework(FrameworkCommandConfig {
            selection: framework.into(),
            config: cli.config,
            export,
            plain,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}

// 2 for problems in the user's tables or frameworks, 1 for everything else
fn exit_code(err: &anyhow::Error) -> ExitCode {
    let user_fixable = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<assessmap::Error>())
        .is_some_and(assessmap::Error::is_user_fixable);
    if user_fixable {
        ExitCode::from(2)
    } else {
        ExitCode::FAILURE
    }
}

// RUST_LOG takes precedence over -v
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}
