pub mod types;
pub mod commands;
pub mod logging;

use std::process::ExitCode;

use clap::Parser;
use log::error;

use crate::utils::error::TocResult;
use types::{Cli, Commands};

/// Run the command-line interface
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let (verbose, quiet) = match &cli.command {
        Some(Commands::Build { verbose, quiet, .. }) => (*verbose, *quiet),
        _ => (false, false),
    };
    logging::init_logging(logging::level_for(cli.debug, verbose, quiet));
    logging::configure_backtrace(cli.trace);

    match dispatch(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: &Cli) -> TocResult<()> {
    let global = commands::BuildOverrides {
        source: cli.source.clone(),
        destination: cli.destination.clone(),
        ..commands::BuildOverrides::default()
    };

    match &cli.command {
        Some(Commands::Build {
            source,
            destination,
            region,
            strict,
            ..
        }) => {
            // Build-specific options take precedence over global options
            let overrides = commands::BuildOverrides {
                source: source.clone().or(global.source),
                destination: destination.clone().or(global.destination),
                region: region.clone(),
                strict: *strict,
            };
            commands::handle_build_command(cli.config.as_ref(), &overrides)
        }
        Some(Commands::Inspect { file, region, json }) => {
            commands::handle_inspect_command(file, region.as_deref(), *json)
        }
        Some(Commands::Config {}) => commands::handle_config_command(cli.config.as_ref(), &global),
        // Default to build if no command is given
        None => commands::handle_build_command(cli.config.as_ref(), &global),
    }
}
