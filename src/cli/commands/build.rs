use std::path::PathBuf;

use log::info;

use crate::config::{self, Config};
use crate::processor;
use crate::utils::error::{TocError, TocResult};

/// Command line values that override the configuration file
#[derive(Debug, Default, Clone)]
pub struct BuildOverrides {
    pub source: Option<PathBuf>,
    pub destination: Option<PathBuf>,
    pub region: Option<String>,
    pub strict: bool,
}

/// Load the configuration and apply command line overrides on top of it
pub fn resolve_config(
    config_files: Option<&Vec<PathBuf>>,
    overrides: &BuildOverrides,
) -> TocResult<Config> {
    let base = overrides
        .source
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let mut config = config::load_config(&base, config_files.cloned())?;

    if let Some(source) = &overrides.source {
        config.source = source.clone();
    }
    if let Some(destination) = &overrides.destination {
        config.destination = Some(destination.clone());
    }
    if let Some(region) = &overrides.region {
        config.content_region = Some(region.clone());
    }
    if overrides.strict {
        config.strict = true;
    }

    Ok(config)
}

/// Handle the build command
pub fn handle_build_command(
    config_files: Option<&Vec<PathBuf>>,
    overrides: &BuildOverrides,
) -> TocResult<()> {
    let config = resolve_config(config_files, overrides)?;
    config::validate_config(&config)?;

    info!("Adding tables of contents...");
    let report = processor::process_site(&config)?;

    // Read/write failures fail the command even without --strict
    if !report.failed.is_empty() {
        return Err(TocError::Pages(report.failed));
    }

    match &config.destination {
        Some(destination) => info!("Site written to {}", destination.display()),
        None => info!("Site updated in place at {}", config.source.display()),
    }
    Ok(())
}
