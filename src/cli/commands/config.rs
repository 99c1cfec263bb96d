use std::path::PathBuf;

use crate::cli::commands::build::{resolve_config, BuildOverrides};
use crate::utils::error::{TocError, TocResult};

/// Handle the config command: print the merged configuration
pub fn handle_config_command(
    config_files: Option<&Vec<PathBuf>>,
    overrides: &BuildOverrides,
) -> TocResult<()> {
    let config = resolve_config(config_files, overrides)?;
    let yaml = serde_yaml::to_string(&config)
        .map_err(|e| TocError::Config(format!("Failed to encode configuration: {}", e)))?;
    print!("{}", yaml);
    Ok(())
}
