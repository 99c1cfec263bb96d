use log::info;

use crate::config::Config;
use crate::utils::error::{TocError, TocResult};
use crate::utils::fs;

/// Validate the configuration, creating the destination directory if needed
pub fn validate_config(config: &Config) -> TocResult<()> {
    validate_source_directory(config)?;
    validate_extensions(config)?;
    validate_content_region(config)?;
    validate_destination_directory(config)?;

    Ok(())
}

fn validate_source_directory(config: &Config) -> TocResult<()> {
    let source = &config.source;

    if !source.exists() {
        return Err(TocError::Config(format!(
            "Source directory does not exist: {}",
            source.display()
        )));
    }

    if !fs::is_directory(source) {
        return Err(TocError::Config(format!(
            "Source path is not a directory: {}",
            source.display()
        )));
    }

    info!("Source directory: {}", source.display());
    Ok(())
}

fn validate_extensions(config: &Config) -> TocResult<()> {
    if config.extensions.is_empty() {
        return Err(TocError::Config("No page extensions configured".to_string()));
    }

    if config.extensions.iter().any(|ext| ext.trim().is_empty()) {
        return Err(TocError::Config("Page extensions must not be empty".to_string()));
    }

    Ok(())
}

fn validate_content_region(config: &Config) -> TocResult<()> {
    match config.content_region.as_deref() {
        Some(region) if region.trim().is_empty() || region == "#" => Err(TocError::Config(
            format!("Invalid content region: \"{}\"", region),
        )),
        _ => Ok(()),
    }
}

fn validate_destination_directory(config: &Config) -> TocResult<()> {
    let destination = match &config.destination {
        Some(destination) => destination,
        None => {
            info!("Pages will be rewritten in place");
            return Ok(());
        }
    };

    if !destination.exists() {
        info!("Creating destination directory: {}", destination.display());
        fs::create_directory(destination)?;
    } else if !destination.is_dir() {
        return Err(TocError::Config(format!(
            "Destination path is not a directory: {}",
            destination.display()
        )));
    }

    info!("Destination directory: {}", destination.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &std::path::Path) -> Config {
        Config {
            source: dir.to_path_buf(),
            ..Config::default()
        }
    }

    #[test]
    fn test_missing_source_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir.path().join("missing"));

        let err = validate_config(&config).unwrap_err();

        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_destination_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out/site");
        let config = Config {
            destination: Some(out.clone()),
            ..config_in(dir.path())
        };

        validate_config(&config).unwrap();

        assert!(out.is_dir());
    }

    #[test]
    fn test_bad_region_and_extensions_are_rejected() {
        let dir = tempfile::tempdir().unwrap();

        let hash_only = Config {
            content_region: Some("#".to_string()),
            ..config_in(dir.path())
        };
        assert!(validate_config(&hash_only).is_err());

        let no_exts = Config {
            extensions: Vec::new(),
            ..config_in(dir.path())
        };
        assert!(validate_config(&no_exts).is_err());
    }
}
