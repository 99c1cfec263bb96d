use std::path::{Path, PathBuf};

use log::debug;

use crate::config::defaults;
use crate::config::types::Config;
use crate::utils::error::{TocError, TocResult};
use crate::utils::fs;

/// Configuration file names to look for
const CONFIG_FILES: [&str; 4] = ["_toc.yml", "_toc.yaml", "_toc.toml", "_toc.json"];

/// Load configuration from config files.
///
/// With `config_files` unset, the known file names are looked up in
/// `source_dir`. Later files override earlier ones. The result is not
/// validated; callers apply command line overrides first and then call
/// [`validate_config`](crate::config::validate_config).
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>,
) -> TocResult<Config> {
    let mut config = Config::default();

    let config_paths = match config_files {
        Some(paths) => paths,
        None => find_default_config_files(&source_dir),
    };

    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            let file_config = parse_config_file(&path)?;
            merge_configs(&mut config, &file_config);
        }
    }

    if config.source == defaults::default_source() {
        config.source = source_dir.as_ref().to_path_buf();
    }

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

fn find_default_config_files<P: AsRef<Path>>(source_dir: P) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .filter(|path| path.exists())
        .collect()
}

/// Parse one configuration file, picking the format from its extension
fn parse_config_file(config_path: &Path) -> TocResult<Config> {
    if !config_path.exists() {
        return Err(TocError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_file(config_path).map_err(|e| {
        TocError::Config(format!(
            "Failed to read configuration file {}: {}",
            config_path.display(),
            e
        ))
    })?;

    match config_path.extension() {
        Some(ext) => match ext.to_string_lossy().to_lowercase().as_str() {
            "yml" | "yaml" => parse_yaml_config(&content, config_path),
            "toml" => parse_toml_config(&content, config_path),
            "json" => parse_json_config(&content, config_path),
            other => Err(TocError::Config(format!(
                "Unsupported configuration file format: {}",
                other
            ))),
        },
        // Assume YAML if no extension
        None => parse_yaml_config(&content, config_path),
    }
}

fn parse_yaml_config(content: &str, path: &Path) -> TocResult<Config> {
    // An empty YAML file deserializes to unit, not a mapping
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(content).map_err(|e| {
        TocError::Config(format!(
            "Failed to parse YAML configuration ({}): {}",
            path.display(),
            e
        ))
    })
}

fn parse_toml_config(content: &str, path: &Path) -> TocResult<Config> {
    toml::from_str(content).map_err(|e| {
        TocError::Config(format!(
            "Failed to parse TOML configuration ({}): {}",
            path.display(),
            e
        ))
    })
}

fn parse_json_config(content: &str, path: &Path) -> TocResult<Config> {
    serde_json::from_str(content).map_err(|e| {
        TocError::Config(format!(
            "Failed to parse JSON configuration ({}): {}",
            path.display(),
            e
        ))
    })
}

/// Merge `source` into `target`, only overriding non-default values
fn merge_configs(target: &mut Config, source: &Config) {
    if source.source != defaults::default_source() {
        target.source = source.source.clone();
    }

    if source.destination.is_some() {
        target.destination = source.destination.clone();
    }

    if source.content_region.is_some() {
        target.content_region = source.content_region.clone();
    }

    if source.extensions != defaults::default_extensions() {
        target.extensions = source.extensions.clone();
    }

    if !source.exclude.is_empty() {
        target.exclude = source.exclude.clone();
    }

    // Boolean flags are simply set if they're true in the source
    if source.strict {
        target.strict = true;
    }
}
