use std::path::PathBuf;

/// Default source directory
pub fn default_source() -> PathBuf {
    PathBuf::from(".")
}

/// Default page extensions
pub fn default_extensions() -> Vec<String> {
    vec!["html".to_string(), "htm".to_string()]
}
