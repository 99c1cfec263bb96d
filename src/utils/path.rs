use std::path::{Component, Path, PathBuf};

/// Normalize a path, resolving ".." and "." components
pub fn normalize_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.as_ref().components() {
        match component {
            Component::ParentDir => {
                if !result.as_os_str().is_empty() {
                    result.pop();
                }
            }
            Component::CurDir => {}
            _ => result.push(component),
        }
    }

    result
}

/// Check if a path has one of the given extensions (case-insensitive)
pub fn has_any_extension<P: AsRef<Path>>(path: P, extensions: &[String]) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| {
            extensions.iter().any(|wanted| wanted.eq_ignore_ascii_case(ext))
        })
}

/// Path of `path` relative to `base`, with `/` separators, for glob matching
pub fn relative_slash_path<P: AsRef<Path>, B: AsRef<Path>>(path: P, base: B) -> Option<String> {
    let path = normalize_path(path);
    let base = normalize_path(base);
    let relative = path.strip_prefix(&base).ok()?;

    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    Some(parts.join("/"))
}
