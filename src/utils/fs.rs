use std::fs;
use std::path::Path;

use crate::utils::error::TocResult;

/// Check if a path exists and is a directory
pub fn is_directory<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_dir()
}

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> TocResult<()> {
    fs::create_dir_all(path.as_ref())?;
    Ok(())
}

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> TocResult<String> {
    Ok(fs::read_to_string(path.as_ref())?)
}

/// Write a string to a file, creating parent directories as needed
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> TocResult<()> {
    if let Some(parent) = path.as_ref().parent() {
        create_directory(parent)?;
    }

    fs::write(path.as_ref(), contents)?;
    Ok(())
}

/// Copy a file from source to destination
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> TocResult<u64> {
    if let Some(parent) = to.as_ref().parent() {
        create_directory(parent)?;
    }

    Ok(fs::copy(from, to)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a/b/page.html");

        write_file(&target, "<p>hi</p>").unwrap();

        assert_eq!(read_file(&target).unwrap(), "<p>hi</p>");
    }

    #[test]
    fn test_copy_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("in.html");
        let to = dir.path().join("out/nested/in.html");
        write_file(&from, "x").unwrap();

        assert_eq!(copy_file(&from, &to).unwrap(), 1);
        assert!(is_directory(dir.path().join("out/nested")));
    }
}
