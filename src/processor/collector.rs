use std::path::Path;

use glob_match::glob_match;
use log::{debug, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::processor::page::Page;
use crate::utils::error::TocResult;
use crate::utils::path::{has_any_extension, normalize_path, relative_slash_path};

/// Collect all pages under the configured source directory, sorted by path
pub fn collect_pages(config: &Config) -> TocResult<Vec<Page>> {
    debug!("Collecting pages from {}", config.source.display());
    let destination = config.destination.as_ref().map(normalize_path);

    // Never pick up our own output when the destination sits inside the source
    let walker = WalkDir::new(&config.source)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| match &destination {
            Some(dest) => entry.depth() == 0 || normalize_path(entry.path()) != *dest,
            None => true,
        });

    let mut pages = Vec::new();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() || !has_any_extension(path, &config.extensions) {
            continue;
        }

        let relative_path = match relative_slash_path(path, &config.source) {
            Some(relative) => relative,
            None => continue,
        };

        if is_excluded(&relative_path, &config.exclude) {
            debug!("Excluded {}", relative_path);
            continue;
        }

        let output_path = match &config.destination {
            Some(dest) => dest.join(Path::new(&relative_path)),
            None => path.to_path_buf(),
        };

        pages.push(Page {
            path: path.to_path_buf(),
            relative_path,
            output_path,
        });
    }

    debug!("Collected {} page(s)", pages.len());
    Ok(pages)
}

fn is_excluded(relative_path: &str, patterns: &[String]) -> bool {
    patterns
        .iter()
        .any(|pattern| glob_match(pattern, relative_path))
}
