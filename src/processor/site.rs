use std::path::PathBuf;

use log::{error, info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::config::Config;
use crate::processor::collector::collect_pages;
use crate::processor::page::{process_page, Page};
use crate::utils::error::{TocError, TocResult};
use crate::utils::fs;

/// Summary of a site run
#[derive(Debug, Default, Clone, Serialize)]
pub struct SiteReport {
    /// Pages that received a table of contents
    pub processed: usize,
    /// Total number of entries generated across all pages
    pub entries: usize,
    /// Pages without a container or content region, left as they were
    pub skipped: Vec<PathBuf>,
    /// Pages that could not be read or written
    pub failed: Vec<(PathBuf, String)>,
}

impl SiteReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.failed.is_empty()
    }
}

enum PageOutcome {
    Processed(usize),
    Skipped(String),
    Failed(String),
}

/// Add a table of contents to every page of the site.
///
/// Pages are processed in parallel. A page lacking the container (or the
/// configured content region) is skipped: copied unchanged when writing to
/// a destination, left untouched when working in place. In strict mode any
/// skipped or failed page makes the whole run fail, after all pages have
/// been attempted.
pub fn process_site(config: &Config) -> TocResult<SiteReport> {
    let pages = collect_pages(config)?;
    let options = config.toc_options();
    info!("Processing {} page(s)...", pages.len());

    let outcomes: Vec<(&Page, PageOutcome)> = pages
        .par_iter()
        .map(|page| {
            let outcome = match process_page(page, &options) {
                Ok(entries) => PageOutcome::Processed(entries.len()),
                Err(e @ TocError::MissingContainer(_)) | Err(e @ TocError::MissingRegion(_)) => {
                    skip_page(page, e.to_string())
                }
                Err(e) => PageOutcome::Failed(e.to_string()),
            };
            (page, outcome)
        })
        .collect();

    let mut report = SiteReport::default();
    for (page, outcome) in outcomes {
        match outcome {
            PageOutcome::Processed(count) => {
                report.processed += 1;
                report.entries += count;
            }
            PageOutcome::Skipped(reason) => {
                warn!("Skipped {}: {}", page.relative_path, reason);
                report.skipped.push(page.path.clone());
            }
            PageOutcome::Failed(reason) => {
                error!("Failed {}: {}", page.relative_path, reason);
                report.failed.push((page.path.clone(), reason));
            }
        }
    }

    info!(
        "Added {} entries to {} page(s), {} skipped, {} failed",
        report.entries,
        report.processed,
        report.skipped.len(),
        report.failed.len()
    );

    if config.strict && !report.is_clean() {
        let mut failures = report.failed.clone();
        failures.extend(
            report
                .skipped
                .iter()
                .map(|path| (path.clone(), "no table of contents target".to_string())),
        );
        return Err(TocError::Pages(failures));
    }

    Ok(report)
}

fn skip_page(page: &Page, reason: String) -> PageOutcome {
    if page.is_in_place() {
        return PageOutcome::Skipped(reason);
    }

    match fs::copy_file(&page.path, &page.output_path) {
        Ok(_) => PageOutcome::Skipped(reason),
        Err(e) => PageOutcome::Failed(format!("{} (copy failed: {})", reason, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fs::{read_file, write_file};

    const WITH_TOC: &str =
        "<html><head></head><body><nav id=\"toc\"></nav><h1>One</h1><h2>Two</h2></body></html>";
    const WITHOUT_TOC: &str = "<html><head></head><body><h1>Plain</h1></body></html>";

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path().join("index.html"), WITH_TOC).unwrap();
        write_file(dir.path().join("docs/guide.html"), WITH_TOC).unwrap();
        write_file(dir.path().join("plain.html"), WITHOUT_TOC).unwrap();
        dir
    }

    #[test]
    fn test_process_site_into_destination() {
        let dir = site();
        let out = tempfile::tempdir().unwrap();
        let config = Config {
            source: dir.path().to_path_buf(),
            destination: Some(out.path().to_path_buf()),
            ..Config::default()
        };

        let report = process_site(&config).unwrap();

        assert_eq!(report.processed, 2);
        assert_eq!(report.entries, 4);
        assert_eq!(report.skipped, vec![dir.path().join("plain.html")]);
        assert!(report.failed.is_empty());

        let guide = read_file(out.path().join("docs/guide.html")).unwrap();
        assert!(guide.contains(r##"<div class="h2"><a href="#TableOfContents1">Two</a></div>"##));
        // skipped pages are still copied so the output is a complete site
        assert_eq!(read_file(out.path().join("plain.html")).unwrap(), WITHOUT_TOC);
        // sources untouched
        assert_eq!(read_file(dir.path().join("index.html")).unwrap(), WITH_TOC);
    }

    #[test]
    fn test_process_site_in_place() {
        let dir = site();
        let config = Config {
            source: dir.path().to_path_buf(),
            ..Config::default()
        };

        let report = process_site(&config).unwrap();

        assert_eq!(report.processed, 2);
        let index = read_file(dir.path().join("index.html")).unwrap();
        assert!(index.contains(r#"<h1 id="TableOfContents0">One</h1>"#));
        assert_eq!(read_file(dir.path().join("plain.html")).unwrap(), WITHOUT_TOC);
    }

    #[test]
    fn test_strict_mode_fails_on_skipped_pages() {
        let dir = site();
        let config = Config {
            source: dir.path().to_path_buf(),
            strict: true,
            ..Config::default()
        };

        let err = process_site(&config).unwrap_err();

        match err {
            TocError::Pages(failures) => {
                assert_eq!(failures.len(), 1);
                assert_eq!(failures[0].0, dir.path().join("plain.html"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_region_scope_skips_pages_without_region() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path().join("post.html"),
            "<body><div id=\"toc\"></div><h1>Site</h1><article><h2>Body</h2></article></body>",
        )
        .unwrap();
        write_file(dir.path().join("index.html"), WITH_TOC).unwrap();
        let config = Config {
            source: dir.path().to_path_buf(),
            content_region: Some("article".to_string()),
            ..Config::default()
        };

        let report = process_site(&config).unwrap();

        assert_eq!(report.processed, 1);
        assert_eq!(report.entries, 1);
        assert_eq!(report.skipped, vec![dir.path().join("index.html")]);
    }
}
