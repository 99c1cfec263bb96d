use std::path::Path;

use crate::processor;
use crate::toc::{ScanScope, TocEntry, TocOptions};
use crate::utils::error::{TocError, TocResult};

/// Handle the inspect command: print the entries a page would get
pub fn handle_inspect_command(file: &Path, region: Option<&str>, json: bool) -> TocResult<()> {
    let options = TocOptions::default().with_scope(ScanScope::from_region(region));
    let entries = processor::inspect_file(file, &options)?;

    if json {
        let out = serde_json::to_string_pretty(&entries)
            .map_err(|e| TocError::Generic(format!("Failed to encode entries: {}", e)))?;
        println!("{}", out);
    } else {
        print!("{}", format_entries(&entries));
    }

    Ok(())
}

/// One line per entry, indented by heading level
fn format_entries(entries: &[TocEntry]) -> String {
    let mut out = String::new();

    for entry in entries {
        let indent = "  ".repeat(entry.level().saturating_sub(1));
        let marker = if entry.assigned { " (new id)" } else { "" };
        out.push_str(&format!(
            "{}{} {} {}{}\n",
            indent,
            entry.tag,
            entry.href(),
            entry.text.trim(),
            marker
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_entries() {
        let entries = vec![
            TocEntry {
                tag: "h1".to_string(),
                id: "TableOfContents0".to_string(),
                text: "Intro".to_string(),
                assigned: true,
            },
            TocEntry {
                tag: "h3".to_string(),
                id: "custom-id".to_string(),
                text: " Deep ".to_string(),
                assigned: false,
            },
        ];

        assert_eq!(
            format_entries(&entries),
            "h1 #TableOfContents0 Intro (new id)\n    h3 #custom-id Deep\n"
        );
    }
}
