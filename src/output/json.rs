use serde::Serialize;

use crate::error::Result;
use crate::scanner::{ScanStats, TopLevelEntry};

use super::{Report, ReportFormatter};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    generated: String,
    root_path: String,
    max_depth: usize,
    respect_gitignore: bool,
    stats: &'a ScanStats,
    main_language: &'a str,
    top_level_map: &'a [TopLevelEntry],
    tree: String,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let output = JsonOutput {
            generated: report.generated.to_rfc3339(),
            root_path: report.root_path.display().to_string(),
            max_depth: report.max_depth,
            respect_gitignore: report.respect_gitignore,
            stats: &report.stats,
            main_language: &report.main_language,
            top_level_map: &report.top_level_map,
            tree: report.tree_text(),
        };

        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
