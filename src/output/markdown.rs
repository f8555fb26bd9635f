use std::fmt::Write;

use crate::error::Result;

use super::{Report, ReportFormatter};

const NONE_DETECTED: &str = "- (none detected)";

pub struct MarkdownFormatter;

impl MarkdownFormatter {
    fn write_top_level_map(output: &mut String, report: &Report) {
        writeln!(output, "## Top-Level Map").ok();
        writeln!(output, "| Path | Type | Purpose |").ok();
        writeln!(output, "|:---|:---:|:---|").ok();
        if report.top_level_map.is_empty() {
            writeln!(output, "| (none) | - | - |").ok();
        }
        for entry in &report.top_level_map {
            writeln!(
                output,
                "| {} | {} | {} |",
                entry.path, entry.kind, entry.purpose
            )
            .ok();
        }
        writeln!(output).ok();
    }

    fn write_path_list(output: &mut String, title: &str, paths: &[String]) {
        writeln!(output, "## {title}").ok();
        if paths.is_empty() {
            writeln!(output, "{NONE_DETECTED}").ok();
        }
        for path in paths {
            writeln!(output, "- {path}").ok();
        }
        writeln!(output).ok();
    }

    fn write_distribution(output: &mut String, report: &Report) {
        writeln!(output, "## File Distribution").ok();
        writeln!(output, "| Category | Count |").ok();
        writeln!(output, "|:---|---:|").ok();
        let sorted = report.stats.categories_by_count();
        if sorted.is_empty() {
            writeln!(output, "| (none) | 0 |").ok();
        }
        for (category, count) in sorted {
            writeln!(output, "| {category} | {count} |").ok();
        }
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();
        let stats = &report.stats;

        writeln!(output, "# Project Structure Index").ok();
        writeln!(
            output,
            "> Auto-generated by project-index. Last updated: {}",
            report.generated.format("%Y-%m-%d %H:%M")
        )
        .ok();
        writeln!(output).ok();

        writeln!(output, "## Quick Stats").ok();
        writeln!(output, "- **Total files**: {}", stats.total_files).ok();
        writeln!(output, "- **Total directories**: {}", stats.total_dirs).ok();
        writeln!(output, "- **Main language**: {}", report.main_language).ok();
        writeln!(output).ok();

        Self::write_top_level_map(&mut output, report);

        writeln!(output, "## Directory Tree").ok();
        writeln!(output, "```").ok();
        for line in &report.tree {
            writeln!(output, "{line}").ok();
        }
        writeln!(output, "```").ok();
        writeln!(output).ok();

        Self::write_path_list(&mut output, "Entry Points", &stats.entry_points);
        Self::write_path_list(&mut output, "Config Files", &stats.config_files);
        Self::write_path_list(&mut output, "Key Files", &stats.key_files);

        Self::write_distribution(&mut output, report);

        Ok(output)
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
