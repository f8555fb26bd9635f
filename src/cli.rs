use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "project-index")]
#[command(author, version, about = "Generate a structural index of a project directory")]
#[command(long_about = "Scan a project directory and write a Markdown or JSON index: \
    directory tree, file statistics, entry points, config files and key files.\n\n\
    Exit codes:\n  \
    0 - Index generated\n  \
    2 - Configuration or output error")]
pub struct Cli {
    /// Project root to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Maximum traversal depth (non-numeric or negative values are ignored)
    #[arg(allow_negative_numbers = true)]
    pub depth: Option<String>,

    /// Output format: markdown or json (unknown values fall back to markdown)
    #[arg(value_name = "FORMAT")]
    pub format_arg: Option<String>,

    /// Positionals after FORMAT are accepted and ignored
    #[arg(hide = true, value_name = "IGNORED")]
    pub extra: Vec<String>,

    /// Do not read or apply the root .gitignore
    #[arg(long)]
    pub no_gitignore: bool,

    /// Output format; takes precedence over the positional FORMAT
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Write the index to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to configuration file (default: <ROOT>/.project-index.toml)
    #[arg(short, long, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Increase diagnostic output (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Depth from the positional argument, if it is a non-negative integer.
    #[must_use]
    pub fn max_depth(&self) -> Option<usize> {
        self.depth.as_deref().and_then(|d| d.trim().parse().ok())
    }

    /// Format chosen on the command line: `--format` first, then a
    /// recognized positional value.
    #[must_use]
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format
            .or_else(|| self.format_arg.as_deref().and_then(|f| f.parse().ok()))
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
