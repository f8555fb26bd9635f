use std::fs;
use std::path::Path;

use clap::Parser;

use project_index::cli::Cli;
use project_index::config::{Config, ConfigLoader, FileConfigLoader};
use project_index::output::{OutputFormat, Report, ReportFormatter as _};
use project_index::scanner::{ProjectScanner, ScanOptions};
use project_index::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, ProjectIndexError, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = match run(&cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.detailed());
            EXIT_CONFIG_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> project_index::Result<()> {
    // 1. Load configuration
    let config = load_config(&cli.root, cli.config.as_deref(), cli.no_config)?;

    // 2. Command line overrides configuration
    let (options, format) = resolve_options(cli, &config);

    // 3. Prepare the scanner (reads .gitignore)
    let scanner = ProjectScanner::new(&cli.root, options);
    if !cli.quiet {
        for warning in scanner.warnings() {
            eprintln!("Warning: {warning}");
        }
    }

    // 4. Scan and render
    let report = Report::build(&scanner);
    let output = format.formatter().format(&report)?;

    // 5. Write output
    write_output(cli.output.as_deref(), &output)
}

fn load_config(
    root: &Path,
    config_path: Option<&Path>,
    no_config: bool,
) -> project_index::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    let result = config_path.map_or_else(|| loader.load(root), |path| loader.load_from_path(path))?;
    Ok(result.config)
}

fn resolve_options(cli: &Cli, config: &Config) -> (ScanOptions, OutputFormat) {
    let mut options = config.scan.to_options();
    if let Some(depth) = cli.max_depth() {
        options.max_depth = depth;
    }
    if cli.no_gitignore {
        options.respect_gitignore = false;
    }

    let format = cli.output_format().unwrap_or(config.output.format);
    (options, format)
}

fn write_output(output_path: Option<&Path>, content: &str) -> project_index::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content).map_err(|source| ProjectIndexError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
    } else {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
