/**
 * Angular Docs Extractor CLI - ng-docs
 *
 * Extracts API documentation entries for classes and interfaces as JSON
 */
use anyhow::Context;
use clap::{Arg, ArgAction, Command};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use angular_docs_extractor::config::DocsConfig;
use angular_docs_extractor::ngtsc::docs::DocsExtractor;
use angular_docs_extractor::ngtsc::logging::{ConsoleLogger, LogLevel};

fn main() {
    let matches = Command::new("ng-docs")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Angular API docs extractor (Rust implementation)")
        .arg(
            Arg::new("files")
                .value_name("FILES")
                .num_args(0..)
                .help("Source files or glob patterns; defaults to the configured include patterns"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Path to ng-docs.json"),
        )
        .arg(
            Arg::new("out")
                .short('o')
                .long("out")
                .value_name("PATH")
                .help("Write entries to this file instead of stdout"),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .action(ArgAction::SetTrue)
                .help("Pretty-print the JSON output"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .value_parser(["debug", "info", "warn", "error"])
                .help("Minimum level of diagnostics printed to stderr"),
        )
        .get_matches();

    let files: Vec<String> = matches
        .get_many::<String>("files")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let mut config = match load_config(matches.get_one::<String>("config").map(Path::new)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(2);
        }
    };

    if let Some(out) = matches.get_one::<String>("out") {
        config.output = Some(PathBuf::from(out));
    }
    if matches.get_flag("pretty") {
        config.pretty = true;
    }
    if let Some(level) = matches.get_one::<String>("log-level") {
        // Restricted to valid names by the value parser
        config.log_level = level.parse().unwrap_or(LogLevel::Warn);
    }

    match run(&config, &files) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(2);
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<DocsConfig> {
    match path {
        Some(path) => DocsConfig::load(path),
        None => DocsConfig::discover(&std::env::current_dir()?),
    }
}

/// Returns `Ok(false)` when some files could not be extracted.
fn run(config: &DocsConfig, files: &[String]) -> anyhow::Result<bool> {
    let logger = ConsoleLogger::new(config.log_level);
    let extractor = DocsExtractor::new(config.extractor_options(), Box::new(logger))?;

    let sources = if files.is_empty() {
        extractor.discover_files(&std::env::current_dir()?)?
    } else {
        expand_inputs(files)?
    };

    let result = extractor.extract(&sources);
    for diag in &result.diagnostics {
        eprintln!("Error: {}", diag);
    }

    let json = if config.pretty {
        serde_json::to_string_pretty(&result.entries)?
    } else {
        serde_json::to_string(&result.entries)?
    };

    match &config.output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => println!("{}", json),
    }

    Ok(!result.has_errors())
}

fn expand_inputs(inputs: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for input in inputs {
        if input.contains(['*', '?', '[']) {
            for entry in glob::glob(input).with_context(|| format!("Invalid pattern {}", input))? {
                paths.push(entry?);
            }
        } else {
            paths.push(PathBuf::from(input));
        }
    }
    Ok(paths)
}
