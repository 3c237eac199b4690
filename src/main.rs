//! Binary entry point for promptkit.
//!
//! This binary provides the CLI interface for the placeholder and similarity
//! engines.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow needless_pass_by_value for command functions
#![allow(clippy::needless_pass_by_value)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use promptkit::CompileOptions;
use promptkit::cli::{
    OutputFormat, TextInput, cmd_compile, cmd_convert, cmd_dedup, cmd_detect, cmd_fingerprint,
    cmd_normalize, cmd_similarity, cmd_variables, parse_var_pairs,
};
use promptkit::config::EngineConfig;
use promptkit::observability;
use promptkit::services::deduplication::{DuplicateReviewer, validate_threshold};
use std::path::PathBuf;
use std::process::ExitCode;

/// Promptkit - placeholder templates and near-duplicate detection for prompts.
#[derive(Parser)]
#[command(name = "promptkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// List placeholders found in text.
    Detect {
        #[command(flatten)]
        input: TextInput,

        /// Print JSON instead of one line per placeholder.
        #[arg(long)]
        json: bool,
    },

    /// Rewrite every placeholder to ${name} form.
    Convert {
        #[command(flatten)]
        input: TextInput,
    },

    /// List ${...} variables in canonical text.
    Variables {
        #[command(flatten)]
        input: TextInput,

        /// Print JSON instead of one line per variable.
        #[arg(long)]
        json: bool,
    },

    /// Render canonical text with supplied values.
    Compile {
        #[command(flatten)]
        input: TextInput,

        /// Variable value as name=value (repeatable).
        #[arg(long = "var", value_name = "NAME=VALUE")]
        vars: Vec<String>,

        /// Leave placeholders without a value untouched even if they have a default.
        #[arg(long)]
        no_defaults: bool,

        /// Fail if any variable is left unresolved.
        #[arg(long)]
        strict: bool,
    },

    /// Print the normalized form used for comparison.
    Normalize {
        #[command(flatten)]
        input: TextInput,
    },

    /// Score the similarity of two texts.
    Similarity {
        /// First text.
        a: String,

        /// Second text.
        b: String,

        /// Threshold for the verdict (default from config).
        #[arg(short, long)]
        threshold: Option<f64>,
    },

    /// Print the fingerprint of a text.
    Fingerprint {
        #[command(flatten)]
        input: TextInput,

        /// Print the fingerprint's hash tag instead.
        #[arg(long)]
        hash: bool,
    },

    /// Group near-duplicate prompts from a JSON file of {id, content} records.
    Dedup {
        /// Path to the JSON file.
        path: PathBuf,

        /// Similarity threshold (default from config).
        #[arg(short, long)]
        threshold: Option<f64>,
    },
}

/// Main entry point.
fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match EngineConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    let logging = config.logging.clone().with_verbose(cli.verbose);
    if let Err(e) = observability::init(&logging) {
        eprintln!("Failed to initialize observability: {e}");
        return ExitCode::FAILURE;
    }

    match run_command(cli.command, &config) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the selected command and returns its output.
fn run_command(command: Commands, config: &EngineConfig) -> promptkit::Result<String> {
    match command {
        Commands::Detect { input, json } => {
            cmd_detect(&input.read()?, OutputFormat::from_json_flag(json))
        },
        Commands::Convert { input } => Ok(cmd_convert(&input.read()?)),
        Commands::Variables { input, json } => {
            cmd_variables(&input.read()?, OutputFormat::from_json_flag(json))
        },
        Commands::Compile {
            input,
            vars,
            no_defaults,
            strict,
        } => {
            let values = parse_var_pairs(&vars)?;
            let options = if no_defaults {
                CompileOptions::without_defaults()
            } else {
                CompileOptions::default()
            };
            cmd_compile(&input.read()?, &values, options, strict)
        },
        Commands::Normalize { input } => Ok(cmd_normalize(&input.read()?)),
        Commands::Similarity { a, b, threshold } => {
            let threshold = resolve_threshold(threshold, config)?;
            Ok(cmd_similarity(&a, &b, threshold))
        },
        Commands::Fingerprint { input, hash } => Ok(cmd_fingerprint(&input.read()?, hash)),
        Commands::Dedup { path, threshold } => {
            let dedup = config
                .dedup
                .with_threshold(resolve_threshold(threshold, config)?)?;
            cmd_dedup(&path, &DuplicateReviewer::new(dedup))
        },
    }
}

/// Uses the argument when given, otherwise the configured threshold.
fn resolve_threshold(arg: Option<f64>, config: &EngineConfig) -> promptkit::Result<f64> {
    arg.map_or(Ok(config.dedup.threshold), validate_threshold)
}
