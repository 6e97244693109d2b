//! doctree: rebuild and inspect the section tree of parsed documents.
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, ValueEnum};
use doctree::{config, input, render, BuildOptions};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, ValueEnum)]
enum Output {
    /// Box-drawing outline of each tree
    Tree,
    /// Content documents as pretty JSON, ready for an embedding pipeline
    Documents,
}

#[derive(Parser)]
#[command(name = "doctree")]
#[command(about = "Rebuild the section hierarchy of parsed documents", long_about = None)]
struct Args {
    /// Element stream files (JSON array or JSON lines) or directories holding them
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<PathBuf>,

    /// File extensions to match when scanning directories
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// What to print for each document
    #[arg(long, short = 'o', value_enum, default_value_t = Output::Tree)]
    output: Output,

    /// Separator placed between titles in each title path
    #[arg(long, value_name = "SEP")]
    separator: Option<String>,

    /// Log each placed heading
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(args) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            error!(failed, "some files could not be processed");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Process every document, returning how many of them failed.
fn run(args: Args) -> doctree::Result<usize> {
    let mut cfg = config::Config::load();

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }
    if let Some(separator) = args.separator {
        cfg.title_separator = separator;
    }

    let documents = input::find_documents(args.paths, &cfg.file_extensions)?;
    if documents.is_empty() {
        eprintln!("No matching files found");
        return Ok(0);
    }

    let options = BuildOptions::from(&cfg);
    let mut all_documents = Vec::new();
    let mut failed = 0;

    for path in &documents {
        let output = match input::build_file(path, &options) {
            Ok(output) => output,
            Err(e) => {
                error!("{e}");
                failed += 1;
                continue;
            }
        };

        match args.output {
            Output::Tree => {
                if documents.len() > 1 {
                    println!("{}", path.display());
                }
                print!("{}", render::outline(&output.tree));
            }
            Output::Documents => {
                all_documents.extend(output.tree.to_content_documents(cfg.skip_empty));
            }
        }
    }

    if matches!(args.output, Output::Documents) {
        let json =
            serde_json::to_string_pretty(&all_documents).map_err(doctree::Error::Serialize)?;
        println!("{json}");
    }

    Ok(failed)
}
