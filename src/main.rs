mod aggregate;
mod analysis;
mod cache;
mod commands;
mod config;
mod diagnostics;
mod dot;
mod error;
mod extract;
mod info;
mod inventory;
mod lint;
mod report;
mod scanner;
mod types;
mod watch;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "stimref",
    about = "Cross-reference Stimulus controllers and template bindings"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the project and write the JSON artifact
    Scan {
        /// Project root to scan
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Artifact output path
        #[arg(long, default_value = ".stimref.json")]
        out: PathBuf,
    },
    /// List controllers from the cache
    List {
        /// Cache file path
        #[arg(long, default_value = ".stimref.json")]
        cache: PathBuf,
    },
    /// Show DOM bindings from the cache
    Bindings {
        /// Cache file path
        #[arg(long, default_value = ".stimref.json")]
        cache: PathBuf,
        /// Only show bindings referencing this controller
        #[arg(long)]
        controller: Option<String>,
    },
    /// Run lint checks from the cache
    Lint {
        /// Cache file path
        #[arg(long, default_value = ".stimref.json")]
        cache: PathBuf,
        /// Fail (exit 1) at or above this level: none|info|warn|error
        #[arg(long, default_value = "none")]
        fail_on: String,
    },
    /// Export the cache in another format
    Export {
        /// Cache file path
        #[arg(long, default_value = ".stimref.json")]
        cache: PathBuf,
        /// Output format: json|dot
        #[arg(long)]
        format: String,
        /// Output file path
        #[arg(long)]
        out: PathBuf,
    },
    /// Scan continuously, re-scanning on filesystem changes
    Watch {
        /// Project root to scan
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Artifact output path
        #[arg(long, default_value = ".stimref.json")]
        out: PathBuf,
    },
    /// Show the comprehensive reference document
    Info {
        /// Emit JSON instead of markdown
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { root, out } => exit_from(commands::scan(&root, &out)),
        Commands::List { cache } => exit_from(commands::list(&cache)),
        Commands::Bindings { cache, controller } => {
            exit_from(commands::bindings(&cache, controller.as_deref()))
        },
        Commands::Lint { cache, fail_on } => match commands::lint(&cache, &fail_on) {
            Ok(code) => code,
            Err(e) => runtime_error(&e),
        },
        Commands::Export { cache, format, out } => {
            exit_from(commands::export(&cache, &format, &out))
        },
        Commands::Watch { root, out } => exit_from(commands::watch(&root, &out)),
        Commands::Info { json } => {
            commands::info(json);
            ExitCode::SUCCESS
        },
    }
}

/// Collapse a command result into an exit code.
fn exit_from(result: Result<(), error::Error>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => runtime_error(&e),
    }
}

/// Report a runtime error and return its exit code. Lint threshold
/// failures exit 1; everything that went wrong at runtime exits 2.
fn runtime_error(e: &error::Error) -> ExitCode {
    diagnostics::print_error(e);
    ExitCode::from(2)
}
