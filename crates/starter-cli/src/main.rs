//! starter CLI — bootstrap a new service project from a template tree.
//!
//! `starter init <name>` creates `<base-dir>/<name>`, fills it with the template
//! tree (rendering `.tpl` files with the project name) and initializes an empty
//! git repository in it.

mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "starter",
    about = "starter is a CLI tool to initialize a service project from scratch",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to starter.config.json (default: ./starter.config.json, if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new project
    Init {
        /// Fully-qualified project name, e.g. github.com/acme/my-app
        name: String,

        /// Directory the project name is resolved under
        #[arg(long, env = "STARTER_BASE_DIR")]
        base_dir: Option<PathBuf>,

        /// Use the template tree in this directory instead of the built-in one
        #[arg(long)]
        templates: Option<PathBuf>,

        /// Initialize the repository with the `git` binary
        #[arg(long)]
        git_cli: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Init {
            name,
            base_dir,
            templates,
            git_cli,
        } => commands::init::run(
            &name,
            commands::init::InitArgs {
                config: cli.config,
                base_dir,
                templates,
                git_cli,
            },
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
