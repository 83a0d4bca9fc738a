//! intervue CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "intervue", version, about = "Staged interview practice in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a full interview session
    Run {
        /// Path to a catalog .toml (defaults to the built-in standard catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Answer script .toml for a non-interactive run
        #[arg(long)]
        script: Option<PathBuf>,

        /// Seed for the simulated test run of coding challenges
        #[arg(long)]
        seed: Option<u64>,

        /// Artificial delay of the simulated test run, in milliseconds
        #[arg(long, default_value = "500")]
        run_delay_ms: u64,

        /// Output directory (overrides the config)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: json, csv, html, all
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Validate catalog TOML files
    Validate {
        /// Path to a catalog file or directory
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Re-render a saved report JSON
    Report {
        /// Path to a report JSON produced by `intervue run`
        #[arg(long)]
        input: PathBuf,

        /// Output format: csv, html, all
        #[arg(long, default_value = "all")]
        format: String,

        /// Output directory
        #[arg(long, default_value = ".")]
        output: PathBuf,
    },

    /// Create starter config and catalog files
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("intervue=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            catalog,
            config,
            script,
            seed,
            run_delay_ms,
            output,
            format,
        } => {
            commands::run::execute(
                catalog,
                config,
                script,
                seed,
                run_delay_ms,
                output,
                format,
            )
            .await
        }
        Commands::Validate { catalog } => commands::validate::execute(catalog),
        Commands::Report {
            input,
            format,
            output,
        } => commands::report::execute(input, format, output),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
