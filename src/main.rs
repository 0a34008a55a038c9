//! `doctab` CLI - extract table cells from a Google Doc

mod cmd;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use doctab::OutputFormat;

#[derive(Parser)]
#[command(name = "doctab")]
#[command(about = "Extract table cells from a Google Doc as coordinate-tagged records")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
pub struct GlobalArgs {
    /// Service-account key file (JSON)
    #[arg(short, long, global = true)]
    pub credentials: Option<PathBuf>,

    /// Use this bearer token instead of a service-account key
    #[arg(long, global = true)]
    pub access_token: Option<String>,

    /// Docs API base URL
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// Config file (default: ~/.config/doctab/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every table cell as an (x, y, char) record
    Tables {
        /// Document URL or id
        document: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Records)]
        format: OutputFormat,
    },

    /// Render the first coordinate table as a character grid
    Grid {
        /// Document URL or id
        document: Option<String>,
    },

    /// Resolve a document URL to its id
    DocId {
        /// Document URL or id
        input: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    let result = match cli.command {
        Commands::Tables { document, format } => {
            cmd::tables::cmd_tables(&cli.global, document, format).await
        }
        Commands::Grid { document } => cmd::grid::cmd_grid(&cli.global, document).await,
        Commands::DocId { input } => cmd::doc_id::cmd_doc_id(&input),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("extraction failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "doctab=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
