#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use command::{
    CommandStrategy, InfoInput, InfoStrategy, InitStrategy, SearchInput, SearchStrategy,
    VersionStrategy,
};
use dashlink_config::Config;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "dashlink")]
#[command(about = "Build commands that open Dash or Zeal on a search", long_about = None)]
struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (default: ~/dashlink/config.json)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the shell command that searches the documentation browser
    Search {
        /// Text to search for
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Docset to search in, repeatable
        #[arg(short = 'd', long = "docset", value_name = "NAME")]
        docsets: Vec<String>,

        /// Take docsets from the config entry for this language id
        #[arg(short, long)]
        language: Option<String>,

        /// Search all docsets
        #[arg(long, conflicts_with_all = ["docsets", "language"])]
        all: bool,

        /// Only search the given docsets, not related ones
        #[arg(long)]
        exact: bool,

        /// Target platform id (darwin, linux, win32); defaults to the host
        #[arg(short, long)]
        platform: Option<String>,

        /// Print command, program and arguments as JSON
        #[arg(long)]
        json: bool,
    },
    /// Initialize configuration
    Init,
    /// Show resolved configuration
    Info {
        /// Target platform id; defaults to the host
        #[arg(short, long)]
        platform: Option<String>,
    },
    /// Show version
    Version,
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let config_path = Config::resolve_path(cli.config.as_deref())?;

    match cli.command {
        Commands::Search {
            query,
            docsets,
            language,
            all,
            exact,
            platform,
            json,
        } => SearchStrategy.execute(SearchInput {
            query: query.join(" "),
            docsets,
            language,
            all,
            exact,
            platform,
            json,
            config_path,
        }),
        Commands::Init => InitStrategy.execute(config_path),
        Commands::Info { platform } => InfoStrategy.execute(InfoInput {
            config_path,
            platform,
        }),
        Commands::Version => VersionStrategy.execute(()),
    }
}
