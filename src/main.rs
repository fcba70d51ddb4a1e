//! nested-roots: find every nested Subversion working copy beneath a directory

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use nested_roots::commands::{handle_scan_command, ScanArgs};

#[derive(Parser)]
#[command(name = "nested-roots")]
#[command(about = "Find every nested Subversion working copy beneath a directory")]
#[command(version)]
struct Cli {
    /// Directory to scan (defaults to the current directory)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Do not expand directories deeper than this below the root
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Skip paths matching this gitignore-style pattern (repeatable)
    #[arg(long, value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Path to the svn client
    #[arg(long, value_name = "PATH")]
    svn: Option<String>,

    /// Hide the progress spinner
    #[arg(long)]
    no_progress: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) -> Result<()> {
    let default_level = match verbose {
        0 => "nested_roots=warn",
        1 => "nested_roots=debug",
        _ => "nested_roots=trace",
    };
    let filter = if verbose > 0 {
        EnvFilter::new(default_level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let exit = handle_scan_command(ScanArgs {
        root: cli.root,
        json: cli.json,
        max_depth: cli.max_depth,
        exclude: cli.exclude,
        svn_binary: cli.svn,
        progress: !cli.no_progress,
    })
    .await?;

    if exit.code() != 0 {
        std::process::exit(exit.code());
    }
    Ok(())
}
