//! Formic CLI - interactive shell for the colony simulation.

mod commands;
mod config;

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::shell::{OutputFormat, Shell};
use config::Config;

#[derive(Parser)]
#[command(name = "formic")]
#[command(author, version, about = "Formic - an insect colony simulation", long_about = None)]
struct Cli {
    /// Config file (default: formic.toml in this or a parent directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read commands from a file instead of stdin
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Print replies as JSON, one object per line
    #[arg(long)]
    json: bool,

    /// Start without the seed colonies
    #[arg(long)]
    no_seed: bool,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.print_config {
        print!("{}", Config::default_toml()?);
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;
    let mut registry = config.build_registry(!cli.no_seed);
    tracing::info!(colonies = registry.len(), "simulation ready");

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut shell = Shell::new(&mut registry).with_format(format);
    let stdout = io::stdout().lock();

    match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script: {}", path.display()))?;
            shell.run(BufReader::new(file), stdout)?;
        }
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                shell = shell.with_prompt(config.shell.prompt.clone());
            }
            shell.run(stdin.lock(), stdout)?;
        }
    }

    Ok(())
}
