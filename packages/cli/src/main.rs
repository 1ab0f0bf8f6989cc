mod commands;
mod config;
mod manifest;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{generate, init, inspect, GenerateArgs, InitArgs, InspectArgs};
use tracing_subscriber::EnvFilter;

/// Autoface CLI - synthesize C# interfaces from a type's public surface
#[derive(Parser, Debug)]
#[command(name = "autoface")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log classification decisions
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new Autoface project
    Init(InitArgs),

    /// Generate interfaces for every request in the project's manifests
    Generate(GenerateArgs),

    /// Print the classified model for a type as JSON
    Inspect(InspectArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| match cli.command {
            Command::Init(args) => init(args, &cwd),
            Command::Generate(args) => generate(args, &cwd),
            Command::Inspect(args) => inspect(args, &cwd),
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
