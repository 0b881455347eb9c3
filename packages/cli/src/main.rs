mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    edit, init, list, new, render, search, validate, EditArgs, InitArgs, ListArgs, NewArgs,
    RenderArgs, SearchArgs, ValidateArgs,
};
use tracing_subscriber::EnvFilter;

/// Profilekit - compose profile documents for humans and their agents
#[derive(Parser, Debug)]
#[command(name = "profilekit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default profilekit.config.json
    Init(InitArgs),

    /// List catalog entries
    List(ListArgs),

    /// Search the gallery
    Search(SearchArgs),

    /// Start a new document from an archetype or template
    New(NewArgs),

    /// Apply a script of mutations to a saved document
    Edit(EditArgs),

    /// Render a saved document
    Render(RenderArgs),

    /// Check a catalog for mistakes
    Validate(ValidateArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::List(args) => list(args, &cwd),
        Command::Search(args) => search(args, &cwd),
        Command::New(args) => new(args, &cwd),
        Command::Edit(args) => edit(args, &cwd),
        Command::Render(args) => render(args, &cwd),
        Command::Validate(args) => validate(args, &cwd),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
