mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "facequest", about = "Course authoring tools for FaceQuest")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a course file's structure
    Info(commands::info::InfoArgs),
    /// Check a course file for authoring mistakes
    Validate(commands::validate::ValidateArgs),
    /// Evaluate a displacement pair against the similarity scorer
    Score(commands::score::ScoreArgs),
    /// Emit the builtin course as TOML
    Export(commands::export::ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Validate(args) => commands::validate::run(args),
        Commands::Score(args) => commands::score::run(args),
        Commands::Export(args) => commands::export::run(args),
    }
}
