mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cellview", about = "Microscopy image and well summary viewer")]
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
    /// Show two images side by side with linked pan/zoom
    Pair(commands::pair::PairArgs),
    /// Segment one well and show each image beside its labels
    Well(commands::well::WellArgs),
    /// Draw a bubble summary of a quantification table
    Bubble(commands::bubble::BubbleArgs),
    /// Print or save the default viewer config
    Config(commands::config::ConfigArgs),
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
        Commands::Pair(args) => commands::pair::run(args),
        Commands::Well(args) => commands::well::run(args),
        Commands::Bubble(args) => commands::bubble::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
