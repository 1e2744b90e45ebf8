mod compose;
mod config;
mod db;
mod ops;
mod runner;
mod volume;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::DemoConfig;
use runner::SystemRunner;

#[derive(Parser)]
#[command(name = "pgvolume")]
#[command(version)]
#[command(about = "Data persistence of a PostgreSQL database through a Docker volume")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Start PostgreSQL container
    Start,
    /// Stop and remove container (volume persists)
    Stop,
    /// Create sample table and data
    CreateData,
    /// View current data in database
    ViewData,
    /// Show Docker volume details
    VolumeInfo,
    /// Seed, recreate the container and read the data back
    Demo,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    println!("=== PostgreSQL Docker Volume Persistence Demo ===");
    println!();

    run(cli.command, &SystemRunner, &DemoConfig::default())
}

fn run<R: runner::CommandRunner>(command: Commands, runner: &R, config: &DemoConfig) -> Result<()> {
    match command {
        Commands::Start => ops::start(runner, config),
        Commands::Stop => ops::stop(runner, config),
        Commands::CreateData => ops::create_data(runner, config),
        Commands::ViewData => ops::view_data(runner, config),
        Commands::VolumeInfo => ops::volume_info(runner, config).map(|_| ()),
        Commands::Demo => ops::demo(runner, config),
    }
}
