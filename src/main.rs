/// Main entry point for the habitkeep CLI
///
/// This file sets up logging, parses command line arguments, resolves the
/// data directory, and dispatches to the command handlers in `cli`.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use habitkeep::HabitApp;

mod cli;

/// Get the default data directory with a fallback strategy
///
/// Tries the user's home, data, and config directories in order, then the
/// working directory, and finally a temporary directory.
fn get_default_data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let potential_paths = [
        dirs::home_dir().map(|mut p| {
            p.push(".habitkeep");
            p
        }),
        dirs::data_dir().map(|mut p| {
            p.push("habitkeep");
            p
        }),
        dirs::config_dir().map(|mut p| {
            p.push("habitkeep");
            p
        }),
        std::env::current_dir().ok().map(|mut p| {
            p.push(".habitkeep");
            p
        }),
    ];

    for potential_path in potential_paths.iter().flatten() {
        if std::fs::create_dir_all(potential_path).is_ok() {
            // Verify the directory is actually writable before settling on it
            let test_file = potential_path.join(".test_write");
            if std::fs::write(&test_file, "test").is_ok() {
                let _ = std::fs::remove_file(&test_file);
                return Ok(potential_path.clone());
            }
        }
    }

    let mut temp_path = std::env::temp_dir();
    temp_path.push("habitkeep");
    std::fs::create_dir_all(&temp_path)?;

    tracing::warn!("Using temporary directory for habit data: {}", temp_path.display());
    Ok(temp_path)
}

/// Command line arguments for habitkeep
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the persisted habit data
    /// If not provided, uses a default location in the user's home directory
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: cli::Command,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habitkeep={}", log_level))
        .with_writer(std::io::stderr) // keep stdout clean for command output
        .init();

    let data_dir = match args.data_dir {
        Some(path) => {
            std::fs::create_dir_all(&path)?;
            path
        }
        None => get_default_data_dir()?,
    };

    info!("Using habit data at: {}", data_dir.display());

    let mut app = HabitApp::open(data_dir).await?;
    cli::run(&mut app, args.command).await?;

    Ok(())
}
