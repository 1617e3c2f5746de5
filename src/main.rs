//! Chromacode - CLI
//!
//! Code-breaking puzzle game with a TUI play mode, a plain-text mode, and
//! maintenance subcommands for the saved progress.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use chromacode::{
    audio::SilentAudio,
    commands::{Guesser, run_simple, run_simulation, summarize},
    interactive::{App, run_tui},
    output::{print_progress_summary, print_simulation_result},
    session::GameSession,
    storage::ProgressStore,
};

#[derive(Parser)]
#[command(
    name = "chromacode",
    about = "Crack the four-color secret code: 10 attempts, 8 colors, 25 levels around the world",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the save file location (default: the platform data directory)
    #[arg(short = 'f', long, global = true)]
    save_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain-text play mode without the TUI
    Simple,

    /// Play batches of automated rounds and report engine statistics
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "1000")]
        rounds: usize,

        /// Guesser: 'consistent' (default) or 'random'
        #[arg(short, long, default_value = "consistent")]
        guesser: String,
    },

    /// Show the saved player progress
    Stats,

    /// Dump the saved progress as pretty JSON (backup)
    Export,

    /// Check that the saved progress decodes cleanly
    Validate,

    /// Erase all saved progress and start over
    Reset {
        /// Skip the confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

fn open_store(cli: &Cli) -> Result<ProgressStore> {
    match &cli.save_file {
        Some(path) => Ok(ProgressStore::with_path(path.clone())),
        None => Ok(ProgressStore::open()?),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chromacode=info"))
}

/// Line-mode commands log to stderr
fn init_line_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// The TUI owns the terminal, so its logs go to a file next to the save
fn init_tui_logging(store: &ProgressStore) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let dir = store.path().parent()?.to_path_buf();
    let appender = tracing_appender::rolling::never(dir, "chromacode.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = open_store(&cli)?;

    // Default to the TUI if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let _guard = init_tui_logging(&store);
            let session = GameSession::bootstrap(store, SilentAudio);
            run_tui(App::new(session))
        }
        Commands::Simple => {
            init_line_logging();
            let mut session = GameSession::bootstrap(store, SilentAudio);
            run_simple(&mut session)
        }
        Commands::Simulate { rounds, guesser } => {
            init_line_logging();
            let result = run_simulation(Guesser::from_name(&guesser), rounds);
            print_simulation_result(&result);
            Ok(())
        }
        Commands::Stats => {
            init_line_logging();
            let progress = store.load();
            print_progress_summary(&summarize(&progress));
            Ok(())
        }
        Commands::Export => {
            init_line_logging();
            match store.export_snapshot() {
                Some(json) => {
                    println!("{json}");
                    Ok(())
                }
                None => anyhow::bail!("no valid saved progress to export"),
            }
        }
        Commands::Validate => {
            init_line_logging();
            if store.validate() {
                println!("Saved progress is valid.");
                Ok(())
            } else {
                anyhow::bail!("saved progress is missing or corrupt")
            }
        }
        Commands::Reset { yes } => {
            init_line_logging();
            if yes {
                store.reset();
                println!("Progress reset.");
            } else {
                println!("This erases all saved progress. Re-run with --yes to confirm.");
            }
            Ok(())
        }
    }
}
