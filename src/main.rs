//! Wordle Game - CLI
//!
//! Play Wordle in the terminal, either in the TUI or in a plain line mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wordle_game::{
    commands::{check_guess, run_simple},
    game::{Game, Statistics, WordSource},
    output::{formatters::guess_tiles, print_statistics},
    storage::{JsonFileStore, MemoryStore, StatsStore},
    wordlists::Vocabulary,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden 5-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default, built-in words) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for secret word selection (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// JSON file used to keep statistics between runs
    #[arg(long, global = true, env = "WORDLE_STATS_FILE")]
    stats_file: Option<PathBuf>,

    /// Log engine events at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,

    /// Show saved statistics
    Stats,

    /// Show the feedback a guess would get against a secret
    Check {
        /// The secret word
        secret: String,

        /// The guess to evaluate
        guess: String,
    },
}

/// Initialise logging
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` selects debug and the
/// default is warn. Without a log file, the TUI runs without logging so
/// nothing is written over the screen.
fn init_logging(verbose: bool, log_file: Option<&Path>, tui: bool) -> Result<()> {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    match log_file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        None if tui => {}
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .without_time()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    }

    Ok(())
}

/// Load the vocabulary based on the -w flag
fn load_vocabulary(wordlist_mode: &str) -> Result<Vocabulary> {
    match wordlist_mode {
        "embedded" => Ok(Vocabulary::embedded()),
        path => Vocabulary::from_file(path)
            .with_context(|| format!("cannot read word list {path}")),
    }
}

fn open_store(stats_file: Option<&Path>) -> Box<dyn StatsStore> {
    match stats_file {
        Some(path) => Box::new(JsonFileStore::new(path)),
        None => Box::new(MemoryStore::new()),
    }
}

fn new_game(cli: &Cli) -> Result<Game<Box<dyn StatsStore>>> {
    let vocabulary = load_vocabulary(&cli.wordlist)?;
    let source = match cli.seed {
        Some(seed) => WordSource::seeded(vocabulary, seed),
        None => WordSource::from_os_rng(vocabulary),
    };

    let game = Game::new(source, open_store(cli.stats_file.as_deref()))?;
    Ok(game)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let play = Commands::Play;
    let command = cli.command.as_ref().unwrap_or(&play);
    init_logging(
        cli.verbose,
        cli.log_file.as_deref(),
        matches!(command, Commands::Play),
    )?;

    match command {
        Commands::Play => run_play_command(&cli),
        Commands::Simple => run_simple_command(&cli),
        Commands::Stats => run_stats_command(cli.stats_file.as_deref()),
        Commands::Check { secret, guess } => run_check_command(secret, guess),
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let game = new_game(cli)?;
    run_tui(App::new(game))
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let mut game = new_game(cli)?;
    run_simple(&mut game)
}

fn run_stats_command(stats_file: Option<&Path>) -> Result<()> {
    let Some(path) = stats_file else {
        println!("No statistics file configured (use --stats-file or WORDLE_STATS_FILE).");
        return Ok(());
    };

    let statistics = JsonFileStore::new(path)
        .load()?
        .unwrap_or_else(Statistics::new);
    print_statistics(&statistics.snapshot());
    Ok(())
}

fn run_check_command(secret: &str, guess: &str) -> Result<()> {
    let result = check_guess(secret, guess)?;

    println!(
        "\n  {}  {}\n",
        guess_tiles(&result.guess, result.feedback),
        result.feedback.to_emoji()
    );
    println!("  {} against {}: {}", result.guess, result.secret, result.feedback);
    Ok(())
}
