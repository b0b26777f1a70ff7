//! Command-line interface for strictly_rounds.

use clap::{Parser, Subcommand};

/// Strictly Rounds - multi-round tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_rounds")]
#[command(about = "Multi-round tic-tac-toe against people or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive match
    Play {
        /// Path to the match config file (optional)
        #[arg(short, long, default_value = "strictly_rounds.toml")]
        config: std::path::PathBuf,

        /// Number of rounds (3, 5 or 7)
        #[arg(short, long)]
        rounds: Option<u32>,

        /// Pause before each computer move, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for computer players
        #[arg(long)]
        seed: Option<u64>,

        /// Name of player one
        #[arg(long)]
        player_one: Option<String>,

        /// Name of player two
        #[arg(long)]
        player_two: Option<String>,

        /// Let the computer play as player one
        #[arg(long)]
        computer_one: bool,

        /// Let the computer play as player two
        #[arg(long)]
        computer_two: bool,

        /// Keep playing after the match is decided
        #[arg(long)]
        play_all_rounds: bool,
    },

    /// Run computer-vs-computer matches and print a tally
    Simulate {
        /// Path to the match config file (optional)
        #[arg(short, long, default_value = "strictly_rounds.toml")]
        config: std::path::PathBuf,

        /// Number of matches to play
        #[arg(short, long, default_value = "100")]
        matches: u32,

        /// Number of rounds (3, 5 or 7)
        #[arg(short, long)]
        rounds: Option<u32>,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Keep playing after a match is decided
        #[arg(long)]
        play_all_rounds: bool,

        /// Print match reports as JSON instead of a tally
        #[arg(long)]
        json: bool,
    },
}
