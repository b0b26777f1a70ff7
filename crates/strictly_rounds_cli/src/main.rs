//! Strictly Rounds - terminal tic-tac-toe matches.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use strictly_rounds::{MatchEngine, PlayerId};
use strictly_rounds_cli::cli::{Cli, Command};
use strictly_rounds_cli::{
    controller_for, shared_input, simulate, spawn_line_reader, ConfigOverrides, MatchConfig,
    Orchestrator, SimulationSummary,
};
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they stay out of the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play {
            config,
            rounds,
            delay_ms,
            seed,
            player_one,
            player_two,
            computer_one,
            computer_two,
            play_all_rounds,
        } => {
            let overrides = ConfigOverrides {
                rounds,
                computer_move_delay_ms: delay_ms,
                seed,
                player_one,
                player_two,
                computer_one,
                computer_two,
                play_all_rounds,
            };
            run_play(config, overrides).await
        }
        Command::Simulate {
            config,
            matches,
            rounds,
            seed,
            play_all_rounds,
            json,
        } => {
            let overrides = ConfigOverrides {
                rounds,
                seed,
                play_all_rounds,
                ..Default::default()
            };
            run_simulate(config, overrides, matches, json).await
        }
    }
}

/// Run an interactive match on stdin/stdout
#[instrument(skip(overrides))]
async fn run_play(config_path: PathBuf, overrides: ConfigOverrides) -> Result<()> {
    let mut config = MatchConfig::load_or_default(&config_path)?;
    config.apply(overrides);
    config.validate()?;

    let engine = MatchEngine::start(
        config.player_one().clone(),
        config.player_two().clone(),
        *config.rounds(),
    )?
    .with_round_policy(*config.round_policy());

    let has_human = [PlayerId::One, PlayerId::Two]
        .into_iter()
        .filter_map(|id| engine.player(id))
        .any(|player| !player.is_computer());
    let input = if has_human {
        spawn_line_reader(std::io::BufReader::new(std::io::stdin()))
    } else {
        // Nobody reads from it; the sender is dropped right away
        shared_input(mpsc::unbounded_channel().1)
    };
    let delay = config.computer_move_delay();
    // Distinct seeds keep two seeded computers from mirroring each other
    let one = controller_for(config.player_one(), &input, delay, *config.seed());
    let two = controller_for(
        config.player_two(),
        &input,
        delay,
        config.seed().map(|seed| seed.wrapping_add(1)),
    );

    let mut orchestrator = Orchestrator::new(engine, one, two, std::io::stdout());
    let report = orchestrator.run().await?;
    info!(result = %report.result(), "Match complete");
    Ok(())
}

/// Run unattended matches and print a tally or JSON reports
#[instrument(skip(overrides))]
async fn run_simulate(
    config_path: PathBuf,
    overrides: ConfigOverrides,
    matches: u32,
    json: bool,
) -> Result<()> {
    let mut config = MatchConfig::load_or_default(&config_path)?;
    config.apply(overrides);

    let reports = simulate(&config, matches).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        println!("{}", SimulationSummary::from_reports(&reports));
    }
    Ok(())
}
