//! End-to-end tests for unattended matches.

use strictly_rounds::RoundPolicy;
use strictly_rounds_cli::{simulate, ConfigOverrides, MatchConfig, SimulationSummary};

fn config(rounds: u32, play_all_rounds: bool) -> MatchConfig {
    let mut config = MatchConfig::default();
    config.apply(ConfigOverrides {
        rounds: Some(rounds),
        seed: Some(2024),
        play_all_rounds,
        ..Default::default()
    });
    config
}

#[tokio::test]
async fn test_reports_are_consistent() {
    let reports = simulate(&config(7, false), 40).await.expect("Simulation failed");
    assert_eq!(reports.len(), 40);

    for report in &reports {
        let standings = report.standings();
        assert!(standings.total_wins() <= *report.rounds_played());
        assert!(*report.rounds_played() <= 7);
        assert_eq!(report.winner().is_none(), report.result().is_draw());
    }
}

#[tokio::test]
async fn test_play_all_rounds_plays_every_round() {
    let config = config(5, true);
    assert_eq!(*config.round_policy(), RoundPolicy::PlayAllRounds);

    let reports = simulate(&config, 10).await.expect("Simulation failed");
    let summary = SimulationSummary::from_reports(&reports);
    assert_eq!(*summary.rounds_played(), 50);
}

#[tokio::test]
async fn test_reports_serialize_to_json() {
    let reports = simulate(&config(3, false), 2).await.expect("Simulation failed");
    let json = serde_json::to_value(&reports).expect("Serialization failed");

    let first = &json[0];
    assert!(first["result"]["outcome"].is_string());
    assert_eq!(first["round_count"], 3);
    assert_eq!(first["standings"]["one"]["name"], "Player");
}
