use super::*;
use cricket_core::{Decision, Field, InningsSummary};

fn innings(team: &str, runs: u32, wickets: u32) -> InningsSummary {
    InningsSummary {
        batting_team: team.to_string(),
        runs,
        wickets,
        overs: 2,
        balls: 12,
        all_out: false,
    }
}

fn report(team1: &str, team2: &str, runs1: u32, runs2: u32) -> MatchReport {
    let winner = if runs1 > runs2 { team1 } else { team2 };
    MatchReport {
        team1: team1.to_string(),
        team2: team2.to_string(),
        captain1: format!("{team1} captain"),
        captain2: format!("{team2} captain"),
        field: Field::default(),
        first_innings: innings(team1, runs1, 3),
        second_innings: innings(team2, runs2, 4),
        winner: winner.to_string(),
        winning_score: runs1.max(runs2),
        decision: Decision::Runs,
    }
}

fn sample() -> TournamentResults {
    let config = TournamentConfig {
        team_count: 3,
        total_overs: 2,
        ..Default::default()
    };
    let rounds = vec![
        RoundReport {
            round: 1,
            bye: Some("Kenya".to_string()),
            matches: vec![report("India", "Nepal", 40, 31)],
        },
        RoundReport {
            round: 2,
            bye: None,
            matches: vec![report("Kenya", "India", 22, 35)],
        },
    ];
    TournamentResults::new(
        config,
        vec!["India".into(), "Nepal".into(), "Kenya".into()],
        rounds,
        "India",
    )
}

#[test]
fn bye_leads_the_advancing_teams() {
    let results = sample();
    assert_eq!(results.rounds[0].advancing(), vec!["Kenya", "India"]);
    assert_eq!(results.rounds[1].advancing(), vec!["India"]);
    assert_eq!(results.match_count(), 2);
}

#[test]
fn report_lists_every_match_and_the_champion() {
    let text = sample().generate_report();
    assert!(text.contains("Round 1:"));
    assert!(text.contains("Round 2:"));
    assert!(text.contains("40/3"));
    assert!(text.contains("Kenya advances on a bye"));
    assert!(text.trim_end().ends_with("Champion: India"));
}

#[test]
fn saved_results_load_back() {
    let path = std::env::temp_dir().join(format!("cricket-results-{}.json", std::process::id()));
    let results = sample();

    results.save(&path).unwrap();
    let loaded = TournamentResults::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, results);
}

#[test]
fn loading_garbage_is_a_json_error() {
    let path = std::env::temp_dir().join(format!("cricket-garbage-{}.json", std::process::id()));
    std::fs::write(&path, "{ not json").unwrap();
    let err = TournamentResults::load(&path).unwrap_err();
    std::fs::remove_file(&path).ok();

    assert!(matches!(err, ResultsError::Json(_)));
}
