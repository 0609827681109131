use super::*;
use cricket_core::{NullSink, Player, Ratings, RatingPredictor, ScriptedPredictor};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn squad(name: &str) -> Team {
    let roster = (0..10)
        .map(|i| Player::new(format!("{name} {i}"), Ratings::uniform(0.5)).unwrap())
        .collect();
    Team::new(name, roster).unwrap()
}

fn teams(count: usize) -> Vec<Team> {
    (0..count).map(|i| squad(&format!("T{i}"))).collect()
}

fn ceil_log2(n: usize) -> u32 {
    let mut rounds = 0;
    let mut size = 1;
    while size < n {
        size *= 2;
        rounds += 1;
    }
    rounds
}

#[test]
fn bracket_size_is_validated() {
    let config = MatchConfig::default();
    assert_eq!(
        Bracket::new(teams(1), config).unwrap_err(),
        SimError::InvalidTeamCount(1)
    );
    assert_eq!(
        Bracket::new(teams(13), config).unwrap_err(),
        SimError::InvalidTeamCount(13)
    );
    assert!(Bracket::new(teams(2), config).is_ok());
    assert!(Bracket::new(teams(12), config).is_ok());
}

#[test]
fn every_bracket_size_ends_with_one_champion() {
    for count in 2..=12 {
        let bracket = Bracket::new(teams(count), MatchConfig::new(2).unwrap()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(count as u64);
        let outcome = bracket.run(&mut RatingPredictor::new(), &mut rng, &mut NullSink);

        assert_eq!(
            outcome.rounds.len() as u32,
            ceil_log2(count),
            "{count} teams should need ceil(log2) rounds"
        );
        let played: usize = outcome.rounds.iter().map(|r| r.matches.len()).sum();
        assert_eq!(played, count - 1, "each match eliminates exactly one team");
        assert_eq!(
            outcome.rounds.last().map(|r| r.advancing()),
            Some(vec![outcome.champion.name()])
        );
    }
}

#[test]
fn three_teams_pair_first_two_and_bye_the_third() {
    // Every innings is identical, so the chasing side always goes through.
    let mut bracket = Bracket::new(teams(3), MatchConfig::new(2).unwrap()).unwrap();
    let mut predictor = ScriptedPredictor::always_not_out(1);
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut events = Vec::new();

    let round1 = bracket
        .play_round(&mut predictor, &mut rng, &mut events)
        .unwrap();
    assert_eq!(round1.round, 1);
    assert_eq!(round1.bye.as_deref(), Some("T2"));
    assert_eq!(round1.matches.len(), 1);
    assert_eq!(round1.matches[0].team1, "T0");
    assert_eq!(round1.matches[0].team2, "T1");

    let remaining: Vec<_> = bracket.teams().iter().map(|t| t.name()).collect();
    assert_eq!(remaining, vec!["T2", "T1"]);

    let round2 = bracket
        .play_round(&mut predictor, &mut rng, &mut events)
        .unwrap();
    assert_eq!(round2.bye, None);
    assert_eq!(round2.matches.len(), 1);
    assert!(bracket.is_finished());
    assert_eq!(bracket.rounds_played(), 2);
    assert!(bracket
        .play_round(&mut predictor, &mut rng, &mut events)
        .is_none());
}

#[test]
fn bye_team_sits_out_and_returns_unchanged() {
    let mut bracket = Bracket::new(teams(5), MatchConfig::new(2).unwrap()).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(55);
    let mut events = Vec::new();

    let round = bracket
        .play_round(&mut RatingPredictor::new(), &mut rng, &mut events)
        .unwrap();

    assert_eq!(round.bye.as_deref(), Some("T4"));
    assert!(round
        .matches
        .iter()
        .all(|m| m.team1 != "T4" && m.team2 != "T4"));

    let bye = &bracket.teams()[0];
    assert_eq!(bye.name(), "T4");
    assert_eq!(bye.roster(), squad("T4").roster());
    assert!(bye.captain().is_none(), "a team on a bye never takes the field");

    assert!(events.contains(&SimEvent::Bye {
        round: 1,
        team: "T4".to_string()
    }));
}

#[test]
fn winners_follow_pairing_order() {
    let mut bracket = Bracket::new(teams(8), MatchConfig::new(2).unwrap()).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(8);

    let round = bracket
        .play_round(&mut RatingPredictor::new(), &mut rng, &mut NullSink)
        .unwrap();

    let pairs: Vec<_> = round
        .matches
        .iter()
        .map(|m| (m.team1.as_str(), m.team2.as_str()))
        .collect();
    assert_eq!(pairs, vec![("T0", "T1"), ("T2", "T3"), ("T4", "T5"), ("T6", "T7")]);

    let remaining: Vec<_> = bracket.teams().iter().map(|t| t.name()).collect();
    assert_eq!(remaining, round.advancing());
}

#[test]
fn tournament_end_is_announced_last() {
    let bracket = Bracket::new(teams(4), MatchConfig::new(2).unwrap()).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let mut events = Vec::new();

    let outcome = bracket.run(&mut RatingPredictor::new(), &mut rng, &mut events);

    assert_eq!(
        events.last(),
        Some(&SimEvent::TournamentEnded {
            champion: outcome.champion.name().to_string(),
            rounds: 2
        })
    );
    let rounds_started = events
        .iter()
        .filter(|e| matches!(e, SimEvent::RoundStarted { .. }))
        .count();
    assert_eq!(rounds_started, 2);
}
