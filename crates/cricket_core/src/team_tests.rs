use super::*;
use crate::player::Ratings;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn squad(name: &str, size: usize) -> Team {
    let roster = (0..size)
        .map(|i| Player::new(format!("{name} {i}"), Ratings::uniform(0.5)).unwrap())
        .collect();
    Team::new(name, roster).unwrap()
}

#[test]
fn empty_roster_is_rejected() {
    let err = Team::new("Nobody", Vec::new()).unwrap_err();
    assert_eq!(err, SimError::EmptyRoster("Nobody".to_string()));
}

#[test]
fn batting_order_is_consumed_front_to_back() {
    let mut team = squad("Openers", 3);
    assert_eq!(team.next_batter(), Some(0));
    assert_eq!(team.next_batter(), Some(1));
    assert_eq!(team.next_batter(), Some(2));
    assert_eq!(team.next_batter(), None);
    assert_eq!(team.next_batter(), None);
}

#[test]
fn reset_batting_order_restores_full_roster() {
    let mut team = squad("Reset", 4);
    team.next_batter();
    team.next_batter();
    assert_eq!(team.remaining_batters(), 2);

    team.reset_batting_order();
    assert_eq!(team.remaining_batters(), 4);
    assert_eq!(team.next_batter(), Some(0));
}

#[test]
fn chosen_bowler_comes_from_roster() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let team = squad("Bowlers", 5);
    for _ in 0..100 {
        assert!(team.choose_bowler(&mut rng) < 5);
    }
}

#[test]
fn captain_is_a_roster_member() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut team = squad("Leaders", 10);
    assert!(team.captain().is_none());

    let name = team.select_captain(&mut rng).name().to_string();
    assert!(team.roster().iter().any(|p| p.name() == name));
    assert_eq!(team.captain().map(|p| p.name()), Some(name.as_str()));
}
