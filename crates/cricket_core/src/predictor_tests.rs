use super::*;
use crate::field::{Field, FieldSize};
use crate::player::Ratings;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn player(batting: f64, bowling: f64) -> Player {
    Player::new("p", Ratings::new(bowling, batting, 0.5, 0.5, 0.5)).unwrap()
}

#[test]
fn equal_scores_are_not_out() {
    assert_eq!(resolve(0.25, 0.25), Verdict::NotOut);
    assert_eq!(resolve(0.0, 0.0), Verdict::NotOut);
}

#[test]
fn only_strictly_greater_batting_score_is_out() {
    assert_eq!(resolve(0.26, 0.25), Verdict::Out);
    assert_eq!(resolve(0.24, 0.25), Verdict::NotOut);
}

#[test]
fn dead_pitch_never_produces_a_wicket() {
    // Both scores collapse to zero, which is a tie.
    let field = Field::new(FieldSize::Small, 0.5, 0.0, 0.5).unwrap();
    let batter = player(1.0, 0.0);
    let bowler = player(0.0, 1.0);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut model = RatingPredictor::new();
    for _ in 0..500 {
        assert_eq!(model.predict(&batter, &bowler, &field, &mut rng), Verdict::NotOut);
    }
}

#[test]
fn bowler_without_skill_loses_to_any_positive_draw() {
    let field = Field::default();
    let batter = player(1.0, 0.0);
    let bowler = player(0.0, 0.0);
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut model = RatingPredictor::new();

    let outs = (0..1000)
        .filter(|_| model.predict(&batter, &bowler, &field, &mut rng) == Verdict::Out)
        .count();
    // Only a draw of exactly 0.0 for the batter avoids the wicket.
    assert!(outs > 990, "expected nearly every ball out, got {outs}");
}

#[test]
fn default_runs_stay_within_a_single_ball_range() {
    let field = Field::default();
    let p = player(0.5, 0.5);
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut model = RatingPredictor::new();
    let mut seen = [false; 7];
    for _ in 0..2000 {
        let runs = model.runs(&p, &p, &field, &mut rng);
        assert!(runs <= MAX_RUNS_PER_BALL);
        seen[runs as usize] = true;
    }
    assert!(seen.iter().all(|&s| s), "every value 0..=6 should appear");
}

#[test]
fn scripted_predictor_cycles_its_script() {
    let field = Field::default();
    let p = player(0.5, 0.5);
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut model = ScriptedPredictor::new(vec![Verdict::NotOut, Verdict::Out], 3);

    let calls: Vec<_> = (0..4)
        .map(|_| model.predict(&p, &p, &field, &mut rng))
        .collect();
    assert_eq!(
        calls,
        vec![Verdict::NotOut, Verdict::Out, Verdict::NotOut, Verdict::Out]
    );
    assert_eq!(model.runs(&p, &p, &field, &mut rng), 3);
    assert_eq!(model.deliveries(), 4);
}

#[test]
fn scripted_runs_are_capped() {
    let mut model = ScriptedPredictor::always_not_out(9);
    let field = Field::default();
    let p = player(0.5, 0.5);
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(model.runs(&p, &p, &field, &mut rng), MAX_RUNS_PER_BALL);
}
