//! One batting innings, played ball by ball.

use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::events::{BallOutcome, EventSink, SimEvent};
use crate::field::Field;
use crate::scoreboard::Scoreboard;
use crate::team::Team;
use crate::{OutcomePredictor, Verdict, MAX_RUNS_PER_BALL};

/// Deliveries in an over.
pub const BALLS_PER_OVER: u32 = 6;

/// Final state of an innings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InningsSummary {
    pub batting_team: String,
    pub runs: u32,
    pub wickets: u32,
    /// Completed overs; a partial final over is not counted.
    pub overs: u32,
    /// Deliveries bowled, including those of a partial final over.
    pub balls: u32,
    /// Whether the innings ended because the batting order ran out.
    pub all_out: bool,
}

/// A single innings: `batting` bats against `bowling` at `field`.
///
/// The innings stops after `total_overs` completed overs or when the batting
/// order is exhausted, whichever comes first.
pub struct Innings<'a> {
    batting: &'a mut Team,
    bowling: &'a Team,
    field: &'a Field,
    total_overs: u32,
}

impl<'a> Innings<'a> {
    pub fn new(
        batting: &'a mut Team,
        bowling: &'a Team,
        field: &'a Field,
        total_overs: u32,
    ) -> Self {
        Self {
            batting,
            bowling,
            field,
            total_overs,
        }
    }

    /// Play the innings to completion.
    ///
    /// `scoreboard` is expected to be zeroed; the caller owns it and reads
    /// the same figures back from the returned summary. The batting order is
    /// consumed as it stands, so reset it beforehand.
    pub fn play(
        self,
        scoreboard: &mut Scoreboard,
        predictor: &mut dyn OutcomePredictor,
        rng: &mut dyn RngCore,
        sink: &mut dyn EventSink,
    ) -> InningsSummary {
        let mut balls = 0;
        let mut all_out = false;

        let Some(mut striker) = self.batting.next_batter() else {
            return self.finish(scoreboard, balls, true, sink);
        };
        let mut bowler = self.bowling.choose_bowler(rng);

        sink.emit(SimEvent::InningsStarted {
            batting: self.batting.name().to_string(),
            bowling: self.bowling.name().to_string(),
            opener: self.batting.player(striker).name().to_string(),
            bowler: self.bowling.player(bowler).name().to_string(),
        });

        let mut ball_in_over = 0;
        while scoreboard.overs < self.total_overs {
            ball_in_over += 1;
            balls += 1;

            let batter = self.batting.player(striker);
            let bowler_player = self.bowling.player(bowler);
            let outcome = match predictor.predict(batter, bowler_player, self.field, rng) {
                Verdict::Out => {
                    scoreboard.record_wicket();
                    BallOutcome::Out
                }
                Verdict::NotOut => {
                    let runs = predictor.runs(batter, bowler_player, self.field, rng);
                    debug_assert!(
                        runs <= MAX_RUNS_PER_BALL,
                        "{} scored {runs} off one ball",
                        predictor.name()
                    );
                    let runs = runs.min(MAX_RUNS_PER_BALL);
                    scoreboard.add_runs(runs);
                    BallOutcome::Runs(runs)
                }
            };

            trace!(
                over = scoreboard.overs,
                ball = ball_in_over,
                batter = batter.name(),
                bowler = bowler_player.name(),
                ?outcome,
                "delivery"
            );
            sink.emit(SimEvent::Ball {
                ball: ball_in_over,
                batter: batter.name().to_string(),
                bowler: bowler_player.name().to_string(),
                outcome,
                score: *scoreboard,
            });

            if outcome == BallOutcome::Out {
                match self.batting.next_batter() {
                    Some(next) => {
                        striker = next;
                        sink.emit(SimEvent::NewBatter {
                            name: self.batting.player(striker).name().to_string(),
                            score: *scoreboard,
                        });
                    }
                    None => all_out = true,
                }
            }

            // A wicket on the sixth ball still completes the over.
            if ball_in_over == BALLS_PER_OVER {
                scoreboard.complete_over();
                ball_in_over = 0;
                let next_bowler = if !all_out && scoreboard.overs < self.total_overs {
                    bowler = self.bowling.choose_bowler(rng);
                    Some(self.bowling.player(bowler).name().to_string())
                } else {
                    None
                };
                sink.emit(SimEvent::OverCompleted {
                    over: scoreboard.overs,
                    score: *scoreboard,
                    next_bowler,
                });
            }

            if all_out {
                break;
            }
        }

        self.finish(scoreboard, balls, all_out, sink)
    }

    fn finish(
        &self,
        scoreboard: &Scoreboard,
        balls: u32,
        all_out: bool,
        sink: &mut dyn EventSink,
    ) -> InningsSummary {
        let summary = InningsSummary {
            batting_team: self.batting.name().to_string(),
            runs: scoreboard.runs,
            wickets: scoreboard.wickets,
            overs: scoreboard.overs,
            balls,
            all_out,
        };
        debug!(
            team = %summary.batting_team,
            runs = summary.runs,
            wickets = summary.wickets,
            overs = summary.overs,
            all_out,
            "innings complete"
        );
        sink.emit(SimEvent::InningsEnded(summary.clone()));
        summary
    }
}

#[cfg(test)]
#[path = "innings_tests.rs"]
mod innings_tests;
