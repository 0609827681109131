//! Text commentary for the CLI.

use cricket_core::{BallOutcome, EventSink, SimEvent};

/// Prints the event feed as it arrives.
pub struct Commentator {
    /// Skip ball-by-ball lines and keep only the summaries
    quiet: bool,
}

impl Commentator {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    fn describe(&self, event: &SimEvent) -> Option<String> {
        let line = match event {
            SimEvent::RoundStarted { round, teams } => {
                format!("\n=========== Round {round} ===========\n{}", teams.join(", "))
            }
            SimEvent::Bye { team, .. } => format!("{team} advances on a bye"),
            SimEvent::MatchStarted {
                team1,
                team2,
                captain1,
                captain2,
                total_overs,
                field,
            } => format!(
                "\n--------- Game Information ---------\n\
                 {team1} Vs {team2}\n\
                 Captain 1 : {captain1}, Captain 2 : {captain2}\n\
                 Over : {total_overs}\n\
                 Field : {} (pitch {:.1}, fans {:.1}, home {:.1})",
                field.size, field.pitch_conditions, field.fan_ratio, field.home_advantage
            ),
            SimEvent::InningsStarted {
                batting,
                opener,
                bowler,
                ..
            } => format!(
                "\n------------- GAME STARTED -------------\n\
                 Team {batting} playing: {opener} to face {bowler}"
            ),
            SimEvent::Ball { .. } | SimEvent::NewBatter { .. } | SimEvent::OverCompleted { .. }
                if self.quiet =>
            {
                return None;
            }
            SimEvent::Ball {
                ball,
                batter,
                outcome,
                score,
                ..
            } => match outcome {
                BallOutcome::Out => format!(
                    "Ball {ball}: {batter} is OUT!  ({}/{} after {} overs)",
                    score.runs, score.wickets, score.overs
                ),
                BallOutcome::Runs(runs) => format!(
                    "Ball {ball}: {batter} plays the shot for {runs}.  ({}/{})",
                    score.runs, score.wickets
                ),
            },
            SimEvent::NewBatter { name, score } => format!(
                "Wickets: {} , Overs: {}\nNew player {name} is playing...",
                score.wickets, score.overs
            ),
            SimEvent::OverCompleted {
                over, next_bowler, ..
            } => match next_bowler {
                Some(bowler) => format!("Over {over} complete. {bowler} to bowl."),
                None => format!("Over {over} complete."),
            },
            SimEvent::InningsEnded(summary) => format!(
                "\nFinal Run: {} Wicket: {} Overs: {}{}",
                summary.runs,
                summary.wickets,
                summary.overs,
                if summary.all_out { " (all out)" } else { "" }
            ),
            SimEvent::MatchEnded {
                winner,
                score,
                decision,
            } => format!(
                "--------------- Winner ---------------\n\
                 TEAM : {winner} WON BY SCORE: {score} ({decision:?})"
            ),
            SimEvent::TournamentEnded { champion, rounds } => format!(
                "\n------------- Tournament Winner -------------\n\
                 TEAM : {champion} (after {rounds} rounds)"
            ),
        };
        Some(line)
    }
}

impl EventSink for Commentator {
    fn emit(&mut self, event: SimEvent) {
        if let Some(line) = self.describe(&event) {
            println!("{line}");
        }
    }
}
