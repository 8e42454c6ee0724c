use super::history::History;
use super::types::Game;

/// Weights for the round-generation heuristic. A game's score is its
/// undesirability: lower scores are preferred by the round builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    /// Added once per team whose members have partnered before
    pub played_together: u32,
    /// Added once per cross-team pair that has faced each other before
    pub met: u32,
}

impl Default for ScoringWeights {
    fn default() -> ScoringWeights {
        ScoringWeights {
            played_together: 75,
            met: 25,
        }
    }
}

/// Scores a candidate game against the history. A foursome with no repeated
/// partnerships and no repeated opponents scores 0.
pub fn score_game(history: &History, weights: &ScoringWeights, game: &Game) -> u32 {
    let [team0, team1] = game.teams();

    let repeated_partnerships = game
        .teams()
        .iter()
        .filter(|team| {
            let [one, two] = team.players();
            history.has_played_together(one, two)
        })
        .count() as u32;

    let mut repeated_opponents = 0;
    for one in team0.players() {
        for two in team1.players() {
            if history.has_met(one, two) {
                repeated_opponents += 1;
            }
        }
    }

    weights.played_together * repeated_partnerships + weights.met * repeated_opponents
}

/// Total score of a set of games making up one round
pub fn score_round(history: &History, weights: &ScoringWeights, games: &[Game]) -> u32 {
    games
        .iter()
        .map(|game| score_game(history, weights, game))
        .sum()
}
