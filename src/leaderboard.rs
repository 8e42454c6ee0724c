use std::cmp::Ordering;

use crate::round::{Game, History, Player};

/// How team points are accumulated per set, on top of the winner bonus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointsMode {
    /// Each team counts its own raw points
    OwnPoints,
    /// Each team counts the point differential against the opponents
    Differential,
}

/// Configuration for the standings calculation
#[derive(Debug, Clone, Copy)]
pub struct LeaderboardConfig {
    /// Flat bonus for the team winning a set
    pub winner_bonus: i64,
    pub mode: PointsMode,
}

impl Default for LeaderboardConfig {
    fn default() -> LeaderboardConfig {
        LeaderboardConfig {
            winner_bonus: 10,
            mode: PointsMode::OwnPoints,
        }
    }
}

/// One ranked row of the standings
#[derive(Debug, Clone, PartialEq)]
pub struct StandingsEntry {
    pub player: Player,
    pub games: usize,
    /// Average per-game score
    pub average: f64,
}

/// Per-team totals for one game. A game without a recorded score
/// contributes nothing.
pub fn score_for_game(game: &Game, config: &LeaderboardConfig) -> [i64; 2] {
    let sets = match game.score() {
        Some(sets) => sets,
        None => return [0, 0],
    };

    let mut totals = [0i64, 0i64];
    for set in sets {
        let [points0, points1] = set.points;
        let winner = if points0 > points1 { 0 } else { 1 };
        totals[winner] += config.winner_bonus;

        match config.mode {
            PointsMode::OwnPoints => {
                totals[0] += i64::from(points0);
                totals[1] += i64::from(points1);
            }
            PointsMode::Differential => {
                totals[0] += i64::from(points0) - i64::from(points1);
                totals[1] += i64::from(points1) - i64::from(points0);
            }
        }
    }
    totals
}

/// The player's average per-game score across their history, or None for a
/// player with no recorded games
pub fn score_for_player(
    history: &History,
    player: &Player,
    config: &LeaderboardConfig,
) -> Option<f64> {
    let mut games = 0usize;
    let mut total = 0i64;

    for game in history.games_for_player(player) {
        let side = if game.teams()[0].contains(player) { 0 } else { 1 };
        total += score_for_game(game, config)[side];
        games += 1;
    }

    if games == 0 {
        return None;
    }
    Some(total as f64 / games as f64)
}

/// Computes the standings for the roster: players ranked descending by
/// average score, followed by the players with no games to rank on
pub fn standings(
    history: &History,
    roster: &[Player],
    config: &LeaderboardConfig,
) -> (Vec<StandingsEntry>, Vec<Player>) {
    let mut ranked = Vec::new();
    let mut unranked = Vec::new();

    for player in roster {
        match score_for_player(history, player, config) {
            Some(average) => ranked.push(StandingsEntry {
                player: player.clone(),
                games: history.no_of_games(player),
                average,
            }),
            None => unranked.push(player.clone()),
        }
    }

    ranked.sort_by(|a, b| b.average.partial_cmp(&a.average).unwrap_or(Ordering::Equal));
    (ranked, unranked)
}
