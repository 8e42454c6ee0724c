use std::fs::File;
use std::io::Write;

use chrono::Utc;
use serde::Serialize;

use crate::leaderboard::{standings, LeaderboardConfig};
use crate::parser::GameRecord;
use crate::round::{History, Player, Round, Team};

/// Formats a team as "Anna / Bertil"
pub fn format_team(team: &Team) -> String {
    let [one, two] = team.players();
    format!("{} / {}", one, two)
}

/// Prints the generated round court by court, followed by the available
/// players left sitting out
pub fn print_round(round: &Round, available: &[Player]) {
    println!("\n=== Next round ===");
    for (court, game) in round.games().iter().enumerate() {
        let [team0, team1] = game.teams();
        println!(
            "  Court {}: {}  vs  {}",
            court + 1,
            format_team(team0),
            format_team(team1)
        );
    }

    let playing: Vec<&Player> = round.players().collect();
    let sitting_out: Vec<&Player> = available
        .iter()
        .filter(|p| !playing.contains(p))
        .collect();

    println!("\n=== Sitting out ===");
    if sitting_out.is_empty() {
        println!("  (nobody)");
    } else {
        for player in sitting_out {
            println!("  {}", player);
        }
    }
}

/// Prints how many games each roster player has behind them
pub fn print_matches_played(history: &History, roster: &[Player]) {
    println!("\n=== Games played ===");
    for player in roster {
        println!("  {}: {}", player, history.no_of_games(player));
    }
}

/// Prints the standings: ranked players by average per-game score, then the
/// players with no games to rank on
pub fn print_standings(history: &History, roster: &[Player], config: &LeaderboardConfig) {
    let (ranked, unranked) = standings(history, roster, config);

    println!("\n=== Standings ===");
    for (place, entry) in ranked.iter().enumerate() {
        println!(
            "  {:>2}. {} — {:.1} avg over {} games",
            place + 1,
            entry.player,
            entry.average,
            entry.games
        );
    }
    if !unranked.is_empty() {
        println!("\n  Not yet ranked (no games):");
        for player in &unranked {
            println!("  {}", player);
        }
    }
}

#[derive(Serialize)]
struct RoundExport {
    generated_at: chrono::DateTime<Utc>,
    /// Score-less records; fill in `sets` after play and append them to the
    /// history file
    games: Vec<GameRecord>,
}

/// Writes the generated round to a JSON file whose `games` array can be
/// appended to the history file once the set scores are filled in
pub fn write_round_to_file(round: &Round, filename: &str) -> Result<(), Box<dyn std::error::Error>> {
    let export = RoundExport {
        generated_at: Utc::now(),
        games: round.games().iter().map(GameRecord::from_game).collect(),
    };

    let mut file = File::create(filename)?;
    let json = serde_json::to_string_pretty(&export)?;
    writeln!(file, "{}", json)?;
    Ok(())
}
