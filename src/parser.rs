use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use csv::Reader;
use serde::{Serialize, Deserialize};

use crate::round::{Game, GameSet, History, Player, Team};

/// The roster file contents: every known player plus the subset that
/// cannot make the next round
#[derive(Debug, Clone)]
pub struct Roster {
    pub players: Vec<Player>,
    pub unavailable: Vec<Player>,
}

/// One persisted game in the history file. `sets` is absent (or empty) for
/// a game that has not been played yet; `played_at` is documentary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub teams: [[String; 2]; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<Vec<[u32; 2]>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub played_at: Option<DateTime<Utc>>,
}

impl GameRecord {
    /// Converts the raw record into a validated game, rejecting records
    /// that pair or oppose a player with themselves
    pub fn into_game(self) -> Result<Game, String> {
        let [[a, b], [c, d]] = self.teams;
        let team0 = Team::new(Player::new(a), Player::new(b))?;
        let team1 = Team::new(Player::new(c), Player::new(d))?;
        let sets = self
            .sets
            .unwrap_or_default()
            .into_iter()
            .map(|[p0, p1]| GameSet::new(p0, p1))
            .collect();
        Game::with_score(team0, team1, sets)
    }

    /// A score-less record for a game that is about to be played
    pub fn from_game(game: &Game) -> GameRecord {
        let name = |team: &Team, i: usize| team.players()[i].name().to_string();
        let [team0, team1] = game.teams();
        GameRecord {
            teams: [
                [name(team0, 0), name(team0, 1)],
                [name(team1, 0), name(team1, 1)],
            ],
            sets: None,
            played_at: None,
        }
    }
}

/// Parses a boolean from the spreadsheet-style values used in the roster
fn parse_bool(value: &str) -> bool {
    let lower = value.trim().to_lowercase();
    lower == "yes" || lower == "true" || lower == "1"
}

/// Parses the roster CSV. Columns are found by header name: one containing
/// "name" and optionally one containing "available". Without an availability
/// column every player is considered available; an empty cell also counts as
/// available. A name appearing twice keeps its first position but the last
/// row's availability (re-submission semantics).
pub fn parse_roster<R: Read>(reader: R) -> Result<Roster, Box<dyn std::error::Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let headers = csv_reader.headers()?;

    let name_col = headers
        .iter()
        .position(|h| h.to_lowercase().contains("name"))
        .unwrap_or(0);
    let available_col = headers
        .iter()
        .position(|h| h.to_lowercase().contains("available"));

    // Keep roster order from the file; re-submitted names update in place
    let mut players: Vec<Player> = Vec::new();
    let mut availability: Vec<bool> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for result in csv_reader.records() {
        let record = result?;

        let name = record.get(name_col).unwrap_or("").trim().to_string();
        if name.is_empty() {
            continue;
        }

        let available = match available_col {
            Some(col) => {
                let cell = record.get(col).unwrap_or("").trim();
                cell.is_empty() || parse_bool(cell)
            }
            None => true,
        };

        if let Some(&i) = positions.get(&name) {
            availability[i] = available;
        } else {
            positions.insert(name.clone(), players.len());
            players.push(Player::new(name));
            availability.push(available);
        }
    }

    let unavailable = players
        .iter()
        .zip(&availability)
        .filter(|(_, &available)| !available)
        .map(|(p, _)| p.clone())
        .collect();

    Ok(Roster { players, unavailable })
}

/// Loads the roster from a CSV file
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Roster, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    parse_roster(file)
}

/// Parses the history JSON: an array of game records. A record violating
/// the player-distinctness invariants refuses the whole file, naming the
/// offending record.
pub fn parse_history<R: Read>(reader: R) -> Result<History, Box<dyn std::error::Error>> {
    let records: Vec<GameRecord> = serde_json::from_reader(reader)?;

    let mut games = Vec::with_capacity(records.len());
    for (i, record) in records.into_iter().enumerate() {
        let game = record
            .into_game()
            .map_err(|e| format!("game {}: {}", i + 1, e))?;
        games.push(game);
    }

    Ok(History::new(games))
}

/// Loads the game history from a JSON file. A missing file is an empty
/// history, so a group can start from nothing.
pub fn load_history<P: AsRef<Path>>(path: P) -> Result<History, Box<dyn std::error::Error>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(History::default());
    }
    let file = File::open(path)?;
    parse_history(file)
}
