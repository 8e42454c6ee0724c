mod parser;
mod round;
mod leaderboard;
mod display;

use rand::rngs::StdRng;
use rand::SeedableRng;

use display::{print_matches_played, print_round, print_standings, write_round_to_file};
use leaderboard::{LeaderboardConfig, PointsMode};
use parser::{load_history, load_roster};
use round::{available_players, best_round, first_round, RoundConfig};

const DEFAULT_COURTS: usize = 2;
const ROUND_FILE: &str = "next_round.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("next");

    // Use the data directory if it exists, otherwise the working directory
    let roster_path = pick_path("data/players.csv", "players.csv");
    let history_path = pick_path("data/results.json", "results.json");

    let roster = load_roster(&roster_path)?;
    let history = load_history(&history_path)?;
    println!(
        "Loaded {} players ({} unavailable) and {} played games",
        roster.players.len(),
        roster.unavailable.len(),
        history.len()
    );

    match command {
        "next" | "first" => {
            let courts = args
                .get(2)
                .and_then(|c| c.parse::<usize>().ok())
                .unwrap_or(DEFAULT_COURTS);
            let mut rng = match args.get(3).and_then(|s| s.parse::<u64>().ok()) {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            let config = RoundConfig::new(courts);
            let available = available_players(&roster.players, &roster.unavailable);

            let generated = if command == "first" {
                first_round(&config, &available, &mut rng)
            } else {
                best_round(&history, &config, &available, &mut rng)
            };

            match generated {
                Some(round) => {
                    print_round(&round, &available);
                    write_round_to_file(&round, ROUND_FILE)?;
                    println!("\nRound saved to {}", ROUND_FILE);
                }
                None => {
                    eprintln!(
                        "No valid round: {} available players is not enough for a game",
                        available.len()
                    );
                }
            }
        }
        "standings" => {
            let mode = match args.get(2).map(String::as_str) {
                Some("diff") => PointsMode::Differential,
                _ => PointsMode::OwnPoints,
            };
            let config = LeaderboardConfig {
                mode,
                ..LeaderboardConfig::default()
            };
            print_standings(&history, &roster.players, &config);
        }
        "played" => {
            print_matches_played(&history, &roster.players);
        }
        other => {
            eprintln!("Unknown command '{}'", other);
            eprintln!("Usage: doubles-rounds [next|first] [courts] [seed]");
            eprintln!("       doubles-rounds standings [own|diff]");
            eprintln!("       doubles-rounds played");
        }
    }

    Ok(())
}

fn pick_path(preferred: &str, fallback: &str) -> String {
    if std::path::Path::new(preferred).exists() {
        preferred.to_string()
    } else {
        fallback.to_string()
    }
}
