pub mod types;
pub mod history;
pub mod candidates;
pub mod scoring;
pub mod builder;

pub use types::{Game, GameSet, Player, Round, Team};
pub use history::History;
pub use builder::{available_players, best_round, first_round, RoundConfig};
