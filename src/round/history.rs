use super::types::{Game, Player};

/// The record of all previously played games, in chronological order.
/// Immutable input to round generation; never modified by it.
#[derive(Debug, Clone, Default)]
pub struct History {
    games: Vec<Game>,
}

impl History {
    pub fn new(games: Vec<Game>) -> History {
        History { games }
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// All games the player took part in, on either team
    pub fn games_for_player<'a>(&'a self, player: &'a Player) -> impl Iterator<Item = &'a Game> {
        self.games.iter().filter(move |g| g.contains(player))
    }

    /// How many games the player has played
    pub fn no_of_games(&self, player: &Player) -> usize {
        self.games_for_player(player).count()
    }

    /// Whether the two players have ever been on opposite teams
    pub fn has_met(&self, one: &Player, two: &Player) -> bool {
        self.games.iter().any(|game| {
            let [t0, t1] = game.teams();
            (t0.contains(one) && t1.contains(two)) || (t1.contains(one) && t0.contains(two))
        })
    }

    /// Whether the two players have ever been on the same team
    pub fn has_played_together(&self, one: &Player, two: &Player) -> bool {
        self.games.iter().any(|game| {
            game.teams()
                .iter()
                .any(|team| team.contains(one) && team.contains(two))
        })
    }
}
