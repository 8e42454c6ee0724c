use std::collections::HashSet;
use std::fmt;

/// A player, identified by name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    name: String,
}

impl Player {
    pub fn new<S: Into<String>>(name: S) -> Player {
        Player { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A doubles team: two distinct players playing together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    players: [Player; 2],
}

impl Team {
    /// Creates a team, rejecting a player paired with themselves
    pub fn new(one: Player, two: Player) -> Result<Team, String> {
        if one == two {
            return Err(format!("team pairs '{}' with themselves", one));
        }
        Ok(Team { players: [one, two] })
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn contains(&self, player: &Player) -> bool {
        self.players.iter().any(|p| p == player)
    }
}

/// One set of a game: points for team 0 and team 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSet {
    pub points: [u32; 2],
}

impl GameSet {
    pub fn new(team0: u32, team1: u32) -> GameSet {
        GameSet { points: [team0, team1] }
    }
}

/// A doubles game between two teams, with the set scores once played.
/// The four players across both teams are always distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    teams: [Team; 2],
    score: Option<Vec<GameSet>>,
}

impl Game {
    /// Creates a not-yet-played game, rejecting teams that share a player
    pub fn new(team0: Team, team1: Team) -> Result<Game, String> {
        Game::build(team0, team1, None)
    }

    /// Creates a played game with its recorded set scores
    pub fn with_score(team0: Team, team1: Team, sets: Vec<GameSet>) -> Result<Game, String> {
        let score = if sets.is_empty() { None } else { Some(sets) };
        Game::build(team0, team1, score)
    }

    fn build(team0: Team, team1: Team, score: Option<Vec<GameSet>>) -> Result<Game, String> {
        if let Some(shared) = team0.players().iter().find(|p| team1.contains(p)) {
            return Err(format!("'{}' appears on both teams", shared));
        }
        Ok(Game { teams: [team0, team1], score })
    }

    pub fn teams(&self) -> &[Team; 2] {
        &self.teams
    }

    /// The recorded set scores, or None for a not-yet-played game
    pub fn score(&self) -> Option<&[GameSet]> {
        self.score.as_deref()
    }

    /// All four players of the game, team 0 first
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.teams.iter().flat_map(|t| t.players().iter())
    }

    pub fn contains(&self, player: &Player) -> bool {
        self.teams.iter().any(|t| t.contains(player))
    }
}

/// One scheduling unit: up to one game per court, no player on two courts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    games: Vec<Game>,
}

impl Round {
    /// Creates a round, rejecting games that share a player
    pub fn new(games: Vec<Game>) -> Result<Round, String> {
        let mut seen: HashSet<&Player> = HashSet::new();
        for game in &games {
            for player in game.players() {
                if !seen.insert(player) {
                    return Err(format!("'{}' appears in two games of the round", player));
                }
            }
        }
        Ok(Round { games })
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

    /// All players occupied by the round
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.games.iter().flat_map(|g| g.players())
    }
}
