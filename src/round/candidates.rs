use std::collections::HashSet;
use super::types::{Game, Player, Team};

/// Enumerates all unordered pairs of distinct players as candidate teams
pub fn all_teams(players: &[Player]) -> Vec<Team> {
    let mut teams = Vec::new();
    for (i, one) in players.iter().enumerate() {
        for two in &players[i + 1..] {
            // A duplicate name in the pool is skipped rather than paired with itself
            if let Ok(team) = Team::new(one.clone(), two.clone()) {
                teams.push(team);
            }
        }
    }
    teams
}

/// Enumerates all structurally valid games for the pool: every unordered
/// pair of candidate teams that does not share a player
pub fn all_games(players: &[Player]) -> Vec<Game> {
    let teams = all_teams(players);
    let mut games = Vec::new();
    for (i, team0) in teams.iter().enumerate() {
        for team1 in &teams[i + 1..] {
            // The Game constructor rejects team pairs sharing a player
            if let Ok(game) = Game::new(team0.clone(), team1.clone()) {
                games.push(game);
            }
        }
    }
    games
}

/// Removes candidate games that share a player with the given set.
/// Used during round assembly to keep the round disjoint in players.
pub fn filter_out_games_with_players(games: &[Game], used: &HashSet<Player>) -> Vec<Game> {
    games
        .iter()
        .filter(|game| !game.players().any(|p| used.contains(p)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(names: &[&str]) -> Vec<Player> {
        names.iter().map(|n| Player::new(*n)).collect()
    }

    #[test]
    fn test_all_teams_count() {
        // C(5, 2) = 10 unordered pairs
        let pool = players(&["A", "B", "C", "D", "E"]);
        assert_eq!(all_teams(&pool).len(), 10);
    }

    #[test]
    fn test_all_games_count() {
        // 3 ways to split each 4-player subset into two teams: 3 * C(P, 4)
        let pool4 = players(&["A", "B", "C", "D"]);
        assert_eq!(all_games(&pool4).len(), 3);

        let pool5 = players(&["A", "B", "C", "D", "E"]);
        assert_eq!(all_games(&pool5).len(), 15);

        let pool8 = players(&["A", "B", "C", "D", "E", "F", "G", "H"]);
        assert_eq!(all_games(&pool8).len(), 3 * 70);
    }

    #[test]
    fn test_all_games_have_distinct_players() {
        let pool = players(&["A", "B", "C", "D", "E", "F"]);
        for game in all_games(&pool) {
            let unique: HashSet<&Player> = game.players().collect();
            assert_eq!(unique.len(), 4);
        }
    }

    #[test]
    fn test_too_small_pool_yields_no_games() {
        assert!(all_games(&players(&["A", "B", "C"])).is_empty());
        assert!(all_games(&players(&[])).is_empty());
    }

    #[test]
    fn test_filter_out_games_with_players() {
        let pool = players(&["A", "B", "C", "D", "E", "F", "G", "H"]);
        let games = all_games(&pool);

        let mut used = HashSet::new();
        used.insert(Player::new("A"));
        used.insert(Player::new("B"));

        let remaining = filter_out_games_with_players(&games, &used);
        assert!(remaining.iter().all(|g| {
            !g.contains(&Player::new("A")) && !g.contains(&Player::new("B"))
        }));
        // Remaining games are exactly those over the other six players
        assert_eq!(remaining.len(), 3 * 15);
    }
}
