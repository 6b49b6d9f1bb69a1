//! Random doubles team formation.
//!
//! Independent of the generators: it only turns a list of players into
//! [`Entrant::Pair`] values that can then be scheduled.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{entrant::Entrant, shuffle::Shuffler};

/// Fewest players worth pairing at random; fewer would not yield two teams.
pub const MIN_RANDOM_PAIRING_PLAYERS: usize = 4;

/// Teams formed from a player list.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RandomTeams {
    /// Each entry is an [`Entrant::Pair`]
    pub teams: Vec<Entrant>,
    /// Player left without a partner when the count is odd
    pub leftover: Option<String>,
}

/// Shuffle `players` and group them two by two.
///
/// With an odd count the last player after shuffling is returned as
/// `leftover` and is not part of any team.
pub fn form_random_pairs<S: Shuffler>(mut players: Vec<String>, shuffler: &mut S) -> RandomTeams {
    shuffler.shuffle(&mut players);

    let leftover = if players.len() % 2 != 0 {
        players.pop()
    } else {
        None
    };

    let mut teams = Vec::with_capacity(players.len() / 2);
    let mut players = players.into_iter();
    while let (Some(first), Some(second)) = (players.next(), players.next()) {
        teams.push(Entrant::Pair(first, second));
    }

    debug!(
        "Formed {} random teams, leftover: {:?}",
        teams.len(),
        leftover
    );

    RandomTeams { teams, leftover }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shuffle::{FixedOrder, RandomShuffler};

    fn players(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("P{i}")).collect()
    }

    #[test]
    fn test_even_count_pairs_everyone() {
        let result = form_random_pairs(players(4), &mut FixedOrder);
        assert_eq!(
            result.teams,
            vec![
                Entrant::Pair("P1".to_string(), "P2".to_string()),
                Entrant::Pair("P3".to_string(), "P4".to_string()),
            ]
        );
        assert_eq!(result.leftover, None);
    }

    #[test]
    fn test_odd_count_leaves_last_player_out() {
        let result = form_random_pairs(players(5), &mut FixedOrder);
        assert_eq!(result.teams.len(), 2);
        assert_eq!(result.leftover.as_deref(), Some("P5"));
    }

    #[test]
    fn test_every_player_used_once() {
        let result = form_random_pairs(players(9), &mut RandomShuffler::seeded(11));

        let mut seen: Vec<String> = result
            .teams
            .iter()
            .flat_map(|team| match team {
                Entrant::Pair(a, b) => vec![a.clone(), b.clone()],
                Entrant::Single(a) => vec![a.clone()],
            })
            .chain(result.leftover.clone())
            .collect();
        seen.sort();
        let mut expected = players(9);
        expected.sort();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_empty_input() {
        let result = form_random_pairs(Vec::new(), &mut FixedOrder);
        assert_eq!(result, RandomTeams::default());
    }
}
