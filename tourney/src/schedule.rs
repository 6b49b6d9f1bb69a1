//! Schedule data model shared by both generators.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{
    entrant::{Entrant, EventKind},
    errors::ScheduleError,
};

/// Tournament format
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Format {
    /// Single elimination
    Knockout,
    /// Everyone meets everyone once
    RoundRobin,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Knockout => "knockout",
            Self::RoundRobin => "round-robin",
        };
        write!(f, "{repr}")
    }
}

impl FromStr for Format {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "knockout" | "ko" | "elimination" => Ok(Self::Knockout),
            "2" | "round-robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            other => Err(ScheduleError::UnknownOption {
                what: "format",
                value: other.to_string(),
            }),
        }
    }
}

/// What occupies one side of a match.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Slot {
    Concrete(Entrant),
    /// No opponent; the other side advances without playing.
    Bye,
    /// Winner of an earlier match, by 0-based round and match index.
    PendingWinner { round: usize, index: usize },
}

impl Slot {
    pub fn entrant(&self) -> Option<&Entrant> {
        match self {
            Self::Concrete(entrant) => Some(entrant),
            _ => None,
        }
    }

    pub fn is_bye(&self) -> bool {
        matches!(self, Self::Bye)
    }
}

/// One fixture: two slots, plus where it sits in the schedule.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// 0-based round index
    pub round: usize,
    /// 0-based position within the round
    pub index: usize,
    pub first: Slot,
    pub second: Slot,
}

impl Match {
    pub fn new(round: usize, index: usize, first: Slot, second: Slot) -> Self {
        Self {
            round,
            index,
            first,
            second,
        }
    }

    /// True when one side is a bye, i.e. nothing is played.
    pub fn is_bye(&self) -> bool {
        self.first.is_bye() || self.second.is_bye()
    }

    /// The entrant receiving the bye, if this fixture is one.
    pub fn bye_recipient(&self) -> Option<&Entrant> {
        match (&self.first, &self.second) {
            (Slot::Bye, other) | (other, Slot::Bye) => other.entrant(),
            _ => None,
        }
    }

    /// Placeholder standing in for this match's winner.
    pub fn winner(&self) -> Slot {
        Slot::PendingWinner {
            round: self.round,
            index: self.index,
        }
    }
}

/// Label for the late knockout rounds.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum Stage {
    #[default]
    Regular,
    SemiFinal,
    Final,
}

impl Stage {
    /// Stage of a knockout round whose bracket holds `slots` positions.
    pub fn for_bracket_slots(slots: usize) -> Self {
        match slots {
            2 => Self::Final,
            4 => Self::SemiFinal,
            _ => Self::Regular,
        }
    }
}

/// An ordered list of fixtures sharing a round index.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// 0-based round index
    pub index: usize,
    /// Entrants and placeholders taking part in the round
    pub entrant_count: usize,
    pub stage: Stage,
    /// Fixtures in ascending match index
    pub matches: Vec<Match>,
}

impl Round {
    /// Fixtures that are actually played.
    pub fn played(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(|m| !m.is_bye())
    }

    /// Entrant sitting out this round, if any.
    pub fn bye(&self) -> Option<&Entrant> {
        self.matches.iter().find_map(Match::bye_recipient)
    }
}

/// Format-specific metadata.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Details {
    Knockout {
        /// Smallest power of two holding every entrant
        bracket_size: usize,
        /// Entrants advancing straight to round 2, in seed order
        byes: Vec<Entrant>,
    },
    RoundRobin {
        num_rounds: usize,
    },
}

/// A complete generated schedule. Read-only once returned.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub event_kind: EventKind,
    pub entrant_count: usize,
    pub rounds: Vec<Round>,
    pub details: Details,
}

impl Schedule {
    pub fn format(&self) -> Format {
        match self.details {
            Details::Knockout { .. } => Format::Knockout,
            Details::RoundRobin { .. } => Format::RoundRobin,
        }
    }

    /// Number of matches actually played, byes excluded.
    pub fn match_count(&self) -> usize {
        self.rounds.iter().map(|round| round.played().count()).sum()
    }

    /// Number of byes handed out across the schedule.
    pub fn bye_count(&self) -> usize {
        match &self.details {
            Details::Knockout { byes, .. } => byes.len(),
            Details::RoundRobin { .. } => self
                .rounds
                .iter()
                .flat_map(|round| round.matches.iter())
                .filter(|m| m.is_bye())
                .count(),
        }
    }

    /// Played matches plus bye walkovers.
    ///
    /// For a knockout this is always `bracket_size - 1`.
    pub fn fixture_count(&self) -> usize {
        self.match_count() + self.bye_count()
    }

    /// Knockout bracket size, `None` for round-robin.
    pub fn bracket_size(&self) -> Option<usize> {
        match self.details {
            Details::Knockout { bracket_size, .. } => Some(bracket_size),
            Details::RoundRobin { .. } => None,
        }
    }

    /// Entrants receiving a first-round knockout bye.
    pub fn knockout_byes(&self) -> &[Entrant] {
        match &self.details {
            Details::Knockout { byes, .. } => byes,
            Details::RoundRobin { .. } => &[],
        }
    }

    pub fn round(&self, index: usize) -> Option<&Round> {
        self.rounds.iter().find(|round| round.index == index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(name: &str) -> Entrant {
        Entrant::Single(name.to_string())
    }

    #[test]
    fn test_bye_recipient_either_side() {
        let left = Match::new(0, 0, Slot::Bye, Slot::Concrete(single("A")));
        let right = Match::new(0, 1, Slot::Concrete(single("B")), Slot::Bye);
        assert_eq!(left.bye_recipient(), Some(&single("A")));
        assert_eq!(right.bye_recipient(), Some(&single("B")));
        assert!(left.is_bye());
    }

    #[test]
    fn test_played_match_has_no_bye_recipient() {
        let m = Match::new(
            1,
            0,
            Slot::Concrete(single("A")),
            Slot::PendingWinner { round: 0, index: 0 },
        );
        assert!(!m.is_bye());
        assert_eq!(m.bye_recipient(), None);
        assert_eq!(m.winner(), Slot::PendingWinner { round: 1, index: 0 });
    }

    #[test]
    fn test_stage_labels() {
        assert_eq!(Stage::for_bracket_slots(2), Stage::Final);
        assert_eq!(Stage::for_bracket_slots(4), Stage::SemiFinal);
        assert_eq!(Stage::for_bracket_slots(8), Stage::Regular);
    }

    #[test]
    fn test_round_bye_lookup() {
        let round = Round {
            index: 0,
            entrant_count: 3,
            stage: Stage::Regular,
            matches: vec![
                Match::new(0, 0, Slot::Concrete(single("A")), Slot::Bye),
                Match::new(0, 1, Slot::Concrete(single("B")), Slot::Concrete(single("C"))),
            ],
        };
        assert_eq!(round.bye(), Some(&single("A")));
        assert_eq!(round.played().count(), 1);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("KO".parse::<Format>().unwrap(), Format::Knockout);
        assert_eq!("round-robin".parse::<Format>().unwrap(), Format::RoundRobin);
        assert!(matches!(
            "swiss".parse::<Format>(),
            Err(ScheduleError::UnknownOption { what: "format", .. })
        ));
    }
}
