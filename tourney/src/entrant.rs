//! Entrant identities and event kinds.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::errors::{ScheduleError, ScheduleResult};

/// Separator used when a doubles team is written on one line.
pub const PAIR_SEPARATOR: char = '/';

/// The unit a generator schedules: one player, or a fixed pair.
///
/// Entrants are opaque to the generators. They are only ever cloned into
/// slots and compared by value.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum Entrant {
    Single(String),
    Pair(String, String),
}

impl Entrant {
    /// A single player. Surrounding whitespace is dropped.
    pub fn single(name: &str) -> ScheduleResult<Self> {
        Ok(Self::Single(clean_name(name)?))
    }

    /// A doubles team. Both names must be non-blank.
    pub fn pair(first: &str, second: &str) -> ScheduleResult<Self> {
        Ok(Self::Pair(clean_name(first)?, clean_name(second)?))
    }

    /// Parse `"A"` as a single or `"A/B"` as a pair.
    pub fn parse(s: &str) -> ScheduleResult<Self> {
        match s.split_once(PAIR_SEPARATOR) {
            Some((first, second)) => Self::pair(first, second),
            None => Self::single(s),
        }
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Self::Pair(..))
    }
}

impl fmt::Display for Entrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(name) => name.fmt(f),
            Self::Pair(first, second) => write!(f, "{first}{PAIR_SEPARATOR}{second}"),
        }
    }
}

fn clean_name(name: &str) -> ScheduleResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ScheduleError::EmptyName);
    }
    Ok(name.to_string())
}

/// Whether entrants are individuals or pairs.
///
/// Metadata only; the generators never branch on it.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    #[default]
    Singles,
    Doubles,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Singles => "singles",
            Self::Doubles => "doubles",
        };
        write!(f, "{repr}")
    }
}

impl FromStr for EventKind {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "singles" | "single" | "s" => Ok(Self::Singles),
            "2" | "doubles" | "double" | "d" => Ok(Self::Doubles),
            other => Err(ScheduleError::UnknownOption {
                what: "event kind",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_trims_name() {
        let entrant = Entrant::single("  Lin Dan ").unwrap();
        assert_eq!(entrant, Entrant::Single("Lin Dan".to_string()));
        assert_eq!(entrant.to_string(), "Lin Dan");
    }

    #[test]
    fn test_blank_names_rejected() {
        assert_eq!(Entrant::single("   "), Err(ScheduleError::EmptyName));
        assert_eq!(Entrant::pair("Ahsan", ""), Err(ScheduleError::EmptyName));
    }

    #[test]
    fn test_parse_pair() {
        let entrant = Entrant::parse("Ahsan / Setiawan").unwrap();
        assert!(entrant.is_pair());
        assert_eq!(entrant.to_string(), "Ahsan/Setiawan");
    }

    #[test]
    fn test_parse_single() {
        let entrant = Entrant::parse("Momota").unwrap();
        assert!(!entrant.is_pair());
    }

    #[test]
    fn test_event_kind_from_str() {
        assert_eq!("Doubles".parse::<EventKind>().unwrap(), EventKind::Doubles);
        assert_eq!("1".parse::<EventKind>().unwrap(), EventKind::Singles);
        assert!("mixed".parse::<EventKind>().is_err());
    }
}
