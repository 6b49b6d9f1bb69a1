//! Error types for schedule generation

use thiserror::Error;

/// Smallest field either generator accepts.
pub const MIN_ENTRANTS: usize = 2;

/// Result type for schedule operations
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Schedule generation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Too few entrants handed to a generator
    #[error("At least {needed} entrants are required, got {actual}")]
    InvalidInput { needed: usize, actual: usize },

    /// Entrant name was blank after trimming
    #[error("Entrant names cannot be empty")]
    EmptyName,

    /// Unrecognized event kind or format selector
    #[error("Unknown {what}: {value}")]
    UnknownOption { what: &'static str, value: String },
}

/// Fail with [`ScheduleError::InvalidInput`] unless there are enough entrants.
pub(crate) fn ensure_min_entrants(actual: usize) -> ScheduleResult<()> {
    if actual < MIN_ENTRANTS {
        return Err(ScheduleError::InvalidInput {
            needed: MIN_ENTRANTS,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = ensure_min_entrants(1).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains('2'));
        assert!(msg.contains("got 1"));
    }

    #[test]
    fn test_minimum_accepted() {
        assert!(ensure_min_entrants(2).is_ok());
        assert!(ensure_min_entrants(0).is_err());
    }
}
