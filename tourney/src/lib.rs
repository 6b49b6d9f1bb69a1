//! # Tourney
//!
//! Match schedule generation for knockout and round-robin tournaments.
//!
//! Given entrants in seed order, the generators produce a complete
//! [`Schedule`]: every round, every fixture, and which side of each fixture
//! is a concrete entrant, a bye, or the pending winner of an earlier match.
//! Turning a schedule into text is left to the caller.
//!
//! ## Core Modules
//!
//! - [`knockout`]: single elimination with seed-ordered byes
//! - [`round_robin`]: circle-method round-robin
//! - [`pairing`]: random doubles team formation
//! - [`shuffle`]: injectable permutation source
//!
//! ## Example
//!
//! ```
//! use tourney::{generate, Entrant, EventKind, Format, RandomShuffler};
//!
//! let entrants: Vec<Entrant> = ["S1", "S2", "S3", "S4", "S5"]
//!     .iter()
//!     .map(|name| Entrant::single(name))
//!     .collect::<Result<_, _>>()?;
//!
//! let mut shuffler = RandomShuffler::seeded(2024);
//! let schedule = generate(Format::Knockout, &entrants, EventKind::Singles, &mut shuffler)?;
//!
//! assert_eq!(schedule.bracket_size(), Some(8));
//! assert_eq!(schedule.knockout_byes().len(), 3);
//! # Ok::<(), tourney::ScheduleError>(())
//! ```

pub mod entrant;
pub mod errors;
pub mod knockout;
pub mod pairing;
pub mod round_robin;
pub mod schedule;
pub mod shuffle;

pub use entrant::{Entrant, EventKind};
pub use errors::{MIN_ENTRANTS, ScheduleError, ScheduleResult};
pub use knockout::{bracket_size, generate_knockout};
pub use pairing::{MIN_RANDOM_PAIRING_PLAYERS, RandomTeams, form_random_pairs};
pub use round_robin::{generate_round_robin, total_pairings};
pub use schedule::{Details, Format, Match, Round, Schedule, Slot, Stage};
pub use shuffle::{FixedOrder, RandomShuffler, Shuffler};

/// Generate a schedule in the requested format.
pub fn generate<S: Shuffler>(
    format: Format,
    entrants: &[Entrant],
    event_kind: EventKind,
    shuffler: &mut S,
) -> ScheduleResult<Schedule> {
    match format {
        Format::Knockout => generate_knockout(entrants, event_kind, shuffler),
        Format::RoundRobin => generate_round_robin(entrants, event_kind, shuffler),
    }
}
