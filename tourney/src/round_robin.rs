//! Round-robin draw using the circle method.
//!
//! The shuffled field is laid out in two rows; the top row is paired with the
//! reversed bottom row. Between rounds the last entrant moves to position 1,
//! so everyone except the anchor at position 0 cycles one place. An odd field
//! gets a bye sentinel, and whoever draws the sentinel sits the round out.

use log::{debug, trace};

use crate::{
    entrant::{Entrant, EventKind},
    errors::{ScheduleResult, ensure_min_entrants},
    schedule::{Details, Match, Round, Schedule, Slot, Stage},
    shuffle::Shuffler,
};

/// Number of distinct pairings among `entrant_count` entrants.
pub fn total_pairings(entrant_count: usize) -> usize {
    entrant_count * entrant_count.saturating_sub(1) / 2
}

/// Generate a round-robin schedule.
///
/// Even fields play `n - 1` rounds of `n / 2` matches. Odd fields play `n`
/// rounds of `(n - 1) / 2` matches plus one bye.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidInput`](crate::ScheduleError::InvalidInput)
/// for fewer than two entrants.
pub fn generate_round_robin<S: Shuffler>(
    entrants: &[Entrant],
    event_kind: EventKind,
    shuffler: &mut S,
) -> ScheduleResult<Schedule> {
    ensure_min_entrants(entrants.len())?;

    let mut field: Vec<Slot> = entrants.iter().cloned().map(Slot::Concrete).collect();
    shuffler.shuffle(&mut field);
    if field.len() % 2 != 0 {
        field.push(Slot::Bye);
    }

    let size = field.len();
    let num_rounds = size - 1;
    let half = size / 2;
    debug!(
        "Round-robin draw: {} entrants, {} rounds, {} pairings",
        entrants.len(),
        num_rounds,
        total_pairings(entrants.len())
    );

    let mut rounds = Vec::with_capacity(num_rounds);
    for round_index in 0..num_rounds {
        let (top, bottom) = field.split_at(half);
        let matches: Vec<Match> = top
            .iter()
            .zip(bottom.iter().rev())
            .enumerate()
            .map(|(index, (first, second))| {
                Match::new(round_index, index, first.clone(), second.clone())
            })
            .collect();

        let round = Round {
            index: round_index,
            entrant_count: entrants.len(),
            stage: Stage::Regular,
            matches,
        };
        trace!(
            "Round {}: {} matches, bye: {:?}",
            round_index + 1,
            round.played().count(),
            round.bye()
        );
        rounds.push(round);

        // Rotate everyone but the anchor
        if let Some(last) = field.pop() {
            field.insert(1, last);
        }
    }

    Ok(Schedule {
        event_kind,
        entrant_count: entrants.len(),
        rounds,
        details: Details::RoundRobin { num_rounds },
    })
}
