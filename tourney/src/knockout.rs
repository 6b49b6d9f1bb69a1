//! Single-elimination draw.
//!
//! The top `bracket_size - n` seeds skip round 1. Everyone else is shuffled
//! and paired off in order. From round 2 on, the field is folded: the first
//! entrant meets the last, the second meets the second-last, and so on, until
//! a single placeholder (the champion) is left.

use log::{debug, trace};

use crate::{
    entrant::{Entrant, EventKind},
    errors::{ScheduleResult, ensure_min_entrants},
    schedule::{Details, Match, Round, Schedule, Slot, Stage},
    shuffle::Shuffler,
};

/// Smallest power of two that is at least `entrant_count`.
pub fn bracket_size(entrant_count: usize) -> usize {
    entrant_count.max(1).next_power_of_two()
}

/// Generate a knockout schedule.
///
/// # Arguments
///
/// * `entrants` - Field in seed order; the first entrants receive the byes
/// * `event_kind` - Carried through as metadata
/// * `shuffler` - Permutes the non-bye entrants before round 1 is paired
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidInput`](crate::ScheduleError::InvalidInput)
/// for fewer than two entrants.
pub fn generate_knockout<S: Shuffler>(
    entrants: &[Entrant],
    event_kind: EventKind,
    shuffler: &mut S,
) -> ScheduleResult<Schedule> {
    ensure_min_entrants(entrants.len())?;

    let bracket_size = bracket_size(entrants.len());
    let num_byes = bracket_size - entrants.len();
    debug!(
        "Knockout draw: {} entrants, bracket of {}, {} byes",
        entrants.len(),
        bracket_size,
        num_byes
    );

    let (with_byes, without_byes) = entrants.split_at(num_byes);
    let mut round1_field = without_byes.to_vec();
    shuffler.shuffle(&mut round1_field);

    let mut rounds = Vec::new();

    // Round 1: consecutive pairing of everyone without a bye
    let round1_matches: Vec<Match> = round1_field
        .chunks_exact(2)
        .enumerate()
        .map(|(index, pair)| {
            Match::new(
                0,
                index,
                Slot::Concrete(pair[0].clone()),
                Slot::Concrete(pair[1].clone()),
            )
        })
        .collect();

    let mut field: Vec<Slot> = with_byes.iter().cloned().map(Slot::Concrete).collect();
    field.extend(round1_matches.iter().map(Match::winner));

    if !round1_matches.is_empty() {
        trace!("Round 1: {} matches", round1_matches.len());
        // Round 1 of a field with byes is a preliminary, whatever its size
        let stage = if num_byes > 0 {
            Stage::Regular
        } else {
            Stage::for_bracket_slots(bracket_size)
        };
        rounds.push(Round {
            index: 0,
            entrant_count: round1_field.len(),
            stage,
            matches: round1_matches,
        });
    }

    // Round 2 onward: fold pairing until the champion placeholder remains
    let mut round_index = 1;
    while field.len() > 1 {
        let count = field.len();
        let matches: Vec<Match> = (0..count / 2)
            .map(|i| {
                Match::new(
                    round_index,
                    i,
                    field[i].clone(),
                    field[count - 1 - i].clone(),
                )
            })
            .collect();
        trace!("Round {}: {} matches", round_index + 1, matches.len());

        field = matches.iter().map(Match::winner).collect();
        rounds.push(Round {
            index: round_index,
            entrant_count: count,
            stage: Stage::for_bracket_slots(bracket_size >> round_index),
            matches,
        });
        round_index += 1;
    }

    debug!("Knockout draw complete: {} rounds", rounds.len());

    Ok(Schedule {
        event_kind,
        entrant_count: entrants.len(),
        rounds,
        details: Details::Knockout {
            bracket_size,
            byes: with_byes.to_vec(),
        },
    })
}
