//! Text and JSON rendering of schedules.

use serde::Serialize;
use std::fmt::Write;
use tourney::{Format, RandomTeams, Round, Schedule, Slot, Stage};

const RULE_WIDTH: usize = 40;

/// Human-readable form of a slot.
pub fn slot_label(slot: &Slot) -> String {
    match slot {
        Slot::Concrete(entrant) => entrant.to_string(),
        Slot::Bye => "BYE".to_string(),
        Slot::PendingWinner { round, index } => {
            format!("Winner of R{} M{}", round + 1, index + 1)
        }
    }
}

/// Render a complete schedule as text.
pub fn render_schedule(schedule: &Schedule) -> String {
    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);
    let title = match schedule.format() {
        Format::Knockout => "Knockout Schedule",
        Format::RoundRobin => "Round-Robin Schedule",
    };

    // Writing into a String cannot fail
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{title:^RULE_WIDTH$}");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Event: {}", schedule.event_kind);
    let _ = writeln!(out, "Entrants: {}", schedule.entrant_count);

    match schedule.format() {
        Format::Knockout => render_knockout(&mut out, schedule, &rule),
        Format::RoundRobin => render_round_robin(&mut out, schedule, &rule),
    }

    let _ = writeln!(out, "\n{rule}");
    out
}

fn render_knockout(out: &mut String, schedule: &Schedule, rule: &str) {
    let byes = schedule.knockout_byes();
    let _ = writeln!(out, "Bracket size: {}", schedule.bracket_size().unwrap_or(0));
    let _ = writeln!(out, "Byes: {}", byes.len());
    let _ = writeln!(out, "{rule}");

    if !byes.is_empty() {
        let names: Vec<String> = byes.iter().map(ToString::to_string).collect();
        let _ = writeln!(out, "Straight to round 2: {}", names.join(", "));
    }

    if schedule.round(0).is_none() {
        let _ = writeln!(out, "\nAll entrants have a bye in round 1.");
    }

    for round in &schedule.rounds {
        let label = match round.stage {
            Stage::Final => " (Final)",
            Stage::SemiFinal => " (Semifinal)",
            Stage::Regular if round.index == 0 => " (Preliminary)",
            Stage::Regular => "",
        };
        let _ = writeln!(out, "\n--- Round {}{label} ---", round.index + 1);
        render_matches(out, round);
    }
}

fn render_round_robin(out: &mut String, schedule: &Schedule, rule: &str) {
    let _ = writeln!(out, "Total matches: {}", schedule.match_count());
    let _ = writeln!(out, "{rule}");

    for round in &schedule.rounds {
        let _ = writeln!(out, "\n--- Round {} ---", round.index + 1);
        render_matches(out, round);
    }
}

fn render_matches(out: &mut String, round: &Round) {
    for m in &round.matches {
        match m.bye_recipient() {
            Some(entrant) => {
                let _ = writeln!(out, "{entrant} has a bye");
            }
            None => {
                let _ = writeln!(
                    out,
                    "Match {}: {} vs {}",
                    m.index + 1,
                    slot_label(&m.first),
                    slot_label(&m.second)
                );
            }
        }
    }
}

/// Render the outcome of random doubles pairing.
pub fn render_random_teams(teams: &RandomTeams) -> String {
    let mut out = String::from("--- Random teams ---\n");
    for (i, team) in teams.teams.iter().enumerate() {
        let _ = writeln!(out, "Team {}: {team}", i + 1);
    }
    if let Some(player) = &teams.leftover {
        let _ = writeln!(
            out,
            "\nNote: '{player}' was left without a partner (odd number of players)."
        );
    }
    out.push_str("--------------------\n");
    out
}

/// Document printed in JSON mode
#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    random_teams: Option<&'a RandomTeams>,
    schedule: &'a Schedule,
}

/// Render the schedule, and the random pairing it was drawn from, as JSON.
pub fn render_json(
    schedule: &Schedule,
    random_teams: Option<&RandomTeams>,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonOutput {
        random_teams,
        schedule,
    })
}
