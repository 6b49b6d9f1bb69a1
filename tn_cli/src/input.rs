//! Interactive data entry.
//!
//! Prompts for the event kind, the field, and the format, re-asking until
//! each answer is valid.

use anyhow::{Result, bail};
use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};
use tourney::{
    Entrant, EventKind, MIN_ENTRANTS, MIN_RANDOM_PAIRING_PLAYERS, RandomTeams, ScheduleError,
    Shuffler, form_random_pairs,
};

use crate::render::render_random_teams;

/// How doubles teams are formed
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TeamMode {
    /// Teams are entered pair by pair
    Manual,
    /// Teams are drawn from a list of players
    Random,
}

impl FromStr for TeamMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "manual" => Ok(Self::Manual),
            "2" | "random" => Ok(Self::Random),
            other => Err(format!("unknown team mode '{other}'")),
        }
    }
}

/// Field collected from the user
#[derive(Debug)]
pub struct Field {
    pub event_kind: EventKind,
    /// Entrants in seed order
    pub entrants: Vec<Entrant>,
    /// Set when the teams were drawn at random
    pub random_teams: Option<RandomTeams>,
}

/// Line-oriented prompter over any reader and writer
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            ));
        }
        Ok(line.trim().to_string())
    }

    /// Ask until the answer parses as `T`
    pub fn choose<T: FromStr>(&mut self, question: &str) -> io::Result<T> {
        loop {
            if let Ok(value) = self.ask(question)?.parse() {
                return Ok(value);
            }
        }
    }

    /// Ask for a count of at least `min`
    pub fn count(&mut self, question: &str, min: usize) -> io::Result<usize> {
        loop {
            match self.ask(question)?.parse::<usize>() {
                Ok(n) if n >= min => return Ok(n),
                Ok(_) => writeln!(self.output, "Error: at least {min} are required.")?,
                Err(_) => writeln!(self.output, "Error: please enter a valid number.")?,
            }
        }
    }

    /// Ask for a non-blank name
    pub fn name(&mut self, question: &str) -> io::Result<String> {
        loop {
            let answer = self.ask(question)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            writeln!(self.output, "Name cannot be empty.")?;
        }
    }

    /// Ask for a doubles team; both names are required
    pub fn team(&mut self, number: usize) -> Result<Entrant> {
        loop {
            let first = self.ask(&format!("Team {number}, player 1: "))?;
            let second = self.ask(&format!("Team {number}, player 2: "))?;
            match Entrant::pair(&first, &second) {
                Ok(team) => return Ok(team),
                Err(_) => writeln!(self.output, "Both player names are required.")?,
            }
        }
    }

    /// Collect the whole field, asking for the event kind unless given
    pub fn collect_field<S: Shuffler>(
        &mut self,
        event_kind: Option<EventKind>,
        shuffler: &mut S,
    ) -> Result<Field> {
        let event_kind = match event_kind {
            Some(kind) => kind,
            None => self.choose("Select event type (1: singles, 2: doubles): ")?,
        };

        match event_kind {
            EventKind::Singles => {
                let n = self.count("Number of singles entrants: ", MIN_ENTRANTS)?;
                writeln!(
                    self.output,
                    "\nEnter players in seed order (top seeds receive knockout byes):"
                )?;
                let entrants = (1..=n)
                    .map(|i| {
                        let name = self.name(&format!("Player {i}: "))?;
                        Ok(Entrant::single(&name)?)
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Field {
                    event_kind,
                    entrants,
                    random_teams: None,
                })
            }
            EventKind::Doubles => {
                let mode: TeamMode = self.choose(
                    "Team formation (1: enter teams manually, 2: random pairs from a player list): ",
                )?;
                match mode {
                    TeamMode::Manual => {
                        let n = self.count("Number of teams: ", MIN_ENTRANTS)?;
                        writeln!(self.output, "\nEnter teams in seed order:")?;
                        let entrants = (1..=n)
                            .map(|i| self.team(i))
                            .collect::<Result<Vec<_>>>()?;
                        Ok(Field {
                            event_kind,
                            entrants,
                            random_teams: None,
                        })
                    }
                    TeamMode::Random => {
                        let n = self.count(
                            "Number of players to pair up: ",
                            MIN_RANDOM_PAIRING_PLAYERS,
                        )?;
                        writeln!(self.output, "\nEnter all player names:")?;
                        let players = (1..=n)
                            .map(|i| self.name(&format!("Player {i}: ")))
                            .collect::<io::Result<Vec<_>>>()?;
                        let teams = random_teams(players, shuffler)?;
                        write!(self.output, "\n{}", render_random_teams(&teams))?;
                        self.ask("Press Enter to continue...")?;
                        Ok(Field {
                            event_kind,
                            entrants: teams.teams.clone(),
                            random_teams: Some(teams),
                        })
                    }
                }
            }
        }
    }
}

/// Pair players at random after checking there are enough of them
///
/// Names are trimmed; a blank name is rejected.
pub fn random_teams<S: Shuffler>(players: Vec<String>, shuffler: &mut S) -> Result<RandomTeams> {
    let players = players
        .iter()
        .map(|player| match player.trim() {
            "" => Err(ScheduleError::EmptyName),
            name => Ok(name.to_string()),
        })
        .collect::<Result<Vec<_>, _>>()?;
    if players.len() < MIN_RANDOM_PAIRING_PLAYERS {
        bail!(
            "Random pairing needs at least {} players, got {}",
            MIN_RANDOM_PAIRING_PLAYERS,
            players.len()
        );
    }
    Ok(form_random_pairs(players, shuffler))
}

/// Build entrants from command-line names
///
/// Doubles entrants must be written as `A/B`. Singles names are taken whole.
pub fn entrants_from_names(names: &[String], event_kind: EventKind) -> Result<Vec<Entrant>> {
    names
        .iter()
        .map(|name| match event_kind {
            EventKind::Singles => Ok(Entrant::single(name)?),
            EventKind::Doubles => {
                let entrant = Entrant::parse(name)?;
                if !entrant.is_pair() {
                    bail!("Doubles entrant '{name}' must be written as PLAYER/PLAYER");
                }
                Ok(entrant)
            }
        })
        .collect()
}
