//! Print a knockout or round-robin schedule for a tournament field.

use anyhow::{Context, Result};
use log::{info, warn};
use pico_args::Arguments;
use std::io;

use tn_cli::{
    config::{CliConfig, CliOverrides, OutputMode},
    input::{Field, Prompter, entrants_from_names, random_teams},
    render::{render_json, render_random_teams, render_schedule},
};
use tourney::{EventKind, Format, RandomShuffler, Shuffler, generate};

const HELP: &str = "\
Generate a tournament match schedule

USAGE:
  tn_cli [OPTIONS]

OPTIONS:
  --format FORMAT       knockout | round-robin  [default: ask]
  --event KIND          singles | doubles  [default: env TOURNEY_EVENT or ask]
  --entrant NAME        Entrant in seed order, repeatable (doubles: A/B)
  --player NAME         Player for random doubles pairing, repeatable
  --seed N              Seed the draw for a reproducible schedule  [default: env TOURNEY_SEED]

FLAGS:
  --json                Print the schedule as JSON  [default: env TOURNEY_OUTPUT]
  -h, --help            Print help information

With no --entrant or --player the field is entered interactively.
";

struct Args {
    format: Option<Format>,
    entrants: Vec<String>,
    players: Vec<String>,
}

fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let overrides = CliOverrides {
        seed: pargs.opt_value_from_str("--seed")?,
        json: pargs.contains("--json"),
        event_kind: pargs.opt_value_from_str("--event")?,
    };
    let args = Args {
        format: pargs.opt_value_from_str("--format")?,
        entrants: pargs.values_from_str("--entrant")?,
        players: pargs.values_from_str("--player")?,
    };

    env_logger::builder().format_target(false).init();

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        warn!("Ignoring unused arguments: {remaining:?}");
    }

    let config = CliConfig::from_env(overrides)?;
    info!("Configuration: {config:?}");

    match config.seed {
        Some(seed) => run(args, &config, &mut RandomShuffler::seeded(seed)),
        None => run(args, &config, &mut RandomShuffler::new()),
    }
}

fn run<S: Shuffler>(args: Args, config: &CliConfig, shuffler: &mut S) -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let field = if !args.players.is_empty() {
        let teams = random_teams(args.players, shuffler)?;
        if config.output == OutputMode::Text {
            print!("\n{}", render_random_teams(&teams));
        }
        Field {
            event_kind: EventKind::Doubles,
            entrants: teams.teams.clone(),
            random_teams: Some(teams),
        }
    } else if !args.entrants.is_empty() {
        let event_kind = config.event_kind.unwrap_or_default();
        Field {
            event_kind,
            entrants: entrants_from_names(&args.entrants, event_kind)?,
            random_teams: None,
        }
    } else {
        prompter
            .collect_field(config.event_kind, shuffler)
            .context("Failed to read the field")?
    };

    let format = match args.format {
        Some(format) => format,
        None => prompter
            .choose("\nSelect format (1: knockout, 2: round-robin): ")
            .context("Failed to read the format")?,
    };

    info!(
        "Generating {} schedule for {} {} entrants",
        format,
        field.entrants.len(),
        field.event_kind
    );
    let schedule = generate(format, &field.entrants, field.event_kind, shuffler)
        .context("Error generating schedule")?;

    match config.output {
        OutputMode::Text => print!("\n{}", render_schedule(&schedule)),
        OutputMode::Json => println!(
            "{}",
            render_json(&schedule, field.random_teams.as_ref())
                .context("Failed to serialize schedule")?
        ),
    }

    Ok(())
}
