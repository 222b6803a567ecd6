//! Terminal front end for one planner session.
//!
//! Runs a list of steps against a fresh month and prints the resulting grid,
//! stats and inventory. Useful as a smoke probe of `netdays_core` wiring.

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use netdays_core::{
    core_version, default_log_level, init_logging, CardType, GestureError, Month, PlacementOutcome,
    PlannerConfig, PlannerSession, TapAdapter, WEEKDAY_LABELS,
};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "netdays")]
#[command(about = "Plan effort and slump days on a monthly calendar", long_about = None)]
struct Cli {
    /// Month to open as `YYYY-MM` (defaults to the current month)
    #[arg(long)]
    month: Option<String>,

    /// JSON file with `effort_capacity` / `slump_capacity`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Absolute directory for rolling log files
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,

    /// Print the final view as JSON instead of a text grid
    #[arg(long, default_value = "false")]
    json: bool,

    /// Steps: `effort@<cell>`, `slump@<cell>`, `remove-effort#<n>`,
    /// `remove-slump#<n>`, `next`, `prev`, `reset`
    steps: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Place(CardType, usize),
    /// Removes the n-th (1-based) placed card of a type, in grid order.
    Remove(CardType, usize),
    Navigate(i32),
    Reset,
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "next" => return Ok(Self::Navigate(1)),
            "prev" => return Ok(Self::Navigate(-1)),
            "reset" => return Ok(Self::Reset),
            _ => {}
        }
        if let Some((kind, cell)) = value.split_once('@') {
            let cell = cell.parse().with_context(|| format!("bad cell in `{value}`"))?;
            return Ok(Self::Place(parse_card_type(kind)?, cell));
        }
        if let Some((kind, position)) = value.split_once('#') {
            let kind = kind
                .strip_prefix("remove-")
                .with_context(|| format!("unknown step `{value}`"))?;
            let position = position
                .parse()
                .with_context(|| format!("bad card number in `{value}`"))?;
            return Ok(Self::Remove(parse_card_type(kind)?, position));
        }
        bail!("unknown step `{value}`")
    }
}

fn parse_card_type(value: &str) -> Result<CardType> {
    match value {
        "effort" => Ok(CardType::Effort),
        "slump" => Ok(CardType::Slump),
        other => bail!("unknown card type `{other}`; expected effort|slump"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
        info!("event=cli_start module=cli status=ok version={}", core_version());
    }

    let config = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            PlannerConfig::from_json_str(&raw)?
        }
        None => PlannerConfig::default(),
    };
    let mut session = match &cli.month {
        Some(label) => PlannerSession::new(Month::parse(label)?, config)?,
        None => PlannerSession::for_today(config)?,
    };

    let steps = cli
        .steps
        .iter()
        .map(|value| value.parse::<Step>())
        .collect::<Result<Vec<_>>>()?;
    let mut tap = TapAdapter::new();
    for step in steps {
        run_step(step, &mut session, &mut tap)?;
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&session.view())?);
    } else {
        print_session(&session);
    }
    Ok(())
}

fn run_step(step: Step, session: &mut PlannerSession, tap: &mut TapAdapter) -> Result<()> {
    match step {
        Step::Place(card_type, cell) => {
            let result = tap
                .select(card_type, session)
                .and_then(|()| tap.tap(cell, session));
            match result {
                Ok(_) => println!("placed {card_type} card at cell {cell}"),
                Err(GestureError::Rejected(reason)) => println!("cell {cell}: {reason}"),
                Err(err) => println!("{err}"),
            }
        }
        Step::Remove(card_type, position) => {
            let ids = session.used_card_ids(card_type);
            let Some(card_id) = position.checked_sub(1).and_then(|i| ids.get(i)).copied() else {
                println!("no {card_type} card #{position} on the grid");
                return Ok(());
            };
            let cleared = session.remove(card_id);
            println!("removed {card_type} card #{position} from cells {cleared:?}");
        }
        Step::Navigate(delta) => {
            let month = session.navigate(delta)?;
            println!("showing {month}");
        }
        Step::Reset => {
            session.reset();
            println!("reset {}", session.month());
        }
    }
    Ok(())
}

fn print_session(session: &PlannerSession) {
    println!("{}", session.month());
    println!("{}", WEEKDAY_LABELS.map(|label| format!("{label:>5}")).join(""));
    for row in session.grid().rows() {
        let line: String = row
            .iter()
            .map(|cell| match (cell.date, cell.card_type, cell.theme_index) {
                (None, _, _) => "     ".to_string(),
                (Some(day), None, _) => format!("{day:>5}"),
                (Some(day), Some(CardType::Effort), theme) => {
                    format!("{day:>3}E{}", theme.unwrap_or(0))
                }
                (Some(day), Some(CardType::Slump), _) => format!("{day:>3}S "),
            })
            .collect();
        println!("{line}");
    }

    let stats = session.stats();
    let inventory = session.inventory();
    println!(
        "effort days {} | slump days {} | completion {}%",
        stats.effort_days, stats.slump_days, stats.completion_rate
    );
    println!(
        "effort cards {}/{} | slump cards {}/{}",
        inventory.effort.used,
        inventory.effort.capacity,
        inventory.slump.used,
        inventory.slump.capacity
    );
    if let Some(PlacementOutcome::Rejected { reason }) = session.last_outcome() {
        println!("last request rejected: {reason}");
    }
}

#[cfg(test)]
mod tests {
    use super::Step;
    use netdays_core::CardType;

    #[test]
    fn parses_all_step_forms() {
        assert_eq!("effort@3".parse::<Step>().unwrap(), Step::Place(CardType::Effort, 3));
        assert_eq!("slump@10".parse::<Step>().unwrap(), Step::Place(CardType::Slump, 10));
        assert_eq!(
            "remove-effort#2".parse::<Step>().unwrap(),
            Step::Remove(CardType::Effort, 2)
        );
        assert_eq!("prev".parse::<Step>().unwrap(), Step::Navigate(-1));
        assert_eq!("reset".parse::<Step>().unwrap(), Step::Reset);
    }

    #[test]
    fn rejects_unknown_steps() {
        assert!("nap@3".parse::<Step>().is_err());
        assert!("effort@x".parse::<Step>().is_err());
        assert!("drop-effort#1".parse::<Step>().is_err());
        assert!("later".parse::<Step>().is_err());
    }
}
