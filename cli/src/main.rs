use std::io::{self, BufRead, Write};

use anyhow::Result;
use campo_core::{FieldConfig, Minefield, StepOutcome};
use clap::Parser;
use clap_verbosity_flag::Verbosity;

use crate::input::Command;

mod input;
mod render;

/// Terminal minefield: reveal every safe cell without stepping on a mine.
#[derive(Debug, Parser)]
#[command(name = "campo", version, about)]
struct Args {
    /// Board rows (2-50)
    #[arg(default_value_t = FieldConfig::DEFAULT_ROWS)]
    rows: u8,

    /// Board columns (2-50)
    #[arg(default_value_t = FieldConfig::DEFAULT_COLUMNS)]
    columns: u8,

    /// Percentage of cells carrying a mine (1-99)
    #[arg(default_value_t = FieldConfig::DEFAULT_DENSITY)]
    density: u8,

    /// Seed for a reproducible mine layout
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    verbosity: Verbosity,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbosity.tracing_level_filter())
        .init();

    let mut field = match args.seed {
        Some(seed) => Minefield::create_seeded(args.rows, args.columns, args.density, seed)?,
        None => Minefield::create(args.rows, args.columns, args.density)?,
    };
    log::debug!(
        "{}x{} board with {} mines",
        field.rows(),
        field.columns(),
        field.total_mines()
    );

    run(&mut field, io::stdin().lock(), io::stdout().lock())
}

/// The presentation loop: print the board, read a position, step, report.
/// All game rules live in the core; this only translates outcomes into
/// messages.
fn run(field: &mut Minefield, input: impl BufRead, mut out: impl Write) -> Result<()> {
    render::draw_board(&mut out, field, false)?;

    let mut lines = input.lines();
    loop {
        writeln!(
            out,
            "Enter \"<row> <col>\" to step into a position, or \"e\" to exit."
        )?;
        let Some(line) = lines.next() else { break };

        let pos = match input::parse_command(&line?) {
            Ok(Command::Quit) => break,
            Ok(Command::Step(pos)) => pos,
            Err(err) => {
                render::warn(&mut out, &err.to_string())?;
                continue;
            }
        };

        let outcome = field.step_into(pos);
        log::debug!("step into {pos:?} -> {outcome:?}");
        render::draw_board(&mut out, field, outcome.is_terminal())?;

        match outcome {
            StepOutcome::Revealed => {}
            StepOutcome::AlreadyRevealed => {
                render::warn(&mut out, "position already checked, pick another")?;
            }
            StepOutcome::RowOutOfRange => {
                let max = field.rows() - 1;
                render::warn(&mut out, &format!("row must be between 0 and {max}"))?;
            }
            StepOutcome::ColumnOutOfRange => {
                let max = field.columns() - 1;
                render::warn(&mut out, &format!("column must be between 0 and {max}"))?;
            }
            StepOutcome::HitMine => {
                render::warn(&mut out, "you stepped on a mine")?;
                break;
            }
            StepOutcome::AllClear => {
                render::success(&mut out, "you cleared the minefield")?;
                break;
            }
        }
    }

    Ok(())
}
