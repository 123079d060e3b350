use std::io::{self, Write};

use campo_core::{Coord, Minefield};
use crossterm::style::{StyledContent, Stylize};

const BOMB: char = 'X';
const HIDDEN: char = '?';

/// Prints the board with the bottom-left-origin row labels the player
/// addresses. `reveal_secret` shows mines and counts everywhere; it is
/// used once the game ends.
pub fn draw_board(out: &mut impl Write, field: &Minefield, reveal_secret: bool) -> io::Result<()> {
    write!(out, "  ")?;
    for col in 0..field.columns() {
        write!(out, " {col}")?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "  {}",
        "-".repeat(usize::from(field.columns()) * 2 + 1)
    )?;

    for row in 0..field.rows() {
        write!(out, "{}|", field.rows() - 1 - row)?;
        for col in 0..field.columns() {
            write!(out, " {}", cell_glyph(field, row, col, reveal_secret))?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}

fn cell_glyph(
    field: &Minefield,
    row: Coord,
    col: Coord,
    reveal_secret: bool,
) -> StyledContent<String> {
    let shown = field.is_revealed(row, col) || reveal_secret;
    if !shown {
        return HIDDEN.to_string().stylize();
    }

    if field.has_bomb(row, col) {
        BOMB.to_string().red()
    } else {
        field.adjacent_bomb_count((row, col)).to_string().green()
    }
}

pub fn warn(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.red())
}

pub fn success(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.green())
}
