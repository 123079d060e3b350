use campo_core::DisplayPos;
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Step(DisplayPos),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("enter two numbers, e.g. \"2 1\"")]
    NotTwoFields,
    #[error("\"{0}\" is not a valid row number")]
    BadRow(String),
    #[error("\"{0}\" is not a valid column number")]
    BadColumn(String),
}

/// Parses one REPL line: `e` quits, `<row> <col>` steps into a position
/// given in display coordinates (bottom-left origin).
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("e") {
        return Ok(Command::Quit);
    }

    let mut fields = line.split_whitespace();
    let (Some(row), Some(col), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(ParseError::NotTwoFields);
    };

    let row = row.parse().map_err(|_| ParseError::BadRow(row.into()))?;
    let col = col.parse().map_err(|_| ParseError::BadColumn(col.into()))?;
    Ok(Command::Step(DisplayPos::new(row, col)))
}
