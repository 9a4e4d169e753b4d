//! Interactive move entry.

use crate::gobblet::{Coord, Move, Origin};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

const ORIGIN_HEADER: &str = "Quel Gobblet voulez-vous déplacer:";
const ORIGIN_PROMPT: &str =
    "Donnez le numéro de la pile (p) ou la position sur le plateau (x,y): ";
const DESTINATION_PROMPT: &str = "Où voulez-vous placer votre Gobblet (x,y): ";

/// Error raised while reading a move from the player.
#[derive(Debug, derive_more::Display)]
pub enum InputError {
    /// A segment is not an unsigned integer.
    #[display("`{}` is not a valid number", _0)]
    InvalidNumber(String),

    /// A coordinate does not have exactly two segments.
    #[display("Expected a position as x,y but got {} values", _0)]
    WrongSegmentCount(usize),

    /// Input ended before a full move was entered.
    #[display("Input closed before a move was entered")]
    Closed,

    /// Reading or writing the terminal failed.
    #[display("Terminal I/O failed: {}", _0)]
    Io(std::io::Error),
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        InputError::Io(err)
    }
}

impl InputError {
    /// Returns true if asking again may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, InputError::InvalidNumber(_) | InputError::WrongSegmentCount(_))
    }
}

fn parse_number(text: &str) -> Result<usize, InputError> {
    let text = text.trim();
    text.parse()
        .map_err(|_| InputError::InvalidNumber(text.to_string()))
}

/// Parses a board position written as `x,y`.
pub fn parse_coord(text: &str) -> Result<Coord, InputError> {
    let segments: Vec<&str> = text.trim().split(',').collect();
    match segments.as_slice() {
        [x, y] => Ok(Coord(parse_number(x)?, parse_number(y)?)),
        other => Err(InputError::WrongSegmentCount(other.len())),
    }
}

/// Parses an origin: a pile index, or a board position `x,y`.
pub fn parse_origin(text: &str) -> Result<Origin, InputError> {
    if text.contains(',') {
        parse_coord(text).map(Origin::Board)
    } else {
        parse_number(text).map(Origin::Pile)
    }
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String, InputError> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::Closed);
    }
    Ok(line)
}

/// Prompts for an origin then a destination.
#[instrument(skip_all)]
pub fn read_move<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Move, InputError> {
    writeln!(output, "{}", ORIGIN_HEADER)?;
    let origin = parse_origin(&ask(input, output, ORIGIN_PROMPT)?)?;
    let destination = parse_coord(&ask(input, output, DESTINATION_PROMPT)?)?;

    let mv = Move::new(origin, destination);
    debug!(mv = %mv, "Move entered");
    Ok(mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_pile_origin() {
        assert_eq!(parse_origin("2\n").unwrap(), Origin::Pile(2));
    }

    #[test]
    fn test_parse_board_origin() {
        assert_eq!(parse_origin("1, 3").unwrap(), Origin::Board(Coord(1, 3)));
    }

    #[test]
    fn test_parse_coord_rejects_wrong_segment_count() {
        assert!(matches!(parse_coord("1,2,3"), Err(InputError::WrongSegmentCount(3))));
        assert!(matches!(parse_coord("1"), Err(InputError::WrongSegmentCount(1))));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(matches!(parse_origin("a"), Err(InputError::InvalidNumber(ref s)) if s == "a"));
        assert!(matches!(parse_coord("1,b"), Err(InputError::InvalidNumber(_))));
        assert!(matches!(parse_coord("-1,0"), Err(InputError::InvalidNumber(_))));
    }

    #[test]
    fn test_read_move_from_pile() {
        let mut input = Cursor::new("0\n0,1\n");
        let mut output = Vec::new();

        let mv = read_move(&mut input, &mut output).unwrap();
        assert_eq!(mv, Move::new(Origin::Pile(0), Coord(0, 1)));

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.starts_with(ORIGIN_HEADER));
        assert!(shown.contains(ORIGIN_PROMPT));
        assert!(shown.ends_with(DESTINATION_PROMPT));
    }

    #[test]
    fn test_read_move_from_board() {
        let mut input = Cursor::new("2,3\n0,1\n");
        let mv = read_move(&mut input, &mut Vec::new()).unwrap();
        assert_eq!(mv, Move::new(Origin::Board(Coord(2, 3)), Coord(0, 1)));
    }

    #[test]
    fn test_read_move_closed_input() {
        let mut input = Cursor::new("1\n");
        let err = read_move(&mut input, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, InputError::Closed));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_bad_number_is_retryable() {
        assert!(parse_origin("x").unwrap_err().is_retryable());
    }
}
