use std::fmt;
use std::str::FromStr;

use crate::{
    board::Board,
    error::{Error, Result},
    types::*,
};

pub const ROW_SEPARATOR: char = '/';

/// Compact board text: rows in storage order (row 0 first), empty runs as a
/// digit, pieces as letters, rows joined by `/`.
///
/// The output is a valid FEN piece-placement field, so it can be handed to a
/// standard board renderer as is.
pub fn to_notation(board: &Board) -> String {
    let mut out = String::with_capacity(72);
    for (rank, row) in board.rows().iter().enumerate() {
        if rank > 0 {
            out.push(ROW_SEPARATOR);
        }
        let mut empty = 0u8;
        for code in row {
            if code.is_empty() {
                empty += 1;
                continue;
            }
            if empty > 0 {
                out.push((b'0' + empty) as char);
                empty = 0;
            }
            out.push(code.to_char());
        }
        if empty > 0 {
            out.push((b'0' + empty) as char);
        }
    }
    out
}

/// Inverse of [`to_notation`].
pub fn from_notation(text: &str) -> Result<Board> {
    let rows: Vec<&str> = text.split(ROW_SEPARATOR).collect();
    if rows.len() != 8 {
        return Err(Error::InvalidNotation(format!(
            "expected 8 rows, found {}",
            rows.len()
        )));
    }

    let mut board = Board::empty();
    for (rank, row) in rows.iter().enumerate() {
        let mut file: u8 = 0;
        let mut after_digit = false;
        for ch in row.chars() {
            if let Some(d) = ch.to_digit(10) {
                if d == 0 {
                    return Err(Error::InvalidNotation(format!("zero run in row {rank}")));
                }
                // a run is always written as one digit
                if after_digit {
                    return Err(Error::InvalidNotation(format!("split empty run in row {rank}")));
                }
                after_digit = true;
                file += d as u8;
            } else {
                after_digit = false;
                let code = PieceCode::from_char(ch)
                    .map_err(|_| Error::InvalidNotation(format!("unexpected {ch:?} in row {rank}")))?;
                if file >= 8 {
                    return Err(Error::InvalidNotation(format!("row {rank} is too long")));
                }
                board.set(file, rank as u8, code);
                file += 1;
            }
            if file > 8 {
                return Err(Error::InvalidNotation(format!("row {rank} is too long")));
            }
        }
        if file != 8 {
            return Err(Error::InvalidNotation(format!(
                "row {rank} covers {file} squares"
            )));
        }
    }
    Ok(board)
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        from_notation(s)
    }
}

/// One row per line, squares separated by spaces, blanks for empty squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|c| c.to_char().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
