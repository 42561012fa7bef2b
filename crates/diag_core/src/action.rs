//! Integer action space: `from_file + from_rank*8 + to_file*64 + to_rank*512`.

use crate::{
    error::{Error, Result},
    types::*,
};

/// Number of distinct actions (64 origins × 64 destinations).
pub const NUM_ACTIONS: u32 = 4096;

pub fn encode_action(from_file: u8, from_rank: u8, to_file: u8, to_rank: u8) -> u16 {
    assert!(
        from_file < 8 && from_rank < 8 && to_file < 8 && to_rank < 8,
        "action coordinates out of range"
    );
    from_file as u16 + from_rank as u16 * 8 + to_file as u16 * 64 + to_rank as u16 * 512
}

/// Splits an action into `(from_file, from_rank, to_file, to_rank)`.
pub fn decode_action(action: u32) -> Result<(u8, u8, u8, u8)> {
    if action >= NUM_ACTIONS {
        return Err(Error::InvalidAction(action));
    }
    let a = action as u16;
    Ok((
        (a % 8) as u8,
        (a / 8 % 8) as u8,
        (a / 64 % 8) as u8,
        (a / 512) as u8,
    ))
}

impl Move {
    pub fn to_action(self) -> u16 {
        encode_action(
            file_of(self.from) as u8,
            rank_of(self.from) as u8,
            file_of(self.to) as u8,
            rank_of(self.to) as u8,
        )
    }

    pub fn from_action(action: u32) -> Result<Move> {
        let (ff, fr, tf, tr) = decode_action(action)?;
        Ok(Move::new(fr * 8 + ff, tr * 8 + tf))
    }
}

/// Parses a four-character move such as `"d1c1"`; rank digit `1` is row 0.
pub fn parse_move(text: &str) -> Result<Move> {
    let bad = || Error::InvalidMoveNotation(text.to_string());
    if !text.is_ascii() || text.len() != 4 {
        return Err(bad());
    }
    let from = coord_to_sq(&text[0..2]).ok_or_else(bad)?;
    let to = coord_to_sq(&text[2..4]).ok_or_else(bad)?;
    Ok(Move::new(from, to))
}

pub fn action_from_str(text: &str) -> Result<u16> {
    parse_move(text).map(Move::to_action)
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod action_tests;
