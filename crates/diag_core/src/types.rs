use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Side of the board. Black owns the positive piece codes, White the negative ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Sign carried by this color's piece codes.
    pub fn sign(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// Piece kinds, ordered by their code magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// All kinds in observation-plane order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Zero-based index, also the observation plane.
    pub fn idx(self) -> usize {
        self.magnitude() as usize - 1
    }

    pub const fn magnitude(self) -> i8 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Rook => 2,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 4,
            PieceKind::Queen => 5,
            PieceKind::King => 6,
        }
    }

    fn from_magnitude(m: i8) -> Option<PieceKind> {
        match m {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Rook),
            3 => Some(PieceKind::Knight),
            4 => Some(PieceKind::Bishop),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase notation letter.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

impl FromStr for PieceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pawn" => Ok(PieceKind::Pawn),
            "rook" => Ok(PieceKind::Rook),
            "knight" => Ok(PieceKind::Knight),
            "bishop" => Ok(PieceKind::Bishop),
            "queen" => Ok(PieceKind::Queen),
            "king" => Ok(PieceKind::King),
            _ => Err(Error::UnknownPieceName(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

/// Signed piece code stored in every board cell.
///
/// Magnitude 1..=6 is the kind (pawn, rook, knight, bishop, queen, king),
/// the sign is the color and 0 is an empty square. The constructor rejects
/// anything else, so a `PieceCode` in hand is always valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PieceCode(i8);

impl PieceCode {
    pub const EMPTY: PieceCode = PieceCode(0);

    pub fn new(raw: i32) -> Result<Self> {
        if (-6..=6).contains(&raw) {
            Ok(PieceCode(raw as i8))
        } else {
            Err(Error::InvalidPieceCode(raw))
        }
    }

    pub const fn from_piece(piece: Piece) -> Self {
        let m = piece.kind.magnitude();
        match piece.color {
            Color::Black => PieceCode(m),
            Color::White => PieceCode(-m),
        }
    }

    pub const fn of(kind: PieceKind, color: Color) -> Self {
        Self::from_piece(Piece { color, kind })
    }

    /// Build a code from a piece name such as `"knight"`.
    pub fn encode(name: &str, color: Color) -> Result<Self> {
        let kind: PieceKind = name.parse()?;
        Ok(Self::of(kind, color))
    }

    pub fn value(self) -> i8 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn color(self) -> Option<Color> {
        match self.0.signum() {
            1 => Some(Color::Black),
            -1 => Some(Color::White),
            _ => None,
        }
    }

    pub fn kind(self) -> Option<PieceKind> {
        PieceKind::from_magnitude(self.0.abs())
    }

    pub fn piece(self) -> Option<Piece> {
        Some(Piece {
            color: self.color()?,
            kind: self.kind()?,
        })
    }

    pub fn belongs_to(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// True when both squares are occupied by opposite colors.
    pub fn is_opponent_of(self, other: PieceCode) -> bool {
        (self.0 as i16) * (other.0 as i16) < 0
    }

    /// Notation letter: lowercase for Black, uppercase for White, blank for empty.
    pub fn to_char(self) -> char {
        match self.piece() {
            None => ' ',
            Some(Piece {
                color: Color::Black,
                kind,
            }) => kind.letter(),
            Some(Piece {
                color: Color::White,
                kind,
            }) => kind.letter().to_ascii_uppercase(),
        }
    }

    pub fn from_char(ch: char) -> Result<Self> {
        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'r' => PieceKind::Rook,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return Err(Error::InvalidPieceChar(ch)),
        };
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Ok(Self::of(kind, color))
    }
}

impl TryFrom<i8> for PieceCode {
    type Error = Error;

    fn try_from(raw: i8) -> Result<Self> {
        PieceCode::new(raw as i32)
    }
}

impl From<PieceCode> for i8 {
    fn from(code: PieceCode) -> i8 {
        code.0
    }
}

/// Notation letter for a raw code.
pub fn piece_char(raw: i8) -> Result<char> {
    Ok(PieceCode::try_from(raw)?.to_char())
}

/// A concrete move between two squares (`rank * 8 + file`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: u8, // 0..63
    pub to: u8,   // 0..63
}

impl Move {
    pub fn new(from: u8, to: u8) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", sq_to_coord(self.from), sq_to_coord(self.to))
    }
}

// Helpers
pub fn file_of(sq: u8) -> i8 {
    (sq % 8) as i8
}
pub fn rank_of(sq: u8) -> i8 {
    (sq / 8) as i8
}
pub fn sq(file: i8, rank: i8) -> Option<u8> {
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some((rank as u8) * 8 + (file as u8))
    } else {
        None
    }
}

pub fn sq_to_coord(sq: u8) -> String {
    let f = (b'a' + (sq % 8)) as char;
    let r = (b'1' + (sq / 8)) as char;
    format!("{f}{r}")
}

pub fn coord_to_sq(c: &str) -> Option<u8> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0];
    let r = b[1];
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return None;
    }
    let file = f - b'a';
    let rank = r - b'1';
    Some(rank * 8 + file)
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
