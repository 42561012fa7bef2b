use crate::error::{Error, Result};
use crate::types::*;

const E: PieceCode = PieceCode::EMPTY;
const BP: PieceCode = PieceCode::of(PieceKind::Pawn, Color::Black);
const BR: PieceCode = PieceCode::of(PieceKind::Rook, Color::Black);
const BN: PieceCode = PieceCode::of(PieceKind::Knight, Color::Black);
const BB: PieceCode = PieceCode::of(PieceKind::Bishop, Color::Black);
const BQ: PieceCode = PieceCode::of(PieceKind::Queen, Color::Black);
const BK: PieceCode = PieceCode::of(PieceKind::King, Color::Black);
const WP: PieceCode = PieceCode::of(PieceKind::Pawn, Color::White);
const WR: PieceCode = PieceCode::of(PieceKind::Rook, Color::White);
const WN: PieceCode = PieceCode::of(PieceKind::Knight, Color::White);
const WB: PieceCode = PieceCode::of(PieceKind::Bishop, Color::White);
const WQ: PieceCode = PieceCode::of(PieceKind::Queen, Color::White);
const WK: PieceCode = PieceCode::of(PieceKind::King, Color::White);

/// The diagonal starting layout, indexed `[rank][file]`.
///
/// Black occupies the band around the top-right corner of row 0..3, White the
/// mirrored band around row 7..3, with the pawns forming the diagonal front.
pub const STARTING_LAYOUT: [[PieceCode; 8]; 8] = [
    [E, E, E, BP, BR, BB, BN, BK],
    [E, E, E, E, BP, BP, BQ, BN],
    [E, E, E, E, E, BP, BP, BB],
    [WP, E, E, E, E, E, BP, BR],
    [WR, WP, E, E, E, E, E, BP],
    [WB, WP, WP, E, E, E, E, E],
    [WN, WQ, WP, WP, E, E, E, E],
    [WK, WN, WB, WR, WP, E, E, E],
];

/// An 8×8 grid of piece codes.
///
/// The board carries no side to move, history or legality invariant: any
/// arrangement of codes is accepted, including positions without kings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[PieceCode; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn starting() -> Self {
        Board {
            cells: STARTING_LAYOUT,
        }
    }

    /// Builds a board from raw codes, rows first.
    pub fn from_rows(rows: [[i8; 8]; 8]) -> Result<Self> {
        let mut board = Board::empty();
        for (rank, row) in rows.iter().enumerate() {
            for (file, &raw) in row.iter().enumerate() {
                board.cells[rank][file] = PieceCode::try_from(raw)?;
            }
        }
        Ok(board)
    }

    pub fn rows(&self) -> &[[PieceCode; 8]; 8] {
        &self.cells
    }

    /// Raw codes, rows first.
    pub fn to_rows(&self) -> [[i8; 8]; 8] {
        let mut out = [[0i8; 8]; 8];
        for (rank, row) in self.cells.iter().enumerate() {
            for (file, code) in row.iter().enumerate() {
                out[rank][file] = code.value();
            }
        }
        out
    }

    /// Code at `(file, rank)`. Panics when the square is off the board.
    pub fn get(&self, file: u8, rank: u8) -> PieceCode {
        assert!(file < 8 && rank < 8, "square ({file}, {rank}) is off the board");
        self.cells[rank as usize][file as usize]
    }

    pub fn set(&mut self, file: u8, rank: u8, code: PieceCode) {
        assert!(file < 8 && rank < 8, "square ({file}, {rank}) is off the board");
        self.cells[rank as usize][file as usize] = code;
    }

    pub fn piece_at(&self, sq: u8) -> PieceCode {
        self.get(sq % 8, sq / 8)
    }

    pub fn set_piece(&mut self, sq: u8, code: PieceCode) {
        self.set(sq % 8, sq / 8, code)
    }

    /// Squares holding a piece of `color`, in row-major order.
    pub fn squares_of(&self, color: Color) -> Vec<u8> {
        (0..64u8)
            .filter(|&s| self.piece_at(s).belongs_to(color))
            .collect()
    }

    pub fn count(&self, code: PieceCode) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == code).count()
    }

    pub fn count_kind(&self, kind: PieceKind) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| c.kind() == Some(kind))
            .count()
    }

    pub fn has_king(&self, color: Color) -> bool {
        self.count(PieceCode::of(PieceKind::King, color)) > 0
    }

    /// Moves the piece on `mv.from` to `mv.to`, returning whatever stood there.
    ///
    /// No legality check is made: callers pass moves produced by the resolver.
    pub fn make_move(&mut self, mv: Move) -> PieceCode {
        let moving = self.piece_at(mv.from);
        let captured = self.piece_at(mv.to);
        self.set_piece(mv.to, moving);
        self.set_piece(mv.from, PieceCode::EMPTY);
        captured
    }
}

impl TryFrom<[[i8; 8]; 8]> for Board {
    type Error = Error;

    fn try_from(rows: [[i8; 8]; 8]) -> Result<Self> {
        Board::from_rows(rows)
    }
}

/// True when the starting layout has exactly `code` on `(file, rank)`.
pub fn is_starting_square(file: u8, rank: u8, code: PieceCode) -> bool {
    assert!(file < 8 && rank < 8, "square ({file}, {rank}) is off the board");
    STARTING_LAYOUT[rank as usize][file as usize] == code
}
