use std::ops::Add;

use crate::{
    board::{Board, is_starting_square},
    types::*,
};

const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Legal destinations of a single piece.
///
/// A marked cell holds the code of the moving piece rather than a flag, i.e.
/// what the destination would contain after the move. Indexed `[rank][file]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MoveMask {
    cells: [[i8; 8]; 8],
}

impl MoveMask {
    pub fn empty() -> Self {
        Self::default()
    }

    fn mark(&mut self, to: u8, code: PieceCode) {
        self.cells[(to / 8) as usize][(to % 8) as usize] = code.value();
    }

    pub fn get(&self, file: u8, rank: u8) -> i8 {
        self.cells[rank as usize][file as usize]
    }

    pub fn contains(&self, sq: u8) -> bool {
        sq < 64 && self.get(sq % 8, sq / 8) != 0
    }

    pub fn rows(&self) -> &[[i8; 8]; 8] {
        &self.cells
    }

    /// Marked squares in row-major order.
    pub fn destinations(&self) -> Vec<u8> {
        (0..64u8).filter(|&s| self.contains(s)).collect()
    }

    pub fn count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&c| c != 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Elementwise sum. Only meaningful for masks of the same piece along
/// disjoint directions, where no square is marked twice.
impl Add for MoveMask {
    type Output = MoveMask;

    fn add(mut self, rhs: MoveMask) -> MoveMask {
        for (row, other) in self.cells.iter_mut().zip(rhs.cells.iter()) {
            for (cell, &o) in row.iter_mut().zip(other.iter()) {
                debug_assert!(*cell == 0 || o == 0, "overlapping move masks");
                *cell += o;
            }
        }
        self
    }
}

/// Destinations for the piece on `(file, rank)`.
///
/// Empty squares and kings yield an empty mask. Panics when the square is off
/// the board.
pub fn legal_destinations(board: &Board, file: u8, rank: u8) -> MoveMask {
    let code = board.get(file, rank);
    let from = rank * 8 + file;
    match code.kind() {
        Some(PieceKind::Pawn) => pawn_moves(board, from, code),
        Some(PieceKind::Rook) => slider_moves(board, from, code, &ROOK_DIRS),
        Some(PieceKind::Knight) => knight_moves(board, from, code),
        Some(PieceKind::Bishop) => slider_moves(board, from, code, &BISHOP_DIRS),
        Some(PieceKind::Queen) => queen_moves(board, from, code),
        // No king rule is defined for the variant.
        Some(PieceKind::King) => MoveMask::empty(),
        None => MoveMask::empty(),
    }
}

/// Same as [`legal_destinations`], addressed by square index.
pub fn legal_destinations_from(board: &Board, from: u8) -> MoveMask {
    legal_destinations(board, from % 8, from / 8)
}

/// Every legal move for `color`, origins and destinations in row-major order.
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for from in board.squares_of(color) {
        let mask = legal_destinations_from(board, from);
        out.extend(mask.destinations().into_iter().map(|to| Move::new(from, to)));
    }
    out
}

fn pawn_moves(board: &Board, from: u8, code: PieceCode) -> MoveMask {
    let mut mask = MoveMask::empty();
    let f = file_of(from);
    let r = rank_of(from);
    let home = is_starting_square(f as u8, r as u8, code);

    // Black pawns advance toward higher ranks and step toward lower files.
    let dir: i8 = if code.value() > 0 { 1 } else { -1 };

    // forward, double step from the home square
    if let Some(to) = sq(f, r + dir)
        && board.piece_at(to).is_empty()
    {
        mask.mark(to, code);
        if home
            && let Some(to2) = sq(f, r + 2 * dir)
            && board.piece_at(to2).is_empty()
        {
            mask.mark(to2, code);
        }
    }

    // sideways, one side only
    if let Some(to) = sq(f - dir, r)
        && board.piece_at(to).is_empty()
    {
        mask.mark(to, code);
        if home
            && let Some(to2) = sq(f - 2 * dir, r)
            && board.piece_at(to2).is_empty()
        {
            mask.mark(to2, code);
        }
    }

    // captures on three of the four diagonals
    for (df, dr) in [(-dir, dir), (-dir, -dir), (dir, dir)] {
        if let Some(to) = sq(f + df, r + dr)
            && board.piece_at(to).is_opponent_of(code)
        {
            mask.mark(to, code);
        }
    }

    mask
}

fn slider_moves(board: &Board, from: u8, code: PieceCode, dirs: &[(i8, i8)]) -> MoveMask {
    let mut mask = MoveMask::empty();
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for &(df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            let target = board.piece_at(to);
            if target.is_empty() {
                mask.mark(to, code);
            } else {
                if target.is_opponent_of(code) {
                    mask.mark(to, code);
                }
                break;
            }
            f += df;
            r += dr;
        }
    }
    mask
}

fn queen_moves(board: &Board, from: u8, code: PieceCode) -> MoveMask {
    slider_moves(board, from, code, &ROOK_DIRS) + slider_moves(board, from, code, &BISHOP_DIRS)
}

fn knight_moves(board: &Board, from: u8, code: PieceCode) -> MoveMask {
    let mut mask = MoveMask::empty();
    let f = file_of(from);
    let r = rank_of(from);
    for (df, dr) in KNIGHT_OFFSETS {
        if let Some(to) = sq(f + df, r + dr) {
            let target = board.piece_at(to);
            if target.is_empty() || target.is_opponent_of(code) {
                mask.mark(to, code);
            }
        }
    }
    mask
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
