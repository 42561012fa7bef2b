//! Board to tensor projection for network input.

use crate::board::Board;

pub const NUM_PLANES: usize = 6;

/// Flat feature count: one plane per piece kind, 64 squares each.
pub const NUM_FEATURES: usize = NUM_PLANES * 64;

/// Six 8×8 planes indexed `[plane][rank][file]`, planes in [`PieceKind::ALL`](crate::types::PieceKind::ALL) order.
pub type Observation = [[[i8; 8]; 8]; NUM_PLANES];

/// Encode a board as six signed planes.
///
/// A cell is -1 when it holds a Black (positive code) piece of the plane's
/// kind, +1 for a White piece of that kind and 0 otherwise.
pub fn board_to_observation(board: &Board) -> Observation {
    let mut obs = [[[0i8; 8]; 8]; NUM_PLANES];
    for (rank, row) in board.rows().iter().enumerate() {
        for (file, code) in row.iter().enumerate() {
            if let Some(piece) = code.piece() {
                obs[piece.kind.idx()][rank][file] = -piece.color.sign();
            }
        }
    }
    obs
}

/// The observation flattened plane by plane, then rank, then file.
pub fn observation_features(board: &Board) -> Vec<f32> {
    board_to_observation(board)
        .iter()
        .flatten()
        .flatten()
        .map(|&v| v as f32)
        .collect()
}

#[cfg(test)]
#[path = "observation_tests.rs"]
mod observation_tests;
