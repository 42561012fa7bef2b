//! Turns arbitrary move requests into playable moves plus a shaped reward.
//!
//! A learning agent may ask for any `(from, to)` pair. Legal requests are
//! played as-is and earn a small reward; everything else is redirected to a
//! random legal move and penalised, so an episode never stalls on bad input.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{board::Board, movegen::legal_destinations_from, types::*};

/// Origin square does not hold a piece of the side to move.
pub const WRONG_PIECE_COLOR_PENALTY: f32 = -1.0;
/// Right piece, unreachable destination.
pub const ILLEGAL_MOVE_PENALTY_1: f32 = -0.1;
/// Right piece, but it cannot move at all.
pub const ILLEGAL_MOVE_PENALTY_2: f32 = -0.1;
pub const LEGAL_MOVE_REWARD: f32 = 0.01;

/// Which branch of the resolver produced the move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The request was legal and is played unchanged.
    Legal,
    /// The origin held no piece of the side to move.
    WrongColor,
    /// Same piece, different destination.
    RedirectedDestination,
    /// The requested piece was stuck, another piece moves instead.
    RedirectedPiece,
    /// The side to move has no legal move at all.
    NoLegalMove,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    /// Move to play, `None` when the side to move cannot move.
    pub mv: Option<Move>,
    pub reward: f32,
    pub outcome: Outcome,
}

/// Resolve a requested move for `side`.
///
/// Checks run in order and the first match wins:
/// 1. wrong color (or empty origin): any random legal move, `WRONG_PIECE_COLOR_PENALTY`,
///    or `(None, 0.0)` when the side has no move;
/// 2. `to` reachable: the request itself, `LEGAL_MOVE_REWARD`;
/// 3. the piece has other destinations: one of them, `ILLEGAL_MOVE_PENALTY_1`;
/// 4. otherwise any random legal move (or `None`), `ILLEGAL_MOVE_PENALTY_2`.
pub fn resolve_move<R: Rng + ?Sized>(
    board: &Board,
    from: u8,
    to: u8,
    side: Color,
    rng: &mut R,
) -> Resolution {
    assert!(from < 64 && to < 64, "move {from}->{to} is off the board");

    if !board.piece_at(from).belongs_to(side) {
        let mv = random_legal_move(board, side, rng);
        trace!(from, to, %side, fallback = ?mv, "wrong piece color");
        return match mv {
            Some(_) => Resolution {
                mv,
                reward: WRONG_PIECE_COLOR_PENALTY,
                outcome: Outcome::WrongColor,
            },
            None => Resolution {
                mv: None,
                reward: 0.0,
                outcome: Outcome::NoLegalMove,
            },
        };
    }

    let mask = legal_destinations_from(board, from);
    if mask.contains(to) {
        return Resolution {
            mv: Some(Move::new(from, to)),
            reward: LEGAL_MOVE_REWARD,
            outcome: Outcome::Legal,
        };
    }

    if let Some(&alt) = mask.destinations().choose(rng) {
        trace!(from, to, alt, "redirected destination");
        return Resolution {
            mv: Some(Move::new(from, alt)),
            reward: ILLEGAL_MOVE_PENALTY_1,
            outcome: Outcome::RedirectedDestination,
        };
    }

    let mv = random_legal_move(board, side, rng);
    trace!(from, to, fallback = ?mv, "piece cannot move");
    Resolution {
        mv,
        reward: ILLEGAL_MOVE_PENALTY_2,
        outcome: if mv.is_some() {
            Outcome::RedirectedPiece
        } else {
            Outcome::NoLegalMove
        },
    }
}

/// A uniformly chosen legal move for `color`.
///
/// Pieces are visited in random order and the first one with any destination
/// moves to one of them, picked uniformly. `None` when no piece of `color`
/// can move (or there are none).
pub fn random_legal_move<R: Rng + ?Sized>(board: &Board, color: Color, rng: &mut R) -> Option<Move> {
    let mut pieces = board.squares_of(color);
    pieces.shuffle(rng);

    for from in pieces {
        let destinations = legal_destinations_from(board, from).destinations();
        if let Some(&to) = destinations.choose(rng) {
            return Some(Move::new(from, to));
        }
    }
    None
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod resolve_tests;
