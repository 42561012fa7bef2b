//! Diagonal Chess Environment
//!
//! Gym-style wrapper around `diag_core`. The environment owns the only
//! mutable board; the engine is only ever handed a shared reference and tells
//! the environment which move to play and how to score the request.
//!
//! ```ignore
//! let mut env = DiagonalChess::new(EnvConfig::default());
//! let obs = env.reset();
//! let step = env.step(action)?;
//! ```
//!
//! Actions are integers in `0..4096` (`from_file + from_rank*8 + to_file*64 +
//! to_rank*512`). Any action is accepted: illegal ones are redirected to a
//! legal move and penalised, see [`diag_core::resolve_move`].

mod config;

pub use config::EnvConfig;

use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use diag_core::{
    all_legal_moves, board_to_observation, parse_move, resolve_move, to_notation, Board, Color,
    Move, Observation, PieceCode, PieceKind, Resolution,
};

#[derive(thiserror::Error, Debug)]
pub enum EnvError {
    #[error(transparent)]
    Engine(#[from] diag_core::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("cannot write config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
    #[error("episode is over, call reset()")]
    EpisodeOver,
}

/// Why an episode ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The given side lost its last king.
    KingCaptured(Color),
    /// The given side had no legal move on its turn.
    NoLegalMove(Color),
    /// The ply limit was reached.
    PlyLimit,
}

/// Result of a single [`DiagonalChess::step`].
#[derive(Debug, Clone)]
pub struct Step {
    pub observation: Observation,
    pub reward: f32,
    pub done: bool,
    /// Side that made (or failed to make) this move
    pub mover: Color,
    pub resolution: Resolution,
    /// Whatever stood on the destination square
    pub captured: PieceCode,
    pub termination: Option<Termination>,
}

pub struct DiagonalChess {
    board: Board,
    side_to_move: Color,
    ply: u32,
    termination: Option<Termination>,
    config: EnvConfig,
    rng: StdRng,
}

impl Default for DiagonalChess {
    fn default() -> Self {
        Self::new(EnvConfig::default())
    }
}

impl DiagonalChess {
    pub fn new(config: EnvConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            board: Board::starting(),
            side_to_move: config.first_to_move,
            ply: 0,
            termination: None,
            config,
            rng,
        }
    }

    /// Start a new episode from the diagonal starting layout.
    pub fn reset(&mut self) -> Observation {
        self.reset_to(Board::starting(), self.config.first_to_move)
    }

    /// Start a new episode from an arbitrary board.
    pub fn reset_to(&mut self, board: Board, side_to_move: Color) -> Observation {
        self.board = board;
        self.side_to_move = side_to_move;
        self.ply = 0;
        self.termination = None;
        board_to_observation(&self.board)
    }

    /// Play `action` for the side to move.
    ///
    /// Errors only for actions outside `0..4096` or after the episode ended;
    /// illegal moves are resolved and penalised instead.
    pub fn step(&mut self, action: u32) -> Result<Step, EnvError> {
        let requested = Move::from_action(action)?;
        self.play(requested)
    }

    /// Like [`step`](Self::step) with a move string such as `"d1d2"`.
    pub fn step_notation(&mut self, text: &str) -> Result<Step, EnvError> {
        let requested = parse_move(text)?;
        self.play(requested)
    }

    fn play(&mut self, requested: Move) -> Result<Step, EnvError> {
        if self.termination.is_some() {
            return Err(EnvError::EpisodeOver);
        }

        let mover = self.side_to_move;
        let resolution = resolve_move(
            &self.board,
            requested.from,
            requested.to,
            mover,
            &mut self.rng,
        );

        let mut captured = PieceCode::EMPTY;
        let mut termination = None;
        match resolution.mv {
            Some(mv) => {
                captured = self.board.make_move(mv);
                self.ply += 1;
                self.side_to_move = mover.other();

                if self.config.end_on_king_capture
                    && captured.kind() == Some(PieceKind::King)
                    && !self.board.has_king(mover.other())
                {
                    termination = Some(Termination::KingCaptured(mover.other()));
                } else if self.ply >= self.config.max_plies {
                    termination = Some(Termination::PlyLimit);
                }
            }
            None => termination = Some(Termination::NoLegalMove(mover)),
        }
        self.termination = termination;

        debug!(
            ply = self.ply,
            %mover,
            %requested,
            played = ?resolution.mv.map(|m| m.to_string()),
            outcome = ?resolution.outcome,
            reward = resolution.reward,
            "step"
        );
        if let Some(t) = termination {
            debug!(ply = self.ply, termination = ?t, "episode finished");
        }

        Ok(Step {
            observation: board_to_observation(&self.board),
            reward: resolution.reward,
            done: termination.is_some(),
            mover,
            resolution,
            captured,
            termination,
        })
    }

    /// Every legal action for the side to move, for policy masking.
    pub fn legal_actions(&self) -> Vec<u16> {
        all_legal_moves(&self.board, self.side_to_move)
            .into_iter()
            .map(Move::to_action)
            .collect()
    }

    pub fn observation(&self) -> Observation {
        board_to_observation(&self.board)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn ply(&self) -> u32 {
        self.ply
    }

    pub fn is_done(&self) -> bool {
        self.termination.is_some()
    }

    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Board notation for an external renderer.
    pub fn render(&self) -> String {
        to_notation(&self.board)
    }
}

impl fmt::Display for DiagonalChess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

impl fmt::Debug for DiagonalChess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagonalChess")
            .field("board", &to_notation(&self.board))
            .field("side_to_move", &self.side_to_move)
            .field("ply", &self.ply)
            .field("termination", &self.termination)
            .finish()
    }
}
