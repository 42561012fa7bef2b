//! Random Diagonal-Chess Agents
//!
//! Two baselines that need no training:
//! - [`RandomAgent`] plays a uniformly chosen legal move
//! - [`UniformActionAgent`] samples the raw action space, legal or not, the
//!   way an untrained policy head does
//!
//! Useful for smoke-testing the environment and as the floor any learned
//! agent has to beat.

use diag_core::{random_legal_move, Agent, Board, Color, NUM_ACTIONS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};


/// An agent that plays random legal moves.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, board: &Board, side: Color) -> u16 {
        // With nothing to move, any action resolves to "no legal move".
        random_legal_move(board, side, &mut self.rng)
            .map(|mv| mv.to_action())
            .unwrap_or(0)
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}

/// An agent that picks any of the 4096 actions with equal probability.
#[derive(Debug, Clone)]
pub struct UniformActionAgent {
    rng: StdRng,
}

impl UniformActionAgent {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformActionAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for UniformActionAgent {
    fn select_action(&mut self, _board: &Board, _side: Color) -> u16 {
        self.rng.gen_range(0..NUM_ACTIONS) as u16
    }

    fn name(&self) -> &str {
        "Uniform v1.0"
    }
}
