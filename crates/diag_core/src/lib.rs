pub mod action;
pub mod board;
pub mod error;
pub mod movegen;
pub mod notation;
pub mod observation;
pub mod resolve;
pub mod types;

// Re-export core game logic (not agent-specific)
pub use action::*;
pub use board::*;
pub use error::{Error, Result};
pub use movegen::*;
pub use notation::*;
pub use observation::*;
pub use resolve::*;
pub use types::*;

// =============================================================================
// Agent trait: implemented by everything that proposes actions
// =============================================================================

/// Trait for move-proposing agents (random baselines, trained policies, ...).
///
/// Agents answer with a raw action in `0..NUM_ACTIONS`. The action does not
/// have to be legal: the environment resolves it and scores the request.
pub trait Agent: Send {
    /// Propose an action for `side` on `board`.
    fn select_action(&mut self, board: &Board, side: Color) -> u16;

    /// Returns the agent's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new episode
    fn new_game(&mut self) {}
}
