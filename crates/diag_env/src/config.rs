//! Environment configuration, loadable from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;

use diag_core::Color;

use crate::EnvError;

/// Episode settings for [`DiagonalChess`](crate::DiagonalChess).
///
/// ```toml
/// max_plies = 200
/// first_to_move = "white"
/// seed = 42
/// end_on_king_capture = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// Plies after which an episode is cut off
    pub max_plies: u32,
    /// Side that moves first after a reset
    pub first_to_move: Color,
    /// Seed for fallback move selection (None = from entropy)
    pub seed: Option<u64>,
    /// End the episode as soon as a king is taken
    pub end_on_king_capture: bool,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            first_to_move: Color::White,
            seed: None,
            end_on_king_capture: true,
        }
    }
}

impl EnvConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, EnvError> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a TOML file; missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, EnvError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String, EnvError> {
        Ok(toml::to_string(self)?)
    }
}
