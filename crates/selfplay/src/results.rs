//! Self-play results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use diag_core::Color;
use diag_env::Termination;

use crate::runner::RunConfig;
use crate::SelfPlayError;

/// Complete results of a self-play run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfPlayResults {
    /// Name/description of the run
    pub name: String,
    /// Participating agents, agent 1 first
    pub participants: Vec<String>,
    /// Every episode in play order
    pub episodes: Vec<EpisodeRecord>,
    /// Configuration used
    pub config: RunConfig,
}

/// One played episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeRecord {
    pub white: String,
    pub black: String,
    /// Whether agent 1 played White
    pub agent1_white: bool,
    pub plies: u32,
    pub white_reward: f32,
    pub black_reward: f32,
    /// Requests played as asked
    pub legal_moves: u32,
    /// Requests redirected to another destination or piece
    pub redirected_moves: u32,
    /// Requests that named an empty square or an opposing piece
    pub wrong_color_moves: u32,
    pub termination: Termination,
}

impl EpisodeRecord {
    pub fn new(white: &str, black: &str) -> Self {
        Self {
            white: white.to_string(),
            black: black.to_string(),
            agent1_white: true,
            plies: 0,
            white_reward: 0.0,
            black_reward: 0.0,
            legal_moves: 0,
            redirected_moves: 0,
            wrong_color_moves: 0,
            termination: Termination::PlyLimit,
        }
    }

    /// The side that took the opposing king, if any.
    pub fn winner(&self) -> Option<Color> {
        match self.termination {
            Termination::KingCaptured(loser) => Some(loser.other()),
            _ => None,
        }
    }

    /// Fraction of requests that were legal as asked.
    pub fn legal_rate(&self) -> f64 {
        let total = self.legal_moves + self.redirected_moves + self.wrong_color_moves;
        if total == 0 {
            0.0
        } else {
            self.legal_moves as f64 / total as f64
        }
    }
}

/// Per-agent totals across a run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentSummary {
    pub episodes: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub total_reward: f64,
}

impl AgentSummary {
    pub fn mean_reward(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            self.total_reward / self.episodes as f64
        }
    }
}

impl SelfPlayResults {
    pub fn new(name: &str, participants: Vec<String>, config: RunConfig) -> Self {
        Self {
            name: name.to_string(),
            participants,
            episodes: Vec::new(),
            config,
        }
    }

    /// Add an episode record
    pub fn add_episode(&mut self, record: EpisodeRecord) {
        self.episodes.push(record);
    }

    /// Totals for agent 1 (`index == 0`) or agent 2 (`index == 1`).
    pub fn summary(&self, index: usize) -> AgentSummary {
        let mut s = AgentSummary::default();
        for ep in &self.episodes {
            let color = if ep.agent1_white == (index == 0) {
                Color::White
            } else {
                Color::Black
            };
            s.episodes += 1;
            s.total_reward += match color {
                Color::White => ep.white_reward as f64,
                Color::Black => ep.black_reward as f64,
            };
            match ep.winner() {
                Some(w) if w == color => s.wins += 1,
                Some(_) => s.losses += 1,
                None => s.draws += 1,
            }
        }
        s
    }

    /// Mean legal-request rate over all episodes
    pub fn legal_rate(&self) -> f64 {
        if self.episodes.is_empty() {
            return 0.0;
        }
        self.episodes.iter().map(|e| e.legal_rate()).sum::<f64>() / self.episodes.len() as f64
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), SelfPlayError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, SelfPlayError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Self-play: {} ===\n\n", self.name));
        report.push_str(&format!("Participants: {}\n", self.participants.join(", ")));
        report.push_str(&format!(
            "Config: {} episodes, max {} plies\n\n",
            self.config.num_episodes, self.config.env.max_plies
        ));

        report.push_str(&format!(
            "{:<20} {:>5}-{:<5}-{:<5} {:>12}\n",
            "Agent", "W", "L", "D", "Mean reward"
        ));
        report.push_str(&"-".repeat(52));
        report.push('\n');

        for (i, name) in self.participants.iter().enumerate() {
            let s = self.summary(i);
            report.push_str(&format!(
                "{:<20} {:>5}-{:<5}-{:<5} {:>12.3}\n",
                name,
                s.wins,
                s.losses,
                s.draws,
                s.mean_reward()
            ));
        }

        let mean_plies = if self.episodes.is_empty() {
            0.0
        } else {
            self.episodes.iter().map(|e| e.plies as f64).sum::<f64>() / self.episodes.len() as f64
        };
        report.push('\n');
        report.push_str(&format!("Mean length: {:.1} plies\n", mean_plies));
        report.push_str(&format!(
            "Legal requests: {:.1}%\n",
            self.legal_rate() * 100.0
        ));

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
