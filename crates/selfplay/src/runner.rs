//! Episode runner for playing agents against each other

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use diag_core::{Agent, Color, Outcome};
use diag_env::{DiagonalChess, EnvConfig, Termination};

use crate::results::{EpisodeRecord, SelfPlayResults};
use crate::SelfPlayError;

/// Configuration for a self-play run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of episodes to play
    pub num_episodes: u32,
    /// Whether to alternate colors each episode
    pub alternate_colors: bool,
    /// Print progress during the run
    pub verbose: bool,
    /// Environment settings shared by every episode
    pub env: EnvConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            num_episodes: 10,
            alternate_colors: true,
            verbose: true,
            env: EnvConfig::default(),
        }
    }
}

impl RunConfig {
    /// Load from a TOML file; the `[env]` table configures the environment.
    pub fn load(path: &Path) -> Result<Self, SelfPlayError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}

/// Plays episodes between two agents
pub struct EpisodeRunner {
    config: RunConfig,
}

impl EpisodeRunner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Play `num_episodes` episodes between two agents.
    pub fn run(
        &self,
        agent1: &mut dyn Agent,
        agent2: &mut dyn Agent,
    ) -> Result<SelfPlayResults, SelfPlayError> {
        let name1 = agent1.name().to_string();
        let name2 = agent2.name().to_string();
        let mut results = SelfPlayResults::new(
            &format!("{name1} vs {name2}"),
            vec![name1.clone(), name2.clone()],
            self.config.clone(),
        );

        // One environment for the whole run so a seeded run is reproducible.
        let mut env = DiagonalChess::new(self.config.env.clone());

        for episode in 0..self.config.num_episodes {
            let agent1_white = !self.config.alternate_colors || episode % 2 == 0;

            let mut record = if agent1_white {
                self.play_episode(&mut env, agent1, agent2)?
            } else {
                self.play_episode(&mut env, agent2, agent1)?
            };
            record.agent1_white = agent1_white;

            info!(
                episode = episode + 1,
                white = %record.white,
                black = %record.black,
                plies = record.plies,
                termination = ?record.termination,
                "episode finished"
            );
            if self.config.verbose {
                println!(
                    "Episode {}/{}: {} (W) vs {} (B) - {} plies, rewards {:+.2}/{:+.2}, {}",
                    episode + 1,
                    self.config.num_episodes,
                    record.white,
                    record.black,
                    record.plies,
                    record.white_reward,
                    record.black_reward,
                    describe(record.termination),
                );
            }

            results.add_episode(record);
        }

        Ok(results)
    }

    /// Play a single episode from the starting layout.
    fn play_episode(
        &self,
        env: &mut DiagonalChess,
        white: &mut dyn Agent,
        black: &mut dyn Agent,
    ) -> Result<EpisodeRecord, SelfPlayError> {
        env.reset();
        white.new_game();
        black.new_game();

        let mut record = EpisodeRecord::new(white.name(), black.name());

        loop {
            let side = env.side_to_move();
            let action = match side {
                Color::White => white.select_action(env.board(), side),
                Color::Black => black.select_action(env.board(), side),
            };

            let step = env.step(action as u32)?;

            match step.mover {
                Color::White => record.white_reward += step.reward,
                Color::Black => record.black_reward += step.reward,
            }
            match step.resolution.outcome {
                Outcome::Legal => record.legal_moves += 1,
                Outcome::WrongColor => record.wrong_color_moves += 1,
                Outcome::RedirectedDestination | Outcome::RedirectedPiece => {
                    record.redirected_moves += 1
                }
                Outcome::NoLegalMove => {}
            }
            record.plies = env.ply();

            if let Some(termination) = step.termination {
                record.termination = termination;
                return Ok(record);
            }
        }
    }
}

fn describe(termination: Termination) -> String {
    match termination {
        Termination::KingCaptured(c) => format!("{c} king captured"),
        Termination::NoLegalMove(c) => format!("{c} cannot move"),
        Termination::PlyLimit => "ply limit".to_string(),
    }
}

/// Quick utility to run a short, quiet, seeded series
pub fn quick_run(
    agent1: &mut dyn Agent,
    agent2: &mut dyn Agent,
    num_episodes: u32,
    seed: u64,
) -> Result<SelfPlayResults, SelfPlayError> {
    let config = RunConfig {
        num_episodes,
        verbose: false,
        env: EnvConfig {
            seed: Some(seed),
            ..Default::default()
        },
        ..Default::default()
    };
    EpisodeRunner::new(config).run(agent1, agent2)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
