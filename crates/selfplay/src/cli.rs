//! Argument handling for the `selfplay` binary

use std::path::PathBuf;
use std::str::FromStr;

use diag_core::Agent;
use random_agent::{RandomAgent, UniformActionAgent};

use crate::runner::RunConfig;
use crate::SelfPlayError;

pub const DEFAULT_RESULTS_FILE: &str = "selfplay_results.json";

/// Parsed `run` command line
#[derive(Debug, Clone, PartialEq)]
pub struct RunArgs {
    pub agent1: String,
    pub agent2: String,
    pub config: Option<PathBuf>,
    pub episodes: Option<u32>,
    pub max_plies: Option<u32>,
    pub seed: Option<u64>,
    pub out: PathBuf,
}

fn flag_value<T: FromStr>(flag: &str, value: &str) -> Result<T, SelfPlayError> {
    value
        .parse()
        .map_err(|_| SelfPlayError::Usage(format!("invalid value '{value}' for {flag}")))
}

impl RunArgs {
    /// Parse the arguments following `run`.
    pub fn parse(args: &[String]) -> Result<Self, SelfPlayError> {
        let (agent1, agent2) = match args {
            [a, b, ..] if !a.starts_with('-') && !b.starts_with('-') => (a.clone(), b.clone()),
            _ => {
                return Err(SelfPlayError::Usage(
                    "run requires two agent specifications".to_string(),
                ))
            }
        };
        // Validate names before any episode is played.
        create_agent(&agent1)?;
        create_agent(&agent2)?;

        let mut parsed = RunArgs {
            agent1,
            agent2,
            config: None,
            episodes: None,
            max_plies: None,
            seed: None,
            out: PathBuf::from(DEFAULT_RESULTS_FILE),
        };

        let mut i = 2;
        while i < args.len() {
            let flag = args[i].as_str();
            let value = args
                .get(i + 1)
                .ok_or_else(|| SelfPlayError::Usage(format!("missing value for {flag}")))?;
            match flag {
                "--episodes" | "-e" => parsed.episodes = Some(flag_value(flag, value)?),
                "--max-plies" | "-p" => parsed.max_plies = Some(flag_value(flag, value)?),
                "--seed" | "-s" => parsed.seed = Some(flag_value(flag, value)?),
                "--config" | "-c" => parsed.config = Some(PathBuf::from(value)),
                "--out" | "-o" => parsed.out = PathBuf::from(value),
                _ => return Err(SelfPlayError::Usage(format!("unknown argument '{flag}'"))),
            }
            i += 2;
        }
        Ok(parsed)
    }

    /// The run configuration: config file (or defaults) with flags applied on top.
    pub fn run_config(&self) -> Result<RunConfig, SelfPlayError> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };
        if let Some(n) = self.episodes {
            config.num_episodes = n;
        }
        if let Some(p) = self.max_plies {
            config.env.max_plies = p;
        }
        if self.seed.is_some() {
            config.env.seed = self.seed;
        }
        Ok(config)
    }
}

/// Build an agent from `random`, `uniform` or `<kind>:<seed>`.
pub fn create_agent(spec: &str) -> Result<Box<dyn Agent>, SelfPlayError> {
    let (kind, seed) = match spec.split_once(':') {
        Some((kind, seed)) => (kind, Some(flag_value::<u64>("agent seed", seed)?)),
        None => (spec, None),
    };
    match kind.to_lowercase().as_str() {
        "random" | "legal" => Ok(match seed {
            Some(s) => Box::new(RandomAgent::with_seed(s)),
            None => Box::new(RandomAgent::new()),
        }),
        "uniform" | "any" => Ok(match seed {
            Some(s) => Box::new(UniformActionAgent::with_seed(s)),
            None => Box::new(UniformActionAgent::new()),
        }),
        _ => Err(SelfPlayError::Usage(format!("unknown agent '{spec}'"))),
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
