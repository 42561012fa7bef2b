//! Self-play CLI
//!
//! Play episodes of diagonal chess between baseline agents and report the
//! shaped rewards each side collected.

use selfplay::cli::{create_agent, RunArgs, DEFAULT_RESULTS_FILE};
use selfplay::{EpisodeRunner, SelfPlayError, SelfPlayResults};
use std::env;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Diagonal Chess Self-Play Runner");
    println!();
    println!("Usage:");
    println!("  selfplay run <agent1> <agent2> [--episodes N] [--max-plies P] [--seed S]");
    println!("                                 [--config FILE] [--out FILE]");
    println!("  selfplay report [FILE]");
    println!();
    println!("Agents:");
    println!("  random        - Uniformly random legal move");
    println!("  uniform       - Uniformly random action, legal or not");
    println!("  random:SEED   - Seeded variant of either agent");
    println!();
    println!("Examples:");
    println!("  selfplay run random uniform --episodes 100 --seed 7");
    println!("  selfplay report {}", DEFAULT_RESULTS_FILE);
}

fn run(args: &[String]) -> Result<(), SelfPlayError> {
    let args = RunArgs::parse(args)?;
    let config = args.run_config()?;
    let mut agent1 = create_agent(&args.agent1)?;
    let mut agent2 = create_agent(&args.agent2)?;

    println!("=== Self-play: {} vs {} ===", args.agent1, args.agent2);
    println!(
        "Episodes: {}, Max plies: {}",
        config.num_episodes, config.env.max_plies
    );
    println!();

    let results = EpisodeRunner::new(config).run(agent1.as_mut(), agent2.as_mut())?;

    println!();
    results.print_report();
    results.save(&args.out)?;
    println!("Results saved to {}", args.out.display());
    Ok(())
}

fn report(args: &[String]) -> Result<(), SelfPlayError> {
    let path = args.first().map(String::as_str).unwrap_or(DEFAULT_RESULTS_FILE);
    SelfPlayResults::load(Path::new(path))?.print_report();
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let result = match args[1].as_str() {
        "run" => run(&args[2..]),
        "report" => report(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if matches!(e, SelfPlayError::Usage(_)) {
                print_usage();
            }
            ExitCode::FAILURE
        }
    }
}
