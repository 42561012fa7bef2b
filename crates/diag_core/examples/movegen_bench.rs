//! Move generation benchmark for profiling with cargo-flamegraph.
//!
//! Runs many iterations of full-side move generation and random move
//! resolution on a handful of diagonal-chess positions.
//!
//! Usage:
//!   cargo flamegraph --example movegen_bench -p diag_core

use diag_core::{Color, all_legal_moves, from_notation, random_legal_move};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;

const TEST_POSITIONS: &[(&str, &str)] = &[
    ("Start", "3prbnk/4ppqn/5ppb/P5pr/RP5p/BPP5/NQPP4/KNBRP3"),
    ("Opened", "3p1bnk/4p1qn/2r2p1b/P4ppr/R6p/1PP2B2/NQ1P4/KNBR4"),
    ("Sparse", "7k/2q5/8/3Pn3/8/1b6/5R2/K7"),
    ("Kings only", "7k/8/8/8/8/8/8/K7"),
];

const ITERATIONS: usize = 100_000;

fn main() {
    println!("=== Move Generation Benchmark ===");
    println!("Iterations per position: {ITERATIONS}");
    println!();

    let mut rng = StdRng::seed_from_u64(0);
    let mut total_time = std::time::Duration::ZERO;

    for (name, text) in TEST_POSITIONS {
        let board = match from_notation(text) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("{name}: {e}");
                continue;
            }
        };

        print!("{name:.<20}");

        let start = Instant::now();
        let mut moves_generated = 0usize;
        let mut sampled = 0usize;

        for i in 0..ITERATIONS {
            let side = if i % 2 == 0 { Color::White } else { Color::Black };
            moves_generated += all_legal_moves(&board, side).len();
            sampled += random_legal_move(&board, side, &mut rng).is_some() as usize;
        }

        let elapsed = start.elapsed();
        total_time += elapsed;

        let moves_per_pos = moves_generated as f64 / ITERATIONS as f64;
        let pps = if elapsed.as_secs_f64() > 0.0 {
            ITERATIONS as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(
            " {moves_per_pos:>5.1} moves/pos, {sampled:>6} samples, {pps:>10.0} pos/sec ({elapsed:>8.3?})"
        );
    }

    println!();
    println!("{:=<70}", "");
    println!("TOTAL: {total_time:.3?}");
}
