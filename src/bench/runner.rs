// Puzzle runner.
// Resolves each configured puzzle's input file, solves it, and collects
// answers, failures, and per-puzzle timings into one report.

use std::time::Instant;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::input::read_input;
use crate::puzzles::{solve, Answer};

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub total: usize,
    pub solved: usize,
    pub elapsed_us: u64,
    pub per_puzzle: Vec<PuzzleReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PuzzleReport {
    pub day: u8,
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<Answer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub elapsed_us: u64,
}

/// Runs every puzzle listed in `config`. A puzzle that cannot be read or
/// solved is recorded as failed; the remaining puzzles still run.
pub fn run_puzzles(config: &Config) -> RunReport {
    let params = config.params();
    let total_start = Instant::now();
    let mut per_puzzle = Vec::new();

    for entry in config.entries() {
        let path = entry.input_path(&config.input_dir);
        let start = Instant::now();
        let outcome = read_input(&path).and_then(|text| solve(entry.day, &text, &params));
        let elapsed_us = start.elapsed().as_micros() as u64;

        let (answer, error) = match outcome {
            Ok(answer) => {
                info!(day = entry.day, elapsed_us, "solved");
                (Some(answer), None)
            }
            Err(e) => {
                warn!(day = entry.day, error = %e, "puzzle failed");
                (None, Some(e.to_string()))
            }
        };
        per_puzzle.push(PuzzleReport {
            day: entry.day,
            input: path.display().to_string(),
            answer,
            error,
            elapsed_us,
        });
    }

    let solved = per_puzzle.iter().filter(|p| p.answer.is_some()).count();
    RunReport {
        total: per_puzzle.len(),
        solved,
        elapsed_us: total_start.elapsed().as_micros() as u64,
        per_puzzle,
    }
}

impl RunReport {
    pub fn all_solved(&self) -> bool {
        self.solved == self.total
    }

    pub fn print_summary(&self) {
        println!("=== Advent of Code 2024 ===");
        println!("Puzzles: {} | Solved: {} | Failed: {}", self.total, self.solved, self.total - self.solved);
        println!("Time: {:.3}ms", self.elapsed_us as f64 / 1000.0);
    }

    pub fn print_detail(&self) {
        for p in &self.per_puzzle {
            match (&p.answer, &p.error) {
                (Some(answer), _) => println!("{}  [{}us]", answer, p.elapsed_us),
                (None, Some(err)) => println!("Day {:>2}: FAILED ({}): {}", p.day, p.input, err),
                (None, None) => {}
            }
        }
        println!();
        self.print_summary();
    }
}
