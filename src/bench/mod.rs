pub mod runner;

pub use runner::{run_puzzles, PuzzleReport, RunReport};
