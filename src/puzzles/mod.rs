// Per-day solvers. Each one turns raw input text into an `Answer`; none of
// them touch the filesystem or stdout.

pub mod garden;
pub mod guard;
pub mod historian;
pub mod race;
pub mod ram_run;
pub mod reports;
pub mod trails;
pub mod word_search;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{PuzzleError, Result};
use crate::input::MalformedLine;
pub use race::RaceParams;
pub use ram_run::RamRunParams;

pub const SUPPORTED_DAYS: [u8; 8] = [1, 2, 4, 6, 10, 12, 18, 20];

/// Tunables for the puzzles whose answers depend on more than the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveParams {
    #[serde(default)]
    pub ram_run: RamRunParams,
    #[serde(default)]
    pub race: RaceParams,
}

impl SolveParams {
    /// Sizes and thresholds used by the worked examples.
    pub fn example() -> Self {
        Self { ram_run: RamRunParams::example(), race: RaceParams::example() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub day: u8,
    pub title: &'static str,
    pub part_one: String,
    pub part_two: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<MalformedLine>,
}

impl Answer {
    pub fn new(day: u8, title: &'static str, part_one: impl ToString, part_two: impl ToString) -> Self {
        Self {
            day,
            title,
            part_one: part_one.to_string(),
            part_two: part_two.to_string(),
            skipped: Vec::new(),
        }
    }

    pub fn with_skipped(mut self, skipped: Vec<MalformedLine>) -> Self {
        self.skipped = skipped;
        self
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Day {:>2}: {}", self.day, self.title)?;
        writeln!(f, "  part one: {}", self.part_one)?;
        write!(f, "  part two: {}", self.part_two)?;
        if !self.skipped.is_empty() {
            write!(f, "\n  skipped {} malformed line(s)", self.skipped.len())?;
        }
        Ok(())
    }
}

pub fn solve(day: u8, text: &str, params: &SolveParams) -> Result<Answer> {
    match day {
        1 => historian::solve(text),
        2 => reports::solve(text),
        4 => word_search::solve(text),
        6 => guard::solve(text),
        10 => trails::solve(text),
        12 => garden::solve(text),
        18 => ram_run::solve(text, &params.ram_run),
        20 => race::solve(text, &params.race),
        other => Err(PuzzleError::UnknownDay(other)),
    }
}

/// Example input shipped with each puzzle statement.
pub fn example_input(day: u8) -> Option<&'static str> {
    match day {
        1 => Some(historian::EXAMPLE),
        2 => Some(reports::EXAMPLE),
        4 => Some(word_search::EXAMPLE),
        6 => Some(guard::EXAMPLE),
        10 => Some(trails::EXAMPLE),
        12 => Some(garden::EXAMPLE),
        18 => Some(ram_run::EXAMPLE),
        20 => Some(race::EXAMPLE),
        _ => None,
    }
}
