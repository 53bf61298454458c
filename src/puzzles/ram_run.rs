// Day 18: RAM Run. Bytes fall onto a square memory grid at `x,y`; the walk
// goes from the top-left corner to the bottom-right one.

use serde::{Deserialize, Serialize};

use super::Answer;
use crate::analysis::reach::{apply_obstacles, first_blocking, shortest_path, Blockage};
use crate::core::{Coord, PuzzleError, Result};
use crate::input::parse::parse_coords;

pub const EXAMPLE: &str = "5,4\n4,2\n4,5\n3,0\n2,1\n6,3\n2,4\n1,5\n0,6\n3,3\n2,6\n5,1\n1,2\n5,5\n2,5\n6,5\n1,4\n0,4\n6,4\n1,1\n6,1\n1,0\n0,5\n1,6\n2,0\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RamRunParams {
    /// Side length of the square grid.
    #[serde(default = "default_size")]
    pub size: usize,
    /// Bytes that have fallen before the part-one walk.
    #[serde(default = "default_byte_count")]
    pub byte_count: usize,
}

fn default_size() -> usize { 71 }
fn default_byte_count() -> usize { 1024 }

impl Default for RamRunParams {
    fn default() -> Self {
        Self { size: default_size(), byte_count: default_byte_count() }
    }
}

impl RamRunParams {
    /// Dimensions used by the puzzle's worked example.
    pub fn example() -> Self {
        Self { size: 7, byte_count: 12 }
    }
}

pub fn solve(text: &str, params: &RamRunParams) -> Result<Answer> {
    if params.size == 0 {
        return Err(PuzzleError::Config("ram_run.size must be at least 1".into()));
    }
    let parsed = parse_coords(text);
    let (start, end) = (Coord::new(0, 0), Coord::new(params.size - 1, params.size - 1));

    let blocked = apply_obstacles(params.size, params.size, &parsed.items, params.byte_count);
    let part_one = match shortest_path(&blocked, start, end) {
        Some(steps) => steps.to_string(),
        None => "unreachable".to_string(),
    };

    let report = first_blocking(params.size, params.size, &parsed.items, start, end);
    let part_two = match report.outcome {
        Blockage::Blocked { at, .. } => format!("{},{}", at.col, at.row),
        Blockage::Open => "open".to_string(),
        Blockage::Disconnected => "unreachable".to_string(),
    };
    Ok(Answer::new(18, "RAM Run", part_one, part_two).with_skipped(parsed.skipped))
}
