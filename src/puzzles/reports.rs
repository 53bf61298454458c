// Day 2: Red-Nosed Reports.

use super::Answer;
use crate::core::Result;
use crate::input::parse::parse_reports;

pub const EXAMPLE: &str = "7 6 4 2 1\n1 2 7 8 9\n9 7 6 2 1\n1 3 2 4 5\n8 6 4 4 1\n1 3 6 7 9\n";

/// Strictly increasing or strictly decreasing, every step between 1 and 3.
pub fn is_safe(levels: &[i64]) -> bool {
    if levels.len() < 2 {
        return false;
    }
    let rising = levels[1] > levels[0];
    levels.windows(2).all(|w| (w[1] > w[0]) == rising && (1..=3).contains(&w[1].abs_diff(w[0])))
}

/// Safe as-is, or safe once any single level is dropped.
pub fn is_safe_dampened(levels: &[i64]) -> bool {
    if is_safe(levels) {
        return true;
    }
    (0..levels.len()).any(|skip| {
        let trimmed: Vec<i64> = levels.iter().enumerate()
            .filter(|&(i, _)| i != skip)
            .map(|(_, &v)| v)
            .collect();
        is_safe(&trimmed)
    })
}

pub fn solve(text: &str) -> Result<Answer> {
    let parsed = parse_reports(text);
    let safe = parsed.items.iter().filter(|r| is_safe(r)).count();
    let dampened = parsed.items.iter().filter(|r| is_safe_dampened(r)).count();
    Ok(Answer::new(2, "Red-Nosed Reports", safe, dampened).with_skipped(parsed.skipped))
}
