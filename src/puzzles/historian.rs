// Day 1: Historian Hysteria. Two location-id lists, one pair per line.

use rustc_hash::FxHashMap;

use super::Answer;
use crate::core::Result;
use crate::input::parse::parse_pairs;

pub const EXAMPLE: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

fn split(pairs: &[(i64, i64)]) -> (Vec<i64>, Vec<i64>) {
    pairs.iter().copied().unzip()
}

// Ids span all of i64, so both totals accumulate in 128 bits.

/// Sum of |l - r| after sorting both lists and pairing them up by rank.
pub fn total_distance(pairs: &[(i64, i64)]) -> u128 {
    let (mut left, mut right) = split(pairs);
    left.sort_unstable();
    right.sort_unstable();
    left.iter().zip(&right).map(|(l, r)| l.abs_diff(*r) as u128).sum()
}

/// Sum of each left value times how often it appears in the right list.
pub fn similarity(pairs: &[(i64, i64)]) -> i128 {
    let (left, right) = split(pairs);
    let mut counts: FxHashMap<i64, i128> = FxHashMap::default();
    for r in right {
        *counts.entry(r).or_default() += 1;
    }
    left.iter().map(|l| *l as i128 * counts.get(l).copied().unwrap_or(0)).sum()
}

pub fn solve(text: &str) -> Result<Answer> {
    let parsed = parse_pairs(text);
    Ok(Answer::new(1, "Historian Hysteria", total_distance(&parsed.items), similarity(&parsed.items))
        .with_skipped(parsed.skipped))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_answers() {
        let answer = solve(EXAMPLE).unwrap();
        assert_eq!(answer.part_one, "11");
        assert_eq!(answer.part_two, "31");
    }

    #[test]
    fn regression_fixture_matches_brute_force() {
        let pairs = [(3, 4), (4, 3), (2, 5), (1, 3), (3, 3), (3, 9), (3, 3)];
        assert_eq!(total_distance(&pairs), 11);
        assert_eq!(similarity(&pairs), 52);

        // Independent count: compare every left value against every right value.
        let brute: i128 = pairs.iter()
            .map(|&(l, _)| l as i128 * pairs.iter().filter(|&&(_, r)| r == l).count() as i128)
            .sum();
        assert_eq!(similarity(&pairs), brute);
    }

    #[test]
    fn extreme_ids_do_not_overflow() {
        let answer = solve("9223372036854775807 9223372036854775807\n9223372036854775807 9223372036854775807\n").unwrap();
        assert_eq!(answer.part_one, "0");
        // 2 left entries × max × 2 right matches
        assert_eq!(answer.part_two, (4 * i64::MAX as i128).to_string());

        let pairs = [(i64::MIN, i64::MAX)];
        assert_eq!(total_distance(&pairs), u64::MAX as u128);
        assert_eq!(similarity(&pairs), 0);
    }

    #[test]
    fn empty_input_scores_zero() {
        let answer = solve("").unwrap();
        assert_eq!((answer.part_one.as_str(), answer.part_two.as_str()), ("0", "0"));
    }

    #[test]
    fn malformed_lines_do_not_abort() {
        let answer = solve("3 4\n4 x\n4 3\n").unwrap();
        assert_eq!(answer.part_one, "0");
        assert_eq!(answer.skipped.len(), 1);
        assert_eq!(answer.skipped[0].line, 2);
    }
}
