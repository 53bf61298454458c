// Day 4: Ceres Search.

use super::Answer;
use crate::core::{Coord, Grid, Result};
use crate::input::parse::parse_char_grid;

pub const EXAMPLE: &str = "MMMSXXMASM\nMSAMXMSMSA\nAMXSMSAMAX\nMSAMASMSMX\nXMASAMXAMM\nXXAMMXXAMA\nSMSMSASXSS\nSAXAMASAAA\nMAMMMXMMMM\nMXMXAXMASX\n";

const DIRECTIONS: [(isize, isize); 8] = [
    (0, 1), (0, -1), (1, 0), (-1, 0),
    (1, 1), (1, -1), (-1, 1), (-1, -1),
];

fn reads(grid: &Grid<char>, from: Coord, (dr, dc): (isize, isize), word: &str) -> bool {
    let mut at = Some(from);
    for ch in word.chars() {
        match at {
            Some(c) if grid[c] == ch => at = grid.offset(c, dr, dc),
            _ => return false,
        }
    }
    true
}

/// Occurrences of `word` in any of the eight straight directions.
pub fn count_word(grid: &Grid<char>, word: &str) -> usize {
    let Some(first) = word.chars().next() else { return 0 };
    grid.iter()
        .filter(|(_, &ch)| ch == first)
        .map(|(at, _)| DIRECTIONS.iter().filter(|&&d| reads(grid, at, d, word)).count())
        .sum()
}

/// Centres of 3x3 crosses whose two diagonals each spell MAS in either direction.
pub fn count_x_mas(grid: &Grid<char>) -> usize {
    let diagonal = |at: Coord, dr: isize, dc: isize| -> Option<(char, char)> {
        let a = grid.offset(at, -dr, -dc)?;
        let b = grid.offset(at, dr, dc)?;
        Some((grid[a], grid[b]))
    };
    let is_mas = |ends: Option<(char, char)>| matches!(ends, Some(('M', 'S')) | Some(('S', 'M')));
    grid.iter()
        .filter(|(at, &ch)| ch == 'A' && is_mas(diagonal(*at, 1, 1)) && is_mas(diagonal(*at, 1, -1)))
        .count()
}

pub fn solve(text: &str) -> Result<Answer> {
    let grid = parse_char_grid(&text.to_uppercase())?;
    Ok(Answer::new(4, "Ceres Search", count_word(&grid, "XMAS"), count_x_mas(&grid)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_answers() {
        let answer = solve(EXAMPLE).unwrap();
        assert_eq!((answer.part_one.as_str(), answer.part_two.as_str()), ("18", "9"));
    }

    #[test]
    fn word_in_every_direction() {
        let grid = parse_char_grid("S..S..S\n.A.A.A.\n..MMM..\nSAMXMAS\n..MMM..\n.A.A.A.\nS..S..S\n").unwrap();
        assert_eq!(count_word(&grid, "XMAS"), 8);
    }

    #[test]
    fn lowercase_input_is_normalised() {
        let answer = solve("m.s\n.a.\nm.s\n").unwrap();
        assert_eq!(answer.part_two, "1");
    }

    #[test]
    fn cross_needs_room() {
        let grid = parse_char_grid("MA\nAS\n").unwrap();
        assert_eq!(count_x_mas(&grid), 0);
        assert_eq!(count_word(&grid, ""), 0);
    }
}
