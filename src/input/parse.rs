// Line-oriented puzzle input parsers.
//
// Record parsers never abort on a bad line: the line is logged, kept in
// `Parsed::skipped`, and parsing moves on. Grid parsers are stricter since a
// grid with a dropped row has different geometry.

use serde::Serialize;
use tracing::warn;

use crate::core::{Coord, Grid, PuzzleError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedLine {
    /// 1-based line number in the input text.
    pub line: usize,
    pub content: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<T> {
    pub items: Vec<T>,
    pub skipped: Vec<MalformedLine>,
}

impl<T> Default for Parsed<T> {
    fn default() -> Self {
        Self { items: Vec::new(), skipped: Vec::new() }
    }
}

fn parse_records<T>(text: &str, mut parse_line: impl FnMut(&str) -> std::result::Result<T, String>) -> Parsed<T> {
    let mut out = Parsed::default();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() { continue; }
        match parse_line(line) {
            Ok(item) => out.items.push(item),
            Err(reason) => {
                warn!(line = i + 1, content = line, "skipping malformed line: {}", reason);
                out.skipped.push(MalformedLine { line: i + 1, content: line.to_string(), reason });
            }
        }
    }
    out
}

fn parse_int(token: &str) -> std::result::Result<i64, String> {
    token.trim().parse::<i64>().map_err(|_| format!("not an integer: {:?}", token.trim()))
}

/// Two whitespace-separated integers per line.
pub fn parse_pairs(text: &str) -> Parsed<(i64, i64)> {
    parse_records(text, |line| {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(format!("expected 2 values, found {}", tokens.len()));
        }
        Ok((parse_int(tokens[0])?, parse_int(tokens[1])?))
    })
}

/// `x,y` coordinate pairs, one per line.
pub fn parse_coords(text: &str) -> Parsed<(i64, i64)> {
    parse_records(text, |line| {
        let tokens: Vec<&str> = line.split(',').collect();
        if tokens.len() != 2 {
            return Err(format!("expected x,y, found {} fields", tokens.len()));
        }
        Ok((parse_int(tokens[0])?, parse_int(tokens[1])?))
    })
}

/// Whitespace-separated integers; a report needs at least one level.
pub fn parse_reports(text: &str) -> Parsed<Vec<i64>> {
    parse_records(text, |line| {
        line.split_whitespace().map(parse_int).collect::<std::result::Result<Vec<_>, _>>()
    })
}

fn grid_rows(text: &str) -> Vec<(usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty())
        .collect()
}

fn check_width(rows: &[(usize, &str)]) -> Result<usize> {
    let width = rows.first().map(|(_, l)| l.chars().count()).ok_or(PuzzleError::EmptyInput)?;
    for &(line, l) in rows {
        let found = l.chars().count();
        if found != width {
            return Err(PuzzleError::RaggedRow { line, expected: width, found });
        }
    }
    Ok(width)
}

/// One grid row per non-blank line.
pub fn parse_char_grid(text: &str) -> Result<Grid<char>> {
    let rows = grid_rows(text);
    check_width(&rows)?;
    Grid::from_rows(rows.into_iter().map(|(_, l)| l.chars().collect()).collect())
}

/// First cell holding `marker`, scanning row-major.
pub fn find_marker(grid: &Grid<char>, marker: char) -> Result<Coord> {
    grid.iter()
        .find(|(_, &ch)| ch == marker)
        .map(|(at, _)| at)
        .ok_or(PuzzleError::MissingMarker(marker))
}

/// Grid of single decimal digits.
pub fn parse_digit_grid(text: &str) -> Result<Grid<u8>> {
    let rows = grid_rows(text);
    check_width(&rows)?;
    let mut cells = Vec::with_capacity(rows.len());
    for (line, l) in rows {
        let mut row = Vec::with_capacity(l.len());
        for (col, ch) in l.chars().enumerate() {
            let digit = ch.to_digit(10).ok_or(PuzzleError::InvalidCell { line, col: col + 1, ch })?;
            row.push(digit as u8);
        }
        cells.push(row);
    }
    Grid::from_rows(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_skip_bad_lines() {
        let parsed = parse_pairs("3   4\n\nfoo 1\n4 3\n1 2 3\n");
        assert_eq!(parsed.items, vec![(3, 4), (4, 3)]);
        assert_eq!(parsed.skipped.len(), 2);
        assert_eq!(parsed.skipped[0].line, 3);
        assert_eq!(parsed.skipped[1].line, 5);
        assert!(parsed.skipped[1].reason.contains("expected 2"));
    }

    #[test]
    fn coords_skip_bad_lines() {
        let parsed = parse_coords("5,4\n4,x\n7\n-1,2\n");
        assert_eq!(parsed.items, vec![(5, 4), (-1, 2)]);
        assert_eq!(parsed.skipped.iter().map(|m| m.line).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn reports_keep_variable_width() {
        let parsed = parse_reports("7 6 4 2 1\n1 2\n1 two 3\n");
        assert_eq!(parsed.items, vec![vec![7, 6, 4, 2, 1], vec![1, 2]]);
        assert_eq!(parsed.skipped.len(), 1);
    }

    #[test]
    fn char_grid_trims_and_skips_blank() {
        let g = parse_char_grid("\n AAB \nCCD\n\n").unwrap();
        assert_eq!(g.dimensions(), (2, 3));
        assert_eq!(g[Coord::new(1, 2)], 'D');
    }

    #[test]
    fn char_grid_errors() {
        assert!(matches!(parse_char_grid("  \n"), Err(PuzzleError::EmptyInput)));
        assert!(matches!(
            parse_char_grid("AB\nC\n"),
            Err(PuzzleError::RaggedRow { line: 2, expected: 2, found: 1 })
        ));
    }

    #[test]
    fn markers_are_found_row_major() {
        let g = parse_char_grid("#S.
.S#
").unwrap();
        assert_eq!(find_marker(&g, 'S').unwrap(), Coord::new(0, 1));
        assert!(matches!(find_marker(&g, 'E'), Err(PuzzleError::MissingMarker('E'))));
    }

    #[test]
    fn digit_grid_rejects_letters() {
        let g = parse_digit_grid("012\n345\n").unwrap();
        assert_eq!(g[Coord::new(1, 1)], 4);
        assert!(matches!(
            parse_digit_grid("01\n.1\n"),
            Err(PuzzleError::InvalidCell { line: 2, col: 1, ch: '.' })
        ));
    }
}
