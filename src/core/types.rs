use std::fmt;
use std::ops::{Index, IndexMut};

use super::error::{PuzzleError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four orthogonal steps. Region adjacency never looks diagonally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }

    /// Quarter turn clockwise.
    pub fn turn_right(self) -> Dir {
        match self {
            Dir::Up => Dir::Right,
            Dir::Right => Dir::Down,
            Dir::Down => Dir::Left,
            Dir::Left => Dir::Up,
        }
    }

    /// Single-bit mask, for packing a set of headings into a `u8`.
    pub fn bit(self) -> u8 {
        match self {
            Dir::Up => 1,
            Dir::Down => 2,
            Dir::Left => 4,
            Dir::Right => 8,
        }
    }
}

/// Rectangular row-major grid. Dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self { rows, cols, cells: vec![value; rows * cols] }
    }
}

impl<T> Grid<T> {
    /// Builds a grid from row vectors. Every row must match the first row's
    /// length; the offending row is reported 1-based.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = rows.first().map(|r| r.len()).unwrap_or(0);
        let height = rows.len();
        let mut cells = Vec::with_capacity(height * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(PuzzleError::RaggedRow { line: i + 1, expected: cols, found: row.len() });
            }
            cells.extend(row);
        }
        Ok(Self { rows: height, cols, cells })
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }
    pub fn dimensions(&self) -> (usize, usize) { (self.rows, self.cols) }
    pub fn len(&self) -> usize { self.cells.len() }
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }

    pub fn contains(&self, at: Coord) -> bool {
        at.row < self.rows && at.col < self.cols
    }

    pub fn get(&self, at: Coord) -> Option<&T> {
        if self.contains(at) { self.cells.get(at.row * self.cols + at.col) } else { None }
    }

    pub fn get_mut(&mut self, at: Coord) -> Option<&mut T> {
        if self.contains(at) { self.cells.get_mut(at.row * self.cols + at.col) } else { None }
    }

    /// Writes `value` at `at`; returns false (and writes nothing) when out of bounds.
    pub fn set(&mut self, at: Coord, value: T) -> bool {
        match self.get_mut(at) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    pub fn row(&self, r: usize) -> &[T] {
        &self.cells[r * self.cols..(r + 1) * self.cols]
    }

    /// Cell reached by moving `(dr, dc)` from `at`, if it is inside the grid.
    pub fn offset(&self, at: Coord, dr: isize, dc: isize) -> Option<Coord> {
        let row = at.row.checked_add_signed(dr)?;
        let col = at.col.checked_add_signed(dc)?;
        let next = Coord::new(row, col);
        self.contains(next).then_some(next)
    }

    pub fn step(&self, at: Coord, dir: Dir) -> Option<Coord> {
        let (dr, dc) = dir.delta();
        self.offset(at, dr, dc)
    }

    pub fn neighbors(&self, at: Coord) -> impl Iterator<Item = Coord> + '_ {
        Dir::ALL.into_iter().filter_map(move |d| self.step(at, d))
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| Coord::new(r, c)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> {
        self.coords().zip(self.cells.iter())
    }
}

impl<T> Index<Coord> for Grid<T> {
    type Output = T;
    fn index(&self, at: Coord) -> &T {
        &self.cells[at.row * self.cols + at.col]
    }
}

impl<T> IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, at: Coord) -> &mut T {
        &mut self.cells[at.row * self.cols + at.col]
    }
}

impl fmt::Display for Grid<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            if r > 0 {
                writeln!(f)?;
            }
            for ch in self.row(r) {
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}
