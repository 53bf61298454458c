// Day 6: Guard Gallivant. The guard starts on '^' facing up, turns right in
// front of every '#', and walks until it steps off the map.

use tracing::debug;

use super::Answer;
use crate::core::{Coord, Dir, Grid, Result};
use crate::input::parse::{find_marker, parse_char_grid};

pub const EXAMPLE: &str = "....#.....\n.........#\n..........\n..#.......\n.......#..\n..........\n.#..^.....\n........#.\n#.........\n......#...\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patrol {
    /// Left the map. Each cell holds the headings it was entered with.
    Exits(Grid<u8>),
    /// Came back to a cell with a heading it already had.
    Loops,
}

/// Walks from `start` facing up. A repeated (cell, heading) state means the
/// walk can never leave.
pub fn patrol(walls: &Grid<bool>, start: Coord) -> Patrol {
    let mut seen = Grid::filled(walls.rows(), walls.cols(), 0u8);
    let (mut at, mut dir) = (start, Dir::Up);
    loop {
        if seen[at] & dir.bit() != 0 {
            return Patrol::Loops;
        }
        seen[at] |= dir.bit();
        match walls.step(at, dir) {
            None => return Patrol::Exits(seen),
            Some(next) if walls[next] => dir = dir.turn_right(),
            Some(next) => at = next,
        }
    }
}

/// Cells where one extra obstruction traps the guard in a loop. Only cells on
/// the unobstructed route can change it; the start cell is excluded.
pub fn loop_positions(walls: &Grid<bool>, start: Coord) -> Vec<Coord> {
    let route = match patrol(walls, start) {
        Patrol::Exits(seen) => seen,
        Patrol::Loops => return Vec::new(),
    };
    let mut trial = walls.clone();
    let mut found = Vec::new();
    for (at, &headings) in route.iter() {
        if headings == 0 || at == start {
            continue;
        }
        trial[at] = true;
        if patrol(&trial, start) == Patrol::Loops {
            found.push(at);
        }
        trial[at] = false;
    }
    found
}

pub fn solve(text: &str) -> Result<Answer> {
    let map = parse_char_grid(text)?;
    let start = find_marker(&map, '^')?;
    let mut walls = Grid::filled(map.rows(), map.cols(), false);
    for (at, &ch) in map.iter() {
        walls[at] = ch == '#';
    }

    let (visited, loops) = match patrol(&walls, start) {
        Patrol::Exits(seen) => {
            let visited = seen.iter().filter(|(_, &h)| h != 0).count();
            (visited.to_string(), loop_positions(&walls, start).len().to_string())
        }
        Patrol::Loops => {
            debug!(%start, "guard never leaves the map");
            ("never leaves".to_string(), "0".to_string())
        }
    };
    Ok(Answer::new(6, "Guard Gallivant", visited, loops))
}
