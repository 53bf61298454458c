// Day 10: Hoof It. Hiking trails climb exactly one height per step, 0 to 9.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use super::Answer;
use crate::core::{Coord, Grid, Result};
use crate::input::parse::parse_digit_grid;

pub const EXAMPLE: &str = "89010123\n78121874\n87430965\n96549874\n45678903\n32019012\n01329801\n10456732\n";

const PEAK: u8 = 9;

pub fn trailheads(map: &Grid<u8>) -> Vec<Coord> {
    map.iter().filter(|(_, &h)| h == 0).map(|(at, _)| at).collect()
}

/// Number of distinct peaks reachable from `head` by single upward steps.
pub fn score(map: &Grid<u8>, head: Coord) -> usize {
    let mut visited = Grid::filled(map.rows(), map.cols(), false);
    let mut peaks = FxHashSet::default();
    let mut queue = VecDeque::from([head]);
    visited[head] = true;

    while let Some(cur) = queue.pop_front() {
        if map[cur] == PEAK {
            peaks.insert(cur);
            continue;
        }
        for next in map.neighbors(cur) {
            if !visited[next] && map[next] == map[cur] + 1 {
                visited[next] = true;
                queue.push_back(next);
            }
        }
    }
    peaks.len()
}

/// Number of distinct trails from every cell to any peak. Filled from the
/// peaks downward so each height only reads the level above it.
pub fn trail_counts(map: &Grid<u8>) -> Grid<u64> {
    let mut counts = Grid::filled(map.rows(), map.cols(), 0u64);
    for (at, &h) in map.iter() {
        if h == PEAK {
            counts[at] = 1;
        }
    }
    for height in (0..PEAK).rev() {
        for (at, &h) in map.iter() {
            if h != height {
                continue;
            }
            let above: u64 = map.neighbors(at)
                .filter(|&n| map[n] == height + 1)
                .map(|n| counts[n])
                .sum();
            counts[at] = above;
        }
    }
    counts
}

pub fn solve(text: &str) -> Result<Answer> {
    let map = parse_digit_grid(text)?;
    let heads = trailheads(&map);
    let total_score: usize = heads.iter().map(|&h| score(&map, h)).sum();
    let counts = trail_counts(&map);
    let total_rating: u64 = heads.iter().map(|&h| counts[h]).sum();
    Ok(Answer::new(10, "Hoof It", total_score, total_rating))
}
