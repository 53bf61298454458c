// Boundary metrics over a discovered region.
//
// An edge of a region cell "faces out" when the neighbour across it is off
// the grid or carries a different label. Perimeter counts those unit edges;
// the side count merges collinear runs of them into one straight side.

use rustc_hash::FxHashSet;
use serde::Serialize;

use super::region::{regions, Region};
use crate::core::{Coord, Dir, Grid};

fn faces_out<T: PartialEq>(grid: &Grid<T>, at: Coord, dir: Dir) -> bool {
    match grid.step(at, dir) {
        Some(n) => grid[n] != grid[at],
        None => true,
    }
}

fn diagonal_out<T: PartialEq>(grid: &Grid<T>, at: Coord, dr: isize, dc: isize) -> bool {
    match grid.offset(at, dr, dc) {
        Some(n) => grid[n] != grid[at],
        None => true,
    }
}

pub fn perimeter<T: PartialEq>(grid: &Grid<T>, region: &Region<T>) -> usize {
    region.cells.iter()
        .map(|&c| Dir::ALL.iter().filter(|&&d| faces_out(grid, c, d)).count())
        .sum()
}

/// Counts straight sides by scanning the region's bounding box: rows for the
/// top/bottom fences, then columns for left/right. A run flag stays set while
/// consecutive member cells keep facing out in that direction and drops as
/// soon as a cell leaves the region or stops facing out.
pub fn count_sides<T: PartialEq>(grid: &Grid<T>, region: &Region<T>) -> usize {
    let members: FxHashSet<Coord> = region.cells.iter().copied().collect();
    let mut sides = 0;

    for r in region.min_r..=region.max_r {
        let (mut in_top, mut in_bottom) = (false, false);
        for c in region.min_c..=region.max_c {
            let at = Coord::new(r, c);
            if !members.contains(&at) {
                in_top = false;
                in_bottom = false;
                continue;
            }
            sides += run_step(&mut in_top, faces_out(grid, at, Dir::Up));
            sides += run_step(&mut in_bottom, faces_out(grid, at, Dir::Down));
        }
    }

    for c in region.min_c..=region.max_c {
        let (mut in_left, mut in_right) = (false, false);
        for r in region.min_r..=region.max_r {
            let at = Coord::new(r, c);
            if !members.contains(&at) {
                in_left = false;
                in_right = false;
                continue;
            }
            sides += run_step(&mut in_left, faces_out(grid, at, Dir::Left));
            sides += run_step(&mut in_right, faces_out(grid, at, Dir::Right));
        }
    }
    sides
}

// 1 when a new run starts here.
fn run_step(in_run: &mut bool, facing: bool) -> usize {
    let started = facing && !*in_run;
    *in_run = facing;
    started as usize
}

/// Counts boundary corners: a convex corner where both orthogonal neighbours
/// of a quadrant face out, a concave one where both stay inside but the
/// diagonal does not. A closed rectilinear boundary has as many corners as
/// sides, holes included, so this must always agree with [`count_sides`].
pub fn count_corners<T: PartialEq>(grid: &Grid<T>, region: &Region<T>) -> usize {
    const QUADRANTS: [(Dir, Dir, isize, isize); 4] = [
        (Dir::Up, Dir::Left, -1, -1),
        (Dir::Up, Dir::Right, -1, 1),
        (Dir::Down, Dir::Left, 1, -1),
        (Dir::Down, Dir::Right, 1, 1),
    ];
    let mut corners = 0;
    for &at in &region.cells {
        for &(v, h, dr, dc) in &QUADRANTS {
            let (v_out, h_out) = (faces_out(grid, at, v), faces_out(grid, at, h));
            if v_out && h_out {
                corners += 1;
            } else if !v_out && !h_out && diagonal_out(grid, at, dr, dc) {
                corners += 1;
            }
        }
    }
    corners
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionMetrics<T> {
    pub label: T,
    pub area: usize,
    pub perimeter: usize,
    pub sides: usize,
}

pub fn measure<T: Clone + PartialEq>(grid: &Grid<T>) -> Vec<RegionMetrics<T>> {
    regions(grid).into_iter()
        .map(|r| RegionMetrics {
            area: r.area(),
            perimeter: perimeter(grid, &r),
            sides: count_sides(grid, &r),
            label: r.label,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FencePrice {
    /// Sum of area × perimeter.
    pub by_perimeter: u64,
    /// Sum of area × sides.
    pub by_sides: u64,
}

pub fn fence_price<T: Clone + PartialEq>(grid: &Grid<T>) -> FencePrice {
    measure(grid).iter().fold(FencePrice::default(), |acc, m| FencePrice {
        by_perimeter: acc.by_perimeter + (m.area * m.perimeter) as u64,
        by_sides: acc.by_sides + (m.area * m.sides) as u64,
    })
}
