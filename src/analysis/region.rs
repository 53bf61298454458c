// Region discovery: maximal 4-connected sets of equally labelled cells.

use std::collections::VecDeque;

use crate::core::{Coord, Grid};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Region<T> {
    pub label: T,
    /// Cells in BFS discovery order; the start cell comes first.
    pub cells: Vec<Coord>,
    pub min_r: usize,
    pub min_c: usize,
    pub max_r: usize,
    pub max_c: usize,
}

impl<T> Region<T> {
    fn from_cells(cells: Vec<Coord>, label: T) -> Self {
        let min_r = cells.iter().map(|c| c.row).min().unwrap_or(0);
        let min_c = cells.iter().map(|c| c.col).min().unwrap_or(0);
        let max_r = cells.iter().map(|c| c.row).max().unwrap_or(0);
        let max_c = cells.iter().map(|c| c.col).max().unwrap_or(0);
        Self { label, cells, min_r, min_c, max_r, max_c }
    }

    pub fn area(&self) -> usize { self.cells.len() }
    pub fn width(&self) -> usize { self.max_c - self.min_c + 1 }
    pub fn height(&self) -> usize { self.max_r - self.min_r + 1 }
}

/// Grows the region containing `start` with a FIFO frontier, marking every
/// member in `visited`. `start` must be unvisited. Each cell is enqueued at
/// most once, so the call is linear in the region's area.
pub fn discover_region<T: Clone + PartialEq>(grid: &Grid<T>, visited: &mut Grid<bool>, start: Coord) -> Region<T> {
    let label = grid[start].clone();
    let mut cells = Vec::new();
    let mut queue = VecDeque::new();
    visited[start] = true;
    queue.push_back(start);

    while let Some(cur) = queue.pop_front() {
        cells.push(cur);
        for next in grid.neighbors(cur) {
            if !visited[next] && grid[next] == label {
                visited[next] = true;
                queue.push_back(next);
            }
        }
    }
    Region::from_cells(cells, label)
}

/// Sweeps the grid in row-major order and returns every region. The visited
/// buffer lives only for this call.
pub fn regions<T: Clone + PartialEq>(grid: &Grid<T>) -> Vec<Region<T>> {
    let mut visited = Grid::filled(grid.rows(), grid.cols(), false);
    let mut out = Vec::new();
    for at in grid.coords() {
        if !visited[at] {
            out.push(discover_region(grid, &mut visited, at));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse::parse_char_grid;

    fn region_ids<T>(grid: &Grid<T>, regions: &[Region<T>]) -> Grid<usize> {
        let mut ids = Grid::filled(grid.rows(), grid.cols(), usize::MAX);
        for (i, region) in regions.iter().enumerate() {
            for &c in &region.cells {
                ids[c] = i;
            }
        }
        ids
    }

    const SMALL: &str = "AAAA\nBBCD\nBBCC\nEEEC\n";
    const NESTED: &str = "OOOOO\nOXOXO\nOOOOO\nOXOXO\nOOOOO\n";

    #[test]
    fn small_map_has_five_regions() {
        let grid = parse_char_grid(SMALL).unwrap();
        let found = regions(&grid);
        let summary: Vec<(char, usize)> = found.iter().map(|r| (r.label, r.area())).collect();
        assert_eq!(summary, vec![('A', 4), ('B', 4), ('C', 4), ('D', 1), ('E', 3)]);
    }

    #[test]
    fn same_label_can_form_separate_regions() {
        let grid = parse_char_grid(NESTED).unwrap();
        let found = regions(&grid);
        assert_eq!(found.len(), 5);
        assert_eq!(found[0].label, 'O');
        assert_eq!(found[0].area(), 21);
        assert!(found[1..].iter().all(|r| r.label == 'X' && r.area() == 1));
    }

    #[test]
    fn regions_partition_the_grid() {
        for text in [SMALL, NESTED, "RRRRIICCFF\nRRRRIICCCF\nVVRRRCCFFF\nVVRCCCJFFF\nVVVVCJJCFE\n"] {
            let grid = parse_char_grid(text).unwrap();
            let found = regions(&grid);
            let ids = region_ids(&grid, &found);
            let total: usize = found.iter().map(|r| r.area()).sum();
            assert_eq!(total, grid.len());
            assert!(ids.iter().all(|(_, &id)| id != usize::MAX));
            for (i, r) in found.iter().enumerate() {
                assert!(r.cells.iter().all(|&c| ids[c] == i && grid[c] == r.label));
            }
        }
    }

    #[test]
    fn discover_marks_only_its_region() {
        let grid = parse_char_grid(SMALL).unwrap();
        let mut visited = Grid::filled(4, 4, false);
        let c = discover_region(&grid, &mut visited, Coord::new(1, 2));
        assert_eq!(c.area(), 4);
        assert_eq!(c.cells[0], Coord::new(1, 2));
        assert_eq!((c.min_r, c.min_c, c.max_r, c.max_c), (1, 2, 3, 3));
        assert_eq!(visited.iter().filter(|(_, v)| **v).count(), 4);
    }

    #[test]
    fn empty_grid_has_no_regions() {
        let grid: Grid<char> = Grid::from_rows(Vec::new()).unwrap();
        assert!(regions(&grid).is_empty());
    }
}
