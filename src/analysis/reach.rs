// BFS reachability over an obstacle mask (`true` = blocked), and the
// incremental check that drops obstacles one by one until the exit is cut off.

use std::collections::VecDeque;

use serde::Serialize;
use tracing::{debug, warn};

use crate::core::{Coord, Grid};

/// Step count of a shortest 4-directional path, or `None` if `end` cannot be
/// reached (including when either endpoint is blocked or off the grid).
pub fn shortest_path(blocked: &Grid<bool>, start: Coord, end: Coord) -> Option<usize> {
    let open = |c: Coord| blocked.get(c).map(|b| !*b).unwrap_or(false);
    if !open(start) || !open(end) {
        return None;
    }
    let mut dist: Grid<Option<usize>> = Grid::filled(blocked.rows(), blocked.cols(), None);
    let mut queue = VecDeque::new();
    dist[start] = Some(0);
    queue.push_back(start);

    while let Some(cur) = queue.pop_front() {
        let d = dist[cur].unwrap_or(0);
        if cur == end {
            return Some(d);
        }
        for next in blocked.neighbors(cur) {
            if !blocked[next] && dist[next].is_none() {
                dist[next] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }
    None
}

/// BFS step counts from `start` to every open cell it reaches; blocked and
/// unreachable cells stay `None`. A blocked or off-grid `start` reaches nothing.
pub fn distance_map(blocked: &Grid<bool>, start: Coord) -> Grid<Option<usize>> {
    let mut dist: Grid<Option<usize>> = Grid::filled(blocked.rows(), blocked.cols(), None);
    if blocked.get(start).copied().unwrap_or(true) {
        return dist;
    }
    let mut queue = VecDeque::new();
    dist[start] = Some(0);
    queue.push_back(start);

    while let Some(cur) = queue.pop_front() {
        let d = dist[cur].unwrap_or(0);
        for next in blocked.neighbors(cur) {
            if !blocked[next] && dist[next].is_none() {
                dist[next] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

pub fn is_reachable(blocked: &Grid<bool>, start: Coord, end: Coord) -> bool {
    shortest_path(blocked, start, end).is_some()
}

/// Maps an `x,y` pair (x = column, y = row) onto the grid.
pub fn xy_to_coord(x: i64, y: i64, rows: usize, cols: usize) -> Option<Coord> {
    let col = usize::try_from(x).ok()?;
    let row = usize::try_from(y).ok()?;
    (row < rows && col < cols).then_some(Coord::new(row, col))
}

/// Blocks the first `count` obstacles on a fresh `rows × cols` grid.
/// Out-of-range entries are logged and skipped but still consume a slot.
pub fn apply_obstacles(rows: usize, cols: usize, obstacles: &[(i64, i64)], count: usize) -> Grid<bool> {
    let mut blocked = Grid::filled(rows, cols, false);
    for &(x, y) in obstacles.iter().take(count) {
        match xy_to_coord(x, y, rows, cols) {
            Some(at) => blocked[at] = true,
            None => warn!(x, y, "obstacle out of bounds, ignored"),
        }
    }
    blocked
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Blockage {
    /// `start` still reaches `end` after every obstacle.
    Open,
    /// Obstacle `index` (0-based into the input list) was the first to cut
    /// every path.
    Blocked { index: usize, at: Coord },
    /// `start` or `end` lies off the grid, so no obstacle was ever checked.
    Disconnected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockageReport {
    pub outcome: Blockage,
    pub applied: usize,
    /// Out-of-range `x,y` pairs that were skipped.
    pub ignored: Vec<(i64, i64)>,
}

/// Applies obstacles in order and rechecks connectivity after each one.
/// Obstacles landing on `start` or `end` are never applied.
pub fn first_blocking(rows: usize, cols: usize, obstacles: &[(i64, i64)], start: Coord, end: Coord) -> BlockageReport {
    let mut blocked = Grid::filled(rows, cols, false);
    let mut applied = 0;
    let mut ignored = Vec::new();

    if !blocked.contains(start) || !blocked.contains(end) {
        warn!(%start, %end, rows, cols, "endpoint off the grid");
        return BlockageReport { outcome: Blockage::Disconnected, applied, ignored };
    }

    for (index, &(x, y)) in obstacles.iter().enumerate() {
        let at = match xy_to_coord(x, y, rows, cols) {
            Some(at) => at,
            None => {
                warn!(x, y, "obstacle out of bounds, ignored");
                ignored.push((x, y));
                continue;
            }
        };
        if at == start || at == end {
            debug!(%at, "obstacle on an endpoint, skipped");
            continue;
        }
        blocked[at] = true;
        applied += 1;
        if !is_reachable(&blocked, start, end) {
            debug!(index, %at, applied, "path severed");
            return BlockageReport { outcome: Blockage::Blocked { index, at }, applied, ignored };
        }
    }
    BlockageReport { outcome: Blockage::Open, applied, ignored }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse::parse_coords;

    const EXAMPLE: &str = "5,4\n4,2\n4,5\n3,0\n2,1\n6,3\n2,4\n1,5\n0,6\n3,3\n2,6\n5,1\n1,2\n5,5\n2,5\n6,5\n1,4\n0,4\n6,4\n1,1\n6,1\n1,0\n0,5\n1,6\n2,0\n";

    fn example() -> Vec<(i64, i64)> {
        parse_coords(EXAMPLE).items
    }

    #[test]
    fn open_grid_distance_is_manhattan() {
        let g = Grid::filled(7, 7, false);
        assert_eq!(shortest_path(&g, Coord::new(0, 0), Coord::new(6, 6)), Some(12));
        assert_eq!(shortest_path(&g, Coord::new(3, 3), Coord::new(3, 3)), Some(0));
    }

    #[test]
    fn example_after_twelve_bytes() {
        let g = apply_obstacles(7, 7, &example(), 12);
        assert_eq!(shortest_path(&g, Coord::new(0, 0), Coord::new(6, 6)), Some(22));
    }

    #[test]
    fn blocked_endpoint_is_unreachable() {
        let mut g = Grid::filled(3, 3, false);
        g[Coord::new(2, 2)] = true;
        assert_eq!(shortest_path(&g, Coord::new(0, 0), Coord::new(2, 2)), None);
        assert!(!is_reachable(&g, Coord::new(0, 0), Coord::new(5, 5)));
    }

    #[test]
    fn no_obstacles_stays_open() {
        let report = first_blocking(7, 7, &[], Coord::new(0, 0), Coord::new(6, 6));
        assert_eq!(report.outcome, Blockage::Open);
        assert_eq!(report.applied, 0);
    }

    #[test]
    fn example_first_blocker() {
        let report = first_blocking(7, 7, &example(), Coord::new(0, 0), Coord::new(6, 6));
        // "6,1": column 6, row 1, the 21st byte.
        assert_eq!(report.outcome, Blockage::Blocked { index: 20, at: Coord::new(1, 6) });
    }

    #[test]
    fn wall_completion_is_reported_exactly() {
        // A vertical wall down column 1 of a 3x3 grid; the last brick seals it.
        let obstacles = [(1, 0), (1, 1), (1, 2), (0, 2)];
        let report = first_blocking(3, 3, &obstacles, Coord::new(0, 0), Coord::new(2, 2));
        assert_eq!(report.outcome, Blockage::Blocked { index: 2, at: Coord::new(2, 1) });
        assert_eq!(report.applied, 3);
    }

    #[test]
    fn endpoints_and_out_of_range_are_skipped() {
        let obstacles = [(0, 0), (2, 2), (9, 0), (-1, 1), (1, 1)];
        let report = first_blocking(3, 3, &obstacles, Coord::new(0, 0), Coord::new(2, 2));
        assert_eq!(report.outcome, Blockage::Open);
        assert_eq!(report.applied, 1);
        assert_eq!(report.ignored, vec![(9, 0), (-1, 1)]);
    }

    #[test]
    fn off_grid_endpoint_is_disconnected_regardless_of_obstacles() {
        let none = first_blocking(3, 3, &[], Coord::new(0, 0), Coord::new(5, 5));
        let one = first_blocking(3, 3, &[(1, 1)], Coord::new(0, 0), Coord::new(5, 5));
        assert_eq!(none.outcome, Blockage::Disconnected);
        assert_eq!(one.outcome, Blockage::Disconnected);
        assert_eq!(one.applied, 0);
        let off_start = first_blocking(3, 3, &[(1, 1)], Coord::new(3, 0), Coord::new(2, 2));
        assert_eq!(off_start.outcome, Blockage::Disconnected);
    }

    #[test]
    fn out_of_range_obstacle_uses_up_a_slot() {
        let obstacles = [(9, 9), (1, 1)];
        assert!(!apply_obstacles(3, 3, &obstacles, 1)[Coord::new(1, 1)]);
        assert!(apply_obstacles(3, 3, &obstacles, 2)[Coord::new(1, 1)]);
        assert_eq!(apply_obstacles(3, 3, &obstacles, 2).iter().filter(|(_, b)| **b).count(), 1);
    }

    #[test]
    fn distance_map_covers_the_open_component() {
        let mut g = Grid::filled(3, 3, false);
        // Wall down column 1 except the bottom row.
        g[Coord::new(0, 1)] = true;
        g[Coord::new(1, 1)] = true;
        let dist = distance_map(&g, Coord::new(0, 0));
        assert_eq!(dist[Coord::new(0, 2)], Some(6));
        assert_eq!(dist[Coord::new(2, 1)], Some(3));
        assert_eq!(dist[Coord::new(0, 1)], None);
        assert_eq!(dist[Coord::new(0, 2)], shortest_path(&g, Coord::new(0, 0), Coord::new(0, 2)));

        g[Coord::new(2, 1)] = true;
        assert_eq!(distance_map(&g, Coord::new(0, 0))[Coord::new(0, 2)], None);
        assert!(distance_map(&g, Coord::new(0, 1)).iter().all(|(_, d)| d.is_none()));
    }

    #[test]
    fn xy_maps_column_first() {
        assert_eq!(xy_to_coord(6, 1, 7, 7), Some(Coord::new(1, 6)));
        assert_eq!(xy_to_coord(7, 1, 7, 7), None);
        assert_eq!(xy_to_coord(0, -3, 7, 7), None);
    }
}
