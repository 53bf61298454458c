// Day 20: Race Condition. One track from 'S' to 'E'; a cheat lets the racer
// pass through walls for a bounded number of steps, once per race.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::Answer;
use crate::analysis::reach::distance_map;
use crate::core::{Grid, Result};
use crate::input::parse::{find_marker, parse_char_grid};

pub const EXAMPLE: &str = "###############\n#...#...#.....#\n#.#.#.#.#.###.#\n#S#...#.#.#...#\n#######.#.#.###\n#######.#.#...#\n#######.#.###.#\n###..E#...#...#\n###.#######.###\n#...###...#...#\n#.#####.#.###.#\n#.#...#.#.#...#\n#.#.#.#.#.#.###\n#...#...#...###\n###############\n";

/// Longest cheat in part one and part two.
const SHORT_CHEAT: usize = 2;
const LONG_CHEAT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceParams {
    /// Picoseconds a cheat must save to be counted.
    #[serde(default = "default_min_saving")]
    pub min_saving: usize,
}

fn default_min_saving() -> usize { 100 }

impl Default for RaceParams {
    fn default() -> Self {
        Self { min_saving: default_min_saving() }
    }
}

impl RaceParams {
    /// Threshold giving non-trivial counts on the worked example.
    pub fn example() -> Self {
        Self { min_saving: 50 }
    }
}

/// Distances from both ends of the track.
#[derive(Debug, Clone)]
pub struct Track {
    from_start: Grid<Option<usize>>,
    from_end: Grid<Option<usize>>,
    /// Uncheated race length, if the end is reachable at all.
    pub length: Option<usize>,
}

impl Track {
    pub fn parse(text: &str) -> Result<Self> {
        let map = parse_char_grid(text)?;
        let start = find_marker(&map, 'S')?;
        let end = find_marker(&map, 'E')?;
        let mut walls = Grid::filled(map.rows(), map.cols(), false);
        for (at, &ch) in map.iter() {
            walls[at] = ch == '#';
        }
        let from_start = distance_map(&walls, start);
        let from_end = distance_map(&walls, end);
        let length = from_start[end];
        Ok(Self { from_start, from_end, length })
    }

    /// Cheats of at most `max_jump` steps (Manhattan distance, through
    /// anything) that save at least `min_saving`. A cheat is identified by
    /// its start and end cells; a saving of zero never counts.
    pub fn count_cheats(&self, max_jump: usize, min_saving: usize) -> usize {
        let Some(length) = self.length else { return 0 };
        let threshold = min_saving.max(1);
        let reach = max_jump as isize;
        let mut count = 0;

        for (from, d) in self.from_start.iter() {
            let Some(ds) = *d else { continue };
            for dr in -reach..=reach {
                let rest = reach - dr.abs();
                for dc in -rest..=rest {
                    let jump = dr.unsigned_abs() + dc.unsigned_abs();
                    if jump < 2 {
                        continue;
                    }
                    let Some(to) = self.from_end.offset(from, dr, dc) else { continue };
                    let Some(de) = self.from_end[to] else { continue };
                    if ds + jump + de + threshold <= length {
                        count += 1;
                    }
                }
            }
        }
        count
    }
}

pub fn solve(text: &str, params: &RaceParams) -> Result<Answer> {
    let track = Track::parse(text)?;
    let answer = match track.length {
        Some(length) => {
            debug!(length, min_saving = params.min_saving, "track measured");
            Answer::new(
                20,
                "Race Condition",
                track.count_cheats(SHORT_CHEAT, params.min_saving),
                track.count_cheats(LONG_CHEAT, params.min_saving),
            )
        }
        None => {
            warn!("end is walled off from start");
            Answer::new(20, "Race Condition", "unreachable", "unreachable")
        }
    };
    Ok(answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PuzzleError;

    #[test]
    fn example_answers() {
        let answer = solve(EXAMPLE, &RaceParams::example()).unwrap();
        assert_eq!((answer.part_one.as_str(), answer.part_two.as_str()), ("1", "285"));
    }

    #[test]
    fn example_track_length() {
        assert_eq!(Track::parse(EXAMPLE).unwrap().length, Some(84));
    }

    #[test]
    fn short_cheat_thresholds() {
        let track = Track::parse(EXAMPLE).unwrap();
        assert_eq!(track.count_cheats(SHORT_CHEAT, 1), 44);
        assert_eq!(track.count_cheats(SHORT_CHEAT, 40), 2);
        assert_eq!(track.count_cheats(SHORT_CHEAT, 64), 1);
        assert_eq!(track.count_cheats(SHORT_CHEAT, 65), 0);
    }

    #[test]
    fn long_cheat_thresholds() {
        let track = Track::parse(EXAMPLE).unwrap();
        assert_eq!(track.count_cheats(LONG_CHEAT, 76), 3);
        assert_eq!(track.count_cheats(LONG_CHEAT, 74), 7);
        assert_eq!(track.count_cheats(LONG_CHEAT, 77), 0);
    }

    #[test]
    fn walled_off_end_is_unreachable() {
        let answer = solve("S#E\n", &RaceParams::default()).unwrap();
        assert_eq!(answer.part_one, "unreachable");
    }

    #[test]
    fn markers_are_required() {
        assert!(matches!(solve("S..\n", &RaceParams::default()), Err(PuzzleError::MissingMarker('E'))));
    }

    #[test]
    fn defaults_match_the_real_puzzle() {
        assert_eq!(RaceParams::default().min_saving, 100);
    }
}
