pub mod boundary;
pub mod reach;
pub mod region;

pub use boundary::{count_corners, count_sides, fence_price, perimeter, FencePrice};
pub use reach::{distance_map, first_blocking, shortest_path, Blockage, BlockageReport};
pub use region::{discover_region, regions, Region};
