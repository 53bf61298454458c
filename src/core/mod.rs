pub mod error;
pub mod types;

pub use error::{PuzzleError, Result};
pub use types::{Coord, Dir, Grid};
