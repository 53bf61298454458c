pub mod core;
pub mod input;
pub mod analysis;
pub mod puzzles;
pub mod bench;
pub mod config;
