// Day 12: Garden Groups. Fence price per region is area × perimeter, or
// area × sides under the bulk discount.

use tracing::debug;

use super::Answer;
use crate::analysis::boundary::{fence_price, measure};
use crate::core::Result;
use crate::input::parse::parse_char_grid;

pub const EXAMPLE: &str = "RRRRIICCFF\nRRRRIICCCF\nVVRRRCCFFF\nVVRCCCJFFF\nVVVVCJJCFE\nVVIVCCJJEE\nVVIIICJJEE\nMIIIIIJJEE\nMIIISIJEEE\nMMMISSJEEE\n";

pub fn solve(text: &str) -> Result<Answer> {
    let grid = parse_char_grid(text)?;
    if tracing::enabled!(tracing::Level::DEBUG) {
        for m in measure(&grid) {
            debug!(label = %m.label, area = m.area, perimeter = m.perimeter, sides = m.sides, "region");
        }
    }
    let price = fence_price(&grid);
    Ok(Answer::new(12, "Garden Groups", price.by_perimeter, price.by_sides))
}
