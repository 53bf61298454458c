pub mod load;
pub mod parse;

pub use load::read_input;
pub use parse::{MalformedLine, Parsed};
