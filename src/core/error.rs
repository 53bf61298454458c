use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("input is empty")]
    EmptyInput,
    #[error("line {line}: expected {expected} cells, found {found}")]
    RaggedRow { line: usize, expected: usize, found: usize },
    #[error("line {line}, column {col}: invalid cell {ch:?}")]
    InvalidCell { line: usize, col: usize, ch: char },
    #[error("map has no {0:?} marker")]
    MissingMarker(char),
    #[error("no solver for day {0}")]
    UnknownDay(u8),
    #[error("invalid config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
