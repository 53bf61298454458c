use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{PuzzleError, Result};
use crate::puzzles::{RaceParams, RamRunParams, SolveParams, SUPPORTED_DAYS};

pub const DEFAULT_CONFIG_FILE: &str = "advent.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,
    /// Puzzles to run; empty means every supported day.
    #[serde(default)]
    pub puzzles: Vec<PuzzleEntry>,
    #[serde(default)]
    pub ram_run: RamRunParams,
    #[serde(default)]
    pub race: RaceParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleEntry {
    pub day: u8,
    /// Input path; relative paths resolve against `input_dir`.
    #[serde(default)]
    pub input: Option<PathBuf>,
}

fn default_input_dir() -> PathBuf { PathBuf::from("inputs") }

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            puzzles: Vec::new(),
            ram_run: RamRunParams::default(),
            race: RaceParams::default(),
        }
    }
}

impl PuzzleEntry {
    pub fn new(day: u8) -> Self {
        Self { day, input: None }
    }

    /// `input_dir/day_NN.in` unless an explicit input is given.
    pub fn input_path(&self, input_dir: &Path) -> PathBuf {
        match &self.input {
            Some(p) if p.is_absolute() => p.clone(),
            Some(p) => input_dir.join(p),
            None => input_dir.join(format!("day_{:02}.in", self.day)),
        }
    }
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| PuzzleError::Config(e.to_string()))
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    /// A file that exists but does not parse is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => {
                let config = Self::from_toml_str(&contents)?;
                info!(path = %path.display(), "loaded configuration");
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(PuzzleError::Io { path: path.to_path_buf(), source }),
        }
    }

    pub fn params(&self) -> SolveParams {
        SolveParams { ram_run: self.ram_run, race: self.race }
    }

    /// Configured puzzles, or one default entry per supported day.
    pub fn entries(&self) -> Vec<PuzzleEntry> {
        if self.puzzles.is_empty() {
            SUPPORTED_DAYS.iter().map(|&d| PuzzleEntry::new(d)).collect()
        } else {
            self.puzzles.clone()
        }
    }
}
