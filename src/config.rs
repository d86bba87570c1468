//! JSON board configuration.
//!
//! The `strategy` tag selects a construction strategy at deserialize time;
//! an unknown tag is a parse error, so no unrecognized-strategy branch can
//! be reached at build time.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::board_image::{CellIndex, Rect};
use crate::builder::BoardSource;
use crate::point::TypeCode;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Deserialized board configuration, one variant per construction strategy.
///
/// ```json
/// { "strategy": "random", "kinds": 8, "rows": 10, "cols": 14 }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum BoardConfig {
    Explicit {
        matrix: Vec<Vec<TypeCode>>,
    },
    Random {
        kinds: usize,
        rows: usize,
        cols: usize,
    },
    ImageByCount {
        path: PathBuf,
        rect: Rect,
        rows: usize,
        cols: usize,
        #[serde(default)]
        known_empty: Vec<CellIndex>,
    },
    ImageByPixel {
        path: PathBuf,
        rect: Rect,
        cell_width: u32,
        cell_height: u32,
        #[serde(default)]
        known_empty: Vec<CellIndex>,
    },
}

impl BoardConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn into_source(self) -> BoardSource {
        match self {
            BoardConfig::Explicit { matrix } => BoardSource::Explicit { matrix },
            BoardConfig::Random { kinds, rows, cols } => BoardSource::Random { kinds, rows, cols },
            BoardConfig::ImageByCount {
                path,
                rect,
                rows,
                cols,
                known_empty,
            } => BoardSource::ImageByCount {
                path,
                rect,
                rows,
                cols,
                known_empty,
            },
            BoardConfig::ImageByPixel {
                path,
                rect,
                cell_width,
                cell_height,
                known_empty,
            } => BoardSource::ImageByPixel {
                path,
                rect,
                cell_width,
                cell_height,
                known_empty,
            },
        }
    }
}

impl From<BoardConfig> for BoardSource {
    fn from(config: BoardConfig) -> Self {
        config.into_source()
    }
}
