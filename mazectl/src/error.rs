use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Maze error; {0}")]
    Maze(#[from] mazecore::Error),
    #[error("Cannot access {path:?}; {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("RON parse error; {0}")]
    RonParse(#[from] ron::error::SpannedError),
    #[error("RON error; {0}")]
    Ron(#[from] ron::Error),
    #[error("JSON error; {0}")]
    Json(#[from] serde_json::Error),
    #[error("Size {size} exceeds configured maximum of {max}")]
    SizeTooLarge { size: i32, max: u16 },
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }
}
