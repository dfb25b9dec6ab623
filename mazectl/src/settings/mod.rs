use std::{
    fs, io,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use log::{debug, info};
use mazecore::Algorithm;
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Ron,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub default_size: Option<u16>,
    #[serde(default)]
    pub default_algorithm: Option<Algorithm>,
    #[serde(default)]
    pub max_size: Option<u16>,
    #[serde(default)]
    pub output: Option<OutputFormat>,
}

impl Settings {
    pub fn get_default_size(&self) -> u16 {
        self.default_size.unwrap_or(9)
    }

    pub fn get_default_algorithm(&self) -> Algorithm {
        self.default_algorithm.unwrap_or_default()
    }

    pub fn get_max_size(&self) -> u16 {
        self.max_size.unwrap_or(99)
    }

    pub fn get_output(&self) -> OutputFormat {
        self.output.unwrap_or_default()
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mazectl")
            .join("settings.ron")
    }

    fn options() -> ron::Options {
        ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
    }

    pub fn parse(text: &str) -> Result<Self, CliError> {
        Ok(Self::options().from_str(text)?)
    }

    /// Reads settings from `path`, writing the defaults there first if the
    /// file does not exist yet.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        match fs::read_to_string(path) {
            Ok(text) => {
                debug!("loading settings from {:?}", path);
                Self::parse(&text)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Self::reset_config(path)?;
                Self::parse(DEFAULT_SETTINGS)
            }
            Err(e) => Err(CliError::io(path, e)),
        }
    }

    pub fn reset_config(path: &Path) -> Result<(), CliError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| CliError::io(parent, e))?;
        }
        fs::write(path, DEFAULT_SETTINGS).map_err(|e| CliError::io(path, e))?;
        info!("wrote default settings to {:?}", path);
        Ok(())
    }
}
