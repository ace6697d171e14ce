use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Summary,
    Json,
}

/// Settings for the command line reader, read from `coursecat.{toml,json,yaml}`
/// (or an explicit file) and `COURSECAT_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Tracing filter directive, e.g. "info" or "coursecat=debug".
    #[serde(default = "default_log")]
    pub log: String,
    /// Catalog document to read when none is given on the command line.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    #[serde(default)]
    pub output: OutputFormat,
    #[serde(default)]
    pub pretty: bool,
}

fn default_log() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log: default_log(),
            catalog: None,
            output: OutputFormat::default(),
            pretty: false,
        }
    }
}

impl Settings {
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let builder = match file {
            Some(path) => Config::builder().add_source(File::from(path).required(true)),
            None => Config::builder().add_source(File::with_name("coursecat").required(false)),
        };
        let settings = builder
            .add_source(Environment::with_prefix("COURSECAT"))
            .build()?
            .try_deserialize::<Settings>()?;
        Ok(settings)
    }
}
