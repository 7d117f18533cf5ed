use std::path::{Path, PathBuf};

use crate::{Config, Result};

/// Default configuration file name, looked up in the project directory.
pub const FILE_NAME: &str = "hatch.toml";

/// A loaded hatch.toml, or the defaults when the project has none.
#[derive(Debug, Clone, Default)]
pub struct HatchToml {
    path: Option<PathBuf>,
    config: Config,
}

impl HatchToml {
    /// Open and parse an explicit configuration file. The file must exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let config = Config::from_file(&path)?;
        Ok(Self {
            path: Some(path),
            config,
        })
    }

    /// Load `<dir>/hatch.toml` if present, defaults otherwise.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(FILE_NAME);
        if path.is_file() {
            Self::open(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Path the configuration was read from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get the parsed configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn into_config(self) -> Config {
        self.config
    }
}
