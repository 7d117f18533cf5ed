//! Project configuration read from hatch.toml.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{Error, Result};

/// Default location of the application source tree.
pub const DEFAULT_APP_DIR: &str = "src/app";
/// Default module the generated code imports framework decorators from.
pub const DEFAULT_FRAMEWORK: &str = "@foal/core";
/// Default module the generated code imports ORM symbols from.
pub const DEFAULT_ORM: &str = "typeorm";

/// Root of hatch.toml. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub project: ProjectConfig,
    pub templates: TemplatesConfig,
    pub generate: GenerateConfig,
}

/// `[project]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Application source tree probed by the generators.
    pub app_dir: PathBuf,
    pub framework: String,
    pub orm: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            app_dir: PathBuf::from(DEFAULT_APP_DIR),
            framework: DEFAULT_FRAMEWORK.to_string(),
            orm: DEFAULT_ORM.to_string(),
        }
    }
}

/// `[templates]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplatesConfig {
    /// Directory holding `<kind>/<path>` overrides for built-in templates.
    pub dir: Option<PathBuf>,
}

/// `[generate]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// Skip appending an export line that is already present in an index file.
    pub dedupe_exports: bool,
}

impl Config {
    /// Parse from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        config.validate(content, filename)?;
        Ok(config)
    }

    /// Read and parse a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        let app_dir = &self.project.app_dir;
        if app_dir.as_os_str().is_empty() {
            return Err(Error::validation(
                "app_dir must not be empty",
                "app_dir",
                src,
                filename,
            ));
        }
        if app_dir.is_absolute() {
            return Err(Error::validation(
                "app_dir must be relative to the project directory",
                "app_dir",
                src,
                filename,
            ));
        }
        if self.project.framework.trim().is_empty() {
            return Err(Error::validation(
                "framework must not be empty",
                "framework",
                src,
                filename,
            ));
        }
        if self.project.orm.trim().is_empty() {
            return Err(Error::validation(
                "orm must not be empty",
                "orm",
                src,
                filename,
            ));
        }
        Ok(())
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    /// Parse from a string (uses "hatch.toml" as the filename in diagnostics).
    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "hatch.toml")
    }
}
