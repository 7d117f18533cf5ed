//! hatch.toml parsing and validation.
//!
//! The configuration file is optional: a project without one gets the
//! defaults described on [`Config`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;

pub use config::{
    Config, DEFAULT_APP_DIR, DEFAULT_FRAMEWORK, DEFAULT_ORM, GenerateConfig, ProjectConfig,
    TemplatesConfig,
};
pub use error::{Error, Result};
pub use file::{FILE_NAME, HatchToml};
