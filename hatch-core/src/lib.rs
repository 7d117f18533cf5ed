//! Core utilities and types for the hatch scaffolding CLI.
//!
//! This crate provides the naming rules and the filesystem capability used
//! by every generator, plus the authenticator contract that generated
//! applications implement.

pub mod auth;
mod fs;
mod names;

pub use auth::Authenticator;
#[cfg(any(test, feature = "testing"))]
pub use fs::MemoryFs;
pub use fs::{FileSystem, OsFs};
pub use names::{NameError, Names, TYPESCRIPT_RESERVED};
