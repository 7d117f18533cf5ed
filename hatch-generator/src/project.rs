//! The project a generator runs against.

use std::path::{Path, PathBuf};

use hatchling_config::Config;
use hatchling_core::FileSystem;

use crate::Templates;

/// Filesystem, base directory, configuration and templates for one run.
///
/// Every path handed to a generator is relative to [`Project::base`]; the
/// process working directory is never consulted.
pub struct Project<'a> {
    fs: &'a dyn FileSystem,
    base: PathBuf,
    config: Config,
    templates: Templates,
}

impl<'a> Project<'a> {
    /// Create a project rooted at `base`.
    ///
    /// A relative `templates.dir` in the configuration is resolved against
    /// `base`.
    pub fn new(fs: &'a dyn FileSystem, base: impl Into<PathBuf>, config: Config) -> Self {
        let base = base.into();
        let templates = match &config.templates.dir {
            Some(dir) => Templates::with_overrides(base.join(dir)),
            None => Templates::builtin(),
        };
        Self {
            fs,
            base,
            config,
            templates,
        }
    }

    pub fn fs(&self) -> &dyn FileSystem {
        self.fs
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn templates(&self) -> &Templates {
        &self.templates
    }

    /// Absolute (or base-relative) location of a project-relative path.
    pub fn path(&self, rel: impl AsRef<Path>) -> PathBuf {
        let rel = rel.as_ref();
        if rel.as_os_str().is_empty() {
            self.base.clone()
        } else {
            self.base.join(rel)
        }
    }

    /// Whether a project-relative path is an existing directory.
    pub fn is_dir(&self, rel: impl AsRef<Path>) -> bool {
        self.fs.is_dir(&self.path(rel))
    }
}

#[cfg(test)]
mod tests {
    use hatchling_core::MemoryFs;

    use super::*;

    #[test]
    fn test_path_joins_base() {
        let fs = MemoryFs::new();
        let project = Project::new(&fs, "work", Config::default());

        assert_eq!(project.path("src/app"), PathBuf::from("work/src/app"));
        assert_eq!(project.path(""), PathBuf::from("work"));
    }

    #[test]
    fn test_is_dir() {
        let fs = MemoryFs::new().with_dir("work/src/app");
        let project = Project::new(&fs, "work", Config::default());

        assert!(project.is_dir("src/app"));
        assert!(project.is_dir(""));
        assert!(!project.is_dir("sub-apps"));
    }

    #[test]
    fn test_template_overrides_resolved_against_base() {
        let fs = MemoryFs::new();
        let mut config = Config::default();
        config.templates.dir = Some(PathBuf::from(".hatch/templates"));

        let project = Project::new(&fs, "work", config);

        assert_eq!(
            project.templates().overrides(),
            Some(Path::new("work/.hatch/templates"))
        );
    }
}
