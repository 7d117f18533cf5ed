//! Where generated artifacts land in a project.

use std::path::{Path, PathBuf};

use crate::Project;

/// How the root for a collection was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Inside the application directory, e.g. `src/app/hooks`
    App,
    /// A collection directory at the project base, e.g. `hooks`
    Collection,
    /// Directly at the project base; no barrel file is maintained
    Bare,
}

impl Placement {
    pub fn is_bare(&self) -> bool {
        matches!(self, Placement::Bare)
    }
}

/// A resolved root directory for one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub placement: Placement,
    /// Relative to the project base; empty when bare.
    pub root: PathBuf,
}

impl Location {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_bare(&self) -> bool {
        self.placement.is_bare()
    }
}

/// Pick the root for `collection` (e.g. `"sub-apps"`).
///
/// The configured application directory wins when it exists. Otherwise a
/// directory named after the collection at the project base is used. Failing
/// both, artifacts go straight into the base.
pub fn locate(project: &Project<'_>, collection: &str) -> Location {
    let app_dir = &project.config().project.app_dir;

    let location = if project.is_dir(app_dir) {
        Location {
            placement: Placement::App,
            root: app_dir.join(collection),
        }
    } else if project.is_dir(collection) {
        Location {
            placement: Placement::Collection,
            root: PathBuf::from(collection),
        }
    } else {
        Location {
            placement: Placement::Bare,
            root: PathBuf::new(),
        }
    };

    tracing::info!(
        collection,
        placement = ?location.placement,
        root = %location.root.display(),
        "resolved layout"
    );
    location
}

#[cfg(test)]
mod tests {
    use hatchling_config::Config;
    use hatchling_core::MemoryFs;

    use super::*;

    #[test]
    fn test_locate_app_dir() {
        let fs = MemoryFs::new().with_dir("src/app").with_dir("sub-apps");
        let project = Project::new(&fs, "", Config::default());

        let location = locate(&project, "sub-apps");
        assert_eq!(location.placement, Placement::App);
        assert_eq!(location.root, PathBuf::from("src/app/sub-apps"));
    }

    #[test]
    fn test_locate_collection_dir() {
        let fs = MemoryFs::new().with_dir("hooks");
        let project = Project::new(&fs, "", Config::default());

        let location = locate(&project, "hooks");
        assert_eq!(location.placement, Placement::Collection);
        assert_eq!(location.root, PathBuf::from("hooks"));
    }

    #[test]
    fn test_locate_bare() {
        let fs = MemoryFs::new();
        let project = Project::new(&fs, "", Config::default());

        let location = locate(&project, "services");
        assert!(location.is_bare());
        assert_eq!(location.root, PathBuf::new());
    }

    #[test]
    fn test_locate_custom_app_dir() {
        let fs = MemoryFs::new().with_dir("web/app").with_dir("src/app");
        let mut config = Config::default();
        config.project.app_dir = PathBuf::from("web/app");
        let project = Project::new(&fs, "", config);

        let location = locate(&project, "entities");
        assert_eq!(location.root, PathBuf::from("web/app/entities"));
    }

    #[test]
    fn test_locate_uses_project_base() {
        let fs = MemoryFs::new().with_dir("work/src/app").with_dir("src/app");
        let project = Project::new(&fs, "other", Config::default());

        assert!(locate(&project, "hooks").is_bare());
    }
}
