//! Chainable generator over filesystem steps.

use std::{io, path::PathBuf};

use eyre::{Context, Result};

use crate::{
    Kind, Project, TemplateContext, TemplateId,
    step::{Edit, Outcome, Step, StepRecord},
};

/// Records filesystem steps scoped to a kind and a root directory.
///
/// Each chained call appends one step; nothing touches the filesystem until
/// [`Generator::run`]. Steps then execute in call order and the first failure
/// aborts the remaining ones. Already-applied steps are not rolled back.
///
/// # Example
///
/// ```ignore
/// Generator::new(Kind::SubApp, "src/app/sub-apps/shop")
///     .render_template("index.ts", &ctx, None)
///     .mkdir_if_missing("hooks")
///     .copy_file_from_templates("hooks/index.ts")
///     .run(&project)?;
/// ```
#[derive(Debug)]
pub struct Generator {
    kind: Kind,
    root: PathBuf,
    steps: Vec<Step>,
}

impl Generator {
    /// `root` is relative to the project directory; the empty path means the
    /// project directory itself.
    pub fn new(kind: Kind, root: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            root: root.into(),
            steps: Vec::new(),
        }
    }

    /// Recorded steps, in execution order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Create `root/path` unless it exists. The empty path is the root itself.
    pub fn mkdir_if_missing(mut self, path: &str) -> Self {
        let path = self.resolve(path);
        self.steps.push(Step::Mkdir { path });
        self
    }

    /// Render `template` to `root/dest`, where `dest` defaults to the
    /// template path. Overwrites unconditionally.
    pub fn render_template(
        mut self,
        template: &str,
        context: &TemplateContext,
        dest: Option<&str>,
    ) -> Self {
        let dest = self.resolve(dest.unwrap_or(template));
        self.steps.push(Step::Render {
            template: TemplateId::new(self.kind, template),
            context: context.clone(),
            dest,
        });
        self
    }

    /// Copy `template` verbatim to `root/template` unless that file exists.
    pub fn copy_file_from_templates(mut self, template: &str) -> Self {
        let dest = self.resolve(template);
        self.steps.push(Step::Copy {
            template: TemplateId::new(self.kind, template),
            dest,
        });
        self
    }

    /// Read `root/path` (empty if missing), apply `edit`, write it back.
    pub fn update_file(mut self, path: &str, edit: Edit) -> Self {
        let path = self.resolve(path);
        self.steps.push(Step::Update { path, edit });
        self
    }

    /// Execute the recorded steps in order.
    pub fn run(&self, project: &Project<'_>) -> Result<Vec<StepRecord>> {
        let mut records = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            tracing::debug!(kind = %self.kind, %step, "running step");
            let outcome = run_step(step, project)?;
            records.push(StepRecord {
                action: step.action(),
                path: step.path().to_path_buf(),
                outcome,
            });
        }
        Ok(records)
    }

    fn resolve(&self, rel: &str) -> PathBuf {
        if rel.is_empty() {
            self.root.clone()
        } else {
            self.root.join(rel)
        }
    }
}

fn run_step(step: &Step, project: &Project<'_>) -> Result<Outcome> {
    let fs = project.fs();
    match step {
        Step::Mkdir { path } => {
            let target = project.path(path);
            if fs.is_dir(&target) {
                return Ok(Outcome::DirExists);
            }
            fs.create_dir_all(&target)
                .wrap_err_with(|| format!("failed to create directory '{}'", target.display()))?;
            Ok(Outcome::DirCreated)
        }
        Step::Render {
            template,
            context,
            dest,
        } => {
            let text = project.templates().render(fs, template, context)?;
            let target = project.path(dest);
            fs.write(&target, &text)
                .wrap_err_with(|| format!("failed to write '{}'", target.display()))?;
            Ok(Outcome::Rendered)
        }
        Step::Copy { template, dest } => {
            let target = project.path(dest);
            if fs.exists(&target) {
                return Ok(Outcome::Skipped);
            }
            let text = project.templates().source(fs, template)?;
            fs.write(&target, &text)
                .wrap_err_with(|| format!("failed to write '{}'", target.display()))?;
            Ok(Outcome::Copied)
        }
        Step::Update { path, edit } => {
            let target = project.path(path);
            let (current, existed) = match fs.read_to_string(&target) {
                Ok(text) => (text, true),
                Err(e) if e.kind() == io::ErrorKind::NotFound => (String::new(), false),
                Err(e) => {
                    return Err(e)
                        .wrap_err_with(|| format!("failed to read '{}'", target.display()));
                }
            };
            let updated = edit(&current);
            if existed && updated == current {
                return Ok(Outcome::Unchanged);
            }
            fs.write(&target, &updated)
                .wrap_err_with(|| format!("failed to write '{}'", target.display()))?;
            Ok(if existed {
                Outcome::Updated
            } else {
                Outcome::Created
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use hatchling_config::Config;
    use hatchling_core::{FileSystem, MemoryFs, Names};

    use super::*;
    use crate::step::append_line;

    fn context() -> TemplateContext {
        TemplateContext::new(&Names::new("shop").unwrap(), &Config::default())
    }

    #[test]
    fn test_steps_are_recorded_in_call_order() {
        let ctx = context();
        let generator = Generator::new(Kind::SubApp, "apps/shop")
            .render_template("index.ts", &ctx, None)
            .render_template("controller.ts", &ctx, Some("shop.controller.ts"))
            .mkdir_if_missing("hooks")
            .copy_file_from_templates("hooks/index.ts")
            .update_file("index.ts", append_line("x", false));

        let described: Vec<String> = generator.steps().iter().map(|s| s.to_string()).collect();
        assert_eq!(
            described,
            vec![
                "render apps/shop/index.ts <- sub-app/index.ts",
                "render apps/shop/shop.controller.ts <- sub-app/controller.ts",
                "mkdir apps/shop/hooks",
                "copy apps/shop/hooks/index.ts <- sub-app/hooks/index.ts",
                "update apps/shop/index.ts",
            ]
        );
    }

    #[test]
    fn test_empty_root_resolves_relative_to_project() {
        let generator = Generator::new(Kind::Hook, "").mkdir_if_missing("auth");
        assert_eq!(generator.steps()[0].path(), Path::new("auth"));
    }

    #[test]
    fn test_mkdir_empty_path_is_root() {
        let generator = Generator::new(Kind::Hook, "src/app/hooks").mkdir_if_missing("");
        assert_eq!(generator.steps()[0].path(), Path::new("src/app/hooks"));
    }

    #[test]
    fn test_mkdir_is_idempotent() {
        let fs = MemoryFs::new().with_file("hooks/keep.ts", "keep");
        let project = Project::new(&fs, "", Config::default());

        let records = Generator::new(Kind::Hook, "")
            .mkdir_if_missing("hooks")
            .mkdir_if_missing("hooks")
            .mkdir_if_missing("services")
            .run(&project)
            .unwrap();

        let outcomes: Vec<Outcome> = records.iter().map(|r| r.outcome).collect();
        assert_eq!(
            outcomes,
            vec![Outcome::DirExists, Outcome::DirExists, Outcome::DirCreated]
        );
        assert_eq!(fs.file("hooks/keep.ts").as_deref(), Some("keep"));
    }

    #[test]
    fn test_copy_never_overwrites() {
        let fs = MemoryFs::new()
            .with_dir("shop/hooks")
            .with_file("shop/hooks/index.ts", "export { Auth } from './auth.hook';\n");
        let project = Project::new(&fs, "", Config::default());

        let records = Generator::new(Kind::SubApp, "shop")
            .copy_file_from_templates("hooks/index.ts")
            .copy_file_from_templates("services/index.ts")
            .run(&project)
            .unwrap();

        assert_eq!(records[0].outcome, Outcome::Skipped);
        assert_eq!(records[1].outcome, Outcome::Copied);
        assert_eq!(
            fs.file("shop/hooks/index.ts").as_deref(),
            Some("export { Auth } from './auth.hook';\n")
        );
    }

    #[test]
    fn test_render_overwrites() {
        let fs = MemoryFs::new().with_file("index.ts", "stale");
        let project = Project::new(&fs, "", Config::default());

        let records = Generator::new(Kind::SubApp, "")
            .render_template("index.ts", &context(), None)
            .run(&project)
            .unwrap();

        assert_eq!(records[0].outcome, Outcome::Rendered);
        assert_eq!(
            fs.file("index.ts").as_deref(),
            Some("export { ShopController } from './shop.controller';\n")
        );
    }

    #[test]
    fn test_update_creates_then_updates() {
        let fs = MemoryFs::new();
        let project = Project::new(&fs, "", Config::default());
        let generator =
            Generator::new(Kind::Entity, "").update_file("index.ts", append_line("a", false));

        let first = generator.run(&project).unwrap();
        let second = generator.run(&project).unwrap();

        assert_eq!(first[0].outcome, Outcome::Created);
        assert_eq!(second[0].outcome, Outcome::Updated);
        assert_eq!(fs.file("index.ts").as_deref(), Some("a\na\n"));
    }

    #[test]
    fn test_update_unchanged_skips_write() {
        let fs = MemoryFs::new().with_file("index.ts", "a\n");
        let project = Project::new(&fs, "", Config::default());

        let records = Generator::new(Kind::Entity, "")
            .update_file("index.ts", append_line("a", true))
            .run(&project)
            .unwrap();

        assert_eq!(records[0].outcome, Outcome::Unchanged);
    }

    #[test]
    fn test_failure_aborts_remaining_steps() {
        let fs = MemoryFs::new().with_dir("locked").deny("locked");
        let project = Project::new(&fs, "", Config::default());

        let err = Generator::new(Kind::SubApp, "")
            .mkdir_if_missing("first")
            .mkdir_if_missing("locked/inner")
            .mkdir_if_missing("last")
            .run(&project)
            .unwrap_err();

        assert!(fs.is_dir(Path::new("first")));
        assert!(!fs.is_dir(Path::new("last")));

        let io_err = err
            .chain()
            .find_map(|e| e.downcast_ref::<io::Error>())
            .expect("io error in chain");
        assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
        assert!(err.to_string().contains("failed to create directory 'locked/inner'"));
    }

    #[test]
    fn test_render_into_missing_directory_fails() {
        let fs = MemoryFs::new();
        let project = Project::new(&fs, "", Config::default());

        let err = Generator::new(Kind::SubApp, "missing")
            .render_template("index.ts", &context(), None)
            .run(&project)
            .unwrap_err();

        assert!(err.to_string().contains("failed to write 'missing/index.ts'"));
    }
}
