//! Template lookup and rendering.
//!
//! Built-in templates are compiled into the binary. A project can shadow any
//! of them by placing a file at `<templates.dir>/<kind>/<path>`.

use std::{
    borrow::Cow,
    fmt,
    path::{Path, PathBuf},
};

use eyre::{Context, Result, eyre};
use hatchling_core::FileSystem;
use minijinja::{Environment, UndefinedBehavior};

use crate::{Kind, TemplateContext};

/// Identifies a template by kind and path relative to the kind's directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateId {
    pub kind: Kind,
    pub path: String,
}

impl TemplateId {
    pub fn new(kind: Kind, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.path)
    }
}

macro_rules! builtin {
    ($kind:expr, $dir:literal, $path:literal) => {
        (
            $kind,
            $path,
            include_str!(concat!("../templates/", $dir, "/", $path)),
        )
    };
}

/// Every built-in template: (kind, path, source).
pub const BUILTIN: &[(Kind, &str, &str)] = &[
    builtin!(Kind::SubApp, "sub-app", "index.ts"),
    builtin!(Kind::SubApp, "sub-app", "controller.ts"),
    builtin!(Kind::SubApp, "sub-app", "controllers/index.ts"),
    builtin!(Kind::SubApp, "sub-app", "hooks/index.ts"),
    builtin!(Kind::SubApp, "sub-app", "entities/index.ts"),
    builtin!(Kind::SubApp, "sub-app", "services/index.ts"),
    builtin!(Kind::Controller, "controller", "controller.ts"),
    builtin!(Kind::Controller, "controller", "controller.spec.ts"),
    builtin!(Kind::Entity, "entity", "entity.ts"),
    builtin!(Kind::Hook, "hook", "hook.ts"),
    builtin!(Kind::Service, "service", "service.ts"),
    builtin!(Kind::RestApi, "rest-api", "entity.ts"),
    builtin!(Kind::RestApi, "rest-api", "controller.ts"),
];

/// Look up a built-in template source.
pub fn builtin(kind: Kind, path: &str) -> Option<&'static str> {
    BUILTIN
        .iter()
        .find(|(k, p, _)| *k == kind && *p == path)
        .map(|(_, _, source)| *source)
}

/// Resolves and renders templates.
pub struct Templates {
    env: Environment<'static>,
    overrides: Option<PathBuf>,
}

impl Templates {
    /// Built-in templates only.
    pub fn builtin() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        Self {
            env,
            overrides: None,
        }
    }

    /// Built-in templates, shadowed by files under `dir`.
    pub fn with_overrides(dir: impl Into<PathBuf>) -> Self {
        Self {
            overrides: Some(dir.into()),
            ..Self::builtin()
        }
    }

    /// Directory searched for overrides, if any.
    pub fn overrides(&self) -> Option<&Path> {
        self.overrides.as_deref()
    }

    /// Raw template text: the override if one exists, the built-in otherwise.
    pub fn source(&self, fs: &dyn FileSystem, id: &TemplateId) -> Result<Cow<'static, str>> {
        if let Some(dir) = &self.overrides {
            let path = dir.join(id.kind.as_str()).join(&id.path);
            if fs.exists(&path) {
                tracing::debug!(template = %id, path = %path.display(), "using template override");
                let text = fs
                    .read_to_string(&path)
                    .wrap_err_with(|| format!("failed to read template '{}'", path.display()))?;
                return Ok(Cow::Owned(text));
            }
        }

        builtin(id.kind, &id.path)
            .map(Cow::Borrowed)
            .ok_or_else(|| eyre!("unknown template '{}'", id))
    }

    /// Render a template with the given context.
    pub fn render(
        &self,
        fs: &dyn FileSystem,
        id: &TemplateId,
        context: &TemplateContext,
    ) -> Result<String> {
        let source = self.source(fs, id)?;
        self.env
            .render_str(&source, context)
            .wrap_err_with(|| format!("failed to render template '{}'", id))
    }
}

impl Default for Templates {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for Templates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Templates")
            .field("overrides", &self.overrides)
            .finish_non_exhaustive()
    }
}
