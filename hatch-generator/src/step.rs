//! Step descriptors recorded by a [`Generator`](crate::Generator).

use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::{TemplateContext, TemplateId};

/// Transformation applied to a file's text by an update step.
pub type Edit = Box<dyn Fn(&str) -> String>;

/// One filesystem operation. Paths are relative to the project directory.
pub enum Step {
    /// Create a directory (and parents) unless it exists.
    Mkdir { path: PathBuf },
    /// Render a template and write it, overwriting any existing file.
    Render {
        template: TemplateId,
        context: TemplateContext,
        dest: PathBuf,
    },
    /// Copy a template verbatim unless the destination exists.
    Copy { template: TemplateId, dest: PathBuf },
    /// Read a file (empty if missing), apply `edit` and write it back.
    Update { path: PathBuf, edit: Edit },
}

impl Step {
    /// The path the step acts on.
    pub fn path(&self) -> &Path {
        match self {
            Step::Mkdir { path } | Step::Update { path, .. } => path,
            Step::Render { dest, .. } | Step::Copy { dest, .. } => dest,
        }
    }

    /// Short verb describing the step.
    pub fn action(&self) -> &'static str {
        match self {
            Step::Mkdir { .. } => "mkdir",
            Step::Render { .. } => "render",
            Step::Copy { .. } => "copy",
            Step::Update { .. } => "update",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Render { template, dest, .. } | Step::Copy { template, dest } => {
                write!(f, "{} {} <- {}", self.action(), dest.display(), template)
            }
            _ => write!(f, "{} {}", self.action(), self.path().display()),
        }
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Mkdir { path } => f.debug_struct("Mkdir").field("path", path).finish(),
            Step::Render {
                template,
                context,
                dest,
            } => f
                .debug_struct("Render")
                .field("template", template)
                .field("context", context)
                .field("dest", dest)
                .finish(),
            Step::Copy { template, dest } => f
                .debug_struct("Copy")
                .field("template", template)
                .field("dest", dest)
                .finish(),
            Step::Update { path, .. } => f
                .debug_struct("Update")
                .field("path", path)
                .finish_non_exhaustive(),
        }
    }
}

/// What happened when a step ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Directory was created
    DirCreated,
    /// Directory was already there
    DirExists,
    /// Template was rendered to the destination
    Rendered,
    /// Template was copied to the destination
    Copied,
    /// Copy destination already existed
    Skipped,
    /// Updated file did not exist and was created
    Created,
    /// Existing file was rewritten
    Updated,
    /// Edit produced identical text; nothing written
    Unchanged,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::DirCreated | Outcome::Created => "created",
            Outcome::DirExists | Outcome::Skipped => "exists",
            Outcome::Rendered => "rendered",
            Outcome::Copied => "copied",
            Outcome::Updated => "updated",
            Outcome::Unchanged => "unchanged",
        }
    }

    /// Whether the step changed anything on disk.
    pub fn is_change(&self) -> bool {
        !matches!(
            self,
            Outcome::DirExists | Outcome::Skipped | Outcome::Unchanged
        )
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A step that ran, with its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub action: &'static str,
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// Edit appending `line` to a file.
///
/// A newline is inserted first when the existing content does not end with
/// one. With `dedupe`, nothing is appended if an identical line is already
/// present.
pub fn append_line(line: impl Into<String>, dedupe: bool) -> Edit {
    let line = line.into();
    Box::new(move |content: &str| {
        if dedupe && content.lines().any(|l| l == line) {
            return content.to_string();
        }

        let mut out = String::with_capacity(content.len() + line.len() + 2);
        out.push_str(content);
        if !content.is_empty() && !content.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&line);
        out.push('\n');
        out
    })
}
