//! Template-driven scaffolding generators.
//!
//! A feature (see [`features`]) probes the project layout and produces a
//! [`Plan`]: an ordered list of [`Generator`]s, each an ordered list of
//! filesystem [`Step`]s scoped to one root directory. Running a plan executes
//! the steps against the [`Project`]'s filesystem and returns one
//! [`StepRecord`] per step.
//!
//! Steps are idempotent where it matters: directories are only created when
//! missing, template copies never overwrite, and barrel files are only ever
//! appended to. Rendered files are always rewritten.

mod context;
pub mod features;
mod generator;
mod kind;
pub mod layout;
mod plan;
mod project;
mod step;
mod templates;

pub use context::TemplateContext;
pub use generator::Generator;
pub use kind::Kind;
pub use layout::{Location, Placement, locate};
pub use plan::Plan;
pub use project::Project;
pub use step::{Edit, Outcome, Step, StepRecord, append_line};
pub use templates::{BUILTIN, TemplateId, Templates, builtin};
