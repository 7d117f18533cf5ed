//! Generate operation - run or preview a feature plan.

use std::path::Path;

use eyre::{Context, Result};
use hatchling_config::Config;
use hatchling_core::{FileSystem, Names};
use hatchling_generator::{Kind, Project, features};

use crate::reports::{GenerateReport, GenerateResult};

/// Options for the generate operation.
pub struct GenerateOptions {
    /// Whether to print the plan without running it.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Builds the plan for `kind` against the project at `base`, then either
/// runs it or returns its steps for preview.
pub fn generate(
    fs: &dyn FileSystem,
    base: &Path,
    config: Config,
    kind: Kind,
    names: &Names,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let project = Project::new(fs, base, config);
    let plan = features::plan(kind, &project, names);

    let result = if opts.dry_run {
        GenerateResult::Planned(plan.steps().map(|step| step.to_string()).collect())
    } else {
        let records = plan.run(&project).wrap_err_with(|| {
            format!("Failed to generate {} '{}'", plan.kind, plan.names.kebab)
        })?;
        GenerateResult::Applied(records)
    };

    Ok(GenerateReport {
        kind: plan.kind,
        name: plan.names.kebab,
        result,
    })
}
