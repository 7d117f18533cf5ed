//! Feature generators: one per [`Kind`].
//!
//! Each feature probes the project layout, then builds a [`Plan`] of
//! generators. Building a plan never touches the filesystem beyond the layout
//! probe, so a plan can be printed instead of run.

mod controller;
mod entity;
mod hook;
mod rest_api;
mod service;
mod sub_app;

use eyre::Result;
use hatchling_core::Names;

use crate::{
    Generator, Kind, Plan, Project, StepRecord, TemplateContext,
    layout::{Location, locate},
    step::append_line,
};

/// Build the plan for `kind`.
pub fn plan(kind: Kind, project: &Project<'_>, names: &Names) -> Plan {
    match kind {
        Kind::SubApp => sub_app::plan(project, names),
        Kind::Controller => controller::plan(project, names),
        Kind::Entity => entity::plan(project, names),
        Kind::Hook => hook::plan(project, names),
        Kind::Service => service::plan(project, names),
        Kind::RestApi => rest_api::plan(project, names),
    }
}

/// Build and run the plan for `kind`.
pub fn generate(kind: Kind, project: &Project<'_>, names: &Names) -> Result<Vec<StepRecord>> {
    plan(kind, project, names).run(project)
}

/// `export { <symbol> } from './<module>';`
pub(crate) fn export_line(symbol: &str, module: &str) -> String {
    format!("export {{ {} }} from './{}';", symbol, module)
}

/// A generator rooted at `location` that renders one file and registers it
/// in the collection barrel.
///
/// The collection directory is created first unless the placement is bare;
/// bare placements have no barrel to update.
pub(crate) fn single_file(
    kind: Kind,
    project: &Project<'_>,
    location: &Location,
    context: &TemplateContext,
    template: &str,
    suffix: &str,
    symbol: &str,
) -> Generator {
    let module = format!("{}.{}", context.kebab_name, suffix);
    let dest = format!("{}.ts", module);

    let mut generator = Generator::new(kind, location.root());
    if !location.is_bare() {
        generator = generator.mkdir_if_missing("");
    }
    generator = generator.render_template(template, context, Some(&dest));
    if !location.is_bare() {
        let dedupe = project.config().generate.dedupe_exports;
        generator =
            generator.update_file("index.ts", append_line(export_line(symbol, &module), dedupe));
    }
    generator
}

/// Locate a collection and build a single-file plan for it.
pub(crate) fn single_file_plan(
    kind: Kind,
    collection: &str,
    project: &Project<'_>,
    names: &Names,
    template: &str,
    suffix: &str,
    symbol: &str,
) -> Plan {
    let location = locate(project, collection);
    let context = TemplateContext::new(names, project.config());
    let generator = single_file(kind, project, &location, &context, template, suffix, symbol);
    Plan::new(kind, names.clone()).then(generator)
}
