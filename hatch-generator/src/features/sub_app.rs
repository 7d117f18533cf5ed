use hatchling_core::Names;

use super::export_line;
use crate::{Generator, Kind, Plan, Project, TemplateContext, layout::locate, step::append_line};

const COLLECTION: &str = "sub-apps";

/// Subdirectories seeded with an empty barrel.
const BARRELS: [&str; 3] = ["hooks", "entities", "services"];

pub(super) fn plan(project: &Project<'_>, names: &Names) -> Plan {
    let location = locate(project, COLLECTION);
    let context = TemplateContext::new(names, project.config());
    let controller = format!("{}Controller", names.pascal);

    // Register the sub-app in the collection barrel.
    let mut registration = Generator::new(Kind::SubApp, location.root());
    if !location.is_bare() {
        registration = registration.mkdir_if_missing("");
    }
    registration = registration.mkdir_if_missing(&names.kebab);
    if !location.is_bare() {
        let dedupe = project.config().generate.dedupe_exports;
        registration = registration.update_file(
            "index.ts",
            append_line(export_line(&controller, &names.kebab), dedupe),
        );
    }

    let mut scaffold = Generator::new(Kind::SubApp, location.root().join(&names.kebab))
        .render_template("index.ts", &context, None)
        .render_template(
            "controller.ts",
            &context,
            Some(&format!("{}.controller.ts", names.kebab)),
        )
        .mkdir_if_missing("controllers")
        .copy_file_from_templates("controllers/index.ts")
        .mkdir_if_missing("controllers/templates");
    for dir in BARRELS {
        scaffold = scaffold
            .mkdir_if_missing(dir)
            .copy_file_from_templates(&format!("{}/index.ts", dir));
    }

    Plan::new(Kind::SubApp, names.clone())
        .then(registration)
        .then(scaffold)
}
