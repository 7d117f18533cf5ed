use std::path::{Component, Path};

use hatchling_core::Names;

use super::single_file;
use crate::{Kind, Plan, Project, TemplateContext, layout::locate};

pub(super) fn plan(project: &Project<'_>, names: &Names) -> Plan {
    let entities = locate(project, "entities");
    let controllers = locate(project, "controllers");

    // A bare entity has no barrel, so import the file itself.
    let entity_target = if entities.is_bare() {
        entities.root().join(format!("{}.entity", names.kebab))
    } else {
        entities.root().to_path_buf()
    };
    let context = TemplateContext::new(names, project.config())
        .with_entity_import(relative_import(controllers.root(), &entity_target));

    let controller = format!("{}Controller", names.pascal);
    Plan::new(Kind::RestApi, names.clone())
        .then(single_file(
            Kind::RestApi,
            project,
            &entities,
            &context,
            "entity.ts",
            "entity",
            &names.pascal,
        ))
        .then(single_file(
            Kind::RestApi,
            project,
            &controllers,
            &context,
            "controller.ts",
            "controller",
            &controller,
        ))
}

/// ES module specifier for `to`, as seen from a file in directory `from`.
fn relative_import(from: &Path, to: &Path) -> String {
    let from: Vec<Component<'_>> = from.components().collect();
    let to: Vec<Component<'_>> = to.components().collect();
    let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();

    let mut parts: Vec<String> = vec!["..".to_string(); from.len() - common];
    parts.extend(
        to[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );

    let joined = parts.join("/");
    if joined.is_empty() {
        ".".to_string()
    } else if joined.starts_with('.') {
        joined
    } else {
        format!("./{}", joined)
    }
}
