use hatchling_core::Names;

use super::single_file;
use crate::{Kind, Plan, Project, TemplateContext, layout::locate};

const COLLECTION: &str = "controllers";

pub(super) fn plan(project: &Project<'_>, names: &Names) -> Plan {
    let location = locate(project, COLLECTION);
    let context = TemplateContext::new(names, project.config());
    let symbol = format!("{}Controller", names.pascal);

    let generator = single_file(
        Kind::Controller,
        project,
        &location,
        &context,
        "controller.ts",
        "controller",
        &symbol,
    )
    .render_template(
        "controller.spec.ts",
        &context,
        Some(&format!("{}.controller.spec.ts", names.kebab)),
    );

    Plan::new(Kind::Controller, names.clone()).then(generator)
}

#[cfg(test)]
mod tests {
    use hatchling_config::Config;
    use hatchling_core::MemoryFs;

    use super::*;

    #[test]
    fn test_plan_inside_app() {
        let fs = MemoryFs::new().with_dir("src/app");
        let project = Project::new(&fs, "", Config::default());
        let names = Names::new("api_key").unwrap();

        let steps: Vec<String> = plan(&project, &names).steps().map(|s| s.to_string()).collect();
        assert_eq!(
            steps,
            vec![
                "mkdir src/app/controllers",
                "render src/app/controllers/api-key.controller.ts <- controller/controller.ts",
                "update src/app/controllers/index.ts",
                "render src/app/controllers/api-key.controller.spec.ts <- controller/controller.spec.ts",
            ]
        );
    }
}
