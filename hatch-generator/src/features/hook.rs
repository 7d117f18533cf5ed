use hatchling_core::Names;

use super::single_file_plan;
use crate::{Kind, Plan, Project};

pub(super) fn plan(project: &Project<'_>, names: &Names) -> Plan {
    single_file_plan(Kind::Hook, "hooks", project, names, "hook.ts", "hook", &names.pascal)
}
