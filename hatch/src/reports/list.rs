//! List command report data structures.

use hatchling_generator::Kind;
use serde::Serialize;

use super::output::{Output, Report};

/// Every generator with its templates.
#[derive(Debug, Serialize)]
pub struct ListReport {
    pub generators: Vec<GeneratorInfo>,
}

/// One generator kind.
#[derive(Debug, Serialize)]
pub struct GeneratorInfo {
    pub kind: Kind,
    pub description: &'static str,
    /// Template paths, relative to the kind's template directory.
    pub templates: Vec<&'static str>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Generators");
        for info in &self.generators {
            out.key_value_indented(info.kind.as_str(), info.description);
        }

        out.newline();
        out.section("Templates");
        for info in &self.generators {
            for template in &info.templates {
                out.list_item(&format!("{}/{}", info.kind, template));
            }
        }
    }
}
