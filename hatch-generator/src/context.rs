//! Values available to templates.

use hatchling_config::Config;
use hatchling_core::Names;
use serde::Serialize;

/// The context a template is rendered with.
///
/// Field names are the placeholders templates use, e.g.
/// `{{ upper_first_camel_name }}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateContext {
    pub kebab_name: String,
    pub camel_name: String,
    pub upper_first_camel_name: String,
    /// Module decorators and HTTP responses are imported from
    pub framework: String,
    /// Module ORM symbols are imported from
    pub orm: String,
    /// Import path from a generated controller to its entity
    pub entity_import: String,
}

impl TemplateContext {
    pub fn new(names: &Names, config: &Config) -> Self {
        Self {
            kebab_name: names.kebab.clone(),
            camel_name: names.camel.clone(),
            upper_first_camel_name: names.pascal.clone(),
            framework: config.project.framework.clone(),
            orm: config.project.orm.clone(),
            entity_import: "../entities".to_string(),
        }
    }

    pub fn with_entity_import(mut self, entity_import: impl Into<String>) -> Self {
        self.entity_import = entity_import.into();
        self
    }
}
