//! List operation - available generators and templates.

use hatchling_generator::{BUILTIN, Kind};

use crate::reports::{GeneratorInfo, ListReport};

/// Describe every generator kind with its built-in templates.
pub fn list() -> ListReport {
    let generators = Kind::ALL
        .iter()
        .map(|&kind| GeneratorInfo {
            kind,
            description: kind.description(),
            templates: BUILTIN
                .iter()
                .filter(|(k, _, _)| *k == kind)
                .map(|(_, path, _)| *path)
                .collect(),
        })
        .collect();

    ListReport { generators }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_covers_every_kind() {
        let report = list();

        assert_eq!(report.generators.len(), Kind::ALL.len());
        assert!(report.generators.iter().all(|g| !g.templates.is_empty()));
    }

    #[test]
    fn test_list_json() {
        let report = list();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["generators"][0]["kind"], "sub-app");
        assert_eq!(json["generators"][5]["kind"], "rest-api");
        assert_eq!(
            json["generators"][5]["templates"],
            serde_json::json!(["entity.ts", "controller.ts"])
        );
    }
}
