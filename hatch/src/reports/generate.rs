//! Generate command report data structures.

use hatchling_generator::{Kind, Outcome, StepRecord};

use super::output::{Output, Report};

/// Report data from a generator run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Generator kind.
    pub kind: Kind,
    /// Kebab-case module name.
    pub name: String,
    /// Steps run, or steps that would run.
    pub result: GenerateResult,
}

/// Result of a generator run.
#[derive(Debug)]
pub enum GenerateResult {
    /// Steps were executed.
    Applied(Vec<StepRecord>),
    /// Dry-run: step descriptions, in order.
    Planned(Vec<String>),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerateResult::Applied(records) => self.render_applied(out, records),
            GenerateResult::Planned(steps) => self.render_planned(out, steps),
        }
    }
}

impl GenerateReport {
    fn render_applied(&self, out: &mut dyn Output, records: &[StepRecord]) {
        out.section(&format!("Generated {} '{}'", self.kind, self.name));
        for record in records {
            let text = format!("{} ({})", record.path.display(), record.outcome);
            match record.outcome {
                Outcome::Updated => out.changed_item(&text),
                outcome if outcome.is_change() => out.added_item(&text),
                _ => out.unchanged_item(&text),
            }
        }

        let changed = records.iter().filter(|r| r.outcome.is_change()).count();
        out.newline();
        out.preformatted(&format!(
            "{} of {} steps changed the project",
            changed,
            records.len()
        ));
    }

    fn render_planned(&self, out: &mut dyn Output, steps: &[String]) {
        out.section(&format!("Plan for {} '{}'", self.kind, self.name));
        for (i, step) in steps.iter().enumerate() {
            out.numbered_item(i + 1, step);
        }

        out.newline();
        out.preformatted(&format!("{} steps, nothing written (dry run)", steps.len()));
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::reports::output::BufferOutput;

    fn record(action: &'static str, path: &str, outcome: Outcome) -> StepRecord {
        StepRecord {
            action,
            path: PathBuf::from(path),
            outcome,
        }
    }

    #[test]
    fn test_render_applied() {
        let report = GenerateReport {
            kind: Kind::SubApp,
            name: "shop".to_string(),
            result: GenerateResult::Applied(vec![
                record("mkdir", "sub-apps", Outcome::DirExists),
                record("mkdir", "sub-apps/shop", Outcome::DirCreated),
                record("update", "sub-apps/index.ts", Outcome::Updated),
                record("copy", "sub-apps/shop/hooks/index.ts", Outcome::Skipped),
            ]),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "Generated sub-app 'shop':",
                "  = sub-apps (exists)",
                "  + sub-apps/shop (created)",
                "  ~ sub-apps/index.ts (updated)",
                "  = sub-apps/shop/hooks/index.ts (exists)",
                "",
                "2 of 4 steps changed the project",
            ]
        );
    }

    #[test]
    fn test_render_planned() {
        let report = GenerateReport {
            kind: Kind::Hook,
            name: "auth".to_string(),
            result: GenerateResult::Planned(vec!["mkdir hooks".to_string()]),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "Plan for hook 'auth':",
                "  1. mkdir hooks",
                "",
                "1 steps, nothing written (dry run)",
            ]
        );
    }
}
