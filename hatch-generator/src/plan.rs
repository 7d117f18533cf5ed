//! Ordered generators produced by a feature.

use eyre::Result;
use hatchling_core::Names;

use crate::{Generator, Kind, Project, Step, StepRecord};

/// Everything a feature will do, before anything is done.
#[derive(Debug)]
pub struct Plan {
    pub kind: Kind,
    pub names: Names,
    pub generators: Vec<Generator>,
}

impl Plan {
    pub fn new(kind: Kind, names: Names) -> Self {
        Self {
            kind,
            names,
            generators: Vec::new(),
        }
    }

    /// Append a generator; generators run in the order they were added.
    pub fn then(mut self, generator: Generator) -> Self {
        self.generators.push(generator);
        self
    }

    /// All steps across generators, in execution order.
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.generators.iter().flat_map(|g| g.steps())
    }

    /// Run every generator. Stops at the first failing step.
    pub fn run(&self, project: &Project<'_>) -> Result<Vec<StepRecord>> {
        let mut records = Vec::new();
        for generator in &self.generators {
            records.extend(generator.run(project)?);
        }
        Ok(records)
    }
}
