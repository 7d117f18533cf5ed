use std::path::{Path, PathBuf};

use clap::Args;
use dialoguer::{Input, theme::ColorfulTheme};
use eyre::{Context, Result};
use hatchling_config::HatchToml;
use hatchling_core::{Names, OsFs};
use hatchling_generator::Kind;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// What to generate (sub-app, controller, entity, hook, service, rest-api)
    pub kind: Kind,

    /// Name of the module, in any case style (prompted for when omitted)
    pub name: Option<String>,

    /// Print the steps without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Path to hatch.toml (defaults to <dir>/hatch.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl GenerateCommand {
    pub fn run(&self, dir: &Path) -> Result<()> {
        let hatch_toml = match &self.config {
            Some(path) => HatchToml::open(path),
            None => HatchToml::discover(dir),
        }
        .unwrap_or_exit();
        if let Some(path) = hatch_toml.path() {
            tracing::info!(path = %path.display(), "loaded configuration");
        }

        let name = match &self.name {
            Some(name) => name.clone(),
            None => Self::prompt_name(self.kind)?,
        };
        let names = Names::new(&name).unwrap_or_exit();

        let report = ops::generate(
            &OsFs,
            dir,
            hatch_toml.into_config(),
            self.kind,
            &names,
            GenerateOptions {
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    fn prompt_name(kind: Kind) -> Result<String> {
        Input::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Name of the {}", kind))
            .interact_text()
            .wrap_err("Failed to read name")
    }
}
