mod completions;
mod generate;
mod list;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use hatchling_core::NameError;
use list::ListCommand;

/// Extension trait for exiting on diagnostics with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for hatchling_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for std::result::Result<T, NameError> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "hatch")]
#[command(version)]
#[command(about = "Scaffold sub-apps, controllers, entities and more for TypeScript projects")]
pub(crate) struct Cli {
    /// Project directory (defaults to the current directory)
    #[arg(short = 'C', long = "dir", global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(&self.dir),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a sub-app, controller, entity, hook, service or REST API
    #[command(visible_alias = "g")]
    Generate(GenerateCommand),

    /// List available generators and their templates
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use hatchling_generator::Kind;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_alias() {
        let cli = Cli::try_parse_from(["hatch", "-vv", "g", "sub-app", "shop", "--dry-run"]).unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.dir, PathBuf::from("."));
        match cli.command {
            Commands::Generate(cmd) => {
                assert_eq!(cmd.kind, Kind::SubApp);
                assert_eq!(cmd.name.as_deref(), Some("shop"));
                assert!(cmd.dry_run);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_parse_global_dir_after_subcommand() {
        let cli = Cli::try_parse_from(["hatch", "generate", "entity", "user", "-C", "web"]).unwrap();
        assert_eq!(cli.dir, PathBuf::from("web"));
    }

    #[test]
    fn test_parse_unknown_kind() {
        let err = Cli::try_parse_from(["hatch", "generate", "widget", "x"])
            .err()
            .expect("unknown kind should be rejected");
        assert!(err.to_string().contains("unknown generator 'widget'"));
    }
}
