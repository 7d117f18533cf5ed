use std::io::{self, Write};

use clap::{Args, CommandFactory};
use eyre::Result;

use super::Cli;

#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    shell: clap_complete::Shell,
}

impl CompletionsCommand {
    pub fn run(&self) -> Result<()> {
        self.write(&mut io::stdout())
    }

    fn write(&self, out: &mut dyn Write) -> Result<()> {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(self.shell, &mut cmd, name, out);
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap_complete::Shell;

    use super::*;

    #[test]
    fn test_bash_completions_cover_subcommands() {
        let mut buf = Vec::new();
        CompletionsCommand { shell: Shell::Bash }
            .write(&mut buf)
            .unwrap();

        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("_hatch()"));
        assert!(script.contains("generate"));
        assert!(script.contains("completions"));
    }
}
