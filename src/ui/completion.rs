//! Shell completion generation for urlsift

use clap::Command;
use clap_complete::{Generator, generate};
use std::io::Write;

/// Generate shell completions for the given shell to stdout
pub fn print_completions<G: Generator>(generator: G, app: &mut Command) {
    write_completions(generator, app, &mut std::io::stdout());
}

/// Generate shell completions into any writer
pub fn write_completions<G: Generator>(generator: G, app: &mut Command, out: &mut dyn Write) {
    let name = app.get_name().to_string();
    generate(generator, app, name, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::cli::Cli;
    use clap::CommandFactory;
    use clap_complete::Shell;

    fn completions(shell: Shell) -> String {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        write_completions(shell, &mut cmd, &mut buf);
        String::from_utf8(buf).unwrap_or_default()
    }

    #[test]
    fn test_completions_bash() {
        let script = completions(Shell::Bash);
        assert!(!script.is_empty(), "Bash completion should generate output");
        assert!(script.contains("--segment-rule"));
    }

    #[test]
    fn test_completions_zsh() {
        assert!(!completions(Shell::Zsh).is_empty());
    }

    #[test]
    fn test_completions_fish() {
        assert!(completions(Shell::Fish).contains("distinct-query"));
    }
}
