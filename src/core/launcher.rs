//! Launching Jekyll in a terminal window and opening files with the OS.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use thiserror::Error;

/// External Jekyll invocation, always run through Bundler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JekyllCommand {
    Build,
    Serve,
}

impl JekyllCommand {
    /// Subcommand passed to `bundle exec jekyll`.
    pub fn subcommand(&self) -> &'static str {
        match self {
            JekyllCommand::Build => "build",
            JekyllCommand::Serve => "serve",
        }
    }

    /// Full command line for a terminal to run.
    pub fn shell_line(&self) -> String {
        format!("bundle exec jekyll {}", self.subcommand())
    }
}

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("no terminal emulator found (tried {tried})")]
    NoTerminal { tried: String },
    #[error("failed to launch terminal: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Run a Jekyll command in a new terminal window rooted at the site.
///
/// Fire-and-forget: the terminal stays open so build output remains
/// readable, and the command's exit status is never collected.
pub fn run_in_terminal(root: &Path, command: JekyllCommand) -> Result<(), LaunchError> {
    let line = command.shell_line();

    #[cfg(target_os = "windows")]
    {
        // `start` opens a fresh console; `/K` keeps it open after jekyll exits.
        Command::new("cmd")
            .args(["/C", "start", "cmd", "/K", line.as_str()])
            .current_dir(root)
            .spawn()?;
        tracing::info!("Launched `{}` in {}", line, root.display());
        Ok(())
    }

    #[cfg(target_os = "macos")]
    {
        let script = format!(
            "tell application \"Terminal\" to do script \"cd '{}' && {}\"",
            root.display(),
            line
        );
        Command::new("osascript").args(["-e", script.as_str()]).spawn()?;
        tracing::info!("Launched `{}` in {}", line, root.display());
        Ok(())
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        // No standard terminal on Linux; try the common ones in order.
        let candidates: [(&str, &[&str]); 4] = [
            ("x-terminal-emulator", &["-e"]),
            ("gnome-terminal", &["--"]),
            ("konsole", &["-e"]),
            ("xterm", &["-e"]),
        ];
        let script = format!("cd '{}' && {}; exec bash", root.display(), line);

        for (terminal, separator) in candidates {
            let spawned = Command::new(terminal)
                .args(separator)
                .args(["bash", "-c", script.as_str()])
                .spawn();
            if spawned.is_ok() {
                tracing::info!("Launched `{}` via {} in {}", line, terminal, root.display());
                return Ok(());
            }
        }

        let tried = candidates
            .iter()
            .map(|(terminal, _)| *terminal)
            .collect::<Vec<_>>()
            .join(", ");
        Err(LaunchError::NoTerminal { tried })
    }
}

/// Open a file or folder with the operating system's default handler.
pub fn open_path(path: &Path) -> Result<()> {
    open::that(path).with_context(|| format!("Failed to open {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_go_through_bundler() {
        assert_eq!(JekyllCommand::Build.shell_line(), "bundle exec jekyll build");
        assert_eq!(JekyllCommand::Serve.shell_line(), "bundle exec jekyll serve");
    }

    #[test]
    fn test_no_terminal_error_names_candidates() {
        let err = LaunchError::NoTerminal {
            tried: "x-terminal-emulator, xterm".into(),
        };
        assert_eq!(
            err.to_string(),
            "no terminal emulator found (tried x-terminal-emulator, xterm)"
        );
    }
}
