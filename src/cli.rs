//! Command-line surface: argument parsing and interactive prompting.

use crate::error::AppError;
use clap::Parser;
use std::io::{self, Write};

/// Configure the Windows host route for a WSL subnet to use a specific NIC.
#[derive(Parser, Debug, Default)]
#[command(name = "wsl-route-config")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// WSL instance IP address in CIDR format (e.g., 172.16.0.0/12)
    #[arg(long)]
    pub cidr: Option<String>,

    /// Gateway IP address of the desired NIC
    #[arg(long)]
    pub gateway: Option<String>,

    /// InterfaceIndex of the desired NIC
    #[arg(long)]
    pub interface_index: Option<u32>,

    /// Print commands without executing them
    #[arg(long)]
    pub dry_run: bool,

    /// Check if the route to the WSL subnet exists, then exit
    #[arg(long)]
    pub status: bool,
}

/// A source of interactive answers.
///
/// Abstracted so resolution chains can be exercised in tests with queued
/// answers instead of a terminal.
pub trait Prompt {
    /// Ask the user for a value. `Err(Cancelled)` when input is closed.
    fn ask(&mut self, message: &str) -> Result<String, AppError>;
}

/// [`Prompt`] reading from stdin.
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&mut self, message: &str) -> Result<String, AppError> {
        print!("{message}");
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = io::stdin().read_line(&mut line).map_err(|e| {
            if e.kind() == io::ErrorKind::Interrupted {
                AppError::Cancelled
            } else {
                AppError::Io(e)
            }
        })?;
        if bytes == 0 {
            // EOF - stdin closed mid-prompt
            return Err(AppError::Cancelled);
        }
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_parse_all_flags() {
        let args = Args::parse_from([
            "wsl-route-config",
            "--cidr",
            "172.16.0.0/12",
            "--gateway",
            "192.168.1.1",
            "--interface-index",
            "7",
            "--dry-run",
        ]);
        assert_eq!(args.cidr.as_deref(), Some("172.16.0.0/12"));
        assert_eq!(args.gateway.as_deref(), Some("192.168.1.1"));
        assert_eq!(args.interface_index, Some(7));
        assert!(args.dry_run);
        assert!(!args.status);
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["wsl-route-config"]);
        assert!(args.cidr.is_none());
        assert!(args.gateway.is_none());
        assert!(args.interface_index.is_none());
        assert!(!args.dry_run);
        assert!(!args.status);
    }

    #[test]
    fn test_args_debug_assert() {
        Args::command().debug_assert();
    }
}
