//! External command execution.
//!
//! Provides the [`CommandRunner`] capability trait and its process-backed
//! implementation [`ShellRunner`]. The reconciliation logic only ever talks
//! to the host (wsl, powershell, route) through this trait, so tests can
//! substitute a recording fake.

use colored::Colorize;
use regex::Regex;
use std::error::Error;
use std::process::Command;
use std::sync::OnceLock;

/// Regex for splitting command strings while preserving quoted substrings.
static COMMAND_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_command_regex() -> &'static Regex {
    COMMAND_REGEX.get_or_init(|| {
        Regex::new(r#"'([^']*)'\s*|\"([^\"]*)\"\s*|([^'\s]*)\s*"#).expect("Invalid Regex")
    })
}

/// Synchronous execution of a single external command.
///
/// Every call is a blocking, non-cancelable unit of work: the result is the
/// captured stdout on success, or an error carrying the captured stderr.
pub trait CommandRunner {
    fn run(&self, cmd: &str) -> Result<String, Box<dyn Error>>;
}

/// [`CommandRunner`] backed by real host processes.
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    /// Run a command and return its stdout.
    ///
    /// The command string is split on spaces, with quoted substrings
    /// preserved (powershell filter expressions contain spaces and braces).
    ///
    /// # Returns
    /// * `Ok(String)` - The stdout output on success
    /// * `Err` - If the command could not be started or exited non-zero
    fn run(&self, cmd: &str) -> Result<String, Box<dyn Error>> {
        log::debug!("run({cmd})", cmd = cmd.on_blue());

        let cmds: Vec<&str> = split_and_strip(cmd);
        log::trace!("split cmds={:?}", cmds);

        if cmds.is_empty() || cmds[0].is_empty() {
            return Err(format!("Empty command: {cmd:?}").into());
        }

        // Build command and add args
        let mut command = Command::new(cmds[0]);
        for arg in cmds.iter().skip(1) {
            command.arg(arg);
        }

        let output = command.output().map_err(|e| {
            log::error!("Command execution failed: {}", e);
            format!("Failed to execute command: {}", e)
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            log::trace!(
                "code={code:?}, status={status}\nstderr=\n{stderr}",
                code = output.status.code(),
                status = output.status,
                stderr = stderr.red()
            );
            log::warn!(
                "{failed} to run {cmd}",
                failed = "failed".on_red(),
                cmd = cmd.on_blue()
            );
            return Err(format!("ERROR running: {stderr}").into());
        }

        log::debug!("Success cmd: {cmd}");
        log::debug!("Success output.stdout.len(): {}", output.stdout.len());

        let stdout =
            String::from_utf8(output.stdout).map_err(|e| format!("Invalid UTF-8: {}", e))?;

        Ok(stdout)
    }
}

/// Split a command string on spaces, preserving quoted substrings.
fn split_and_strip(input: &str) -> Vec<&str> {
    get_command_regex()
        .find_iter(input)
        .map(|m| m.as_str().trim().trim_matches('\'').trim_matches('"'))
        .collect()
}
