//! WSL guest interface inspection.
//!
//! Queries the guest's live IPv4 address in CIDR notation by running the
//! `ip` command inside WSL. Any failure is recoverable: the caller falls
//! back to prompting, so this module returns `None` rather than an error.

use crate::cmd::CommandRunner;
use crate::config;

/// Get the WSL guest interface address in CIDR notation (e.g. `172.16.0.1/12`).
///
/// Runs `wsl [-d <distro>] ip -4 addr show <iface>` and extracts the second
/// whitespace-separated token of the first line containing `inet`.
///
/// Returns `None` (with a logged warning) if the command fails or no `inet`
/// line is present.
pub fn query_wsl_cidr(runner: &dyn CommandRunner) -> Option<String> {
    let iface = config::wsl_interface();
    let cmd = match config::wsl_distro() {
        Some(distro) => format!("wsl -d {distro} ip -4 addr show {iface}"),
        None => format!("wsl ip -4 addr show {iface}"),
    };

    let output = match runner.run(&cmd) {
        Ok(output) => output,
        Err(e) => {
            log::warn!("Error retrieving WSL IP address in CIDR format: {e}");
            return None;
        }
    };

    match parse_inet_cidr(&output) {
        Some(cidr) => {
            log::info!("WSL {iface} address: {cidr}");
            Some(cidr)
        }
        None => {
            log::warn!("No IP address found for {iface}.");
            None
        }
    }
}

/// Extract `address/prefix` from `ip -4 addr show` output.
fn parse_inet_cidr(output: &str) -> Option<String> {
    for line in output.lines() {
        if line.contains("inet") {
            // e.g. "    inet 172.16.0.1/12 brd 172.31.255.255 scope global eth0"
            return line
                .split_whitespace()
                .nth(1)
                .map(|cidr| cidr.to_string());
        }
    }
    None
}
