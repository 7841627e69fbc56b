//! Host route table inspection and reconciliation.
//!
//! The reconciler replaces whatever route the host holds for the WSL subnet
//! with the desired one, strictly delete-before-add so a conflicting entry
//! never coexists with the new route. Dry-run renders the exact commands in
//! the same order without touching the runner.

use crate::cmd::CommandRunner;
use crate::error::AppError;
use colored::Colorize;
use std::net::Ipv4Addr;

/// A single static route entry, fully determined. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteSpec {
    pub subnet: Ipv4Addr,
    pub mask: Ipv4Addr,
    pub gateway: Ipv4Addr,
    pub interface_index: u32,
}

impl std::fmt::Display for RouteSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} MASK {} {} IF {}",
            self.subnet, self.mask, self.gateway, self.interface_index
        )
    }
}

/// Check whether a route for the given subnet exists in the host table.
///
/// Scans the raw `route print` output for a line containing the subnet's
/// textual network address. Presence check only: the matched line's mask and
/// gateway are not validated, and overlapping subnets sharing a leading
/// address string can false-positive. This matches the behavior existing
/// scripts key off; tightening it would change observable output.
pub fn route_exists(runner: &dyn CommandRunner, subnet: Ipv4Addr) -> Result<bool, AppError> {
    let output = runner
        .run("route print")
        .map_err(|e| AppError::QueryFailed(format!("Failed to retrieve route information: {e}")))?;

    let needle = subnet.to_string();
    for line in output.lines() {
        if line.contains(&needle) {
            println!("Route exists for {}:", needle.green());
            println!("{}", line.trim());
            return Ok(true);
        }
    }
    println!("No route found for {needle}.");
    Ok(false)
}

/// The ordered pair of actions reconciling one subnet's route, plus the
/// dry-run flag deciding whether they execute or are merely printed.
#[derive(Debug, Clone)]
pub struct ReconciliationPlan {
    spec: RouteSpec,
    dry_run: bool,
}

impl ReconciliationPlan {
    pub fn new(spec: RouteSpec, dry_run: bool) -> Self {
        Self { spec, dry_run }
    }

    /// `route delete <subnet>` - the subnet alone identifies the entry.
    pub fn delete_command(&self) -> String {
        format!("route delete {}", self.spec.subnet)
    }

    /// `route add <subnet> MASK <mask> <gateway> IF <index>`.
    pub fn add_command(&self) -> String {
        format!("route add {}", self.spec)
    }

    /// The lines a dry run emits, in execution order.
    pub fn preview_lines(&self) -> [String; 2] {
        [
            format!("[Dry Run] Command to delete route: {}", self.delete_command()),
            format!("[Dry Run] Command to add route: {}", self.add_command()),
        ]
    }

    /// Apply the plan: delete any existing route for the subnet, then add
    /// the desired one.
    ///
    /// Delete failure is non-fatal - "nothing to delete" is the normal case
    /// and is only logged. Add failure is terminal for this invocation:
    /// surfaced as [`AppError::RouteMutationFailed`] with the full spec, no
    /// rollback, no retry. Re-running is always safe because deletion is
    /// idempotent.
    pub fn execute(&self, runner: &dyn CommandRunner) -> Result<(), AppError> {
        if self.dry_run {
            for line in self.preview_lines() {
                println!("{line}");
            }
            return Ok(());
        }

        match runner.run(&self.delete_command()) {
            Ok(output) => {
                println!("Deleted existing route for {}:\n{output}", self.spec.subnet);
            }
            Err(e) => {
                log::warn!(
                    "No existing route found for {} or failed to delete: {e}",
                    self.spec.subnet
                );
            }
        }

        match runner.run(&self.add_command()) {
            Ok(output) => {
                println!("Static route added successfully:\n{output}");
                Ok(())
            }
            Err(e) => Err(AppError::RouteMutationFailed(format!(
                "Failed to add static route {}: {e}",
                self.spec
            ))),
        }
    }
}
