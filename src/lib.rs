//! Force traffic to a WSL subnet through a chosen Windows network adapter.
//!
//! The workflow resolves the guest subnet (explicit flag, live WSL query, or
//! prompt), resolves the egress adapter and gateway the same way, then
//! reconciles the host route table: delete any conflicting route, add the
//! desired one. `--dry-run` previews both commands; `--status` only checks
//! for an existing route.

pub mod adapters;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod wsl;

pub use error::AppError;

use adapters::resolve_adapter;
use cli::{Args, Prompt, StdinPrompt};
use cmd::{CommandRunner, ShellRunner};
use models::Cidr;
use routes::{ReconciliationPlan, RouteSpec};

/// Run the full workflow against the real host.
pub fn run(args: Args) -> Result<(), AppError> {
    run_with(&args, &ShellRunner, &mut StdinPrompt)
}

/// Run the workflow with injectable host access and prompting.
pub fn run_with(
    args: &Args,
    runner: &dyn CommandRunner,
    prompt: &mut dyn Prompt,
) -> Result<(), AppError> {
    // CIDR resolution chain: explicit flag -> live guest query -> prompt.
    // The winning string goes through the same parse regardless of source.
    let cidr_text = match args.cidr.clone().or_else(|| wsl::query_wsl_cidr(runner)) {
        Some(text) => text,
        None => prompt.ask(
            "Enter the WSL instance IP address in CIDR format (e.g., 172.16.0.0/12): ",
        )?,
    };
    let cidr: Cidr = cidr_text.parse()?;
    let subnet = cidr.network();
    let mask = cidr.netmask();
    log::info!("Resolved WSL subnet {subnet} mask {mask}");

    if args.status {
        routes::route_exists(runner, subnet)?;
        return Ok(());
    }

    let selection = resolve_adapter(runner, prompt, args.interface_index, args.gateway.as_deref())?;

    let spec = RouteSpec {
        subnet,
        mask,
        gateway: selection.gateway,
        interface_index: selection.index,
    };
    ReconciliationPlan::new(spec, args.dry_run).execute(runner)
}
