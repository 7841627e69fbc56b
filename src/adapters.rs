//! Host network adapter enumeration and selection.
//!
//! The enumeration table is shown to the user as raw text and never parsed
//! into structured records; the only structured value produced here is the
//! fully resolved [`AdapterSelection`].

use crate::cli::Prompt;
use crate::cmd::CommandRunner;
use crate::error::AppError;
use colored::Colorize;
use std::net::Ipv4Addr;

/// Powershell expression listing alias, index, IPv4 address and gateway next-hop.
const LIST_ADAPTERS_CMD: &str = "powershell -Command \"Get-NetIPConfiguration | Select-Object InterfaceAlias, InterfaceIndex, IPv4Address, @{Name='IPv4DefaultGateway'; Expression={$_.IPv4DefaultGateway.NextHop}}\"";

/// The resolved egress adapter: index plus gateway, both concrete.
///
/// Route mutation never starts from a partially resolved pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdapterSelection {
    pub index: u32,
    pub gateway: Ipv4Addr,
}

/// Print all host adapters with alias, index, IPv4 address and default gateway.
///
/// Display-only: the raw tabular text is passed through untouched.
pub fn print_adapters(runner: &dyn CommandRunner) {
    match runner.run(LIST_ADAPTERS_CMD) {
        Ok(output) => {
            println!("{}", "Available Network Interfaces:".bold());
            println!("{output}");
        }
        Err(e) => {
            log::warn!("Failed to retrieve network adapters: {e}");
        }
    }
}

/// Retrieve the default gateway for the NIC with the given InterfaceIndex.
///
/// Returns `None` if the adapter has no configured gateway, the output is
/// not an IPv4 address, or the query itself fails.
pub fn gateway_for_index(runner: &dyn CommandRunner, interface_index: u32) -> Option<Ipv4Addr> {
    let cmd = format!(
        "powershell -Command \"Get-NetIPConfiguration | Where-Object {{ $_.InterfaceIndex -eq {interface_index} }} | Select-Object -ExpandProperty IPv4DefaultGateway | Select-Object -ExpandProperty NextHop\""
    );
    let output = match runner.run(&cmd) {
        Ok(output) => output,
        Err(e) => {
            log::warn!("Failed to retrieve gateway for interface index '{interface_index}': {e}");
            return None;
        }
    };

    let gateway = output.trim();
    if gateway.is_empty() {
        log::warn!("No gateway found for interface index '{interface_index}'.");
        return None;
    }
    match gateway.parse() {
        Ok(addr) => Some(addr),
        Err(_) => {
            log::warn!("Gateway for interface index '{interface_index}' is not an IPv4 address: {gateway:?}");
            None
        }
    }
}

/// Resolve the target adapter's index and gateway.
///
/// Index: explicit argument, else enumerate adapters and prompt.
/// Gateway: explicit argument, else query by index, else prompt.
/// Fails with [`AppError::NoAdapterSelected`] / [`AppError::NoGatewayAvailable`]
/// when a chain exhausts without a concrete value.
pub fn resolve_adapter(
    runner: &dyn CommandRunner,
    prompt: &mut dyn Prompt,
    explicit_index: Option<u32>,
    explicit_gateway: Option<&str>,
) -> Result<AdapterSelection, AppError> {
    let index = match explicit_index {
        Some(index) => index,
        None => {
            print_adapters(runner);
            let answer = prompt.ask("Enter the InterfaceIndex of the desired NIC: ")?;
            answer.parse().map_err(|_| {
                log::warn!("Not a usable InterfaceIndex: {answer:?}");
                AppError::NoAdapterSelected
            })?
        }
    };

    let gateway = explicit_gateway
        .and_then(|g| parse_explicit_gateway(g))
        .or_else(|| gateway_for_index(runner, index));
    let gateway = match gateway {
        Some(gateway) => gateway,
        None => {
            println!("Unable to determine the gateway. Please provide it manually.");
            let answer = prompt.ask("Enter the gateway IP address of the desired NIC: ")?;
            answer.parse().map_err(|_| {
                log::warn!("Not a usable gateway address: {answer:?}");
                AppError::NoGatewayAvailable
            })?
        }
    };

    Ok(AdapterSelection { index, gateway })
}

fn parse_explicit_gateway(gateway: &str) -> Option<Ipv4Addr> {
    match gateway.trim().parse() {
        Ok(addr) => Some(addr),
        Err(_) => {
            log::warn!("Ignoring invalid --gateway value: {gateway:?}");
            None
        }
    }
}
