//! Environment-derived defaults.
//!
//! Values are read from the process environment (populated from `.env` by
//! `dotenv` in main). Nothing is cached between calls.

/// Guest interface queried for the WSL subnet when `--cidr` is absent.
pub const DEFAULT_WSL_INTERFACE: &str = "eth0";

/// Name of the guest interface to inspect, `WSL_ROUTE_INTERFACE` override.
pub fn wsl_interface() -> String {
    std::env::var("WSL_ROUTE_INTERFACE").unwrap_or_else(|_| DEFAULT_WSL_INTERFACE.to_string())
}

/// Optional WSL distribution name, `WSL_ROUTE_DISTRO` override.
///
/// When unset the default distribution is used, as with a bare `wsl` call.
pub fn wsl_distro() -> Option<String> {
    std::env::var("WSL_ROUTE_DISTRO").ok().filter(|d| !d.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interface_falls_back_to_default() {
        // Env vars are process-global; only exercise the unset path.
        std::env::remove_var("WSL_ROUTE_INTERFACE");
        assert_eq!(wsl_interface(), DEFAULT_WSL_INTERFACE);
    }
}
