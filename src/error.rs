//! Error types for wsl-route-config.

use thiserror::Error;

/// Errors surfaced by the route configuration workflow.
///
/// Discovery failures (`QueryFailed`) are recoverable by falling back to a
/// weaker source (explicit argument -> live query -> prompt); everything else
/// is terminal for the current invocation.
#[derive(Debug, Error)]
pub enum AppError {
    /// The CIDR string could not be parsed as `address/prefix`.
    #[error("Invalid CIDR format: {0}")]
    InvalidCidr(String),

    /// An external discovery call errored or returned no usable data.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Adapter index resolution exhausted every fallback.
    #[error("No network adapter selected")]
    NoAdapterSelected,

    /// Gateway resolution exhausted every fallback.
    #[error("No gateway available for the selected adapter")]
    NoGatewayAvailable,

    /// A route delete/add command did not succeed. Never retried; carries
    /// enough context for a human to re-run with corrected input.
    #[error("Route mutation failed: {0}")]
    RouteMutationFailed(String),

    /// The user interrupted an interactive prompt. Exits with status 0.
    #[error("Operation cancelled by user")]
    Cancelled,

    /// Terminal I/O error while prompting.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
