//! Domain models for wsl-route-config.
//!
//! - [`Cidr`] - IPv4 network in CIDR notation with subnet mask derivation

mod cidr;

// Re-export public types
pub use cidr::{Cidr, MAX_PREFIX};
