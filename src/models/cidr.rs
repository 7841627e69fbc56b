//! IPv4 CIDR notation utilities.
//!
//! Provides the [`Cidr`] struct for representing an IPv4 network as
//! address plus prefix length, with derivation of the network address
//! and the dotted-quad subnet mask.

use crate::error::AppError;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum prefix length for an IPv4 network (32 bits).
pub const MAX_PREFIX: u8 = 32;

/// An IPv4 network in CIDR notation.
///
/// Parsing is non-strict: host bits are permitted in the input address and
/// masked off by [`Cidr::network`]. The prefix length is validated once at
/// parse time, so the derivations below are infallible.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    pub addr: Ipv4Addr,
    pub prefix: u8,
}

impl Cidr {
    /// The network's base address, host bits zeroed.
    ///
    /// # Examples
    /// ```
    /// use wsl_route_config::models::Cidr;
    /// let cidr: Cidr = "172.16.5.37/12".parse().unwrap();
    /// assert_eq!(cidr.network().to_string(), "172.16.0.0");
    /// ```
    pub fn network(&self) -> Ipv4Addr {
        let right_len = u32::from(MAX_PREFIX - self.prefix);
        let bits = u32::from(self.addr) as u64;
        let network_bits = (bits >> right_len) << right_len;
        Ipv4Addr::from(network_bits as u32)
    }

    /// The subnet mask in dotted-quad form, expanded from the prefix length.
    ///
    /// # Examples
    /// ```
    /// use wsl_route_config::models::Cidr;
    /// let cidr: Cidr = "172.16.0.0/12".parse().unwrap();
    /// assert_eq!(cidr.netmask().to_string(), "255.240.0.0");
    /// ```
    pub fn netmask(&self) -> Ipv4Addr {
        let right_len = u32::from(MAX_PREFIX - self.prefix);
        let all_bits = u32::MAX as u64;
        let mask = (all_bits >> right_len) << right_len;
        Ipv4Addr::from(mask as u32)
    }

    /// The canonical form: network address with the same prefix length.
    pub fn normalized(&self) -> Cidr {
        Cidr {
            addr: self.network(),
            prefix: self.prefix,
        }
    }
}

impl FromStr for Cidr {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Cidr, AppError> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 {
            return Err(AppError::InvalidCidr(s.to_string()));
        }
        let addr: Ipv4Addr = parts[0]
            .parse()
            .map_err(|_| AppError::InvalidCidr(s.to_string()))?;
        let prefix: u8 = parts[1]
            .parse()
            .map_err(|_| AppError::InvalidCidr(s.to_string()))?;
        if prefix > MAX_PREFIX {
            return Err(AppError::InvalidCidr(s.to_string()));
        }
        Ok(Cidr { addr, prefix })
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_netmask_expansion() {
        let masks = [
            ("10.0.0.0/0", "0.0.0.0"),
            ("10.0.0.0/8", "255.0.0.0"),
            ("172.16.0.0/12", "255.240.0.0"),
            ("192.168.0.0/16", "255.255.0.0"),
            ("192.168.1.0/24", "255.255.255.0"),
            ("192.168.1.1/32", "255.255.255.255"),
        ];
        for (cidr, expected) in masks {
            let parsed: Cidr = cidr.parse().unwrap();
            assert_eq!(parsed.netmask().to_string(), expected, "mask for {cidr}");
        }
    }

    #[test]
    fn test_network_masks_host_bits() {
        let cidr: Cidr = "172.16.5.37/12".parse().unwrap();
        assert_eq!(cidr.network(), Ipv4Addr::new(172, 16, 0, 0));
        assert_eq!(cidr.normalized().to_string(), "172.16.0.0/12");

        let cidr: Cidr = "192.168.1.42/24".parse().unwrap();
        assert_eq!(cidr.network(), Ipv4Addr::new(192, 168, 1, 0));

        // already canonical stays as-is
        let cidr: Cidr = "10.0.0.0/8".parse().unwrap();
        assert_eq!(cidr.normalized(), cidr);
    }

    #[test]
    fn test_network_edge_prefixes() {
        let cidr: Cidr = "203.0.113.7/32".parse().unwrap();
        assert_eq!(cidr.network(), Ipv4Addr::new(203, 0, 113, 7));

        let cidr: Cidr = "203.0.113.7/0".parse().unwrap();
        assert_eq!(cidr.network(), Ipv4Addr::new(0, 0, 0, 0));
    }

    #[test]
    fn test_parse_invalid() {
        for bad in [
            "not-a-cidr",
            "10.0.0.0/33",
            "10.0.0.0",
            "10.0.0/8",
            "10.0.0.0/8/2",
            "10.0.0.0/",
            "/12",
            "",
        ] {
            let result = bad.parse::<Cidr>();
            assert!(
                matches!(result, Err(AppError::InvalidCidr(_))),
                "expected InvalidCidr for {bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let cidr: Cidr = " 172.16.0.0/12 ".parse().unwrap();
        assert_eq!(cidr.to_string(), "172.16.0.0/12");
    }

    #[test]
    fn test_display_roundtrip() {
        let cidr: Cidr = "192.168.1.0/24".parse().unwrap();
        assert_eq!(cidr.to_string().parse::<Cidr>().unwrap(), cidr);
    }
}
