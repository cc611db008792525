// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Netmask arithmetic.
//!
//! All functions assume `prefix_len` has already been checked against the family of the address.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

fn v4_mask(prefix_len: u8) -> u32 {
    // a shift by the full width (prefix length 0) must yield an empty mask
    (!0u32)
        .checked_shl(32 - u32::from(prefix_len))
        .unwrap_or(0)
}

fn v6_mask(prefix_len: u8) -> u128 {
    (!0u128)
        .checked_shl(128 - u32::from(prefix_len))
        .unwrap_or(0)
}

/// The bits of `address` to the right of a `prefix_len` bit netmask.
pub(crate) fn host_bits(address: IpAddr, prefix_len: u8) -> u128 {
    match address {
        IpAddr::V4(address) => u128::from(address.to_bits() & !v4_mask(prefix_len)),
        IpAddr::V6(address) => address.to_bits() & !v6_mask(prefix_len),
    }
}

/// The netmask of a `prefix_len` bit prefix, in the family of `address`.
pub(crate) fn netmask(address: IpAddr, prefix_len: u8) -> IpAddr {
    match address {
        IpAddr::V4(_) => IpAddr::V4(Ipv4Addr::from_bits(v4_mask(prefix_len))),
        IpAddr::V6(_) => IpAddr::V6(Ipv6Addr::from_bits(v6_mask(prefix_len))),
    }
}

/// `address` with every bit right of the netmask cleared.
pub(crate) fn truncate(address: IpAddr, prefix_len: u8) -> IpAddr {
    match address {
        IpAddr::V4(address) => {
            IpAddr::V4(Ipv4Addr::from_bits(address.to_bits() & v4_mask(prefix_len)))
        }
        IpAddr::V6(address) => {
            IpAddr::V6(Ipv6Addr::from_bits(address.to_bits() & v6_mask(prefix_len)))
        }
    }
}
