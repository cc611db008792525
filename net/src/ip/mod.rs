// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Ip literal parsing shared by [`Cidr`] and [`Inet`].
//!
//! Both column types accept the same literal grammar.  They differ only in the rules applied to
//! the parsed address and prefix length, which are captured by [`IpRules`].
//!
//! [`Cidr`]: crate::Cidr
//! [`Inet`]: crate::Inet

mod mask;
mod v4;
mod v6;

use crate::error::Rejection;
use crate::literal::{self, Literal};
use std::fmt::{Display, Formatter};
use std::net::IpAddr;

pub(crate) use mask::{host_bits, netmask, truncate};

/// The version of the internet protocol an address belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IpFamily {
    /// 32-bit addresses
    V4,
    /// 128-bit addresses
    V6,
}

impl IpFamily {
    /// The number of bits in an address of this family, which is also its longest legal prefix
    /// length.
    #[must_use]
    pub const fn max_prefix_len(self) -> u8 {
        match self {
            IpFamily::V4 => 32,
            IpFamily::V6 => 128,
        }
    }

    /// The family of `address`.
    #[must_use]
    pub const fn of(address: &IpAddr) -> Self {
        match address {
            IpAddr::V4(_) => IpFamily::V4,
            IpAddr::V6(_) => IpFamily::V6,
        }
    }

    /// Check that `prefix_len` is legal for this family.
    pub(crate) fn check_prefix_len(self, prefix_len: u8) -> Result<(), Rejection> {
        if prefix_len > self.max_prefix_len() {
            return Err(Rejection::PrefixLengthOutOfRange {
                value: prefix_len.to_string(),
                max: self.max_prefix_len(),
            });
        }
        Ok(())
    }
}

impl Display for IpFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            IpFamily::V4 => write!(f, "ipv4"),
            IpFamily::V6 => write!(f, "ipv6"),
        }
    }
}

/// Whether bits to the right of the netmask may be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HostBits {
    MustBeZero,
    Free,
}

/// Per column type validation applied on top of the literal grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IpRules {
    pub(crate) host_bits: HostBits,
    /// Fewest dotted-decimal groups an ipv4 literal may be written with.
    pub(crate) min_ipv4_groups: usize,
}

impl IpRules {
    /// `cidr`: abbreviated ipv4 allowed, no bits right of the netmask.
    pub(crate) const NETWORK: IpRules = IpRules {
        host_bits: HostBits::MustBeZero,
        min_ipv4_groups: 1,
    };

    /// `inet`: full ipv4 address required, host bits free.
    pub(crate) const HOST: IpRules = IpRules {
        host_bits: HostBits::Free,
        min_ipv4_groups: 4,
    };

    /// Check a candidate (address, prefix length) pair against these rules.
    pub(crate) fn check(self, address: IpAddr, prefix_len: u8) -> Result<(), Rejection> {
        IpFamily::of(&address).check_prefix_len(prefix_len)?;
        if self.host_bits == HostBits::MustBeZero && host_bits(address, prefix_len) != 0 {
            return Err(Rejection::HostBitsSet {
                address,
                prefix_len,
            });
        }
        Ok(())
    }
}

/// Parse an ipv4 or ipv6 literal with an optional prefix length.
///
/// Literals containing a `:` are ipv6, everything else is ipv4.
pub(crate) fn parse(text: &str, rules: IpRules) -> Result<(IpAddr, u8), Rejection> {
    let literal = Literal::split(text)?;
    let (address, default_prefix_len) = if literal.address.contains(':') {
        let address = v6::parse(literal.address)?;
        (IpAddr::V6(address), IpFamily::V6.max_prefix_len())
    } else {
        let groups = v4::parse(literal.address)?;
        if groups.written < rules.min_ipv4_groups {
            return Err(Rejection::TooFewGroups {
                expected: rules.min_ipv4_groups,
                found: groups.written,
            });
        }
        (IpAddr::V4(groups.address()), groups.default_prefix_len())
    };
    let prefix_len = match literal.prefix_len {
        Some(text) => literal::parse_prefix_len(text, IpFamily::of(&address).max_prefix_len())?,
        None => default_prefix_len,
    };
    rules.check(address, prefix_len)?;
    Ok((address, prefix_len))
}
