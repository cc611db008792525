// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! The `cidr` column type.

use crate::codec::{self, TextConfig, TextValue};
use crate::error::{InvalidLiteral, Rejection};
use crate::inet::Inet;
use crate::ip::{self, IpFamily, IpRules};
use ipnet::IpNet;
use std::fmt::{Debug, Display, Formatter};
use std::net::IpAddr;
use std::str::FromStr;

/// An ip network: an address and a prefix length, with no bits set right of the netmask.
///
/// Note that unlike [`Inet`], this type ensures that only network bits are set in the address.
/// Equality, ordering and hashing consider the family, the address bits and the prefix length;
/// never the text the value was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Cidr {
    address: IpAddr,
    prefix_len: u8,
}

impl Cidr {
    /// Constructor which validates the arguments provided.
    ///
    /// # Errors
    ///
    /// * Returns [`Rejection::PrefixLengthOutOfRange`] if `prefix_len` is too long for the family
    ///   of `address`.
    /// * Returns [`Rejection::HostBitsSet`] if `address` has bits set right of the netmask.
    #[tracing::instrument(level = "trace")]
    pub fn new(address: impl Into<IpAddr> + Debug, prefix_len: u8) -> Result<Cidr, Rejection> {
        let address = address.into();
        IpRules::NETWORK.check(address, prefix_len)?;
        Ok(Cidr {
            address,
            prefix_len,
        })
    }

    /// Build a [`Cidr`] from parts already known to be valid.
    pub(crate) const fn new_unchecked(address: IpAddr, prefix_len: u8) -> Cidr {
        Cidr {
            address,
            prefix_len,
        }
    }

    /// Returns the address of the network.
    #[must_use]
    pub const fn address(&self) -> IpAddr {
        self.address
    }

    /// Returns the prefix length of the network.
    #[must_use]
    pub const fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Returns the address family of the network.
    #[must_use]
    pub const fn family(&self) -> IpFamily {
        IpFamily::of(&self.address)
    }

    /// Returns the netmask of the network, e.g. `255.255.255.0` for a `/24`.
    #[must_use]
    pub fn netmask(&self) -> IpAddr {
        ip::netmask(self.address, self.prefix_len)
    }
}

impl TextValue for Cidr {
    const TYPE_NAME: &'static str = "cidr";

    #[tracing::instrument(level = "trace")]
    fn from_text(literal: &str) -> Result<Self, InvalidLiteral> {
        ip::parse(literal, IpRules::NETWORK)
            .map(|(address, prefix_len)| Cidr::new_unchecked(address, prefix_len))
            .map_err(|reason| InvalidLiteral::new(Self::TYPE_NAME, literal, reason))
    }

    fn write_text(&self, out: &mut impl std::fmt::Write, config: &TextConfig) -> std::fmt::Result {
        codec::write_ip(out, self.address, self.prefix_len, *config)
    }
}

impl FromStr for Cidr {
    type Err = InvalidLiteral;

    /// Attempt to parse a [`Cidr`] from a `str`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidLiteral`] if the literal is malformed, has an out of range component, or
    /// has bits set right of the netmask.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cidr::from_text(s)
    }
}

impl Display for Cidr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.write_text(f, &TextConfig::default())
    }
}

impl TryFrom<String> for Cidr {
    type Error = InvalidLiteral;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Cidr::from_text(&value)
    }
}

impl From<Cidr> for String {
    fn from(value: Cidr) -> Self {
        value.to_text()
    }
}

impl From<Cidr> for IpNet {
    fn from(value: Cidr) -> Self {
        IpNet::new(value.address, value.prefix_len)
            .unwrap_or_else(|e| unreachable!("{e}"))
    }
}

impl TryFrom<IpNet> for Cidr {
    type Error = Rejection;

    fn try_from(value: IpNet) -> Result<Self, Self::Error> {
        Cidr::new(value.addr(), value.prefix_len())
    }
}

impl From<Cidr> for Inet {
    fn from(value: Cidr) -> Self {
        Inet::new_unchecked(value.address, value.prefix_len)
    }
}

#[cfg(any(test, feature = "bolero"))]
mod contract {
    use crate::cidr::Cidr;
    use crate::inet::Inet;
    use bolero::{Driver, TypeGenerator};

    impl TypeGenerator for Cidr {
        fn generate<D: Driver>(driver: &mut D) -> Option<Self> {
            Some(driver.produce::<Inet>()?.network())
        }
    }
}
