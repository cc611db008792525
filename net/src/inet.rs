// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! The `inet` column type.

use crate::cidr::Cidr;
use crate::codec::{self, TextConfig, TextValue};
use crate::error::{InvalidLiteral, Rejection};
use crate::ip::{self, IpFamily, IpRules};
use ipnet::IpNet;
use std::fmt::{Debug, Display, Formatter};
use std::net::IpAddr;
use std::str::FromStr;
use tracing::debug;

/// An ip host address, optionally within a network described by its prefix length.
///
/// Unlike [`Cidr`], bits right of the netmask are free: `192.168.1.10/24` is the host
/// `192.168.1.10` on the network `192.168.1.0/24`.
/// A literal without a prefix length denotes a single host (`/32` or `/128`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Inet {
    address: IpAddr,
    prefix_len: u8,
}

impl Inet {
    /// Constructor which validates the prefix length.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::PrefixLengthOutOfRange`] if `prefix_len` is too long for the family
    /// of `address`.
    #[tracing::instrument(level = "trace")]
    pub fn new(address: impl Into<IpAddr> + Debug, prefix_len: u8) -> Result<Inet, Rejection> {
        let address = address.into();
        IpRules::HOST.check(address, prefix_len)?;
        Ok(Inet {
            address,
            prefix_len,
        })
    }

    pub(crate) const fn new_unchecked(address: IpAddr, prefix_len: u8) -> Inet {
        Inet {
            address,
            prefix_len,
        }
    }

    /// Returns the host address.
    #[must_use]
    pub const fn address(&self) -> IpAddr {
        self.address
    }

    /// Returns the prefix length.
    #[must_use]
    pub const fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Returns the address family.
    #[must_use]
    pub const fn family(&self) -> IpFamily {
        IpFamily::of(&self.address)
    }

    /// Returns the netmask described by the prefix length.
    #[must_use]
    pub fn netmask(&self) -> IpAddr {
        ip::netmask(self.address, self.prefix_len)
    }

    /// Returns true iff the prefix length covers the whole address.
    #[must_use]
    pub const fn is_host(&self) -> bool {
        self.prefix_len == self.family().max_prefix_len()
    }

    /// The network this address belongs to, i.e. the address with every bit right of the netmask
    /// cleared.
    ///
    /// This conversion discards the host bits; a debug event is logged when it does.
    #[must_use]
    pub fn network(&self) -> Cidr {
        let network = ip::truncate(self.address, self.prefix_len);
        if network != self.address {
            debug!(
                address = %self.address,
                prefix_len = self.prefix_len,
                "zeroing host bits to form network"
            );
        }
        Cidr::new_unchecked(network, self.prefix_len)
    }
}

impl TextValue for Inet {
    const TYPE_NAME: &'static str = "inet";

    #[tracing::instrument(level = "trace")]
    fn from_text(literal: &str) -> Result<Self, InvalidLiteral> {
        ip::parse(literal, IpRules::HOST)
            .map(|(address, prefix_len)| Inet::new_unchecked(address, prefix_len))
            .map_err(|reason| InvalidLiteral::new(Self::TYPE_NAME, literal, reason))
    }

    fn write_text(&self, out: &mut impl std::fmt::Write, config: &TextConfig) -> std::fmt::Result {
        codec::write_ip(out, self.address, self.prefix_len, *config)
    }
}

impl FromStr for Inet {
    type Err = InvalidLiteral;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Inet::from_text(s)
    }
}

impl Display for Inet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.write_text(f, &TextConfig::default())
    }
}

impl From<IpAddr> for Inet {
    fn from(value: IpAddr) -> Self {
        Inet::new_unchecked(value, IpFamily::of(&value).max_prefix_len())
    }
}

impl TryFrom<String> for Inet {
    type Error = InvalidLiteral;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Inet::from_text(&value)
    }
}

impl From<Inet> for String {
    fn from(value: Inet) -> Self {
        value.to_text()
    }
}

impl From<Inet> for IpNet {
    fn from(value: Inet) -> Self {
        IpNet::new(value.address, value.prefix_len).unwrap_or_else(|e| unreachable!("{e}"))
    }
}

impl From<IpNet> for Inet {
    fn from(value: IpNet) -> Self {
        Inet::new_unchecked(value.addr(), value.prefix_len())
    }
}

#[cfg(any(test, feature = "bolero"))]
mod contract {
    use crate::inet::Inet;
    use crate::ip::IpFamily;
    use bolero::{Driver, TypeGenerator};
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
    use std::ops::Bound;

    impl TypeGenerator for Inet {
        fn generate<D: Driver>(driver: &mut D) -> Option<Self> {
            let address = if driver.gen_bool(Some(0.5))? {
                IpAddr::V4(Ipv4Addr::from(driver.produce::<[u8; 4]>()?))
            } else {
                IpAddr::V6(Ipv6Addr::from(driver.produce::<[u8; 16]>()?))
            };
            let prefix_len = driver.gen_u8(
                Bound::Included(&0),
                Bound::Included(&IpFamily::of(&address).max_prefix_len()),
            )?;
            Some(Inet::new_unchecked(address, prefix_len))
        }
    }
}
