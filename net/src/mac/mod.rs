// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! The `macaddr` column type.

mod parse;

use crate::codec::{TextConfig, TextValue};
use crate::error::InvalidLiteral;
use std::fmt::{Display, Formatter, Write};
use std::str::FromStr;

/// A [MAC Address] column value.
///
/// `MacAddr` is a transparent wrapper around `[u8; 6]`.
/// Equality, ordering and hashing consider the six bytes only; neither the case nor the layout of
/// the literal it was parsed from survive construction.
///
/// [MAC Address]: https://en.wikipedia.org/wiki/MAC_address
#[must_use]
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct MacAddr(pub [u8; 6]);

impl From<[u8; 6]> for MacAddr {
    fn from(value: [u8; 6]) -> Self {
        MacAddr(value)
    }
}

impl From<MacAddr> for [u8; 6] {
    fn from(value: MacAddr) -> Self {
        value.0
    }
}

impl AsRef<[u8; 6]> for MacAddr {
    fn as_ref(&self) -> &[u8; 6] {
        &self.0
    }
}

impl MacAddr {
    /// The broadcast `MacAddr`
    pub const BROADCAST: MacAddr = MacAddr([u8::MAX; 6]);
    /// The zero `MacAddr`
    pub const ZERO: MacAddr = MacAddr([0; 6]);

    /// Returns the six bytes of the address.
    #[must_use]
    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Returns true iff the binary representation of the [`MacAddr`] is exclusively ones.
    #[must_use]
    pub fn is_broadcast(&self) -> bool {
        self == &MacAddr::BROADCAST
    }

    /// Returns true iff the least significant bit of the first octet is one.
    #[must_use]
    pub const fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 == 0x01
    }

    /// Returns true iff the binary representation of the [`MacAddr`] is exclusively zeros.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self == &MacAddr::ZERO
    }

    /// Returns true iff the second least significant bit of the first octet is one.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        self.0[0] & 0x02 != 0
    }

    /// Keep the organizationally unique identifier (the first three bytes) and zero the rest.
    pub const fn trunc(&self) -> MacAddr {
        let [a, b, c, ..] = self.0;
        MacAddr([a, b, c, 0, 0, 0])
    }
}

impl TextValue for MacAddr {
    const TYPE_NAME: &'static str = "macaddr";

    #[tracing::instrument(level = "trace")]
    fn from_text(literal: &str) -> Result<Self, InvalidLiteral> {
        parse::parse(literal)
            .map(MacAddr)
            .map_err(|reason| InvalidLiteral::new(Self::TYPE_NAME, literal, reason))
    }

    /// Six lowercase pairs of hex digits delimited by `:`, whatever the config.
    fn write_text(&self, out: &mut impl Write, _config: &TextConfig) -> std::fmt::Result {
        for (index, octet) in self.0.iter().enumerate() {
            if index > 0 {
                out.write_char(':')?;
            }
            write!(out, "{octet:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for MacAddr {
    type Err = InvalidLiteral;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MacAddr::from_text(s)
    }
}

impl Display for MacAddr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.write_text(f, &TextConfig::default())
    }
}

impl TryFrom<String> for MacAddr {
    type Error = InvalidLiteral;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        MacAddr::from_text(&value)
    }
}

impl From<MacAddr> for String {
    fn from(value: MacAddr) -> Self {
        value.to_text()
    }
}

#[cfg(any(test, feature = "bolero"))]
mod contract {
    use crate::mac::MacAddr;
    use bolero::{Driver, TypeGenerator};

    impl TypeGenerator for MacAddr {
        fn generate<D: Driver>(driver: &mut D) -> Option<Self> {
            Some(MacAddr(driver.produce()?))
        }
    }
}
