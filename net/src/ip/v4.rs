// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Dotted-decimal ipv4 literals.

use crate::error::Rejection;
use crate::literal;
use std::net::Ipv4Addr;

/// The octets of a dotted-decimal literal and how many of them were written.
///
/// Unwritten trailing octets are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ipv4Groups {
    pub(crate) octets: [u8; 4],
    pub(crate) written: usize,
}

impl Ipv4Groups {
    pub(crate) const fn address(&self) -> Ipv4Addr {
        let [a, b, c, d] = self.octets;
        Ipv4Addr::new(a, b, c, d)
    }

    /// Eight bits for every octet written.
    #[allow(clippy::cast_possible_truncation)] // at most 4 groups
    pub(crate) const fn default_prefix_len(&self) -> u8 {
        if self.written == 4 {
            32
        } else {
            8 * self.written as u8
        }
    }
}

/// Parse 1 to 4 dot separated decimal groups.
pub(crate) fn parse(text: &str) -> Result<Ipv4Groups, Rejection> {
    let mut groups = Ipv4Groups {
        octets: [0; 4],
        written: 0,
    };
    for group in text.split('.') {
        let Some(octet) = groups.octets.get_mut(groups.written) else {
            return Err(Rejection::TooManyGroups { max: 4 });
        };
        *octet = literal::parse_octet(group)?;
        groups.written += 1;
    }
    Ok(groups)
}
