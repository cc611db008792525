// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Text codec shared by all column values.
//!
//! [`TextValue`] is the seam a database client uses for literal I/O: it constructs values from
//! text received from the server (or supplied by a user) and renders them back to the canonical
//! text sent over the wire.

use crate::error::InvalidLiteral;
use crate::ip::IpFamily;
use std::fmt::{self, Write};
use std::hash::Hash;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::ops::Range;

/// When to write the `/<len>` suffix of `cidr` and `inet` values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum PrefixStyle {
    /// Always write the prefix length.
    #[default]
    Always,
    /// Leave out the prefix length when it covers the whole address (`/32` or `/128`).
    OmitFull,
}

/// Rendering options for [`TextValue::write_text`].
///
/// Rendering options never influence equality: every style renders to text which parses back to
/// an equal value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields, rename_all = "kebab-case")
)]
pub struct TextConfig {
    /// When to write the prefix length of ip values.
    pub prefix_len: PrefixStyle,
}

/// A value with a textual wire representation.
pub trait TextValue: Sized + Eq + Hash {
    /// The name the database knows this type by.
    const TYPE_NAME: &'static str;

    /// Construct a value from a textual literal.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidLiteral`] if `literal` is not valid input for this type.
    fn from_text(literal: &str) -> Result<Self, InvalidLiteral>;

    /// Write the canonical text of this value.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to `out` fails.
    fn write_text(&self, out: &mut impl Write, config: &TextConfig) -> fmt::Result;

    /// The canonical text of this value, rendered with the default [`TextConfig`].
    #[must_use]
    fn to_text(&self) -> String {
        self.to_text_with(&TextConfig::default())
    }

    /// The canonical text of this value.
    #[must_use]
    fn to_text_with(&self, config: &TextConfig) -> String {
        let mut text = String::new();
        self.write_text(&mut text, config)
            .unwrap_or_else(|_| unreachable!("writing to a String never fails"));
        text
    }
}

/// The longest run of (at least two) zero groups, leftmost on ties.
pub(crate) fn longest_zero_run(segments: &[u16; 8]) -> Option<Range<usize>> {
    let mut longest: Option<Range<usize>> = None;
    let mut index = 0;
    while index < segments.len() {
        if segments[index] != 0 {
            index += 1;
            continue;
        }
        let start = index;
        while index < segments.len() && segments[index] == 0 {
            index += 1;
        }
        let run = start..index;
        if run.len() >= 2 && longest.as_ref().is_none_or(|longest| run.len() > longest.len()) {
            longest = Some(run);
        }
    }
    longest
}

fn write_groups(out: &mut impl Write, segments: &[u16]) -> fmt::Result {
    for (index, segment) in segments.iter().enumerate() {
        if index > 0 {
            out.write_char(':')?;
        }
        write!(out, "{segment:x}")?;
    }
    Ok(())
}

/// Shortest colon-hex form: lowercase, no leading zeros, one `::` for the longest zero run.
pub(crate) fn write_ipv6(out: &mut impl Write, address: Ipv6Addr) -> fmt::Result {
    let segments = address.segments();
    match longest_zero_run(&segments) {
        None => write_groups(out, &segments),
        Some(run) => {
            write_groups(out, &segments[..run.start])?;
            out.write_str("::")?;
            write_groups(out, &segments[run.end..])
        }
    }
}

/// Full dotted quad.
pub(crate) fn write_ipv4(out: &mut impl Write, address: Ipv4Addr) -> fmt::Result {
    let [a, b, c, d] = address.octets();
    write!(out, "{a}.{b}.{c}.{d}")
}

/// `<address>[/<prefix_len>]`, honoring `config`.
pub(crate) fn write_ip(
    out: &mut impl Write,
    address: IpAddr,
    prefix_len: u8,
    config: TextConfig,
) -> fmt::Result {
    match address {
        IpAddr::V4(address) => write_ipv4(out, address)?,
        IpAddr::V6(address) => write_ipv6(out, address)?,
    }
    let full = prefix_len == IpFamily::of(&address).max_prefix_len();
    match config.prefix_len {
        PrefixStyle::OmitFull if full => Ok(()),
        _ => write!(out, "/{prefix_len}"),
    }
}
