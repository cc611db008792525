// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Rejections produced while constructing values from text.

use std::net::IpAddr;

/// Broad classification of a [`Rejection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    /// Wrong character set, wrong group count or width, mixed delimiters, more than one `::` or
    /// more than one `/`.
    MalformedLiteral,
    /// An octet, hex group or prefix length outside of its legal numeric range.
    OutOfRangeComponent,
    /// A `cidr` literal with bits set to the right of its netmask.
    InvariantViolation,
}

/// The precise reason a literal was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// Nothing to parse.
    #[error("empty literal")]
    Empty,
    /// A character which has no place in this kind of literal.
    #[error("unexpected character '{0}'")]
    InvalidCharacter(char),
    /// Two delimiters with nothing in between, or a leading / trailing delimiter.
    #[error("empty group")]
    EmptyGroup,
    /// More groups than the address can hold.
    #[error("more than {max} groups")]
    TooManyGroups {
        /// The largest legal number of groups
        max: usize,
    },
    /// Fewer groups than the address requires.
    #[error("expected {expected} groups, found {found}")]
    TooFewGroups {
        /// The number of groups required
        expected: usize,
        /// The number of groups written
        found: usize,
    },
    /// An ipv6 literal with more than one `::`.
    #[error("more than one '::'")]
    MultipleCompressions,
    /// An ipv6 literal with a single `:` which does not separate two groups.
    #[error("stray ':' outside of '::'")]
    StrayColon,
    /// A dotted-decimal ipv4 tail which is not the last group of an ipv6 literal.
    #[error("embedded ipv4 address must be the last group")]
    MisplacedIpv4Tail,
    /// More than one `/` in the literal.
    #[error("more than one '/'")]
    MultiplePrefixSeparators,
    /// A `/` with nothing after it.
    #[error("missing prefix length after '/'")]
    EmptyPrefixLength,
    /// A prefix length which is not a decimal number.
    #[error("prefix length '{0}' is not a decimal number")]
    NonNumericPrefixLength(String),
    /// A mac literal with more than one kind of delimiter.
    #[error("mixed delimiters '{first}' and '{second}'")]
    MixedDelimiters {
        /// The delimiter in use
        first: char,
        /// The conflicting delimiter
        second: char,
    },
    /// A mac literal consisting of hex digits only.
    #[error("no delimiter found")]
    MissingDelimiter,
    /// A mac literal whose group count matches no known layout for its delimiter.
    #[error("no mac layout has {groups} groups delimited by '{delimiter}'")]
    UnsupportedLayout {
        /// The number of groups written
        groups: usize,
        /// The delimiter in use
        delimiter: char,
    },
    /// A mac group with the wrong number of hex digits for its layout.
    #[error("group {index} has {found} hex digits, expected {expected}")]
    GroupWidth {
        /// Zero based index of the offending group
        index: usize,
        /// Width required by the layout
        expected: usize,
        /// Width written
        found: usize,
    },
    /// A decimal octet above 255.
    #[error("octet '{0}' is out of range 0..=255")]
    OctetOutOfRange(String),
    /// An ipv6 group with more than four hex digits.
    #[error("hex group '{0}' is wider than 16 bits")]
    HexGroupOutOfRange(String),
    /// A negative prefix length or one above the family maximum.
    #[error("prefix length '{value}' is out of range 0..={max}")]
    PrefixLengthOutOfRange {
        /// The prefix length as written
        value: String,
        /// The family maximum
        max: u8,
    },
    /// Bits set to the right of the netmask.
    #[error("{address}/{prefix_len} has bits set to the right of the netmask")]
    HostBitsSet {
        /// The offending address
        address: IpAddr,
        /// The netmask length
        prefix_len: u8,
    },
}

impl Rejection {
    /// The [`RejectionKind`] this rejection belongs to.
    #[must_use]
    pub const fn kind(&self) -> RejectionKind {
        match self {
            Rejection::OctetOutOfRange(_)
            | Rejection::HexGroupOutOfRange(_)
            | Rejection::PrefixLengthOutOfRange { .. } => RejectionKind::OutOfRangeComponent,
            Rejection::HostBitsSet { .. } => RejectionKind::InvariantViolation,
            _ => RejectionKind::MalformedLiteral,
        }
    }
}

/// A literal which is not valid input for a given column type.
///
/// Carries the offending literal verbatim so callers can surface it to users.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid input syntax for type {type_name}: \"{literal}\": {reason}")]
pub struct InvalidLiteral {
    type_name: &'static str,
    literal: String,
    reason: Rejection,
}

impl InvalidLiteral {
    pub(crate) fn new(type_name: &'static str, literal: &str, reason: Rejection) -> Self {
        tracing::debug!(type_name, literal, %reason, "rejected literal");
        Self {
            type_name,
            literal: literal.to_owned(),
            reason,
        }
    }

    /// Name of the column type the literal was meant for.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The literal as it was received.
    #[must_use]
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Why the literal was rejected.
    #[must_use]
    pub const fn reason(&self) -> &Rejection {
        &self.reason
    }

    /// Shorthand for `self.reason().kind()`.
    #[must_use]
    pub const fn kind(&self) -> RejectionKind {
        self.reason.kind()
    }
}
