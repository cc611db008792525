// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Tokenizing helpers shared by the ip and mac parsers.

use crate::error::Rejection;

/// An ip literal split into its address part and optional prefix length suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Literal<'a> {
    pub(crate) address: &'a str,
    pub(crate) prefix_len: Option<&'a str>,
}

impl<'a> Literal<'a> {
    /// Split `text` at its (single) `/`.
    pub(crate) fn split(text: &'a str) -> Result<Self, Rejection> {
        let Some((address, prefix_len)) = text.split_once('/') else {
            if text.is_empty() {
                return Err(Rejection::Empty);
            }
            return Ok(Literal {
                address: text,
                prefix_len: None,
            });
        };
        if prefix_len.contains('/') {
            return Err(Rejection::MultiplePrefixSeparators);
        }
        if address.is_empty() {
            return Err(Rejection::Empty);
        }
        if prefix_len.is_empty() {
            return Err(Rejection::EmptyPrefixLength);
        }
        Ok(Literal {
            address,
            prefix_len: Some(prefix_len),
        })
    }
}

/// Parse a decimal prefix length no larger than `max`.
pub(crate) fn parse_prefix_len(text: &str, max: u8) -> Result<u8, Rejection> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Rejection::NonNumericPrefixLength(text.to_owned()));
    }
    let out_of_range = || Rejection::PrefixLengthOutOfRange {
        value: text.to_owned(),
        max,
    };
    if negative {
        return Err(out_of_range());
    }
    match digits.parse::<u8>() {
        Ok(len) if len <= max => Ok(len),
        _ => Err(out_of_range()),
    }
}

/// Parse one group of a dotted-decimal address (`^[0-9]+$`, at most 255).
pub(crate) fn parse_octet(group: &str) -> Result<u8, Rejection> {
    if group.is_empty() {
        return Err(Rejection::EmptyGroup);
    }
    if let Some(c) = group.chars().find(|c| !c.is_ascii_digit()) {
        return Err(Rejection::InvalidCharacter(c));
    }
    group
        .parse::<u8>()
        .map_err(|_| Rejection::OctetOutOfRange(group.to_owned()))
}

/// Parse one group of a colon-hex address (1 to 4 hex digits).
pub(crate) fn parse_hex_group(group: &str) -> Result<u16, Rejection> {
    if group.is_empty() {
        return Err(Rejection::EmptyGroup);
    }
    if let Some(c) = group.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(Rejection::InvalidCharacter(c));
    }
    if group.len() > 4 {
        return Err(Rejection::HexGroupOutOfRange(group.to_owned()));
    }
    u16::from_str_radix(group, 16).map_err(|_| Rejection::HexGroupOutOfRange(group.to_owned()))
}

/// Value of a single ascii hex digit.
pub(crate) const fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod test {
    use super::*;

    #[test]
    fn split_without_prefix() {
        assert_eq!(
            Literal::split("10.10").unwrap(),
            Literal {
                address: "10.10",
                prefix_len: None
            }
        );
    }

    #[test]
    fn split_with_prefix() {
        assert_eq!(
            Literal::split("10.10/15").unwrap(),
            Literal {
                address: "10.10",
                prefix_len: Some("15")
            }
        );
    }

    #[test]
    fn split_rejects_junk() {
        assert_eq!(Literal::split(""), Err(Rejection::Empty));
        assert_eq!(Literal::split("/24"), Err(Rejection::Empty));
        assert_eq!(
            Literal::split("1.2.3.4/"),
            Err(Rejection::EmptyPrefixLength)
        );
        assert_eq!(
            Literal::split("255.255.255.255/255/255"),
            Err(Rejection::MultiplePrefixSeparators)
        );
    }

    #[test]
    fn prefix_len_bounds() {
        assert_eq!(parse_prefix_len("0", 32), Ok(0));
        assert_eq!(parse_prefix_len("32", 32), Ok(32));
        assert_eq!(parse_prefix_len("128", 128), Ok(128));
        assert_eq!(parse_prefix_len("007", 32), Ok(7));
        for (text, max) in [("33", 32), ("35", 32), ("129", 128), ("256", 128), ("-1", 32)] {
            assert_eq!(
                parse_prefix_len(text, max),
                Err(Rejection::PrefixLengthOutOfRange {
                    value: text.to_owned(),
                    max
                })
            );
        }
        assert!(matches!(
            parse_prefix_len("99999999999999999999999", 128),
            Err(Rejection::PrefixLengthOutOfRange { .. })
        ));
    }

    #[test]
    fn prefix_len_must_be_decimal() {
        for text in ["ab", "0f", "+5", "-", "- 1", "1 "] {
            assert_eq!(
                parse_prefix_len(text, 128),
                Err(Rejection::NonNumericPrefixLength(text.to_owned()))
            );
        }
    }

    #[test]
    fn octets() {
        assert_eq!(parse_octet("0"), Ok(0));
        assert_eq!(parse_octet("255"), Ok(255));
        assert_eq!(parse_octet("010"), Ok(10));
        assert_eq!(
            parse_octet("300"),
            Err(Rejection::OctetOutOfRange("300".into()))
        );
        assert_eq!(
            parse_octet("1000"),
            Err(Rejection::OctetOutOfRange("1000".into()))
        );
        assert_eq!(parse_octet("0x1"), Err(Rejection::InvalidCharacter('x')));
        assert_eq!(parse_octet("-1"), Err(Rejection::InvalidCharacter('-')));
        assert_eq!(parse_octet(""), Err(Rejection::EmptyGroup));
    }

    #[test]
    fn hex_groups() {
        assert_eq!(parse_hex_group("0"), Ok(0));
        assert_eq!(parse_hex_group("123F"), Ok(0x123f));
        assert_eq!(parse_hex_group("ffff"), Ok(0xffff));
        assert_eq!(parse_hex_group("defg"), Err(Rejection::InvalidCharacter('g')));
        assert_eq!(
            parse_hex_group("12345"),
            Err(Rejection::HexGroupOutOfRange("12345".into()))
        );
    }

    #[test]
    fn hex_digits() {
        assert_eq!(hex_digit(b'0'), Some(0));
        assert_eq!(hex_digit(b'a'), Some(10));
        assert_eq!(hex_digit(b'F'), Some(15));
        assert_eq!(hex_digit(b'g'), None);
    }
}
