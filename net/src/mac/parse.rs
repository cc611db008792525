// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Delimited hex mac literals.

use crate::error::Rejection;
use crate::literal;
use arrayvec::ArrayVec;

/// A legal arrangement of hex digits in a mac literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    delimiter: char,
    groups: usize,
    width: usize,
}

impl Layout {
    const fn new(delimiter: char, groups: usize, width: usize) -> Layout {
        Layout {
            delimiter,
            groups,
            width,
        }
    }
}

const LAYOUTS: [Layout; 5] = [
    Layout::new(':', 6, 2),
    Layout::new('-', 6, 2),
    Layout::new('.', 3, 4),
    Layout::new(':', 2, 6),
    Layout::new('-', 2, 6),
];

const DELIMITERS: [char; 3] = [':', '-', '.'];

const MAX_GROUPS: usize = 6;

fn nibble(b: u8) -> Result<u8, Rejection> {
    literal::hex_digit(b).ok_or(Rejection::InvalidCharacter(char::from(b)))
}

fn split(text: &str, delimiter: char) -> Result<ArrayVec<&str, MAX_GROUPS>, Rejection> {
    let mut groups = ArrayVec::new();
    for group in text.split(delimiter) {
        if group.is_empty() {
            return Err(Rejection::EmptyGroup);
        }
        if let Some(c) = group.chars().find(|c| !c.is_ascii_hexdigit()) {
            if DELIMITERS.contains(&c) {
                return Err(Rejection::MixedDelimiters {
                    first: delimiter,
                    second: c,
                });
            }
            return Err(Rejection::InvalidCharacter(c));
        }
        groups
            .try_push(group)
            .map_err(|_| Rejection::TooManyGroups { max: MAX_GROUPS })?;
    }
    Ok(groups)
}

/// Parse a mac literal written in one of the known layouts.
///
/// The delimiter is the first character which is not a hex digit.
pub(crate) fn parse(text: &str) -> Result<[u8; 6], Rejection> {
    if text.is_empty() {
        return Err(Rejection::Empty);
    }
    let Some(delimiter) = text.chars().find(|c| !c.is_ascii_hexdigit()) else {
        return Err(Rejection::MissingDelimiter);
    };
    if !DELIMITERS.contains(&delimiter) {
        return Err(Rejection::InvalidCharacter(delimiter));
    }
    let groups = split(text, delimiter)?;
    let Some(layout) = LAYOUTS
        .iter()
        .find(|layout| layout.delimiter == delimiter && layout.groups == groups.len())
    else {
        return Err(Rejection::UnsupportedLayout {
            groups: groups.len(),
            delimiter,
        });
    };
    if let Some((index, group)) = groups
        .iter()
        .enumerate()
        .find(|(_, group)| group.len() != layout.width)
    {
        return Err(Rejection::GroupWidth {
            index,
            expected: layout.width,
            found: group.len(),
        });
    }
    // every layout holds exactly six pairs of hex digits
    let mut octets = [0u8; 6];
    let pairs = groups.iter().flat_map(|group| group.as_bytes().chunks_exact(2));
    for (octet, pair) in octets.iter_mut().zip(pairs) {
        *octet = (nibble(pair[0])? << 4) | nibble(pair[1])?;
    }
    Ok(octets)
}
