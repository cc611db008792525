// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Colon-hex ipv6 literals.

use super::v4;
use crate::error::Rejection;
use crate::literal;
use arrayvec::ArrayVec;
use std::net::Ipv6Addr;

const GROUPS: usize = 8;

type Groups = ArrayVec<u16, GROUPS>;

fn push(groups: &mut Groups, group: u16) -> Result<(), Rejection> {
    groups
        .try_push(group)
        .map_err(|_| Rejection::TooManyGroups { max: GROUPS })
}

/// Parse a run of `:` separated groups containing no `::`.
///
/// If `ipv4_tail` is set the last group may be a dotted-decimal ipv4 address, which contributes
/// two groups.
fn parse_run(text: &str, ipv4_tail: bool) -> Result<Groups, Rejection> {
    let mut groups = Groups::new();
    if text.is_empty() {
        return Ok(groups);
    }
    let mut parts = text.split(':').peekable();
    while let Some(part) = parts.next() {
        if part.is_empty() {
            return Err(Rejection::StrayColon);
        }
        if !part.contains('.') {
            push(&mut groups, literal::parse_hex_group(part)?)?;
            continue;
        }
        if !ipv4_tail || parts.peek().is_some() {
            return Err(Rejection::MisplacedIpv4Tail);
        }
        let tail = v4::parse(part)?;
        if tail.written != 4 {
            return Err(Rejection::TooFewGroups {
                expected: 4,
                found: tail.written,
            });
        }
        let [a, b, c, d] = tail.octets;
        push(&mut groups, u16::from_be_bytes([a, b]))?;
        push(&mut groups, u16::from_be_bytes([c, d]))?;
    }
    Ok(groups)
}

/// Parse a colon-hex address, expanding a `::` if present.
pub(crate) fn parse(text: &str) -> Result<Ipv6Addr, Rejection> {
    let mut segments = [0u16; GROUPS];
    match text.split_once("::") {
        None => {
            let groups = parse_run(text, true)?;
            if groups.len() != GROUPS {
                return Err(Rejection::TooFewGroups {
                    expected: GROUPS,
                    found: groups.len(),
                });
            }
            segments.copy_from_slice(&groups);
        }
        Some((_, tail)) if tail.contains("::") => return Err(Rejection::MultipleCompressions),
        Some((head, tail)) => {
            let head = parse_run(head, false)?;
            let tail = parse_run(tail, true)?;
            // `::` stands for at least one zero group
            if head.len() + tail.len() >= GROUPS {
                return Err(Rejection::TooManyGroups { max: GROUPS - 1 });
            }
            segments[..head.len()].copy_from_slice(&head);
            segments[GROUPS - tail.len()..].copy_from_slice(&tail);
        }
    }
    Ok(Ipv6Addr::from(segments))
}
