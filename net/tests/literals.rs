// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Literal tables exercised the way a database client would: parse text received from the server,
//! render it back, and expect the value (and its hash) to survive the trip.

use pgnet_net::{Cidr, Inet, MacAddr, RejectionKind, TextValue};
use std::collections::hash_map::DefaultHasher;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

use RejectionKind::{InvariantViolation, MalformedLiteral, OutOfRangeComponent};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn accepts<T: TextValue + Debug>(literals: &[&str]) {
    for literal in literals {
        let value = T::from_text(literal).unwrap_or_else(|e| panic!("{e}"));
        let text = value.to_text();
        let again = T::from_text(&text).unwrap_or_else(|e| panic!("{literal} -> {e}"));
        assert_eq!(again, value, "{literal} -> {text}");
        assert_eq!(hash_of(&again), hash_of(&value), "{literal} -> {text}");
    }
}

fn rejects<T: TextValue + Debug>(literals: &[(&str, RejectionKind)]) {
    for (literal, kind) in literals {
        match T::from_text(literal) {
            Ok(value) => panic!("{literal} accepted as {value:?}"),
            Err(err) => {
                assert_eq!(err.kind(), *kind, "{err}");
                assert_eq!(err.literal(), *literal);
                assert_eq!(err.type_name(), T::TYPE_NAME);
            }
        }
    }
}

fn renders<T: TextValue + Debug>(pairs: &[(&str, &str)]) {
    for (literal, canonical) in pairs {
        let value = T::from_text(literal).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(value.to_text(), *canonical, "{literal}");
    }
}

fn equivalent<T: TextValue + Debug>(pairs: &[(&str, &str)]) {
    for (a, b) in pairs {
        let a = T::from_text(a).unwrap_or_else(|e| panic!("{e}"));
        let b = T::from_text(b).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }
}

#[test]
fn cidr_ipv4_accepted() {
    accepts::<Cidr>(&[
        "0",
        "0/32",
        "1",
        "1.5",
        "10.10",
        "10.10/15",
        "20.20.20",
        "20.20.20/25",
        "20.20.20/22",
        "220.200.200",
        "220.128.1/25",
        "220.200.200.4",
        "192.168.1.10/32",
    ]);
}

#[test]
fn cidr_ipv4_rejected() {
    rejects::<Cidr>(&[
        ("240.0.0.1/31", InvariantViolation),
        ("255.255.1/23", InvariantViolation),
        ("255.255.128/16", InvariantViolation),
        ("255.1/15", InvariantViolation),
        ("255.128/8", InvariantViolation),
        ("1/7", InvariantViolation),
        ("128/0", InvariantViolation),
        ("255.255.255.255/ab", MalformedLiteral),
        ("255.255.255.255/255/255", MalformedLiteral),
        ("300.0.0.1", OutOfRangeComponent),
        ("19.1000.50", OutOfRangeComponent),
        ("1.2.301.4/31", OutOfRangeComponent),
        ("1.2.3.4/35", OutOfRangeComponent),
        ("1.2.3.4/-10", OutOfRangeComponent),
        ("1.2.3.4/-1", OutOfRangeComponent),
        ("1.2.3.4.5/32", MalformedLiteral),
    ]);
}

#[test]
fn cidr_ipv6_accepted() {
    accepts::<Cidr>(&[
        "::",
        "::/32",
        "abcd:eff0::/28",
        "abcd:efef::/32",
        "4bc:ab:1234::bcda/127",
        "4bc:ab:1234::bcda/128",
        "1234::1234",
        "1234:1234:1234:1234:1234:1234:1234:123E/127",
        "1234:1234:1234:1234:1234:1234:1234:123F/128",
    ]);
}

#[test]
fn cidr_ipv6_rejected() {
    rejects::<Cidr>(&[
        ("1234:1234:1234:1234:1234:1234:1234:1234:", MalformedLiteral),
        (
            "1234:1234:1234:1234:1234:1234:1234:123F/127",
            InvariantViolation,
        ),
        ("1234:1234:1234::/31", InvariantViolation),
        ("1234:1234:1234::/32", InvariantViolation),
        ("1234:1234:1234::/34", InvariantViolation),
        ("::/-1", OutOfRangeComponent),
        ("::/129", OutOfRangeComponent),
        ("1234:5678:9abc:defg::/128", MalformedLiteral),
        ("1234:5678:9abc::/0f", MalformedLiteral),
        ("1234:5678:9abc:deff:ffde:cba9:8765:4321:1234", MalformedLiteral),
    ]);
}

#[test]
fn cidr_canonical_text() {
    renders::<Cidr>(&[
        ("0", "0.0.0.0/8"),
        ("10.10/15", "10.10.0.0/15"),
        ("20.20.20", "20.20.20.0/24"),
        ("220.200.200.4", "220.200.200.4/32"),
        ("::", "::/128"),
        ("abcd:EFF0::/28", "abcd:eff0::/28"),
        (
            "1234:1234:1234:1234:1234:1234:1234:123F/128",
            "1234:1234:1234:1234:1234:1234:1234:123f/128",
        ),
        ("04bc:00ab:1234:0:0:0:0:bcda", "4bc:ab:1234::bcda/128"),
        ("0004:00ab:1234:0:0:0:0:bcda", "4:ab:1234::bcda/128"),
    ]);
}

#[test]
fn cidr_equivalent_literals() {
    equivalent::<Cidr>(&[
        ("::", "0:0:0:0:0:0:0:0"),
        ("::", "::/128"),
        ("20.20.20", "20.20.20.0/24"),
        ("1.5", "1.5.0.0/16"),
        ("1234::1234", "1234:0:0:0:0:0:0:1234/128"),
    ]);
}

#[test]
fn inet_ipv4_accepted() {
    accepts::<Inet>(&[
        "0.0.0.0",
        "192.168.1.10/32",
        "192.168.1.10/20",
        "10.10.10.120/8",
        "132.235.215.243",
        "200.46.204.71",
    ]);
}

#[test]
fn inet_ipv4_rejected() {
    rejects::<Inet>(&[
        ("255.255.1/23", MalformedLiteral),
        ("255.255.128/16", MalformedLiteral),
        ("255.1/15", MalformedLiteral),
        ("255.128/8", MalformedLiteral),
        ("1/7", MalformedLiteral),
        ("128/0", MalformedLiteral),
        ("255.255.255.255/ab", MalformedLiteral),
        ("255.255.255.255/255/255", MalformedLiteral),
        ("300.0.0.1", OutOfRangeComponent),
        ("19.1000.50", OutOfRangeComponent),
        ("1.2.301.4/31", OutOfRangeComponent),
        ("1.2.3.4/35", OutOfRangeComponent),
        ("1.2.3.4/-10", OutOfRangeComponent),
        ("1.2.3.4/-1", OutOfRangeComponent),
        ("1.2.3.4.5/32", MalformedLiteral),
        ("a.b.c.d/32", MalformedLiteral),
    ]);
}

#[test]
fn inet_ipv6_accepted() {
    accepts::<Inet>(&[
        "::",
        "::/32",
        "abcd:eff0::/28",
        "abcd:efef::/32",
        "4bc:ab:1234::bcda/127",
        "4bc:ab:1234::bcda/128",
        "1234::1234",
        "1234:1234:1234:1234:1234:1234:1234:123E/127",
        "1234:1234:1234:1234:1234:1234:1234:123F/127",
        "1234:1234:1234:1234:1234:1234:1234:123F/128",
        "::192.168.1.1",
    ]);
}

#[test]
fn inet_ipv6_rejected() {
    rejects::<Inet>(&[
        ("1234:1234:1234:1234:1234:1234:1234:1234:", MalformedLiteral),
        (":1234:1234:1234:1234:1234:1234:1234:1234", MalformedLiteral),
        ("::/-1", OutOfRangeComponent),
        ("::/129", OutOfRangeComponent),
        ("1234:5678:9abc:defg::/128", MalformedLiteral),
        ("1234:5678:9abc::/0f", MalformedLiteral),
        ("1234:5678:9abc:deff:ffde:cba9:8765:4321:1234", MalformedLiteral),
    ]);
}

#[test]
fn inet_canonical_text() {
    renders::<Inet>(&[
        ("0.0.0.0", "0.0.0.0/32"),
        ("192.168.1.10/20", "192.168.1.10/20"),
        ("::192.168.1.1", "::c0a8:101/128"),
        (
            "1234:1234:1234:1234:1234:1234:1234:123F/127",
            "1234:1234:1234:1234:1234:1234:1234:123f/127",
        ),
    ]);
}

#[test]
fn inet_equivalent_literals() {
    equivalent::<Inet>(&[
        ("::", "0:0:0:0:0:0:0:0/128"),
        ("132.235.215.243", "132.235.215.243/32"),
        ("::192.168.1.1", "::c0a8:101"),
    ]);
}

#[test]
fn inet_keeps_what_cidr_rejects() {
    let inet = Inet::from_text("240.0.0.1/31").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(inet.to_text(), "240.0.0.1/31");
    assert_eq!(inet.network().to_text(), "240.0.0.0/31");
    assert!(Cidr::from_text("240.0.0.1/31").is_err());
}

#[test]
fn macaddr_accepted() {
    accepts::<MacAddr>(&[
        "12:34:56:65:43:21",
        "123457:754321",
        "abcdee-eedcba",
        "ab-cd-ef-fe-dc-ba",
        "1234.5678.9abc",
    ]);
}

#[test]
fn macaddr_rejected() {
    rejects::<MacAddr>(&[
        ("ab:ab:ab:ab:ab:ab:ab", MalformedLiteral),
        ("ab:abc:ab:ab:ab:ab", MalformedLiteral),
        ("ab:ab-ab:ab-ab:ab", MalformedLiteral),
        ("fg:ab:cd:ef:01:23", MalformedLiteral),
        (":af:af:af:af:af:af", MalformedLiteral),
        ("12:34:56:78:9a:bc:", MalformedLiteral),
    ]);
}

#[test]
fn macaddr_canonical_text() {
    renders::<MacAddr>(&[
        ("abcdee-eedcba", "ab:cd:ee:ee:dc:ba"),
        ("AB-CD-EF-FE-DC-BA", "ab:cd:ef:fe:dc:ba"),
        ("1234.5678.9abc", "12:34:56:78:9a:bc"),
        ("123457:754321", "12:34:57:75:43:21"),
    ]);
}

#[test]
fn macaddr_equivalent_literals() {
    equivalent::<MacAddr>(&[
        ("12:34:56:65:43:21", "123456-654321"),
        ("ABCDEE-EEDCBA", "abcd.eeee.dcba"),
    ]);
}

#[test]
fn values_order_by_family_then_bits_then_prefix() {
    let mut values: Vec<Cidr> = ["::/32", "10.10/15", "10.10/16", "1", "::"]
        .into_iter()
        .map(|literal| Cidr::from_text(literal).unwrap_or_else(|e| panic!("{e}")))
        .collect();
    values.sort();
    let rendered: Vec<String> = values.iter().map(TextValue::to_text).collect();
    assert_eq!(
        rendered,
        [
            "1.0.0.0/8",
            "10.10.0.0/15",
            "10.10.0.0/16",
            "::/32",
            "::/128"
        ]
    );
}
