// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Network address column values: `cidr`, `inet` and `macaddr`.
//!
//! Each value is constructed from a textual literal, validated and canonicalized on the way in,
//! and rendered back to canonical text through the [`TextValue`] trait.
//! Values compare and hash by their binary content, never by the literal they came from.

#![deny(
    unsafe_code,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]

pub mod cidr;
pub mod codec;
pub mod error;
pub mod inet;
pub mod ip;
pub mod mac;

mod literal;

pub use cidr::Cidr;
pub use codec::{PrefixStyle, TextConfig, TextValue};
pub use error::{InvalidLiteral, Rejection, RejectionKind};
pub use inet::Inet;
pub use ip::IpFamily;
pub use mac::MacAddr;
