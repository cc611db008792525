// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Cmd line of the literal canonicalizer

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::Level;

/// The column type literals are parsed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColumnType {
    Cidr,
    Inet,
    Macaddr,
}

#[derive(Debug, Parser)]
#[command(about = "Parse cidr, inet and macaddr literals and print their canonical text", long_about = None)]
pub struct Cmdline {
    #[arg(
        long = "type",
        value_enum,
        default_value_t = ColumnType::Inet,
        help = "Column type to parse the literals as"
    )]
    pub column_type: ColumnType,

    #[arg(
        long,
        value_name = "FILE",
        help = "YAML file with text rendering options"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        value_name = "LEVEL",
        default_value_t = Level::WARN,
        help = "Log level used unless RUST_LOG says otherwise"
    )]
    pub log_level: Level,

    #[arg(required = true, value_name = "LITERAL", help = "Literals to canonicalize")]
    pub literals: Vec<String>,
}
