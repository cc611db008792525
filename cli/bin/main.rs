// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Print the canonical text of `cidr`, `inet` and `macaddr` literals.

mod cmdline;

use clap::Parser;
use cmdline::{Cmdline, ColumnType};
use miette::{Context, IntoDiagnostic};
use net::{Cidr, Inet, InvalidLiteral, MacAddr, TextConfig, TextValue};
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// A literal the chosen column type refused.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error(transparent)]
#[diagnostic(
    code(pgnet::rejected),
    help("cidr and inet take ipv4 or ipv6 literals, macaddr takes 6x2, 3x4 or 2x6 hex digits")
)]
struct Rejected(#[from] InvalidLiteral);

fn init_logging(level: tracing::Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>) -> miette::Result<TextConfig> {
    let Some(path) = path else {
        return Ok(TextConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("unable to read config file {}", path.display()))?;
    serde_yaml_ng::from_str(&text)
        .into_diagnostic()
        .wrap_err_with(|| format!("invalid config file {}", path.display()))
}

fn canonicalize<T: TextValue>(literal: &str, config: &TextConfig) -> Result<String, Rejected> {
    Ok(T::from_text(literal)?.to_text_with(config))
}

fn main() -> miette::Result<ExitCode> {
    let cmdline = Cmdline::parse();
    init_logging(cmdline.log_level);
    let config = load_config(cmdline.config.as_deref())?;
    debug!(?config, column_type = ?cmdline.column_type, "starting");

    let mut rejected = 0usize;
    for literal in &cmdline.literals {
        let canonical = match cmdline.column_type {
            ColumnType::Cidr => canonicalize::<Cidr>(literal, &config),
            ColumnType::Inet => canonicalize::<Inet>(literal, &config),
            ColumnType::Macaddr => canonicalize::<MacAddr>(literal, &config),
        };
        match canonical {
            Ok(text) => println!("{text}"),
            Err(err) => {
                rejected += 1;
                eprintln!("{:?}", miette::Report::new(err));
            }
        }
    }

    if rejected > 0 {
        info!(rejected, total = cmdline.literals.len(), "some literals were rejected");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
