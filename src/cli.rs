// SPDX-License-Identifier: MIT OR Apache-2.0

//! CLI argument parsing using clap
//!
//! One flag per facet, matching the classic driver surface. `-h` is the
//! history facet, so the automatic help short flag is disabled and only
//! `--help` remains. Repeating a flag overwrites its earlier value.

use clap::Parser;
use std::path::PathBuf;

pub const USAGE: &str = "\
USAGE: fgrok -R <configuration.toml> [-d | -r | -p | -h | -f] 'query string' ..
\t -R <configuration.toml> Read configuration from the specified file
\t -d Symbol Definitions
\t -r Symbol References
\t -p Path
\t -h History
\t -f Full text";

/// fgrok - faceted code search driver
///
/// Runs one combined query against a prebuilt index and lists each match
/// as an absolute file path with its matching line number.
#[derive(Parser, Debug)]
#[command(name = "fgrok", version, about, disable_help_flag = true)]
pub struct Cli {
    /// Read environment configuration from this file
    #[arg(short = 'R', value_name = "CONFIG", overrides_with = "config")]
    pub config: Option<PathBuf>,

    /// Symbol definition term
    #[arg(short = 'd', value_name = "TERM", overrides_with = "definition")]
    pub definition: Option<String>,

    /// Symbol reference term
    #[arg(short = 'r', value_name = "TERM", overrides_with = "reference")]
    pub reference: Option<String>,

    /// File path term
    #[arg(short = 'p', value_name = "TERM", overrides_with = "path")]
    pub path: Option<String>,

    /// Revision history term
    #[arg(short = 'h', value_name = "TERM", overrides_with = "history")]
    pub history: Option<String>,

    /// Full text term
    #[arg(short = 'f', value_name = "TERM", overrides_with = "freetext")]
    pub freetext: Option<String>,

    /// Print help
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,
}
