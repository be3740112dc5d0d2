// SPDX-License-Identifier: MIT OR Apache-2.0

//! fgrok - faceted code search driver
//!
//! Composes one query from per-facet search terms, runs it against a
//! prebuilt index, and lists matches as absolute paths with line numbers.

mod cli;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, USAGE};
use fgrok::config::Environment;
use fgrok::errors::SearchError;
use fgrok::index::TantivyEngine;
use fgrok::query::QueryBuilder;
use fgrok::search;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            // --help or --version
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            if err.is_usage_error() {
                eprintln!("{USAGE}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), SearchError> {
    let config = cli.config.ok_or(SearchError::MissingDataRoot)?;
    let env = Environment::load(&config)?;
    let data_root = env.data_root()?;

    let mut query = QueryBuilder::new();
    if let Some(term) = cli.definition.as_deref() {
        query.set_definition(term);
    }
    if let Some(term) = cli.reference.as_deref() {
        query.set_symbol(term);
    }
    if let Some(term) = cli.path.as_deref() {
        query.set_path(term);
    }
    if let Some(term) = cli.history.as_deref() {
        query.set_history(term);
    }
    if let Some(term) = cli.freetext.as_deref() {
        query.set_freetext(term);
    }
    if !query.is_valid() {
        return Err(SearchError::InvalidQuery);
    }

    let engine = TantivyEngine::open(data_root)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    search::run(&env, &query, engine, &mut out)?;
    out.flush()?;
    Ok(())
}
