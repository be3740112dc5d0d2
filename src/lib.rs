// SPDX-License-Identifier: MIT OR Apache-2.0

//! fgrok - faceted code search driver
//!
//! Shared modules for the fgrok CLI tool.

pub mod config;
pub mod engine;
pub mod errors;
pub mod index;
pub mod output;
pub mod query;
pub mod search;
