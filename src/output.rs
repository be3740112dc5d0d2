// SPDX-License-Identifier: MIT OR Apache-2.0

//! Result rendering
//!
//! One line per hit, `<absolute path>: [<line>]`, in fetch order. Zero hits
//! produce a single informational notice instead of file listings.

use std::io::{self, Write};

use crate::config::Environment;
use crate::engine::Hit;

/// Render each hit as an absolute path annotated with its matching line.
pub fn render_hits<W: Write>(out: &mut W, env: &Environment, hits: &[Hit]) -> io::Result<()> {
    for hit in hits {
        writeln!(out, "{}: [{}]", env.resolve(&hit.path).display(), hit.line)?;
    }
    Ok(())
}

/// Render the zero-match notice, referencing the composite query text.
pub fn render_no_match<W: Write>(out: &mut W, query_text: &str) -> io::Result<()> {
    writeln!(
        out,
        "Your search \"{}\" did not match any files.",
        query_text
    )
}
