//! Streaming record emission.
//!
//! Consumes input lines one at a time and writes the framed gperf input to
//! an explicit sink: preamble, one `body,ordinal` record per classified
//! line in input order, postamble. Skipped lines consume no output slot.
//! Nothing is buffered or reordered; an error in the line stream or the
//! sink aborts where it occurs.

use std::io::Write;

use log::debug;
use serde::Serialize;

use tldc_core::gperf;
use tldc_core::RuleKind;

use crate::error::CompileError;
use crate::parser::{classify_line, LineClass};

/// Per-run line and record counts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub standard: usize,
    pub wildcard: usize,
    pub exception: usize,
    pub comments: usize,
    pub blank: usize,
}

impl Stats {
    /// Total records emitted.
    pub fn records(&self) -> usize {
        self.standard + self.wildcard + self.exception
    }

    fn count(&mut self, kind: RuleKind) {
        match kind {
            RuleKind::Standard => self.standard += 1,
            RuleKind::Wildcard => self.wildcard += 1,
            RuleKind::Exception => self.exception += 1,
        }
    }
}

/// Transpile a rule list into gperf input.
///
/// `lines` is the concatenated input, one item per line with line
/// terminators already stripped. Errors surface at the line where they
/// occur; whatever was already written to `out` stays written.
pub fn transpile<I, W>(lines: I, out: &mut W) -> Result<Stats, CompileError>
where
    I: IntoIterator<Item = Result<String, CompileError>>,
    W: Write,
{
    let mut stats = Stats::default();

    out.write_all(gperf::PREAMBLE.as_bytes())?;

    for line in lines {
        let line = line?;
        match classify_line(&line) {
            LineClass::Rule(rule) => {
                writeln!(out, "{},{}", rule.body, rule.kind.ordinal())?;
                stats.count(rule.kind);
            }
            LineClass::Comment => stats.comments += 1,
            LineClass::Blank => stats.blank += 1,
        }
    }

    out.write_all(gperf::POSTAMBLE.as_bytes())?;

    debug!(
        "emitted {} records ({} comments, {} blank lines skipped)",
        stats.records(),
        stats.comments,
        stats.blank
    );

    Ok(stats)
}
