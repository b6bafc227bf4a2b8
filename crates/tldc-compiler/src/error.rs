//! Error taxonomy for a compile run.

use std::io;

use thiserror::Error;

/// Fatal errors for a compile run.
///
/// Rule text itself never fails: every trimmed line classifies to some
/// record or is skipped, so the only failure modes are I/O on either end
/// of the stream. Both abort the run; output already written stays
/// written.
#[derive(Debug, Error)]
pub enum CompileError {
    /// A named input source could not be opened or read.
    #[error("failed to read '{path}': {source}")]
    Input {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The output sink rejected a write.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}
