//! Lazy line input.
//!
//! Streams the concatenated lines of the argument files, opening each file
//! only when the stream reaches it, or standard input when no files were
//! named. Because opening is deferred, a failure partway through surfaces
//! at the line where that file would have been read; output produced
//! before that point stays written.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines, StdinLock};
use std::path::PathBuf;
use std::vec;

use tldc_compiler::CompileError;

enum Reader {
    File {
        path: String,
        lines: Lines<BufReader<File>>,
    },
    Stdin(Lines<StdinLock<'static>>),
}

/// Iterator over the lines of every input source, in argument order.
pub struct LineSource {
    pending: vec::IntoIter<PathBuf>,
    current: Option<Reader>,
}

impl LineSource {
    /// Stream `paths` in order, or standard input if `paths` is empty.
    pub fn new(paths: Vec<PathBuf>) -> Self {
        let current = if paths.is_empty() {
            Some(Reader::Stdin(io::stdin().lines()))
        } else {
            None
        };
        Self {
            pending: paths.into_iter(),
            current,
        }
    }

    fn open_next(&mut self) -> Option<Result<(), CompileError>> {
        let path = self.pending.next()?;
        let display = path.display().to_string();
        match File::open(&path) {
            Ok(file) => {
                self.current = Some(Reader::File {
                    path: display,
                    lines: BufReader::new(file).lines(),
                });
                Some(Ok(()))
            }
            Err(source) => Some(Err(CompileError::Input {
                path: display,
                source,
            })),
        }
    }
}

impl Iterator for LineSource {
    type Item = Result<String, CompileError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(reader) = &mut self.current {
                let (next, path) = match reader {
                    Reader::File { path, lines } => (lines.next(), path.as_str()),
                    Reader::Stdin(lines) => (lines.next(), "<stdin>"),
                };
                match next {
                    Some(Ok(line)) => return Some(Ok(line)),
                    Some(Err(source)) => {
                        let path = path.to_string();
                        self.current = None;
                        return Some(Err(CompileError::Input { path, source }));
                    }
                    None => self.current = None,
                }
            }

            match self.open_next() {
                Some(Ok(())) => continue,
                Some(Err(e)) => return Some(Err(e)),
                None => return None,
            }
        }
    }
}
