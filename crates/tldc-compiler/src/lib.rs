//! TLD Rule List Compiler
//!
//! This crate transpiles an effective-TLD rule list into gperf input: one
//! record per rule line, framed by the fixed grammar template from
//! `tldc-core`.

pub mod emitter;
pub mod error;
pub mod parser;

pub use emitter::{transpile, Stats};
pub use error::CompileError;
pub use parser::{classify_line, LineClass};
