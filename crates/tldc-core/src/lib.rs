//! TLD Table Compiler Core
//!
//! Shared types for the effective-TLD rule transpiler: the rule model the
//! compiler crate classifies lines into, and the gperf input-grammar
//! contract pinned as constants.
//!
//! # Modules
//!
//! - `rules`: rule kinds and the per-line rule record
//! - `gperf`: the fixed grammar template consumed by the downstream
//!   perfect-hash-table generator

pub mod gperf;
pub mod rules;

// Re-export commonly used types
pub use rules::{Rule, RuleKind};
