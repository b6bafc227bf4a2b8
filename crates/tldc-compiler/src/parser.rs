//! Per-line rule classification.
//!
//! The rule list DSL is a handful of line prefixes checked in a fixed
//! order: blank lines and `//` comments are skipped, then `!` marks an
//! exception rule and `*.` a wildcard rule; anything else is a standard
//! rule. Evaluation order is a contract: `!*.example.com` consumes only
//! the `!`, leaving the literal `*.` in the body. Classification is
//! single-pass and never re-strips.

use tldc_core::{Rule, RuleKind};

/// Prefix marking a comment line.
const COMMENT_PREFIX: &str = "//";

/// Kind markers in evaluation order: (prefix, kind, bytes to strip).
/// First match wins.
const MARKERS: &[(&str, RuleKind, usize)] = &[
    ("!", RuleKind::Exception, 1),
    ("*.", RuleKind::Wildcard, 2),
];

/// Classification of one raw input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Whitespace-only line; produces no record.
    Blank,
    /// `//` comment; produces no record.
    Comment,
    /// A rule; produces exactly one record.
    Rule(Rule<'a>),
}

/// Classify one raw input line.
///
/// Leading and trailing whitespace is trimmed first; marker stripping is
/// strictly positional after that. This cannot fail: any non-blank,
/// non-comment text, however odd, is some rule.
pub fn classify_line(raw: &str) -> LineClass<'_> {
    let line = raw.trim();

    if line.is_empty() {
        return LineClass::Blank;
    }
    if line.starts_with(COMMENT_PREFIX) {
        return LineClass::Comment;
    }

    for &(prefix, kind, strip) in MARKERS {
        if line.starts_with(prefix) {
            return LineClass::Rule(Rule {
                body: &line[strip..],
                kind,
            });
        }
    }

    LineClass::Rule(Rule {
        body: line,
        kind: RuleKind::Standard,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(body: &str, kind: RuleKind) -> LineClass<'_> {
        LineClass::Rule(Rule { body, kind })
    }

    #[test]
    fn test_standard_rule() {
        assert_eq!(classify_line("example.com"), rule("example.com", RuleKind::Standard));
        assert_eq!(classify_line("com"), rule("com", RuleKind::Standard));
    }

    #[test]
    fn test_wildcard_rule() {
        assert_eq!(classify_line("*.example.com"), rule("example.com", RuleKind::Wildcard));
        assert_eq!(classify_line("*.ck"), rule("ck", RuleKind::Wildcard));
    }

    #[test]
    fn test_exception_rule() {
        assert_eq!(
            classify_line("!exception.example.com"),
            rule("exception.example.com", RuleKind::Exception)
        );
    }

    #[test]
    fn test_blank_and_comment() {
        assert_eq!(classify_line(""), LineClass::Blank);
        assert_eq!(classify_line("   \t"), LineClass::Blank);
        assert_eq!(classify_line("// a comment"), LineClass::Comment);
        assert_eq!(classify_line("  // indented comment"), LineClass::Comment);
    }

    #[test]
    fn test_exception_wildcard_strips_outer_marker_only() {
        // The `!` check runs before `*.` and stripping is single-pass, so
        // the wildcard marker survives literally in the body.
        assert_eq!(
            classify_line("!*.weird.example.com"),
            rule("*.weird.example.com", RuleKind::Exception)
        );
    }

    #[test]
    fn test_whitespace_trimmed_before_markers() {
        assert_eq!(classify_line("  *.example.com \n"), rule("example.com", RuleKind::Wildcard));
        assert_eq!(classify_line("\t!a.b "), rule("a.b", RuleKind::Exception));
    }

    #[test]
    fn test_bare_marker_yields_empty_body() {
        // No syntax validation: a lone marker still classifies.
        assert_eq!(classify_line("!"), rule("", RuleKind::Exception));
        assert_eq!(classify_line("*."), rule("", RuleKind::Wildcard));
    }

    #[test]
    fn test_single_slash_is_not_a_comment() {
        assert_eq!(classify_line("/x"), rule("/x", RuleKind::Standard));
    }
}
