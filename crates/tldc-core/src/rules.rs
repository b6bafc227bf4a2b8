//! Rule model for the effective-TLD rule list.
//!
//! One `Rule` is the classified form of one input line: the domain pattern
//! with its kind marker stripped, plus the kind that marker encoded.

/// Kind of a TLD rule.
///
/// The discriminants are an output contract: emitted records store the
/// kind as this ordinal in their `type` field, and the generated lookup
/// table compares against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RuleKind {
    /// Plain domain suffix (e.g. "com", "co.uk")
    Standard = 0,
    /// `*.` rule: any single label under the suffix (e.g. "*.ck")
    Wildcard = 1,
    /// `!` rule: a name excluded from a broader wildcard (e.g. "!www.ck")
    Exception = 2,
}

impl RuleKind {
    /// Ordinal written into a record's `type` field.
    #[inline]
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for RuleKind {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RuleKind::Standard),
            1 => Ok(RuleKind::Wildcard),
            2 => Ok(RuleKind::Exception),
            _ => Err(()),
        }
    }
}

/// One classified rule, borrowing its body from the input line.
///
/// Rules have no identity beyond their position in the output stream;
/// they are serialized to one record line and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule<'a> {
    /// Domain pattern with the kind marker stripped.
    pub body: &'a str,
    pub kind: RuleKind,
}
