//! gperf input-grammar contract.
//!
//! The transpiler's output is consumed by gperf, which builds the compiled
//! TLD lookup table. Everything in this module is a verbatim contract with
//! that tool: the directive block, the record struct, and the section
//! separators. The templates are opaque fixed text, not generated
//! structure; do not edit them without a matching change on the gperf
//! invocation side.

/// Name of the generated lookup function.
pub const LOOKUP_FUNCTION_NAME: &str = "ANTTopLevelDomainTableLookup";

/// Name of the generated global string pool.
pub const STRING_POOL_NAME: &str = "ANTTopLevelDomainTableStringPool";

/// Separator line opening and closing the keyword (record) section.
pub const SECTION_SEPARATOR: &str = "%%";

/// Directive block emitted before any rule records.
///
/// Declares the lookup function, table layout directives, a prologue
/// disabling the missing-field-initializers warning for the generated
/// initializers, and the record struct (`name` is an offset into the
/// string pool, `type` a [`RuleKind`](crate::RuleKind) ordinal). Ends with
/// the separator opening the record list.
pub const PREAMBLE: &str = r#"%define lookup-function-name ANTTopLevelDomainTableLookup
%compare-lengths
%readonly-tables
%compare-strncmp
%struct-type
%pic

%global-table
%define string-pool-name ANTTopLevelDomainTableStringPool
%{
#include <stddef.h>
#include <string.h>
#pragma clang diagnostic push
#pragma clang diagnostic ignored "-Wmissing-field-initializers"
%}
struct TLDRule {
    int name;
    int type;
};
%%
"#;

/// Emitted after the last rule record: the separator closing the record
/// list and the epilogue restoring the warning state. Ends with a blank
/// line, which the original generator also emitted; kept for byte-exact
/// compatibility.
pub const POSTAMBLE: &str = r#"%%
#pragma clang diagnostic pop

"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preamble_declares_generated_names() {
        assert!(PREAMBLE.contains(LOOKUP_FUNCTION_NAME));
        assert!(PREAMBLE.contains(STRING_POOL_NAME));
    }

    #[test]
    fn test_preamble_opens_record_section() {
        assert!(PREAMBLE.starts_with("%define lookup-function-name"));
        assert!(PREAMBLE.ends_with(&format!("{SECTION_SEPARATOR}\n")));
    }

    #[test]
    fn test_postamble_closes_record_section() {
        assert!(POSTAMBLE.starts_with(&format!("{SECTION_SEPARATOR}\n")));
        assert!(POSTAMBLE.ends_with("\n\n"));
    }

    #[test]
    fn test_record_struct_fields() {
        assert!(PREAMBLE.contains("struct TLDRule"));
        assert!(PREAMBLE.contains("int name;"));
        assert!(PREAMBLE.contains("int type;"));
    }
}
