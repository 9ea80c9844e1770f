//! Struct-like statement classification
//!
//! `typedef struct X { ... } Y;`, `typedef struct X Y;` and `struct X { ... };`
//! are tried in that order, most specific first. The default patterns cannot
//! overlap: bodies exclude braces and the bare shape needs `};`. Each accepted
//! match still claims its byte span so that a looser custom grammar cannot
//! classify one statement twice.

use crate::extractors::base::{ExportStruct, ExportStructTypeDef, ExportTypeDefedStruct};
use regex::Regex;
use std::ops::Range;

use super::declarations::{extract_struct_fields, group};
use super::patterns::Grammar;

/// Sorted, non-overlapping byte ranges that have already been classified
#[derive(Debug, Default)]
pub(super) struct SpanSet {
    spans: Vec<Range<usize>>,
}

impl SpanSet {
    /// Whether `range` shares at least one byte with a claimed span
    pub(super) fn overlaps(&self, range: &Range<usize>) -> bool {
        // First span that ends after range.start
        let idx = self.spans.partition_point(|s| s.end <= range.start);
        self.spans
            .get(idx)
            .is_some_and(|s| s.start < range.end && range.start < range.end)
    }

    /// Claim `range` unless it overlaps. Returns whether it was claimed.
    pub(super) fn claim(&mut self, range: Range<usize>) -> bool {
        if range.is_empty() || self.overlaps(&range) {
            return false;
        }
        let idx = self.spans.partition_point(|s| s.start < range.start);
        self.spans.insert(idx, range);
        true
    }

    pub(super) fn len(&self) -> usize {
        self.spans.len()
    }
}

#[derive(Debug, Default)]
pub(super) struct StructDeclarations {
    pub structs: Vec<ExportStruct>,
    pub struct_typedefs: Vec<ExportStructTypeDef>,
    pub typedefed_structs: Vec<ExportTypeDefedStruct>,
}

/// Run the ordered classification pass over the whole header
pub(super) fn classify_structs(grammar: &Grammar, input: &str) -> StructDeclarations {
    let mut claimed = SpanSet::default();
    let mut out = StructDeclarations::default();

    for caps in unclaimed(&grammar.typedefed_struct, input, &mut claimed) {
        out.typedefed_structs.push(ExportTypeDefedStruct {
            original_type: group(&caps, 1),
            fields: extract_struct_fields(grammar, &group(&caps, 2)),
            defined_type: group(&caps, 3),
        });
    }

    for caps in unclaimed(&grammar.struct_typedef, input, &mut claimed) {
        out.struct_typedefs.push(ExportStructTypeDef {
            original_type: group(&caps, 1),
            defined_type: group(&caps, 2),
        });
    }

    for caps in unclaimed(&grammar.struct_decl, input, &mut claimed) {
        out.structs.push(ExportStruct {
            name: group(&caps, 1),
            fields: extract_struct_fields(grammar, &group(&caps, 2)),
        });
    }

    tracing::trace!("Classified {} struct-like statements", claimed.len());
    out
}

/// Matches of `regex` whose span is still free, claiming each one taken
fn unclaimed<'h>(
    regex: &Regex,
    input: &'h str,
    claimed: &mut SpanSet,
) -> Vec<regex::Captures<'h>> {
    regex
        .captures_iter(input)
        .filter(|caps| {
            caps.get(0)
                .is_some_and(|whole| claimed.claim(whole.range()))
        })
        .collect()
}
