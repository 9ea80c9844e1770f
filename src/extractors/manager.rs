//! HeaderProcessor - Public API for header export extraction
//!
//! Wraps a [`Grammar`] and delegates to the C header extractor. This module
//! provides the main public interface for clients to turn header text into a
//! [`ProcessedHeader`], one at a time or as a parallel batch.

use crate::extractors::base::ProcessedHeader;
use crate::extractors::c::{validate_references, CExtractor, Grammar, GrammarError, UnresolvedReference};
use rayon::prelude::*;
use std::borrow::Cow;

/// Stateless processor over one grammar; cheap to share across threads
#[derive(Debug, Clone)]
pub struct HeaderProcessor<'g> {
    grammar: Cow<'g, Grammar>,
}

impl Default for HeaderProcessor<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderProcessor<'static> {
    /// Processor using the shared default grammar (`_EXPORT` marker)
    pub fn new() -> Self {
        Self {
            grammar: Cow::Borrowed(&crate::extractors::c::DEFAULT_GRAMMAR),
        }
    }

    /// Processor recognizing functions prefixed with `<word><marker>`
    pub fn with_export_marker(marker: &str) -> Result<Self, GrammarError> {
        Ok(Self {
            grammar: Cow::Owned(Grammar::with_export_marker(marker)?),
        })
    }
}

impl<'g> HeaderProcessor<'g> {
    pub fn with_grammar(grammar: &'g Grammar) -> Self {
        Self {
            grammar: Cow::Borrowed(grammar),
        }
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Extract the export model from one header's text
    pub fn process(&self, content: &str) -> ProcessedHeader {
        let header = CExtractor::new(&self.grammar).extract(content);

        tracing::debug!(
            "Extracted {} functions, {} constants, {} enums, {} structs ({} typedef'd) from {} bytes",
            header.functions.len(),
            header.constants.len(),
            header.enums.len(),
            header.structs.len(),
            header.typedefed_structs.len(),
            content.len()
        );
        header
    }

    /// Extract and then resolve every referenced type name
    pub fn process_validated(&self, content: &str) -> (ProcessedHeader, Vec<UnresolvedReference>) {
        let header = self.process(content);
        let unresolved = validate_references(&header);
        (header, unresolved)
    }

    /// Extract many headers in parallel; output order matches input order
    pub fn process_batch<S: AsRef<str> + Sync>(&self, contents: &[S]) -> Vec<ProcessedHeader> {
        contents
            .par_iter()
            .map(|content| self.process(content.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_uses_default_marker() {
        let processor = HeaderProcessor::new();
        assert_eq!(processor.grammar().export_marker(), "_EXPORT");

        let header = processor.process("LIB_EXPORT void ping(void);");
        assert_eq!(header.functions.len(), 1);
        assert!(header.functions[0].parameters.is_empty());
    }

    #[test]
    fn test_with_export_marker_errors_propagate() {
        assert!(HeaderProcessor::with_export_marker("").is_err());

        let processor = HeaderProcessor::with_export_marker("_PUBLIC").unwrap();
        let header = processor.process("GFX_PUBLIC int gfx_init(int flags);");
        assert_eq!(header.functions[0].name, "gfx_init");
    }

    #[test]
    fn test_batch_preserves_order() {
        let contents: Vec<String> = (0..32)
            .map(|i| format!("X_EXPORT int fn_{i}(int a);"))
            .collect();

        let headers = HeaderProcessor::new().process_batch(&contents);
        assert_eq!(headers.len(), 32);
        for (i, header) in headers.iter().enumerate() {
            assert_eq!(header.functions[0].name, format!("fn_{i}"));
        }
    }

    #[test]
    fn test_batch_is_deterministic() {
        let header = "X_EXPORT int add(int a, int b);\nenum E { A, B = 3 };";
        let contents = vec![header; 8];
        let processor = HeaderProcessor::new();

        let sequential = processor.process(header);
        for parallel in processor.process_batch(&contents) {
            assert_eq!(parallel, sequential);
        }
    }

    #[test]
    fn test_process_validated_reports_unknown_types() {
        let (header, unresolved) =
            HeaderProcessor::new().process_validated("X_EXPORT Session* open_session(int id);");
        assert_eq!(header.functions.len(), 1);
        assert_eq!(unresolved.len(), 1);
        assert_eq!(unresolved[0].type_name, "Session");
    }

    #[test]
    fn test_borrowed_grammar() {
        let grammar = Grammar::default().keep_comments();
        let processor = HeaderProcessor::with_grammar(&grammar);
        assert!(!processor.grammar().strip_comments);
    }
}
