//! C header export extractor
//!
//! Recognizes a constrained "exported API header" dialect with a fixed set of
//! declaration patterns and builds a [`ProcessedHeader`]. This module is
//! organized into focused submodules:
//!
//! - `patterns` - The pattern library, bundled as a [`Grammar`]
//! - `declarations` - Per-kind extraction (functions, constants, enums, ...)
//! - `structs` - Ordered classification of struct-like statements
//! - `validation` - Cross-reference checks over an extracted model
//!
//! Extraction is tolerant by omission: a declaration that does not fit its
//! shape is simply absent from the output. There is no error path.

use crate::extractors::base::{strip_comments, ProcessedHeader};
use std::borrow::Cow;

// Internal modules
mod declarations;
pub mod patterns;
mod structs;
pub mod validation;

pub use patterns::{Grammar, GrammarError, DEFAULT_EXPORT_MARKER, DEFAULT_GRAMMAR};
pub use validation::{validate_references, UnresolvedReference};

/// Header extractor bound to one grammar
#[derive(Debug, Clone, Copy)]
pub struct CExtractor<'g> {
    grammar: &'g Grammar,
}

impl Default for CExtractor<'static> {
    fn default() -> Self {
        Self::new(&DEFAULT_GRAMMAR)
    }
}

impl<'g> CExtractor<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self { grammar }
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    /// Extract every recognized declaration from `content`
    pub fn extract(&self, content: &str) -> ProcessedHeader {
        let text: Cow<'_, str> = if self.grammar.strip_comments {
            Cow::Owned(strip_comments(content))
        } else {
            Cow::Borrowed(content)
        };
        let grammar = self.grammar;

        let structs = structs::classify_structs(grammar, &text);

        ProcessedHeader {
            functions: declarations::extract_functions(grammar, &text),
            constants: declarations::extract_constants(grammar, &text),
            function_pointer_typedefs: declarations::extract_function_pointer_typedefs(
                grammar, &text,
            ),
            enums: declarations::extract_enums(grammar, &text),
            enum_typedefs: declarations::extract_enum_typedefs(grammar, &text),
            structs: structs.structs,
            struct_typedefs: structs.struct_typedefs,
            typedefed_structs: structs.typedefed_structs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::{ExportEnumValue, ExportParameter, ExportStructField};

    fn extract(content: &str) -> ProcessedHeader {
        CExtractor::default().extract(content)
    }

    fn param(param_type: &str, name: &str) -> ExportParameter {
        ExportParameter {
            param_type: param_type.to_string(),
            name: name.to_string(),
        }
    }

    fn field(field_type: &str, name: &str) -> ExportStructField {
        ExportStructField {
            field_type: field_type.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_no_declarations_yields_empty_model() {
        for content in ["", "int main(void) { return 0; }", "#include <stdio.h>\n"] {
            let header = extract(content);
            assert!(header.is_empty(), "expected empty model for {content:?}");
        }
    }

    #[test]
    fn test_exported_function() {
        let header = extract("FOO_EXPORT int add(int a, int b);");
        assert_eq!(header.functions.len(), 1);

        let add = &header.functions[0];
        assert_eq!(add.name, "add");
        assert_eq!(add.return_type, "int");
        assert_eq!(add.parameters, vec![param("int", "a"), param("int", "b")]);
    }

    #[test]
    fn test_function_without_marker_is_ignored() {
        let header = extract("int add(int a, int b);\nstatic void helper(void);");
        assert!(header.functions.is_empty());
    }

    #[test]
    fn test_multiline_function_declaration() {
        let header = extract(
            "MYLIB_EXPORT const char* describe(\n\tconst char* name,\r\n\tint* out_len);",
        );
        assert_eq!(header.functions.len(), 1);

        let describe = &header.functions[0];
        assert_eq!(describe.return_type, "const char*");
        assert_eq!(
            describe.parameters,
            vec![param("char*", "name"), param("int*", "out_len")]
        );
    }

    #[test]
    fn test_constants_keep_string_quotes() {
        let header = extract("#define MAX_COUNT 100\n#define NAME \"hello\"\n");
        let pairs: Vec<(&str, &str)> = header
            .constants
            .iter()
            .map(|c| (c.name.as_str(), c.value.as_str()))
            .collect();
        assert_eq!(pairs, vec![("MAX_COUNT", "100"), ("NAME", "\"hello\"")]);
    }

    #[test]
    fn test_constant_string_with_escaped_quotes() {
        let header = extract("#define GREETING \"say \\\"hi\\\"\"\n#define NEXT 1\n");
        assert_eq!(header.constants.len(), 2);
        assert_eq!(header.constants[0].name, "GREETING");
        assert_eq!(header.constants[0].value, r#""say \"hi\"""#);
        assert_eq!(header.constants[1].value, "1");
    }

    #[test]
    fn test_enum_with_spaced_negative_initializer() {
        let header = extract("enum E { A = - 1, B };");
        assert_eq!(header.enums.len(), 1);

        let names: Vec<&str> = header.enums[0].values.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(header.enums[0].values[0].value, "-1");
        assert_eq!(header.enums[0].values[1].value, "");
    }

    #[test]
    fn test_duplicate_constants_are_kept() {
        let header = extract("#define LEVEL 1\n#define LEVEL 2\n");
        assert_eq!(header.constants.len(), 2);
    }

    #[test]
    fn test_enum_values_in_order() {
        let header = extract("enum Color { RED, GREEN = 2, BLUE };");
        assert_eq!(header.enums.len(), 1);
        assert_eq!(header.enums[0].name, "Color");

        let expected: Vec<ExportEnumValue> = [("RED", ""), ("GREEN", "2"), ("BLUE", "")]
            .iter()
            .map(|(name, value)| ExportEnumValue {
                name: name.to_string(),
                value: value.to_string(),
            })
            .collect();
        assert_eq!(header.enums[0].values, expected);
    }

    #[test]
    fn test_enum_and_struct_typedefs() {
        let header = extract("typedef enum Color ColorT;\ntypedef struct Point PointT;");
        assert_eq!(header.enum_typedefs.len(), 1);
        assert_eq!(header.enum_typedefs[0].original_type, "Color");
        assert_eq!(header.enum_typedefs[0].defined_type, "ColorT");
        assert_eq!(header.struct_typedefs.len(), 1);
        assert_eq!(header.struct_typedefs[0].original_type, "Point");
        assert_eq!(header.struct_typedefs[0].defined_type, "PointT");
    }

    #[test]
    fn test_typedefed_struct_is_exclusive() {
        let header = extract("typedef struct Point { int x; int y; } PointT;");
        assert_eq!(header.typedefed_structs.len(), 1);

        let point = &header.typedefed_structs[0];
        assert_eq!(point.original_type, "Point");
        assert_eq!(point.defined_type, "PointT");
        assert_eq!(point.fields, vec![field("int", "x"), field("int", "y")]);

        assert!(header.structs.is_empty());
        assert!(header.struct_typedefs.is_empty());
    }

    #[test]
    fn test_struct_with_array_and_pointer_fields() {
        let header = extract(
            r#"
struct Packet {
    unsigned_t length;
    char payload[256];
    const char* label;
};
"#,
        );
        assert_eq!(header.structs.len(), 1);
        assert_eq!(
            header.structs[0].fields,
            vec![
                field("unsigned_t", "length"),
                field("char", "payload[256]"),
                field("char*", "label"),
            ]
        );
        assert_eq!(header.structs[0].fields[1].array_size(), Some("256"));
    }

    #[test]
    fn test_function_pointer_typedef() {
        let header = extract("typedef void (*LogCallback)(int level, const char* message);");
        assert_eq!(header.function_pointer_typedefs.len(), 1);

        let callback = &header.function_pointer_typedefs[0];
        assert_eq!(callback.return_type, "void");
        assert_eq!(callback.name, "LogCallback");
        assert_eq!(
            callback.parameters,
            vec![param("int", "level"), param("char*", "message")]
        );
    }

    #[test]
    fn test_comments_are_stripped_by_default() {
        let content = r#"
/* Library entry point */
struct Config {
    int verbose; // 0 or 1
    int retries; /* max attempts */
};
"#;
        let header = extract(content);
        assert_eq!(header.structs.len(), 1);
        assert_eq!(header.structs[0].fields.len(), 2);

        let keep = Grammar::default().keep_comments();
        let raw = CExtractor::new(&keep).extract(content);
        assert!(raw.structs.is_empty());
    }

    #[test]
    fn test_custom_export_marker() {
        let grammar = Grammar::with_export_marker("_API").unwrap();
        let header = CExtractor::new(&grammar)
            .extract("NET_API int net_send(int fd);\nNET_EXPORT int net_recv(int fd);");
        assert_eq!(header.functions.len(), 1);
        assert_eq!(header.functions[0].name, "net_send");
    }

    #[test]
    fn test_full_header() {
        let content = r#"
#ifndef MATHLIB_H
#define MATHLIB_H

#define MATHLIB_VERSION "1.2.0"
#define MATHLIB_MAX_DIM 4

typedef enum Precision PrecisionT;
enum Precision {
    PRECISION_LOW,
    PRECISION_HIGH = 10
};

typedef struct Matrix {
    int rows;
    int cols;
    double data[16];
} MatrixT;

typedef void (*ProgressFn)(int done, int total);

MATHLIB_EXPORT MatrixT* matrix_create(int rows, int cols);
MATHLIB_EXPORT void matrix_free(MatrixT* m);
MATHLIB_EXPORT double matrix_det(const MatrixT* m, PrecisionT precision);

#endif
"#;
        let header = extract(content);

        let names: Vec<&str> = header.functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["matrix_create", "matrix_free", "matrix_det"]);
        assert_eq!(
            header.functions[2].parameters,
            vec![param("MatrixT*", "m"), param("PrecisionT", "precision")]
        );

        let constants: Vec<&str> = header.constants.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(constants, vec!["MATHLIB_VERSION", "MATHLIB_MAX_DIM"]);

        assert_eq!(header.enums.len(), 1);
        assert_eq!(header.enums[0].values.len(), 2);
        assert_eq!(header.enum_typedefs.len(), 1);
        assert_eq!(header.typedefed_structs.len(), 1);
        assert_eq!(header.typedefed_structs[0].fields.len(), 3);
        assert_eq!(header.function_pointer_typedefs.len(), 1);
        assert!(header.structs.is_empty());
        assert!(header.struct_typedefs.is_empty());

        assert!(validate_references(&header).is_empty());
    }
}
