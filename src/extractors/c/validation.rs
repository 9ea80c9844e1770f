//! Cross-reference validation of an extracted header
//!
//! Extraction never checks that a type named by a function, parameter or
//! field is declared anywhere. This pass resolves every referenced type name
//! against C builtins and the header's own declarations and reports the rest.

use crate::extractors::base::{ExportParameter, ExportStructField, ProcessedHeader};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Type names that need no declaration in the header
const BUILTIN_TYPES: &[&str] = &[
    "void", "char", "short", "int", "long", "float", "double", "signed", "unsigned", "bool",
    "_Bool", "size_t", "ssize_t", "ptrdiff_t", "intptr_t", "uintptr_t", "wchar_t", "int8_t",
    "int16_t", "int32_t", "int64_t", "uint8_t", "uint16_t", "uint32_t", "uint64_t",
];

/// A type name used by the header but declared nowhere in it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnresolvedReference {
    /// Where the reference occurs, e.g. `function add` or `struct Point.next`
    pub location: String,
    /// The bare type name (qualifiers and pointer stars removed)
    pub type_name: String,
}

/// Strip `const` and pointer stars from a type string
fn bare_type_name(type_string: &str) -> &str {
    let trimmed = type_string.trim();
    let trimmed = trimmed.strip_prefix("const ").unwrap_or(trimmed);
    trimmed.trim_end_matches('*').trim()
}

fn check_params(check: &mut impl FnMut(String, &str), owner: &str, params: &[ExportParameter]) {
    for param in params {
        check(format!("{owner}({})", param.name), &param.param_type);
    }
}

fn check_fields(check: &mut impl FnMut(String, &str), owner: &str, fields: &[ExportStructField]) {
    for field in fields {
        check(format!("{owner}.{}", field.name), &field.field_type);
    }
}

/// Report every referenced type name that does not resolve.
///
/// Known names are the builtins plus every struct, enum, typedef alias and
/// function-pointer typedef declared in `header`. Each unresolved reference
/// is also logged as a warning.
pub fn validate_references(header: &ProcessedHeader) -> Vec<UnresolvedReference> {
    let mut known: HashSet<&str> = BUILTIN_TYPES.iter().copied().collect();
    known.extend(header.structs.iter().map(|s| s.name.as_str()));
    known.extend(header.enums.iter().map(|e| e.name.as_str()));
    known.extend(header.enum_typedefs.iter().map(|t| t.defined_type.as_str()));
    known.extend(header.struct_typedefs.iter().map(|t| t.defined_type.as_str()));
    known.extend(header.function_pointer_typedefs.iter().map(|t| t.name.as_str()));
    for typedefed in &header.typedefed_structs {
        known.insert(typedefed.defined_type.as_str());
        if !typedefed.original_type.is_empty() {
            known.insert(typedefed.original_type.as_str());
        }
    }

    let mut unresolved = Vec::new();
    let mut check = |location: String, type_string: &str| {
        let name = bare_type_name(type_string);
        if !name.is_empty() && !known.contains(name) {
            unresolved.push(UnresolvedReference {
                location,
                type_name: name.to_string(),
            });
        }
    };

    for function in &header.functions {
        let owner = format!("function {}", function.name);
        check(owner.clone(), &function.return_type);
        check_params(&mut check, &owner, &function.parameters);
    }
    for typedef in &header.function_pointer_typedefs {
        let owner = format!("function pointer {}", typedef.name);
        check(owner.clone(), &typedef.return_type);
        check_params(&mut check, &owner, &typedef.parameters);
    }
    for declared in &header.structs {
        check_fields(&mut check, &format!("struct {}", declared.name), &declared.fields);
    }
    for typedefed in &header.typedefed_structs {
        check_fields(
            &mut check,
            &format!("struct {}", typedefed.defined_type),
            &typedefed.fields,
        );
    }
    for typedef in &header.enum_typedefs {
        check(format!("typedef {}", typedef.defined_type), &typedef.original_type);
    }
    for typedef in &header.struct_typedefs {
        check(format!("typedef {}", typedef.defined_type), &typedef.original_type);
    }

    for reference in &unresolved {
        tracing::warn!(
            "Unresolved type '{}' referenced by {}",
            reference.type_name,
            reference.location
        );
    }

    unresolved
}
