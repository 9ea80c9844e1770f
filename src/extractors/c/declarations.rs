//! Per-kind declaration extraction
//!
//! Each function runs one pattern over the whole header and maps every match
//! to a model entry. Struct shapes are handled in `structs`, which needs to
//! coordinate between patterns.

use crate::extractors::base::{
    normalize_capture, ExportConstant, ExportEnum, ExportEnumTypeDef, ExportEnumValue,
    ExportFunction, ExportFunctionPointerTypeDef, ExportParameter, ExportStructField,
};
use regex::{Captures, Regex};

use super::patterns::Grammar;

/// Normalized text of capture group `index`, empty when the group did not take part
pub(super) fn group(caps: &Captures<'_>, index: usize) -> String {
    caps.get(index)
        .map(|m| normalize_capture(m.as_str()))
        .unwrap_or_default()
}

/// All matches of `regex` in `input`, each as its normalized capture groups
///
/// Index 0 is the whole match, as with `Captures`.
pub(super) fn matches(regex: &Regex, input: &str) -> Vec<Vec<String>> {
    regex
        .captures_iter(input)
        .map(|caps| (0..caps.len()).map(|i| group(&caps, i)).collect())
        .collect()
}

pub(super) fn extract_functions(grammar: &Grammar, input: &str) -> Vec<ExportFunction> {
    matches(&grammar.function, input)
        .into_iter()
        .map(|m| ExportFunction {
            return_type: m[1].clone(),
            name: m[2].clone(),
            parameters: extract_parameters(grammar, &m[3]),
        })
        .collect()
}

/// Split a normalized parameter list into `type name` pairs.
///
/// Commas are not validated; whatever pairs match left to right are kept.
pub(super) fn extract_parameters(grammar: &Grammar, list: &str) -> Vec<ExportParameter> {
    matches(&grammar.parameter, list)
        .into_iter()
        .map(|m| ExportParameter {
            param_type: m[1].clone(),
            name: m[2].clone(),
        })
        .collect()
}

pub(super) fn extract_constants(grammar: &Grammar, input: &str) -> Vec<ExportConstant> {
    matches(&grammar.constant, input)
        .into_iter()
        .map(|m| ExportConstant {
            name: m[1].clone(),
            value: m[2].clone(),
        })
        .collect()
}

pub(super) fn extract_function_pointer_typedefs(
    grammar: &Grammar,
    input: &str,
) -> Vec<ExportFunctionPointerTypeDef> {
    matches(&grammar.function_pointer_typedef, input)
        .into_iter()
        .map(|m| ExportFunctionPointerTypeDef {
            return_type: m[1].clone(),
            name: m[2].clone(),
            parameters: extract_parameters(grammar, &m[3]),
        })
        .collect()
}

pub(super) fn extract_enums(grammar: &Grammar, input: &str) -> Vec<ExportEnum> {
    matches(&grammar.enum_decl, input)
        .into_iter()
        .map(|m| ExportEnum {
            name: m[1].clone(),
            values: extract_enum_values(grammar, &m[2]),
        })
        .collect()
}

/// Split a normalized enum body into enumerators.
///
/// A signed initializer written with a gap (`- 1`) is stored without it.
fn extract_enum_values(grammar: &Grammar, body: &str) -> Vec<ExportEnumValue> {
    matches(&grammar.enum_value, body)
        .into_iter()
        .map(|m| ExportEnumValue {
            name: m[1].clone(),
            value: m[2].split_whitespace().collect(),
        })
        .collect()
}

pub(super) fn extract_enum_typedefs(grammar: &Grammar, input: &str) -> Vec<ExportEnumTypeDef> {
    matches(&grammar.enum_typedef, input)
        .into_iter()
        .map(|m| ExportEnumTypeDef {
            original_type: m[1].clone(),
            defined_type: m[2].clone(),
        })
        .collect()
}

/// Split a normalized struct body into fields.
///
/// A bracketed name must be a single fixed-size array (`buf[16]`); anything
/// else with brackets (`grid[4][4]`, `tail[]`) is dropped.
pub(super) fn extract_struct_fields(grammar: &Grammar, body: &str) -> Vec<ExportStructField> {
    matches(&grammar.struct_field, body)
        .into_iter()
        .filter(|m| !m[2].contains('[') || grammar.fixed_size_field.is_match(&m[2]))
        .map(|m| ExportStructField {
            field_type: m[1].clone(),
            name: m[2].clone(),
        })
        .collect()
}
