//! Declaration pattern library
//!
//! A [`Grammar`] bundles one compiled regex per declaration shape. It is an
//! explicit value handed to the extractor, so callers can run several export
//! marker conventions side by side without global state.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Export marker suffix used when none is configured (`MYLIB_EXPORT`)
pub const DEFAULT_EXPORT_MARKER: &str = "_EXPORT";

/// Shared grammar for the default export marker
pub static DEFAULT_GRAMMAR: LazyLock<Grammar> = LazyLock::new(Grammar::default);

// Body character classes. Braces are excluded so a body never spans two
// declarations.
const PARAM_LIST: &str = r"[\w*,\[\]\s]*";
const ENUM_BODY: &str = r"[\w =,\-\s]+";
const STRUCT_BODY: &str = r"[\w =,;*\[\]\s]+";

static PARAMETER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:const )?([\w*]+) ([\w*\[\]]+)").unwrap());

static CONSTANT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"#define (\w+)[ \t]+("(?:[^"\\\n]|\\.)*"|\w+)"#).unwrap());

static FUNCTION_POINTER_TYPEDEF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"typedef ((?:const )?\w+\**)\s*\(\*(\w+)\)\(({PARAM_LIST})\)"
    ))
    .unwrap()
});

static ENUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"enum (\w+)\s*\{{({ENUM_BODY})\}};")).unwrap());

static ENUM_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\s*(?:=\s*(-?\s*\w+))?").unwrap());

static ENUM_TYPEDEF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"typedef enum (\w+) (\w+);").unwrap());

static STRUCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"struct (\w+)\s*\{{({STRUCT_BODY})\}};")).unwrap());

static STRUCT_TYPEDEF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"typedef struct (\w+) (\w+);").unwrap());

static TYPEDEFED_STRUCT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"typedef struct(?:\s+(\w+))?\s*\{{({STRUCT_BODY})\}}\s*(\w+);"
    ))
    .unwrap()
});

static STRUCT_FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:const )?(\w+\**)\s+(\**[\w\[\]]+);").unwrap());

static FIXED_SIZE_FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\**\w+)\[(\w+)\]$").unwrap());

#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("export marker must not be empty")]
    EmptyExportMarker,

    #[error("export marker '{0}' must contain only identifier characters")]
    InvalidExportMarker(String),

    #[error("failed to compile declaration pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// The set of declaration matchers used for one extraction run
#[derive(Debug, Clone)]
pub struct Grammar {
    export_marker: String,
    /// Remove C comments before matching
    pub strip_comments: bool,
    pub(super) function: Regex,
    pub(super) parameter: Regex,
    pub(super) constant: Regex,
    pub(super) function_pointer_typedef: Regex,
    pub(super) enum_decl: Regex,
    pub(super) enum_value: Regex,
    pub(super) enum_typedef: Regex,
    pub(super) struct_decl: Regex,
    pub(super) struct_typedef: Regex,
    pub(super) typedefed_struct: Regex,
    pub(super) struct_field: Regex,
    pub(super) fixed_size_field: Regex,
}

impl Default for Grammar {
    fn default() -> Self {
        // The default marker is a valid identifier fragment, so this cannot fail
        Self::with_export_marker(DEFAULT_EXPORT_MARKER).unwrap()
    }
}

impl Grammar {
    /// Build a grammar whose function pattern requires `<word><marker>` before
    /// the return type, e.g. `_API` matches `MYLIB_API int f(void);`
    pub fn with_export_marker(marker: &str) -> Result<Self, GrammarError> {
        if marker.is_empty() {
            return Err(GrammarError::EmptyExportMarker);
        }
        if !marker.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(GrammarError::InvalidExportMarker(marker.to_string()));
        }

        let function = Regex::new(&format!(
            r"\w+{} ((?:const )?\w+\**) (\w+)\(({PARAM_LIST})\);",
            regex::escape(marker)
        ))?;

        Ok(Self {
            export_marker: marker.to_string(),
            strip_comments: true,
            function,
            parameter: PARAMETER_RE.clone(),
            constant: CONSTANT_RE.clone(),
            function_pointer_typedef: FUNCTION_POINTER_TYPEDEF_RE.clone(),
            enum_decl: ENUM_RE.clone(),
            enum_value: ENUM_VALUE_RE.clone(),
            enum_typedef: ENUM_TYPEDEF_RE.clone(),
            struct_decl: STRUCT_RE.clone(),
            struct_typedef: STRUCT_TYPEDEF_RE.clone(),
            typedefed_struct: TYPEDEFED_STRUCT_RE.clone(),
            struct_field: STRUCT_FIELD_RE.clone(),
            fixed_size_field: FIXED_SIZE_FIELD_RE.clone(),
        })
    }

    /// Keep comments in the text the patterns see
    pub fn keep_comments(mut self) -> Self {
        self.strip_comments = false;
        self
    }

    pub fn export_marker(&self) -> &str {
        &self.export_marker
    }
}
