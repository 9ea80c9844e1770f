//! Header Extraction Module
//!
//! Turns C header text into the Export Model.
//!
//! # Architecture
//!
//! The module is organized into several sub-modules:
//! - `base` - Export Model types and capture normalization
//! - `c` - Pattern library, per-kind extraction, struct classification, validation
//! - `manager` - HeaderProcessor public API

pub mod base;
pub mod c;
pub mod manager;

// Re-export the public API
pub use base::{
    ExportConstant, ExportEnum, ExportEnumTypeDef, ExportEnumValue, ExportFunction,
    ExportFunctionPointerTypeDef, ExportParameter, ExportStruct, ExportStructField,
    ExportStructTypeDef, ExportTypeDefedStruct, ProcessedHeader,
};
pub use c::{validate_references, CExtractor, Grammar, GrammarError, UnresolvedReference};
pub use manager::HeaderProcessor;
