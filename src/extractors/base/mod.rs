// Export Model and shared extraction utilities
//
// - types.rs: All model data structures (ExportFunction, ExportStruct, ProcessedHeader, etc.)
// - normalize.rs: Capture normalization and comment stripping

pub mod normalize;
pub mod types;

// Re-export key types for external use
pub use normalize::{normalize_capture, strip_comments};
pub use types::{
    ExportConstant, ExportEnum, ExportEnumTypeDef, ExportEnumValue, ExportFunction,
    ExportFunctionPointerTypeDef, ExportParameter, ExportStruct, ExportStructField,
    ExportStructTypeDef, ExportTypeDefedStruct, ProcessedHeader,
};
