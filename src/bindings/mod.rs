// PyO3 Bindings Module
//
// This module provides Python bindings for header extraction and binding generation.
// It wraps the Export Model types in PyO3-compatible types.

mod api;
mod batch_result;
mod export_function;
mod processed_header;
mod unresolved_reference;

// Re-export for lib.rs
pub use api::{
    generate_bindings, process_header, process_header_file, process_headers_batch,
    validate_header,
};
pub use batch_result::PyBatchHeaderResult;
pub use export_function::PyExportFunction;
pub use processed_header::PyProcessedHeader;
pub use unresolved_reference::PyUnresolvedReference;
