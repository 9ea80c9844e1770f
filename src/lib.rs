// Interop Core - C header export extraction and DllImport binding generation
//
// Rust does the header extraction and code generation; the header picker UI
// (Python) drives it through the optional PyO3 extension module.

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod codegen;
pub mod extractors;
pub mod utils;

// PyO3 bindings layer
#[cfg(feature = "python")]
pub mod bindings;

pub use codegen::BindingGenerator;
pub use extractors::{HeaderProcessor, ProcessedHeader};

/// Interop Core Python module
///
/// Provides header export extraction and DllImport binding generation.
#[cfg(feature = "python")]
#[pymodule]
fn interop_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    // Add Python functions
    m.add_function(wrap_pyfunction!(bindings::process_header, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::process_header_file, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::process_headers_batch, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::generate_bindings, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::validate_header, m)?)?;

    // Add Python classes
    m.add_class::<bindings::PyProcessedHeader>()?;
    m.add_class::<bindings::PyExportFunction>()?;
    m.add_class::<bindings::PyBatchHeaderResult>()?;
    m.add_class::<bindings::PyUnresolvedReference>()?;

    Ok(())
}
