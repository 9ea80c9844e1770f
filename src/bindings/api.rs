// API Functions - PyO3-exposed functions for Python
//
// These functions provide the public API for header extraction and
// DllImport binding generation.

use super::{PyBatchHeaderResult, PyProcessedHeader, PyUnresolvedReference};
use crate::codegen::BindingGenerator;
use crate::extractors::c::validate_references;
use crate::extractors::HeaderProcessor;
use crate::utils::file_utils;
use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use std::path::Path;

/// Build a processor for an optional export marker override
fn processor_for(export_marker: Option<&str>) -> PyResult<HeaderProcessor<'static>> {
    match export_marker {
        Some(marker) => HeaderProcessor::with_export_marker(marker)
            .map_err(|e| PyValueError::new_err(format!("Invalid export marker: {}", e))),
        None => Ok(HeaderProcessor::new()),
    }
}

/// Extract the export model from header text
///
/// Args:
///     content (str): Full header source text
///     export_marker (str, optional): Export macro suffix, defaults to "_EXPORT"
///
/// Returns:
///     ProcessedHeader: Functions, constants, enums, structs and typedefs
///
/// Raises:
///     ValueError: If export_marker is empty or not an identifier fragment
#[pyfunction]
#[pyo3(signature = (content, export_marker=None))]
pub fn process_header(content: &str, export_marker: Option<&str>) -> PyResult<PyProcessedHeader> {
    let processor = processor_for(export_marker)?;
    Ok(PyProcessedHeader::from_processed_header(
        processor.process(content),
    ))
}

/// Read a header file and extract its export model
///
/// Args:
///     path (str): Path to the header file
///     export_marker (str, optional): Export macro suffix, defaults to "_EXPORT"
///
/// Raises:
///     IOError: If the file cannot be read as UTF-8 text
///     ValueError: If export_marker is invalid
#[pyfunction]
#[pyo3(signature = (path, export_marker=None))]
pub fn process_header_file(path: &str, export_marker: Option<&str>) -> PyResult<PyProcessedHeader> {
    let processor = processor_for(export_marker)?;
    let content =
        file_utils::read_header(Path::new(path)).map_err(|e| PyIOError::new_err(format!("{:#}", e)))?;

    Ok(PyProcessedHeader::from_processed_header(
        processor.process(&content),
    ))
}

/// Read and extract multiple header files in parallel
///
/// Releases the GIL while Rayon's worker pool reads, hashes and extracts
/// every file. A file that cannot be read yields a result with `error` set
/// and does not fail the batch.
///
/// Args:
///     paths (list[str]): Header file paths
///     export_marker (str, optional): Export macro suffix, defaults to "_EXPORT"
///
/// Returns:
///     list[BatchHeaderResult]: Results in the same order as the input paths
#[pyfunction]
#[pyo3(signature = (paths, export_marker=None))]
pub fn process_headers_batch(
    py: Python<'_>,
    paths: Vec<String>,
    export_marker: Option<&str>,
) -> PyResult<Vec<PyBatchHeaderResult>> {
    use rayon::prelude::*;

    let processor = processor_for(export_marker)?;

    // Release GIL for parallel processing
    let results = py.detach(move || {
        paths
            .into_par_iter()
            .map(|path| match file_utils::read_header(Path::new(&path)) {
                Ok(content) => {
                    let hash = file_utils::content_hash(&content);
                    let header = processor.process(&content);
                    PyBatchHeaderResult::success(
                        path,
                        hash,
                        content.len(),
                        PyProcessedHeader::from_processed_header(header),
                    )
                }
                Err(e) => {
                    tracing::warn!("Skipping unreadable header {}: {:#}", path, e);
                    PyBatchHeaderResult::error(path, format!("{:#}", e))
                }
            })
            .collect()
    });

    Ok(results)
}

/// Render DllImport declarations for the selected functions
///
/// Args:
///     header (ProcessedHeader): Result of process_header
///     function_names (list[str]): Functions to emit, in output order;
///         unknown names are skipped
///
/// Returns:
///     str: Two lines per function, joined with newlines
#[pyfunction]
#[pyo3(signature = (header, function_names))]
pub fn generate_bindings(header: PyRef<'_, PyProcessedHeader>, function_names: Vec<String>) -> String {
    let selected = header.inner().select_functions(&function_names);
    BindingGenerator::new().render(selected)
}

/// List type names the header references but never declares
#[pyfunction]
pub fn validate_header(header: PyRef<'_, PyProcessedHeader>) -> Vec<PyUnresolvedReference> {
    validate_references(header.inner())
        .into_iter()
        .map(PyUnresolvedReference::from)
        .collect()
}
