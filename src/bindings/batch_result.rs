// PyBatchHeaderResult - Container for file I/O + extraction results
//
// This struct returns everything Python needs from a single header:
// - Content hash (computed by Rust)
// - Extraction results
// - Error information (if the file could not be read)
//
// File I/O happens in Rust's parallel worker pool instead of Python's
// single-threaded event loop.

use super::PyProcessedHeader;
use pyo3::prelude::*;

/// Result of processing a single header in batch extraction.
///
/// - path: Header path (same as input)
/// - hash: Blake3 hash of content (empty if read failed)
/// - size: Content length in bytes
/// - header: Extraction results (None on error)
/// - error: Error message if the read failed
#[pyclass(name = "BatchHeaderResult")]
pub struct PyBatchHeaderResult {
    #[pyo3(get)]
    pub path: String,

    #[pyo3(get)]
    pub hash: String,

    #[pyo3(get)]
    pub size: usize,

    // No #[pyo3(get)] because PyProcessedHeader doesn't implement Clone
    pub header: Option<PyProcessedHeader>,

    #[pyo3(get)]
    pub error: Option<String>,
}

impl PyBatchHeaderResult {
    /// Create a successful result with extraction data
    pub fn success(path: String, hash: String, size: usize, header: PyProcessedHeader) -> Self {
        PyBatchHeaderResult {
            path,
            hash,
            size,
            header: Some(header),
            error: None,
        }
    }

    /// Create a failed result with error message
    pub fn error(path: String, error: String) -> Self {
        PyBatchHeaderResult {
            path,
            hash: String::new(),
            size: 0,
            header: None,
            error: Some(error),
        }
    }
}

#[pymethods]
impl PyBatchHeaderResult {
    #[getter]
    fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Get extraction results (None on error)
    ///
    /// Note: This takes ownership of the header field. Calling this
    /// multiple times will return None after the first call.
    #[getter]
    fn header(&mut self) -> Option<PyProcessedHeader> {
        self.header.take()
    }

    fn __repr__(&self) -> String {
        if let Some(ref err) = self.error {
            format!("BatchHeaderResult(path={:?}, error={:?})", self.path, err)
        } else {
            format!(
                "BatchHeaderResult(path={:?}, hash={:?}, has_header={})",
                self.path,
                &self.hash[..8.min(self.hash.len())],
                self.header.is_some()
            )
        }
    }
}
