// PyProcessedHeader - PyO3 wrapper for ProcessedHeader
//
// Container for everything extracted from one header. Functions get a typed
// wrapper because the picker UI selects them; the other sequences are exposed
// as plain tuples or through the JSON form.

use super::PyExportFunction;
use crate::extractors::base::ProcessedHeader;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Python-accessible ProcessedHeader wrapper
#[pyclass(name = "ProcessedHeader")]
pub struct PyProcessedHeader {
    inner: ProcessedHeader,
}

impl PyProcessedHeader {
    pub fn from_processed_header(header: ProcessedHeader) -> Self {
        PyProcessedHeader { inner: header }
    }

    pub fn inner(&self) -> &ProcessedHeader {
        &self.inner
    }
}

#[pymethods]
impl PyProcessedHeader {
    #[getter]
    fn functions(&self) -> Vec<PyExportFunction> {
        self.inner
            .functions
            .iter()
            .map(|f| PyExportFunction::from_function(f.clone()))
            .collect()
    }

    #[getter]
    fn function_names(&self) -> Vec<String> {
        self.inner.functions.iter().map(|f| f.name.clone()).collect()
    }

    /// Constants as (name, value) tuples; string values keep their quotes
    #[getter]
    fn constants(&self) -> Vec<(String, String)> {
        self.inner
            .constants
            .iter()
            .map(|c| (c.name.clone(), c.value.clone()))
            .collect()
    }

    #[getter]
    fn enum_names(&self) -> Vec<String> {
        self.inner.enums.iter().map(|e| e.name.clone()).collect()
    }

    #[getter]
    fn struct_names(&self) -> Vec<String> {
        self.inner
            .structs
            .iter()
            .map(|s| s.name.clone())
            .chain(
                self.inner
                    .typedefed_structs
                    .iter()
                    .map(|s| s.defined_type.clone()),
            )
            .collect()
    }

    #[getter]
    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Serialize the full model as JSON
    fn to_json(&self) -> PyResult<String> {
        self.inner
            .to_json()
            .map_err(|e| PyValueError::new_err(format!("Serialization failed: {}", e)))
    }

    /// Rebuild a header from its JSON form
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        ProcessedHeader::from_json(json)
            .map(Self::from_processed_header)
            .map_err(|e| PyValueError::new_err(format!("Invalid header JSON: {}", e)))
    }

    fn __len__(&self) -> usize {
        self.inner.total_len()
    }

    fn __repr__(&self) -> String {
        format!(
            "ProcessedHeader(functions={}, constants={}, enums={}, structs={})",
            self.inner.functions.len(),
            self.inner.constants.len(),
            self.inner.enums.len(),
            self.inner.structs.len() + self.inner.typedefed_structs.len()
        )
    }
}
