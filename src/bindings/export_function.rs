// PyExportFunction - PyO3 wrapper for ExportFunction
//
// This wrapper allows Python code to read an extracted function declaration.

use crate::extractors::base::ExportFunction;
use pyo3::prelude::*;

/// Python-accessible ExportFunction wrapper
///
/// All fields are read-only from Python.
#[pyclass(name = "ExportFunction")]
pub struct PyExportFunction {
    inner: ExportFunction,
}

impl PyExportFunction {
    pub fn from_function(function: ExportFunction) -> Self {
        PyExportFunction { inner: function }
    }
}

#[pymethods]
impl PyExportFunction {
    #[getter]
    fn name(&self) -> String {
        self.inner.name.clone()
    }

    #[getter]
    fn return_type(&self) -> String {
        self.inner.return_type.clone()
    }

    /// Parameters as (type, name) tuples in declaration order
    #[getter]
    fn parameters(&self) -> Vec<(String, String)> {
        self.inner
            .parameters
            .iter()
            .map(|p| (p.param_type.clone(), p.name.clone()))
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "ExportFunction(name='{}', return_type='{}', parameters={})",
            self.inner.name,
            self.inner.return_type,
            self.inner.parameters.len()
        )
    }
}
