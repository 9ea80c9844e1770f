// PyUnresolvedReference - PyO3 wrapper for a validation warning

use crate::extractors::c::UnresolvedReference;
use pyo3::prelude::*;

/// A type name the header uses but never declares
#[pyclass(name = "UnresolvedReference")]
pub struct PyUnresolvedReference {
    #[pyo3(get)]
    pub location: String,

    #[pyo3(get)]
    pub type_name: String,
}

impl From<UnresolvedReference> for PyUnresolvedReference {
    fn from(reference: UnresolvedReference) -> Self {
        PyUnresolvedReference {
            location: reference.location,
            type_name: reference.type_name,
        }
    }
}

#[pymethods]
impl PyUnresolvedReference {
    fn __repr__(&self) -> String {
        format!(
            "UnresolvedReference(location={:?}, type_name={:?})",
            self.location, self.type_name
        )
    }
}
