// Utilities Module
//
// File helpers used by the Python layer and batch processing.

/// File utilities
pub mod file_utils {
    use anyhow::{Context, Result};
    use std::fs;
    use std::path::Path;

    /// Read a header file as UTF-8 text
    pub fn read_header(path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read header file: {}", path.display()))
    }

    /// Blake3 hex digest of header content, for change detection by callers
    pub fn content_hash(content: &str) -> String {
        blake3::hash(content.as_bytes()).to_hex().to_string()
    }

}
