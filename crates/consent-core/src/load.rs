//! Loading the response document.

use consent_common::{Error, ResponseDocument, Result};
use std::path::Path;

/// Read and parse the response document at `path`.
///
/// No partial load: any read or parse failure fails the whole document.
pub fn load_document(path: &Path) -> Result<ResponseDocument> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(path, &content)
}

/// Parse document text; `path` is only used in error messages.
pub fn parse_document(path: &Path, content: &str) -> Result<ResponseDocument> {
    serde_json::from_str(content).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}
