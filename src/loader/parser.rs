//! Metadata file parser
//!
//! Reads list metadata from YAML or JSON. Degenerate values are accepted and
//! logged; interpreting them is left to whoever renders the pagination.

use crate::error::{Error, Result};
use crate::pagination::ListMetadata;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Load list metadata from a YAML or JSON file
///
/// # Examples
///
/// ```ignore
/// let metadata = load_metadata("./list.yaml")?;
/// let pagination = Pagination::from_metadata(&metadata);
/// ```
pub fn load_metadata(path: impl AsRef<Path>) -> Result<ListMetadata> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read metadata file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;

    debug!("Loaded metadata file {}", path.display());
    load_metadata_from_str(&content)
}

/// Load list metadata from a YAML string
///
/// JSON is a subset of YAML, so inline JSON is accepted as well.
pub fn load_metadata_from_str(content: &str) -> Result<ListMetadata> {
    let metadata: ListMetadata = serde_yaml::from_str(content)?;

    inspect_metadata(&metadata);
    Ok(metadata)
}

/// Load list metadata from a JSON string
pub fn load_metadata_from_json(json: &str) -> Result<ListMetadata> {
    let metadata: ListMetadata = serde_json::from_str(json)?;
    inspect_metadata(&metadata);
    Ok(metadata)
}

/// Log metadata that will produce a degenerate page count
fn inspect_metadata(metadata: &ListMetadata) {
    if metadata.total < 0 {
        warn!("List metadata has a negative total: {}", metadata.total);
    }
    if metadata.per_page < 0 {
        warn!("List metadata has a negative page size: {}", metadata.per_page);
    } else if metadata.per_page == 0 && metadata.total != 0 {
        warn!("List metadata has a zero page size with {} items", metadata.total);
    }
}
