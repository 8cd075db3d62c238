//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use formula_core::model::{CatalogError, FormulaError};

/// Errors emitted while loading a formula catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogLoadError {
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Formula(#[from] FormulaError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
