//! Catalog source abstraction.
//!
//! Fetching content is external I/O; the core only sees the loaded value.
//! The source is consulted exactly once at startup and the resulting
//! [`Catalog`] is shared read-only for the process lifetime.

use std::path::PathBuf;

use async_trait::async_trait;
use lingua_core::error::DomainError;
use serde::Deserialize;
use tracing::info;

use crate::catalog::Catalog;
use crate::model::LearningPath;

/// Where the catalog comes from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Loads and validates the full catalog.
    async fn load(&self) -> Result<Catalog, DomainError>;
}

/// On-disk representation of the catalog.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    paths: Vec<LearningPath>,
}

/// Loads the catalog from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Creates a source reading from the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonFileSource {
    async fn load(&self) -> Result<Catalog, DomainError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            DomainError::Infrastructure(format!(
                "failed to read catalog file {}: {e}",
                self.path.display()
            ))
        })?;

        let file: CatalogFile = serde_json::from_slice(&bytes).map_err(|e| {
            DomainError::Infrastructure(format!(
                "failed to parse catalog file {}: {e}",
                self.path.display()
            ))
        })?;

        let catalog = Catalog::new(file.paths)?;
        info!(
            paths = catalog.paths().len(),
            nodes = catalog.node_count(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}
