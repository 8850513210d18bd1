//! YAML Question Catalog Adapter
//!
//! Reads a question catalog from a YAML file so deployments can replace the
//! standard questions without a rebuild.
//!
//! ```yaml
//! - id: q1
//!   text: Do you have any known allergies?
//!   type: yesno
//! - id: q3
//!   text: Describe your symptoms briefly.
//!   type: text
//! ```

use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

use crate::domain::consultation::{Question, QuestionCatalog};
use crate::domain::foundation::ValidationError;

/// Errors raised while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("Failed to read catalog file {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    #[error("Invalid catalog: {0}")]
    Invalid(#[from] ValidationError),
}

/// Parses a catalog from YAML text.
pub fn parse_catalog(yaml: &str) -> Result<QuestionCatalog, CatalogLoadError> {
    let questions: Vec<Question> =
        serde_yaml::from_str(yaml).map_err(|e| CatalogLoadError::Parse(e.to_string()))?;
    Ok(QuestionCatalog::new(questions)?)
}

/// Reads and parses a catalog file.
pub async fn load_catalog(path: impl AsRef<Path>) -> Result<QuestionCatalog, CatalogLoadError> {
    let path = path.as_ref();
    let yaml = fs::read_to_string(path)
        .await
        .map_err(|e| CatalogLoadError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let catalog = parse_catalog(&yaml)?;
    tracing::debug!(path = %path.display(), questions = catalog.len(), "Loaded question catalog");
    Ok(catalog)
}
