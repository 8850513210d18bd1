//! Question catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the question catalog comes from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// YAML file with the questions; the standard catalog is used when unset
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.path {
            Some(path) if path.as_os_str().is_empty() => {
                Err(ValidationError::MissingRequired("catalog.path"))
            }
            _ => Ok(()),
        }
    }
}
