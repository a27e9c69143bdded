use std::io;
use std::path::{Path, PathBuf};

use medassist_core::{normalize_disease_name, DiseaseRecord};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed reading disease dataset {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed disease dataset {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    pub records_loaded: usize,
    pub source: Option<PathBuf>,
}

/// Read-only disease dataset. Records keep the order of the source document,
/// which is also the tie-break when two names collide case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DiseaseCatalog {
    #[serde(default)]
    diseases: Vec<DiseaseRecord>,
    #[serde(skip)]
    source: Option<PathBuf>,
}

impl CatalogStats {
    pub fn log(&self) {
        let source = self
            .source
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<inline>".to_string());
        info!(
            path = %source,
            records = self.records_loaded,
            "disease dataset loaded"
        );
    }
}

impl DiseaseCatalog {
    pub fn new(diseases: Vec<DiseaseRecord>) -> Self {
        Self {
            diseases,
            source: None,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json_str(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut catalog = Self::from_json_str(&raw).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        catalog.source = Some(path.to_path_buf());
        Ok(catalog)
    }

    /// Loads the dataset if a path is given, degrading to an empty catalog on
    /// any failure so the assistant stays usable.
    pub fn load_or_empty(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::empty();
        };

        match Self::load(path) {
            Ok(catalog) => {
                catalog.stats().log();
                catalog
            }
            Err(err) if err.is_missing() => {
                warn!(path = %path.display(), "disease dataset not found, continuing with empty catalog");
                Self::empty()
            }
            Err(err) => {
                let cause = std::error::Error::source(&err)
                    .map(ToString::to_string)
                    .unwrap_or_default();
                warn!(
                    path = %path.display(),
                    error = %err,
                    cause = %cause,
                    "disease dataset unusable, continuing with empty catalog"
                );
                Self::empty()
            }
        }
    }

    /// Exact case-insensitive match on the record name; first match wins.
    pub fn lookup(&self, name: &str) -> Option<&DiseaseRecord> {
        let needle = normalize_disease_name(name);
        self.diseases.iter().find(|record| record.matches(&needle))
    }

    pub fn records(&self) -> &[DiseaseRecord] {
        &self.diseases
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.diseases.iter().map(|record| record.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.diseases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diseases.is_empty()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            records_loaded: self.diseases.len(),
            source: self.source.clone(),
        }
    }
}
