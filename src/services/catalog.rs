use std::collections::HashSet;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::models::Posting;

/// Errors that can occur while loading the posting catalog
///
/// All of these are fatal at startup: the engine does not attempt partial
/// operation without its catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate posting id '{0}' in catalog")]
    DuplicateId(String),
}

/// In-memory posting catalog
///
/// Loaded once at startup and read-only for the lifetime of the process,
/// so it can be shared across workers behind an Arc without locking.
#[derive(Debug)]
pub struct CatalogStore {
    postings: Vec<Posting>,
}

impl CatalogStore {
    /// Load the catalog from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path_display = path.as_ref().display().to_string();

        let raw = fs::read_to_string(&path).map_err(|source| CatalogError::Io {
            path: path_display.clone(),
            source,
        })?;

        let postings: Vec<Posting> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path_display,
                source,
            })?;

        Self::from_postings(postings)
    }

    /// Build a catalog from already-deserialized postings
    ///
    /// Rejects duplicate ids: id uniqueness is a catalog invariant.
    pub fn from_postings(postings: Vec<Posting>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for posting in &postings {
            if !seen.insert(posting.id.as_str()) {
                return Err(CatalogError::DuplicateId(posting.id.clone()));
            }
        }

        Ok(Self { postings })
    }

    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }

    pub fn get(&self, id: &str) -> Option<&Posting> {
        self.postings.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
