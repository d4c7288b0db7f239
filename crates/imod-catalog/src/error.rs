//! Error types for catalog construction and persistence

use crate::category::Category;
use crate::location::Location;
use std::path::PathBuf;

/// Errors raised while loading, saving, or cross-checking catalogs
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The two branches disagree on the set of header locations for a
    /// category. Fatal: the merge run must stop before emitting
    /// anything for that category.
    #[error(
        "location sets differ for {category}: only in main {main_only:?}, only in docking {docking_only:?}"
    )]
    SchemaMismatch {
        /// Category whose location keys disagree
        category: Category,
        /// Locations present in the main catalog only
        main_only: Vec<Location>,
        /// Locations present in the docking catalog only
        docking_only: Vec<Location>,
    },

    /// IO error touching a catalog file
    #[error("io error on {path}: {source}")]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A catalog file holds malformed JSON
    #[error("malformed catalog json in {path}: {source}")]
    Json {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create JSON error for path
    pub fn json_error(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
