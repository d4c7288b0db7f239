//! Error types for the merge stage

use imod_catalog::CatalogError;
use std::path::PathBuf;

/// Errors raised while reconciling catalogs or writing units.
///
/// All fatal; the run has no partial-success mode. A failure while a
/// later category loads leaves earlier passes' files on disk, the run
/// is not transactional across categories.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// Catalog loading or cross-branch consistency failure
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// IO error writing an interface unit
    #[error("io error writing {path}: {source}")]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl MergeError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imod_catalog::Category;

    #[test]
    fn schema_mismatch_passes_through() {
        let inner = CatalogError::SchemaMismatch {
            category: Category::Functions,
            main_only: vec![],
            docking_only: vec![],
        };
        let err: MergeError = inner.into();
        assert!(err.to_string().contains("location sets differ"));
    }
}
