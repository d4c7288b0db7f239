//! Error types for the extraction stage

use imod_catalog::CatalogError;
use std::path::PathBuf;

/// Errors raised while turning generator metadata into catalogs.
///
/// Every variant is fatal: extraction is an offline batch transform
/// and any failure is a data-consistency problem, not a transient
/// condition.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// A symbol could not be attributed to any candidate header
    #[error("symbol {0} not found in any header file")]
    UnresolvedSymbol(String),

    /// A backend argument's type text has no leading type identifier
    #[error("cannot reduce type text to a bare identifier: {text:?}")]
    MalformedTypeSignature {
        /// The offending type text as spelled in the metadata
        text: String,
    },

    /// IO error reading a header or metadata file
    #[error("io error reading {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A metadata file holds malformed JSON
    #[error("malformed metadata json in {path}: {source}")]
    Json {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// Failure persisting the extracted catalogs
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl ExtractError {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_symbol_display() {
        let err = ExtractError::UnresolvedSymbol("ImMystery".to_string());
        assert_eq!(err.to_string(), "symbol ImMystery not found in any header file");
    }

    #[test]
    fn malformed_type_display_quotes_text() {
        let err = ExtractError::MalformedTypeSignature {
            text: "...".to_string(),
        };
        assert!(err.to_string().contains("\"...\""));
    }
}
