//! Header-substring location attribution
//!
//! The generator records locations for enums, structs, and functions,
//! but not for templated structs or type aliases. Those are attributed
//! by searching the raw header texts in priority order and taking the
//! first header that mentions the symbol.

use crate::error::ExtractError;
use crate::tables::CANDIDATE_HEADERS;
use imod_catalog::Location;
use std::path::Path;

/// The candidate headers' raw texts, in attribution priority order
#[derive(Debug)]
pub struct HeaderSet {
    entries: Vec<(Location, String)>,
}

impl HeaderSet {
    /// Load the candidate headers relative to `root`.
    ///
    /// # Errors
    /// Fails if any candidate header cannot be read.
    pub fn load(root: &Path) -> Result<Self, ExtractError> {
        let mut entries = Vec::with_capacity(CANDIDATE_HEADERS.len());
        for (stem, relative) in CANDIDATE_HEADERS {
            let path = root.join(relative);
            let text =
                std::fs::read_to_string(&path).map_err(|e| ExtractError::io_error(&path, e))?;
            entries.push((Location::new(*stem), text));
        }
        Ok(Self { entries })
    }

    /// Build a set from preloaded `(location, text)` pairs
    #[must_use]
    pub fn from_entries(entries: Vec<(Location, String)>) -> Self {
        Self { entries }
    }

    /// Attribute a symbol to the first header whose text contains it.
    ///
    /// # Errors
    /// Returns [`ExtractError::UnresolvedSymbol`] if no header matches.
    pub fn locate(&self, symbol: &str) -> Result<Location, ExtractError> {
        self.entries
            .iter()
            .find(|(_, text)| text.contains(symbol))
            .map(|(location, _)| location.clone())
            .ok_or_else(|| ExtractError::UnresolvedSymbol(symbol.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HeaderSet {
        HeaderSet::from_entries(vec![
            (
                Location::new("imgui"),
                "struct ImVec2 { float x, y; };\ntypedef int ImGuiCol;".to_string(),
            ),
            (
                Location::new("imgui_internal"),
                "struct ImRect { ImVec2 Min, Max; };".to_string(),
            ),
        ])
    }

    #[test]
    fn locate_finds_symbol() {
        let headers = sample();
        assert_eq!(headers.locate("ImRect").unwrap().as_str(), "imgui_internal");
    }

    #[test]
    fn locate_prefers_earlier_header() {
        // ImVec2 appears in both; the public header wins.
        let headers = sample();
        assert_eq!(headers.locate("ImVec2").unwrap().as_str(), "imgui");
    }

    #[test]
    fn locate_unknown_symbol_fails() {
        let headers = sample();
        let err = headers.locate("ImMystery").unwrap_err();
        assert!(matches!(err, ExtractError::UnresolvedSymbol(name) if name == "ImMystery"));
    }
}
