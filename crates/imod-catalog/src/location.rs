//! Header locations
//!
//! Provides [`Location`] for identifying the header a symbol belongs to.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Identity of a header file; the unit of output granularity.
///
/// A location is the header's stem without extension (`imgui`,
/// `imgui_internal`, `imgui_impl_glfw`). The upstream generator spells
/// locations with a line suffix (`imgui:312`); use
/// [`Location::from_generator`] to strip it.
///
/// # Example
/// ```
/// use imod_catalog::Location;
///
/// let loc = Location::from_generator("imgui_internal:144");
/// assert_eq!(loc.as_str(), "imgui_internal");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    /// Create a location from a bare header stem
    #[inline]
    #[must_use]
    pub fn new(stem: impl Into<String>) -> Self {
        Self(stem.into())
    }

    /// Create a location from a generator-spelled `stem:line` string
    #[inline]
    #[must_use]
    pub fn from_generator(spelled: &str) -> Self {
        let stem = spelled.split(':').next().unwrap_or(spelled);
        Self(stem.to_string())
    }

    /// Header stem
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the interface unit generated for this location
    #[inline]
    #[must_use]
    pub fn unit_file_name(&self) -> String {
        format!("{}.cppm", self.0)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Location {
    fn from(stem: &str) -> Self {
        Self::new(stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_from_generator_strips_line() {
        let loc = Location::from_generator("imgui:1234");
        assert_eq!(loc.as_str(), "imgui");
    }

    #[test]
    fn location_from_generator_without_line() {
        let loc = Location::from_generator("imgui_freetype");
        assert_eq!(loc.as_str(), "imgui_freetype");
    }

    #[test]
    fn location_unit_file_name() {
        let loc = Location::new("imgui_internal");
        assert_eq!(loc.unit_file_name(), "imgui_internal.cppm");
    }

    #[test]
    fn location_display() {
        let loc = Location::new("imgui");
        assert_eq!(loc.to_string(), "imgui");
    }

    #[test]
    fn location_ordering_is_lexicographic() {
        let a = Location::new("imgui");
        let b = Location::new("imgui_internal");
        assert!(a < b);
    }
}
