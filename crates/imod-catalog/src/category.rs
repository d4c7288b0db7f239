//! Symbol categories
//!
//! The seven catalogs a branch's symbol surface is split into.

use std::fmt::{self, Display, Formatter};

/// A catalog category.
///
/// The first five feed the primary pass over the library's own
/// headers; the last two feed the backend pass over the platform
/// integration headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Enumerations: prefix plus ordered member flags
    EnumGroups,
    /// Struct names (nested structs excluded, exported via their parent)
    Structs,
    /// Type alias names
    Aliases,
    /// Free functions with the library prefix, global scope
    Functions,
    /// Functions called through the `ImGui` namespace
    NamespacedFunctions,
    /// Type names referenced by backend function signatures
    ImplTypes,
    /// Backend free-function names
    ImplFunctions,
}

impl Category {
    /// File the category persists to inside a branch directory
    #[inline]
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::EnumGroups => "enums.json",
            Self::Structs => "structs.json",
            Self::Aliases => "aliases.json",
            Self::Functions => "funcs.json",
            Self::NamespacedFunctions => "funcs_in_namespace.json",
            Self::ImplTypes => "impl_types.json",
            Self::ImplFunctions => "impl_funcs.json",
        }
    }

    /// Human-readable category name, used in error messages
    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::EnumGroups => "enums",
            Self::Structs => "structs",
            Self::Aliases => "aliases",
            Self::Functions => "functions",
            Self::NamespacedFunctions => "functions in namespace",
            Self::ImplTypes => "implementation types",
            Self::ImplFunctions => "implementation functions",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
