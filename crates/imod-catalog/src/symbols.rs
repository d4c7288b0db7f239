//! Catalog value types and the cross-branch consistency check

use crate::category::Category;
use crate::error::CatalogError;
use crate::location::Location;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Map from header location to the symbols of one category.
///
/// Insertion order is preserved, so a catalog loaded from disk
/// processes its locations in the order the extractor wrote them and
/// reruns stay byte-identical.
pub type LocationMap<V> = IndexMap<Location, V>;

/// Enum groups per location, in source declaration order
pub type EnumCatalog = LocationMap<Vec<EnumGroup>>;

/// Plain symbol names per location. `BTreeSet` keeps every set
/// lexicographically sorted regardless of the order names were
/// inserted or deserialized in.
pub type NameCatalog = LocationMap<BTreeSet<String>>;

/// A named enumeration and its member flags in source order.
///
/// Two groups are the same group when their prefixes match exactly;
/// two members are the same member when their names match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumGroup {
    /// Enum name as declared (`ImGuiWindowFlags_`)
    pub prefix: String,
    /// Member flag names in source order
    pub members: Vec<String>,
}

impl EnumGroup {
    /// Create a group from a prefix and ordered members
    #[inline]
    #[must_use]
    pub fn new(prefix: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            prefix: prefix.into(),
            members,
        }
    }
}

/// The seven catalogs extracted for one branch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchCatalogs {
    /// Enumerations
    pub enums: EnumCatalog,
    /// Struct names
    pub structs: NameCatalog,
    /// Type alias names
    pub aliases: NameCatalog,
    /// Free functions in global scope
    pub funcs: NameCatalog,
    /// Functions called through the `ImGui` namespace
    pub funcs_in_namespace: NameCatalog,
    /// Backend type names
    pub impl_types: NameCatalog,
    /// Backend function names
    pub impl_funcs: NameCatalog,
}

/// Check that both branches catalog the same set of locations for a
/// category.
///
/// # Errors
/// Returns [`CatalogError::SchemaMismatch`] listing the locations each
/// side is missing. The merge engine calls this once per category
/// before emitting anything for it.
pub fn ensure_matching_locations<V>(
    category: Category,
    main: &LocationMap<V>,
    docking: &LocationMap<V>,
) -> Result<(), CatalogError> {
    let main_only: Vec<Location> = main
        .keys()
        .filter(|loc| !docking.contains_key(*loc))
        .cloned()
        .collect();
    let docking_only: Vec<Location> = docking
        .keys()
        .filter(|loc| !main.contains_key(*loc))
        .cloned()
        .collect();

    if main_only.is_empty() && docking_only.is_empty() {
        Ok(())
    } else {
        Err(CatalogError::SchemaMismatch {
            category,
            main_only,
            docking_only,
        })
    }
}
