//! Catalog persistence
//!
//! One JSON file per category inside a branch directory. The extractor
//! writes a whole [`BranchCatalogs`] at once; the merge engine loads
//! category pairs one at a time so a schema mismatch in a later
//! category cannot block earlier output.

use crate::category::Category;
use crate::error::CatalogError;
use crate::symbols::{BranchCatalogs, EnumCatalog, NameCatalog};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), CatalogError> {
    let file = File::create(path).map_err(|e| CatalogError::io_error(path, e))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, value).map_err(|e| CatalogError::json_error(path, e))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let file = File::open(path).map_err(|e| CatalogError::io_error(path, e))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| CatalogError::json_error(path, e))
}

/// Load the enum catalog of a branch directory.
///
/// # Errors
/// Fails if the file is missing, unreadable, or not valid catalog JSON.
pub fn load_enums(branch_dir: &Path) -> Result<EnumCatalog, CatalogError> {
    read_json(&branch_dir.join(Category::EnumGroups.file_name()))
}

/// Load one plain-name catalog of a branch directory.
///
/// # Errors
/// Fails if the file is missing, unreadable, or not valid catalog JSON.
pub fn load_names(branch_dir: &Path, category: Category) -> Result<NameCatalog, CatalogError> {
    read_json(&branch_dir.join(category.file_name()))
}

/// Save the enum catalog into a branch directory
///
/// # Errors
/// Fails if the file cannot be created or written.
pub fn save_enums(branch_dir: &Path, catalog: &EnumCatalog) -> Result<(), CatalogError> {
    write_json(&branch_dir.join(Category::EnumGroups.file_name()), catalog)
}

/// Save one plain-name catalog into a branch directory
///
/// # Errors
/// Fails if the file cannot be created or written.
pub fn save_names(
    branch_dir: &Path,
    category: Category,
    catalog: &NameCatalog,
) -> Result<(), CatalogError> {
    write_json(&branch_dir.join(category.file_name()), catalog)
}

impl BranchCatalogs {
    /// Persist all seven catalogs into `branch_dir`, creating it if
    /// absent.
    ///
    /// # Errors
    /// Fails on the first file that cannot be written.
    pub fn save(&self, branch_dir: &Path) -> Result<(), CatalogError> {
        std::fs::create_dir_all(branch_dir).map_err(|e| CatalogError::io_error(branch_dir, e))?;

        save_enums(branch_dir, &self.enums)?;
        save_names(branch_dir, Category::Structs, &self.structs)?;
        save_names(branch_dir, Category::Aliases, &self.aliases)?;
        save_names(branch_dir, Category::Functions, &self.funcs)?;
        save_names(
            branch_dir,
            Category::NamespacedFunctions,
            &self.funcs_in_namespace,
        )?;
        save_names(branch_dir, Category::ImplTypes, &self.impl_types)?;
        save_names(branch_dir, Category::ImplFunctions, &self.impl_funcs)?;
        Ok(())
    }

    /// Load all seven catalogs from `branch_dir`.
    ///
    /// # Errors
    /// Fails on the first file that is missing or malformed.
    pub fn load(branch_dir: &Path) -> Result<Self, CatalogError> {
        Ok(Self {
            enums: load_enums(branch_dir)?,
            structs: load_names(branch_dir, Category::Structs)?,
            aliases: load_names(branch_dir, Category::Aliases)?,
            funcs: load_names(branch_dir, Category::Functions)?,
            funcs_in_namespace: load_names(branch_dir, Category::NamespacedFunctions)?,
            impl_types: load_names(branch_dir, Category::ImplTypes)?,
            impl_funcs: load_names(branch_dir, Category::ImplFunctions)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::EnumGroup;
    use crate::Location;
    use std::collections::BTreeSet;

    fn sample() -> BranchCatalogs {
        let mut catalogs = BranchCatalogs::default();
        catalogs.enums.insert(
            Location::new("imgui"),
            vec![EnumGroup::new(
                "ImGuiWindowFlags_",
                vec![
                    "ImGuiWindowFlags_None".to_string(),
                    "ImGuiWindowFlags_NoTitleBar".to_string(),
                ],
            )],
        );
        catalogs.structs.insert(
            Location::new("imgui"),
            ["ImVec2", "ImVec4"].iter().map(|s| (*s).to_string()).collect(),
        );
        catalogs
    }

    #[test]
    fn branch_catalogs_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let branch = dir.path().join("main");

        let catalogs = sample();
        catalogs.save(&branch).unwrap();
        let loaded = BranchCatalogs::load(&branch).unwrap();

        assert_eq!(loaded, catalogs);
    }

    #[test]
    fn save_writes_seven_files() {
        let dir = tempfile::tempdir().unwrap();
        let branch = dir.path().join("docking");

        sample().save(&branch).unwrap();

        for file in [
            "enums.json",
            "structs.json",
            "aliases.json",
            "funcs.json",
            "funcs_in_namespace.json",
            "impl_types.json",
            "impl_funcs.json",
        ] {
            assert!(branch.join(file).exists(), "missing {file}");
        }
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_enums(dir.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn load_enums_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let branch = dir.path().to_path_buf();

        let mut catalog = EnumCatalog::default();
        catalog.insert(Location::new("imgui_internal"), vec![]);
        catalog.insert(Location::new("imgui"), vec![]);
        save_enums(&branch, &catalog).unwrap();

        let loaded = load_enums(&branch).unwrap();
        let keys: Vec<_> = loaded.keys().map(Location::as_str).collect();
        assert_eq!(keys, vec!["imgui_internal", "imgui"]);
    }

    #[test]
    fn name_catalog_round_trip_sorts() {
        let dir = tempfile::tempdir().unwrap();
        let branch = dir.path().to_path_buf();

        let mut catalog = NameCatalog::default();
        let set: BTreeSet<String> = ["ImFontAtlas", "ImColor", "ImDrawList"]
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        catalog.insert(Location::new("imgui"), set);
        save_names(&branch, Category::Structs, &catalog).unwrap();

        let loaded = load_names(&branch, Category::Structs).unwrap();
        let stored: Vec<_> = loaded[&Location::new("imgui")].iter().collect();
        assert_eq!(stored, vec!["ImColor", "ImDrawList", "ImFontAtlas"]);
    }
}
