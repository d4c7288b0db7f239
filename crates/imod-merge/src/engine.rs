//! Reconciliation passes
//!
//! Drives the category drivers over both branch catalogs: the primary
//! pass over the library's own headers, then the backend pass over the
//! platform integration headers. Each category loads both branches,
//! fail-fast checks the location keys, and renders its guarded
//! declarations into the per-location units.

use crate::error::MergeError;
use crate::partition::{render_conditional, render_names, GroupPartition, Partition};
use crate::tables::{
    BACKEND_OUTPUT_DIR, CHECK_VERSION_WRAPPER, DOCKING_DIR, MAIN_DIR, NAMESPACE, OUTPUT_DIR,
    ROOT_LOCATION,
};
use crate::unit::UnitSet;
use imod_catalog::{
    ensure_matching_locations, store, Category, EnumGroup, NameCatalog,
};
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::{debug, info};

/// Paths one merge run reads from and writes to
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Catalog directory of the main branch
    pub main_dir: PathBuf,
    /// Catalog directory of the docking branch
    pub docking_dir: PathBuf,
    /// Output directory for primary interface units
    pub output_dir: PathBuf,
    /// Output directory for backend extension units
    pub backend_output_dir: PathBuf,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            main_dir: PathBuf::from(MAIN_DIR),
            docking_dir: PathBuf::from(DOCKING_DIR),
            output_dir: PathBuf::from(OUTPUT_DIR),
            backend_output_dir: PathBuf::from(BACKEND_OUTPUT_DIR),
        }
    }
}

/// Unit counts of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeReport {
    /// Primary interface units written
    pub primary_units: usize,
    /// Backend extension units written
    pub backend_units: usize,
}

/// The reconciliation and emission engine
#[derive(Debug)]
pub struct Engine {
    config: MergeConfig,
}

impl Engine {
    /// Create an engine over explicit paths
    #[inline]
    #[must_use]
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    /// Create an engine over the conventional branch and output paths
    #[inline]
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(MergeConfig::default())
    }

    /// Run both passes and persist every unit.
    ///
    /// # Errors
    /// Fails fast on the first schema mismatch, unreadable catalog, or
    /// unwritable output file. Units persist only at the end of their
    /// pass, so a failing category leaves its own pass unwritten;
    /// passes already persisted stay on disk.
    pub fn run(&self) -> Result<MergeReport, MergeError> {
        let primary_units = self.run_primary()?;
        let backend_units = self.run_backends()?;
        Ok(MergeReport {
            primary_units,
            backend_units,
        })
    }

    /// Primary pass: enums, structs, aliases, functions, namespaced
    /// functions, in that order, for the library's own headers.
    fn run_primary(&self) -> Result<usize, MergeError> {
        let mut units = UnitSet::primary();

        self.merge_enums(&mut units)?;
        self.merge_plain_category(
            &mut units,
            Category::Structs,
            "\n    // ----- Structs -----\n\n",
        )?;
        self.merge_plain_category(
            &mut units,
            Category::Aliases,
            "\n    // ----- Type aliases -----\n\n",
        )?;
        self.merge_functions(&mut units)?;

        units.close_all();
        let written = units.persist(&self.config.output_dir)?;
        info!(
            units = written,
            dir = %self.config.output_dir.display(),
            "primary pass complete"
        );
        Ok(written)
    }

    /// Backend pass: implementation types then implementation
    /// functions, rendered as bare extension fragments.
    fn run_backends(&self) -> Result<usize, MergeError> {
        let mut units = UnitSet::extensions();

        let (main, docking) = self.load_name_pair(Category::ImplTypes)?;
        for (location, main_names) in &main {
            let unit = units.unit(location);
            unit.push("    // ----- Types -----\n\n");
            let partition = Partition::split_sets(main_names, &docking[location]);
            render_names(unit.buffer_mut(), &partition, global_using);
        }

        let (main, docking) = self.load_name_pair(Category::ImplFunctions)?;
        for (location, main_names) in &main {
            let unit = units.unit(location);
            unit.push("\n    // ----- Functions -----\n\n");
            let partition = Partition::split_sets(main_names, &docking[location]);
            render_names(unit.buffer_mut(), &partition, global_using);
        }

        units.close_all();
        let written = units.persist(&self.config.backend_output_dir)?;
        info!(
            units = written,
            dir = %self.config.backend_output_dir.display(),
            "backend pass complete"
        );
        Ok(written)
    }

    /// Two-level reconciliation: groups by prefix, then members inside
    /// each shared group. A group present in one branch only moves
    /// wholesale into the surrounding conditional.
    fn merge_enums(&self, units: &mut UnitSet) -> Result<(), MergeError> {
        let main = store::load_enums(&self.config.main_dir)?;
        let docking = store::load_enums(&self.config.docking_dir)?;
        ensure_matching_locations(Category::EnumGroups, &main, &docking)?;
        debug!(locations = main.len(), "reconciling enums");

        for (location, main_groups) in &main {
            let docking_groups = &docking[location];
            let unit = units.unit(location);
            unit.push("    // ----- Enums -----\n");

            let groups = GroupPartition::split(main_groups, docking_groups);
            let out = unit.buffer_mut();

            for (main_group, docking_group) in &groups.shared {
                let _ = writeln!(out, "\n    using ::{};", main_group.prefix);
                let members =
                    Partition::split_ordered(&main_group.members, &docking_group.members);
                render_names(out, &members, global_using);
            }

            render_conditional(out, &groups.docking_only, &groups.main_only, emit_group);
        }
        Ok(())
    }

    /// One §-set category: header line, then the guarded forwardings
    fn merge_plain_category(
        &self,
        units: &mut UnitSet,
        category: Category,
        header: &str,
    ) -> Result<(), MergeError> {
        let (main, docking) = self.load_name_pair(category)?;
        debug!(locations = main.len(), %category, "reconciling");

        for (location, main_names) in &main {
            let unit = units.unit(location);
            unit.push(header);
            let partition = Partition::split_sets(main_names, &docking[location]);
            render_names(unit.buffer_mut(), &partition, global_using);
        }
        Ok(())
    }

    /// Free functions in global scope, then the namespaced functions
    /// wrapped in the library namespace. The root location's namespace
    /// section ends with the version-check wrapper.
    fn merge_functions(&self, units: &mut UnitSet) -> Result<(), MergeError> {
        let (main_free, docking_free) = self.load_name_pair(Category::Functions)?;
        let (main_ns, docking_ns) = self.load_name_pair(Category::NamespacedFunctions)?;
        debug!(
            free_locations = main_free.len(),
            namespaced_locations = main_ns.len(),
            "reconciling functions"
        );

        // One section header per location that has either kind.
        for location in main_free.keys() {
            units.unit(location).push("\n    // ----- Functions -----\n\n");
        }
        for location in main_ns.keys() {
            if !main_free.contains_key(location) {
                units.unit(location).push("\n    // ----- Functions -----\n\n");
            }
        }

        for (location, main_names) in &main_free {
            let unit = units.unit(location);
            let partition = Partition::split_sets(main_names, &docking_free[location]);
            render_names(unit.buffer_mut(), &partition, global_using);
        }

        for (location, main_names) in &main_ns {
            let unit = units.unit(location);
            if !unit.text().ends_with("\n\n") {
                unit.push("\n");
            }
            unit.push(&format!("namespace {NAMESPACE} {{\n"));

            let partition = Partition::split_sets(main_names, &docking_ns[location]);
            render_names(unit.buffer_mut(), &partition, |name| {
                format!("    using {NAMESPACE}::{name};\n")
            });

            if unit.location().as_str() == ROOT_LOCATION {
                unit.push(CHECK_VERSION_WRAPPER);
            }
            unit.push("}\n");
        }
        Ok(())
    }

    /// Load one category from both branches and fail-fast check that
    /// their location keys agree.
    fn load_name_pair(
        &self,
        category: Category,
    ) -> Result<(NameCatalog, NameCatalog), MergeError> {
        let main = store::load_names(&self.config.main_dir, category)?;
        let docking = store::load_names(&self.config.docking_dir, category)?;
        ensure_matching_locations(category, &main, &docking)?;
        Ok((main, docking))
    }
}

fn global_using(name: &str) -> String {
    format!("    using ::{name};\n")
}

fn emit_group(out: &mut String, group: &&EnumGroup) {
    let _ = writeln!(out, "\n    using ::{};", group.prefix);
    for member in &group.members {
        let _ = writeln!(out, "    using ::{member};");
    }
}
