//! IMOD Symbol Catalogs
//!
//! Shared data model for the extractor and the merge engine: symbols
//! of the upstream library grouped by category and keyed by the header
//! they belong to, one catalog set per branch.
//!
//! # Core Concepts
//!
//! - [`Location`]: identity of a header file; the unit of output granularity
//! - [`EnumGroup`]: a named enumeration and its members in source order
//! - [`Category`]: the seven symbol categories a branch is cataloged into
//! - [`BranchCatalogs`]: all seven catalogs extracted for one branch
//! - [`ensure_matching_locations`]: the fail-fast location-key consistency check
//!
//! Catalogs persist as one JSON file per category under a directory
//! named after the branch (`main/enums.json`, `docking/structs.json`).

#![warn(unreachable_pub)]

mod category;
mod error;
mod location;
pub mod store;
mod symbols;

pub use category::Category;
pub use error::CatalogError;
pub use location::Location;
pub use symbols::{
    ensure_matching_locations, BranchCatalogs, EnumCatalog, EnumGroup, LocationMap, NameCatalog,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
