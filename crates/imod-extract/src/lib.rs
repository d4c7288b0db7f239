//! IMOD Catalog Extractor
//!
//! Reads the cimgui generator's metadata plus the raw ImGui headers
//! for one checked-out branch and classifies every public symbol into
//! the seven catalogs the merge engine consumes.
//!
//! # Core Concepts
//!
//! - [`Extractor`]: drives the whole extraction for one branch
//! - [`HeaderSet`]: substring attribution of symbols to headers
//! - [`metadata`]: typed partial views of the generator JSON
//! - [`tables`]: every hardcoded exception list in one place
//!
//! The companion `imod-extract` binary runs the extraction and saves
//! the catalogs under a directory named by `--branch`.

#![warn(unreachable_pub)]

mod error;
mod extract;
mod headers;
pub mod metadata;
pub mod tables;

pub use error::ExtractError;
pub use extract::{
    extract_aliases, extract_backends, extract_enums, extract_functions, extract_structs,
    Extractor,
};
pub use headers::HeaderSet;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
