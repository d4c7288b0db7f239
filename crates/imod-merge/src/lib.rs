//! IMOD Merge Engine
//!
//! Reconciles the main and docking symbol catalogs and emits one
//! guarded C++20 module interface unit per header.
//!
//! # Core Concepts
//!
//! - [`Partition`]: three-way split of names (shared / docking-only /
//!   main-only) for one scope
//! - [`render_conditional`]: the single guarded-rendering primitive
//!   every category driver goes through
//! - [`InterfaceUnit`] / [`UnitSet`]: lazily-seeded per-location
//!   output buffers, persisted once at the end of each pass
//! - [`Engine`]: drives the primary pass over the library headers and
//!   the backend pass over the platform integration headers
//!
//! # Example
//!
//! ```rust,ignore
//! use imod_merge::{Engine, MergeConfig};
//!
//! let report = Engine::new(MergeConfig::default()).run()?;
//! println!("{} primary units", report.primary_units);
//! ```

#![warn(unreachable_pub)]

mod engine;
mod error;
mod partition;
pub mod tables;
mod unit;

pub use engine::{Engine, MergeConfig, MergeReport};
pub use error::MergeError;
pub use partition::{render_conditional, render_names, GroupPartition, Partition};
pub use unit::{InterfaceUnit, UnitSet};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
