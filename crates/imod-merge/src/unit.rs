//! Interface-unit lifecycle
//!
//! An [`InterfaceUnit`] is the accumulated output text for one
//! location. Units are created lazily on first write: the seed depends
//! on the pass (primary module unit vs. backend extension fragment)
//! and, for the primary pass, on whether the location is the root
//! header. Units persist to disk exactly once, at the end of their
//! pass.

use crate::error::MergeError;
use crate::tables::{MATH_OPERATORS, MATH_OPERATORS_GUARD, ROOT_LOCATION};
use imod_catalog::Location;
use indexmap::IndexMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// What a unit is seeded with on first write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnitKind {
    /// Full module interface unit with boilerplate and an export block
    Primary,
    /// Bare extension fragment spliced into an existing export scope
    Extension,
}

/// Accumulated output text for one location
#[derive(Debug)]
pub struct InterfaceUnit {
    location: Location,
    text: String,
}

impl InterfaceUnit {
    fn primary(location: &Location) -> Self {
        let mut text = format!(
            "module;\n\n#include <{location}.h>\n\nexport module {location};\n\n"
        );

        if location.as_str() == ROOT_LOCATION {
            // The generator does not emit operator symbols at all, so
            // the root unit bridges the math operators by hand.
            text.push_str("export {\n");
            let _ = writeln!(text, "#ifdef {MATH_OPERATORS_GUARD}");
            for op in MATH_OPERATORS {
                let _ = writeln!(text, "    using ::operator{op};");
            }
            text.push_str("#endif\n\n");
        } else {
            let _ = writeln!(text, "export import {ROOT_LOCATION};");
            text.push_str("\nexport {\n");
        }

        Self {
            location: location.clone(),
            text,
        }
    }

    fn extension(location: &Location) -> Self {
        Self {
            location: location.clone(),
            text: String::new(),
        }
    }

    /// Location this unit is generated for
    #[inline]
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Accumulated text so far
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Append a text segment
    #[inline]
    pub fn push(&mut self, segment: &str) {
        self.text.push_str(segment);
    }

    /// Mutable buffer for the rendering helpers
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// Terminate the unit with its closing marker
    #[inline]
    pub fn close(&mut self) {
        self.text.push_str("}\n");
    }

    /// Write the unit to `<dir>/<location>.cppm`.
    ///
    /// # Errors
    /// Fails if the file cannot be written.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, MergeError> {
        let path = dir.join(self.location.unit_file_name());
        std::fs::write(&path, &self.text).map_err(|e| MergeError::io_error(&path, e))?;
        Ok(path)
    }
}

/// Lazily-created interface units, one per location
#[derive(Debug)]
pub struct UnitSet {
    kind: UnitKind,
    units: IndexMap<Location, InterfaceUnit>,
}

impl UnitSet {
    /// Unit set for the primary pass over the library's own headers
    #[must_use]
    pub fn primary() -> Self {
        Self {
            kind: UnitKind::Primary,
            units: IndexMap::new(),
        }
    }

    /// Unit set for the backend pass over the platform headers
    #[must_use]
    pub fn extensions() -> Self {
        Self {
            kind: UnitKind::Extension,
            units: IndexMap::new(),
        }
    }

    /// Get or create the unit for a location, seeding the boilerplate
    /// on first access.
    pub fn unit(&mut self, location: &Location) -> &mut InterfaceUnit {
        let kind = self.kind;
        self.units.entry(location.clone()).or_insert_with(|| match kind {
            UnitKind::Primary => InterfaceUnit::primary(location),
            UnitKind::Extension => InterfaceUnit::extension(location),
        })
    }

    /// Append the closing marker to every unit
    pub fn close_all(&mut self) {
        for unit in self.units.values_mut() {
            unit.close();
        }
    }

    /// Write every unit under `dir`, creating the directory if absent.
    /// Returns the number of files written.
    ///
    /// # Errors
    /// Fails if the directory or any file cannot be written.
    pub fn persist(&self, dir: &Path) -> Result<usize, MergeError> {
        std::fs::create_dir_all(dir).map_err(|e| MergeError::io_error(dir, e))?;
        for unit in self.units.values() {
            unit.write_to(dir)?;
        }
        Ok(self.units.len())
    }

    /// Number of units created so far
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// True when no unit has been created yet
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
