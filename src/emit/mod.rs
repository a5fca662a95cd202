//! Output rendering and writing.
//!
//! - [`render_declaration`] - Declaration text with the namespace qualifier removed
//! - [`render_unit`], [`write_unit`] - One file per construct
//! - [`build_manifest`], [`write_manifest`] - Re-export manifest and input stub
//!
//! Rendering is pure; only the `write_*` functions touch the filesystem.

mod manifest;
mod render;
mod unit;

pub use manifest::{Manifest, build_manifest, write_manifest};
pub use render::render_declaration;
pub use unit::{EmittedUnit, render_unit, write_unit};

use std::path::Path;

use crate::error::{Result, SplitError};

/// Create `out_dir` and write every unit in order.
///
/// Stops at the first failure; units written before it stay on disk.
pub fn write_units(out_dir: &Path, units: &[EmittedUnit]) -> Result<()> {
    std::fs::create_dir_all(out_dir).map_err(|source| SplitError::unit_write(out_dir, source))?;
    for unit in units {
        write_unit(unit)?;
    }
    Ok(())
}
