//! Aggregate re-export manifest and the stub that replaces the input.

use std::path::PathBuf;

use crate::config::SplitConfig;
use crate::error::{Result, SplitError};
use crate::graph::DependencyGraph;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub path: PathBuf,
    /// One `export * from './Name'` line per construct
    pub contents: String,
    /// The original input document
    pub stub_path: PathBuf,
    /// Single re-export of the manifest
    pub stub_contents: String,
}

/// Build the manifest for every node of `graph`, in graph order
pub fn build_manifest(graph: &DependencyGraph, config: &SplitConfig) -> Result<Manifest> {
    let mut contents = String::new();
    for name in graph.names() {
        contents.push_str(&format!("export * from './{name}'\n"));
    }

    let stub_contents = format!("export * from '{}'\n", config.manifest_specifier()?);

    Ok(Manifest {
        path: config.manifest_path(),
        contents,
        stub_path: config.input.clone(),
        stub_contents,
    })
}

/// Write the manifest, then overwrite the input with the stub
pub fn write_manifest(manifest: &Manifest) -> Result<()> {
    std::fs::write(&manifest.path, &manifest.contents)
        .map_err(|source| SplitError::manifest_write(&manifest.path, source))?;
    std::fs::write(&manifest.stub_path, &manifest.stub_contents)
        .map_err(|source| SplitError::manifest_write(&manifest.stub_path, source))?;
    tracing::debug!(
        "wrote manifest {} and stub {}",
        manifest.path.display(),
        manifest.stub_path.display()
    );
    Ok(())
}
