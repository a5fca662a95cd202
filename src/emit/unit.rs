//! One output unit per construct.

use std::path::PathBuf;

use indexmap::IndexSet;
use smol_str::SmolStr;

use super::render::render_declaration;
use crate::config::SplitConfig;
use crate::document::Construct;
use crate::error::{Result, SplitError};
use crate::parser::AstNode;

/// Rendered unit for a single construct
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedUnit {
    pub name: SmolStr,
    pub path: PathBuf,
    pub contents: String,
    /// Local constructs this unit imports
    pub imports: Vec<SmolStr>,
}

/// Build the unit for `construct`.
///
/// Layout: one `import { Dep } from './Dep'` line per dependency, the shared
/// runtime import block, a blank line, the doc comment if any, and the
/// declaration. Dependencies already bound by the shared block are not
/// imported a second time.
pub fn render_unit(
    construct: &Construct,
    deps: &IndexSet<SmolStr>,
    namespace: Option<&str>,
    config: &SplitConfig,
) -> EmittedUnit {
    let imports: Vec<SmolStr> = deps
        .iter()
        .filter(|dep| **dep != construct.name && !config.is_shared_name(dep))
        .cloned()
        .collect();

    let mut contents = String::new();
    for dep in &imports {
        contents.push_str(&format!("import {{ {dep} }} from './{dep}'\n"));
    }
    contents.push_str(&config.shared_import_block());
    contents.push('\n');

    if let Some(doc) = construct.declaration.doc_comment() {
        contents.push_str(&doc);
        contents.push('\n');
    }
    contents.push_str(&render_declaration(&construct.declaration, namespace));
    contents.push('\n');

    EmittedUnit {
        name: construct.name.clone(),
        path: config.unit_path(&construct.name),
        contents,
        imports,
    }
}

/// Write a unit, replacing any previous file
pub fn write_unit(unit: &EmittedUnit) -> Result<()> {
    std::fs::write(&unit.path, &unit.contents)
        .map_err(|source| SplitError::unit_write(&unit.path, source))?;
    tracing::debug!(
        "wrote {} ({} imports, {} bytes)",
        unit.path.display(),
        unit.imports.len(),
        unit.contents.len()
    );
    Ok(())
}
