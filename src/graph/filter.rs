//! Reduction of raw references to local constructs.

use indexmap::IndexSet;
use smol_str::SmolStr;

use super::DependencyGraph;
use crate::document::Document;

/// Keep only references to constructs defined in the same document.
///
/// A name counts as known when it is a node of `raw` or a construct of
/// `document`. Everything else is an external or ambient type and is dropped
/// without complaint. Nodes without any remaining dependency are kept with an
/// empty set.
pub fn filter_to_known(raw: &DependencyGraph, document: &Document) -> DependencyGraph {
    let mut filtered = DependencyGraph::new();

    for (name, deps) in raw.iter() {
        let kept: IndexSet<SmolStr> = deps
            .iter()
            .filter(|dep| {
                let known = *dep != name && (raw.contains(dep) || document.contains(dep));
                if !known {
                    tracing::trace!("{name}: dropping external reference `{dep}`");
                }
                known
            })
            .cloned()
            .collect();
        filtered.insert(name.clone(), kept);
    }

    filtered
}
