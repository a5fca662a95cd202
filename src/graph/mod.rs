//! Construct dependency graph.
//!
//! Built in two passes:
//! - [`raw_dependencies`] walks every declaration and records each name it
//!   references as a type
//! - [`filter_to_known`] keeps only the names that are constructs of the
//!   same document
//!
//! Keys follow document order and every set keeps discovery order, so
//! anything rendered from the graph is deterministic.

mod collect;
mod filter;

pub use collect::{BUILTIN_NAMES, is_builtin, raw_dependencies};
pub use filter::filter_to_known;

use indexmap::{IndexMap, IndexSet};
use smol_str::SmolStr;

/// Construct name to the names it references
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    edges: IndexMap<SmolStr, IndexSet<SmolStr>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dependencies of `name`, replacing any previous entry
    pub fn insert(&mut self, name: SmolStr, deps: IndexSet<SmolStr>) {
        self.edges.insert(name, deps);
    }

    /// Dependencies of `name`, `None` when it is not a node of the graph
    pub fn dependencies(&self, name: &str) -> Option<&IndexSet<SmolStr>> {
        self.edges.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.edges.contains_key(name)
    }

    /// Node names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &SmolStr> {
        self.edges.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SmolStr, &IndexSet<SmolStr>)> {
        self.edges.iter()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Total number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(IndexSet::len).sum()
    }
}
