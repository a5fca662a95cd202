//! Raw reference collection.

use indexmap::IndexSet;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use super::DependencyGraph;
use crate::document::Document;
use crate::parser::{
    AstNode, HeritageType, PropertyDecl, PropertySignature, SyntaxNode, Type, TypeRef,
};

/// Primitive and container names that never become imports
pub const BUILTIN_NAMES: &[&str] = &[
    "string", "number", "boolean", "String", "Number", "Boolean", "Array", "Promise", "Date",
];

pub fn is_builtin(name: &str) -> bool {
    BUILTIN_NAMES.contains(&name)
}

/// Collect, for every construct, the names referenced anywhere in its declaration.
///
/// Self references and built-in names are removed afterwards. Whether a name
/// is actually defined in the document is decided by [`super::filter_to_known`].
pub fn raw_dependencies(document: &Document) -> DependencyGraph {
    let builtins: FxHashSet<&str> = BUILTIN_NAMES.iter().copied().collect();
    let mut graph = DependencyGraph::new();

    for construct in &document.constructs {
        let mut deps = IndexSet::new();
        collect_references(construct.declaration.syntax(), &mut deps);

        deps.retain(|name: &SmolStr| *name != construct.name && !builtins.contains(name.as_str()));
        tracing::trace!("{}: raw references {:?}", construct.name, deps);
        graph.insert(construct.name.clone(), deps);
    }

    graph
}

/// Visit `node` and all its descendants, applying every reference rule at each node
fn collect_references(node: &SyntaxNode, deps: &mut IndexSet<SmolStr>) {
    if let Some(type_ref) = TypeRef::cast(node.clone()) {
        // Rightmost segment, so `Prisma.User` and `User` both yield `User`
        record(deps, type_ref.referenced_name());
    } else if let Some(heritage) = HeritageType::cast(node.clone()) {
        record(
            deps,
            heritage.qualified_name().and_then(|q| q.last_segment()),
        );
    } else if let Some(property) = PropertySignature::cast(node.clone()) {
        record(deps, property.ty().as_ref().and_then(direct_reference));
    } else if let Some(property) = PropertyDecl::cast(node.clone()) {
        record(deps, property.ty().as_ref().and_then(direct_reference));
    } else if let Some(ty) = Type::cast(node.clone()) {
        match &ty {
            Type::Union(union) => {
                for member in union.members() {
                    record(deps, direct_reference(&member));
                }
            }
            Type::Intersection(intersection) => {
                for member in intersection.members() {
                    record(deps, direct_reference(&member));
                }
            }
            Type::Array(array) => {
                record(deps, array.element().as_ref().and_then(direct_reference));
            }
            _ => {}
        }
    }

    for child in node.children() {
        collect_references(&child, deps);
    }
}

/// Name of `ty` when it is a plain type reference
fn direct_reference(ty: &Type) -> Option<SmolStr> {
    ty.as_ref_type().and_then(TypeRef::referenced_name)
}

fn record(deps: &mut IndexSet<SmolStr>, name: Option<SmolStr>) {
    if let Some(name) = name {
        deps.insert(name);
    }
}
