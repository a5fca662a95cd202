//! Flattened view of a declaration document.
//!
//! A generated document either lists its declarations at the top level or
//! wraps them all in one namespace block. [`Document::unwrap_namespace`]
//! normalizes both shapes into an ordered list of [`Construct`]s.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::LineIndex;
use crate::error::{Result, SplitError};
use crate::parser::{AstNode, Declaration, DeclarationKind, SourceFile, Statement};

/// A named interface, type alias, or class lifted out of the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Construct {
    pub name: SmolStr,
    pub kind: DeclarationKind,
    /// Full declaration including modifiers and body
    pub declaration: Declaration,
}

/// Constructs in source order
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub constructs: Vec<Construct>,
    /// Namespace the constructs were found in, `None` for top-level declarations
    pub namespace: Option<SmolStr>,
}

impl Document {
    /// Collect the splittable declarations of `source`.
    ///
    /// Uses the body of the first `namespace <namespace> { ... }` block when
    /// there is one, otherwise the top-level statements. Statements other than
    /// interfaces, type aliases and classes are skipped, as are declarations
    /// without a name. A repeated name is an error.
    pub fn unwrap_namespace(
        source: &SourceFile,
        namespace: &str,
        index: &LineIndex,
    ) -> Result<Self> {
        let (statements, namespace): (Vec<Statement>, _) = match source
            .find_namespace(namespace)
            .and_then(|module| module.body())
        {
            Some(body) => (body.statements().collect(), Some(SmolStr::new(namespace))),
            None => (source.statements().collect(), None),
        };

        let mut constructs = Vec::new();
        let mut seen: FxHashMap<SmolStr, Declaration> = FxHashMap::default();

        for declaration in statements.iter().filter_map(Statement::as_declaration) {
            let Some(name) = declaration.name().map(|n| n.text()) else {
                tracing::trace!("skipping anonymous {}", declaration.kind());
                continue;
            };

            if let Some(first) = seen.get(&name) {
                return Err(SplitError::Duplicate {
                    name: name.to_string(),
                    kind: declaration.kind().as_str(),
                    first: location(first, index),
                    second: location(&declaration, index),
                });
            }
            seen.insert(name.clone(), declaration.clone());

            constructs.push(Construct {
                name,
                kind: declaration.kind(),
                declaration,
            });
        }

        Ok(Self {
            constructs,
            namespace,
        })
    }

    pub fn len(&self) -> usize {
        self.constructs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructs.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &SmolStr> {
        self.constructs.iter().map(|c| &c.name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructs.iter().any(|c| c.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Construct> {
        self.constructs.iter().find(|c| c.name == name)
    }
}

/// `line:col` of a declaration's name, falling back to the declaration start
fn location(declaration: &Declaration, index: &LineIndex) -> String {
    let offset = declaration
        .name()
        .map(|n| n.syntax().text_range().start())
        .unwrap_or_else(|| declaration.syntax().text_range().start());
    index.line_col(offset).to_string()
}
