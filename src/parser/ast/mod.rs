//! Typed AST wrappers over the untyped rowan CST.
//!
//! This module provides strongly-typed accessors for declaration syntax nodes.
//! Each struct wraps a SyntaxNode and provides methods to access children.

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};

// ============================================================================
// Helper utilities for reducing code duplication
// ============================================================================

/// Check if a syntax node has a direct child token of the specified kind.
///
/// Used for modifier keywords like `export`, `declare`, `readonly`.
#[inline]
fn has_token(node: &SyntaxNode, kind: SyntaxKind) -> bool {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .any(|t| t.kind() == kind)
}

/// Direct child tokens that are not whitespace or comments
#[inline]
fn significant_tokens(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .filter(|t| !t.kind().is_trivia())
}

/// Macro to generate boolean property methods that check for a specific token kind.
///
/// Usage:
/// ```ignore
/// impl MyStruct {
///     has_token_method!(is_exported, EXPORT_KW, "export interface A {}");
/// }
/// ```
macro_rules! has_token_method {
    ($name:ident, $kind:ident) => {
        #[doc = concat!("Check if this node has the `", stringify!($kind), "` token.")]
        pub fn $name(&self) -> bool {
            has_token(&self.0, SyntaxKind::$kind)
        }
    };
    ($name:ident, $kind:ident, $example:literal) => {
        #[doc = concat!("Check if this node has the `", stringify!($kind), "` token (e.g., `", $example, "`).")]
        pub fn $name(&self) -> bool {
            has_token(&self.0, SyntaxKind::$kind)
        }
    };
}

/// Macro to generate a method that finds the first child of a specific AST type.
///
/// Usage:
/// ```ignore
/// impl MyStruct {
///     first_child_method!(name, Name);
/// }
/// ```
macro_rules! first_child_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Get the first `", stringify!($type), "` child of this node.")]
        pub fn $name(&self) -> Option<$type> {
            self.0.children().find_map($type::cast)
        }
    };
}

/// Macro to generate a method that returns an iterator over children of a specific AST type.
///
/// Usage:
/// ```ignore
/// impl MyStruct {
///     children_method!(members, Member);
/// }
/// ```
macro_rules! children_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Get all `", stringify!($type), "` children of this node.")]
        pub fn $name(&self) -> impl Iterator<Item = $type> + '_ {
            self.0.children().filter_map($type::cast)
        }
    };
}

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;

    /// Find all descendant nodes of a specific AST type
    fn descendants<T: AstNode>(&self) -> impl Iterator<Item = T> {
        self.syntax().descendants().filter_map(T::cast)
    }

    /// Raw text of the comments directly above this node, one comment per line.
    fn doc_comment(&self) -> Option<String> {
        let comments = leading_comments(self.syntax());
        if comments.is_empty() {
            return None;
        }
        Some(
            comments
                .iter()
                .map(|t| t.text().to_string())
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

/// Collect the comment tokens immediately preceding a node, in source order.
///
/// Walks backwards over sibling trivia. A comment that shares its line with
/// the previous statement (`foo; // trailing`) belongs to that statement and
/// ends the search.
pub fn leading_comments(node: &SyntaxNode) -> Vec<SyntaxToken> {
    let mut comments = Vec::new();
    let mut current = node.prev_sibling_or_token();

    while let Some(element) = current {
        let Some(token) = element.into_token() else {
            break;
        };
        match token.kind() {
            SyntaxKind::WHITESPACE => {}
            kind if kind.is_comment() => {
                if is_trailing_comment(&token) {
                    break;
                }
                comments.push(token.clone());
            }
            _ => break,
        }
        current = token.prev_sibling_or_token();
    }

    comments.reverse();
    comments
}

/// A comment is trailing when no line break separates it from the preceding non-trivia element
fn is_trailing_comment(comment: &SyntaxToken) -> bool {
    let mut current = comment.prev_sibling_or_token();
    while let Some(element) = current {
        match element {
            rowan::NodeOrToken::Token(t) if t.kind() == SyntaxKind::WHITESPACE => {
                if t.text().contains('\n') {
                    return false;
                }
                current = t.prev_sibling_or_token();
            }
            rowan::NodeOrToken::Token(t) if t.kind().is_comment() => return false,
            _ => return true,
        }
    }
    false
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(pub(crate) SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

// Submodules, declared after macros so macro_rules! are in scope
mod declarations;
mod members;
mod types;

// Re-export all public types so external code sees a flat namespace
pub use self::declarations::*;
pub use self::members::*;
pub use self::types::*;
