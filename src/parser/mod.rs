//! Rowan-based parser for TypeScript declaration documents
//!
//! This module provides a lossless parser using:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! This is the rust-analyzer approach: we build a lossless CST that preserves
//! all whitespace and comments, then extract an AST layer on top. Emission
//! renders declarations straight from the CST, so comments and layout inside a
//! declaration survive the split untouched.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Parser → GreenNode tree (immutable, cheap to clone)
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! AST layer → Typed wrappers over SyntaxNode
//! ```
//!
//! Only the declaration subset is structured: interfaces, type aliases,
//! classes, and the namespaces that contain them. Any other statement is kept
//! as an opaque token run.

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
pub mod errors;
mod lexer;
mod syntax_kind;

pub use ast::*;
pub use errors::{ErrorCode, RelatedInfo, SyntaxError};
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, parse};
pub use syntax_kind::{
    DeclLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxNodeChildren, SyntaxToken,
    kind_to_name,
};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
