//! # typesplit
//!
//! Splits a generated TypeScript declaration document into one file per
//! interface, type alias and class, with the imports each file needs.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! pipeline  → Stage machine, split_source / split_file
//!   ↓
//! emit      → Unit rendering, manifest and stub
//!   ↓
//! graph     → Raw references, filtering to local constructs
//!   ↓
//! document  → Namespace unwrapping into constructs
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, typed AST
//!   ↓
//! base      → Primitives (LineIndex, TextRange)
//! ```
//!
//! `config` and `error` are shared by every layer above `parser`.

// ============================================================================
// MODULES (dependency order: base → parser → document → graph → emit → pipeline)
// ============================================================================

/// Foundation types: LineIndex, TextRange
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, typed AST over rowan
pub mod parser;

/// Constructs lifted out of the document or its namespace
pub mod document;

/// Dependency graph between constructs
pub mod graph;

/// Unit, manifest and stub output
pub mod emit;

/// Run settings and output layout
pub mod config;

/// Error type shared by every stage
pub mod error;

/// Stage machine driving a run
pub mod pipeline;

// Re-export the entry points
pub use config::SplitConfig;
pub use error::{Result, SplitError};
pub use pipeline::{SplitPlan, SplitReport, Stage, split_file, split_source};

// Re-export foundation types
pub use base::{LineCol, LineIndex, TextRange, TextSize};
