//! Foundation types for the splitter.
//!
//! - [`LineCol`], [`LineIndex`] - Line/column conversion for diagnostics
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//!
//! This module has NO dependencies on other crate modules.

mod position;

pub use position::{LineCol, LineIndex};
pub use text_size::{TextRange, TextSize};
