//! Parser error handling module
//!
//! - Categorized error codes for filtering and documentation
//! - Hints for common mistakes
//! - Related span tracking (e.g., "opened here" for unclosed braces)

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{RelatedInfo, SyntaxError};
