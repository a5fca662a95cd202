//! Error code definitions for parser diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (invalid tokens)
//! - E02xx: Structural errors (braces, delimiters)
//! - E03xx: Declaration errors (names, bodies, heritage)
//! - E04xx: Type expression errors
//! - E09xx: Generic/fallback errors

use std::fmt;

/// Error codes for parser diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors
    // =========================================================================
    /// Invalid or unexpected character in source
    E0101,

    // =========================================================================
    // E02xx: Structural errors
    // =========================================================================
    /// Unclosed brace `{`
    E0202,
    /// Unclosed parenthesis `(`
    E0203,
    /// Unclosed bracket `[`
    E0204,
    /// Unexpected closing delimiter
    E0205,
    /// Unclosed type argument or parameter list `<`
    E0208,

    // =========================================================================
    // E03xx: Declaration errors
    // =========================================================================
    /// Missing identifier/name
    E0301,
    /// Missing body (`{` expected)
    E0307,
    /// Invalid heritage clause entry
    E0308,

    // =========================================================================
    // E04xx: Type expression errors
    // =========================================================================
    /// Expected a type
    E0401,
    /// Invalid member in an object type or class body
    E0402,

    // =========================================================================
    // E09xx: Generic/fallback errors
    // =========================================================================
    /// Unexpected token in current context
    E0901,
    /// Expected a specific token
    E0902,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0202")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0205 => "E0205",
            Self::E0208 => "E0208",
            Self::E0301 => "E0301",
            Self::E0307 => "E0307",
            Self::E0308 => "E0308",
            Self::E0401 => "E0401",
            Self::E0402 => "E0402",
            Self::E0901 => "E0901",
            Self::E0902 => "E0902",
        }
    }

    /// Suggestion printed under the message, for codes where the fix is predictable
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::E0208 => Some("type argument and parameter lists end with '>'"),
            Self::E0401 => Some("a type is a name such as `User` or a literal such as `'a'`"),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
