//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree.
//! It follows the declaration subset of TypeScript found in generated `.d.ts` files.

/// All syntax kinds (tokens and nodes) of a declaration document
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation).
/// Nodes are composite (declarations, members, type expressions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,         // identifier, `$Types`, `string`, `this`
    PRIVATE_NAME,  // #private
    NUMBER,        // 42, 0xff, 1n
    STRING,        // "hello" or 'hello'
    TEMPLATE,      // `prefix${string}`

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,       // {
    R_BRACE,       // }
    L_BRACKET,     // [
    R_BRACKET,     // ]
    L_PAREN,       // (
    R_PAREN,       // )
    SEMICOLON,     // ;
    COLON,         // :
    COMMA,         // ,
    DOT,           // .
    DOT_DOT_DOT,   // ...
    QUESTION,      // ?
    LT,            // <
    GT,            // >
    EQ,            // =
    FAT_ARROW,     // =>
    PIPE,          // |
    AMP,           // &
    STAR,          // *
    PLUS,          // +
    MINUS,         // -
    BANG,          // !
    AT,            // @
    TILDE,         // ~
    SLASH,         // /
    PERCENT,       // %
    CARET,         // ^

    // =========================================================================
    // KEYWORDS (all may double as property or parameter names)
    // =========================================================================
    ABSTRACT_KW,
    AS_KW,
    ASSERTS_KW,
    CLASS_KW,
    CONST_KW,
    DECLARE_KW,
    DEFAULT_KW,
    ENUM_KW,
    EXPORT_KW,
    EXTENDS_KW,
    FALSE_KW,
    FUNCTION_KW,
    IMPLEMENTS_KW,
    IMPORT_KW,
    IN_KW,
    INFER_KW,
    INTERFACE_KW,
    IS_KW,
    KEYOF_KW,
    LET_KW,
    MODULE_KW,
    NAMESPACE_KW,
    NEW_KW,
    NULL_KW,
    PRIVATE_KW,
    PROTECTED_KW,
    PUBLIC_KW,
    READONLY_KW,
    STATIC_KW,
    TRUE_KW,
    TYPE_KW,
    TYPEOF_KW,
    UNIQUE_KW,
    VAR_KW,

    // =========================================================================
    // COMPOSITE NODES (non-terminals in the grammar)
    // =========================================================================
    // Root
    SOURCE_FILE,

    // Statements
    MODULE_DECL,
    MODULE_BODY,
    IMPORT_DECL,
    OTHER_STMT,

    // Declarations that become constructs
    INTERFACE_DECL,
    TYPE_ALIAS_DECL,
    CLASS_DECL,

    // Names and references
    NAME,
    COMPUTED_NAME,
    QUALIFIED_NAME,

    // Generics and heritage
    TYPE_PARAM_LIST,
    TYPE_PARAM,
    TYPE_ARG_LIST,
    HERITAGE_CLAUSE,
    HERITAGE_TYPE,

    // Bodies and members
    OBJECT_TYPE,
    CLASS_BODY,
    PROPERTY_SIGNATURE,
    METHOD_SIGNATURE,
    CALL_SIGNATURE,
    CONSTRUCT_SIGNATURE,
    INDEX_SIGNATURE,
    PROPERTY_DECL,
    METHOD_DECL,
    CONSTRUCTOR_DECL,
    ACCESSOR_DECL,
    PARAM_LIST,
    PARAM,
    TYPE_ANNOTATION,
    INITIALIZER,

    // Type expressions
    TYPE_REF,
    UNION_TYPE,
    INTERSECTION_TYPE,
    ARRAY_TYPE,
    INDEXED_ACCESS_TYPE,
    TUPLE_TYPE,
    TUPLE_MEMBER,
    PAREN_TYPE,
    FUNCTION_TYPE,
    CONSTRUCTOR_TYPE,
    CONDITIONAL_TYPE,
    TYPE_OPERATOR,
    TYPE_QUERY,
    INFER_TYPE,
    MAPPED_TYPE,
    MAPPED_TYPE_PARAM,
    LITERAL_TYPE,
    TYPE_PREDICATE,
    IMPORT_TYPE,

    // Special
    ERROR,
    EOF, // lookahead sentinel, never stored in the tree

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this is a comment token
    pub fn is_comment(self) -> bool {
        matches!(self, Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::ABSTRACT_KW as u16) && (self as u16) <= (Self::VAR_KW as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_BRACE as u16) && (self as u16) <= (Self::CARET as u16)
    }

    /// Check if this kind can name a property, parameter, or qualified-name segment.
    ///
    /// Every keyword is contextual in member position (`type: string`, `default?: T`).
    pub fn is_name_token(self) -> bool {
        self == Self::IDENT || self.is_keyword()
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeclLanguage {}

impl rowan::Language for DeclLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<DeclLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<DeclLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<DeclLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<DeclLanguage>;

/// Human-readable name of a kind, used in diagnostics
pub fn kind_to_name(kind: SyntaxKind) -> &'static str {
    match kind {
        SyntaxKind::IDENT => "identifier",
        SyntaxKind::PRIVATE_NAME => "private name",
        SyntaxKind::NUMBER => "number",
        SyntaxKind::STRING => "string literal",
        SyntaxKind::TEMPLATE => "template literal",
        SyntaxKind::L_BRACE => "'{'",
        SyntaxKind::R_BRACE => "'}'",
        SyntaxKind::L_BRACKET => "'['",
        SyntaxKind::R_BRACKET => "']'",
        SyntaxKind::L_PAREN => "'('",
        SyntaxKind::R_PAREN => "')'",
        SyntaxKind::SEMICOLON => "';'",
        SyntaxKind::COLON => "':'",
        SyntaxKind::COMMA => "','",
        SyntaxKind::DOT => "'.'",
        SyntaxKind::DOT_DOT_DOT => "'...'",
        SyntaxKind::QUESTION => "'?'",
        SyntaxKind::LT => "'<'",
        SyntaxKind::GT => "'>'",
        SyntaxKind::EQ => "'='",
        SyntaxKind::FAT_ARROW => "'=>'",
        SyntaxKind::PIPE => "'|'",
        SyntaxKind::AMP => "'&'",
        SyntaxKind::IN_KW => "'in'",
        SyntaxKind::IS_KW => "'is'",
        SyntaxKind::EXTENDS_KW => "'extends'",
        SyntaxKind::INTERFACE_KW => "'interface'",
        SyntaxKind::CLASS_KW => "'class'",
        SyntaxKind::TYPE_KW => "'type'",
        SyntaxKind::NAMESPACE_KW => "'namespace'",
        SyntaxKind::MODULE_KW => "'module'",
        SyntaxKind::ERROR => "invalid token",
        SyntaxKind::EOF => "end of input",
        k if k.is_keyword() => "keyword",
        k if k.is_punct() => "punctuation",
        _ => "syntax",
    }
}
