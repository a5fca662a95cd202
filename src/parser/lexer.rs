//! Logos-based lexer for declaration documents
//!
//! Fast tokenization using the logos crate. Trivia is kept so the tree stays lossless.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\x0C]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Ident,

    #[regex(r"#[a-zA-Z_$][a-zA-Z0-9_$]*")]
    PrivateName,

    #[regex(r"[0-9][0-9_]*(\.[0-9_]*)?([eE][+-]?[0-9]+)?n?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?")]
    #[regex(r"0[xX][0-9a-fA-F_]+n?")]
    Number,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r"'([^'\\\n]|\\.)*'")]
    String,

    #[regex(r"`([^`\\]|\\.)*`")]
    Template,

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION (must come before single-char)
    // =========================================================================
    #[token("...")]
    DotDotDot,

    #[token("=>")]
    FatArrow,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("?")]
    Question,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("=")]
    Eq,
    #[token("|")]
    Pipe,
    #[token("&")]
    Amp,
    #[token("*")]
    Star,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("!")]
    Bang,
    #[token("@")]
    At,
    #[token("~")]
    Tilde,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,

    // =========================================================================
    // KEYWORDS (alphabetical, longest match wins in logos)
    // =========================================================================
    #[token("abstract")]
    AbstractKw,
    #[token("as")]
    AsKw,
    #[token("asserts")]
    AssertsKw,
    #[token("class")]
    ClassKw,
    #[token("const")]
    ConstKw,
    #[token("declare")]
    DeclareKw,
    #[token("default")]
    DefaultKw,
    #[token("enum")]
    EnumKw,
    #[token("export")]
    ExportKw,
    #[token("extends")]
    ExtendsKw,
    #[token("false")]
    FalseKw,
    #[token("function")]
    FunctionKw,
    #[token("implements")]
    ImplementsKw,
    #[token("import")]
    ImportKw,
    #[token("in")]
    InKw,
    #[token("infer")]
    InferKw,
    #[token("interface")]
    InterfaceKw,
    #[token("is")]
    IsKw,
    #[token("keyof")]
    KeyofKw,
    #[token("let")]
    LetKw,
    #[token("module")]
    ModuleKw,
    #[token("namespace")]
    NamespaceKw,
    #[token("new")]
    NewKw,
    #[token("null")]
    NullKw,
    #[token("private")]
    PrivateKw,
    #[token("protected")]
    ProtectedKw,
    #[token("public")]
    PublicKw,
    #[token("readonly")]
    ReadonlyKw,
    #[token("static")]
    StaticKw,
    #[token("true")]
    TrueKw,
    #[token("type")]
    TypeKw,
    #[token("typeof")]
    TypeofKw,
    #[token("unique")]
    UniqueKw,
    #[token("var")]
    VarKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            // Trivia
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,

            // Literals
            Ident => SyntaxKind::IDENT,
            PrivateName => SyntaxKind::PRIVATE_NAME,
            Number => SyntaxKind::NUMBER,
            String => SyntaxKind::STRING,
            Template => SyntaxKind::TEMPLATE,

            // Punctuation
            DotDotDot => SyntaxKind::DOT_DOT_DOT,
            FatArrow => SyntaxKind::FAT_ARROW,
            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            Semicolon => SyntaxKind::SEMICOLON,
            Colon => SyntaxKind::COLON,
            Comma => SyntaxKind::COMMA,
            Dot => SyntaxKind::DOT,
            Question => SyntaxKind::QUESTION,
            Lt => SyntaxKind::LT,
            Gt => SyntaxKind::GT,
            Eq => SyntaxKind::EQ,
            Pipe => SyntaxKind::PIPE,
            Amp => SyntaxKind::AMP,
            Star => SyntaxKind::STAR,
            Plus => SyntaxKind::PLUS,
            Minus => SyntaxKind::MINUS,
            Bang => SyntaxKind::BANG,
            At => SyntaxKind::AT,
            Tilde => SyntaxKind::TILDE,
            Slash => SyntaxKind::SLASH,
            Percent => SyntaxKind::PERCENT,
            Caret => SyntaxKind::CARET,

            // Keywords
            AbstractKw => SyntaxKind::ABSTRACT_KW,
            AsKw => SyntaxKind::AS_KW,
            AssertsKw => SyntaxKind::ASSERTS_KW,
            ClassKw => SyntaxKind::CLASS_KW,
            ConstKw => SyntaxKind::CONST_KW,
            DeclareKw => SyntaxKind::DECLARE_KW,
            DefaultKw => SyntaxKind::DEFAULT_KW,
            EnumKw => SyntaxKind::ENUM_KW,
            ExportKw => SyntaxKind::EXPORT_KW,
            ExtendsKw => SyntaxKind::EXTENDS_KW,
            FalseKw => SyntaxKind::FALSE_KW,
            FunctionKw => SyntaxKind::FUNCTION_KW,
            ImplementsKw => SyntaxKind::IMPLEMENTS_KW,
            ImportKw => SyntaxKind::IMPORT_KW,
            InKw => SyntaxKind::IN_KW,
            InferKw => SyntaxKind::INFER_KW,
            InterfaceKw => SyntaxKind::INTERFACE_KW,
            IsKw => SyntaxKind::IS_KW,
            KeyofKw => SyntaxKind::KEYOF_KW,
            LetKw => SyntaxKind::LET_KW,
            ModuleKw => SyntaxKind::MODULE_KW,
            NamespaceKw => SyntaxKind::NAMESPACE_KW,
            NewKw => SyntaxKind::NEW_KW,
            NullKw => SyntaxKind::NULL_KW,
            PrivateKw => SyntaxKind::PRIVATE_KW,
            ProtectedKw => SyntaxKind::PROTECTED_KW,
            PublicKw => SyntaxKind::PUBLIC_KW,
            ReadonlyKw => SyntaxKind::READONLY_KW,
            StaticKw => SyntaxKind::STATIC_KW,
            TrueKw => SyntaxKind::TRUE_KW,
            TypeKw => SyntaxKind::TYPE_KW,
            TypeofKw => SyntaxKind::TYPEOF_KW,
            UniqueKw => SyntaxKind::UNIQUE_KW,
            VarKw => SyntaxKind::VAR_KW,
        }
    }
}
