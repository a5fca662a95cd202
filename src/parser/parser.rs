//! Recursive descent parser for declaration documents
//!
//! Builds a rowan GreenNode tree from tokens. Trivia is attached to the
//! innermost node that is open when the next significant token arrives, so
//! declaration nodes never start or end with whitespace.

mod members;
mod statements;
mod types;

use super::ast::SourceFile;
use super::errors::{ErrorCode, RelatedInfo, SyntaxError};
use super::lexer::{Lexer, Token};
use super::syntax_kind::{SyntaxKind, kind_to_name};
use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Get the typed root node
    pub fn source_file(&self) -> SourceFile {
        // The root is always built as SOURCE_FILE
        SourceFile(self.syntax())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse a declaration document into a CST
pub fn parse(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens);
    parser.report_lex_errors();
    parser.parse_source_file();
    parser.finish()
}

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    /// Index of the next raw token (may be trivia)
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
    /// Set while parsing the `extends` operand of a conditional type
    disallow_conditional: bool,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
            disallow_conditional: false,
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    fn report_lex_errors(&mut self) {
        for token in self.tokens.iter().filter(|t| t.kind == SyntaxKind::ERROR) {
            self.errors.push(SyntaxError::new(
                format!("invalid character {:?}", token.text),
                TextRange::at(token.offset, TextSize::of(token.text)),
                ErrorCode::E0101,
            ));
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    /// Raw index of the n-th significant token from the current position
    fn nth_index(&self, n: usize) -> Option<usize> {
        let mut count = 0;
        for idx in self.pos..self.tokens.len() {
            if self.tokens[idx].kind.is_trivia() {
                continue;
            }
            if count == n {
                return Some(idx);
            }
            count += 1;
        }
        None
    }

    /// Look ahead, skipping trivia
    fn nth(&self, n: usize) -> SyntaxKind {
        self.nth_index(n)
            .map(|idx| self.tokens[idx].kind)
            .unwrap_or(SyntaxKind::EOF)
    }

    fn nth_text(&self, n: usize) -> &str {
        self.nth_index(n).map(|idx| self.tokens[idx].text).unwrap_or("")
    }

    fn current_kind(&self) -> SyntaxKind {
        self.nth(0)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        kinds.contains(&self.current_kind())
    }

    /// Check for a contextual keyword lexed as an identifier (`get`, `constructor`, ...)
    fn at_contextual(&self, n: usize, text: &str) -> bool {
        self.nth(n) == SyntaxKind::IDENT && self.nth_text(n) == text
    }

    fn at_eof(&self) -> bool {
        self.nth_index(0).is_none()
    }

    /// Position marker used by loops to guarantee progress
    fn progress_mark(&self) -> usize {
        self.nth_index(0).unwrap_or(self.tokens.len())
    }

    /// Check whether a line break separates the current token from the previous one
    fn has_newline_before(&self) -> bool {
        self.tokens[self.pos..]
            .iter()
            .take_while(|t| t.kind.is_trivia())
            .any(|t| t.text.contains('\n'))
    }

    /// Lookahead offset of the bracket closing the opener found at lookahead `n`.
    ///
    /// Tracks `()`, `[]`, and `{}` together; returns `None` at end of input.
    fn nth_matching_close(&self, n: usize) -> Option<usize> {
        let mut depth = 0usize;
        for (offset, token) in self.tokens[self.pos..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .enumerate()
            .skip(n)
        {
            match token.kind {
                SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET | SyntaxKind::L_BRACE => {
                    depth += 1;
                }
                SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET | SyntaxKind::R_BRACE => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return Some(offset);
                    }
                }
                _ if offset == n => return None,
                _ => {}
            }
        }
        None
    }

    fn current_range(&self) -> TextRange {
        match self.nth_index(0) {
            Some(idx) => {
                let token = &self.tokens[idx];
                TextRange::at(token.offset, TextSize::of(token.text))
            }
            None => {
                let end = self
                    .tokens
                    .last()
                    .map(|t| t.offset + TextSize::of(t.text))
                    .unwrap_or_default();
                TextRange::empty(end)
            }
        }
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    /// Attach pending trivia to the currently open node
    fn flush_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.pos) {
            if !token.kind.is_trivia() {
                break;
            }
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    fn bump(&mut self) {
        self.flush_trivia();
        if let Some(token) = self.tokens.get(self.pos) {
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error(
                ErrorCode::E0902,
                format!(
                    "expected {}, found {}",
                    kind_to_name(kind),
                    kind_to_name(self.current_kind())
                ),
            );
            false
        }
    }

    /// Expect a closing delimiter, pointing back at its opener on failure
    fn expect_closing(&mut self, kind: SyntaxKind, code: ErrorCode, opened: TextRange) -> bool {
        if self.eat(kind) {
            return true;
        }
        let error = SyntaxError::new(
            format!(
                "expected {}, found {}",
                kind_to_name(kind),
                kind_to_name(self.current_kind())
            ),
            self.current_range(),
            code,
        )
        .with_related(RelatedInfo::new("opened here", opened));
        self.push_error(error);
        false
    }

    /// Consume tokens up to and including the closer of the group starting at the current token
    fn bump_balanced_group(&mut self) {
        let mut depth = 0usize;
        while !self.at_eof() {
            match self.current_kind() {
                SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET | SyntaxKind::L_BRACE => depth += 1,
                SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET | SyntaxKind::R_BRACE => {
                    depth = depth.saturating_sub(1);
                }
                _ => {}
            }
            self.bump();
            if depth == 0 {
                break;
            }
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&mut self, code: ErrorCode, message: impl Into<String>) {
        let range = self.current_range();
        self.push_error(SyntaxError::new(message, range, code));
    }

    fn push_error(&mut self, error: SyntaxError) {
        let error = match error.code.hint() {
            Some(hint) => error.with_hint(hint),
            None => error,
        };
        self.errors.push(error);
    }

    /// Report an error and wrap exactly one token in an ERROR node
    fn bump_error(&mut self, code: ErrorCode, message: impl Into<String>) {
        self.error(code, message);
        if !self.at_eof() {
            self.start_node(SyntaxKind::ERROR);
            self.bump();
            self.finish_node();
        }
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    fn start_node(&mut self, kind: SyntaxKind) {
        self.flush_trivia();
        self.builder.start_node(kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    fn checkpoint(&mut self) -> Checkpoint {
        self.flush_trivia();
        self.builder.checkpoint()
    }

    fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    /// Run `f` with conditional types allowed or disallowed, restoring the flag afterwards
    fn with_conditional<R>(&mut self, allowed: bool, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = self.disallow_conditional;
        self.disallow_conditional = !allowed;
        let result = f(self);
        self.disallow_conditional = saved;
        result
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// SourceFile = Statement*
    fn parse_source_file(&mut self) {
        self.builder.start_node(SyntaxKind::SOURCE_FILE.into());

        while !self.at_eof() {
            let before = self.progress_mark();
            if self.at(SyntaxKind::R_BRACE) {
                self.bump_error(ErrorCode::E0205, "unexpected '}'");
                continue;
            }
            self.parse_statement();
            // No progress: force-skip a token
            if self.progress_mark() == before && !self.at_eof() {
                self.bump_error(
                    ErrorCode::E0901,
                    format!("unexpected {}", kind_to_name(self.current_kind())),
                );
            }
        }

        self.flush_trivia();
        self.finish_node();
    }
}
