//! Type expression grammar
//!
//! Precedence, loosest first:
//! conditional, union, intersection, type operator, postfix (`[]`, `[K]`), primary.

use super::*;

/// Tokens that close or separate a type and must never be swallowed by error recovery
const TYPE_FOLLOW: &[SyntaxKind] = &[
    SyntaxKind::R_PAREN,
    SyntaxKind::R_BRACKET,
    SyntaxKind::R_BRACE,
    SyntaxKind::GT,
    SyntaxKind::COMMA,
    SyntaxKind::SEMICOLON,
    SyntaxKind::EQ,
    SyntaxKind::COLON,
    SyntaxKind::QUESTION,
    SyntaxKind::FAT_ARROW,
];

impl Parser<'_> {
    /// Type = UnionType ('extends' UnionType '?' Type ':' Type)?
    pub(super) fn parse_type(&mut self) {
        if self.disallow_conditional {
            self.parse_union_type();
            return;
        }

        let checkpoint = self.checkpoint();
        self.parse_union_type();

        if self.at(SyntaxKind::EXTENDS_KW) {
            self.start_node_at(checkpoint, SyntaxKind::CONDITIONAL_TYPE);
            self.bump();
            self.with_conditional(false, |p| p.parse_type());
            if self.expect(SyntaxKind::QUESTION) {
                self.parse_type();
            }
            if self.expect(SyntaxKind::COLON) {
                self.parse_type();
            }
            self.finish_node();
        }
    }

    /// UnionType = '|'? IntersectionType ('|' IntersectionType)*
    fn parse_union_type(&mut self) {
        let checkpoint = self.checkpoint();
        let leading = self.eat(SyntaxKind::PIPE);
        self.parse_intersection_type();

        if leading || self.at(SyntaxKind::PIPE) {
            self.start_node_at(checkpoint, SyntaxKind::UNION_TYPE);
            while self.eat(SyntaxKind::PIPE) {
                self.parse_intersection_type();
            }
            self.finish_node();
        }
    }

    /// IntersectionType = '&'? TypeOperator ('&' TypeOperator)*
    fn parse_intersection_type(&mut self) {
        let checkpoint = self.checkpoint();
        let leading = self.eat(SyntaxKind::AMP);
        self.parse_type_operator();

        if leading || self.at(SyntaxKind::AMP) {
            self.start_node_at(checkpoint, SyntaxKind::INTERSECTION_TYPE);
            while self.eat(SyntaxKind::AMP) {
                self.parse_type_operator();
            }
            self.finish_node();
        }
    }

    /// TypeOperator = ('keyof' | 'unique' | 'readonly') TypeOperator | 'infer' Name | PostfixType
    fn parse_type_operator(&mut self) {
        match self.current_kind() {
            SyntaxKind::KEYOF_KW | SyntaxKind::UNIQUE_KW | SyntaxKind::READONLY_KW => {
                self.start_node(SyntaxKind::TYPE_OPERATOR);
                self.bump();
                self.parse_type_operator();
                self.finish_node();
            }
            SyntaxKind::INFER_KW => {
                self.start_node(SyntaxKind::INFER_TYPE);
                self.bump();
                self.parse_decl_name();
                // `infer U extends string` only binds a constraint inside an `extends` operand
                if self.disallow_conditional && self.at(SyntaxKind::EXTENDS_KW) {
                    self.bump();
                    self.parse_type();
                }
                self.finish_node();
            }
            _ => self.parse_postfix_type(),
        }
    }

    /// PostfixType = PrimaryType ('[' ']' | '[' Type ']')*
    fn parse_postfix_type(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_primary_type();

        // A bracket on a new line starts the next member (`[key: string]: T`)
        while self.at(SyntaxKind::L_BRACKET) && !self.has_newline_before() {
            if self.nth(1) == SyntaxKind::R_BRACKET {
                self.start_node_at(checkpoint, SyntaxKind::ARRAY_TYPE);
                self.bump();
                self.bump();
                self.finish_node();
            } else {
                self.start_node_at(checkpoint, SyntaxKind::INDEXED_ACCESS_TYPE);
                let opened = self.current_range();
                self.bump();
                self.with_conditional(true, |p| p.parse_type());
                self.expect_closing(SyntaxKind::R_BRACKET, ErrorCode::E0204, opened);
                self.finish_node();
            }
        }
    }

    fn parse_primary_type(&mut self) {
        match self.current_kind() {
            SyntaxKind::L_PAREN if self.at_function_type() => {
                self.parse_function_type(SyntaxKind::FUNCTION_TYPE);
            }
            SyntaxKind::L_PAREN => self.parse_paren_type(),
            SyntaxKind::LT => self.parse_function_type(SyntaxKind::FUNCTION_TYPE),
            SyntaxKind::NEW_KW => self.parse_function_type(SyntaxKind::CONSTRUCTOR_TYPE),
            SyntaxKind::ABSTRACT_KW if self.nth(1) == SyntaxKind::NEW_KW => {
                self.parse_function_type(SyntaxKind::CONSTRUCTOR_TYPE);
            }
            SyntaxKind::L_BRACE if self.at_mapped_type() => self.parse_mapped_type(),
            SyntaxKind::L_BRACE => self.parse_object_type(),
            SyntaxKind::L_BRACKET => self.parse_tuple_type(),
            SyntaxKind::TYPEOF_KW => self.parse_type_query(),
            SyntaxKind::IMPORT_KW if self.nth(1) == SyntaxKind::L_PAREN => self.parse_import_type(),
            SyntaxKind::STRING
            | SyntaxKind::NUMBER
            | SyntaxKind::TEMPLATE
            | SyntaxKind::TRUE_KW
            | SyntaxKind::FALSE_KW
            | SyntaxKind::NULL_KW => {
                self.start_node(SyntaxKind::LITERAL_TYPE);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::MINUS if self.nth(1) == SyntaxKind::NUMBER => {
                self.start_node(SyntaxKind::LITERAL_TYPE);
                self.bump();
                self.bump();
                self.finish_node();
            }
            kind if self.starts_type_ref(kind) => self.parse_type_ref(),
            kind => {
                let message = format!("expected a type, found {}", kind_to_name(kind));
                if self.at_eof() || self.at_any(TYPE_FOLLOW) {
                    self.error(ErrorCode::E0401, message);
                } else {
                    self.bump_error(ErrorCode::E0401, message);
                }
            }
        }
    }

    fn starts_type_ref(&self, kind: SyntaxKind) -> bool {
        kind == SyntaxKind::IDENT
            || (kind.is_keyword()
                && !matches!(
                    kind,
                    SyntaxKind::EXTENDS_KW
                        | SyntaxKind::IMPLEMENTS_KW
                        | SyntaxKind::IN_KW
                        | SyntaxKind::IS_KW
                        | SyntaxKind::AS_KW
                ))
    }

    /// `(` starts a function type when its matching `)` is followed by `=>`
    fn at_function_type(&self) -> bool {
        self.nth_matching_close(0)
            .is_some_and(|close| self.nth(close + 1) == SyntaxKind::FAT_ARROW)
    }

    /// `{ [+|-]? readonly? [K in ...`
    fn at_mapped_type(&self) -> bool {
        let mut n = 1;
        if matches!(self.nth(n), SyntaxKind::PLUS | SyntaxKind::MINUS) {
            n += 1;
        }
        if self.nth(n) == SyntaxKind::READONLY_KW {
            n += 1;
        }
        self.nth(n) == SyntaxKind::L_BRACKET
            && self.nth(n + 1).is_name_token()
            && self.nth(n + 2) == SyntaxKind::IN_KW
    }

    /// TypeRef = QualifiedName TypeArgs?
    fn parse_type_ref(&mut self) {
        self.start_node(SyntaxKind::TYPE_REF);
        self.parse_qualified_name();
        if self.at(SyntaxKind::LT) && !self.has_newline_before() {
            self.parse_type_args();
        }
        self.finish_node();
    }

    /// QualifiedName = Ident ('.' Ident)*
    pub(super) fn parse_qualified_name(&mut self) {
        self.start_node(SyntaxKind::QUALIFIED_NAME);
        self.bump();
        while self.at(SyntaxKind::DOT) && self.nth(1).is_name_token() {
            self.bump();
            self.bump();
        }
        self.finish_node();
    }

    /// TypeArgs = '<' Type (',' Type)* ','? '>'
    pub(super) fn parse_type_args(&mut self) {
        self.start_node(SyntaxKind::TYPE_ARG_LIST);
        let opened = self.current_range();
        self.bump(); // <

        self.with_conditional(true, |p| {
            while !p.at(SyntaxKind::GT) && !p.at_eof() {
                p.parse_type();
                if !p.eat(SyntaxKind::COMMA) {
                    break;
                }
            }
        });

        self.expect_closing(SyntaxKind::GT, ErrorCode::E0208, opened);
        self.finish_node();
    }

    /// TypeParams = '<' TypeParam (',' TypeParam)* ','? '>'
    pub(super) fn parse_type_params(&mut self) {
        self.start_node(SyntaxKind::TYPE_PARAM_LIST);
        let opened = self.current_range();
        self.bump(); // <

        while !self.at(SyntaxKind::GT) && !self.at_eof() {
            self.parse_type_param();
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }

        self.expect_closing(SyntaxKind::GT, ErrorCode::E0208, opened);
        self.finish_node();
    }

    /// TypeParam = ('in' | 'out' | 'const')* Name ('extends' Type)? ('=' Type)?
    fn parse_type_param(&mut self) {
        self.start_node(SyntaxKind::TYPE_PARAM);

        while (self.at_any(&[SyntaxKind::IN_KW, SyntaxKind::CONST_KW]) || self.at_contextual(0, "out"))
            && self.nth(1).is_name_token()
        {
            self.bump();
        }
        self.parse_decl_name();

        self.with_conditional(true, |p| {
            if p.eat(SyntaxKind::EXTENDS_KW) {
                p.parse_type();
            }
            if p.eat(SyntaxKind::EQ) {
                p.parse_type();
            }
        });

        self.finish_node();
    }

    fn parse_paren_type(&mut self) {
        self.start_node(SyntaxKind::PAREN_TYPE);
        let opened = self.current_range();
        self.bump(); // (
        self.with_conditional(true, |p| p.parse_type());
        self.expect_closing(SyntaxKind::R_PAREN, ErrorCode::E0203, opened);
        self.finish_node();
    }

    /// FunctionType = 'abstract'? 'new'? TypeParams? ParamList '=>' ReturnType
    fn parse_function_type(&mut self, kind: SyntaxKind) {
        self.start_node(kind);

        self.eat(SyntaxKind::ABSTRACT_KW);
        self.eat(SyntaxKind::NEW_KW);
        if self.at(SyntaxKind::LT) {
            self.parse_type_params();
        }
        if self.at(SyntaxKind::L_PAREN) {
            self.parse_param_list();
        } else {
            self.error(
                ErrorCode::E0902,
                format!("expected '(', found {}", kind_to_name(self.current_kind())),
            );
        }
        if self.expect(SyntaxKind::FAT_ARROW) {
            self.parse_return_type();
        }

        self.finish_node();
    }

    /// MappedType = '{' ('+'|'-')? 'readonly'? '[' Name 'in' Type ('as' Type)? ']' ('+'|'-')? '?'? (':' Type)? ';'? '}'
    fn parse_mapped_type(&mut self) {
        self.start_node(SyntaxKind::MAPPED_TYPE);
        let opened = self.current_range();
        self.bump(); // {

        if self.at_any(&[SyntaxKind::PLUS, SyntaxKind::MINUS]) {
            self.bump();
        }
        self.eat(SyntaxKind::READONLY_KW);

        self.with_conditional(true, |p| {
            p.start_node(SyntaxKind::MAPPED_TYPE_PARAM);
            let bracket = p.current_range();
            p.bump(); // [
            p.parse_decl_name();
            if p.expect(SyntaxKind::IN_KW) {
                p.parse_type();
            }
            if p.eat(SyntaxKind::AS_KW) {
                p.parse_type();
            }
            p.expect_closing(SyntaxKind::R_BRACKET, ErrorCode::E0204, bracket);
            p.finish_node();

            if p.at_any(&[SyntaxKind::PLUS, SyntaxKind::MINUS]) {
                p.bump();
            }
            p.eat(SyntaxKind::QUESTION);
            if p.eat(SyntaxKind::COLON) {
                p.parse_type();
            }
        });

        if !self.eat(SyntaxKind::SEMICOLON) {
            self.eat(SyntaxKind::COMMA);
        }
        self.expect_closing(SyntaxKind::R_BRACE, ErrorCode::E0202, opened);
        self.finish_node();
    }

    /// TupleType = '[' (TupleMember (',' TupleMember)* ','?)? ']'
    fn parse_tuple_type(&mut self) {
        self.start_node(SyntaxKind::TUPLE_TYPE);
        let opened = self.current_range();
        self.bump(); // [

        self.with_conditional(true, |p| {
            while !p.at(SyntaxKind::R_BRACKET) && !p.at_eof() {
                p.parse_tuple_member();
                if !p.eat(SyntaxKind::COMMA) {
                    break;
                }
            }
        });

        self.expect_closing(SyntaxKind::R_BRACKET, ErrorCode::E0204, opened);
        self.finish_node();
    }

    /// TupleMember = '...'? (Name '?'? ':')? Type '?'?
    fn parse_tuple_member(&mut self) {
        self.start_node(SyntaxKind::TUPLE_MEMBER);

        self.eat(SyntaxKind::DOT_DOT_DOT);
        let labelled = self.current_kind().is_name_token()
            && (self.nth(1) == SyntaxKind::COLON
                || (self.nth(1) == SyntaxKind::QUESTION && self.nth(2) == SyntaxKind::COLON));
        if labelled {
            self.parse_decl_name();
            self.eat(SyntaxKind::QUESTION);
            self.bump(); // :
        }
        self.parse_type();
        self.eat(SyntaxKind::QUESTION);

        self.finish_node();
    }

    /// TypeQuery = 'typeof' (ImportType | QualifiedName TypeArgs?)
    fn parse_type_query(&mut self) {
        self.start_node(SyntaxKind::TYPE_QUERY);
        self.bump(); // typeof

        if self.at(SyntaxKind::IMPORT_KW) && self.nth(1) == SyntaxKind::L_PAREN {
            self.parse_import_type();
        } else if self.current_kind().is_name_token() {
            self.parse_qualified_name();
            if self.at(SyntaxKind::LT) && !self.has_newline_before() {
                self.parse_type_args();
            }
        } else {
            self.error(
                ErrorCode::E0401,
                format!("expected a name after 'typeof', found {}", kind_to_name(self.current_kind())),
            );
        }

        self.finish_node();
    }

    /// ImportType = 'import' '(' STRING ')' ('.' QualifiedName)? TypeArgs?
    fn parse_import_type(&mut self) {
        self.start_node(SyntaxKind::IMPORT_TYPE);
        self.bump(); // import
        let opened = self.current_range();
        self.bump(); // (
        self.expect(SyntaxKind::STRING);
        self.expect_closing(SyntaxKind::R_PAREN, ErrorCode::E0203, opened);

        if self.at(SyntaxKind::DOT) && self.nth(1).is_name_token() {
            self.bump();
            self.parse_qualified_name();
        }
        if self.at(SyntaxKind::LT) && !self.has_newline_before() {
            self.parse_type_args();
        }

        self.finish_node();
    }

    /// ReturnType = TypePredicate | Type
    fn parse_return_type(&mut self) {
        if !self.at_type_predicate() {
            self.parse_type();
            return;
        }

        self.start_node(SyntaxKind::TYPE_PREDICATE);
        if self.at(SyntaxKind::ASSERTS_KW) && self.nth(1) != SyntaxKind::IS_KW {
            self.bump();
        }
        self.bump(); // parameter name or `this`
        if self.eat(SyntaxKind::IS_KW) {
            self.parse_type();
        }
        self.finish_node();
    }

    /// `x is T`, `asserts x`, `asserts x is T`
    fn at_type_predicate(&self) -> bool {
        let named = self.current_kind().is_name_token() && self.nth(1) == SyntaxKind::IS_KW;
        let asserts = self.at(SyntaxKind::ASSERTS_KW)
            && self.nth(1).is_name_token()
            && self.nth(1) != SyntaxKind::IS_KW;
        named || asserts
    }

    /// ParamList = '(' (Param (',' Param)* ','?)? ')'
    pub(super) fn parse_param_list(&mut self) {
        self.start_node(SyntaxKind::PARAM_LIST);
        let opened = self.current_range();
        self.bump(); // (

        self.with_conditional(true, |p| {
            while !p.at(SyntaxKind::R_PAREN) && !p.at_eof() {
                p.parse_param();
                if !p.eat(SyntaxKind::COMMA) {
                    break;
                }
            }
        });

        self.expect_closing(SyntaxKind::R_PAREN, ErrorCode::E0203, opened);
        self.finish_node();
    }

    /// Param = Modifier* '...'? (Name | BindingPattern) '?'? TypeAnnotation? Initializer?
    fn parse_param(&mut self) {
        self.start_node(SyntaxKind::PARAM);

        while self.at_any(&[
            SyntaxKind::PUBLIC_KW,
            SyntaxKind::PRIVATE_KW,
            SyntaxKind::PROTECTED_KW,
            SyntaxKind::READONLY_KW,
        ]) && (self.nth(1).is_name_token()
            || matches!(
                self.nth(1),
                SyntaxKind::L_BRACE | SyntaxKind::L_BRACKET | SyntaxKind::DOT_DOT_DOT
            ))
        {
            self.bump();
        }

        self.eat(SyntaxKind::DOT_DOT_DOT);
        if self.at_any(&[SyntaxKind::L_BRACE, SyntaxKind::L_BRACKET]) {
            self.bump_balanced_group();
        } else if self.current_kind().is_name_token() {
            self.parse_decl_name();
        } else {
            self.error(
                ErrorCode::E0301,
                format!("expected a parameter name, found {}", kind_to_name(self.current_kind())),
            );
        }

        self.eat(SyntaxKind::QUESTION);
        if self.at(SyntaxKind::COLON) {
            self.parse_type_annotation();
        }
        if self.at(SyntaxKind::EQ) {
            self.parse_initializer();
        }

        self.finish_node();
    }

    /// TypeAnnotation = ':' Type
    pub(super) fn parse_type_annotation(&mut self) {
        self.start_node(SyntaxKind::TYPE_ANNOTATION);
        self.bump(); // :
        self.parse_type();
        self.finish_node();
    }

    /// ReturnAnnotation = ':' ReturnType
    pub(super) fn parse_return_annotation(&mut self) {
        self.start_node(SyntaxKind::TYPE_ANNOTATION);
        self.bump(); // :
        self.parse_return_type();
        self.finish_node();
    }

    /// Initializer = '=' <tokens up to the next separator>
    ///
    /// Declaration files only carry literal initializers, so the value is kept as raw tokens.
    pub(super) fn parse_initializer(&mut self) {
        self.start_node(SyntaxKind::INITIALIZER);
        self.bump(); // =

        let mut depth = 0usize;
        let mut consumed = false;
        while !self.at_eof() {
            let current = self.current_kind();
            if depth == 0
                && (matches!(
                    current,
                    SyntaxKind::COMMA | SyntaxKind::SEMICOLON | SyntaxKind::R_PAREN | SyntaxKind::R_BRACE
                ) || (consumed && self.has_newline_before()))
            {
                break;
            }
            match current {
                SyntaxKind::L_BRACE | SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET => depth += 1,
                SyntaxKind::R_BRACE | SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET => {
                    depth = depth.saturating_sub(1);
                }
                _ => {}
            }
            self.bump();
            consumed = true;
        }

        self.finish_node();
    }
}
