//! Statement-level grammar: declarations, namespaces, and skipped statements

use super::*;

/// Statement modifiers that may precede a declaration keyword
const STATEMENT_MODIFIERS: &[SyntaxKind] = &[
    SyntaxKind::EXPORT_KW,
    SyntaxKind::DECLARE_KW,
    SyntaxKind::DEFAULT_KW,
    SyntaxKind::ABSTRACT_KW,
];

impl Parser<'_> {
    /// Statement = Modifier* (Interface | TypeAlias | Class | Module | Import | Other)
    pub(super) fn parse_statement(&mut self) {
        let mut n = 0;
        while STATEMENT_MODIFIERS.contains(&self.nth(n)) {
            n += 1;
        }

        match self.nth(n) {
            SyntaxKind::INTERFACE_KW => self.parse_interface(),
            SyntaxKind::TYPE_KW if self.nth(n + 1).is_name_token() => self.parse_type_alias(),
            SyntaxKind::CLASS_KW => self.parse_class(),
            SyntaxKind::NAMESPACE_KW | SyntaxKind::MODULE_KW
                if self.nth(n + 1).is_name_token() || self.nth(n + 1) == SyntaxKind::STRING =>
            {
                self.parse_module()
            }
            // `declare global { ... }`
            SyntaxKind::IDENT
                if n > 0 && self.at_contextual(n, "global") && self.nth(n + 1) == SyntaxKind::L_BRACE =>
            {
                self.parse_module()
            }
            SyntaxKind::IMPORT_KW if n == 0 => self.parse_opaque_statement(SyntaxKind::IMPORT_DECL),
            _ => self.parse_opaque_statement(SyntaxKind::OTHER_STMT),
        }
    }

    fn parse_statement_modifiers(&mut self) {
        while self.at_any(STATEMENT_MODIFIERS) {
            self.bump();
        }
    }

    /// InterfaceDecl = 'interface' Name TypeParams? HeritageClause? ObjectType
    fn parse_interface(&mut self) {
        self.start_node(SyntaxKind::INTERFACE_DECL);

        self.parse_statement_modifiers();
        self.expect(SyntaxKind::INTERFACE_KW);
        self.parse_decl_name();

        if self.at(SyntaxKind::LT) {
            self.parse_type_params();
        }
        if self.at(SyntaxKind::EXTENDS_KW) {
            self.parse_heritage_clause();
        }

        if self.at(SyntaxKind::L_BRACE) {
            self.parse_object_type();
        } else {
            self.error(ErrorCode::E0307, "expected '{' to open interface body");
        }

        self.finish_node();
    }

    /// TypeAliasDecl = 'type' Name TypeParams? '=' Type ';'?
    fn parse_type_alias(&mut self) {
        self.start_node(SyntaxKind::TYPE_ALIAS_DECL);

        self.parse_statement_modifiers();
        self.expect(SyntaxKind::TYPE_KW);
        self.parse_decl_name();

        if self.at(SyntaxKind::LT) {
            self.parse_type_params();
        }
        if self.expect(SyntaxKind::EQ) {
            self.parse_type();
        }
        self.eat(SyntaxKind::SEMICOLON);

        self.finish_node();
    }

    /// ClassDecl = 'class' Name? TypeParams? HeritageClause* ClassBody
    fn parse_class(&mut self) {
        self.start_node(SyntaxKind::CLASS_DECL);

        self.parse_statement_modifiers();
        self.expect(SyntaxKind::CLASS_KW);

        // Anonymous for `export default class { }`
        if self.current_kind().is_name_token()
            && !self.at_any(&[SyntaxKind::EXTENDS_KW, SyntaxKind::IMPLEMENTS_KW])
        {
            self.parse_decl_name();
        }
        if self.at(SyntaxKind::LT) {
            self.parse_type_params();
        }
        while self.at_any(&[SyntaxKind::EXTENDS_KW, SyntaxKind::IMPLEMENTS_KW]) {
            self.parse_heritage_clause();
        }

        if self.at(SyntaxKind::L_BRACE) {
            self.parse_class_body();
        } else {
            self.error(ErrorCode::E0307, "expected '{' to open class body");
        }

        self.finish_node();
    }

    /// Name = IDENT
    pub(super) fn parse_decl_name(&mut self) {
        if self.current_kind().is_name_token() {
            self.start_node(SyntaxKind::NAME);
            self.bump();
            self.finish_node();
        } else {
            self.error(
                ErrorCode::E0301,
                format!("expected a name, found {}", kind_to_name(self.current_kind())),
            );
        }
    }

    /// HeritageClause = ('extends' | 'implements') HeritageType (',' HeritageType)*
    fn parse_heritage_clause(&mut self) {
        self.start_node(SyntaxKind::HERITAGE_CLAUSE);
        self.bump(); // extends / implements

        loop {
            self.parse_heritage_type();
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }

        self.finish_node();
    }

    /// HeritageType = QualifiedName TypeArgs?
    fn parse_heritage_type(&mut self) {
        self.start_node(SyntaxKind::HERITAGE_TYPE);
        if self.current_kind().is_name_token() {
            self.parse_qualified_name();
            if self.at(SyntaxKind::LT) {
                self.parse_type_args();
            }
        } else {
            self.error(
                ErrorCode::E0308,
                format!("expected a base type, found {}", kind_to_name(self.current_kind())),
            );
        }
        self.finish_node();
    }

    /// ModuleDecl = ('namespace' | 'module')? ModuleName (ModuleBody | ';')
    fn parse_module(&mut self) {
        self.start_node(SyntaxKind::MODULE_DECL);

        self.parse_statement_modifiers();
        // `global` has no keyword
        if self.at_any(&[SyntaxKind::NAMESPACE_KW, SyntaxKind::MODULE_KW]) {
            self.bump();
        }

        self.start_node(SyntaxKind::NAME);
        if self.at(SyntaxKind::STRING) {
            self.bump();
        } else {
            self.bump();
            while self.at(SyntaxKind::DOT) && self.nth(1).is_name_token() {
                self.bump();
                self.bump();
            }
        }
        self.finish_node();

        if self.at(SyntaxKind::L_BRACE) {
            self.parse_module_body();
        } else {
            self.eat(SyntaxKind::SEMICOLON);
        }

        self.finish_node();
    }

    /// ModuleBody = '{' Statement* '}'
    fn parse_module_body(&mut self) {
        self.start_node(SyntaxKind::MODULE_BODY);
        let opened = self.current_range();
        self.bump(); // {

        while !self.at(SyntaxKind::R_BRACE) && !self.at_eof() {
            let before = self.progress_mark();
            self.parse_statement();
            if self.progress_mark() == before {
                self.bump_error(
                    ErrorCode::E0901,
                    format!("unexpected {}", kind_to_name(self.current_kind())),
                );
            }
        }

        self.expect_closing(SyntaxKind::R_BRACE, ErrorCode::E0202, opened);
        self.finish_node();
    }

    /// Statements outside the declaration subset (functions, variables, enums,
    /// re-exports, imports) are kept as opaque token runs.
    ///
    /// A statement ends at `;`, before an unmatched `}`, or before a new
    /// statement keyword that starts on a new line.
    fn parse_opaque_statement(&mut self, kind: SyntaxKind) {
        self.start_node(kind);

        let mut depth = 0usize;
        let mut consumed = false;
        while !self.at_eof() {
            let current = self.current_kind();
            if depth == 0 {
                if current == SyntaxKind::R_BRACE {
                    break;
                }
                if current == SyntaxKind::SEMICOLON {
                    self.bump();
                    break;
                }
                if consumed && self.has_newline_before() && self.at_statement_start() {
                    break;
                }
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

    fn at_statement_start(&self) -> bool {
        match self.current_kind() {
            SyntaxKind::EXPORT_KW
            | SyntaxKind::DECLARE_KW
            | SyntaxKind::INTERFACE_KW
            | SyntaxKind::CLASS_KW
            | SyntaxKind::ABSTRACT_KW
            | SyntaxKind::NAMESPACE_KW
            | SyntaxKind::MODULE_KW
            | SyntaxKind::IMPORT_KW
            | SyntaxKind::ENUM_KW
            | SyntaxKind::FUNCTION_KW
            | SyntaxKind::CONST_KW
            | SyntaxKind::LET_KW
            | SyntaxKind::VAR_KW => true,
            SyntaxKind::TYPE_KW => self.nth(1).is_name_token(),
            _ => false,
        }
    }
}
