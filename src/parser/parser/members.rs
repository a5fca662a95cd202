//! Member grammar for object types, interface bodies, and class bodies

use super::*;

/// Where a member list appears; class bodies accept more modifiers and constructors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MemberContext {
    Object,
    Class,
}

const CLASS_MODIFIERS: &[SyntaxKind] = &[
    SyntaxKind::PUBLIC_KW,
    SyntaxKind::PRIVATE_KW,
    SyntaxKind::PROTECTED_KW,
    SyntaxKind::STATIC_KW,
    SyntaxKind::ABSTRACT_KW,
    SyntaxKind::DECLARE_KW,
];

impl Parser<'_> {
    /// ObjectType = '{' Member* '}'
    pub(super) fn parse_object_type(&mut self) {
        self.start_node(SyntaxKind::OBJECT_TYPE);
        let opened = self.current_range();
        self.bump(); // {
        self.parse_members(MemberContext::Object);
        self.expect_closing(SyntaxKind::R_BRACE, ErrorCode::E0202, opened);
        self.finish_node();
    }

    /// ClassBody = '{' Member* '}'
    pub(super) fn parse_class_body(&mut self) {
        self.start_node(SyntaxKind::CLASS_BODY);
        let opened = self.current_range();
        self.bump(); // {
        self.parse_members(MemberContext::Class);
        self.expect_closing(SyntaxKind::R_BRACE, ErrorCode::E0202, opened);
        self.finish_node();
    }

    fn parse_members(&mut self, context: MemberContext) {
        self.with_conditional(true, |p| {
            while !p.at(SyntaxKind::R_BRACE) && !p.at_eof() {
                if p.eat(SyntaxKind::SEMICOLON) || p.eat(SyntaxKind::COMMA) {
                    continue;
                }
                let before = p.progress_mark();
                p.parse_member(context);
                if p.progress_mark() == before {
                    p.bump_error(
                        ErrorCode::E0402,
                        format!("unexpected {} in member list", kind_to_name(p.current_kind())),
                    );
                }
            }
        });
    }

    fn parse_member(&mut self, context: MemberContext) {
        let mut n = 0;
        while self.is_member_modifier(n, context) {
            n += 1;
        }

        match self.nth(n) {
            SyntaxKind::L_PAREN | SyntaxKind::LT => {
                self.parse_signature(SyntaxKind::CALL_SIGNATURE, n);
            }
            SyntaxKind::NEW_KW if matches!(self.nth(n + 1), SyntaxKind::L_PAREN | SyntaxKind::LT) => {
                self.parse_signature(SyntaxKind::CONSTRUCT_SIGNATURE, n);
            }
            SyntaxKind::L_BRACKET
                if self.nth(n + 1).is_name_token() && self.nth(n + 2) == SyntaxKind::COLON =>
            {
                self.parse_index_signature(n);
            }
            _ if (self.at_contextual(n, "get") || self.at_contextual(n, "set"))
                && self.at_member_name(n + 1) =>
            {
                self.parse_accessor(n);
            }
            _ if context == MemberContext::Class
                && self.at_contextual(n, "constructor")
                && matches!(self.nth(n + 1), SyntaxKind::L_PAREN | SyntaxKind::LT) =>
            {
                self.parse_signature(SyntaxKind::CONSTRUCTOR_DECL, n);
            }
            _ if self.at_member_name(n) => self.parse_property_or_method(context, n),
            kind => self.error(
                ErrorCode::E0402,
                format!("expected a member, found {}", kind_to_name(kind)),
            ),
        }
    }

    /// A modifier only counts as one when a member name follows it (`readonly: boolean` is a property)
    fn is_member_modifier(&self, n: usize, context: MemberContext) -> bool {
        let kind = self.nth(n);
        let is_modifier = kind == SyntaxKind::READONLY_KW
            || (context == MemberContext::Class
                && (CLASS_MODIFIERS.contains(&kind)
                    || self.at_contextual(n, "override")
                    || self.at_contextual(n, "accessor")));
        is_modifier && self.at_member_name(n + 1)
    }

    fn at_member_name(&self, n: usize) -> bool {
        let kind = self.nth(n);
        kind.is_name_token()
            || matches!(
                kind,
                SyntaxKind::STRING | SyntaxKind::NUMBER | SyntaxKind::PRIVATE_NAME | SyntaxKind::L_BRACKET
            )
    }

    fn bump_modifiers(&mut self, count: usize) {
        for _ in 0..count {
            self.bump();
        }
    }

    /// MemberName = Name | STRING | NUMBER | PRIVATE_NAME | '[' ... ']'
    fn parse_member_name(&mut self) {
        match self.current_kind() {
            SyntaxKind::L_BRACKET => {
                self.start_node(SyntaxKind::COMPUTED_NAME);
                self.bump_balanced_group();
                self.finish_node();
            }
            SyntaxKind::STRING | SyntaxKind::NUMBER | SyntaxKind::PRIVATE_NAME => {
                self.start_node(SyntaxKind::NAME);
                self.bump();
                self.finish_node();
            }
            _ => self.parse_decl_name(),
        }
    }

    /// Call, construct, and constructor signatures: head TypeParams? ParamList ReturnAnnotation?
    fn parse_signature(&mut self, kind: SyntaxKind, modifiers: usize) {
        self.start_node(kind);
        self.bump_modifiers(modifiers);

        // `new` / `constructor`
        if kind != SyntaxKind::CALL_SIGNATURE {
            self.bump();
        }
        self.parse_callable_tail();

        self.finish_node();
    }

    fn parse_callable_tail(&mut self) {
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
        if self.at(SyntaxKind::COLON) {
            self.parse_return_annotation();
        }
    }

    /// IndexSignature = Modifier* '[' Name TypeAnnotation ']' TypeAnnotation?
    fn parse_index_signature(&mut self, modifiers: usize) {
        self.start_node(SyntaxKind::INDEX_SIGNATURE);
        self.bump_modifiers(modifiers);

        let opened = self.current_range();
        self.bump(); // [
        self.parse_decl_name();
        self.parse_type_annotation();
        self.expect_closing(SyntaxKind::R_BRACKET, ErrorCode::E0204, opened);

        if self.at(SyntaxKind::COLON) {
            self.parse_type_annotation();
        }

        self.finish_node();
    }

    /// Accessor = Modifier* ('get' | 'set') MemberName TypeParams? ParamList ReturnAnnotation?
    fn parse_accessor(&mut self, modifiers: usize) {
        self.start_node(SyntaxKind::ACCESSOR_DECL);
        self.bump_modifiers(modifiers);
        self.bump(); // get / set
        self.parse_member_name();
        self.parse_callable_tail();
        self.finish_node();
    }

    fn parse_property_or_method(&mut self, context: MemberContext, modifiers: usize) {
        let is_method = self.at_method_after_name(modifiers);
        let kind = match (context, is_method) {
            (MemberContext::Object, false) => SyntaxKind::PROPERTY_SIGNATURE,
            (MemberContext::Object, true) => SyntaxKind::METHOD_SIGNATURE,
            (MemberContext::Class, false) => SyntaxKind::PROPERTY_DECL,
            (MemberContext::Class, true) => SyntaxKind::METHOD_DECL,
        };

        self.start_node(kind);
        self.bump_modifiers(modifiers);
        self.parse_member_name();
        if !self.eat(SyntaxKind::QUESTION) {
            self.eat(SyntaxKind::BANG);
        }

        if is_method {
            self.parse_callable_tail();
        } else {
            if self.at(SyntaxKind::COLON) {
                self.parse_type_annotation();
            }
            if self.at(SyntaxKind::EQ) {
                self.parse_initializer();
            }
        }

        self.finish_node();
    }

    /// Check whether the member name at lookahead `n` is followed by a parameter list
    fn at_method_after_name(&self, n: usize) -> bool {
        let mut after = if self.nth(n) == SyntaxKind::L_BRACKET {
            match self.nth_matching_close(n) {
                Some(close) => close + 1,
                None => return false,
            }
        } else {
            n + 1
        };
        if matches!(self.nth(after), SyntaxKind::QUESTION | SyntaxKind::BANG) {
            after += 1;
        }
        matches!(self.nth(after), SyntaxKind::L_PAREN | SyntaxKind::LT)
    }
}
