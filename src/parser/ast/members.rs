use super::*;

// ============================================================================
// Bodies
// ============================================================================

ast_node!(ObjectType, OBJECT_TYPE);

impl ObjectType {
    children_method!(members, Member);
}

ast_node!(ClassBody, CLASS_BODY);

impl ClassBody {
    children_method!(members, Member);
}

// ============================================================================
// Members
// ============================================================================

/// Any member of an object type, interface body, or class body
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Member {
    PropertySignature(PropertySignature),
    MethodSignature(MethodSignature),
    CallSignature(CallSignature),
    ConstructSignature(ConstructSignature),
    IndexSignature(IndexSignature),
    PropertyDecl(PropertyDecl),
    MethodDecl(MethodDecl),
    ConstructorDecl(ConstructorDecl),
    AccessorDecl(AccessorDecl),
}

impl AstNode for Member {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::PROPERTY_SIGNATURE
                | SyntaxKind::METHOD_SIGNATURE
                | SyntaxKind::CALL_SIGNATURE
                | SyntaxKind::CONSTRUCT_SIGNATURE
                | SyntaxKind::INDEX_SIGNATURE
                | SyntaxKind::PROPERTY_DECL
                | SyntaxKind::METHOD_DECL
                | SyntaxKind::CONSTRUCTOR_DECL
                | SyntaxKind::ACCESSOR_DECL
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::PROPERTY_SIGNATURE => Some(Self::PropertySignature(PropertySignature(node))),
            SyntaxKind::METHOD_SIGNATURE => Some(Self::MethodSignature(MethodSignature(node))),
            SyntaxKind::CALL_SIGNATURE => Some(Self::CallSignature(CallSignature(node))),
            SyntaxKind::CONSTRUCT_SIGNATURE => {
                Some(Self::ConstructSignature(ConstructSignature(node)))
            }
            SyntaxKind::INDEX_SIGNATURE => Some(Self::IndexSignature(IndexSignature(node))),
            SyntaxKind::PROPERTY_DECL => Some(Self::PropertyDecl(PropertyDecl(node))),
            SyntaxKind::METHOD_DECL => Some(Self::MethodDecl(MethodDecl(node))),
            SyntaxKind::CONSTRUCTOR_DECL => Some(Self::ConstructorDecl(ConstructorDecl(node))),
            SyntaxKind::ACCESSOR_DECL => Some(Self::AccessorDecl(AccessorDecl(node))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::PropertySignature(n) => n.syntax(),
            Self::MethodSignature(n) => n.syntax(),
            Self::CallSignature(n) => n.syntax(),
            Self::ConstructSignature(n) => n.syntax(),
            Self::IndexSignature(n) => n.syntax(),
            Self::PropertyDecl(n) => n.syntax(),
            Self::MethodDecl(n) => n.syntax(),
            Self::ConstructorDecl(n) => n.syntax(),
            Self::AccessorDecl(n) => n.syntax(),
        }
    }
}

impl Member {
    /// Member name, absent for call, construct, and index signatures
    pub fn name(&self) -> Option<Name> {
        self.syntax().children().find_map(Name::cast)
    }
}

ast_node!(PropertySignature, PROPERTY_SIGNATURE);

impl PropertySignature {
    first_child_method!(name, Name);
    first_child_method!(type_annotation, TypeAnnotation);
    has_token_method!(is_optional, QUESTION, "name?: string");
    has_token_method!(is_readonly, READONLY_KW, "readonly id: string");

    /// Declared type of the property
    pub fn ty(&self) -> Option<Type> {
        self.type_annotation()?.ty()
    }
}

ast_node!(PropertyDecl, PROPERTY_DECL);

impl PropertyDecl {
    first_child_method!(name, Name);
    first_child_method!(type_annotation, TypeAnnotation);
    has_token_method!(is_optional, QUESTION);
    has_token_method!(is_readonly, READONLY_KW);
    has_token_method!(is_static, STATIC_KW, "static count: number");

    pub fn ty(&self) -> Option<Type> {
        self.type_annotation()?.ty()
    }
}

ast_node!(MethodSignature, METHOD_SIGNATURE);
ast_node!(MethodDecl, METHOD_DECL);
ast_node!(CallSignature, CALL_SIGNATURE);
ast_node!(ConstructSignature, CONSTRUCT_SIGNATURE);
ast_node!(ConstructorDecl, CONSTRUCTOR_DECL);
ast_node!(AccessorDecl, ACCESSOR_DECL);

impl MethodSignature {
    first_child_method!(name, Name);
    first_child_method!(params, ParamList);
    first_child_method!(return_annotation, TypeAnnotation);
}

impl MethodDecl {
    first_child_method!(name, Name);
    first_child_method!(params, ParamList);
    first_child_method!(return_annotation, TypeAnnotation);
    has_token_method!(is_static, STATIC_KW);
}

impl CallSignature {
    first_child_method!(params, ParamList);
    first_child_method!(return_annotation, TypeAnnotation);
}

impl ConstructorDecl {
    first_child_method!(params, ParamList);
}

ast_node!(IndexSignature, INDEX_SIGNATURE);

// Bracketed member key such as `[Symbol.iterator]`, kept as raw tokens
ast_node!(ComputedName, COMPUTED_NAME);

impl ComputedName {
    /// Tokens between the brackets, without trivia
    pub fn key_tokens(&self) -> impl Iterator<Item = SyntaxToken> {
        significant_tokens(&self.0)
            .filter(|t| !matches!(t.kind(), SyntaxKind::L_BRACKET | SyntaxKind::R_BRACKET))
    }
}

// ============================================================================
// Parameters and annotations
// ============================================================================

ast_node!(ParamList, PARAM_LIST);

impl ParamList {
    children_method!(params, Param);
}

ast_node!(Param, PARAM);

impl Param {
    first_child_method!(name, Name);
    first_child_method!(type_annotation, TypeAnnotation);
    has_token_method!(is_rest, DOT_DOT_DOT, "...args: any[]");
    has_token_method!(is_optional, QUESTION);
}

ast_node!(TypeAnnotation, TYPE_ANNOTATION);

impl TypeAnnotation {
    first_child_method!(ty, Type);
    first_child_method!(predicate, TypePredicate);
}

ast_node!(TypePredicate, TYPE_PREDICATE);

impl TypePredicate {
    has_token_method!(is_assertion, ASSERTS_KW, "asserts value is string");
    first_child_method!(ty, Type);
}
