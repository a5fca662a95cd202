use super::*;
use smol_str::SmolStr;

// ============================================================================
// Type expressions
// ============================================================================

/// Any type expression
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Ref(TypeRef),
    Union(UnionType),
    Intersection(IntersectionType),
    Array(ArrayType),
    IndexedAccess(IndexedAccessType),
    Tuple(TupleType),
    Paren(ParenType),
    Function(FunctionType),
    Constructor(ConstructorType),
    Conditional(ConditionalType),
    Operator(TypeOperator),
    Query(TypeQuery),
    Infer(InferType),
    Mapped(MappedType),
    Literal(LiteralType),
    Object(ObjectType),
    Import(ImportType),
}

impl AstNode for Type {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::TYPE_REF
                | SyntaxKind::UNION_TYPE
                | SyntaxKind::INTERSECTION_TYPE
                | SyntaxKind::ARRAY_TYPE
                | SyntaxKind::INDEXED_ACCESS_TYPE
                | SyntaxKind::TUPLE_TYPE
                | SyntaxKind::PAREN_TYPE
                | SyntaxKind::FUNCTION_TYPE
                | SyntaxKind::CONSTRUCTOR_TYPE
                | SyntaxKind::CONDITIONAL_TYPE
                | SyntaxKind::TYPE_OPERATOR
                | SyntaxKind::TYPE_QUERY
                | SyntaxKind::INFER_TYPE
                | SyntaxKind::MAPPED_TYPE
                | SyntaxKind::LITERAL_TYPE
                | SyntaxKind::OBJECT_TYPE
                | SyntaxKind::IMPORT_TYPE
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::TYPE_REF => Some(Self::Ref(TypeRef(node))),
            SyntaxKind::UNION_TYPE => Some(Self::Union(UnionType(node))),
            SyntaxKind::INTERSECTION_TYPE => Some(Self::Intersection(IntersectionType(node))),
            SyntaxKind::ARRAY_TYPE => Some(Self::Array(ArrayType(node))),
            SyntaxKind::INDEXED_ACCESS_TYPE => Some(Self::IndexedAccess(IndexedAccessType(node))),
            SyntaxKind::TUPLE_TYPE => Some(Self::Tuple(TupleType(node))),
            SyntaxKind::PAREN_TYPE => Some(Self::Paren(ParenType(node))),
            SyntaxKind::FUNCTION_TYPE => Some(Self::Function(FunctionType(node))),
            SyntaxKind::CONSTRUCTOR_TYPE => Some(Self::Constructor(ConstructorType(node))),
            SyntaxKind::CONDITIONAL_TYPE => Some(Self::Conditional(ConditionalType(node))),
            SyntaxKind::TYPE_OPERATOR => Some(Self::Operator(TypeOperator(node))),
            SyntaxKind::TYPE_QUERY => Some(Self::Query(TypeQuery(node))),
            SyntaxKind::INFER_TYPE => Some(Self::Infer(InferType(node))),
            SyntaxKind::MAPPED_TYPE => Some(Self::Mapped(MappedType(node))),
            SyntaxKind::LITERAL_TYPE => Some(Self::Literal(LiteralType(node))),
            SyntaxKind::OBJECT_TYPE => Some(Self::Object(ObjectType(node))),
            SyntaxKind::IMPORT_TYPE => Some(Self::Import(ImportType(node))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Ref(n) => n.syntax(),
            Self::Union(n) => n.syntax(),
            Self::Intersection(n) => n.syntax(),
            Self::Array(n) => n.syntax(),
            Self::IndexedAccess(n) => n.syntax(),
            Self::Tuple(n) => n.syntax(),
            Self::Paren(n) => n.syntax(),
            Self::Function(n) => n.syntax(),
            Self::Constructor(n) => n.syntax(),
            Self::Conditional(n) => n.syntax(),
            Self::Operator(n) => n.syntax(),
            Self::Query(n) => n.syntax(),
            Self::Infer(n) => n.syntax(),
            Self::Mapped(n) => n.syntax(),
            Self::Literal(n) => n.syntax(),
            Self::Object(n) => n.syntax(),
            Self::Import(n) => n.syntax(),
        }
    }
}

impl Type {
    /// The type reference itself, when this type is a plain reference
    pub fn as_ref_type(&self) -> Option<&TypeRef> {
        match self {
            Self::Ref(r) => Some(r),
            _ => None,
        }
    }
}

// ============================================================================
// References
// ============================================================================

ast_node!(TypeRef, TYPE_REF);

impl TypeRef {
    first_child_method!(qualified_name, QualifiedName);
    first_child_method!(type_args, TypeArgList);

    /// Rightmost segment of the referenced name: `Prisma.UserWhereInput` gives `UserWhereInput`
    pub fn referenced_name(&self) -> Option<SmolStr> {
        self.qualified_name()?.last_segment()
    }
}

ast_node!(QualifiedName, QUALIFIED_NAME);

impl QualifiedName {
    /// Identifier tokens in order, without the dots
    pub fn segment_tokens(&self) -> impl Iterator<Item = SyntaxToken> {
        significant_tokens(&self.0).filter(|t| t.kind() != SyntaxKind::DOT)
    }

    pub fn first_segment(&self) -> Option<SmolStr> {
        self.segment_tokens().next().map(|t| SmolStr::new(t.text()))
    }

    pub fn last_segment(&self) -> Option<SmolStr> {
        self.segment_tokens().last().map(|t| SmolStr::new(t.text()))
    }

    /// Check if this name is qualified (`A.B`) rather than a single identifier
    pub fn is_qualified(&self) -> bool {
        has_token(&self.0, SyntaxKind::DOT)
    }
}

ast_node!(TypeArgList, TYPE_ARG_LIST);

impl TypeArgList {
    children_method!(types, Type);
}

// ============================================================================
// Composite types
// ============================================================================

ast_node!(UnionType, UNION_TYPE);

impl UnionType {
    children_method!(members, Type);
}

ast_node!(IntersectionType, INTERSECTION_TYPE);

impl IntersectionType {
    children_method!(members, Type);
}

ast_node!(ArrayType, ARRAY_TYPE);

impl ArrayType {
    first_child_method!(element, Type);
}

ast_node!(IndexedAccessType, INDEXED_ACCESS_TYPE);

impl IndexedAccessType {
    first_child_method!(object, Type);

    pub fn index(&self) -> Option<Type> {
        self.0.children().filter_map(Type::cast).nth(1)
    }
}

ast_node!(TupleType, TUPLE_TYPE);
ast_node!(TupleMember, TUPLE_MEMBER);

impl TupleType {
    children_method!(members, TupleMember);
}

impl TupleMember {
    first_child_method!(ty, Type);
    has_token_method!(is_rest, DOT_DOT_DOT, "[...rest: T[]]");
}

ast_node!(ParenType, PAREN_TYPE);

impl ParenType {
    first_child_method!(inner, Type);
}

ast_node!(FunctionType, FUNCTION_TYPE);
ast_node!(ConstructorType, CONSTRUCTOR_TYPE);

impl FunctionType {
    first_child_method!(params, ParamList);
}

impl ConstructorType {
    first_child_method!(params, ParamList);
    has_token_method!(is_abstract, ABSTRACT_KW);
}

ast_node!(ConditionalType, CONDITIONAL_TYPE);

ast_node!(TypeOperator, TYPE_OPERATOR);

impl TypeOperator {
    first_child_method!(operand, Type);

    pub fn operator(&self) -> Option<SyntaxKind> {
        significant_tokens(&self.0).next().map(|t| t.kind())
    }
}

ast_node!(TypeQuery, TYPE_QUERY);

impl TypeQuery {
    first_child_method!(target, QualifiedName);
}

ast_node!(InferType, INFER_TYPE);

impl InferType {
    first_child_method!(name, Name);
}

ast_node!(MappedType, MAPPED_TYPE);
ast_node!(LiteralType, LITERAL_TYPE);

impl LiteralType {
    pub fn token(&self) -> Option<SyntaxToken> {
        significant_tokens(&self.0).last()
    }
}

ast_node!(ImportType, IMPORT_TYPE);

impl ImportType {
    /// Module specifier, including its quotes
    pub fn specifier(&self) -> Option<SyntaxToken> {
        significant_tokens(&self.0).find(|t| t.kind() == SyntaxKind::STRING)
    }

    first_child_method!(qualifier, QualifiedName);
}
