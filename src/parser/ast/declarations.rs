use super::*;
use smol_str::SmolStr;

// ============================================================================
// Root
// ============================================================================

ast_node!(SourceFile, SOURCE_FILE);

impl SourceFile {
    children_method!(statements, Statement);

    /// First namespace block named `name` that has a statement body.
    ///
    /// `declare namespace Prisma { ... }` and `export namespace Prisma { ... }` both match;
    /// a bodiless `namespace Prisma;` does not.
    pub fn find_namespace(&self, name: &str) -> Option<ModuleDecl> {
        self.statements().find_map(|stmt| match stmt {
            Statement::Module(module)
                if module.body().is_some() && module.name().is_some_and(|n| n.text() == name) =>
            {
                Some(module)
            }
            _ => None,
        })
    }
}

// ============================================================================
// Statements
// ============================================================================

/// Any statement in a source file or namespace body
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Statement {
    Module(ModuleDecl),
    Interface(InterfaceDecl),
    TypeAlias(TypeAliasDecl),
    Class(ClassDecl),
    Import(ImportDecl),
    /// Functions, variables, enums, re-exports: kept as raw tokens
    Other(OtherStmt),
}

impl AstNode for Statement {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::MODULE_DECL
                | SyntaxKind::INTERFACE_DECL
                | SyntaxKind::TYPE_ALIAS_DECL
                | SyntaxKind::CLASS_DECL
                | SyntaxKind::IMPORT_DECL
                | SyntaxKind::OTHER_STMT
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::MODULE_DECL => Some(Self::Module(ModuleDecl(node))),
            SyntaxKind::INTERFACE_DECL => Some(Self::Interface(InterfaceDecl(node))),
            SyntaxKind::TYPE_ALIAS_DECL => Some(Self::TypeAlias(TypeAliasDecl(node))),
            SyntaxKind::CLASS_DECL => Some(Self::Class(ClassDecl(node))),
            SyntaxKind::IMPORT_DECL => Some(Self::Import(ImportDecl(node))),
            SyntaxKind::OTHER_STMT => Some(Self::Other(OtherStmt(node))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Module(n) => n.syntax(),
            Self::Interface(n) => n.syntax(),
            Self::TypeAlias(n) => n.syntax(),
            Self::Class(n) => n.syntax(),
            Self::Import(n) => n.syntax(),
            Self::Other(n) => n.syntax(),
        }
    }
}

impl Statement {
    /// The declaration carried by this statement, if it is one that can be split out
    pub fn as_declaration(&self) -> Option<Declaration> {
        match self {
            Self::Interface(n) => Some(Declaration::Interface(n.clone())),
            Self::TypeAlias(n) => Some(Declaration::TypeAlias(n.clone())),
            Self::Class(n) => Some(Declaration::Class(n.clone())),
            Self::Module(_) | Self::Import(_) | Self::Other(_) => None,
        }
    }
}

// ============================================================================
// Namespaces
// ============================================================================

ast_node!(ModuleDecl, MODULE_DECL);

impl ModuleDecl {
    first_child_method!(name, Name);
    first_child_method!(body, ModuleBody);
    has_token_method!(is_declare, DECLARE_KW, "declare namespace Prisma {}");
    has_token_method!(is_exported, EXPORT_KW, "export namespace Prisma {}");
}

ast_node!(ModuleBody, MODULE_BODY);

impl ModuleBody {
    children_method!(statements, Statement);
}

ast_node!(ImportDecl, IMPORT_DECL);
ast_node!(OtherStmt, OTHER_STMT);

// ============================================================================
// Declarations
// ============================================================================

/// The kind of declaration a construct was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Interface,
    TypeAlias,
    Class,
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interface => "interface",
            Self::TypeAlias => "type alias",
            Self::Class => "class",
        }
    }
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An interface, type alias, or class declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Declaration {
    Interface(InterfaceDecl),
    TypeAlias(TypeAliasDecl),
    Class(ClassDecl),
}

impl AstNode for Declaration {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::INTERFACE_DECL | SyntaxKind::TYPE_ALIAS_DECL | SyntaxKind::CLASS_DECL
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::INTERFACE_DECL => Some(Self::Interface(InterfaceDecl(node))),
            SyntaxKind::TYPE_ALIAS_DECL => Some(Self::TypeAlias(TypeAliasDecl(node))),
            SyntaxKind::CLASS_DECL => Some(Self::Class(ClassDecl(node))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Interface(n) => n.syntax(),
            Self::TypeAlias(n) => n.syntax(),
            Self::Class(n) => n.syntax(),
        }
    }
}

impl Declaration {
    pub fn kind(&self) -> DeclarationKind {
        match self {
            Self::Interface(_) => DeclarationKind::Interface,
            Self::TypeAlias(_) => DeclarationKind::TypeAlias,
            Self::Class(_) => DeclarationKind::Class,
        }
    }

    /// Declared name, `None` for anonymous declarations (`export default class {}`)
    pub fn name(&self) -> Option<Name> {
        self.syntax().children().find_map(Name::cast)
    }

    pub fn is_exported(&self) -> bool {
        has_token(self.syntax(), SyntaxKind::EXPORT_KW)
    }
}

ast_node!(InterfaceDecl, INTERFACE_DECL);

impl InterfaceDecl {
    first_child_method!(name, Name);
    first_child_method!(type_params, TypeParamList);
    children_method!(heritage_clauses, HeritageClause);
    first_child_method!(body, ObjectType);
    has_token_method!(is_exported, EXPORT_KW, "export interface A {}");
    has_token_method!(is_declare, DECLARE_KW);
}

ast_node!(TypeAliasDecl, TYPE_ALIAS_DECL);

impl TypeAliasDecl {
    first_child_method!(name, Name);
    first_child_method!(type_params, TypeParamList);
    first_child_method!(ty, Type);
    has_token_method!(is_exported, EXPORT_KW, "export type A = B");
}

ast_node!(ClassDecl, CLASS_DECL);

impl ClassDecl {
    first_child_method!(name, Name);
    first_child_method!(type_params, TypeParamList);
    children_method!(heritage_clauses, HeritageClause);
    first_child_method!(body, ClassBody);
    has_token_method!(is_exported, EXPORT_KW, "export class A {}");
    has_token_method!(is_abstract, ABSTRACT_KW, "export abstract class A {}");
}

// ============================================================================
// Names
// ============================================================================

ast_node!(Name, NAME);

impl Name {
    /// Name text without trivia; dotted namespace names keep their dots
    pub fn text(&self) -> SmolStr {
        let text: String = significant_tokens(&self.0)
            .map(|t| t.text().to_string())
            .collect();
        SmolStr::from(text)
    }

    /// The identifier token, used for diagnostics
    pub fn token(&self) -> Option<SyntaxToken> {
        significant_tokens(&self.0).next()
    }
}

// ============================================================================
// Generics and heritage
// ============================================================================

ast_node!(TypeParamList, TYPE_PARAM_LIST);

impl TypeParamList {
    children_method!(params, TypeParam);
}

ast_node!(TypeParam, TYPE_PARAM);

impl TypeParam {
    first_child_method!(name, Name);
}

ast_node!(HeritageClause, HERITAGE_CLAUSE);

impl HeritageClause {
    has_token_method!(is_extends, EXTENDS_KW);
    has_token_method!(is_implements, IMPLEMENTS_KW);
    children_method!(types, HeritageType);
}

ast_node!(HeritageType, HERITAGE_TYPE);

impl HeritageType {
    first_child_method!(qualified_name, QualifiedName);
    first_child_method!(type_args, TypeArgList);
}
