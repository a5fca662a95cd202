//! Parsing a generated client declaration file end to end.

use crate::helpers::source_fixtures::*;
use typesplit::LineIndex;
use typesplit::document::Document;
use typesplit::parser::{AstNode, Declaration, Statement, parse};

#[test]
fn test_generated_client_parses_cleanly() {
    let parsed = parse(GENERATED_CLIENT);
    let index = LineIndex::new(GENERATED_CLIENT);
    let rendered: Vec<_> = parsed.errors.iter().map(|e| e.render(&index)).collect();
    assert!(rendered.is_empty(), "{}", rendered.join("\n"));
}

#[test]
fn test_generated_client_is_lossless() {
    let parsed = parse(GENERATED_CLIENT);
    assert_eq!(parsed.syntax().text().to_string(), GENERATED_CLIENT);
}

#[test]
fn test_generated_client_top_level_statements() {
    let root = parse(GENERATED_CLIENT).source_file();
    let statements: Vec<_> = root.statements().collect();

    let imports = statements
        .iter()
        .filter(|s| matches!(s, Statement::Import(_)))
        .count();
    assert_eq!(imports, 6);

    let class = statements
        .iter()
        .find_map(|s| match s.as_declaration() {
            Some(Declaration::Class(class)) => Some(class),
            _ => None,
        })
        .unwrap();
    assert_eq!(class.name().unwrap().text(), "PrismaClient");
    assert_eq!(class.type_params().unwrap().params().count(), 3);
    assert_eq!(class.body().unwrap().members().count(), 5);

    let namespace = root.find_namespace("Prisma").unwrap();
    assert!(namespace.is_exported());
}

#[test]
fn test_generated_client_constructs() {
    let parsed = parse(GENERATED_CLIENT);
    let document = Document::unwrap_namespace(
        &parsed.source_file(),
        "Prisma",
        &LineIndex::new(GENERATED_CLIENT),
    )
    .unwrap();

    let names: Vec<&str> = document.names().map(|n| n.as_str()).collect();
    assert_eq!(names, GENERATED_CLIENT_NAMES);
    assert!(
        document
            .constructs
            .iter()
            .all(|c| c.declaration.syntax().text().to_string().contains(c.name.as_str()))
    );
}

#[test]
fn test_generated_client_without_namespace_match() {
    let parsed = parse(GENERATED_CLIENT);
    let document = Document::unwrap_namespace(
        &parsed.source_file(),
        "Missing",
        &LineIndex::new(GENERATED_CLIENT),
    )
    .unwrap();

    let names: Vec<&str> = document.names().map(|n| n.as_str()).collect();
    assert_eq!(names, vec!["PrismaPromise", "User", "PrismaClient"]);
    assert!(document.namespace.is_none());
}
