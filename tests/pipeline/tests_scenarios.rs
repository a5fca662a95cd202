//! Dependency scenarios, checked on the planned units.

use crate::helpers::source_fixtures::*;
use crate::helpers::split_helpers::*;
use rstest::rstest;

// =============================================================================
// BASIC SCENARIOS
// =============================================================================

#[test]
fn test_interface_referencing_interface() {
    let plan = plan(TWO_INTERFACES);

    let a = &plan.unit("A").unwrap().contents;
    assert_eq!(local_imports(a), vec!["B"]);
    assert!(a.starts_with("import { B } from './B'\n"));
    assert_eq!(declaration_text(a), "export interface A { b: B }\n");

    let b = &plan.unit("B").unwrap().contents;
    assert!(local_imports(b).is_empty());
    assert_eq!(declaration_text(b), "export interface B { value: string }\n");

    assert_eq!(
        plan.manifest.contents,
        "export * from './A'\nexport * from './B'\n"
    );
}

#[test]
fn test_union_alias_imports_every_member() {
    let plan = plan(UNION_ALIAS);
    let c = &plan.unit("C").unwrap().contents;
    assert_eq!(local_imports(c), vec!["D", "E"]);
    assert_eq!(declaration_text(c), "export type C = D | E\n");
}

#[test]
fn test_array_of_builtin_has_no_imports() {
    let plan = plan(ARRAY_OF_BUILTIN);
    let f = &plan.unit("F").unwrap().contents;
    assert!(local_imports(f).is_empty());
    assert_eq!(declaration_text(f), "export interface F { g: string[] }\n");
}

#[test]
fn test_external_base_keeps_reference_without_import() {
    let plan = plan(EXTERNAL_BASE);
    let g = &plan.unit("G").unwrap().contents;
    assert!(local_imports(g).is_empty());
    assert!(declaration_text(g).starts_with("export interface G extends H {"));
}

#[test]
fn test_builtin_names_never_imported() {
    let plan = plan(BUILTIN_NAMES_AS_TYPES);
    let holder = &plan.unit("Holder").unwrap().contents;
    assert_eq!(local_imports(holder), vec!["Payload"]);
}

#[test]
fn test_self_reference_is_not_imported() {
    let plan = plan(SELF_REFERENCE);
    let unit = &plan.unit("TreeNode").unwrap().contents;
    assert!(local_imports(unit).is_empty());
    assert_eq!(
        declaration_text(unit),
        "export type TreeNode = {\n    parent: TreeNode | null\n    children: TreeNode[]\n  }\n"
    );
}

// =============================================================================
// GENERATED CLIENT
// =============================================================================

#[rstest]
#[case("LogDefinition", vec!["LogLevel"])]
#[case("PrismaClientOptions", vec!["LogLevel", "LogDefinition"])]
#[case("GetEvents", vec!["LogLevel", "LogDefinition", "GetLogType"])]
#[case("$UserPayload", vec!["$PostPayload"])]
#[case("$PostPayload", vec!["$UserPayload"])]
#[case("UserWhereUniqueInput", vec!["AtLeast", "UserWhereInput"])]
#[case("UserWhereInput", vec![])]
#[case("UserFindUniqueArgs", vec!["UserWhereUniqueInput"])]
#[case("UserDelegate", vec!["UserFindUniqueArgs", "Subset", "Prisma__UserClient", "$UserPayload"])]
#[case("Prisma__UserClient", vec!["PrismaPromise"])]
#[case("PrismaPromise", vec![])]
#[case("ModelName", vec![])]
fn test_generated_client_imports(#[case] name: &str, #[case] expected: Vec<&str>) {
    let plan = plan(GENERATED_CLIENT);
    let unit = &plan.unit(name).unwrap().contents;
    assert_eq!(local_imports(unit), expected, "unit {name}:\n{unit}");
}

#[test]
fn test_shared_alias_is_not_imported_twice() {
    let plan = plan(GENERATED_CLIENT);
    let post = &plan.unit("$PostPayload").unwrap().contents;
    assert!(!post.contains("from './JsonValue'"));
    assert!(post.contains("import type { JsonObject, JsonArray, JsonValue,"));
    assert!(
        plan.graph
            .dependencies("$PostPayload")
            .unwrap()
            .contains("JsonValue")
    );
}

#[test]
fn test_generated_client_qualifiers_removed() {
    let plan = plan(GENERATED_CLIENT);

    let delegate = declaration_text(&plan.unit("UserDelegate").unwrap().contents).to_string();
    assert!(delegate.contains("$Result.GetResult<$UserPayload<ExtArgs>, T, \"findUnique\", ClientOptions>"));

    let client = declaration_text(&plan.unit("Prisma__UserClient").unwrap().contents).to_string();
    assert!(client.contains("extends PrismaPromise<T> {"));
    assert!(client.contains("readonly [Symbol.toStringTag]: \"PrismaPromise\""));

    let json = declaration_text(&plan.unit("JsonValue").unwrap().contents).to_string();
    assert_eq!(json, "export type JsonValue = runtime.JsonValue\n");
}

#[test]
fn test_doc_comment_travels_with_declaration() {
    let plan = plan(GENERATED_CLIENT);
    let unit = &plan.unit("LogLevel").unwrap().contents;
    assert_eq!(
        declaration_text(unit),
        "/**\n   * Log levels\n   */\nexport type LogLevel = 'info' | 'query' | 'warn' | 'error'\n"
    );
}

#[test]
fn test_computed_key_loses_namespace_qualifier() {
    let plan = plan(
        "export namespace Prisma {\n  export interface K { [Prisma.sym]: Prisma.B; readonly [Symbol.iterator]: B }\n  export interface B {}\n}\n",
    );
    let k = &plan.unit("K").unwrap().contents;
    assert_eq!(local_imports(k), vec!["B"]);
    assert_eq!(
        declaration_text(k),
        "export interface K { [sym]: B; readonly [Symbol.iterator]: B }\n"
    );
}
