use super::*;
use rstest::rstest;

const NAMESPACED: &str = r#"import * as runtime from '@prisma/client/runtime/library'

export type PrismaPromise<T> = $Public.PrismaPromise<T>

export namespace Prisma {
  export type A = { b: Prisma.B; c: C[] }
  export interface B { value: string }
  export type C = B | Prisma.A
  export const prismaVersion: { client: string }
}
"#;

#[test]
fn test_stage_order() {
    let stages = [
        Stage::Idle,
        Stage::Reading,
        Stage::Parsing,
        Stage::GraphBuilding,
        Stage::Filtering,
        Stage::Emitting,
        Stage::ManifestWriting,
        Stage::Done,
    ];
    assert!(stages.windows(2).all(|w| w[0] < w[1]));
    assert!(Stage::Done.is_terminal());
    assert!(Stage::Failed.is_terminal());
    assert!(!Stage::Emitting.is_terminal());
    assert_eq!(Stage::GraphBuilding.to_string(), "graph building");
}

#[test]
fn test_split_source_plan() {
    let plan = split_source(NAMESPACED, &SplitConfig::default()).unwrap();

    let names: Vec<_> = plan.units.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert_eq!(plan.document.namespace.as_deref(), Some("Prisma"));

    let a = plan.unit("A").unwrap();
    assert_eq!(a.imports, vec!["B", "C"]);
    assert!(a.contents.contains("export type A = { b: B; c: C[] }\n"));

    let c = plan.unit("C").unwrap();
    assert_eq!(c.imports, vec!["B", "A"]);
    assert!(c.contents.contains("export type C = B | A\n"));

    assert!(plan.unit("B").unwrap().imports.is_empty());
    assert_eq!(
        plan.manifest.contents,
        "export * from './A'\nexport * from './B'\nexport * from './C'\n"
    );
}

#[test]
fn test_split_source_strips_byte_order_mark() {
    let plan = split_source("\u{feff}type A = 1\n", &SplitConfig::default()).unwrap();
    assert_eq!(plan.units.len(), 1);
}

#[test]
fn test_split_source_empty_document() {
    let plan = split_source("export const x = 1\n", &SplitConfig::default()).unwrap();
    assert!(plan.units.is_empty());
    assert!(plan.manifest.contents.is_empty());
}

#[rstest]
#[case::unclosed_brace("interface A {\n  b: B\n", "3:1")]
#[case::missing_type("type A = ;\ntype B = 1\n", "1:10")]
fn test_parse_errors_carry_positions(#[case] input: &str, #[case] position: &str) {
    let err = split_source(input, &SplitConfig::default()).unwrap_err();
    assert_eq!(err.stage(), Stage::Parsing);
    let SplitError::Parse { diagnostics, .. } = &err else {
        panic!("expected parse error, got {err:?}");
    };
    assert!(
        diagnostics.iter().any(|d| d.starts_with(position)),
        "{diagnostics:?}"
    );
}

#[test]
fn test_duplicate_is_a_parsing_error() {
    let err = split_source("type A = 1\ntype A = 2\n", &SplitConfig::default()).unwrap_err();
    assert!(matches!(err, SplitError::Duplicate { .. }));
    assert_eq!(err.stage(), Stage::Parsing);
}

#[tokio::test]
async fn test_split_file_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let config = SplitConfig::new(dir.path().join("index.d.ts"));

    let err = split_file(&config).await.unwrap_err();
    assert_eq!(err.stage(), Stage::Reading);
    assert!(!dir.path().join("types").exists());
}

#[tokio::test]
async fn test_split_file_invalid_config_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("client/index.d.ts");
    std::fs::create_dir_all(input.parent().unwrap()).unwrap();
    std::fs::write(&input, NAMESPACED).unwrap();
    let config = SplitConfig::new(&input).with_out_dir(dir.path().join("elsewhere"));

    let err = split_file(&config).await.unwrap_err();
    assert_eq!(err.stage(), Stage::Idle);
    assert_eq!(std::fs::read_to_string(&input).unwrap(), NAMESPACED);
}

#[tokio::test]
async fn test_split_file_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("index.d.ts");
    std::fs::write(&input, NAMESPACED).unwrap();

    let report = split_file(&SplitConfig::new(&input)).await.unwrap();
    assert_eq!(report.constructs, 3);
    assert_eq!(report.edges, 4);
    assert_eq!(report.units.len(), 3);
    assert_eq!(report.manifest, dir.path().join("types/index.d.ts"));
    assert_eq!(report.stub, input);
    assert!(!report.dry_run);
    assert!(report.to_string().starts_with("split 3 constructs (4 local imports)"));
}

#[tokio::test]
async fn test_dry_run_leaves_input_alone() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("index.d.ts");
    std::fs::write(&input, NAMESPACED).unwrap();

    let report = split_file(&SplitConfig::new(&input).with_dry_run(true))
        .await
        .unwrap();
    assert!(report.dry_run);
    assert_eq!(report.constructs, 3);
    assert!(!dir.path().join("types").exists());
    assert_eq!(std::fs::read_to_string(&input).unwrap(), NAMESPACED);
}
