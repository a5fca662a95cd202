//! Output layout, the replacement stub, and failure behavior.

use crate::helpers::source_fixtures::*;
use crate::helpers::split_helpers::*;
use typesplit::{SplitError, Stage, split_file};

#[tokio::test]
async fn test_input_replaced_by_stub() {
    let workspace = SplitWorkspace::new(TWO_INTERFACES);
    let report = split_file(&workspace.config()).await.unwrap();

    assert_eq!(workspace.input_contents(), "export * from './types'\n");
    assert_eq!(report.stub, workspace.input);
    assert_eq!(report.manifest, workspace.types_dir().join("index.d.ts"));
}

#[tokio::test]
async fn test_custom_out_dir_and_extension() {
    let workspace = SplitWorkspace::new(TWO_INTERFACES);
    let out_dir = workspace.input.parent().unwrap().join("split/units");
    let config = workspace
        .config()
        .with_out_dir(&out_dir)
        .with_extension(".ts");

    split_file(&config).await.unwrap();

    assert!(out_dir.join("A.ts").is_file());
    assert!(out_dir.join("B.ts").is_file());
    assert_eq!(
        std::fs::read_to_string(out_dir.join("index.ts")).unwrap(),
        "export * from './A'\nexport * from './B'\n"
    );
    assert_eq!(workspace.input_contents(), "export * from './split/units'\n");
}

#[tokio::test]
async fn test_custom_runtime_module() {
    let workspace = SplitWorkspace::new(TWO_INTERFACES);
    let config = workspace.config().with_runtime("./runtime/library");

    split_file(&config).await.unwrap();

    let unit = workspace.unit("B");
    assert!(unit.contains("import * as runtime from './runtime/library'\n"));
    assert!(unit.contains("} from './runtime/library'\n"));
}

#[tokio::test]
async fn test_custom_namespace() {
    let source = "declare namespace Db {\n  interface Row { cells: Db.Cell[] }\n  interface Cell {}\n}\n";
    let workspace = SplitWorkspace::new(source);

    split_file(&workspace.config().with_namespace("Db"))
        .await
        .unwrap();

    let row = workspace.unit("Row");
    assert_eq!(local_imports(&row), vec!["Cell"]);
    assert_eq!(
        declaration_text(&row),
        "export interface Row { cells: Cell[] }\n"
    );
}

#[tokio::test]
async fn test_dry_run_writes_nothing() {
    let workspace = SplitWorkspace::new(GENERATED_CLIENT);
    let report = split_file(&workspace.config().with_dry_run(true))
        .await
        .unwrap();

    assert!(report.dry_run);
    assert_eq!(report.constructs, GENERATED_CLIENT_NAMES.len());
    assert!(!workspace.types_dir().exists());
    assert_eq!(workspace.input_contents(), GENERATED_CLIENT);
}

#[tokio::test]
async fn test_parse_failure_leaves_input_untouched() {
    let source = "export namespace Prisma {\n  export type A = {\n";
    let workspace = SplitWorkspace::new(source);

    let err = split_file(&workspace.config()).await.unwrap_err();
    assert_eq!(err.stage(), Stage::Parsing);
    assert!(matches!(err, SplitError::Parse { .. }));
    assert!(err.to_string().contains("E0202"), "{err}");
    assert!(!workspace.types_dir().exists());
    assert_eq!(workspace.input_contents(), source);
}

#[tokio::test]
async fn test_duplicate_construct_is_fatal() {
    let workspace = SplitWorkspace::new("type A = 1\ninterface A {}\n");

    let err = split_file(&workspace.config()).await.unwrap_err();
    assert_eq!(err.stage(), Stage::Parsing);
    assert_eq!(
        err.to_string(),
        "duplicate interface `A` at 2:11, first declared at 1:6"
    );
}

#[tokio::test]
async fn test_missing_input_is_a_read_error() {
    let workspace = SplitWorkspace::new(TWO_INTERFACES);
    std::fs::remove_file(&workspace.input).unwrap();

    let err = split_file(&workspace.config()).await.unwrap_err();
    assert_eq!(err.stage(), Stage::Reading);
    assert!(matches!(err, SplitError::Read { .. }));
}

#[tokio::test]
async fn test_unwritable_unit_aborts_before_manifest() {
    let workspace = SplitWorkspace::new(TWO_INTERFACES);
    std::fs::create_dir_all(workspace.types_dir()).unwrap();
    // A directory where unit B should go makes its write fail
    std::fs::create_dir_all(workspace.types_dir().join("B.d.ts")).unwrap();

    let err = split_file(&workspace.config()).await.unwrap_err();
    assert_eq!(err.stage(), Stage::Emitting);
    assert!(workspace.types_dir().join("A.d.ts").is_file());
    assert!(!workspace.types_dir().join("index.d.ts").exists());
    assert_eq!(workspace.input_contents(), TWO_INTERFACES);
}

#[tokio::test]
async fn test_out_dir_outside_input_dir_is_rejected() {
    let workspace = SplitWorkspace::new(TWO_INTERFACES);
    let config = workspace.config().with_out_dir(workspace.dir.path().join("types"));

    let err = split_file(&config).await.unwrap_err();
    assert!(matches!(err, SplitError::InvalidConfig(_)));
    assert_eq!(workspace.input_contents(), TWO_INTERFACES);
}
