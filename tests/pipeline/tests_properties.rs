//! Properties every successful run must satisfy.

use std::collections::HashSet;

use crate::helpers::source_fixtures::*;
use crate::helpers::split_helpers::*;
use rstest::rstest;
use typesplit::graph::BUILTIN_NAMES;
use typesplit::split_file;

#[rstest]
#[case::two_interfaces(TWO_INTERFACES)]
#[case::union(UNION_ALIAS)]
#[case::builtins(BUILTIN_NAMES_AS_TYPES)]
#[case::generated_client(GENERATED_CLIENT)]
#[tokio::test]
async fn test_one_unit_and_one_manifest_line_per_construct(#[case] source: &str) {
    let workspace = SplitWorkspace::new(source);
    let report = split_file(&workspace.config()).await.unwrap();

    let expected: Vec<String> = plan(source)
        .document
        .names()
        .map(|n| n.to_string())
        .collect();
    let mut sorted = expected.clone();
    sorted.sort();
    assert_eq!(workspace.unit_names(), sorted);
    assert_eq!(report.units.len(), expected.len());

    let manifest = workspace.manifest();
    let exported: Vec<&str> = manifest
        .lines()
        .map(|line| {
            line.strip_prefix("export * from './")
                .and_then(|rest| rest.strip_suffix('\''))
                .unwrap_or_else(|| panic!("unexpected manifest line {line:?}"))
        })
        .collect();
    assert_eq!(exported, expected);
}

#[tokio::test]
async fn test_imports_only_name_other_local_constructs() {
    let workspace = SplitWorkspace::new(GENERATED_CLIENT);
    split_file(&workspace.config()).await.unwrap();

    let names: HashSet<&str> = GENERATED_CLIENT_NAMES.iter().copied().collect();
    for name in GENERATED_CLIENT_NAMES {
        let unit = workspace.unit(name);
        for import in local_imports(&unit) {
            assert_ne!(import, *name, "{name} imports itself");
            assert!(names.contains(import.as_str()), "{name} imports unknown {import}");
            assert!(
                !BUILTIN_NAMES.contains(&import.as_str()),
                "{name} imports builtin {import}"
            );
        }
    }
}

#[tokio::test]
async fn test_no_namespace_qualifier_left() {
    let workspace = SplitWorkspace::new(GENERATED_CLIENT);
    split_file(&workspace.config()).await.unwrap();

    for name in GENERATED_CLIENT_NAMES {
        let unit = workspace.unit(name);
        assert!(
            !declaration_text(&unit).contains("Prisma."),
            "qualifier left in {name}:\n{unit}"
        );
    }
}

#[tokio::test]
async fn test_shared_block_identical_in_every_unit() {
    let workspace = SplitWorkspace::new(GENERATED_CLIENT);
    let config = workspace.config();
    split_file(&config).await.unwrap();

    let block = config.shared_import_block();
    for name in GENERATED_CLIENT_NAMES {
        let unit = workspace.unit(name);
        let preamble = unit.split_once("\n\n").unwrap().0;
        assert!(
            format!("{preamble}\n").ends_with(&block),
            "shared block missing in {name}"
        );
    }
}

#[tokio::test]
async fn test_rerun_is_byte_identical() {
    let workspace = SplitWorkspace::new(GENERATED_CLIENT);

    split_file(&workspace.config()).await.unwrap();
    let first = workspace.snapshot();

    workspace.restore(GENERATED_CLIENT);
    split_file(&workspace.config()).await.unwrap();
    let second = workspace.snapshot();

    assert_eq!(first.len(), GENERATED_CLIENT_NAMES.len() + 1);
    assert_eq!(first, second);
}
