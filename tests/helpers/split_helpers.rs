//! Helpers for running splits in a temporary client layout.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use typesplit::config::SplitConfig;
use typesplit::{SplitPlan, split_source};

/// A temporary project with the document at `node_modules/.prisma/client/index.d.ts`
pub struct SplitWorkspace {
    pub dir: TempDir,
    pub input: PathBuf,
}

impl SplitWorkspace {
    pub fn new(source: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input = dir.path().join("node_modules/.prisma/client/index.d.ts");
        std::fs::create_dir_all(input.parent().unwrap()).expect("create client dir");
        std::fs::write(&input, source).expect("write input");
        Self { dir, input }
    }

    pub fn config(&self) -> SplitConfig {
        SplitConfig::new(&self.input)
    }

    pub fn types_dir(&self) -> PathBuf {
        self.input.parent().unwrap().join("types")
    }

    /// Put the original document back, as a regeneration would
    pub fn restore(&self, source: &str) {
        std::fs::write(&self.input, source).expect("restore input");
    }

    pub fn unit(&self, name: &str) -> String {
        read(&self.types_dir().join(format!("{name}.d.ts")))
    }

    pub fn manifest(&self) -> String {
        read(&self.types_dir().join("index.d.ts"))
    }

    pub fn input_contents(&self) -> String {
        read(&self.input)
    }

    /// Stems of all unit files, sorted, manifest excluded
    pub fn unit_names(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.types_dir())
            .expect("read types dir")
            .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
            .filter_map(|file| file.strip_suffix(".d.ts").map(str::to_string))
            .filter(|stem| stem != "index")
            .collect();
        names.sort();
        names
    }

    /// Every written file with its contents, sorted by file name
    pub fn snapshot(&self) -> Vec<(String, String)> {
        let mut files: Vec<(String, String)> = std::fs::read_dir(self.types_dir())
            .expect("read types dir")
            .map(|entry| {
                let path = entry.expect("dir entry").path();
                let name = path.file_name().unwrap().to_string_lossy().into_owned();
                (name, read(&path))
            })
            .collect();
        files.sort();
        files
    }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

/// Plan a split with the default configuration
pub fn plan(source: &str) -> SplitPlan {
    split_source(source, &SplitConfig::default()).unwrap_or_else(|e| panic!("{e}"))
}

/// Local construct names imported by a unit
pub fn local_imports(contents: &str) -> Vec<String> {
    contents
        .lines()
        .filter_map(|line| line.strip_prefix("import { "))
        .filter_map(|rest| rest.split_once(" } from './"))
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Unit text after the import preamble
pub fn declaration_text(contents: &str) -> &str {
    contents
        .split_once("\n\n")
        .map(|(_, declaration)| declaration)
        .unwrap_or_else(|| panic!("no blank line after imports in:\n{contents}"))
}
