//! Run configuration and output layout.
//!
//! [`SplitConfig`] carries every knob of a run. All defaults follow the
//! layout of a generated client package: the document lives at
//! `node_modules/.prisma/client/index.d.ts`, its declarations sit inside
//! `namespace Prisma`, and units land in a `types/` directory next to it.

use std::fmt::Write as _;
use std::path::{Component, Path, PathBuf};

use crate::error::{Result, SplitError};

pub const DEFAULT_INPUT: &str = "node_modules/.prisma/client/index.d.ts";
pub const DEFAULT_NAMESPACE: &str = "Prisma";
pub const DEFAULT_RUNTIME: &str = "@prisma/client/runtime/library";
pub const DEFAULT_OUT_DIR_NAME: &str = "types";
pub const DEFAULT_EXTENSION: &str = ".d.ts";
pub const DEFAULT_MANIFEST_STEM: &str = "index";

/// One line of the import block shared by every unit.
///
/// Paths are relative to the runtime module, so the same table works for any
/// `--runtime` specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharedImport {
    /// `import * as <alias> from '<runtime>'`
    Namespace { alias: &'static str },
    /// `import <alias> = <path>`
    Alias {
        alias: &'static str,
        path: &'static str,
    },
    /// `import type { <names> } from '<runtime>'`
    Types { names: &'static [&'static str] },
}

impl SharedImport {
    /// Names this line brings into scope
    pub fn bound_names(&self) -> &[&'static str] {
        match self {
            Self::Namespace { alias } | Self::Alias { alias, .. } => std::slice::from_ref(alias),
            Self::Types { names } => *names,
        }
    }

    pub fn render(&self, runtime: &str) -> String {
        match self {
            Self::Namespace { alias } => format!("import * as {alias} from '{runtime}'"),
            Self::Alias { alias, path } => format!("import {alias} = {path}"),
            Self::Types { names } => {
                format!("import type {{ {} }} from '{runtime}'", names.join(", "))
            }
        }
    }
}

/// Runtime aliases the generated declarations use without importing them
pub static DEFAULT_SHARED_IMPORTS: &[SharedImport] = &[
    SharedImport::Namespace { alias: "runtime" },
    SharedImport::Alias {
        alias: "$Types",
        path: "runtime.Types",
    },
    SharedImport::Alias {
        alias: "$Public",
        path: "runtime.Types.Public",
    },
    SharedImport::Alias {
        alias: "$Utils",
        path: "runtime.Types.Utils",
    },
    SharedImport::Alias {
        alias: "$Extensions",
        path: "runtime.Types.Extensions",
    },
    SharedImport::Alias {
        alias: "$Result",
        path: "runtime.Types.Result",
    },
    SharedImport::Types {
        names: &[
            "JsonObject",
            "JsonArray",
            "JsonValue",
            "InputJsonObject",
            "InputJsonArray",
            "InputJsonValue",
        ],
    },
];

/// Settings for one split run.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Document to split; overwritten by the stub at the end of the run
    pub input: PathBuf,
    /// Unit directory, `<input dir>/types` when unset
    pub out_dir: Option<PathBuf>,
    /// Namespace whose body holds the declarations
    pub namespace: String,
    /// Module specifier the shared aliases import from
    pub runtime: String,
    /// Suffix of every written file, including the leading dot
    pub extension: String,
    /// File stem of the manifest
    pub manifest_stem: String,
    pub shared_imports: &'static [SharedImport],
    /// Plan the split without touching the filesystem
    pub dry_run: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            out_dir: None,
            namespace: DEFAULT_NAMESPACE.to_string(),
            runtime: DEFAULT_RUNTIME.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            manifest_stem: DEFAULT_MANIFEST_STEM.to_string(),
            shared_imports: DEFAULT_SHARED_IMPORTS,
            dry_run: false,
        }
    }
}

impl SplitConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self::default().with_input(input)
    }

    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(out_dir.into());
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_runtime(mut self, runtime: impl Into<String>) -> Self {
        self.runtime = runtime.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_shared_imports(mut self, shared_imports: &'static [SharedImport]) -> Self {
        self.shared_imports = shared_imports;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Directory containing the input document
    pub fn input_dir(&self) -> &Path {
        self.input.parent().unwrap_or(Path::new(""))
    }

    /// Resolved unit directory
    pub fn out_dir(&self) -> PathBuf {
        match &self.out_dir {
            Some(dir) => dir.clone(),
            None => self.input_dir().join(DEFAULT_OUT_DIR_NAME),
        }
    }

    /// Path of the unit file for construct `name`
    pub fn unit_path(&self, name: &str) -> PathBuf {
        self.out_dir().join(format!("{name}{}", self.extension))
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.out_dir()
            .join(format!("{}{}", self.manifest_stem, self.extension))
    }

    /// Module specifier of the manifest as seen from the input document.
    ///
    /// `./types` for the default layout; the manifest stem is appended only
    /// when it is not `index`, which module resolution finds on its own.
    pub fn manifest_specifier(&self) -> Result<String> {
        let out_dir = self.out_dir();
        let relative = out_dir.strip_prefix(self.input_dir()).map_err(|_| {
            SplitError::invalid_config(format!(
                "output directory {} is not inside {}",
                out_dir.display(),
                display_dir(self.input_dir())
            ))
        })?;

        let mut specifier = String::from(".");
        for component in relative.components() {
            match component {
                Component::Normal(part) => {
                    let _ = write!(specifier, "/{}", part.to_string_lossy());
                }
                Component::CurDir => {}
                _ => {
                    return Err(SplitError::invalid_config(format!(
                        "output directory {} must not leave {}",
                        out_dir.display(),
                        display_dir(self.input_dir())
                    )));
                }
            }
        }
        if specifier == "." {
            return Err(SplitError::invalid_config(
                "output directory must differ from the input's directory",
            ));
        }
        if self.manifest_stem != DEFAULT_MANIFEST_STEM {
            let _ = write!(specifier, "/{}", self.manifest_stem);
        }
        Ok(specifier)
    }

    /// Check the layout before anything is read or written
    pub fn validate(&self) -> Result<()> {
        if !is_identifier(&self.namespace) {
            return Err(SplitError::invalid_config(format!(
                "namespace `{}` is not an identifier",
                self.namespace
            )));
        }
        if !self.extension.starts_with('.') || self.extension.len() < 2 {
            return Err(SplitError::invalid_config(format!(
                "extension `{}` must start with '.'",
                self.extension
            )));
        }
        if self.manifest_stem.is_empty() || self.manifest_stem.contains(['/', '\\']) {
            return Err(SplitError::invalid_config(format!(
                "manifest name `{}` is not a plain file stem",
                self.manifest_stem
            )));
        }
        if self.runtime.is_empty() {
            return Err(SplitError::invalid_config("runtime module must not be empty"));
        }
        self.manifest_specifier().map(|_| ())
    }

    /// Whether the shared import block already binds `name`
    pub fn is_shared_name(&self, name: &str) -> bool {
        self.shared_imports
            .iter()
            .any(|import| import.bound_names().contains(&name))
    }

    /// The shared import block, one rendered line per table entry
    pub fn shared_import_block(&self) -> String {
        let mut block = String::new();
        for import in self.shared_imports {
            block.push_str(&import.render(&self.runtime));
            block.push('\n');
        }
        block
    }
}

fn display_dir(dir: &Path) -> String {
    if dir.as_os_str().is_empty() {
        ".".to_string()
    } else {
        dir.display().to_string()
    }
}

/// ASCII identifier check; generated namespaces never use other characters
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
