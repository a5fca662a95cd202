//! The split run, stage by stage.
//!
//! ```text
//! Idle → Reading → Parsing → GraphBuilding → Filtering → Emitting → ManifestWriting → Done
//!                                  (any stage) → Failed
//! ```
//!
//! [`split_source`] covers everything from parsing to rendering and never
//! touches the filesystem. [`split_file`] adds the asynchronous read before
//! it and the writes after it.

use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::base::LineIndex;
use crate::config::SplitConfig;
use crate::document::Document;
use crate::emit::{self, EmittedUnit, Manifest};
use crate::error::{Result, SplitError};
use crate::graph::{self, DependencyGraph};
use crate::parser;

/// Position of a run in the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Idle,
    Reading,
    Parsing,
    GraphBuilding,
    Filtering,
    Emitting,
    ManifestWriting,
    Done,
    Failed,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Reading => "reading",
            Self::Parsing => "parsing",
            Self::GraphBuilding => "graph building",
            Self::Filtering => "filtering",
            Self::Emitting => "emitting",
            Self::ManifestWriting => "manifest writing",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks the current stage and how long each one took
#[derive(Debug)]
struct Run {
    stage: Stage,
    entered: Instant,
    started: Instant,
}

impl Run {
    fn new() -> Self {
        let now = Instant::now();
        Self {
            stage: Stage::Idle,
            entered: now,
            started: now,
        }
    }

    /// Move forward to `next`; stages never repeat
    fn advance(&mut self, next: Stage) {
        debug_assert!(next > self.stage, "{} -> {}", self.stage, next);
        tracing::debug!("{} finished in {:?}", self.stage, self.entered.elapsed());
        tracing::info!("{next}");
        self.stage = next;
        self.entered = Instant::now();
    }

    fn fail(&mut self, error: &SplitError) {
        tracing::debug!("{} failed after {:?}: {error}", self.stage, self.entered.elapsed());
        self.stage = Stage::Failed;
    }
}

/// Everything a run would write, computed without touching the filesystem
#[derive(Debug, Clone)]
pub struct SplitPlan {
    pub document: Document,
    /// Dependencies restricted to local constructs
    pub graph: DependencyGraph,
    /// Units in document order
    pub units: Vec<EmittedUnit>,
    pub manifest: Manifest,
}

impl SplitPlan {
    pub fn unit(&self, name: &str) -> Option<&EmittedUnit> {
        self.units.iter().find(|u| u.name == name)
    }
}

/// Summary of a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReport {
    pub constructs: usize,
    /// Local dependency edges across all units
    pub edges: usize,
    pub units: Vec<PathBuf>,
    pub manifest: PathBuf,
    /// The overwritten input
    pub stub: PathBuf,
    /// Nothing was written
    pub dry_run: bool,
    pub elapsed: Duration,
}

impl fmt::Display for SplitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.dry_run { "would split" } else { "split" };
        write!(
            f,
            "{verb} {} constructs ({} local imports) into {} in {:?}",
            self.constructs,
            self.edges,
            self.manifest
                .parent()
                .map(|dir| dir.display().to_string())
                .unwrap_or_default(),
            self.elapsed
        )
    }
}

/// Plan the split of `source`, from parsing up to rendered units and manifest
pub fn split_source(source: &str, config: &SplitConfig) -> Result<SplitPlan> {
    let mut run = Run::new();
    run.stage = Stage::Reading;
    plan(source, config, &mut run).inspect_err(|e| run.fail(e))
}

/// Split the document at `config.input`.
///
/// Reads the input once, plans the split, then writes every unit followed by
/// the manifest and the stub over the input. With `dry_run` set the run stops
/// after planning. The first error aborts the run; units already written stay
/// on disk.
pub async fn split_file(config: &SplitConfig) -> Result<SplitReport> {
    let mut run = Run::new();
    execute(config, &mut run).await.inspect_err(|e| run.fail(e))
}

async fn execute(config: &SplitConfig, run: &mut Run) -> Result<SplitReport> {
    config.validate()?;

    run.advance(Stage::Reading);
    let source = tokio::fs::read_to_string(&config.input)
        .await
        .map_err(|source| SplitError::read(&config.input, source))?;
    tracing::info!("read {} ({} bytes)", config.input.display(), source.len());

    let plan = plan(&source, config, run)?;

    if !config.dry_run {
        run.advance(Stage::Emitting);
        emit::write_units(&config.out_dir(), &plan.units)?;

        run.advance(Stage::ManifestWriting);
        emit::write_manifest(&plan.manifest)?;
    }

    run.advance(Stage::Done);
    let report = SplitReport {
        constructs: plan.document.len(),
        edges: plan.graph.edge_count(),
        units: plan.units.iter().map(|u| u.path.clone()).collect(),
        manifest: plan.manifest.path.clone(),
        stub: plan.manifest.stub_path.clone(),
        dry_run: config.dry_run,
        elapsed: run.started.elapsed(),
    };
    tracing::info!("{report}");
    Ok(report)
}

fn plan(source: &str, config: &SplitConfig, run: &mut Run) -> Result<SplitPlan> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    run.advance(Stage::Parsing);
    let parsed = parser::parse(source);
    let index = LineIndex::new(source);
    if !parsed.ok() {
        return Err(SplitError::Parse {
            name: config.input.display().to_string(),
            diagnostics: parsed.errors.iter().map(|e| e.render(&index)).collect(),
        });
    }
    let document = Document::unwrap_namespace(&parsed.source_file(), &config.namespace, &index)?;
    match &document.namespace {
        Some(ns) => tracing::info!("found {} constructs in namespace {ns}", document.len()),
        None => tracing::info!("found {} top-level constructs", document.len()),
    }
    if document.is_empty() {
        tracing::warn!("no interface, type alias or class declarations found");
    }

    run.advance(Stage::GraphBuilding);
    let raw = graph::raw_dependencies(&document);

    run.advance(Stage::Filtering);
    let graph = graph::filter_to_known(&raw, &document);
    tracing::info!(
        "kept {} of {} references as local imports",
        graph.edge_count(),
        raw.edge_count()
    );

    let namespace = document.namespace.as_deref();
    let mut units = Vec::with_capacity(document.len());
    for construct in &document.constructs {
        let deps = graph
            .dependencies(&construct.name)
            .cloned()
            .unwrap_or_default();
        let unit = emit::render_unit(construct, &deps, namespace, config);
        tracing::debug!("{}: imports {:?}", unit.name, unit.imports);
        units.push(unit);
    }
    let manifest = emit::build_manifest(&graph, config)?;

    Ok(SplitPlan {
        document,
        graph,
        units,
        manifest,
    })
}

#[cfg(test)]
mod tests;
