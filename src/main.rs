use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use typesplit::config::{
    DEFAULT_EXTENSION, DEFAULT_INPUT, DEFAULT_NAMESPACE, DEFAULT_RUNTIME, SplitConfig,
};
use typesplit::split_file;

/// Split a generated TypeScript declaration file into one file per type.
///
/// Every interface, type alias and class becomes its own unit with the
/// imports it needs. A manifest re-exports all units and the input file is
/// replaced by a one-line re-export of that manifest.
#[derive(Parser, Debug)]
#[command(name = "typesplit", version, about)]
struct Cli {
    /// Declaration file to split; overwritten with a re-export stub
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Directory for the unit files [default: <input dir>/types]
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Namespace whose body holds the declarations
    #[arg(short, long, default_value = DEFAULT_NAMESPACE)]
    namespace: String,

    /// Module the shared runtime aliases are imported from
    #[arg(long, default_value = DEFAULT_RUNTIME)]
    runtime: String,

    /// File extension of units and manifest
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Plan the split and report it without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn config(&self) -> SplitConfig {
        let mut config = SplitConfig::new(&self.input)
            .with_namespace(&self.namespace)
            .with_runtime(&self.runtime)
            .with_extension(&self.extension)
            .with_dry_run(self.dry_run);
        if let Some(out_dir) = &self.out_dir {
            config = config.with_out_dir(out_dir);
        }
        config
    }

    /// `RUST_LOG` wins over the verbosity flags
    fn env_filter(&self) -> EnvFilter {
        if std::env::var("RUST_LOG").is_ok() {
            return EnvFilter::from_default_env();
        }
        let level = if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        };
        EnvFilter::new(level)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.env_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match split_file(&cli.config()).await {
        Ok(report) => {
            if report.dry_run {
                for unit in &report.units {
                    println!("{}", unit.display());
                }
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("error while {}: {e}", e.stage());
            std::process::exit(1);
        }
    }
}
