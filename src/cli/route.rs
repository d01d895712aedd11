//! CLI route: run context. Resolves the two roots and dispatches to the restructurer.

use crate::bundle::{Restructurer, RestructureReport};
use crate::cli::parse::Cli;
use crate::error::BundleError;
use crate::logging::LoggingConfig;
use crate::tree::path::{resolve_root, root_index_path};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Runtime context for CLI execution: the resolved source and destination roots.
pub struct RunContext {
    source_root: PathBuf,
    destination_root: PathBuf,
}

impl RunContext {
    /// Resolve both roots. Missing roots fail here, before any output is written.
    pub fn new(source: &Path, destination: &Path) -> Result<Self, BundleError> {
        let source_root = resolve_root(source, |path| BundleError::SourceNotFound { path })?;
        let destination_root = resolve_root(destination, |path| BundleError::IndexNotFound {
            path: root_index_path(&path),
        })?;
        debug!(
            source = %source_root.display(),
            destination = %destination_root.display(),
            "Resolved roots"
        );

        Ok(Self {
            source_root,
            destination_root,
        })
    }

    pub fn execute(&self) -> Result<RestructureReport, BundleError> {
        Restructurer::new(self.source_root.clone(), self.destination_root.clone()).run()
    }
}

/// Build logging configuration from CLI flags.
/// Precedence: explicit flags override --quiet/--verbose override defaults.
pub fn logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = LoggingConfig::default();

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if cli.no_color {
        config.color = false;
    }

    config
}
