//! Extraction runs: execute extractors and write their output files.

use crate::error::Result;
use crate::extractor::{Extractor, ExtractorKind};
use crate::registry::RegistrySnapshot;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Extraction run configuration.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Extractors to run, in order.
    pub extractors: Vec<ExtractorKind>,
    /// Entity names to keep in `entities.json`; `None` keeps all.
    pub entity_filter: Option<Vec<String>>,
    /// Pretty-print output JSON.
    pub pretty: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            extractors: ExtractorKind::ALL.to_vec(),
            entity_filter: None,
            pretty: true,
        }
    }
}

impl ExtractorConfig {
    /// Run only the given extractors.
    pub fn with_extractors(mut self, extractors: Vec<ExtractorKind>) -> Self {
        self.extractors = extractors;
        self
    }

    /// Restrict `entities.json` to the named entity types.
    pub fn with_entity_filter(mut self, names: Vec<String>) -> Self {
        self.entity_filter = Some(names);
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Outcome of a run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Files written, in run order.
    pub written: Vec<PathBuf>,
    /// Failed extractors with their error messages.
    pub failed: Vec<(String, String)>,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs extractors over one snapshot.
pub struct ExtractionRun {
    snapshot: RegistrySnapshot,
    config: ExtractorConfig,
}

impl ExtractionRun {
    /// Create a run with default configuration.
    pub fn new(snapshot: RegistrySnapshot) -> Self {
        Self {
            snapshot,
            config: ExtractorConfig::default(),
        }
    }

    /// Create a run with custom configuration.
    pub fn with_config(snapshot: RegistrySnapshot, config: ExtractorConfig) -> Self {
        Self { snapshot, config }
    }

    /// Run every configured extractor, writing into `output_dir`.
    ///
    /// Only failing to create the output directory aborts the run; a failing
    /// extractor is logged and recorded in the summary.
    pub fn run<P: AsRef<Path>>(&self, output_dir: P) -> Result<RunSummary> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)?;

        let started = Instant::now();
        let mut summary = RunSummary::default();

        for kind in &self.config.extractors {
            let extractor = kind.create(&self.config);
            match self.write_one(&*extractor, output_dir) {
                Ok(path) => {
                    info!("Wrote {}", path.display());
                    summary.written.push(path);
                }
                Err(e) => {
                    error!(
                        extractor = extractor.name(),
                        "Extractor for \"{}\" failed: {}",
                        extractor.file_name(),
                        e
                    );
                    summary
                        .failed
                        .push((extractor.name().to_string(), e.to_string()));
                }
            }
        }

        summary.elapsed = started.elapsed();
        info!("Done, took {}ms", summary.elapsed.as_millis());
        Ok(summary)
    }

    /// Run a single extractor and write its file.
    pub fn write_one(&self, extractor: &dyn Extractor, output_dir: &Path) -> Result<PathBuf> {
        let value = extractor.extract(&self.snapshot)?;
        let path = output_dir.join(extractor.file_name());

        let mut writer = BufWriter::new(File::create(&path)?);
        if self.config.pretty {
            serde_json::to_writer_pretty(&mut writer, &value)?;
        } else {
            serde_json::to_writer(&mut writer, &value)?;
        }
        writer.flush()?;

        Ok(path)
    }
}
