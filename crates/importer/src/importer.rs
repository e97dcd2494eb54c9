use crate::config::ImporterConfig;
use crate::error::{ImporterError, Result};
use crate::pipeline;
use crate::stats::ImportStats;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tally_domain_store::{BTreeMapStore, DomainEntry, DomainStore};

/// Imports customer records and tallies email-domain occurrences.
///
/// Holds the run configuration and the ordered counting store; the store is
/// cleared and reused on every import, so one `Importer` can serve multiple
/// runs.
pub struct Importer {
    config: ImporterConfig,
    store: Box<dyn DomainStore>,
    last_stats: ImportStats,
}

impl std::fmt::Debug for Importer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Importer")
            .field("config", &self.config)
            .field("last_stats", &self.last_stats)
            .finish_non_exhaustive()
    }
}

impl Default for Importer {
    fn default() -> Self {
        Self::new()
    }
}

impl Importer {
    /// Importer with default configuration and the `BTreeMap` store backend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ImporterConfig::default(),
            store: Box::new(BTreeMapStore::new()),
            last_stats: ImportStats::new(),
        }
    }

    /// Importer with the given configuration. Zero concurrency or chunk size
    /// falls back to the defaults; an inconsistent record shape is
    /// [`ImporterError::InvalidConfig`].
    pub fn with_config(config: ImporterConfig) -> Result<Self> {
        let config = config.normalized();
        config.validate().map_err(ImporterError::InvalidConfig)?;
        Ok(Self {
            config,
            store: Box::new(BTreeMapStore::new()),
            last_stats: ImportStats::new(),
        })
    }

    /// Replace the store backend.
    #[must_use]
    pub fn with_store(mut self, store: Box<dyn DomainStore>) -> Self {
        self.store = store;
        self
    }

    /// Import a customer CSV file and return the sorted domain table.
    ///
    /// Fails only if `path` is not an existing regular file or cannot be
    /// opened; every per-record and per-read problem is absorbed (logged and
    /// skipped) per the recoverable-error policy.
    pub fn import(&mut self, path: impl AsRef<Path>) -> Result<Vec<DomainEntry>> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ImporterError::FileNotFound(path.to_path_buf()));
        }
        let file = File::open(path)?;
        Ok(self.import_from_reader(file))
    }

    /// Import from an already-open byte stream.
    ///
    /// This is the boundary the concurrency core is tested at: it accepts any
    /// readable stream and always completes with a (possibly empty) sorted
    /// table.
    pub fn import_from_reader(&mut self, source: impl Read) -> Vec<DomainEntry> {
        let mut stats = pipeline::run(source, &self.config, self.store.as_mut());

        let entries = self.store.get_all();
        stats.unique_domains = entries.len();
        log::info!(
            "import complete: {} records in {} chunks, {} counted across {} domains \
             ({} bad arity, {} bad email, {} unparseable, {} read errors)",
            stats.records,
            stats.chunks,
            stats.counted(),
            stats.unique_domains,
            stats.skipped_arity,
            stats.skipped_email,
            stats.skipped_parse,
            stats.read_errors
        );
        self.last_stats = stats;

        entries
    }

    /// Counters from the most recent run.
    #[must_use]
    pub fn last_stats(&self) -> &ImportStats {
        &self.last_stats
    }

    /// The configuration in effect, after normalization.
    #[must_use]
    pub fn config(&self) -> &ImporterConfig {
        &self.config
    }
}
