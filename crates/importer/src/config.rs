use serde::{Deserialize, Serialize};

/// Default number of parallel extractor workers.
pub const DEFAULT_CONCURRENCY: usize = 40;

/// Default byte window for each raw read.
pub const DEFAULT_CHUNK_SIZE: usize = 64_000;

/// Default record arity for customer rows.
pub const DEFAULT_EXPECTED_FIELDS: usize = 5;

/// Default 0-indexed position of the email field.
pub const DEFAULT_EMAIL_FIELD: usize = 2;

/// Configuration for an import run.
///
/// All process-wide defaults (concurrency, chunk size, record shape) live
/// here rather than as ambient globals; the pipeline only ever reads them
/// through this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImporterConfig {
    /// Number of parallel extractor workers. Zero falls back to the default.
    pub concurrency: usize,

    /// Byte window size for each raw read. Bounds hand-off granularity, not
    /// record length. Zero falls back to the default.
    pub chunk_size: usize,

    /// Expected number of fields per record; records with any other arity
    /// are skipped.
    pub expected_fields: usize,

    /// 0-indexed position of the email field within a record.
    pub email_field: usize,
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            chunk_size: DEFAULT_CHUNK_SIZE,
            expected_fields: DEFAULT_EXPECTED_FIELDS,
            email_field: DEFAULT_EMAIL_FIELD,
        }
    }
}

impl ImporterConfig {
    /// Replace non-positive concurrency/chunk-size values with the defaults.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.concurrency == 0 {
            self.concurrency = DEFAULT_CONCURRENCY;
        }
        if self.chunk_size == 0 {
            self.chunk_size = DEFAULT_CHUNK_SIZE;
        }
        self
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.expected_fields == 0 {
            return Err("expected_fields must be > 0".to_string());
        }

        if self.email_field >= self.expected_fields {
            return Err(format!(
                "email_field ({}) must be < expected_fields ({})",
                self.email_field, self.expected_fields
            ));
        }

        Ok(())
    }
}
