use serde::{Deserialize, Serialize};

/// Counters for one import run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportStats {
    /// Record-aligned chunks handed to the extractor pool.
    pub chunks: u64,

    /// Records parsed across all chunks (valid or not).
    pub records: u64,

    /// Records skipped for wrong field arity.
    pub skipped_arity: u64,

    /// Records skipped for a malformed email field.
    pub skipped_email: u64,

    /// Rows the csv reader failed to parse at all.
    pub skipped_parse: u64,

    /// Raw reads skipped after an I/O error.
    pub read_errors: u64,

    /// Distinct domains in the final table.
    pub unique_domains: usize,
}

impl ImportStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that contributed a count to the final table.
    #[must_use]
    pub fn counted(&self) -> u64 {
        self.records - self.skipped_arity - self.skipped_email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counted_excludes_skipped_records() {
        let stats = ImportStats {
            records: 10,
            skipped_arity: 2,
            skipped_email: 3,
            ..Default::default()
        };
        assert_eq!(stats.counted(), 5);
    }
}
