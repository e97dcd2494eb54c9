use crate::types::DomainEntry;
use std::collections::BTreeMap;

/// Pluggable backend mapping domain key to occurrence count.
///
/// The import pipeline routes all writes through a single aggregator, so
/// implementations are never written from more than one thread at a time and
/// need no internal synchronization.
pub trait DomainStore: Send {
    /// Return the count stored for `domain`, if any.
    fn get(&self, domain: &str) -> Option<u64>;

    /// Upsert the count for `domain`.
    fn save(&mut self, domain: &str, count: u64);

    /// Empty the table. Called at the start of each run so a store instance
    /// can be reused across imports.
    fn clear(&mut self);

    /// All entries, ascending by domain key.
    fn get_all(&self) -> Vec<DomainEntry>;
}

/// Default ordered backend on top of `std::collections::BTreeMap`.
#[derive(Debug, Default)]
pub struct BTreeMapStore {
    data: BTreeMap<String, u64>,
}

impl BTreeMapStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DomainStore for BTreeMapStore {
    fn get(&self, domain: &str) -> Option<u64> {
        self.data.get(domain).copied()
    }

    fn save(&mut self, domain: &str, count: u64) {
        self.data.insert(domain.to_string(), count);
    }

    fn clear(&mut self) {
        self.data.clear();
    }

    fn get_all(&self) -> Vec<DomainEntry> {
        self.data
            .iter()
            .map(|(domain, count)| DomainEntry::new(domain.clone(), *count))
            .collect()
    }
}
