use serde::{Deserialize, Serialize};

/// Occurrence count for a single email domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainEntry {
    /// The domain key (substring after the `@` of the email field).
    pub domain: String,

    /// Number of records observed with this domain. Always >= 1.
    pub occurrences: u64,
}

impl DomainEntry {
    #[must_use]
    pub fn new(domain: impl Into<String>, occurrences: u64) -> Self {
        Self {
            domain: domain.into(),
            occurrences,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_construction() {
        let entry = DomainEntry::new("gmail.com", 3);
        assert_eq!(entry.domain, "gmail.com");
        assert_eq!(entry.occurrences, 3);
    }
}
