use crate::config::ImporterConfig;

/// Email local-part/domain separator.
pub const EMAIL_SEPARATOR: char = '@';

/// Per-chunk extraction counters, merged into the run stats by the pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExtractionCounts {
    /// Records successfully parsed from the chunk.
    pub records: u64,

    /// Records skipped for wrong field arity.
    pub bad_arity: u64,

    /// Records skipped because the email field did not contain exactly one
    /// `@`.
    pub bad_email: u64,

    /// Rows the csv reader failed to parse at all.
    pub bad_parse: u64,
}

impl ExtractionCounts {
    pub fn merge(&mut self, other: ExtractionCounts) {
        self.records += other.records;
        self.bad_arity += other.bad_arity;
        self.bad_email += other.bad_email;
        self.bad_parse += other.bad_parse;
    }
}

/// Parse one record-aligned chunk and emit a domain key per valid record.
///
/// Validation order per record: field count must match the expected arity,
/// then the email field must split on `@` into exactly two parts. Each
/// malformed record produces one log line and is otherwise ignored; nothing
/// here stops the worker or the pipeline.
pub fn extract_domains(
    chunk: &str,
    config: &ImporterConfig,
    mut emit: impl FnMut(String),
) -> ExtractionCounts {
    let mut counts = ExtractionCounts::default();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(chunk.as_bytes());

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                log::warn!("failed to parse record: {e}");
                counts.bad_parse += 1;
                continue;
            }
        };
        counts.records += 1;

        if record.len() != config.expected_fields {
            log::warn!(
                "record has incorrect field count: got {}, want {}",
                record.len(),
                config.expected_fields
            );
            counts.bad_arity += 1;
            continue;
        }

        // Arity was checked above and email_field < expected_fields is a
        // config invariant, so the field is present.
        let email = record.get(config.email_field).unwrap_or_default();
        match split_domain(email) {
            Some(domain) => emit(domain.to_string()),
            None => {
                log::warn!("failed to extract domain from email {email:?}");
                counts.bad_email += 1;
            }
        }
    }

    counts
}

/// The domain part of `email`, provided it contains exactly one `@`.
fn split_domain(email: &str) -> Option<&str> {
    let mut parts = email.split(EMAIL_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(_local), Some(domain), None) => Some(domain),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extract(chunk: &str) -> (Vec<String>, ExtractionCounts) {
        let config = ImporterConfig::default();
        let mut domains = Vec::new();
        let counts = extract_domains(chunk, &config, |d| domains.push(d));
        (domains, counts)
    }

    #[test]
    fn emits_domain_for_valid_record() {
        let (domains, counts) = extract("a,b,a@gmail.com,d,e\n");
        assert_eq!(domains, vec!["gmail.com".to_string()]);
        assert_eq!(counts.records, 1);
        assert_eq!(counts.bad_arity, 0);
        assert_eq!(counts.bad_email, 0);
    }

    #[test]
    fn skips_record_with_wrong_arity() {
        let (domains, counts) = extract("only,three,fields\n");
        assert!(domains.is_empty());
        assert_eq!(counts.bad_arity, 1);
    }

    #[test]
    fn skips_email_without_at_sign() {
        let (domains, counts) = extract("a,b,gmail.com,d,e\n");
        assert!(domains.is_empty());
        assert_eq!(counts.bad_email, 1);
    }

    #[test]
    fn skips_email_with_multiple_at_signs() {
        let (domains, counts) = extract("a,b,me@x@gmail.com,d,e\n");
        assert!(domains.is_empty());
        assert_eq!(counts.bad_email, 1);
    }

    #[test]
    fn handles_quoted_fields_with_embedded_commas() {
        let (domains, counts) = extract("\"Doe, Jane\",b,jane@corp.io,d,e\n");
        assert_eq!(domains, vec!["corp.io".to_string()]);
        assert_eq!(counts.records, 1);
    }

    #[test]
    fn leading_whitespace_stays_part_of_the_field() {
        // Fields are not trimmed; the split on `@` still isolates the domain.
        let (domains, _) = extract("a, b, me@hectorgabucio.com, a, b\n");
        assert_eq!(domains, vec!["hectorgabucio.com".to_string()]);
    }

    #[test]
    fn merge_accumulates_every_counter() {
        let mut total = ExtractionCounts {
            records: 1,
            bad_arity: 1,
            bad_email: 0,
            bad_parse: 0,
        };
        total.merge(ExtractionCounts {
            records: 2,
            bad_arity: 0,
            bad_email: 1,
            bad_parse: 1,
        });

        assert_eq!(total.records, 3);
        assert_eq!(total.bad_arity, 1);
        assert_eq!(total.bad_email, 1);
        assert_eq!(total.bad_parse, 1);
    }

    #[test]
    fn processes_every_record_in_a_multi_line_chunk() {
        let chunk = "a,b,one@a.com,d,e\na,b,two@b.com,d,e\na,b,three@a.com,d,e\n";
        let (domains, counts) = extract(chunk);
        assert_eq!(counts.records, 3);
        assert_eq!(domains.len(), 3);
    }
}
