//! # Tally Importer
//!
//! Chunked concurrent extraction pipeline for customer CSV streams: read raw
//! bytes in fixed windows, repair record boundaries split across reads, fan
//! record-aligned chunks out to a pool of extractor workers, fan the
//! extracted email-domain keys in to a single aggregator, and return the
//! resulting domain → occurrence table sorted ascending by key.
//!
//! ## Architecture
//!
//! ```text
//! raw bytes
//!     │
//!     ├──> ChunkReader (residual bookkeeping, record-aligned chunks)
//!     │
//!     ├──> chunk channel (rendezvous)
//!     │        ├─> extractor worker ─┐
//!     │        ├─> extractor worker ─┤   parse records, isolate domains
//!     │        └─> extractor worker ─┘
//!     │
//!     ├──> key channel (rendezvous)
//!     │
//!     └──> aggregator (single writer) ──> DomainStore ──> sorted entries
//! ```
//!
//! Memory stays bounded by chunk size × worker count plus the final table,
//! so inputs far larger than memory can be streamed. Malformed records are
//! logged and skipped, never fatal.
//!
//! ## Example
//!
//! ```rust
//! use tally_importer::Importer;
//!
//! let mut importer = Importer::new();
//! let input = "a,b,a@gmail.com,d,e\n";
//! let entries = importer.import_from_reader(input.as_bytes());
//! assert_eq!(entries[0].domain, "gmail.com");
//! assert_eq!(entries[0].occurrences, 1);
//! ```

mod config;
mod error;
mod extractor;
mod importer;
mod pipeline;
mod reader;
mod stats;

pub use config::ImporterConfig;
pub use error::{ImporterError, Result};
pub use importer::Importer;
pub use reader::ChunkReader;
pub use stats::ImportStats;

pub use tally_domain_store::{BTreeMapStore, DomainEntry, DomainStore};
