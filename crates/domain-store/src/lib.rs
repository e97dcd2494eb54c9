//! # Tally Domain Store
//!
//! Ordered counting store for email-domain occurrence tallies.
//!
//! The store is a deliberate seam: the import pipeline only depends on the
//! [`DomainStore`] trait, so the backing structure is pluggable. The default
//! backend is [`BTreeMapStore`], which keeps entries sorted by domain key at
//! all times. A test double may substitute an unordered backend when a test
//! does not assert ordering.
//!
//! ## Contract
//!
//! - [`DomainStore::get_all`] returns entries ascending by domain key.
//! - Writes go through a single writer (the pipeline's aggregator), so
//!   implementations do not need interior locking.
//! - [`DomainStore::clear`] is called at the start of every run so one store
//!   instance can be reused across imports.

mod store;
mod types;

pub use store::{BTreeMapStore, DomainStore};
pub use types::DomainEntry;
