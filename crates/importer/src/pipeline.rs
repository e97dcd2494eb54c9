use crate::config::ImporterConfig;
use crate::extractor::{extract_domains, ExtractionCounts};
use crate::reader::ChunkReader;
use crate::stats::ImportStats;
use crossbeam_channel::bounded;
use std::io::Read;
use std::thread;
use tally_domain_store::DomainStore;

/// Drive one import run: chunk the source, fan chunks out to the extractor
/// pool, fan domain keys in to the single aggregator, and drain everything
/// in order.
///
/// Both hand-offs are zero-capacity rendezvous channels, so producers block
/// until a consumer is ready and memory stays bounded by the chunk size times
/// the worker count regardless of input size.
///
/// Shutdown order is the correctness-critical part: the chunk sender is
/// dropped once the input is exhausted, every worker is joined before the
/// last key sender can drop, and only then does the aggregator's loop end.
/// Closing the key channel any earlier would drop keys still held by running
/// workers.
pub fn run<R: Read>(
    source: R,
    config: &ImporterConfig,
    store: &mut (dyn DomainStore + '_),
) -> ImportStats {
    store.clear();

    let mut reader = ChunkReader::new(source, config.chunk_size);
    let mut stats = ImportStats::new();
    let mut counts = ExtractionCounts::default();

    let (chunk_tx, chunk_rx) = bounded::<String>(0);
    let (key_tx, key_rx) = bounded::<String>(0);

    let agg_store = &mut *store;

    thread::scope(|scope| {
        let mut workers = Vec::with_capacity(config.concurrency);
        for _ in 0..config.concurrency {
            let chunk_rx = chunk_rx.clone();
            let key_tx = key_tx.clone();
            workers.push(scope.spawn(move || {
                let mut counts = ExtractionCounts::default();
                for chunk in chunk_rx {
                    counts.merge(extract_domains(&chunk, config, |domain| {
                        // Fails only if the aggregator is gone, which means
                        // the run is already unwinding.
                        let _ = key_tx.send(domain);
                    }));
                }
                counts
            }));
        }
        // The originals must go: the chunk channel closes when the caller
        // thread drops its sender, the key channel when the last worker
        // exits.
        drop(chunk_rx);
        drop(key_tx);

        let aggregator = scope.spawn(move || {
            for domain in key_rx {
                let next = agg_store.get(&domain).unwrap_or(0) + 1;
                agg_store.save(&domain, next);
            }
        });

        while let Some(chunk) = reader.next_chunk() {
            if chunk_tx.send(chunk).is_err() {
                // Every worker exited early; nothing left to feed.
                break;
            }
        }
        drop(chunk_tx);

        for worker in workers {
            match worker.join() {
                Ok(worker_counts) => counts.merge(worker_counts),
                Err(_) => log::error!("extractor worker panicked"),
            }
        }

        if aggregator.join().is_err() {
            log::error!("aggregator panicked");
        }
    });

    stats.chunks = reader.chunks_emitted();
    stats.read_errors = reader.read_errors();
    stats.records = counts.records;
    stats.skipped_arity = counts.bad_arity;
    stats.skipped_email = counts.bad_email;
    stats.skipped_parse = counts.bad_parse;
    stats
}
