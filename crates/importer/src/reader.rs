use std::io::Read;

/// Record separator between customer rows.
pub const RECORD_SEPARATOR: u8 = b'\n';

/// Splits a raw byte stream into record-aligned chunks.
///
/// Reads the source in `chunk_size` windows and holds the unterminated tail
/// of each window back as a residual, so every emitted chunk ends exactly on
/// a record separator and a record straddling a read boundary is never split
/// across chunks. Chunks keep their trailing separator: the concatenation of
/// all emitted chunks reproduces the input byte-for-byte.
///
/// A non-EOF read error is logged and that read is skipped; the stream is not
/// aborted. `chunk_size` bounds hand-off granularity only — a single record
/// longer than the window is accumulated across reads and emitted whole.
pub struct ChunkReader<R> {
    source: R,
    scratch: Vec<u8>,
    residual: Vec<u8>,
    eof: bool,
    chunks_emitted: u64,
    read_errors: u64,
}

impl<R: Read> ChunkReader<R> {
    pub fn new(source: R, chunk_size: usize) -> Self {
        // A zero-length window would make every read return Ok(0) and look
        // like EOF; the smallest window that can make progress is one byte.
        Self {
            source,
            scratch: vec![0; chunk_size.max(1)],
            residual: Vec::new(),
            eof: false,
            chunks_emitted: 0,
            read_errors: 0,
        }
    }

    /// Next record-aligned chunk, or `None` once the stream is exhausted and
    /// the residual has been flushed.
    pub fn next_chunk(&mut self) -> Option<String> {
        loop {
            if self.eof {
                return self.flush_residual();
            }

            let n = match self.source.read(&mut self.scratch) {
                Ok(0) => {
                    self.eof = true;
                    continue;
                }
                Ok(n) => n,
                Err(e) => {
                    // Recoverable-I/O policy: skip this read and keep going.
                    log::warn!("error reading input stream, skipping read: {e}");
                    self.read_errors += 1;
                    continue;
                }
            };

            self.residual.extend_from_slice(&self.scratch[..n]);

            let Some(pos) = last_separator(&self.residual) else {
                // No complete record yet; keep accumulating.
                continue;
            };

            let rest = self.residual.split_off(pos + 1);
            let complete = std::mem::replace(&mut self.residual, rest);
            return Some(self.emit(complete));
        }
    }

    fn flush_residual(&mut self) -> Option<String> {
        if self.residual.is_empty() {
            return None;
        }
        let tail = std::mem::take(&mut self.residual);
        Some(self.emit(tail))
    }

    fn emit(&mut self, bytes: Vec<u8>) -> String {
        self.chunks_emitted += 1;
        match String::from_utf8(bytes) {
            Ok(chunk) => chunk,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }

    pub fn chunks_emitted(&self) -> u64 {
        self.chunks_emitted
    }

    pub fn read_errors(&self) -> u64 {
        self.read_errors
    }
}

fn last_separator(buf: &[u8]) -> Option<usize> {
    buf.iter().rposition(|&b| b == RECORD_SEPARATOR)
}
