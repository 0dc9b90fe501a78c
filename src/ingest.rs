//! Appending bytes pulled from a stream.

use std::io::{self, ErrorKind, Read};

use crate::BufferBuilder;

impl BufferBuilder {
    /// Performs one read of up to `max_len` bytes from `source` and appends whatever was read.
    ///
    /// `offset` is the position the caller's record logic associates with this read; it does
    /// not seek `source` and does not change what is appended. Returns the number of bytes read,
    /// which is less than `max_len` on a short read and 0 at end of stream.
    ///
    /// Errors from `source` are returned unchanged, except for `ErrorKind::Interrupted`, which
    /// is retried. A `max_len` too large to allocate fails with `ErrorKind::OutOfMemory`. After an
    /// error the builder holds exactly what it held before the call.
    pub fn ingest_from<R>(
        &mut self,
        source: &mut R,
        offset: usize,
        max_len: usize,
    ) -> io::Result<usize>
    where
        R: Read + ?Sized,
    {
        let start = self.out.len();
        self.out.try_reserve(max_len).map_err(out_of_memory)?;
        self.out.resize(start + max_len, 0);

        let n = loop {
            match source.read(&mut self.out[start..]) {
                Ok(n) => break n.min(max_len),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.out.truncate(start);
                    return Err(e);
                }
            }
        };
        self.out.truncate(start + n);
        self.record_ingest(offset, max_len, n);
        Ok(n)
    }

    /// The asynchronous form of [`BufferBuilder::ingest_from`]. The calling task yields while
    /// `source` has no data ready; the bytes are appended exactly as `ingest_from` would.
    ///
    /// There is no cancellation. Dropping the returned future before it completes leaves the
    /// builder unchanged.
    #[cfg(feature = "tokio")]
    pub async fn ingest_from_async<R>(
        &mut self,
        source: &mut R,
        offset: usize,
        max_len: usize,
    ) -> io::Result<usize>
    where
        R: tokio::io::AsyncRead + Unpin + ?Sized,
    {
        use tokio::io::AsyncReadExt;

        // The read lands in scratch space so that a dropped future cannot leave padding behind.
        let mut scratch = Vec::new();
        scratch.try_reserve_exact(max_len).map_err(out_of_memory)?;
        scratch.resize(max_len, 0);
        let n = source.read(&mut scratch).await?;
        self.append_slice(&scratch[..n]);
        self.record_ingest(offset, max_len, n);
        Ok(n)
    }

    fn record_ingest(&self, offset: usize, max_len: usize, read: usize) {
        tracing::trace!(offset, requested = max_len, read, "ingested from stream");
        if read == 0 && max_len != 0 {
            tracing::debug!("stream is at end of data");
        }
    }
}

fn out_of_memory(e: std::collections::TryReserveError) -> io::Error {
    io::Error::new(ErrorKind::OutOfMemory, e)
}
