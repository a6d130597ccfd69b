use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures::Stream;

/// Default size of each emitted chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Ordered, fixed-size chunks of a stored payload.
///
/// Every chunk but the last is exactly `chunk_size` bytes. Chunks are
/// zero-copy slices of the payload, so forwarding them to a response body
/// allocates nothing per chunk. The stream is consumed as it is read and
/// cannot be restarted.
#[derive(Debug)]
pub struct AssetStream {
    remaining: Bytes,
    chunk_size: usize,
}

impl AssetStream {
    pub fn new(payload: Bytes, chunk_size: usize) -> Self {
        Self {
            remaining: payload,
            chunk_size: chunk_size.max(1),
        }
    }
}

impl Stream for AssetStream {
    type Item = Result<Bytes, io::Error>;

    fn poll_next(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.remaining.is_empty() {
            return Poll::Ready(None);
        }
        let n = self.chunk_size.min(self.remaining.len());
        let chunk = self.remaining.split_to(n);
        Poll::Ready(Some(Ok(chunk)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let chunks = self.remaining.len().div_ceil(self.chunk_size);
        (chunks, Some(chunks))
    }
}
