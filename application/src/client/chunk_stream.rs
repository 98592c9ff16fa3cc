//! Single-pass stream of deep-tier text fragments.

use futures::Stream;
use futures::stream::FusedStream;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc;

enum ChunkState {
    Open(mpsc::Receiver<String>),
    Exhausted,
}

/// Lazy, finite sequence of non-empty text fragments.
///
/// Fragments are produced by the stream pump task spawned in
/// [`ModelClient::invoke_stream`](super::ModelClient::invoke_stream) and
/// delivered through a bounded channel. Once the producer finishes the stream
/// moves to the exhausted state and every later pull yields `None`.
///
/// An exhausted stream does not imply the deep answer is complete: a
/// mid-stream transport failure ends the stream the same way.
///
/// Dropping a `ChunkStream` early stops the pump task at its next send.
pub struct ChunkStream {
    state: ChunkState,
}

impl ChunkStream {
    pub(crate) fn from_receiver(receiver: mpsc::Receiver<String>) -> Self {
        Self {
            state: ChunkState::Open(receiver),
        }
    }

    /// A stream that yields the given fragments and then ends.
    ///
    /// Empty fragments are dropped, matching what the pump task forwards.
    pub fn from_fragments<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fragments: Vec<String> = fragments
            .into_iter()
            .map(Into::into)
            .filter(|f| !f.is_empty())
            .collect();
        let (tx, rx) = mpsc::channel(fragments.len().max(1));
        for fragment in fragments {
            // Capacity covers every fragment, so this cannot fail.
            let _ = tx.try_send(fragment);
        }
        Self::from_receiver(rx)
    }

    /// A stream that is already exhausted.
    pub fn exhausted() -> Self {
        Self {
            state: ChunkState::Exhausted,
        }
    }

    /// Pull the next fragment, waiting for the producer if needed.
    pub async fn next_chunk(&mut self) -> Option<String> {
        let ChunkState::Open(receiver) = &mut self.state else {
            return None;
        };
        match receiver.recv().await {
            Some(chunk) => Some(chunk),
            None => {
                self.state = ChunkState::Exhausted;
                None
            }
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, ChunkState::Exhausted)
    }

    /// Drain the stream and concatenate every fragment.
    pub async fn collect_text(mut self) -> String {
        let mut text = String::new();
        while let Some(chunk) = self.next_chunk().await {
            text.push_str(&chunk);
        }
        text
    }
}

impl Stream for ChunkStream {
    type Item = String;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let ChunkState::Open(receiver) = &mut self.state else {
            return Poll::Ready(None);
        };
        match receiver.poll_recv(cx) {
            Poll::Ready(Some(chunk)) => Poll::Ready(Some(chunk)),
            Poll::Ready(None) => {
                self.state = ChunkState::Exhausted;
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl FusedStream for ChunkStream {
    fn is_terminated(&self) -> bool {
        self.is_exhausted()
    }
}

impl std::fmt::Debug for ChunkStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChunkStream")
            .field("exhausted", &self.is_exhausted())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn yields_fragments_in_order() {
        let mut stream = ChunkStream::from_fragments(["a", "b", "c"]);
        assert_eq!(stream.next_chunk().await.as_deref(), Some("a"));
        assert_eq!(stream.next_chunk().await.as_deref(), Some("b"));
        assert_eq!(stream.next_chunk().await.as_deref(), Some("c"));
        assert_eq!(stream.next_chunk().await, None);
        assert!(stream.is_exhausted());
    }

    #[tokio::test]
    async fn second_pass_yields_nothing() {
        let mut stream = ChunkStream::from_fragments(["only"]);
        let first: Vec<String> = stream.by_ref().collect().await;
        assert_eq!(first, vec!["only".to_string()]);

        let second: Vec<String> = stream.by_ref().collect().await;
        assert!(second.is_empty());
        assert_eq!(stream.next_chunk().await, None);
    }

    #[tokio::test]
    async fn empty_fragments_are_dropped() {
        let stream = ChunkStream::from_fragments(["Hel", "", "lo"]);
        assert_eq!(stream.collect_text().await, "Hello");
    }

    #[tokio::test]
    async fn exhausted_stream_is_terminated() {
        let mut stream = ChunkStream::exhausted();
        assert!(stream.is_terminated());
        assert_eq!(stream.next().await, None);
    }
}
