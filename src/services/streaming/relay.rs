use super::buffer::LineBuffer;
use bytes::Bytes;
use futures::stream::{Stream, StreamExt};
use std::convert::Infallible;
use std::fmt::Display;

pub const DATA_PREFIX: &str = "data:";

/// Re-frames one upstream line.
///
/// Returns `None` for lines that are not `data:` lines and for payloads that
/// fail to parse as JSON; the latter are logged and dropped.
pub fn reframe_line(line: &str) -> Option<String> {
    let payload = line.strip_prefix(DATA_PREFIX)?;
    match serde_json::from_str::<serde_json::Value>(payload) {
        Ok(value) => Some(format!("data: {}\n", value)),
        Err(e) => {
            tracing::warn!("Error parsing chunk: {} (payload: {:?})", e, payload);
            None
        }
    }
}

/// Turns an upstream body stream into the downstream event stream.
///
/// The stream ends when the upstream ends. An upstream error is logged and
/// ends the stream without any further framing.
pub fn relay_events<S, E>(upstream: S) -> impl Stream<Item = Result<Bytes, Infallible>>
where
    S: Stream<Item = Result<Bytes, E>> + Send + 'static,
    E: Display + Send + 'static,
{
    async_stream::stream! {
        let mut upstream = Box::pin(upstream);
        let mut lines = LineBuffer::new();
        let mut forwarded = 0usize;

        while let Some(chunk) = upstream.next().await {
            match chunk {
                Ok(bytes) => {
                    for line in lines.push(&bytes) {
                        if let Some(frame) = reframe_line(&line) {
                            forwarded += 1;
                            yield Ok(Bytes::from(frame));
                        }
                    }
                }
                Err(e) => {
                    tracing::error!("Error processing chat: {}", e);
                    return;
                }
            }
        }

        if let Some(frame) = lines.finish().as_deref().and_then(reframe_line) {
            forwarded += 1;
            yield Ok(Bytes::from(frame));
        }
        tracing::debug!("Upstream stream finished after {} events", forwarded);
    }
}
