//! Output drivers for page trees.

use std::fmt::Display;

use futures::{Sink, SinkExt, Stream, TryStreamExt};

use crate::compose::ChunkStream;
use crate::error::RenderError;
use crate::fragment::Fragment;

/// Render a tree to a single string, waiting for every part.
///
/// Any fragment failure fails the whole render; partial output is
/// discarded.
pub async fn render_to_string(fragment: Fragment) -> Result<String, RenderError> {
    let mut stream = ChunkStream::new(fragment);
    let mut out = String::new();
    while let Some(chunk) = stream.try_next().await? {
        out.push_str(&chunk);
    }
    Ok(out)
}

/// Render a tree as a pull-based byte stream, one item per chunk.
pub fn render_to_stream(
    fragment: Fragment,
) -> impl Stream<Item = Result<Vec<u8>, RenderError>> + Unpin {
    ChunkStream::new(fragment).map_ok(String::into_bytes)
}

/// Drive a tree into a byte sink, closing the sink when the page ends.
///
/// On fragment failure the sink is closed after whatever was already
/// delivered; sent bytes are not retracted.
pub async fn render_into<S, E>(fragment: Fragment, mut sink: S) -> Result<(), RenderError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    let mut stream = ChunkStream::new(fragment);
    let mut sent = 0usize;
    loop {
        match stream.try_next().await {
            Ok(Some(chunk)) => {
                sink.send(chunk.into_bytes())
                    .await
                    .map_err(|e| RenderError::Sink(e.to_string()))?;
                sent += 1;
            }
            Ok(None) => {
                sink.close()
                    .await
                    .map_err(|e| RenderError::Sink(e.to_string()))?;
                tracing::debug!(chunks = sent, "render complete");
                return Ok(());
            }
            Err(error) => {
                let _ = sink.close().await;
                return Err(error);
            }
        }
    }
}
