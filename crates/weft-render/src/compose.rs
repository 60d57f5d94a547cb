//! Ordered chunk emission from a page tree.

use std::pin::Pin;
use std::task::{Context, Poll};
use std::vec;

use futures::future::BoxFuture;
use futures::{FutureExt, Stream, StreamExt};

use crate::error::RenderError;
use crate::fragment::Fragment;

/// One unit of pending work during the tree walk.
enum Frame {
    Text(String),
    Lazy(BoxFuture<'static, Result<Fragment, RenderError>>),
    List(vec::IntoIter<Fragment>),
    Stream(ChunkStream),
}

impl Frame {
    fn from_fragment(fragment: Fragment) -> Self {
        match fragment {
            Fragment::Text(text) => Frame::Text(text),
            Fragment::Lazy(future) => Frame::Lazy(future),
            Fragment::List(children) => Frame::List(children.into_iter()),
            Fragment::Stream(stream) => Frame::Stream(stream),
        }
    }
}

/// Pull-based stream of rendered chunks, in document order.
///
/// The stream walks the tree depth-first, left to right. A pending lazy
/// node suspends emission at its own position: everything before it has
/// already been yielded, everything after waits its turn. A failed node
/// yields its error and ends the stream; later polls return `None`.
pub struct ChunkStream {
    /// Remaining work. The top of the stack is the current position.
    stack: Vec<Frame>,
}

impl ChunkStream {
    /// Start walking a page tree.
    pub fn new(fragment: Fragment) -> Self {
        Self {
            stack: vec![Frame::from_fragment(fragment)],
        }
    }

    fn fail(&mut self, error: RenderError) -> Poll<Option<Result<String, RenderError>>> {
        self.stack.clear();
        Poll::Ready(Some(Err(error)))
    }
}

impl Stream for ChunkStream {
    type Item = Result<String, RenderError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            let Some(frame) = this.stack.pop() else {
                return Poll::Ready(None);
            };

            match frame {
                Frame::Text(text) => {
                    // Empty literals produce no chunk.
                    if !text.is_empty() {
                        return Poll::Ready(Some(Ok(text)));
                    }
                }
                Frame::Lazy(mut future) => match future.poll_unpin(cx) {
                    Poll::Ready(Ok(fragment)) => {
                        this.stack.push(Frame::from_fragment(fragment));
                    }
                    Poll::Ready(Err(error)) => return this.fail(error),
                    Poll::Pending => {
                        this.stack.push(Frame::Lazy(future));
                        return Poll::Pending;
                    }
                },
                Frame::List(mut children) => {
                    if let Some(child) = children.next() {
                        this.stack.push(Frame::List(children));
                        this.stack.push(Frame::from_fragment(child));
                    }
                }
                Frame::Stream(mut stream) => match stream.poll_next_unpin(cx) {
                    Poll::Ready(Some(Ok(chunk))) => {
                        this.stack.push(Frame::Stream(stream));
                        return Poll::Ready(Some(Ok(chunk)));
                    }
                    Poll::Ready(Some(Err(error))) => return this.fail(error),
                    Poll::Ready(None) => {}
                    Poll::Pending => {
                        this.stack.push(Frame::Stream(stream));
                        return Poll::Pending;
                    }
                },
            }
        }
    }
}
