//! Page tree building blocks.

use std::fmt;
use std::future::Future;

use futures::future::{BoxFuture, FutureExt};

use crate::compose::ChunkStream;
use crate::error::RenderError;

/// A node in the page tree.
///
/// Fragments are inert descriptions of output. Nothing runs until the
/// tree is handed to one of the render drivers, which walk it in
/// document order.
pub enum Fragment {
    /// Literal markup, emitted as-is.
    Text(String),
    /// A deferred computation that resolves to another fragment.
    Lazy(BoxFuture<'static, Result<Fragment, RenderError>>),
    /// An ordered sequence of child fragments.
    List(Vec<Fragment>),
    /// An already-built chunk stream, spliced in place.
    Stream(ChunkStream),
}

impl Fragment {
    /// A fragment that renders nothing.
    pub fn empty() -> Self {
        Fragment::List(Vec::new())
    }

    /// Literal markup.
    pub fn text(text: impl Into<String>) -> Self {
        Fragment::Text(text.into())
    }

    /// Defer a computation.
    ///
    /// Output before this node streams immediately; output after it
    /// waits until the future settles. A failed future fails the whole
    /// render at this position.
    pub fn lazy<F>(future: F) -> Self
    where
        F: Future<Output = anyhow::Result<Fragment>> + Send + 'static,
    {
        Fragment::Lazy(
            future
                .map(|result| result.map_err(RenderError::Fragment))
                .boxed(),
        )
    }

    /// An ordered group of fragments.
    pub fn list(children: Vec<Fragment>) -> Self {
        Fragment::List(children)
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Fragment::Text(text)
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Fragment::Text(text.to_string())
    }
}

impl From<Vec<Fragment>> for Fragment {
    fn from(children: Vec<Fragment>) -> Self {
        Fragment::List(children)
    }
}

impl From<ChunkStream> for Fragment {
    fn from(stream: ChunkStream) -> Self {
        Fragment::Stream(stream)
    }
}

/// `None` renders nothing.
impl<T: Into<Fragment>> From<Option<T>> for Fragment {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Fragment::empty(),
        }
    }
}

impl FromIterator<Fragment> for Fragment {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        Fragment::List(iter.into_iter().collect())
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Fragment::Lazy(_) => f.write_str("Lazy(..)"),
            Fragment::List(children) => f.debug_tuple("List").field(children).finish(),
            Fragment::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}
