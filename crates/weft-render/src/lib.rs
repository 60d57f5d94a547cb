//! Streaming page composition from fragment trees.
//!
//! This crate renders pages as ordered chunk streams:
//! - `Fragment` - Inert page tree nodes
//! - `Template` / `html!` - Ordered template assembly
//! - `ChunkStream` - Depth-first chunk emission
//! - `render_*` drivers - Buffered, pull-stream, and sink-backed delivery

mod compose;
mod error;
mod fragment;
mod render;
mod template;

pub use compose::*;
pub use error::*;
pub use fragment::*;
pub use render::*;
pub use template::*;
