//! Streaming server-side storefront browser.
//!
//! Renders Shopify-style shop pages for a request path:
//! - `/` - Shop search landing
//! - `/{shop}` - Shop header and collection index
//! - `/{shop}/{collection}` - Product listing
//! - `/{shop}/{collection}/{product}` - Product detail
//!
//! Page chrome streams immediately; catalog-backed sections fill in as
//! their fetches settle.

mod components;
mod config;
mod page;
mod route;
mod style;

pub use config::{ApiConfig, StorefrontConfig};
pub use page::{store_page, Api};
pub use route::{PageKind, StorePath};
