//! Storefront catalog access.
//!
//! Shopify-style shops expose public JSON documents; this crate fetches
//! and types them:
//! - `/meta.json` - Shop identity
//! - `/collections.json` - Collection listing
//! - `/collections/{handle}/products.json` - Products in a collection

mod client;
mod error;
mod models;

pub use client::*;
pub use error::*;
pub use models::*;
