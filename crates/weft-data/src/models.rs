//! Typed storefront documents.

use serde::Deserialize;

/// Shop identity served at `/meta.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShopMeta {
    /// Shop display name.
    pub name: String,
    /// Shop blurb. May contain markup; rendered as-is.
    pub description: String,
    /// Canonical shop URL, when the shop publishes one.
    #[serde(default)]
    pub url: Option<String>,
}

/// A collection listed at `/collections.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Collection {
    pub id: u64,
    /// URL-friendly identifier, unique within the shop.
    pub handle: String,
    pub title: String,
}

/// A product listed at `/collections/{handle}/products.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: u64,
    /// URL-friendly identifier, unique within the shop.
    pub handle: String,
    pub title: String,
}

/// Envelope around the collections endpoint.
#[derive(Debug, Deserialize)]
pub struct CollectionsPayload {
    pub collections: Vec<Collection>,
}

/// Envelope around the products endpoint.
#[derive(Debug, Deserialize)]
pub struct ProductsPayload {
    pub products: Vec<Product>,
}
