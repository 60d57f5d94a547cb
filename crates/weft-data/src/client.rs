//! HTTP client for storefront endpoints.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{Collection, CollectionsPayload, Product, ProductsPayload, ShopMeta};

/// Read-only storefront API.
///
/// Implementations fetch the public JSON documents a shop exposes. The
/// shop is addressed by bare domain, e.g. `misen.co`.
#[async_trait]
pub trait ShopApi: Send + Sync {
    /// Shop identity from `/meta.json`.
    async fn meta(&self, shop: &str) -> Result<ShopMeta, ApiError>;

    /// All collections from `/collections.json`.
    async fn collections(&self, shop: &str) -> Result<Vec<Collection>, ApiError>;

    /// Products in one collection from `/collections/{handle}/products.json`.
    async fn products(&self, shop: &str, collection: &str) -> Result<Vec<Product>, ApiError>;
}

/// `ShopApi` over HTTP.
pub struct HttpShopApi {
    client: reqwest::Client,
    scheme: String,
}

impl HttpShopApi {
    /// Create a client that talks HTTPS.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            scheme: "https".to_string(),
        }
    }

    /// Override the URL scheme, e.g. `http` against a local fixture server.
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    fn endpoint(&self, shop: &str, path: &str) -> String {
        format!("{}://{}/{}", self.scheme, shop, path)
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        tracing::debug!(%url, "fetching");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        if status >= 400 {
            tracing::warn!(%url, status, "request failed");
            return Err(ApiError::Status {
                status,
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| ApiError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Payload {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

impl Default for HttpShopApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShopApi for HttpShopApi {
    async fn meta(&self, shop: &str) -> Result<ShopMeta, ApiError> {
        self.fetch(&self.endpoint(shop, "meta.json")).await
    }

    async fn collections(&self, shop: &str) -> Result<Vec<Collection>, ApiError> {
        let payload: CollectionsPayload =
            self.fetch(&self.endpoint(shop, "collections.json")).await?;
        Ok(payload.collections)
    }

    async fn products(&self, shop: &str, collection: &str) -> Result<Vec<Product>, ApiError> {
        let path = format!("collections/{collection}/products.json");
        let payload: ProductsPayload = self.fetch(&self.endpoint(shop, &path)).await?;
        Ok(payload.products)
    }
}
