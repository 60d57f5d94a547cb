//! Full-page rendering against an in-memory catalog.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use futures::TryStreamExt;
use tokio::time::{Duration, Instant};

use weft_data::{ApiError, Collection, Product, ShopApi, ShopMeta};
use weft_render::{render_to_stream, render_to_string};
use weft_storefront::{store_page, StorePath};

/// In-memory catalog with per-endpoint call counters and simulated
/// latency.
struct FakeApi {
    meta: Result<ShopMeta, ApiError>,
    collections: Result<Vec<Collection>, ApiError>,
    products: Result<Vec<Product>, ApiError>,
    meta_delay: Duration,
    products_delay: Duration,
    meta_calls: AtomicUsize,
    collections_calls: AtomicUsize,
    products_calls: AtomicUsize,
}

impl FakeApi {
    fn stocked() -> Self {
        Self {
            meta: Ok(ShopMeta {
                name: "Misen".to_string(),
                description: "Better kitchen tools".to_string(),
                url: Some("https://misen.co".to_string()),
            }),
            collections: Ok(vec![
                collection(1, "kitchen", "Kitchen"),
                collection(2, "knives", "Knives"),
            ]),
            products: Ok(vec![
                product(11, "chef-knife", "Chef's Knife"),
                product(12, "skillet", "Carbon Steel Skillet"),
            ]),
            meta_delay: Duration::ZERO,
            products_delay: Duration::ZERO,
            meta_calls: AtomicUsize::new(0),
            collections_calls: AtomicUsize::new(0),
            products_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ShopApi for FakeApi {
    async fn meta(&self, _shop: &str) -> Result<ShopMeta, ApiError> {
        self.meta_calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.meta_delay).await;
        self.meta.clone()
    }

    async fn collections(&self, _shop: &str) -> Result<Vec<Collection>, ApiError> {
        self.collections_calls.fetch_add(1, Ordering::SeqCst);
        self.collections.clone()
    }

    async fn products(&self, _shop: &str, _collection: &str) -> Result<Vec<Product>, ApiError> {
        self.products_calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.products_delay).await;
        self.products.clone()
    }
}

fn collection(id: u64, handle: &str, title: &str) -> Collection {
    Collection {
        id,
        handle: handle.to_string(),
        title: title.to_string(),
    }
}

fn product(id: u64, handle: &str, title: &str) -> Product {
    Product {
        id,
        handle: handle.to_string(),
        title: title.to_string(),
    }
}

fn status_error(status: u16) -> ApiError {
    ApiError::Status {
        status,
        url: "https://misen.co/meta.json".to_string(),
    }
}

#[tokio::test]
async fn test_collection_index_page() {
    let api = Arc::new(FakeApi::stocked());
    let path = StorePath::parse("/misen.co");

    let html = render_to_string(store_page(api.clone(), &path))
        .await
        .unwrap();

    assert!(html.contains("<title>misen.co</title>"));
    assert!(html.contains("<h1>Misen</h1>"));
    assert!(html.contains("<a class=\"cta\" href=\"https://misen.co\">Visit shop</a>"));
    assert!(html.contains("<li><a href=\"/misen.co/kitchen\">Kitchen</a></li>"));
    assert!(html.contains("<li><a href=\"/misen.co/knives\">Knives</a></li>"));
    assert!(html.contains(
        "<ol class=\"breadcrumbs\"><li><a href=\"/misen.co\">Collections</a></li></ol>"
    ));

    // Breadcrumbs and the index share one collections fetch.
    assert_eq!(api.meta_calls.load(Ordering::SeqCst), 1);
    assert_eq!(api.collections_calls.load(Ordering::SeqCst), 1);
    assert_eq!(api.products_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_product_listing_page() {
    let api = Arc::new(FakeApi::stocked());
    let path = StorePath::parse("/misen.co/kitchen");

    let html = render_to_string(store_page(api.clone(), &path))
        .await
        .unwrap();

    assert!(html.contains("<li><a href=\"/misen.co/kitchen/chef-knife\">Chef's Knife</a></li>"));
    assert!(html.contains("<li><a href=\"/misen.co/kitchen/skillet\">Carbon Steel Skillet</a></li>"));
    // The trail now ends on the current collection.
    assert!(html.contains("<li><a href=\"/misen.co/kitchen\">Kitchen</a></li></ol>"));
    assert_eq!(api.products_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_empty_collection_page() {
    let api = Arc::new(FakeApi {
        products: Ok(Vec::new()),
        ..FakeApi::stocked()
    });
    let path = StorePath::parse("/misen.co/kitchen");

    let html = render_to_string(store_page(api.clone(), &path))
        .await
        .unwrap();

    assert!(html.contains("<p>This collection is empty.</p>"));
}

#[tokio::test]
async fn test_product_detail_shares_the_listing_fetch() {
    let api = Arc::new(FakeApi::stocked());
    let path = StorePath::parse("/misen.co/kitchen/chef-knife");

    let html = render_to_string(store_page(api.clone(), &path))
        .await
        .unwrap();

    assert!(html.contains("<h3>Chef's Knife</h3>"));
    assert_eq!(api.products_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_unknown_product_fails_the_render() {
    let api = Arc::new(FakeApi::stocked());
    let path = StorePath::parse("/misen.co/kitchen/unobtainium");

    let error = render_to_string(store_page(api.clone(), &path))
        .await
        .unwrap_err();

    assert!(error.to_string().contains("product not in this collection"));
}

#[tokio::test]
async fn test_meta_failure_serves_fallback_header() {
    let api = Arc::new(FakeApi {
        meta: Err(status_error(500)),
        ..FakeApi::stocked()
    });
    let path = StorePath::parse("/misen.co");

    let html = render_to_string(store_page(api.clone(), &path))
        .await
        .unwrap();

    assert!(html.contains("<h1>No results found</h1>"));
    assert!(html.contains("<a href=\"/misen.co\">misen.co</a>"));
    assert!(html.contains("<a href=\"/buypeel.com\">buypeel.com</a>"));
    assert!(!html.contains("Visit shop"));
}

#[tokio::test]
async fn test_collections_failure_keeps_the_page_alive() {
    let api = Arc::new(FakeApi {
        collections: Err(status_error(503)),
        ..FakeApi::stocked()
    });
    let path = StorePath::parse("/misen.co");

    let html = render_to_string(store_page(api.clone(), &path))
        .await
        .unwrap();

    // Guarded sections vanish; header and chrome still render.
    assert!(html.contains("<h1>Misen</h1>"));
    assert!(!html.contains("<ol class=\"breadcrumbs\">"));
    assert!(!html.contains("<li>"));
}

#[tokio::test]
async fn test_products_failure_fails_the_page() {
    let api = Arc::new(FakeApi {
        products: Err(status_error(500)),
        ..FakeApi::stocked()
    });
    let path = StorePath::parse("/misen.co/kitchen");

    let error = render_to_string(store_page(api.clone(), &path))
        .await
        .unwrap_err();

    assert!(error.to_string().contains("HTTP error: 500"));
}

#[tokio::test]
async fn test_landing_page_makes_no_requests() {
    let api = Arc::new(FakeApi::stocked());
    let path = StorePath::parse("/");

    let html = render_to_string(store_page(api.clone(), &path))
        .await
        .unwrap();

    assert!(html.contains("<h3>Search for a shop</h3>"));
    assert!(html.contains("<title></title>"));
    assert!(!html.contains("<header>"));
    assert_eq!(api.meta_calls.load(Ordering::SeqCst), 0);
    assert_eq!(api.collections_calls.load(Ordering::SeqCst), 0);
    assert_eq!(api.products_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_streaming_matches_buffered() {
    let path = StorePath::parse("/misen.co/kitchen");

    let buffered = render_to_string(store_page(Arc::new(FakeApi::stocked()), &path))
        .await
        .unwrap();

    let chunks: Vec<Vec<u8>> = render_to_stream(store_page(Arc::new(FakeApi::stocked()), &path))
        .try_collect()
        .await
        .unwrap();

    assert_eq!(String::from_utf8(chunks.concat()).unwrap(), buffered);
}

#[tokio::test(start_paused = true)]
async fn test_fetches_run_concurrently() {
    let api = Arc::new(FakeApi {
        meta_delay: Duration::from_millis(50),
        products_delay: Duration::from_millis(10),
        ..FakeApi::stocked()
    });
    let path = StorePath::parse("/misen.co/kitchen");

    let started = Instant::now();
    let html = render_to_string(store_page(api.clone(), &path))
        .await
        .unwrap();
    let elapsed = started.elapsed();

    assert!(html.contains("Chef's Knife"));
    // Fetches overlap: total tracks the slowest, not the sum.
    assert!(elapsed >= Duration::from_millis(50));
    assert!(elapsed < Duration::from_millis(60));
}
