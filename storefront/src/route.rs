//! Request path parsing.

/// Path parameters for a storefront page.
///
/// Paths look like `/{shop}/{collection}/{product}`, truncatable from
/// the right. Empty segments are skipped, extra segments ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StorePath {
    /// Shop domain, e.g. `misen.co`.
    pub shop: Option<String>,
    /// Collection handle within the shop.
    pub collection: Option<String>,
    /// Product handle within the collection.
    pub product: Option<String>,
}

impl StorePath {
    /// Parse a request path.
    pub fn parse(path: &str) -> Self {
        let mut segments = path.split('/').filter(|segment| !segment.is_empty());
        Self {
            shop: segments.next().map(str::to_string),
            collection: segments.next().map(str::to_string),
            product: segments.next().map(str::to_string),
        }
    }

    /// Which page this path addresses.
    pub fn kind(&self) -> PageKind {
        if self.product.is_some() {
            PageKind::Product
        } else if self.collection.is_some() {
            PageKind::Collection
        } else if self.shop.is_some() {
            PageKind::Shop
        } else {
            PageKind::Landing
        }
    }
}

/// The four page shapes the storefront serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// No shop chosen yet.
    Landing,
    /// Collection index for a shop.
    Shop,
    /// Product listing for one collection.
    Collection,
    /// Single product detail.
    Product,
}
