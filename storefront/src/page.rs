//! Page assembly.

use std::sync::Arc;

use weft_data::{ApiError, Collection, Product, ShopApi, ShopMeta};
use weft_render::{html, Fragment};
use weft_resource::Resource;

use crate::components::{breadcrumbs, collection_list, product_detail, product_list, shop_header};
use crate::route::StorePath;
use crate::style::{RESET, STYLES, VARIABLES};

/// Shared handle to the catalog API.
pub type Api = Arc<dyn ShopApi>;

pub(crate) type MetaResource = Resource<ShopMeta>;
pub(crate) type CollectionsResource = Resource<Result<Vec<Collection>, ApiError>>;
pub(crate) type ProductsResource = Resource<Result<Vec<Product>, ApiError>>;
pub(crate) type ProductResource = Resource<Result<Option<Product>, ApiError>>;

/// Assemble the page tree for a request path.
///
/// Every fetch the page needs starts here, before any output streams;
/// sections share the settled outcomes rather than refetching. Must be
/// called from within a Tokio runtime.
pub fn store_page(api: Api, path: &StorePath) -> Fragment {
    let StorePath {
        shop,
        collection,
        product,
    } = path.clone();

    let meta = shop.clone().map(|shop| meta_resource(api.clone(), shop));

    let collections = shop.clone().map(|shop| {
        let api = api.clone();
        Resource::new(async move { api.collections(&shop).await })
    });

    let products = shop
        .clone()
        .zip(collection.clone())
        .map(|(shop, collection)| {
            let api = api.clone();
            Resource::new(async move { api.products(&shop, &collection).await })
        });

    // The product page reuses the listing fetch instead of issuing its
    // own request.
    let detail = products.clone().zip(product).map(|(products, handle)| {
        Resource::new(async move {
            let all = products.read().await?;
            Ok(all.into_iter().find(|product| product.handle == handle))
        })
    });

    let header = meta.map(shop_header);

    let crumbs = shop
        .clone()
        .zip(collections.clone())
        .map(|(shop, collections)| breadcrumbs(shop, collection.clone(), collections));

    let body = if let Some(detail) = detail {
        product_detail(detail)
    } else if let Some(((products, shop), collection)) =
        products.zip(shop.clone()).zip(collection)
    {
        product_list(shop, collection, products)
    } else if let Some((collections, shop)) = collections.zip(shop.clone()) {
        collection_list(shop, collections)
    } else {
        Fragment::text("<h3>Search for a shop</h3>")
    };

    let shop_value = shop.unwrap_or_default();

    html! {
        "<html>"
        "<head>"
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1, user-scalable=no\">"
        "<title>" (shop_value.clone()) "</title>"
        "<style>" (RESET) (VARIABLES) (STYLES) "</style>"
        "</head>"
        "<body>"
        "<nav>"
        "<form novalidate name=\"searchform\" method=\"POST\">"
        "<input name=\"shop\" type=\"url\" value=\"" (shop_value) "\" placeholder=\"Enter a shop url…\" />"
        "<input type=\"submit\" value=\"Search\" onclick=\"searchform.action = '/' + searchform.shop.value\"/>"
        "</form>"
        "</nav>"
        (header)
        "<main>"
        (crumbs)
        (body)
        "</main>"
        "</body>"
        "</html>"
    }
}

/// Shop identity, with a search-suggestion fallback when the fetch
/// fails so the header always renders.
fn meta_resource(api: Api, shop: String) -> MetaResource {
    Resource::new(async move {
        match api.meta(&shop).await {
            Ok(meta) => meta,
            Err(error) => {
                tracing::warn!(%shop, %error, "meta fetch failed, serving fallback");
                ShopMeta {
                    name: "No results found".to_string(),
                    description:
                        "Try <a href=\"/misen.co\">misen.co</a> or <a href=\"/buypeel.com\">buypeel.com</a>"
                            .to_string(),
                    url: None,
                }
            }
        }
    })
}
