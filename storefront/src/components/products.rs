//! Product listing for a collection.

use weft_render::{html, Fragment};

use crate::page::ProductsResource;

/// Linked list of the products in one collection.
///
/// A failed fetch fails the whole page render.
pub(crate) fn product_list(
    shop: String,
    collection: String,
    products: ProductsResource,
) -> Fragment {
    Fragment::lazy(async move {
        let all = products.read().await?;

        if all.is_empty() {
            return Ok(html! { "<p>This collection is empty.</p>" });
        }

        let items: Fragment = all
            .iter()
            .map(|product| {
                html! {
                    "<li><a href=\"/" (shop.clone()) "/" (collection.clone()) "/" (product.handle.clone()) "\">"
                    (product.title.clone())
                    "</a></li>"
                }
            })
            .collect();

        Ok(html! { "<ul>" (items) "</ul>" })
    })
}
