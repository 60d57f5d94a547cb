//! Collection index.

use weft_render::{html, Fragment};

use crate::page::CollectionsResource;

/// Linked list of every collection in the shop.
///
/// Renders nothing when the listing cannot be fetched.
pub(crate) fn collection_list(shop: String, collections: CollectionsResource) -> Fragment {
    Fragment::lazy(async move {
        let Ok(all) = collections.read().await else {
            return Ok(Fragment::empty());
        };

        let items: Fragment = all
            .iter()
            .map(|collection| {
                html! {
                    "<li><a href=\"/" (shop.clone()) "/" (collection.handle.clone()) "\">"
                    (collection.title.clone())
                    "</a></li>"
                }
            })
            .collect();

        Ok(html! { "<ul>" (items) "</ul>" })
    })
}
