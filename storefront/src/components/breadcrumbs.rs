//! Collection breadcrumb trail.

use weft_render::{html, Fragment};

use crate::page::CollectionsResource;

/// Trail from the shop's collection index to the current collection.
///
/// Renders nothing when the collection listing cannot be fetched.
pub(crate) fn breadcrumbs(
    shop: String,
    collection: Option<String>,
    collections: CollectionsResource,
) -> Fragment {
    Fragment::lazy(async move {
        let Ok(all) = collections.read().await else {
            return Ok(Fragment::empty());
        };

        let current = collection
            .as_deref()
            .and_then(|handle| all.iter().find(|candidate| candidate.handle == handle));
        let trail = current.map(|collection| {
            html! {
                "<li><a href=\"/" (shop.clone()) "/" (collection.handle.clone()) "\">"
                (collection.title.clone())
                "</a></li>"
            }
        });

        Ok(html! {
            "<ol class=\"breadcrumbs\">"
            "<li><a href=\"/" (shop) "\">Collections</a></li>"
            (trail)
            "</ol>"
        })
    })
}
