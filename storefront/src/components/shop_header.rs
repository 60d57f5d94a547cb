//! Shop identity header.

use weft_render::{html, Fragment};

use crate::page::MetaResource;

/// Shop name, blurb, and an optional link to the shop itself.
///
/// Never fails: the meta resource falls back to a search suggestion
/// when the shop cannot be reached. The blurb may carry markup and is
/// rendered as-is.
pub(crate) fn shop_header(meta: MetaResource) -> Fragment {
    Fragment::lazy(async move {
        let meta = meta.read().await;

        let visit = meta
            .url
            .map(|url| html! { "<a class=\"cta\" href=\"" (url) "\">Visit shop</a>" });

        Ok(html! {
            "<header>"
            "<h1>" (meta.name) "</h1>"
            "<p>" (meta.description) "</p>"
            (visit)
            "</header>"
        })
    })
}
