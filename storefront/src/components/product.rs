//! Single product detail.

use anyhow::Context;
use weft_render::{html, Fragment};

use crate::page::ProductResource;

/// Title of the selected product.
///
/// An unknown handle or a failed fetch fails the whole page render.
pub(crate) fn product_detail(product: ProductResource) -> Fragment {
    Fragment::lazy(async move {
        let product = product
            .read()
            .await?
            .context("product not in this collection")?;

        Ok(html! { "<h3>" (product.title) "</h3>" })
    })
}
