//! Page sections.
//!
//! Sections mirror the page top to bottom: header, breadcrumb trail,
//! then one of the catalog listings.

mod breadcrumbs;
mod collections;
mod product;
mod products;
mod shop_header;

pub(crate) use breadcrumbs::breadcrumbs;
pub(crate) use collections::collection_list;
pub(crate) use product::product_detail;
pub(crate) use products::product_list;
pub(crate) use shop_header::shop_header;
