//! weft-storefront - Render a storefront page to stdout.
//!
//! Paths:
//! - `/` - Shop search landing
//! - `/{shop}` - Collection index
//! - `/{shop}/{collection}` - Product listing
//! - `/{shop}/{collection}/{product}` - Product detail

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use futures::TryStreamExt;
use tokio::io::AsyncWriteExt;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use weft_data::HttpShopApi;
use weft_render::{render_to_stream, render_to_string};
use weft_storefront::{store_page, StorePath, StorefrontConfig};

/// Render a storefront page to stdout
#[derive(Parser)]
#[command(name = "weft-storefront")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Request path, e.g. /misen.co/kitchen
    path: String,

    /// Emit chunks as they become ready instead of buffering the page
    #[arg(long)]
    stream: bool,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => StorefrontConfig::load(path)?,
        None => StorefrontConfig::default(),
    };

    let api = Arc::new(HttpShopApi::new().with_scheme(config.api.scheme));
    let path = StorePath::parse(&cli.path);
    tracing::debug!(kind = ?path.kind(), "rendering");

    let page = store_page(api, &path);

    if cli.stream {
        let mut chunks = render_to_stream(page);
        let mut stdout = tokio::io::stdout();
        while let Some(chunk) = chunks.try_next().await? {
            stdout.write_all(&chunk).await?;
            stdout.flush().await?;
        }
    } else {
        println!("{}", render_to_string(page).await?);
    }

    Ok(())
}
