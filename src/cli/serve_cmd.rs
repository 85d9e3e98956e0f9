//! Run the HTTP gateway.

use anyhow::{Context, Result};
use pagesense::content::ContentClient;
use pagesense::server::{self, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Run `pagesense serve --api URL --port N`.
pub async fn run(api: &str, port: u16, base_url: &str) -> Result<()> {
    let client = ContentClient::new(api).context("invalid content API base url")?;
    let state = AppState {
        source: Arc::new(client),
        base_url: base_url.trim_end_matches('/').to_string(),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(%addr, api, "starting gateway");
    server::serve(addr, state)
        .await
        .context("gateway terminated")?;
    Ok(())
}
