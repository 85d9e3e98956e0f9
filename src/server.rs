//! HTTP gateway exposing the classify/resolve pipeline.
//!
//! - `GET /healthz` — liveness.
//! - `GET /classify/{country}/{*path}` — classification only.
//! - `GET /pages/{country}/{*path}` — classify, resolve against the content
//!   source, and attach JSON-LD. `Invalid` intents and upstream not-found
//!   both answer 404.
//!
//! Query parameters: `family` (route family, default `best`) and `page`
//! (listing page number, default 1).

use crate::content::ContentSource;
use crate::dispatch::{self, ResolvedPage};
use crate::error::Error;
use crate::route::{classify, PageIntent, RouteFamily, RouteProfile};
use crate::seo::jsonld;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

/// Shared gateway state.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ContentSource>,
    /// Public site origin used for canonical URLs in JSON-LD.
    pub base_url: String,
}

#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    family: Option<RouteFamily>,
    page: Option<u32>,
}

/// Build the gateway router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/classify/:country/*path", get(classify_handler))
        .route("/pages/:country/*path", get(pages_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process is interrupted.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<(), Error> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "gateway listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("received shutdown signal");
        })
        .await?;
    Ok(())
}

async fn healthz() -> &'static str {
    "ok"
}

async fn classify_handler(
    Path((_country, path)): Path<(String, String)>,
    Query(query): Query<RouteQuery>,
) -> Json<serde_json::Value> {
    let profile = RouteProfile::for_family(query.family.unwrap_or(RouteFamily::Best));
    let segments = split_segments(&path);
    let intent = classify(&segments, &profile);
    Json(json!({
        "family": profile.family.path_prefix(),
        "segments": segments,
        "intent": intent,
    }))
}

async fn pages_handler(
    State(state): State<AppState>,
    Path((country, path)): Path<(String, String)>,
    Query(query): Query<RouteQuery>,
) -> Response {
    let profile = RouteProfile::for_family(query.family.unwrap_or(RouteFamily::Best));
    let segments = split_segments(&path);
    let intent = classify(&segments, &profile);

    if intent == PageIntent::Invalid {
        return not_found();
    }

    let plan = dispatch::plan(&intent, &country);
    let resolved = match dispatch::resolve(state.source.as_ref(), &plan, query.page.unwrap_or(1)).await
    {
        Ok(resolved) => resolved,
        Err(err) => {
            error!(%err, "upstream resolution failed");
            return (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": "upstream_unavailable" })),
            )
                .into_response();
        }
    };

    let structured = match &resolved {
        ResolvedPage::Listing { scope, listing } => Some(json!({
            "breadcrumbs": jsonld::breadcrumbs(&intent, &country, &state.base_url),
            "document": jsonld::item_list(scope, listing, &state.base_url),
        })),
        ResolvedPage::Detail { item, .. } => Some(json!({
            "breadcrumbs": jsonld::breadcrumbs(&intent, &country, &state.base_url),
            "document": jsonld::article(item, &country, &state.base_url),
        })),
        ResolvedPage::NotFound => None,
    };

    if structured.is_none() {
        return not_found();
    }

    Json(json!({
        "intent": intent,
        "data": resolved,
        "jsonld": structured,
    }))
    .into_response()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not_found" }))).into_response()
}

/// Split a wildcard path into segments, dropping empty parts. A bare value
/// without slashes becomes a one-element list.
fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
