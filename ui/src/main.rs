//! Standards Explorer UI
//!
//! A small server-rendered front end for the standards API. Every user
//! action arrives as a plain GET (form submit or button link); the handler
//! runs the filter controller against the data client and renders the whole
//! page. State lives in the controller behind a mutex, overwritten by
//! whichever search resolves last.

use axum::extract::{Query, State};
use axum::response::Html;
use axum::{routing::get, Router};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::client::DataClient;
use crate::controller::{FilterController, FilterSelection};
use crate::render::render_page;
use cyber_standards::search::types::FilterOptions;

mod client;
mod controller;
mod highlight;
mod render;


#[derive(Clone)]
struct AppState {
    client: DataClient,
    controller: Arc<Mutex<FilterController>>,
}

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    query: String,
    #[serde(default)]
    section: String,
    #[serde(default)]
    source: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let api_url =
        std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
    let bind_addr: SocketAddr = std::env::var("UI_BIND")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
        .parse()?;

    let state = AppState {
        client: DataClient::new(&api_url),
        controller: Arc::new(Mutex::new(FilterController::new())),
    };

    let app = Router::new()
        .route("/", get(index))
        .route("/search", get(search))
        .route("/reset", get(reset))
        .with_state(state);

    tracing::info!("UI listening on {} (API at {})", bind_addr, api_url);
    axum::serve(tokio::net::TcpListener::bind(bind_addr).await?, app).await?;

    Ok(())
}

/// Dropdown options are refetched per render; a failure degrades to empty
/// dropdowns rather than an error page.
async fn load_options(client: &DataClient) -> FilterOptions {
    match client.fetch_filter_options().await {
        Ok(options) => options,
        Err(err) => {
            tracing::warn!("Failed to load filter options: {}", err);
            FilterOptions::default()
        }
    }
}

async fn index(State(state): State<AppState>) -> Html<String> {
    let options = load_options(&state.client).await;
    let controller = state.controller.lock().await;
    Html(render_page(
        &options,
        controller.selection(),
        controller.state(),
    ))
}

async fn search(State(state): State<AppState>, Query(params): Query<SearchQuery>) -> Html<String> {
    let selection = FilterSelection {
        query: params.query,
        section: params.section,
        source: params.source,
    };

    let options = load_options(&state.client).await;
    let mut controller = state.controller.lock().await;
    controller.run_search(&state.client, selection).await;
    Html(render_page(
        &options,
        controller.selection(),
        controller.state(),
    ))
}

/// Clears all three inputs, then re-triggers with empty filters so the
/// unfiltered result set comes back.
async fn reset(State(state): State<AppState>) -> Html<String> {
    let options = load_options(&state.client).await;
    let mut controller = state.controller.lock().await;
    controller.reset();
    controller
        .run_search(&state.client, FilterSelection::default())
        .await;
    Html(render_page(
        &options,
        controller.selection(),
        controller.state(),
    ))
}
