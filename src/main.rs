use axum::{routing::get, Extension, Router};
use cyber_standards::dataset::loader::load_dataset;
use cyber_standards::dataset::types::Dataset;
use cyber_standards::search::handlers::{handle_get_filters, handle_search_standards};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:5000".parse()?;
    let mut data_dir = PathBuf::from("data");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--data" => {
                data_dir = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    tracing::info!("Loading standards data from {}", data_dir.display());

    // A broken data directory is not fatal: serve an empty dataset and let
    // the operator fix the exports without the process flapping.
    let dataset = match load_dataset(&data_dir) {
        Ok(dataset) => dataset,
        Err(err) => {
            tracing::error!(
                "Failed to load standards database: {}. Starting with empty data.",
                err
            );
            Dataset::default()
        }
    };
    let dataset = Arc::new(dataset);

    let app = Router::new()
        .route("/api/standards", get(handle_search_standards))
        .route("/api/filters", get(handle_get_filters))
        .layer(Extension(dataset));

    tracing::info!("API server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
