//! HTTP layer serving the lookup form and screening results.

pub mod error;
pub mod routes;
pub mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::dataset::Dataset;

#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
}

/// Build the application router around a loaded dataset.
pub fn router(dataset: Arc<Dataset>) -> Router {
    let state = AppState { dataset };
    Router::new()
        .route("/", get(routes::index))
        .route("/predict", post(routes::predict))
        .route("/api/predict", post(routes::predict_json))
        .route("/healthz", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(dataset: Arc<Dataset>, host: String, port: u16) -> Result<()> {
    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, athletes = dataset.len(), "serving doping-screen");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router(dataset).into_make_service()).await?;
    Ok(())
}
