//! HTTP surface of the dashboard
//!
//! Every request re-runs its view from the top on the blocking pool. The only
//! state shared between requests is the immutable configuration.

use std::sync::Arc;

use axum::{
    Form, Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tokio::net::TcpListener;

use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::model::{PredictionRecord, load_pipeline};
use crate::prediction::{SalaryPrediction, predict_salary};
use crate::views::layout::error_page;
use crate::views::{render_exploration, render_overview, render_prediction};

type AppState = Arc<DashboardConfig>;

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        log::error!("Render failed: {self}");
        (StatusCode::INTERNAL_SERVER_ERROR, Html(error_page(&self.to_string()))).into_response()
    }
}

/// Body of a failed `/api/predict` call
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create the dashboard router
pub fn create_router(config: AppState) -> Router {
    Router::new()
        .route("/", get(overview))
        .route("/overview", get(overview))
        .route("/exploration", get(exploration))
        .route("/prediction", get(prediction_form).post(prediction_submit))
        .route("/api/predict", post(api_predict))
        .route("/health", get(health_check))
        .with_state(config)
}

/// Bind `config.bind_addr` and serve until the process exits
///
/// # Errors
/// Fails if the address cannot be bound or the server stops with an IO error.
pub async fn serve(config: DashboardConfig) -> Result<()> {
    let listener = TcpListener::bind(config.bind_addr).await?;
    log::info!("Salary dashboard listening on http://{}", listener.local_addr()?);
    log::info!("Dataset: {}", config.dataset_path.display());
    log::info!("Pipeline: {}", config.pipeline_path.display());

    axum::serve(listener, create_router(Arc::new(config))).await?;
    Ok(())
}

/// Run a synchronous render on the blocking pool
async fn run_blocking<T, F>(render: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(render)
        .await
        .map_err(|e| DashboardError::TaskError(e.to_string()))?
}

async fn overview() -> Html<String> {
    Html(render_overview())
}

async fn exploration(State(config): State<AppState>) -> Result<Html<String>> {
    run_blocking(move || render_exploration(&config)).await.map(Html)
}

async fn prediction_form(State(config): State<AppState>) -> Result<Html<String>> {
    run_blocking(move || render_prediction(&config, None)).await.map(Html)
}

async fn prediction_submit(
    State(config): State<AppState>,
    Form(record): Form<PredictionRecord>,
) -> Result<Html<String>> {
    run_blocking(move || render_prediction(&config, Some(&record)))
        .await
        .map(Html)
}

async fn api_predict(
    State(config): State<AppState>,
    Json(record): Json<PredictionRecord>,
) -> std::result::Result<Json<SalaryPrediction>, (StatusCode, Json<ApiError>)> {
    let result = run_blocking(move || {
        let pipeline = load_pipeline(&config.pipeline_path)?;
        predict_salary(&pipeline, &record)
    })
    .await;

    result.map(Json).map_err(|e| {
        let status = match e {
            DashboardError::UnknownCategory { .. } | DashboardError::InvalidField { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        log::warn!("Prediction request failed: {e}");
        (status, Json(ApiError { error: e.to_string() }))
    })
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
