//! HTTP route handlers for Axum.

use askama::Template;
use axum::{extract::State, response::Html, Form, Json};
use tracing::warn;

use crate::analysis::{self, ScreeningReport};
use crate::api::error::ApiError;
use crate::api::types::{AnalysisTemplate, HealthDto, IndexTemplate, PredictForm};

use super::AppState;

pub async fn index() -> Result<Html<String>, ApiError> {
    let page = IndexTemplate;
    Ok(Html(page.render()?))
}

pub async fn predict(
    State(state): State<AppState>,
    Form(form): Form<PredictForm>,
) -> Result<Html<String>, ApiError> {
    let report = run_screening(&state, &form.athlete_name)?;
    let page = AnalysisTemplate { report };
    Ok(Html(page.render()?))
}

pub async fn predict_json(
    State(state): State<AppState>,
    Form(form): Form<PredictForm>,
) -> Result<Json<ScreeningReport>, ApiError> {
    let report = run_screening(&state, &form.athlete_name)?;
    Ok(Json(report))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok",
        athletes: state.dataset.len(),
    })
}

fn run_screening(state: &AppState, athlete_name: &str) -> Result<ScreeningReport, ApiError> {
    let record = state.dataset.find(athlete_name).ok_or_else(|| {
        warn!(%athlete_name, "athlete not found");
        ApiError::AthleteNotFound
    })?;
    Ok(analysis::screen(record))
}
