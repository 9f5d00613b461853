//! Form payloads, JSON DTOs, and page templates.

use askama::Template;
use serde::{Deserialize, Serialize};

use crate::analysis::ScreeningReport;

/// Form payload for the predict endpoints.
#[derive(Debug, Deserialize)]
pub struct PredictForm {
    pub athlete_name: String,
}

/// Landing page with the athlete lookup form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

/// Rendered screening result page.
#[derive(Template)]
#[template(path = "analysis.html")]
pub struct AnalysisTemplate {
    pub report: ScreeningReport,
}

/// Health probe payload.
#[derive(Debug, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
    pub athletes: usize,
}
