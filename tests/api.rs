use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use doping_screen::api;
use doping_screen::dataset::{
    AthleteRecord, Dataset, FinancialRecord, MedicalTest, TestStatus, Transaction, Trip,
};
use serde_json::Value;
use tower::ServiceExt;

fn sample_dataset() -> Arc<Dataset> {
    let records = vec![AthleteRecord {
        name: "Borisov".into(),
        medical_reports: vec![
            MedicalTest {
                test_name: "EPO panel".into(),
                date: "2025-02-03".into(),
                status: TestStatus::Abnormal,
            },
            MedicalTest {
                test_name: "Blood passport".into(),
                date: "2025-03-18".into(),
                status: TestStatus::Abnormal,
            },
            MedicalTest {
                test_name: "Testosterone ratio".into(),
                date: "2025-04-07".into(),
                status: TestStatus::Abnormal,
            },
        ],
        financial: FinancialRecord {
            transactions: vec![Transaction {
                date: "2025-01-20".into(),
                amount: 300.0,
                suspicious: false,
            }],
        },
        travel_history: vec![Trip {
            destination: "Oslo".into(),
            date: "2025-01-05".into(),
            flagged: false,
        }],
    }];
    Arc::new(Dataset::from_records(records).expect("index sample records"))
}

fn form_request(uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .expect("build form request")
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body")
        .to_vec()
}

#[tokio::test]
async fn index_serves_the_lookup_form() {
    let response = api::router(sample_dataset())
        .oneshot(
            Request::builder()
                .uri("/")
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("route request");

    assert_eq!(response.status(), StatusCode::OK);
    let html = String::from_utf8(body_bytes(response).await).expect("utf-8 page");
    assert!(html.contains("athlete_name"));
}

#[tokio::test]
async fn unknown_athlete_returns_structured_404() {
    let response = api::router(sample_dataset())
        .oneshot(form_request("/predict", "athlete_name=nobody"))
        .await
        .expect("route request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json: Value = serde_json::from_slice(&body_bytes(response).await).expect("json body");
    assert_eq!(json["error"], "Athlete not found");
}

#[tokio::test]
async fn predict_renders_the_analysis_page() {
    let response = api::router(sample_dataset())
        .oneshot(form_request("/predict", "athlete_name=BORISOV"))
        .await
        .expect("route request");

    assert_eq!(response.status(), StatusCode::OK);
    let html = String::from_utf8(body_bytes(response).await).expect("utf-8 page");
    assert!(html.contains("Borisov"));
    assert!(html.contains("Suspicious activity detected"));
    assert!(html.contains("EPO panel"));
}

#[tokio::test]
async fn predict_json_reports_counts_and_verdict() {
    let response = api::router(sample_dataset())
        .oneshot(form_request("/api/predict", "athlete_name=borisov"))
        .await
        .expect("route request");

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = serde_json::from_slice(&body_bytes(response).await).expect("json body");
    assert_eq!(json["athlete_name"], "Borisov");
    assert_eq!(json["medical_analysis"]["total_tests"], 3);
    assert_eq!(json["medical_analysis"]["abnormal_count"], 3);
    assert_eq!(json["financial_analysis"]["suspicious_count"], 0);
    assert_eq!(json["travel_analysis"]["flagged_count"], 0);
    assert_eq!(
        json["result"],
        "Suspicious activity detected: further investigation required for doping"
    );
}

#[tokio::test]
async fn health_reports_dataset_size() {
    let response = api::router(sample_dataset())
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("route request");

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = serde_json::from_slice(&body_bytes(response).await).expect("json body");
    assert_eq!(json["status"], "ok");
    assert_eq!(json["athletes"], 1);
}
