use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use salary_dash::{DashboardConfig, create_router};
use tower::ServiceExt;

use crate::utils::{missing_files_config, sample_pipeline, test_config, write_dataset};

const FORM_BODY: &str = "work_year=2023&job_title=Data+Scientist&job_category=Data+Science+and+Research\
&employee_residence=United+States&experience_level=Senior&employment_type=Full-time\
&work_setting=Remote&company_location=United+States&company_size=M";

async fn send(config: DashboardConfig, request: Request<Body>) -> (StatusCode, String) {
    let response = create_router(Arc::new(config)).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/prediction")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_root_shows_overview() {
    let (status, body) = send(missing_files_config(), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Jobs and Salaries in Data Science"));
    assert!(body.contains("value=\"overview\" checked"));

    let (_, overview) = send(missing_files_config(), get("/overview")).await;
    assert_eq!(body, overview);
}

#[tokio::test]
async fn test_exploration_renders_preview_and_tabs() {
    let (status, body) = send(test_config(), get("/exploration")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Head of Dataframe"));
    // Header row plus the first ten data rows
    assert!(body.contains("<tr><th>9</th>"));
    assert!(!body.contains("<tr><th>10</th>"));
    assert!(body.contains("Univariate Analysis"));
    assert!(body.contains("Bivariate Analysis"));
    assert!(body.contains("Multivariate Analysis"));
    // 12 histograms + 5 bivariate + 5 multivariate
    assert_eq!(body.matches("Plotly.newPlot(").count(), 22);
}

#[tokio::test]
async fn test_exploration_of_header_only_dataset() {
    let path = write_dataset("server-header-only", &[]);
    let config = DashboardConfig::default().with_paths(&path, sample_pipeline());
    let (status, body) = send(config, get("/exploration")).await;
    std::fs::remove_file(&path).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("<tr><th>0</th>"));
    assert_eq!(body.matches("Plotly.newPlot(").count(), 22);
}

#[tokio::test]
async fn test_exploration_without_dataset_is_server_error() {
    let (status, body) = send(missing_files_config(), get("/exploration")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("cleaned_df.csv"));
}

#[tokio::test]
async fn test_prediction_form_lists_fields() {
    let (status, body) = send(test_config(), get("/prediction")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Model Regression"));
    assert!(body.contains("Please provide the number of years"));
    assert!(body.contains("Please select your company size"));
    assert!(!body.contains("Prediction Result:"));
}

#[tokio::test]
async fn test_prediction_without_pipeline_is_server_error() {
    let (status, _) = send(missing_files_config(), get("/prediction")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = send(missing_files_config(), post_form(FORM_BODY)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_prediction_submit_shows_result() {
    let (status, body) = send(test_config(), post_form(FORM_BODY)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Prediction Result:"));
    assert!(body.contains("The predicted result is: 100709.96"));
    assert!(body.contains("<option value=\"Senior\" selected>"));
}

#[tokio::test]
async fn test_out_of_set_form_value_is_rejected() {
    let body = FORM_BODY.replace("experience_level=Senior", "experience_level=Guru");
    let (status, _) = send(test_config(), post_form(&body)).await;
    assert!(status.is_client_error());

    let body = FORM_BODY.replace("work_year=2023", "work_year=2019");
    let (status, _) = send(test_config(), post_form(&body)).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_api_predict() {
    let json = r#"{"work_year":2023,"job_title":"Data Scientist","job_category":"Data Science and Research",
        "employee_residence":"United States","experience_level":"Senior","employment_type":"Full-time",
        "work_setting":"Remote","company_location":"United States","company_size":"M"}"#;
    let (status, body) = send(test_config(), post_json(json)).await;
    assert_eq!(status, StatusCode::OK);

    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["salary"], serde_json::json!(100709.96));
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(missing_files_config(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("healthy"));
}
